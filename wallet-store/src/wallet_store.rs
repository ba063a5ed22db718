use crate::{
    Error, OperationRequest, OperationType, Result, StorageTransaction, WalletRecord, WalletStorage,
};
use std::sync::Arc;

/// Operation processor for wallet balance mutations.  Enforces the business rules on an
/// OperationRequest and delegates the mutation itself to the WalletStorage impl, which
/// applies it under a row-exclusive lock.
#[derive(Clone)]
pub struct WalletStore {
    wallet_storage_a: Arc<dyn WalletStorage>,
}

impl WalletStore {
    /// Create a new WalletStore using the given WalletStorage implementation.
    pub fn new(wallet_storage_a: Arc<dyn WalletStorage>) -> Self {
        Self { wallet_storage_a }
    }
    /// Begin a transaction against the backing storage.
    pub async fn begin_transaction(&self) -> Result<Box<dyn StorageTransaction>> {
        self.wallet_storage_a.begin_transaction().await
    }
    /// Idempotent creation; an existing row with the same id is left untouched.
    pub async fn create_wallet(
        &self,
        transaction_o: Option<&mut dyn StorageTransaction>,
        wallet_record: &WalletRecord,
    ) -> Result<()> {
        self.wallet_storage_a
            .create_wallet(transaction_o, wallet_record)
            .await
    }
    /// Retrieve the current persisted state of the given wallet.
    pub async fn get_wallet(
        &self,
        transaction_o: Option<&mut dyn StorageTransaction>,
        wallet_id: &uuid::Uuid,
    ) -> Result<WalletRecord> {
        self.wallet_storage_a
            .get_wallet_record(transaction_o, wallet_id)
            .await?
            .ok_or(Error::WalletNotFound(*wallet_id))
    }
    /// Validate and commit one deposit or withdrawal.  The sufficient-funds check for
    /// withdrawals happens inside update_balance, after the row lock is acquired, in the
    /// same transaction as the update, so two racing withdrawals serialize on the lock
    /// and the loser observes the already-decremented balance.
    pub async fn process_operation(&self, operation_request: &OperationRequest) -> Result<()> {
        if operation_request.wallet_id.is_nil() {
            return Err(Error::InvalidWalletId(
                "wallet id must not be the nil UUID".into(),
            ));
        }
        if operation_request.amount <= 0 {
            return Err(Error::InvalidAmount(operation_request.amount));
        }

        let mut transaction_b = self.wallet_storage_a.begin_transaction().await?;
        // Existence check, so a missing wallet surfaces as WalletNotFound rather than
        // falling through to the update.  Plain read; no row lock is taken here.
        self.wallet_storage_a
            .get_wallet_record(Some(transaction_b.as_mut()), &operation_request.wallet_id)
            .await?
            .ok_or(Error::WalletNotFound(operation_request.wallet_id))?;

        let delta = match operation_request.operation_type {
            OperationType::Deposit => operation_request.amount,
            OperationType::Withdraw => -operation_request.amount,
            OperationType::Unknown => {
                return Err(Error::UnknownOperation);
            }
        };
        let balance = self
            .wallet_storage_a
            .update_balance(
                Some(transaction_b.as_mut()),
                &operation_request.wallet_id,
                delta,
            )
            .await?;
        transaction_b.commit().await?;
        tracing::debug!(
            "processed {:?} of {} against wallet {}; new balance is {}",
            operation_request.operation_type,
            operation_request.amount,
            operation_request.wallet_id,
            balance,
        );
        Ok(())
    }
}
