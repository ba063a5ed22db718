use crate::{Result, StorageTransaction, WalletRecord};

/// Object-safe storage capability for wallet rows.  Calls against different wallet ids
/// proceed independently; update_balance against one wallet id serializes on that row.
#[async_trait::async_trait]
pub trait WalletStorage: Send + Sync + 'static {
    /// Begin a transaction against the backing store.
    async fn begin_transaction(&self) -> Result<Box<dyn StorageTransaction>>;
    /// Insert a new wallet row.  If a row with that id already exists, this is a silent
    /// no-op and the existing balance is preserved.
    async fn create_wallet(
        &self,
        transaction_o: Option<&mut dyn StorageTransaction>,
        wallet_record: &WalletRecord,
    ) -> Result<()>;
    /// Point read of a wallet row.  Takes no row lock.  Will return None if no row
    /// exists for the given id.
    async fn get_wallet_record(
        &self,
        transaction_o: Option<&mut dyn StorageTransaction>,
        wallet_id: &uuid::Uuid,
    ) -> Result<Option<WalletRecord>>;
    /// Atomically apply `balance += delta` to the row identified by wallet_id, returning
    /// the new balance.  The row is read under an exclusive lock for the duration of the
    /// enclosing transaction; if the post-lock balance plus delta would be negative, the
    /// update is rejected with Error::NotEnoughBalance and nothing is applied.  If
    /// transaction_o is None, the impl runs the lock-check-update sequence in a
    /// transaction of its own, committing on success and rolling back on failure.
    async fn update_balance(
        &self,
        transaction_o: Option<&mut dyn StorageTransaction>,
        wallet_id: &uuid::Uuid,
        delta: i64,
    ) -> Result<i64>;
}
