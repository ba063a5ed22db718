use std::{
    collections::HashMap,
    sync::{Arc, RwLock},
};
use wallet_store::{Error, Result, StorageTransaction, WalletRecord};

#[derive(Clone, Default)]
struct WalletStorageMockState {
    /// Maps wallet id to its current balance.
    balance_m: HashMap<uuid::Uuid, i64>,
}

/// In-memory WalletStorage for tests.  update_balance checks and mutates under a single
/// write-lock acquisition, which serializes concurrent mutations the same way the real
/// backend's row lock does.
#[derive(Clone)]
pub struct WalletStorageMock {
    state_la: Arc<RwLock<WalletStorageMockState>>,
}

impl WalletStorageMock {
    pub fn new() -> Self {
        Self {
            state_la: Arc::new(RwLock::new(WalletStorageMockState::default())),
        }
    }
}

#[async_trait::async_trait]
impl wallet_store::WalletStorage for WalletStorageMock {
    async fn begin_transaction(&self) -> Result<Box<dyn StorageTransaction>> {
        Ok(Box::new(WalletStorageMockTransaction))
    }
    async fn create_wallet(
        &self,
        _transaction_o: Option<&mut dyn StorageTransaction>,
        wallet_record: &WalletRecord,
    ) -> Result<()> {
        let mut state_g = self.state_la.write().unwrap();
        state_g
            .balance_m
            .entry(wallet_record.wallet_id)
            .or_insert(wallet_record.balance);
        Ok(())
    }
    async fn get_wallet_record(
        &self,
        _transaction_o: Option<&mut dyn StorageTransaction>,
        wallet_id: &uuid::Uuid,
    ) -> Result<Option<WalletRecord>> {
        let state_g = self.state_la.read().unwrap();
        Ok(state_g.balance_m.get(wallet_id).map(|&balance| WalletRecord {
            wallet_id: *wallet_id,
            balance,
        }))
    }
    async fn update_balance(
        &self,
        _transaction_o: Option<&mut dyn StorageTransaction>,
        wallet_id: &uuid::Uuid,
        delta: i64,
    ) -> Result<i64> {
        let mut state_g = self.state_la.write().unwrap();
        let balance = state_g
            .balance_m
            .get_mut(wallet_id)
            .ok_or(Error::WalletNotFound(*wallet_id))?;
        let new_balance = balance
            .checked_add(delta)
            .ok_or(Error::StorageError("balance arithmetic overflow".into()))?;
        if new_balance < 0 {
            return Err(Error::NotEnoughBalance(*wallet_id));
        }
        *balance = new_balance;
        Ok(new_balance)
    }
}

/// Mock transactions are no-ops; mutations apply immediately, and a failed update makes
/// no mutation, so there is never anything to roll back.
#[derive(Clone, Debug)]
struct WalletStorageMockTransaction;

impl std::ops::Drop for WalletStorageMockTransaction {
    fn drop(&mut self) {
        // Nothing to do
    }
}

#[async_trait::async_trait]
impl StorageTransaction for WalletStorageMockTransaction {
    fn as_any_mut(&mut self) -> &mut dyn std::any::Any {
        self
    }
    async fn commit(self: Box<Self>) -> Result<()> {
        Ok(())
    }
    async fn rollback(self: Box<Self>) -> Result<()> {
        Ok(())
    }
}
