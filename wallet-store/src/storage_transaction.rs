use crate::Result;

/// Object-safe transaction handle over the backing store.  The Drop impl must roll the
/// transaction back if it was neither committed nor rolled back explicitly.
#[allow(drop_bounds)]
#[async_trait::async_trait]
pub trait StorageTransaction: std::ops::Drop + Send + Sync {
    /// This is so a WalletStorage impl can downcast this StorageTransaction to its
    /// expected transaction type.
    fn as_any_mut(&mut self) -> &mut dyn std::any::Any;
    /// Commit the transaction, consuming it in the process.
    async fn commit(self: Box<Self>) -> Result<()>;
    /// Rollback the transaction, consuming it in the process.
    async fn rollback(self: Box<Self>) -> Result<()>;
}

#[cfg(feature = "sqlx-postgres")]
#[async_trait::async_trait]
impl StorageTransaction for sqlx::Transaction<'static, sqlx::Postgres> {
    fn as_any_mut(&mut self) -> &mut dyn std::any::Any {
        self
    }
    async fn commit(self: Box<Self>) -> Result<()> {
        Ok((*self).commit().await?)
    }
    async fn rollback(self: Box<Self>) -> Result<()> {
        Ok((*self).rollback().await?)
    }
}
