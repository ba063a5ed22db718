use std::borrow::Cow;

#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("Invalid operation amount: {0}; amount must be positive")]
    InvalidAmount(i64),
    #[error("Invalid wallet id: {0}")]
    InvalidWalletId(Cow<'static, str>),
    #[error("Not enough balance in wallet {0}")]
    NotEnoughBalance(uuid::Uuid),
    #[error("Storage error: {0}")]
    StorageError(Cow<'static, str>),
    #[error("Unknown operation type")]
    UnknownOperation,
    #[error("Wallet not found: {0}")]
    WalletNotFound(uuid::Uuid),
}

#[cfg(feature = "sqlx-postgres")]
impl From<sqlx::Error> for Error {
    fn from(err: sqlx::Error) -> Self {
        Self::StorageError(err.to_string().into())
    }
}
