mod error;
mod operation_request;
mod operation_type;
mod storage_transaction;
mod wallet_record;
mod wallet_storage;
mod wallet_store;

pub use crate::{
    error::Error, operation_request::OperationRequest, operation_type::OperationType,
    storage_transaction::StorageTransaction, wallet_record::WalletRecord,
    wallet_storage::WalletStorage, wallet_store::WalletStore,
};
pub type Result<T> = std::result::Result<T, Error>;
