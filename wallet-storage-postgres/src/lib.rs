mod wallet_storage_postgres;

pub use crate::wallet_storage_postgres::WalletStoragePostgres;
