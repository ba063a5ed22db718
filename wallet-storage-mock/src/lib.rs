mod wallet_storage_mock;

pub use crate::wallet_storage_mock::WalletStorageMock;
