#[derive(Clone)]
pub struct WalletAppState {
    pub wallet_store: wallet_store::WalletStore,
}
