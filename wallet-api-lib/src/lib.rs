pub(crate) mod services;
mod spawn_wallet_api;
mod wallet_api_config;
mod wallet_app_state;

pub use crate::{
    spawn_wallet_api::{spawn_wallet_api, spawn_wallet_api_with_wallet_store},
    wallet_api_config::WalletApiConfig,
    wallet_app_state::WalletAppState,
};
