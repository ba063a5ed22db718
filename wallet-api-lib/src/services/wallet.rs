use crate::WalletAppState;
use axum::{
    extract::{Path, State},
    http::StatusCode,
    routing::{get, post},
    Json, Router,
};
use wallet_store::{Error, OperationRequest, WalletRecord, WalletStore};

pub fn get_routes(wallet_store: WalletStore) -> Router {
    let wallet_app_state = WalletAppState { wallet_store };

    Router::new()
        .route("/api/v1/wallet", post(process_operation))
        .route("/api/v1/wallets/:wallet_id", get(get_wallet_balance))
        .with_state(wallet_app_state)
}

/// Maps the closed error enum onto client-facing status codes.  Domain errors are
/// matched by discriminant; everything else is an opaque server error.
fn http_status_for_error(error: &Error) -> StatusCode {
    match error {
        Error::InvalidAmount(_)
        | Error::InvalidWalletId(_)
        | Error::NotEnoughBalance(_)
        | Error::UnknownOperation => StatusCode::BAD_REQUEST,
        Error::WalletNotFound(_) => StatusCode::NOT_FOUND,
        Error::StorageError(_) => StatusCode::INTERNAL_SERVER_ERROR,
    }
}

#[tracing::instrument(err(Debug), skip(wallet_app_state))]
async fn process_operation(
    State(wallet_app_state): State<WalletAppState>,
    Json(operation_request): Json<OperationRequest>,
) -> Result<(), (StatusCode, String)> {
    wallet_app_state
        .wallet_store
        .process_operation(&operation_request)
        .await
        .map_err(|e| (http_status_for_error(&e), e.to_string()))
}

#[tracing::instrument(err(Debug), skip(wallet_app_state))]
async fn get_wallet_balance(
    State(wallet_app_state): State<WalletAppState>,
    Path(wallet_id): Path<String>,
) -> Result<Json<WalletRecord>, (StatusCode, String)> {
    let wallet_id = uuid::Uuid::parse_str(wallet_id.as_str()).map_err(|err| {
        (
            StatusCode::BAD_REQUEST,
            format!("malformed wallet id: {}", err),
        )
    })?;
    // Plain read against the pool; no transaction and no row lock.
    let wallet_record = wallet_app_state
        .wallet_store
        .get_wallet(None, &wallet_id)
        .await
        .map_err(|e| (http_status_for_error(&e), e.to_string()))?;
    Ok(Json(wallet_record))
}
