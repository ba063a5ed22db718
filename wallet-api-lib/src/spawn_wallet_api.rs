use crate::WalletApiConfig;
use anyhow::Context;
use std::sync::Arc;

/// Connect to PostgreSQL, run migrations, and serve the wallet API on the configured
/// port.  Failure to connect or migrate is surfaced here, before serving begins.
pub async fn spawn_wallet_api(
    wallet_api_config: WalletApiConfig,
) -> anyhow::Result<tokio::task::JoinHandle<()>> {
    tracing::debug!("{:?}", wallet_api_config);

    let pg_pool = sqlx::postgres::PgPoolOptions::new()
        .max_connections(wallet_api_config.database_max_connections)
        .acquire_timeout(std::time::Duration::from_secs(3))
        .connect(&wallet_api_config.database_url())
        .await
        .context("can't connect to database")?;

    let wallet_store = wallet_store::WalletStore::new(Arc::new(
        wallet_storage_postgres::WalletStoragePostgres::open_and_run_migrations(pg_pool).await?,
    ));

    spawn_wallet_api_with_wallet_store(wallet_api_config.port, wallet_store).await
}

/// Serve the wallet API over the given WalletStore.  Split out from spawn_wallet_api so
/// tests can serve a non-PostgreSQL storage backend.
pub async fn spawn_wallet_api_with_wallet_store(
    listen_port: u16,
    wallet_store: wallet_store::WalletStore,
) -> anyhow::Result<tokio::task::JoinHandle<()>> {
    let middleware_stack = tower::ServiceBuilder::new()
        .layer(tower_http::compression::CompressionLayer::new())
        .layer(
            tower_http::trace::TraceLayer::new_for_http()
                .make_span_with(
                    tower_http::trace::DefaultMakeSpan::new().level(tracing::Level::INFO),
                )
                .on_response(
                    tower_http::trace::DefaultOnResponse::new().level(tracing::Level::INFO),
                ),
        )
        .layer(tower_http::cors::CorsLayer::permissive())
        .into_inner();

    let app = axum::Router::new()
        .merge(crate::services::wallet::get_routes(wallet_store))
        .layer(middleware_stack)
        .route("/health", axum::routing::get(|| async { "OK" }));

    // This has to be 0.0.0.0 otherwise it won't work in a docker container.
    // 127.0.0.1 is only the loopback device, and isn't available outside the host.
    let listener = tokio::net::TcpListener::bind(format!("0.0.0.0:{}", listen_port)).await?;
    tracing::info!("wallet API listening on port {}", listen_port);

    Ok(tokio::task::spawn(async move {
        let _ = axum::serve(listener, app).await;
    }))
}
