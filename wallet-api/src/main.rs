use clap::Parser;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // The local settings file is optional; environment variables and defaults cover
    // everything it would set.
    let _ = dotenvy::from_filename("config.env");

    // It's necessary to specify EnvFilter::from_default_env in order to use RUST_LOG env var.
    tracing_subscriber::fmt()
        .with_target(true)
        .with_line_number(true)
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .compact()
        .init();

    let wallet_api_config = wallet_api_lib::WalletApiConfig::parse();

    // Spawn the wallet API, returning a JoinHandle to the task.  Failure to connect to
    // the database or to run migrations is fatal; the process does not start serving.
    let wallet_api_join_handle = wallet_api_lib::spawn_wallet_api(wallet_api_config).await?;
    // Join the task by awaiting it.
    wallet_api_join_handle.await?;

    Ok(())
}
