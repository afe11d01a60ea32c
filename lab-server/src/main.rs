use lab_server::{Config, Server, ServerState, print_banner, setup_environment};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // 1. dotenv, work directory, logging
    let _log_guard = setup_environment()?;

    print_banner();

    tracing::info!("Cosmo Lab Server starting...");

    // 2. Configuration
    let config = Config::from_env();

    // 3. State: catalog, record store, sessions
    let state = ServerState::initialize(&config).await?;

    // 4. HTTP server
    let server = Server::with_state(config, state);

    if let Err(e) = server.run().await {
        tracing::error!("Server error: {}", e);
        return Err(e.into());
    }

    Ok(())
}
