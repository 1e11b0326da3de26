use gate_server::config::ServerConfig;
use gate_server::store::JsonFileGateStore;
use gate_server::web::{AppState, create_router};
use tracing::info;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let config = ServerConfig::from_env()?;

    // Gate data is re-read on every request, so edits take effect immediately
    let store = JsonFileGateStore::new(&config.gates_path);
    info!(path = %store.path().display(), "serving gate data");

    let state = AppState::new(store);
    let app = create_router(state);

    let listener = tokio::net::TcpListener::bind(config.bind_addr).await?;
    info!("Gate planner listening on http://{}", config.bind_addr);
    info!("  GET /health                                  - Health check");
    info!("  GET /gates                                   - All gates");
    info!("  GET /gates/{{code}}                            - One gate");
    info!("  GET /gates/{{code}}/to/{{target}}                - Cheapest route");
    info!("  GET /transport/{{distance}}?passengers=&parking= - Cheapest vehicle");

    axum::serve(listener, app).await?;
    Ok(())
}
