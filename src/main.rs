use tracing_subscriber::EnvFilter;
use trip_planner_devtools::config::AppConfig;
use trip_planner_devtools::AppState;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let cfg = AppConfig::from_env();
    let app = trip_planner_devtools::router(AppState::in_memory());

    let listener = tokio::net::TcpListener::bind(&cfg.bind_addr).await?;
    tracing::info!("mock payment server listening on {}", cfg.bind_addr);
    axum::serve(listener, app).await?;
    Ok(())
}
