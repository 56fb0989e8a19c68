//! API Server Binary Entry Point
//!
//! Usage: cargo run --features api --bin api_server

use farmops_planner::{create_router, AppState, PlannerConfig, ServerConfig};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize tracing (structured logging)
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| {
                    // Default log level: info for our crate, warn for others
                    "farmops_planner=info,tower_http=debug,axum=debug,warn".into()
                }),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    tracing::info!("Starting API server...");

    let planner = PlannerConfig::from_env();
    let server = ServerConfig::from_env();

    tracing::info!("Configuration:");
    tracing::info!("  TASK_DURATION_DAYS: {}", planner.task_duration_days);
    tracing::info!("  PROJECTION_YEARS: {}", planner.projection_years);
    tracing::info!("  PRICE_GROWTH_PCT: {}", planner.price_growth_pct);
    tracing::info!("  BIND: {}", server.socket_addr());

    let state = AppState::new(planner);
    let app = create_router(state);

    let addr = server.socket_addr();
    let listener = tokio::net::TcpListener::bind(&addr).await?;
    tracing::info!("Server listening on {}", addr);

    axum::serve(listener, app).await?;

    Ok(())
}
