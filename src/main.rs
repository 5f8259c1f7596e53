mod contact;
mod dashboard;
mod deal;
mod error;
mod lead;
mod notification;
mod reminder;
mod routes;
mod seed;
mod session;
mod state;
mod store;
mod task;

use routes::create_router;
use state::{AppState, Config};
use store::create_store;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load environment variables
    dotenv::dotenv().ok();

    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info,crm_dashboard=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    // Load configuration
    let config = Config::from_env();

    let store = create_store(config.seed_demo_data);
    let state = AppState::new(&config, store);

    if config.auto_login {
        state.session_service.login().await?;
    }

    let app = create_router(state.clone());

    let addr = format!("{}:{}", config.host, config.port);
    tracing::info!("Server starting on http://{}", addr);
    tracing::info!("Swagger UI available at http://{}/swagger-ui", addr);

    let listener = tokio::net::TcpListener::bind(&addr).await?;
    axum::serve(listener, app)
        .with_graceful_shutdown(async {
            if let Err(e) = tokio::signal::ctrl_c().await {
                tracing::error!("Failed to listen for shutdown signal: {:?}", e);
            }
        })
        .await?;

    // Stop the reminder timer before exiting
    if state.session_service.status().await.active {
        state.session_service.logout().await?;
    }

    tracing::info!("Server stopped");
    Ok(())
}
