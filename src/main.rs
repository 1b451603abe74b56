use anyhow::Context;
use tower_http::cors::CorsLayer;
use tracing_subscriber::EnvFilter;

use ml_chat_handler::{config::Config, routes};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    let config = Config::from_env().context("invalid service configuration")?;

    let env_filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(config.default_log_filter()));
    tracing_subscriber::fmt().with_env_filter(env_filter).init();

    tracing::info!("Chat handler initialized with rule-based system");
    tracing::debug!("Loaded configuration: {:?}", config);

    let cors = CorsLayer::very_permissive();
    let app = routes::create_router().layer(cors);

    let addr = config.bind_addr();
    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .with_context(|| format!("failed to bind {}", addr))?;

    tracing::info!("Starting ML service on port {}", config.port);
    axum::serve(listener, app).await.context("server error")?;

    Ok(())
}
