// src/main.rs
use signup_portal::config::Config;
use signup_portal::routes::create_router;
use signup_portal::AppState;
use std::sync::Arc;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load configuration
    dotenvy::dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info,tower_http=debug")),
        )
        .with_target(true)
        .with_level(true)
        .with_line_number(true)
        .init();

    tracing::info!("🚀 Starting signup portal...");

    let config = Config::from_env()?;
    let addr = config.server_addr()?;

    tracing::info!("🔌 Auth service: {}", config.auth_service_url);
    tracing::info!("↪️  Callback url: {}", config.callback_url);
    if config.enable_hsts {
        tracing::info!("🔒 HSTS enabled");
    }

    let state = Arc::new(AppState::new(config)?);
    let app = create_router(state);

    tracing::info!("✅ Listening on {}", addr);
    tracing::info!("🌐 Signup: http://{}/signup", addr);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
