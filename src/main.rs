use tracing_subscriber::EnvFilter;

use portfolio_api::{config::AppConfig, database, routes, state::AppState};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load .env if present so cargo run picks up API_KEY, DATABASE_URL, etc.
    let _ = dotenvy::dotenv();

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new("portfolio_api=info,tower_http=info")),
        )
        .init();

    let config = AppConfig::from_env()?;

    // Connect once at startup; a store outage here is fatal, no retry.
    let pool = match database::connect(&config.database_url).await {
        Ok(pool) => {
            tracing::info!("database connected");
            pool
        }
        Err(e) => {
            tracing::error!("error connecting to database: {}", e);
            std::process::exit(1);
        }
    };
    database::ensure_schema(&pool).await?;

    let bind_addr = format!("0.0.0.0:{}", config.port);
    let listener = tokio::net::TcpListener::bind(&bind_addr).await?;
    tracing::info!("server running on port {}", config.port);

    let app = routes::router(AppState::new(config, pool));
    axum::serve(listener, app).await?;

    Ok(())
}
