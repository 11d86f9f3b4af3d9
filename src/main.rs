// main.rs
use create_db::{bootstrap, config::Config};
use sea_orm::Database;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let config = Config::from_env();
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let db = Database::connect(&config.database_url).await?;
    let post = bootstrap::run(&db).await?;
    tracing::debug!(post = ?post, "bootstrap finished");

    db.close().await?;
    Ok(())
}
