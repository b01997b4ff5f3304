use anyhow::Context;
use migration::{Migrator, MigratorTrait};
use portfolio_api::config::AppConfig;
use portfolio_api::seed::seed_all;
use sea_orm::{ConnectOptions, Database};
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let env = std::env::var("RUST_ENV").unwrap_or_else(|_| "development".to_string());
    if dotenvy::from_filename(format!(".env.{}", env)).is_err() {
        dotenvy::dotenv().ok();
    }

    let config = AppConfig::from_env().context("invalid configuration")?;

    let mut opt = ConnectOptions::new(config.store.url.clone());
    opt.connect_timeout(config.store.connect_timeout)
        .acquire_timeout(config.store.connect_timeout)
        .sqlx_logging(false);

    let db = Database::connect(opt)
        .await
        .context("failed to connect to database for seeding")?;
    info!("Database connected for seeding");

    Migrator::up(&db, None)
        .await
        .context("failed to run migrations")?;

    let report = seed_all(&db).await.context("failed to seed data")?;
    info!(?report, "Data seeded successfully");

    Ok(())
}
