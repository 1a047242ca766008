use grubdash::prelude::*;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new("info,tower_http=debug")),
        )
        .init();

    let path = std::env::var(CONFIG_PATH_ENV).unwrap_or_else(|_| DEFAULT_CONFIG_PATH.to_string());
    let config = AppConfig::load(&path)?;

    tracing::info!(
        dishes = config.seed.dishes.len(),
        orders = config.seed.orders.len(),
        "seeding stores"
    );

    ServerBuilder::new()
        .with_server_config(config.server.clone())
        .register_module(GrubDashModule::from_seed(&config.seed))?
        .serve(&config.server.bind_address())
        .await
}
