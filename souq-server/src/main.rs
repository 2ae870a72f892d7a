use color_eyre::eyre::Result;
use souq::{
    PostgresCartStore, PostgresFavoriteStore, PostgresProductStore, PostgresUserStore,
    ShopService, configure_postgresql,
    adapters::{auth::JwtAuthConfig, config::Settings},
};
use tracing_error::ErrorLayer;
use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    color_eyre::install().expect("Failed to install color_eyre");
    init_tracing().expect("Failed to initialize tracing");

    // Load configuration
    dotenvy::dotenv().ok();
    let config = Settings::load()?;

    // Setup database connection pool and run migrations
    let pg_pool = configure_postgresql(&config.postgres).await?;

    // Create stores
    let user_store = PostgresUserStore::new(pg_pool.clone());
    let product_store = PostgresProductStore::new(pg_pool.clone());
    let cart_store = PostgresCartStore::new(pg_pool.clone());
    let favorite_store = PostgresFavoriteStore::new(pg_pool);

    // Create the shop service using the library
    let shop_service = ShopService::new(
        user_store,
        product_store,
        cart_store,
        favorite_store,
        JwtAuthConfig::from(config.auth.jwt.clone()),
    );

    // CORS is only enabled when origins are configured
    let allowed_origins =
        (!config.auth.allowed_origins.is_empty()).then(|| config.auth.allowed_origins.clone());

    // Run as standalone server
    let listener = tokio::net::TcpListener::bind(config.application.address()).await?;
    tracing::info!("Starting shop service...");

    shop_service
        .run_standalone(listener, allowed_origins)
        .await?;

    Ok(())
}

pub fn init_tracing() -> Result<()> {
    let fmt_layer = fmt::layer().compact();

    let filter_layer = EnvFilter::try_from_default_env().or_else(|_| EnvFilter::try_new("info"))?;

    tracing_subscriber::registry()
        .with(filter_layer)
        .with(fmt_layer)
        .with(ErrorLayer::default())
        .init();

    Ok(())
}
