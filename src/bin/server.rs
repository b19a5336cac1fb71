//! Pharmacy API server
//!
//! Configuration comes from the YAML file named by `PHARMACY_CONFIG` and the
//! `PHARMACY_*` / `DATABASE_URL` environment variables. `RUST_LOG` takes
//! precedence over the configured log filter.

use anyhow::Result;
use pharmacy::config::AppConfig;
use pharmacy::server::{ServerBuilder, Stores};
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<()> {
    let config = AppConfig::load()?;

    let filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(&config.logging.filter))?;
    tracing_subscriber::fmt().with_env_filter(filter).init();

    let stores = Stores::from_config(&config.storage).await?;

    let addr = config.bind_address();
    println!("\n🏥 Pharmacy API Server running on http://{}", addr);
    println!("\n📚 Endpoints:");
    for endpoint in stores.registry()?.endpoints() {
        println!("  {}", endpoint);
    }
    println!("  {:<15} /health\n", "GET");

    ServerBuilder::new()
        .with_stores(stores)
        .serve(&addr)
        .await
}
