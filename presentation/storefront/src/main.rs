use dotenvy::dotenv;

use storefront::config::app_config::AppConfig;
use storefront::setup::dependency_injection::DependencyContainer;
use storefront::view::session::Storefront;

/// Storefront Entry Point
///
/// Loads configuration, wires the cart engine and catalog adapters, then
/// opens one session and prints what the list and cart screens would show.
#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // 1. Initialize tracing with RUST_LOG env filter
    let env_filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info"));
    tracing_subscriber::fmt().with_env_filter(env_filter).init();

    // 2. Load environment variables
    dotenv().ok();

    // 3. Load configuration
    let config = AppConfig::from_env();

    // 4. Wire dependencies
    let container = DependencyContainer::new(&config)?;

    // 5. Open the session
    let mut storefront = Storefront::new(&container);
    storefront.load().await;

    if let Some(err) = storefront.catalog_error() {
        println!("Catalog unavailable ({}), showing an empty list", err);
    }
    for item in storefront.product_list() {
        println!("[{}] {} {}", item.key, item.title, item.price_label);
    }

    let cart = storefront.cart_view();
    println!("Cart: {} lines, EST. TOTAL {}", cart.lines.len(), cart.total_label);
    for line in &cart.lines {
        println!("  - [{}] {} {}", line.key, line.title, line.price_label);
    }

    Ok(())
}
