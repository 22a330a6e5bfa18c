//! Fetch bills from a running backend and print this month's dashboard
//! views.
//!
//! Usage: cargo run -p tally-client --example dashboard -- http://localhost:4000

use tally_client::{ClientConfig, ClientResult};
use tally_engine::{TimeRange, ViewParams, derive_views};
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> ClientResult<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| "info".into()))
        .init();

    let base_url = std::env::args()
        .nth(1)
        .unwrap_or_else(|| "http://localhost:4000".to_string());

    let client = ClientConfig::new(base_url).build_http_client();
    let bills = client.fetch_bills().await?;

    let params = ViewParams::new(chrono::Utc::now()).with_range(TimeRange::Month);
    let views = derive_views(&bills, &params);

    println!(
        "bills: {}  revenue: {:.2}  customers: {}  avg: {:.2}",
        views.summary.total_bills,
        views.summary.total_amount,
        views.summary.total_customers,
        views.summary.average_bill,
    );
    for customer in views.customers.iter().take(5) {
        println!(
            "  due {:>10.2}  {}",
            customer.pending_amount,
            customer.name.as_deref().unwrap_or("(walk-in)"),
        );
    }
    for product in &views.top_products {
        println!(
            "  sold {:>8.0}  {}",
            product.quantity,
            product.name.as_deref().unwrap_or("(unnamed)"),
        );
    }

    Ok(())
}
