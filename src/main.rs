use mewayz_client::lifecycle::{seed_sample_data, setup_tracing, ApiSystem};
use mewayz_client::model::{OrderCreate, OrderItem, OrderStatus, ProductCreate};
use resource_framework::config::API_URL_VAR;
use resource_framework::{DomainClient, QueryParams};
use tracing::{info, warn, Instrument};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    setup_tracing();

    let system = if std::env::var_os(API_URL_VAR).is_some() {
        ApiSystem::from_env()?
    } else {
        info!("{API_URL_VAR} not set, starting in-memory backend with sample data");
        ApiSystem::in_memory(seed_sample_data)
    };

    let product = async {
        info!("Creating product");
        system
            .product_client
            .create_product(ProductCreate::new("Launch Checklist (PDF)", 12.0, 500))
            .await
    }
    .instrument(tracing::info_span!("product_creation"))
    .await?;
    info!(product_id = %product.id, "Product created");

    let customers = system.customer_client.search("sarah").await?;
    let Some(customer) = customers.first() else {
        warn!("No customer matched, skipping order");
        system.shutdown().await?;
        return Ok(());
    };

    let order = system
        .order_client
        .create_order(OrderCreate::new(
            customer.id.clone(),
            vec![OrderItem::new(product.id.clone(), 2, product.price)],
        ))
        .await?;
    info!(order_id = %order.id, total = order.total, "Order placed");

    let order = system
        .order_client
        .set_status(&order, OrderStatus::Paid)
        .await?;
    info!(order_id = %order.id, status = %order.status, "Order paid");

    let low = system.product_client.low_stock(5).await?;
    info!(count = low.len(), "Products low on stock");

    let plans = system.pricing_client.active_plans().await?;
    info!(count = plans.len(), "Active pricing plans");

    // Collections without a typed client go through the name-based API.
    let faqs = system.api.list("faqs", &QueryParams::new().with("limit", 5)).await?;
    info!(faqs = %faqs["data"], "FAQ list");

    let orders = system.order_client.list(&QueryParams::new()).await?;
    info!(count = orders.len(), "Orders on record");

    system.shutdown().await?;
    Ok(())
}
