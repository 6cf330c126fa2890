use mewayz_client::customers::CustomerError;
use mewayz_client::lifecycle::{seed_sample_data, ApiSystem};
use mewayz_client::model::{
    BillingInterval, CustomerCreate, CustomerUpdate, OrderCreate, OrderItem, OrderStatus,
    PricingPlanCreate, PricingPlanUpdate, ProductCreate, ProductUpdate,
};
use mewayz_client::orders::OrderError;
use mewayz_client::products::ProductError;
use resource_framework::{DomainClient, QueryParams, RecordingNotifier};
use serde_json::json;

/// Full CRUD through every domain client against the in-memory backend.
#[tokio::test]
async fn test_full_system_integration() {
    let notifier = RecordingNotifier::new();
    let system = ApiSystem::in_memory_with_notifier(|backend| backend, notifier.clone());

    // Products
    let product = system
        .product_client
        .create_product(ProductCreate::new("Super Widget", 25.5, 3))
        .await
        .expect("Failed to create product");
    let product = system
        .product_client
        .update_product(
            product.id.clone(),
            ProductUpdate {
                stock: Some(100),
                ..Default::default()
            },
        )
        .await
        .expect("Failed to update product");
    assert_eq!(product.stock, 100);
    assert_eq!(product.name, "Super Widget");

    // Customers
    let customer = system
        .customer_client
        .create_customer(CustomerCreate::new("Alice", "alice@example.com"))
        .await
        .expect("Failed to create customer");
    let customer = system
        .customer_client
        .update_customer(
            customer.id.clone(),
            CustomerUpdate {
                phone: Some("+1 555 0199".into()),
                ..Default::default()
            },
        )
        .await
        .unwrap();
    assert_eq!(customer.phone.as_deref(), Some("+1 555 0199"));
    let found = system.customer_client.search("ALICE").await.unwrap();
    assert_eq!(found, vec![customer.clone()]);

    // Orders
    let order = system
        .order_client
        .create_order(OrderCreate::new(
            customer.id.clone(),
            vec![OrderItem::new(product.id.clone(), 4, product.price)],
        ))
        .await
        .expect("Failed to create order");
    assert_eq!(order.total, 102.0);
    let order = system
        .order_client
        .set_status(&order, OrderStatus::Delivered)
        .await
        .unwrap();
    assert_eq!(order.status, OrderStatus::Delivered);
    let err = system
        .order_client
        .set_status(&order, OrderStatus::Cancelled)
        .await
        .unwrap_err();
    assert!(matches!(err, OrderError::Validation(_)));

    // Pricing
    let plan = system
        .pricing_client
        .create_plan(PricingPlanCreate::new("Team", 99.0, BillingInterval::Yearly))
        .await
        .unwrap();
    assert_eq!(system.pricing_client.active_plans().await.unwrap().len(), 1);
    let retired = system
        .pricing_client
        .update_plan(
            plan.id.clone(),
            PricingPlanUpdate {
                active: Some(false),
                ..Default::default()
            },
        )
        .await
        .unwrap();
    assert!(!retired.active);
    assert!(system.pricing_client.active_plans().await.unwrap().is_empty());

    // Remove everything
    system.order_client.remove(&order.id).await.unwrap();
    system.customer_client.remove(&customer.id).await.unwrap();
    system.pricing_client.remove(&plan.id).await.unwrap();
    system.product_client.remove(&product.id).await.unwrap();
    assert!(system
        .product_client
        .list(&QueryParams::new())
        .await
        .unwrap()
        .is_empty());

    assert!(notifier.is_empty(), "unexpected notices: {:?}", notifier.messages());
    system.shutdown().await.expect("Shutdown failed");
}

#[tokio::test]
async fn second_remove_is_reported_once() {
    let notifier = RecordingNotifier::new();
    let system = ApiSystem::in_memory_with_notifier(seed_sample_data, notifier.clone());
    let id = "cust_2".to_string();

    system.customer_client.remove(&id).await.unwrap();
    let err = system.customer_client.remove(&id).await.unwrap_err();

    assert_eq!(err, CustomerError::NotFound("not found".into()));
    assert_eq!(notifier.messages(), vec!["not found".to_string()]);
    system.shutdown().await.unwrap();
}

#[tokio::test]
async fn sample_data_is_opt_in() {
    let empty = ApiSystem::in_memory(|backend| backend);
    assert!(empty
        .product_client
        .list(&QueryParams::new())
        .await
        .unwrap()
        .is_empty());
    empty.shutdown().await.unwrap();

    let seeded = ApiSystem::in_memory(seed_sample_data);
    let low = seeded.product_client.low_stock(5).await.unwrap();
    let names: Vec<&str> = low.iter().map(|p| p.name.as_str()).collect();
    assert_eq!(names, vec!["Branded Hoodie", "Sticker Pack"]);

    let plans = seeded.pricing_client.active_plans().await.unwrap();
    assert_eq!(plans.len(), 2);

    let orders = seeded
        .order_client
        .list(&QueryParams::new().with("status", OrderStatus::Paid))
        .await
        .unwrap();
    assert_eq!(orders[0].items[0].product_id, "prod_2");
    seeded.shutdown().await.unwrap();
}

#[tokio::test]
async fn untyped_collections_share_the_backend() {
    let notifier = RecordingNotifier::new();
    let system = ApiSystem::in_memory_with_notifier(|backend| backend, notifier.clone());

    let created = system
        .api
        .create("faqs", &json!({"question": "Refunds?", "answer": "Within 30 days."}))
        .await
        .unwrap();
    let id = created["data"]["id"].as_str().unwrap().to_string();

    let listed = system.api.list("faqs", &QueryParams::new()).await.unwrap();
    assert_eq!(listed["data"][0]["question"], "Refunds?");

    // Collections are independent: the FAQ id does not exist among products.
    let err = system.product_client.remove(&id).await.unwrap_err();
    assert!(matches!(err, ProductError::NotFound(_)));
    assert_eq!(notifier.len(), 1);

    system.shutdown().await.unwrap();
}
