use mewayz_client::lifecycle::ApiSystem;
use mewayz_client::model::{Order, OrderStatus, ProductCreate};
use mewayz_client::orders::OrderError;
use mewayz_client::products::ProductError;
use mockito::Matcher;
use resource_framework::{ApiConfig, DomainClient, QueryParams};
use serde_json::json;

fn system_for(server: &mockito::Server) -> ApiSystem {
    ApiSystem::http(&ApiConfig::new(format!("{}/api", server.url()))).expect("valid base URL")
}

#[tokio::test]
async fn product_client_speaks_the_rest_convention() {
    let mut server = mockito::Server::new_async().await;
    let create = server
        .mock("POST", "/api/products")
        .match_header("content-type", "application/json")
        .match_body(Matcher::Json(
            json!({"name": "Widget", "price": 10.0, "stock": 7}),
        ))
        .with_status(201)
        .with_body(r#"{"data": {"id": "1", "name": "Widget", "price": 10.0, "stock": 7}}"#)
        .create_async()
        .await;
    let list = server
        .mock("GET", "/api/products")
        .match_query(Matcher::UrlEncoded("limit".into(), "10".into()))
        .with_status(200)
        .with_body(r#"{"data": [{"id": "1", "name": "Widget", "price": 10.0}]}"#)
        .create_async()
        .await;

    let system = system_for(&server);
    let product = system
        .product_client
        .create_product(ProductCreate::new("Widget", 10.0, 7))
        .await
        .unwrap();
    assert_eq!(product.id, "1");

    let listed = system
        .product_client
        .list(&QueryParams::new().with("limit", 10))
        .await
        .unwrap();
    // Missing stock defaults to zero.
    assert_eq!(listed[0].stock, 0);

    create.assert_async().await;
    list.assert_async().await;
    system.shutdown().await.unwrap();
}

#[tokio::test]
async fn order_status_change_is_a_put_by_id() {
    let mut server = mockito::Server::new_async().await;
    let mock = server
        .mock("PUT", "/api/orders")
        .match_query(Matcher::UrlEncoded("id".into(), "ord_7".into()))
        .match_body(Matcher::Json(json!({"status": "cancelled"})))
        .with_status(200)
        .with_body(
            r#"{"data": {"id": "ord_7", "customer_id": "c1", "total": 5.0, "status": "cancelled"}}"#,
        )
        .create_async()
        .await;

    let system = system_for(&server);
    let current = Order {
        id: "ord_7".into(),
        customer_id: "c1".into(),
        items: Vec::new(),
        total: 5.0,
        status: OrderStatus::Paid,
    };
    let order = system
        .order_client
        .set_status(&current, OrderStatus::Cancelled)
        .await
        .unwrap();

    assert_eq!(order.status, OrderStatus::Cancelled);
    assert!(order.items.is_empty());
    mock.assert_async().await;
}

#[tokio::test]
async fn server_errors_become_domain_errors() {
    let mut server = mockito::Server::new_async().await;
    let _missing = server
        .mock("DELETE", "/api/orders")
        .match_query(Matcher::Any)
        .with_status(404)
        .with_body(r#"{"error": "not found"}"#)
        .create_async()
        .await;
    let _broken = server
        .mock("GET", "/api/products")
        .with_status(502)
        .with_body("Bad Gateway")
        .create_async()
        .await;

    let system = system_for(&server);

    let err = system
        .order_client
        .remove(&"ord_1".to_string())
        .await
        .unwrap_err();
    assert_eq!(err, OrderError::NotFound("not found".into()));

    let err = system.product_client.low_stock(1).await.unwrap_err();
    assert_eq!(
        err,
        ProductError::Rejected {
            status: 502,
            message: "HTTP error! status: 502".into()
        }
    );
}

#[tokio::test]
async fn shape_mismatch_is_a_communication_error() {
    let mut server = mockito::Server::new_async().await;
    let _mock = server
        .mock("GET", "/api/products")
        .with_status(200)
        .with_body(r#"{"items": []}"#)
        .create_async()
        .await;

    let system = system_for(&server);
    let err = system
        .product_client
        .list(&QueryParams::new())
        .await
        .unwrap_err();

    assert!(matches!(err, ProductError::Communication(_)));
}
