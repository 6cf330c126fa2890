//! Placeholder records for demos and local development.
//!
//! Nothing loads these implicitly. Pass [`seed_sample_data`] to
//! [`ApiSystem::in_memory`](super::ApiSystem::in_memory) to get a populated backend.

use resource_framework::MemoryBackend;
use serde_json::json;

pub fn seed_sample_data(backend: MemoryBackend) -> MemoryBackend {
    backend
        .seed(
            "products",
            vec![
                json!({"id": "prod_1", "name": "Creator Course Bundle", "price": 199.0, "stock": 120, "sku": "CCB-01"}),
                json!({"id": "prod_2", "name": "Branded Hoodie", "price": 49.99, "stock": 4, "sku": "HD-BLK-M"}),
                json!({"id": "prod_3", "name": "Sticker Pack", "price": 5.0, "stock": 0}),
            ],
        )
        .seed(
            "customers",
            vec![
                json!({"id": "cust_1", "name": "Sarah Johnson", "email": "sarah@example.com"}),
                json!({"id": "cust_2", "name": "Mike Chen", "email": "mike.chen@example.com", "phone": "+1 555 0100"}),
            ],
        )
        .seed(
            "orders",
            vec![json!({
                "id": "ord_1",
                "customer_id": "cust_1",
                "items": [{"product_id": "prod_2", "quantity": 2, "unit_price": 49.99}],
                "total": 99.98,
                "status": "paid"
            })],
        )
        .seed(
            "pricing",
            vec![
                json!({"id": "starter", "name": "Starter", "price": 0.0, "interval": "monthly", "features": ["1 store"], "active": true}),
                json!({"id": "pro", "name": "Pro", "price": 29.0, "interval": "monthly", "features": ["5 stores", "Custom domain"], "active": true}),
                json!({"id": "legacy", "name": "Legacy", "price": 19.0, "interval": "monthly", "active": false}),
            ],
        )
}
