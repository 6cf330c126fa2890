use crate::model::{Order, OrderCreate, OrderStatus, OrderUpdate};
use crate::orders::OrderError;
use async_trait::async_trait;
use resource_framework::{DomainClient, RequestError, ResourceClient};
use tracing::{debug, instrument};

/// Client for the `orders` collection.
#[derive(Clone, Debug)]
pub struct OrderClient {
    inner: ResourceClient<Order>,
}

impl OrderClient {
    pub fn new(inner: ResourceClient<Order>) -> Self {
        Self { inner }
    }
}

#[async_trait]
impl DomainClient<Order> for OrderClient {
    type Error = OrderError;

    fn inner(&self) -> &ResourceClient<Order> {
        &self.inner
    }

    fn map_error(e: RequestError) -> Self::Error {
        OrderError::from(e)
    }
}

impl OrderClient {
    /// Places an order.
    ///
    /// # Errors
    /// [`OrderError::Validation`] without contacting the backend if the order has no
    /// customer, no items, an item with zero quantity, or a total that does not match
    /// its items.
    #[instrument(skip(self), fields(customer_id = %params.customer_id))]
    pub async fn create_order(&self, params: OrderCreate) -> Result<Order, OrderError> {
        validate(&params)?;
        debug!(items = params.items.len(), total = params.total, "Sending request");
        self.inner.create(&params).await.map_err(Self::map_error)
    }

    /// Moves `order` to `status`.
    ///
    /// `order` is the caller's current copy of the record; a delivered or cancelled order
    /// is refused locally with [`OrderError::Validation`].
    #[instrument(skip(self, order), fields(order_id = %order.id, from = %order.status))]
    pub async fn set_status(&self, order: &Order, status: OrderStatus) -> Result<Order, OrderError> {
        if order.status.is_final() {
            return Err(OrderError::Validation(format!(
                "order {} is {} and cannot become {status}",
                order.id, order.status
            )));
        }
        debug!("Sending request");
        let update = OrderUpdate {
            status: Some(status),
        };
        self.inner
            .update(&order.id, &update)
            .await
            .map_err(Self::map_error)
    }
}

fn validate(order: &OrderCreate) -> Result<(), OrderError> {
    if order.customer_id.trim().is_empty() {
        return Err(OrderError::Validation("customer_id must not be empty".into()));
    }
    if order.items.is_empty() {
        return Err(OrderError::Validation("order has no items".into()));
    }
    if let Some(item) = order
        .items
        .iter()
        .find(|item| !item.unit_price.is_finite() || item.unit_price < 0.0)
    {
        return Err(OrderError::Validation(format!(
            "invalid unit price {} for product {}",
            item.unit_price, item.product_id
        )));
    }
    if !order.total.is_finite() || order.total < 0.0 {
        return Err(OrderError::Validation(format!("invalid total: {}", order.total)));
    }
    if let Some(item) = order.items.iter().find(|item| item.quantity == 0) {
        return Err(OrderError::Validation(format!(
            "quantity must be positive for product {}",
            item.product_id
        )));
    }
    let expected: f64 = order.items.iter().map(|item| item.subtotal()).sum();
    if (expected - order.total).abs() > 0.005 {
        return Err(OrderError::Validation(format!(
            "total {} does not match items ({expected})",
            order.total
        )));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::OrderItem;
    use resource_framework::{ApiClient, MemoryBackend, QueryParams, RecordingNotifier};

    fn start() -> (OrderClient, RecordingNotifier, tokio::task::JoinHandle<()>) {
        let (backend, transport) = MemoryBackend::new(8);
        let handle = tokio::spawn(backend.run());
        let notifier = RecordingNotifier::new();
        let api = ApiClient::new(transport, notifier.clone());
        (crate::orders::new(&api), notifier, handle)
    }

    #[tokio::test]
    async fn test_order_lifecycle_against_memory_backend() {
        let (client, notifier, handle) = start();

        let params = OrderCreate::new(
            "c1",
            vec![OrderItem::new("p1", 2, 9.5), OrderItem::new("p2", 1, 1.0)],
        );
        let order = client.create_order(params).await.unwrap();
        assert_eq!(order.total, 20.0);
        assert_eq!(order.status, OrderStatus::Pending);

        let shipped = client
            .set_status(&order, OrderStatus::Shipped)
            .await
            .unwrap();
        assert_eq!(shipped.status, OrderStatus::Shipped);
        assert_eq!(shipped.items.len(), 2);

        let listed = client
            .list(&QueryParams::new().with("status", OrderStatus::Shipped))
            .await
            .unwrap();
        assert_eq!(listed, vec![shipped.clone()]);

        let mut missing = shipped.clone();
        missing.id = "missing".into();
        let err = client
            .set_status(&missing, OrderStatus::Paid)
            .await
            .unwrap_err();
        assert_eq!(err, OrderError::NotFound("not found".into()));
        assert_eq!(notifier.len(), 1);

        drop(client);
        handle.await.unwrap();
    }

    #[tokio::test]
    async fn malformed_orders_fail_validation() {
        let (client, notifier, _handle) = start();

        let no_items = OrderCreate::new("c1", vec![]);
        assert_eq!(
            client.create_order(no_items).await.unwrap_err(),
            OrderError::Validation("order has no items".into())
        );

        let zero = OrderCreate::new("c1", vec![OrderItem::new("p1", 0, 5.0)]);
        assert!(matches!(
            client.create_order(zero).await,
            Err(OrderError::Validation(_))
        ));

        let mut tampered = OrderCreate::new("c1", vec![OrderItem::new("p1", 1, 5.0)]);
        tampered.total = 1.0;
        assert!(matches!(
            client.create_order(tampered).await,
            Err(OrderError::Validation(_))
        ));

        let free = OrderCreate::new("c1", vec![OrderItem::new("p1", 1, f64::NAN)]);
        assert_eq!(
            client.create_order(free).await.unwrap_err(),
            OrderError::Validation("invalid unit price NaN for product p1".into())
        );

        let refund = OrderCreate::new("c1", vec![OrderItem::new("p1", 2, -4.0)]);
        assert!(matches!(
            client.create_order(refund).await,
            Err(OrderError::Validation(_))
        ));

        let mut infinite = OrderCreate::new("c1", vec![OrderItem::new("p1", 1, 5.0)]);
        infinite.total = f64::INFINITY;
        assert_eq!(
            client.create_order(infinite).await.unwrap_err(),
            OrderError::Validation("invalid total: inf".into())
        );

        assert!(client.list(&QueryParams::new()).await.unwrap().is_empty());
        assert!(notifier.is_empty());
    }

    #[tokio::test]
    async fn final_orders_keep_their_status() {
        let (client, notifier, _handle) = start();
        let order = client
            .create_order(OrderCreate::new("c1", vec![OrderItem::new("p1", 1, 5.0)]))
            .await
            .unwrap();

        let cancelled = client
            .set_status(&order, OrderStatus::Cancelled)
            .await
            .unwrap();
        let err = client
            .set_status(&cancelled, OrderStatus::Paid)
            .await
            .unwrap_err();
        assert!(matches!(err, OrderError::Validation(_)));

        let stored = client.list(&QueryParams::new()).await.unwrap();
        assert_eq!(stored[0].status, OrderStatus::Cancelled);
        assert!(notifier.is_empty());
    }
}
