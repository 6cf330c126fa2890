use crate::model::{Product, ProductCreate, ProductUpdate};
use crate::products::ProductError;
use async_trait::async_trait;
use resource_framework::{DomainClient, QueryParams, RequestError, ResourceClient};
use tracing::{debug, instrument};

/// Client for the `products` collection.
#[derive(Clone, Debug)]
pub struct ProductClient {
    inner: ResourceClient<Product>,
}

impl ProductClient {
    pub fn new(inner: ResourceClient<Product>) -> Self {
        Self { inner }
    }
}

#[async_trait]
impl DomainClient<Product> for ProductClient {
    type Error = ProductError;

    fn inner(&self) -> &ResourceClient<Product> {
        &self.inner
    }

    fn map_error(e: RequestError) -> Self::Error {
        ProductError::from(e)
    }
}

impl ProductClient {
    #[instrument(skip(self))]
    pub async fn create_product(&self, params: ProductCreate) -> Result<Product, ProductError> {
        check_name(&params.name)?;
        check_price(params.price)?;
        debug!("Sending request");
        self.inner.create(&params).await.map_err(Self::map_error)
    }

    #[instrument(skip(self))]
    pub async fn update_product(
        &self,
        id: String,
        update: ProductUpdate,
    ) -> Result<Product, ProductError> {
        if update == ProductUpdate::default() {
            return Err(ProductError::Validation("nothing to update".into()));
        }
        if let Some(name) = &update.name {
            check_name(name)?;
        }
        if let Some(price) = update.price {
            check_price(price)?;
        }
        debug!("Sending request");
        self.inner.update(&id, &update).await.map_err(Self::map_error)
    }

    /// Products whose stock is at or below `threshold`.
    ///
    /// The backend has no range filter, so this lists the catalog and filters locally.
    #[instrument(skip(self))]
    pub async fn low_stock(&self, threshold: u32) -> Result<Vec<Product>, ProductError> {
        let products = self.list(&QueryParams::new()).await?;
        Ok(products
            .into_iter()
            .filter(|p| p.is_low_stock(threshold))
            .collect())
    }
}

fn check_name(name: &str) -> Result<(), ProductError> {
    if name.trim().is_empty() {
        return Err(ProductError::Validation("name must not be empty".into()));
    }
    Ok(())
}

fn check_price(price: f64) -> Result<(), ProductError> {
    if !price.is_finite() || price < 0.0 {
        return Err(ProductError::Validation(format!("invalid price: {price}")));
    }
    Ok(())
}
