use crate::model::{PricingPlan, PricingPlanCreate, PricingPlanUpdate};
use crate::pricing::PricingPlanError;
use async_trait::async_trait;
use resource_framework::{DomainClient, QueryParams, RequestError, ResourceClient};
use tracing::{debug, instrument};

/// Client for the `pricing` collection.
#[derive(Clone, Debug)]
pub struct PricingClient {
    inner: ResourceClient<PricingPlan>,
}

impl PricingClient {
    pub fn new(inner: ResourceClient<PricingPlan>) -> Self {
        Self { inner }
    }
}

#[async_trait]
impl DomainClient<PricingPlan> for PricingClient {
    type Error = PricingPlanError;

    fn inner(&self) -> &ResourceClient<PricingPlan> {
        &self.inner
    }

    fn map_error(e: RequestError) -> Self::Error {
        PricingPlanError::from(e)
    }
}

impl PricingClient {
    #[instrument(skip(self))]
    pub async fn create_plan(&self, params: PricingPlanCreate) -> Result<PricingPlan, PricingPlanError> {
        check_name(&params.name)?;
        check_price(params.price)?;
        debug!("Sending request");
        self.inner.create(&params).await.map_err(Self::map_error)
    }

    /// Changes a plan. Setting `active: Some(false)` retires it from the pricing page.
    #[instrument(skip(self))]
    pub async fn update_plan(
        &self,
        id: String,
        update: PricingPlanUpdate,
    ) -> Result<PricingPlan, PricingPlanError> {
        if update == PricingPlanUpdate::default() {
            return Err(PricingPlanError::Validation("nothing to update".into()));
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

    /// Plans currently offered, as filtered by the backend.
    #[instrument(skip(self))]
    pub async fn active_plans(&self) -> Result<Vec<PricingPlan>, PricingPlanError> {
        self.list(&QueryParams::new().with("active", true)).await
    }
}

fn check_name(name: &str) -> Result<(), PricingPlanError> {
    if name.trim().is_empty() {
        return Err(PricingPlanError::Validation("name must not be empty".into()));
    }
    Ok(())
}

fn check_price(price: f64) -> Result<(), PricingPlanError> {
    if !price.is_finite() || price < 0.0 {
        return Err(PricingPlanError::Validation(format!("invalid price: {price}")));
    }
    Ok(())
}
