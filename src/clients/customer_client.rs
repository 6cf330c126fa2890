use crate::customers::CustomerError;
use crate::model::{Customer, CustomerCreate, CustomerUpdate};
use async_trait::async_trait;
use resource_framework::{DomainClient, QueryParams, RequestError, ResourceClient};
use tracing::{debug, instrument};

/// Client for the `customers` collection.
#[derive(Clone, Debug)]
pub struct CustomerClient {
    inner: ResourceClient<Customer>,
}

impl CustomerClient {
    pub fn new(inner: ResourceClient<Customer>) -> Self {
        Self { inner }
    }
}

#[async_trait]
impl DomainClient<Customer> for CustomerClient {
    type Error = CustomerError;

    fn inner(&self) -> &ResourceClient<Customer> {
        &self.inner
    }

    fn map_error(e: RequestError) -> Self::Error {
        CustomerError::from(e)
    }
}

impl CustomerClient {
    #[instrument(skip(self))]
    pub async fn create_customer(&self, params: CustomerCreate) -> Result<Customer, CustomerError> {
        if params.name.trim().is_empty() {
            return Err(CustomerError::Validation("name must not be empty".into()));
        }
        check_email(&params.email)?;
        debug!("Sending request");
        self.inner.create(&params).await.map_err(Self::map_error)
    }

    #[instrument(skip(self))]
    pub async fn update_customer(
        &self,
        id: String,
        update: CustomerUpdate,
    ) -> Result<Customer, CustomerError> {
        if let Some(email) = &update.email {
            check_email(email)?;
        }
        debug!("Sending request");
        self.inner.update(&id, &update).await.map_err(Self::map_error)
    }

    /// Customers with `term` anywhere in a text field, matched case-insensitively by the
    /// backend.
    #[instrument(skip(self))]
    pub async fn search(&self, term: &str) -> Result<Vec<Customer>, CustomerError> {
        let term = term.trim();
        if term.is_empty() {
            return Err(CustomerError::Validation("search term must not be empty".into()));
        }
        self.list(&QueryParams::new().with("search", term)).await
    }
}

/// Only rejects addresses that cannot possibly be delivered to; the backend owns the rest.
fn check_email(email: &str) -> Result<(), CustomerError> {
    match email.split_once('@') {
        Some((local, domain)) if !local.is_empty() && domain.contains('.') => Ok(()),
        _ => Err(CustomerError::Validation(format!("invalid email: {email}"))),
    }
}
