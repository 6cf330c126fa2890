use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BillingInterval {
    #[default]
    Monthly,
    Yearly,
}

/// A subscription plan shown on the pricing page.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PricingPlan {
    pub id: String,
    pub name: String,
    pub price: f64,
    #[serde(default)]
    pub interval: BillingInterval,
    #[serde(default)]
    pub features: Vec<String>,
    #[serde(default)]
    pub active: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PricingPlanCreate {
    pub name: String,
    pub price: f64,
    pub interval: BillingInterval,
    pub features: Vec<String>,
    pub active: bool,
}

impl PricingPlanCreate {
    /// An active plan with no features listed.
    pub fn new(name: impl Into<String>, price: f64, interval: BillingInterval) -> Self {
        Self {
            name: name.into(),
            price,
            interval,
            features: Vec::new(),
            active: true,
        }
    }

    pub fn with_feature(mut self, feature: impl Into<String>) -> Self {
        self.features.push(feature.into());
        self
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PricingPlanUpdate {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub price: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub features: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub active: Option<bool>,
}
