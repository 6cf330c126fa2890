use crate::model::{PricingPlan, PricingPlanCreate, PricingPlanUpdate};
use resource_framework::Resource;

/// Plans live in the `pricing` collection, not `pricing_plans`.
impl Resource for PricingPlan {
    const NAME: &'static str = "pricing";
    type Id = String;
    type Record = PricingPlan;
    type Create = PricingPlanCreate;
    type Update = PricingPlanUpdate;
}
