use crate::model::{Customer, CustomerCreate, CustomerUpdate};
use resource_framework::Resource;

impl Resource for Customer {
    const NAME: &'static str = "customers";
    type Id = String;
    type Record = Customer;
    type Create = CustomerCreate;
    type Update = CustomerUpdate;
}
