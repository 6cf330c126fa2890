//! Binds [`Order`] to the `orders` collection.

use crate::model::{Order, OrderCreate, OrderUpdate};
use resource_framework::Resource;

impl Resource for Order {
    const NAME: &'static str = "orders";
    type Id = String;
    type Record = Order;
    type Create = OrderCreate;
    // Only the status of a placed order can change.
    type Update = OrderUpdate;
}
