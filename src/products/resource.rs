//! Binds [`Product`] to the `products` collection.

use crate::model::{Product, ProductCreate, ProductUpdate};
use resource_framework::Resource;

impl Resource for Product {
    const NAME: &'static str = "products";
    type Id = String;
    type Record = Product;
    type Create = ProductCreate;
    type Update = ProductUpdate;
}
