//! Resource types for the Vic Signature backend.
//!
//! Each type maps to one document collection; the collection name is the
//! lowercase type name (`category`, `product`, `order`).

pub mod category;
pub mod order;
pub mod product;

pub use category::Category;
pub use order::{CartItem, Customer, Order, OrderStatus};
pub use product::Product;
