//! Shopping cart module.
//!
//! Contains the session cart, its entries, and the priced view shown to the user.

mod cart;
mod pricing;

pub use cart::{Cart, CartEntry, Quantity};
pub use pricing::CartView;
