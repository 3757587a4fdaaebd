//! Inventory and cart logic for Stockroom.
//!
//! This crate holds everything below the interactive menu:
//!
//! - **Catalog**: items and the ordered inventory
//! - **Cart**: session-local cart with merge-by-id and totals
//! - **Store**: JSON file persistence of the inventory
//! - **Session**: owns inventory, cart and store; the operations the menu calls
//!
//! # Example
//!
//! ```rust
//! use stockroom_core::prelude::*;
//!
//! let (mut session, _) = Session::open(MemoryStore::new());
//!
//! let draft = ItemDraft::parse("Widget", "500", true).unwrap();
//! let widget = session.add_item(draft).value;
//!
//! let quantity = parse_quantity("3").unwrap();
//! session.add_to_cart(&widget.id, quantity).unwrap();
//!
//! let cart = session.view_cart().unwrap();
//! assert_eq!(cart.total, Cents::new(1500));
//! ```

pub mod error;
pub mod ids;
pub mod money;
pub mod parse;

pub mod cart;
pub mod catalog;
pub mod session;
pub mod store;

pub use error::{StockError, StockResult};
pub use ids::ItemId;
pub use money::Cents;

/// Prelude for convenient imports.
pub mod prelude {
    pub use crate::error::{StockError, StockResult};
    pub use crate::ids::ItemId;
    pub use crate::money::Cents;
    pub use crate::parse::{parse_item_id, parse_price, parse_quantity};

    pub use crate::cart::{Cart, CartEntry, CartView, Quantity};
    pub use crate::catalog::{Inventory, Item, ItemDraft};
    pub use crate::session::{Persisted, Session};
    pub use crate::store::{ItemStore, JsonFileStore, MemoryStore, DEFAULT_DATA_FILE};
}
