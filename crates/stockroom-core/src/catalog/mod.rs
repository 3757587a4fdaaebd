//! Catalog module.
//!
//! Contains the item record and the ordered inventory that holds them.

mod inventory;
mod item;

pub use inventory::Inventory;
pub use item::{Item, ItemDraft};
