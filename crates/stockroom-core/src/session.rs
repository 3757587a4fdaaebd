//! Application session: the inventory, the cart, and the store they persist to.

use crate::cart::{Cart, CartEntry, CartView, Quantity};
use crate::catalog::{Inventory, Item, ItemDraft};
use crate::error::{StockError, StockResult};
use crate::ids::ItemId;
use crate::store::ItemStore;

/// Result of a mutation that was applied in memory and then saved.
///
/// The in-memory change stands even when the save fails; `save_error` carries
/// the failure so the caller can report it.
#[derive(Debug)]
pub struct Persisted<T> {
    pub value: T,
    pub save_error: Option<StockError>,
}

impl<T> Persisted<T> {
    /// Check if the save succeeded.
    pub fn is_saved(&self) -> bool {
        self.save_error.is_none()
    }
}

/// One interactive session.
///
/// Inventory mutations are written to the store immediately. Cart operations
/// only touch the session-local cart.
pub struct Session<S: ItemStore> {
    inventory: Inventory,
    cart: Cart,
    store: S,
}

impl<S: ItemStore> Session<S> {
    /// Open a session, loading the inventory from `store`.
    ///
    /// A load failure is not fatal: the session starts with an empty
    /// inventory and the error is handed back for reporting.
    pub fn open(store: S) -> (Self, Option<StockError>) {
        let (inventory, load_error) = match store.load() {
            Ok(items) => (Inventory::from_items(items), None),
            Err(e) => {
                tracing::warn!(location = %store.location(), error = %e, "failed to load inventory, starting empty");
                (Inventory::new(), Some(e))
            }
        };
        (Self::with_inventory(store, inventory), load_error)
    }

    /// Build a session around an already-loaded inventory.
    pub fn with_inventory(store: S, inventory: Inventory) -> Self {
        Self {
            inventory,
            cart: Cart::new(),
            store,
        }
    }

    /// All items, in insertion order.
    pub fn list_items(&self) -> &[Item] {
        self.inventory.items()
    }

    /// Look up one item by exact id.
    pub fn find_item(&self, id: &ItemId) -> StockResult<&Item> {
        self.inventory.find(id)
    }

    /// Add a new item under a fresh id and save.
    pub fn add_item(&mut self, draft: ItemDraft) -> Persisted<Item> {
        let item = self.inventory.add(draft).clone();
        tracing::info!(id = %item.id, name = %item.name, "item added");
        let save_error = self.persist();
        Persisted {
            value: item,
            save_error,
        }
    }

    /// Overwrite name, price and stock flag of an existing item and save.
    ///
    /// Nothing is changed or saved when the id is unknown.
    pub fn update_item(&mut self, id: &ItemId, draft: ItemDraft) -> StockResult<Persisted<Item>> {
        let item = self.inventory.update(id, draft)?.clone();
        tracing::info!(id = %item.id, name = %item.name, "item updated");
        let save_error = self.persist();
        Ok(Persisted {
            value: item,
            save_error,
        })
    }

    /// Put `quantity` units of an inventory item into the cart.
    pub fn add_to_cart(&mut self, id: &ItemId, quantity: Quantity) -> StockResult<CartEntry> {
        let item = self.inventory.find(id)?;
        let entry = self.cart.add(item, quantity)?.clone();
        tracing::debug!(id = %entry.id, quantity = %entry.quantity, "cart updated");
        Ok(entry)
    }

    /// Cart entries and their total.
    pub fn view_cart(&self) -> StockResult<CartView<'_>> {
        self.cart.view()
    }

    /// Empty the cart.
    pub fn cancel_cart(&mut self) {
        tracing::debug!(entries = self.cart.unique_item_count(), "cart cleared");
        self.cart.clear();
    }

    pub fn inventory(&self) -> &Inventory {
        &self.inventory
    }

    pub fn cart(&self) -> &Cart {
        &self.cart
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    fn persist(&mut self) -> Option<StockError> {
        match self.store.save(self.inventory.items()) {
            Ok(()) => None,
            Err(e) => {
                tracing::warn!(location = %self.store.location(), error = %e, "failed to save inventory");
                Some(e)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::money::Cents;
    use crate::store::MemoryStore;

    fn widget() -> ItemDraft {
        ItemDraft::new("Widget", Cents::new(500), true)
    }

    #[test]
    fn test_add_item_saves() {
        let (mut session, load_error) = Session::open(MemoryStore::new());
        assert!(load_error.is_none());

        let added = session.add_item(widget());
        assert!(added.is_saved());
        assert_eq!(session.store().save_count(), 1);
        assert_eq!(session.store().items(), session.list_items());
    }

    #[test]
    fn test_update_unknown_id_does_not_save() {
        let (mut session, _) = Session::open(MemoryStore::new());
        session.add_item(widget());

        let err = session.update_item(&ItemId::new("ghost"), widget()).unwrap_err();
        assert!(err.is_not_found());
        assert_eq!(session.store().save_count(), 1);
    }

    #[test]
    fn test_cart_operations_do_not_save() {
        let (mut session, _) = Session::open(MemoryStore::new());
        let id = session.add_item(widget()).value.id;

        session
            .add_to_cart(&id, Quantity::new(2).unwrap())
            .unwrap();
        session.cancel_cart();

        assert_eq!(session.store().save_count(), 1);
        assert!(session.cart().is_empty());
    }

    #[test]
    fn test_save_failure_keeps_memory_state() {
        let (mut session, _) = Session::open(MemoryStore::failing(Vec::new()));

        let added = session.add_item(widget());
        assert!(!added.is_saved());
        assert_eq!(session.list_items().len(), 1);
        assert!(session.store().items().is_empty());
    }

    #[test]
    fn test_add_to_cart_unknown_id() {
        let (mut session, _) = Session::open(MemoryStore::new());
        let err = session
            .add_to_cart(&ItemId::new("unknown-id"), Quantity::new(1).unwrap())
            .unwrap_err();

        assert!(err.is_not_found());
        assert!(session.cart().is_empty());
    }
}
