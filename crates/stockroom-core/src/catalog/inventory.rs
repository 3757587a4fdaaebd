//! The in-memory inventory.

use crate::catalog::{Item, ItemDraft};
use crate::error::{StockError, StockResult};
use crate::ids::ItemId;

/// Ordered collection of items. Insertion order is preserved and never sorted.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Inventory {
    items: Vec<Item>,
}

impl Inventory {
    /// Create an empty inventory.
    pub fn new() -> Self {
        Self::default()
    }

    /// Wrap items loaded from storage, keeping their order.
    pub fn from_items(items: Vec<Item>) -> Self {
        Self { items }
    }

    /// All items in insertion order.
    pub fn items(&self) -> &[Item] {
        &self.items
    }

    pub fn iter(&self) -> impl Iterator<Item = &Item> {
        self.items.iter()
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Look up an item by exact id.
    pub fn get(&self, id: &ItemId) -> Option<&Item> {
        self.items.iter().find(|i| &i.id == id)
    }

    /// Look up an item by exact id, failing with `ItemNotFound`.
    pub fn find(&self, id: &ItemId) -> StockResult<&Item> {
        self.get(id).ok_or_else(|| StockError::not_found(id.as_str()))
    }

    pub fn contains(&self, id: &ItemId) -> bool {
        self.get(id).is_some()
    }

    /// Append a new item under a freshly generated id.
    pub fn add(&mut self, draft: ItemDraft) -> &Item {
        self.add_with_generator(draft, ItemId::generate)
    }

    /// Append a new item, drawing ids from `next_id` until one is unused.
    pub fn add_with_generator(
        &mut self,
        draft: ItemDraft,
        mut next_id: impl FnMut() -> ItemId,
    ) -> &Item {
        let id = loop {
            let candidate = next_id();
            if !self.contains(&candidate) {
                break candidate;
            }
        };
        self.items.push(Item::new(id, draft));
        &self.items[self.items.len() - 1]
    }

    /// Overwrite the mutable fields of an existing item.
    ///
    /// Leaves the inventory untouched when the id is unknown.
    pub fn update(&mut self, id: &ItemId, draft: ItemDraft) -> StockResult<&Item> {
        let item = self
            .items
            .iter_mut()
            .find(|i| &i.id == id)
            .ok_or_else(|| StockError::not_found(id.as_str()))?;
        item.apply(draft);
        Ok(&*item)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::money::Cents;

    fn draft(name: &str, cents: u64) -> ItemDraft {
        ItemDraft::new(name, Cents::new(cents), true)
    }

    #[test]
    fn test_add_preserves_order() {
        let mut inventory = Inventory::new();
        inventory.add(draft("Widget", 500));
        inventory.add(draft("Gadget", 250));
        inventory.add(draft("Doohickey", 75));

        let names: Vec<&str> = inventory.iter().map(|i| i.name.as_str()).collect();
        assert_eq!(names, ["Widget", "Gadget", "Doohickey"]);
    }

    #[test]
    fn test_add_skips_colliding_ids() {
        let mut inventory =
            Inventory::from_items(vec![Item::new(ItemId::new("a1"), draft("Old", 1))]);
        let mut ids = vec!["b2", "a1", "a1"];

        let added = inventory.add_with_generator(draft("New", 2), || {
            ItemId::new(ids.pop().unwrap())
        });

        assert_eq!(added.id.as_str(), "b2");
        assert_eq!(inventory.len(), 2);
    }

    #[test]
    fn test_find() {
        let mut inventory = Inventory::new();
        let id = inventory.add(draft("Widget", 500)).id.clone();

        assert_eq!(inventory.find(&id).unwrap().name, "Widget");
        assert!(inventory.find(&ItemId::new("missing")).unwrap_err().is_not_found());
    }

    #[test]
    fn test_update() {
        let mut inventory = Inventory::new();
        let id = inventory.add(draft("Widget", 500)).id.clone();

        let updated = inventory
            .update(&id, ItemDraft::new("Widget Pro", Cents::new(600), false))
            .unwrap();
        assert_eq!(updated.id, id);
        assert_eq!(updated.name, "Widget Pro");
        assert!(!updated.in_stock);
    }

    #[test]
    fn test_update_unknown_id_is_noop() {
        let mut inventory = Inventory::new();
        inventory.add(draft("Widget", 500));
        let before = inventory.clone();

        let err = inventory
            .update(&ItemId::new("nope"), draft("Changed", 1))
            .unwrap_err();

        assert!(err.is_not_found());
        assert_eq!(inventory, before);
    }
}
