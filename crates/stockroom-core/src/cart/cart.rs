//! Cart and cart entry types.

use crate::cart::CartView;
use crate::catalog::Item;
use crate::error::{StockError, StockResult};
use crate::ids::ItemId;
use crate::money::Cents;
use std::fmt;

/// A positive number of units.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Quantity(u32);

impl Quantity {
    /// Returns None for zero.
    pub fn new(value: u32) -> Option<Self> {
        (value > 0).then_some(Self(value))
    }

    pub fn get(self) -> u32 {
        self.0
    }

    /// Add another quantity, returning None on overflow.
    pub fn checked_add(self, other: Quantity) -> Option<Quantity> {
        self.0.checked_add(other.0).map(Quantity)
    }
}

impl fmt::Display for Quantity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// The shopping cart for one session. Never persisted.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Cart {
    entries: Vec<CartEntry>,
}

impl Cart {
    /// Create an empty cart.
    pub fn new() -> Self {
        Self::default()
    }

    /// Add units of an item to the cart.
    ///
    /// An entry already present for the same item id has its quantity
    /// increased; its name and price snapshot are left as they were. Otherwise
    /// a new entry is appended that copies the item's current name and price.
    pub fn add(&mut self, item: &Item, quantity: Quantity) -> StockResult<&CartEntry> {
        if let Some(index) = self.entries.iter().position(|e| e.id == item.id) {
            let existing = &mut self.entries[index];
            existing.quantity = existing
                .quantity
                .checked_add(quantity)
                .ok_or(StockError::Overflow)?;
            return Ok(&self.entries[index]);
        }

        self.entries.push(CartEntry::snapshot(item, quantity));
        Ok(&self.entries[self.entries.len() - 1])
    }

    /// Remove every entry.
    pub fn clear(&mut self) {
        self.entries.clear();
    }

    /// Entries in the order they were first added.
    pub fn entries(&self) -> &[CartEntry] {
        &self.entries
    }

    /// Get an entry by item id.
    pub fn get(&self, id: &ItemId) -> Option<&CartEntry> {
        self.entries.iter().find(|e| &e.id == id)
    }

    /// Sum of price times quantity over all entries.
    ///
    /// Returns error if arithmetic overflow occurs.
    pub fn total(&self) -> StockResult<Cents> {
        let line_totals = self
            .entries
            .iter()
            .map(CartEntry::line_total)
            .collect::<StockResult<Vec<_>>>()?;
        Cents::try_sum(line_totals.into_iter()).ok_or(StockError::Overflow)
    }

    /// Entries plus the computed total.
    pub fn view(&self) -> StockResult<CartView<'_>> {
        Ok(CartView {
            entries: &self.entries,
            total: self.total()?,
        })
    }

    /// Total units across all entries.
    pub fn item_count(&self) -> u64 {
        self.entries.iter().map(|e| u64::from(e.quantity.get())).sum()
    }

    /// Number of distinct items.
    pub fn unique_item_count(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// A line in the cart.
///
/// `name` and `price_in_cents` are copied from the item when it is first
/// added and are not refreshed when the item changes later.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CartEntry {
    /// Id of the item this entry was taken from.
    pub id: ItemId,
    /// Item name at the time of the first add.
    pub name: String,
    /// Unit price at the time of the first add.
    pub price_in_cents: Cents,
    /// Units in the cart.
    pub quantity: Quantity,
}

impl CartEntry {
    /// Copy the current name and price of an item.
    pub fn snapshot(item: &Item, quantity: Quantity) -> Self {
        Self {
            id: item.id.clone(),
            name: item.name.clone(),
            price_in_cents: item.price_in_cents,
            quantity,
        }
    }

    /// Unit price times quantity.
    pub fn line_total(&self) -> StockResult<Cents> {
        self.price_in_cents
            .try_multiply(u64::from(self.quantity.get()))
            .ok_or(StockError::Overflow)
    }
}
