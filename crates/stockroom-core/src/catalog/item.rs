//! Inventory item types.

use crate::error::StockResult;
use crate::ids::ItemId;
use crate::money::Cents;
use crate::parse::parse_price;
use serde::{Deserialize, Serialize};

/// A stocked item.
///
/// Field order here is the key order in the data file.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct Item {
    /// Immutable identifier, assigned at creation.
    pub id: ItemId,
    /// Display name.
    pub name: String,
    /// Unit price in cents.
    pub price_in_cents: Cents,
    /// Whether the item is currently in stock.
    pub in_stock: bool,
}

impl Item {
    /// Create an item from an id and validated field values.
    pub fn new(id: ItemId, draft: ItemDraft) -> Self {
        Self {
            id,
            name: draft.name,
            price_in_cents: draft.price_in_cents,
            in_stock: draft.in_stock,
        }
    }

    /// Overwrite every mutable field. The id is left untouched.
    pub fn apply(&mut self, draft: ItemDraft) {
        self.name = draft.name;
        self.price_in_cents = draft.price_in_cents;
        self.in_stock = draft.in_stock;
    }

    /// "Yes"/"No" label for the stock flag.
    pub fn stock_label(&self) -> &'static str {
        if self.in_stock {
            "Yes"
        } else {
            "No"
        }
    }
}

/// The mutable fields of an item, already validated.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ItemDraft {
    pub name: String,
    pub price_in_cents: Cents,
    pub in_stock: bool,
}

impl ItemDraft {
    pub fn new(name: impl Into<String>, price_in_cents: Cents, in_stock: bool) -> Self {
        Self {
            name: name.into(),
            price_in_cents,
            in_stock,
        }
    }

    /// Build a draft from raw prompt input, validating the price.
    pub fn parse(name: &str, raw_price: &str, in_stock: bool) -> StockResult<Self> {
        let price_in_cents = parse_price(raw_price)?;
        Ok(Self::new(name, price_in_cents, in_stock))
    }
}

impl From<&Item> for ItemDraft {
    fn from(item: &Item) -> Self {
        Self::new(item.name.clone(), item.price_in_cents, item.in_stock)
    }
}
