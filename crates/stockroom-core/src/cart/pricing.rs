//! Cart pricing summary.

use crate::cart::CartEntry;
use crate::money::Cents;

/// Cart entries together with their computed total.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CartView<'a> {
    /// Entries in the order they were first added.
    pub entries: &'a [CartEntry],
    /// Sum of price times quantity over all entries.
    pub total: Cents,
}

impl CartView<'_> {
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cart::Quantity;
    use crate::ids::ItemId;

    #[test]
    fn test_view_is_empty() {
        let entries = vec![
            CartEntry {
                id: ItemId::new("a1"),
                name: "Widget".to_string(),
                price_in_cents: Cents::new(500),
                quantity: Quantity::new(3).unwrap(),
            },
            CartEntry {
                id: ItemId::new("b2"),
                name: "Gadget".to_string(),
                price_in_cents: Cents::new(100),
                quantity: Quantity::new(2).unwrap(),
            },
        ];
        let view = CartView {
            entries: &entries,
            total: Cents::new(1700),
        };

        assert!(!view.is_empty());
        assert!(CartView {
            entries: &[],
            total: Cents::zero(),
        }
        .is_empty());
    }
}
