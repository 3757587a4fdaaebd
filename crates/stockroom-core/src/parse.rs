//! Typed parsing of raw user input.
//!
//! Every numeric field typed at a prompt passes through here before it
//! touches an [`Item`](crate::catalog::Item) or the cart.

use crate::cart::Quantity;
use crate::error::{StockError, StockResult};
use crate::ids::ItemId;
use crate::money::Cents;

/// Parse a price in whole cents. Accepts only plain decimal digits.
pub fn parse_price(raw: &str) -> StockResult<Cents> {
    let value = parse_unsigned(raw, "price in cents")?;
    Ok(Cents::new(value))
}

/// Parse a cart quantity. Must be a whole number of at least 1.
pub fn parse_quantity(raw: &str) -> StockResult<Quantity> {
    let value = parse_unsigned(raw, "quantity")?;
    let value = u32::try_from(value)
        .map_err(|_| StockError::validation(format!("quantity {value} is too large")))?;
    Quantity::new(value).ok_or_else(|| StockError::validation("quantity must be at least 1"))
}

/// Parse an item id. Surrounding whitespace is dropped; an empty id is rejected.
pub fn parse_item_id(raw: &str) -> StockResult<ItemId> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return Err(StockError::validation("item id is required"));
    }
    Ok(ItemId::new(trimmed))
}

fn parse_unsigned(raw: &str, field: &str) -> StockResult<u64> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return Err(StockError::validation(format!("{field} is required")));
    }
    // `u64::from_str` also takes a leading '+', which we don't want.
    if !trimmed.bytes().all(|b| b.is_ascii_digit()) {
        return Err(StockError::validation(format!(
            "{field} must be a whole non-negative number, got '{trimmed}'"
        )));
    }
    trimmed
        .parse::<u64>()
        .map_err(|_| StockError::validation(format!("{field} '{trimmed}' is too large")))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_price() {
        assert_eq!(parse_price("500").unwrap(), Cents::new(500));
        assert_eq!(parse_price("  0 ").unwrap(), Cents::zero());
    }

    #[test]
    fn test_parse_price_rejects_non_numeric() {
        for raw in ["", "   ", "abc", "5.00", "-5", "+5", "1e3", "12abc"] {
            let err = parse_price(raw).unwrap_err();
            assert!(err.is_validation(), "expected validation error for {raw:?}");
        }
    }

    #[test]
    fn test_parse_price_rejects_overflow() {
        assert!(parse_price("99999999999999999999999").unwrap_err().is_validation());
    }

    #[test]
    fn test_parse_quantity() {
        assert_eq!(parse_quantity("3").unwrap().get(), 3);
        assert_eq!(parse_quantity(" 12\n").unwrap().get(), 12);
    }

    #[test]
    fn test_parse_quantity_rejects_zero_and_garbage() {
        for raw in ["0", "-1", "two", "1.5", "", "4294967296"] {
            let err = parse_quantity(raw).unwrap_err();
            assert!(err.is_validation(), "expected validation error for {raw:?}");
        }
    }

    #[test]
    fn test_parse_item_id_trims() {
        assert_eq!(parse_item_id("  a1 \n").unwrap().as_str(), "a1");
        assert!(parse_item_id("   ").unwrap_err().is_validation());
    }
}
