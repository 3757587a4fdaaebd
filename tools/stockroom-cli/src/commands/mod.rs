//! Menu action implementations.
//!
//! Domain errors are reported here and the action ends; only prompt failures
//! propagate to the menu loop.

pub mod cart;
pub mod items;

use stockroom_core::StockError;

use crate::output::Output;

/// Show a recoverable error to the user.
fn report(out: &Output, err: &StockError) {
    match err {
        StockError::ItemNotFound(id) => out.error(&format!("Item not found: {id}")),
        StockError::Validation(msg) => out.error(&format!("Invalid input: {msg}")),
        other => out.error(&other.to_string()),
    }
}

/// Tell the user whether the last mutation reached the data file.
fn report_save(out: &Output, location: String, err: Option<&StockError>) {
    match err {
        None => {
            out.success("Data saved successfully.");
            out.debug(&format!("Wrote {location}"));
        }
        Some(e) => {
            out.error(&format!("Error saving data to {location}: {e}"));
            out.warn("Changes are kept for this session only.");
        }
    }
}
