//! Cart actions: view, add, cancel.

use anyhow::Result;
use stockroom_core::parse::{parse_item_id, parse_quantity};
use stockroom_core::prelude::*;

use super::report;
use crate::output::Output;
use crate::prompt::Prompt;

/// Column widths for the cart table: ID, Name, Price, Quantity.
const CART_COLUMNS: [usize; 4] = [30, 30, 15, 10];

/// Show the cart and its total.
pub fn view<S: ItemStore>(session: &Session<S>, out: &Output) {
    let cart = match session.view_cart() {
        Ok(cart) => cart,
        Err(e) => {
            report(out, &e);
            return;
        }
    };

    if cart.is_empty() {
        out.info("Your shopping cart is empty.");
        return;
    }

    out.header("Shopping Cart:");
    out.table(
        &["ID", "Name", "Price", "Quantity"],
        &cart_rows(&cart),
        &CART_COLUMNS,
    );
}

/// Ask for an id and quantity and put the item in the cart.
pub fn add<S: ItemStore, P: Prompt>(
    session: &mut Session<S>,
    prompt: &mut P,
    out: &Output,
) -> Result<()> {
    let raw_id = prompt.input("Enter the ID of the item to add to the cart", None)?;
    let raw_quantity = prompt.input("Quantity", Some("1"))?;

    let added = parse_item_id(&raw_id).and_then(|id| {
        let quantity = parse_quantity(&raw_quantity)?;
        session.add_to_cart(&id, quantity)
    });

    match added {
        Ok(entry) => {
            let in_cart = session
                .cart()
                .get(&entry.id)
                .map(|e| e.quantity.get())
                .unwrap_or_default();
            out.success(&format!(
                "Added to cart: {} (now {} in cart)",
                entry.name, in_cart
            ));
        }
        Err(e) => report(out, &e),
    }
    Ok(())
}

/// Empty the cart without asking.
pub fn cancel<S: ItemStore>(session: &mut Session<S>, out: &Output) {
    session.cancel_cart();
    out.success("Cart cancelled.");
}

fn cart_rows(cart: &CartView<'_>) -> Vec<Vec<String>> {
    let mut rows: Vec<Vec<String>> = cart
        .entries
        .iter()
        .map(|entry| {
            vec![
                entry.id.to_string(),
                entry.name.clone(),
                entry.price_in_cents.display(),
                entry.quantity.to_string(),
            ]
        })
        .collect();

    rows.push(Vec::new());
    rows.push(vec![
        "Total".to_string(),
        String::new(),
        cart.total.display(),
        String::new(),
    ]);
    rows
}
