//! Inventory actions: list, details, add, update.

use anyhow::Result;
use stockroom_core::parse::parse_item_id;
use stockroom_core::prelude::*;

use super::{report, report_save};
use crate::output::Output;
use crate::prompt::Prompt;

const ITEM_HEAD: [&str; 4] = ["ID", "Name", "Price", "In Stock"];

/// Column widths for the inventory table: ID, Name, Price, In Stock.
const ITEM_COLUMNS: [usize; 4] = [30, 30, 15, 10];

/// Show every item as a table. An empty inventory still gets the header row.
pub fn view_all<S: ItemStore>(session: &Session<S>, out: &Output) {
    out.header("Inventory List:");
    out.table(&ITEM_HEAD, &item_rows(session.list_items()), &ITEM_COLUMNS);
}

/// Ask for an id and show that item's fields.
pub fn view_details<S: ItemStore, P: Prompt>(
    session: &Session<S>,
    prompt: &mut P,
    out: &Output,
) -> Result<()> {
    let raw_id = prompt.input("Enter the ID of the item you want to view", None)?;

    let item = match parse_item_id(&raw_id).and_then(|id| session.find_item(&id).cloned()) {
        Ok(item) => item,
        Err(e) => {
            report(out, &e);
            return Ok(());
        }
    };

    out.header("Item Details:");
    out.kv("ID", item.id.as_str());
    out.kv("Name", &item.name);
    out.kv(
        "Price",
        &format!("{} cents ({})", item.price_in_cents.get(), item.price_in_cents),
    );
    out.kv("In Stock", &item.in_stock.to_string());
    Ok(())
}

/// Prompt for a new item and add it.
pub fn add<S: ItemStore, P: Prompt>(
    session: &mut Session<S>,
    prompt: &mut P,
    out: &Output,
) -> Result<()> {
    let name = prompt.input("Item name", None)?;
    let raw_price = prompt.input("Price in cents", None)?;
    let in_stock = prompt.confirm("Is it in stock?", true)?;

    let draft = match ItemDraft::parse(&name, &raw_price, in_stock) {
        Ok(draft) => draft,
        Err(e) => {
            report(out, &e);
            return Ok(());
        }
    };

    let added = session.add_item(draft);
    out.success(&format!("Item added successfully! ID: {}", added.value.id));
    report_save(out, session.store().location(), added.save_error.as_ref());
    Ok(())
}

/// Prompt for an id, then new values, and overwrite the item.
///
/// Each prompt defaults to the item's current value.
pub fn update<S: ItemStore, P: Prompt>(
    session: &mut Session<S>,
    prompt: &mut P,
    out: &Output,
) -> Result<()> {
    let raw_id = prompt.input("Enter the ID of the item you want to update", None)?;

    let current = match parse_item_id(&raw_id).and_then(|id| session.find_item(&id).cloned()) {
        Ok(item) => item,
        Err(e) => {
            report(out, &e);
            return Ok(());
        }
    };

    let name = prompt.input("New name", Some(&current.name))?;
    let raw_price = prompt.input(
        "New price in cents",
        Some(&current.price_in_cents.get().to_string()),
    )?;
    let in_stock = prompt.confirm("Is it in stock?", current.in_stock)?;

    let draft = match ItemDraft::parse(&name, &raw_price, in_stock) {
        Ok(draft) => draft,
        Err(e) => {
            report(out, &e);
            return Ok(());
        }
    };

    match session.update_item(&current.id, draft) {
        Ok(updated) => {
            out.success("Item updated successfully!");
            report_save(out, session.store().location(), updated.save_error.as_ref());
        }
        Err(e) => report(out, &e),
    }
    Ok(())
}

fn item_rows(items: &[Item]) -> Vec<Vec<String>> {
    items
        .iter()
        .map(|item| {
            vec![
                item.id.to_string(),
                item.name.clone(),
                item.price_in_cents.display(),
                item.stock_label().to_string(),
            ]
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::output::render_table;
    use crate::prompt::scripted::{Answer, ScriptedPrompt};

    fn text(s: &str) -> Answer {
        Answer::Text(s.to_string())
    }

    fn widget_session() -> Session<MemoryStore> {
        let widget = Item::new(
            ItemId::new("a1"),
            ItemDraft::new("Widget", Cents::new(500), true),
        );
        Session::open(MemoryStore::with_items(vec![widget])).0
    }

    #[test]
    fn test_item_rows() {
        let session = widget_session();
        let rows = item_rows(session.list_items());
        assert_eq!(rows, vec![vec!["a1", "Widget", "$5.00", "Yes"]]);
    }

    #[test]
    fn test_empty_inventory_renders_header_only() {
        let (session, _) = Session::open(MemoryStore::new());
        let rows = item_rows(session.list_items());
        assert!(rows.is_empty());

        let table = render_table(&ITEM_HEAD, &rows, &ITEM_COLUMNS);
        let lines: Vec<&str> = table.lines().collect();
        assert_eq!(lines.len(), 4);
        assert!(lines[1].contains("In Stock"));
    }

    #[test]
    fn test_add_item() {
        let (mut session, _) = Session::open(MemoryStore::new());
        let mut prompt = ScriptedPrompt::new([text("Gadget"), text("1250"), Answer::Confirm(false)]);

        add(&mut session, &mut prompt, &Output::new(false)).unwrap();

        let items = session.list_items();
        assert_eq!(items.len(), 1);
        assert_eq!(items[0].name, "Gadget");
        assert_eq!(items[0].price_in_cents, Cents::new(1250));
        assert!(!items[0].in_stock);
        assert_eq!(session.store().save_count(), 1);
    }

    #[test]
    fn test_add_item_rejects_bad_price() {
        let (mut session, _) = Session::open(MemoryStore::new());
        let mut prompt = ScriptedPrompt::new([text("Gadget"), text("cheap"), Answer::Confirm(true)]);

        add(&mut session, &mut prompt, &Output::new(false)).unwrap();

        assert!(session.list_items().is_empty());
        assert_eq!(session.store().save_count(), 0);
    }

    #[test]
    fn test_update_keeps_defaults_on_empty_input() {
        let mut session = widget_session();
        let mut prompt = ScriptedPrompt::new([
            text(" a1 "),
            text(""),
            text("650"),
            Answer::Confirm(false),
        ]);

        update(&mut session, &mut prompt, &Output::new(false)).unwrap();

        let item = session.find_item(&ItemId::new("a1")).unwrap();
        assert_eq!(item.name, "Widget");
        assert_eq!(item.price_in_cents, Cents::new(650));
        assert!(!item.in_stock);
    }

    #[test]
    fn test_update_unknown_id_stops_early() {
        let mut session = widget_session();
        let mut prompt = ScriptedPrompt::new([text("zz"), text("never asked")]);

        update(&mut session, &mut prompt, &Output::new(false)).unwrap();

        assert_eq!(prompt.remaining(), 1);
        assert_eq!(session.store().save_count(), 0);
    }

    #[test]
    fn test_view_details_unknown_id() {
        let session = widget_session();
        let mut prompt = ScriptedPrompt::new([text("nope")]);
        view_details(&session, &mut prompt, &Output::new(false)).unwrap();
        assert_eq!(prompt.remaining(), 0);
    }
}
