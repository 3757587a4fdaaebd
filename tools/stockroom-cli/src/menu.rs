//! The main menu loop.

use anyhow::{Context as _, Result};
use stockroom_core::prelude::*;

use crate::commands;
use crate::output::Output;
use crate::prompt::Prompt;

/// Actions offered by the main menu, in display order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuAction {
    ViewItems,
    ViewItemDetails,
    AddItem,
    UpdateItem,
    ViewCart,
    AddToCart,
    CancelCart,
    Exit,
}

impl MenuAction {
    pub const ALL: [MenuAction; 8] = [
        MenuAction::ViewItems,
        MenuAction::ViewItemDetails,
        MenuAction::AddItem,
        MenuAction::UpdateItem,
        MenuAction::ViewCart,
        MenuAction::AddToCart,
        MenuAction::CancelCart,
        MenuAction::Exit,
    ];

    pub fn label(self) -> &'static str {
        match self {
            MenuAction::ViewItems => "View all items",
            MenuAction::ViewItemDetails => "View item details",
            MenuAction::AddItem => "Add a new item",
            MenuAction::UpdateItem => "Update an item",
            MenuAction::ViewCart => "View cart",
            MenuAction::AddToCart => "Add to cart",
            MenuAction::CancelCart => "Cancel cart",
            MenuAction::Exit => "Exit",
        }
    }
}

/// Show the menu until the user picks Exit.
pub fn run<S: ItemStore, P: Prompt>(
    session: &mut Session<S>,
    prompt: &mut P,
    out: &Output,
) -> Result<()> {
    let labels: Vec<&str> = MenuAction::ALL.iter().map(|a| a.label()).collect();

    loop {
        let index = prompt.select("What would you like to do?", &labels, 0)?;
        let action = MenuAction::ALL
            .get(index)
            .copied()
            .with_context(|| format!("Invalid menu selection: {index}"))?;

        tracing::debug!(?action, "menu selection");
        if action == MenuAction::Exit {
            return Ok(());
        }
        dispatch(action, session, prompt, out)?;
    }
}

fn dispatch<S: ItemStore, P: Prompt>(
    action: MenuAction,
    session: &mut Session<S>,
    prompt: &mut P,
    out: &Output,
) -> Result<()> {
    match action {
        MenuAction::ViewItems => commands::items::view_all(session, out),
        MenuAction::ViewItemDetails => commands::items::view_details(session, prompt, out)?,
        MenuAction::AddItem => commands::items::add(session, prompt, out)?,
        MenuAction::UpdateItem => commands::items::update(session, prompt, out)?,
        MenuAction::ViewCart => commands::cart::view(session, out),
        MenuAction::AddToCart => commands::cart::add(session, prompt, out)?,
        MenuAction::CancelCart => commands::cart::cancel(session, out),
        MenuAction::Exit => {}
    }
    Ok(())
}
