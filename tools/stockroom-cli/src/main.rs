//! Stockroom - interactive inventory and shopping cart manager.
//!
//! Running `stockroom` opens a menu to:
//! - view all items or one item's details
//! - add and update items (saved to the data file immediately)
//! - build a shopping cart, view its total, or cancel it

mod commands;
mod config;
mod context;
mod logging;
mod menu;
mod output;
mod prompt;

use anyhow::Result;
use clap::Parser;
use stockroom_core::prelude::*;

use crate::prompt::TermPrompt;

/// Stockroom - manage a small inventory and shopping cart
#[derive(Parser)]
#[command(name = "stockroom")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Enable verbose output
    #[arg(short, long)]
    verbose: bool,

    /// Config file path
    #[arg(short, long)]
    config: Option<String>,

    /// Inventory data file (overrides the config file)
    #[arg(short, long)]
    data_file: Option<String>,

    /// Keep the inventory in memory only; nothing is written
    #[arg(long)]
    ephemeral: bool,
}

fn main() {
    let cli = Cli::parse();
    let out = output::Output::new(cli.verbose);

    if let Err(e) = run(cli, &out) {
        out.error(&format!("{:#}", e));
        std::process::exit(1);
    }
}

fn run(cli: Cli, out: &output::Output) -> Result<()> {
    let ctx = context::Context::load(cli.config.as_deref(), out.clone())?;
    logging::init(&ctx.config.logging.level, cli.verbose);

    let store: Box<dyn ItemStore> = if cli.ephemeral {
        ctx.output.debug("Using an in-memory inventory");
        Box::new(MemoryStore::new())
    } else {
        let path = ctx.data_file(cli.data_file.as_deref());
        ctx.output.debug(&format!("Data file: {}", path.display()));
        Box::new(JsonFileStore::new(path))
    };

    if ctx.config.display.show_banner {
        ctx.output.banner("Inventory App");
    }

    let (mut session, load_error) = Session::open(store);
    if let Some(e) = load_error {
        ctx.output.error(&format!(
            "Error loading data from {}: {}",
            session.store().location(),
            e
        ));
        ctx.output.warn("Starting with an empty inventory.");
    }

    menu::run(&mut session, &mut TermPrompt, &ctx.output)?;

    if ctx.config.display.show_banner {
        ctx.output.banner("Goodbye!");
    }
    Ok(())
}
