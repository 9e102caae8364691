mod cli;
mod headless;

use clap::Parser;
use cli::{CliArgs, Command};
use color_eyre::eyre::WrapErr;
use color_eyre::Result;
use dish_swipe::{Catalog, Deck, UiConfig};
use std::path::Path;
use tracing::Level;

fn main() -> Result<()> {
    // Setup error handling
    color_eyre::install()?;

    let args = CliArgs::parse();
    init_logging(args.debug);

    let config = UiConfig::from_env();
    let catalog = load_catalog(args.catalog.as_deref())?;
    let deck = Deck::builtin();

    match args.command {
        Command::Deck => headless::render_deck(&deck, args.json),
        Command::Catalog => headless::render_catalog(&catalog, args.json),
        Command::Show { slug } => headless::render_show(&catalog, &config, &slug, args.json),
        Command::Url { slug } => headless::render_url(&catalog, &config, &slug),
        Command::Swipe { moves } => headless::render_swipe(deck, &config, &moves.0, args.json),
    }
}

fn init_logging(debug: bool) {
    let level = if debug { Level::DEBUG } else { Level::WARN };
    tracing_subscriber::fmt()
        .with_max_level(level)
        .with_writer(std::io::stderr)
        .init();
}

fn load_catalog(path: Option<&Path>) -> Result<Catalog> {
    let Some(path) = path else {
        return Ok(Catalog::builtin());
    };

    let json = std::fs::read_to_string(path)
        .wrap_err_with(|| format!("Failed to read catalog {}", path.display()))?;
    Catalog::from_json(&json).wrap_err_with(|| format!("Invalid catalog {}", path.display()))
}
