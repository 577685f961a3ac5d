//! Line-driven storefront driver.
//!
//! Stands in for a presentation layer: reads one command per line from stdin,
//! translates it to store events, and writes the resulting view model as one JSON
//! line to stdout. Logs go to stderr.
//!
//! # Commands
//!
//! - `wishlist <name>` / `cart <name>`: Toggle a product by display name
//! - `show wishlist` / `show cart` / `home`: Switch views
//! - `search [text] [--tags 1,2]`: Search the full catalog
//! - `panel`: Show or hide the search panel
//! - `type <text>`: Replace the search panel query
//! - `chip <id>`: Toggle a filter chip in the search panel
//! - `submit`: Run the search panel's query
//! - `state`: Print the current view without changing it
//! - `quit`: Exit
//!
//! # Configuration
//!
//! If `SHOPFRONT_CONFIG` names a TOML file it is loaded; otherwise defaults apply.

#![allow(clippy::multiple_crate_versions)]

use serde::Serialize;
use std::io::{self, BufRead, Write};

use shopfront::catalog::categories;
use shopfront::domain::Category;
use shopfront::{CatalogStore, Config, Event, HomeViewModel, Result, SearchPanel};

/// A parsed input line.
#[derive(Debug, Clone, PartialEq, Eq)]
enum Command {
    ToggleWishlist(String),
    ToggleCart(String),
    ShowWishlist,
    ShowCart,
    ShowHome,
    Search { text: String, tags: Vec<String> },
    TogglePanel,
    TypeQuery(String),
    ToggleChip(String),
    Submit,
    Print,
    Quit,
}

/// One line of output.
#[derive(Debug, Serialize)]
struct Frame<'a> {
    view: HomeViewModel,
    search_panel: &'a SearchPanel,
}

/// Driver state wrapping the store with the search panel draft.
struct Driver {
    store: CatalogStore,
    panel: SearchPanel,
    categories: Vec<Category>,
}

impl Driver {
    fn new(config: &Config) -> Self {
        Self {
            store: shopfront::initialize(config),
            panel: SearchPanel::default(),
            categories: categories(),
        }
    }

    /// Applies a command. Returns `false` when the driver should stop.
    fn apply(&mut self, command: Command) -> bool {
        let event = match command {
            Command::ToggleWishlist(name) => self.resolve(&name).map(Event::ToggleWishlist),
            Command::ToggleCart(name) => self.resolve(&name).map(Event::ToggleCart),
            Command::ShowWishlist => Some(Event::ShowWishlist),
            Command::ShowCart => Some(Event::ShowCart),
            Command::ShowHome => Some(Event::ShowHome),
            Command::Search { text, tags } => {
                Some(Event::Search(shopfront::search::SearchQuery::new(text, tags)))
            }
            Command::TogglePanel => {
                self.panel.toggle_visible();
                None
            }
            Command::TypeQuery(text) => {
                self.panel.set_query(text);
                None
            }
            Command::ToggleChip(id) => {
                self.panel.toggle_chip(&id);
                None
            }
            Command::Submit => Some(self.panel.submit()),
            Command::Print => None,
            Command::Quit => return false,
        };

        if let Some(event) = event {
            self.store.dispatch(&event);
        }
        true
    }

    fn resolve(&self, name: &str) -> Option<shopfront::ProductId> {
        let id = self.store.product_id(name);
        if id.is_none() {
            tracing::warn!(product_name = %name, "no product with this name");
        }
        id
    }

    fn frame(&self) -> Frame<'_> {
        Frame {
            view: HomeViewModel::from_state(&self.store.snapshot(), &self.categories),
            search_panel: &self.panel,
        }
    }
}

/// Parses one input line. Returns `None` for blank or unrecognized lines.
fn parse_command(line: &str) -> Option<Command> {
    let line = line.trim();
    let (verb, rest) = line.split_once(char::is_whitespace).unwrap_or((line, ""));
    let rest = rest.trim();

    Some(match (verb, rest) {
        ("wishlist", name) if !name.is_empty() => Command::ToggleWishlist(name.to_string()),
        ("cart", name) if !name.is_empty() => Command::ToggleCart(name.to_string()),
        ("show", "wishlist") => Command::ShowWishlist,
        ("show", "cart") => Command::ShowCart,
        ("show", "home") | ("home", "") => Command::ShowHome,
        ("search", args) => parse_search(args),
        ("panel", "") => Command::TogglePanel,
        ("type", text) => Command::TypeQuery(text.to_string()),
        ("chip", id) if !id.is_empty() => Command::ToggleChip(id.to_string()),
        ("submit", "") => Command::Submit,
        ("state", "") => Command::Print,
        ("quit" | "exit", "") => Command::Quit,
        _ => return None,
    })
}

fn parse_search(args: &str) -> Command {
    let (text, tags) = match args.split_once("--tags") {
        Some((text, tags)) => (text.trim(), tags.trim()),
        None => (args, ""),
    };

    Command::Search {
        text: text.to_string(),
        tags: tags
            .split(',')
            .map(str::trim)
            .filter(|t| !t.is_empty())
            .map(String::from)
            .collect(),
    }
}

fn main() -> Result<()> {
    let config = Config::from_env()?;
    shopfront::observability::init_tracing(&config);

    let _span = tracing::debug_span!("driver").entered();
    tracing::debug!(config = ?config, "driver starting");

    let mut driver = Driver::new(&config);
    let stdin = io::stdin();
    let mut stdout = io::stdout().lock();

    for line in stdin.lock().lines() {
        let line = line?;
        if line.trim().is_empty() {
            continue;
        }

        let Some(command) = parse_command(&line) else {
            tracing::warn!(input = %line, "unrecognized command");
            continue;
        };
        tracing::debug!(command = ?command, "command parsed");

        if !driver.apply(command) {
            break;
        }

        serde_json::to_writer(&mut stdout, &driver.frame())?;
        writeln!(stdout)?;
        stdout.flush()?;
    }

    tracing::debug!("driver finished");
    Ok(())
}
