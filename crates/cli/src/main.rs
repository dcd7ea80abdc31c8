//! Ludoteca CLI - Inspect and edit the shop cart from the terminal.
//!
//! Operates the same cart as the browser widget, persisted in a JSON file
//! instead of `localStorage`.
//!
//! # Usage
//!
//! ```bash
//! # Add an item (repeat to bump its quantity)
//! ludoteca-cli add -n "Scacchi" -p 19.99 -i img/scacchi.jpg
//!
//! # Show the cart with its total
//! ludoteca-cli show
//!
//! # Remove the first line, or everything
//! ludoteca-cli remove 0
//! ludoteca-cli clear
//!
//! # Print the HTML fragment the widget would draw
//! ludoteca-cli --store /tmp/cart.json render
//! ```
//!
//! # Environment Variables
//!
//! - `CART_STORE_PATH` - Store file when `--store` is not given (default: `cart-store.json`)
//! - `RUST_LOG` - Log filter (default: info for the ludoteca crates)
//! - Widget settings such as `CART_STORAGE_KEY` and `CART_CURRENCY`, see
//!   [`ludoteca_widget::config`]

#![cfg_attr(not(test), forbid(unsafe_code))]

use std::io::Write;
use std::path::PathBuf;

use clap::{Parser, Subcommand};
use ludoteca_widget::WidgetConfig;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

mod commands;
mod file_store;

const DEFAULT_STORE_PATH: &str = "cart-store.json";

#[derive(Parser)]
#[command(name = "ludoteca-cli")]
#[command(author, version, about = "Ludoteca cart tools")]
struct Cli {
    /// JSON file holding the cart store
    #[arg(short, long, global = true)]
    store: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Add one unit of an item to the cart
    Add {
        /// Item name (the line's key)
        #[arg(short, long)]
        name: String,

        /// Unit price, e.g. 19.99
        #[arg(short, long)]
        price: String,

        /// Image reference
        #[arg(short, long)]
        image: Option<String>,
    },
    /// Remove the line at a position (as listed by `show`)
    Remove {
        /// Zero-based line position
        index: usize,
    },
    /// Empty the cart
    Clear,
    /// Show the cart and its total
    Show,
    /// Print the cart fragment HTML
    Render,
    /// Start checkout
    Checkout,
}

fn main() {
    // Load .env file if present (ignore errors if not found)
    let _ = dotenvy::dotenv();

    let env_filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| "ludoteca_cli=info,ludoteca_core=info,ludoteca_widget=info".into());

    // stdout carries command output, logs go to stderr
    tracing_subscriber::registry()
        .with(env_filter)
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let cli = Cli::parse();

    if let Err(e) = run(cli) {
        tracing::error!("Command failed: {e}");
        std::process::exit(1);
    }
}

fn run(cli: Cli) -> Result<(), Box<dyn std::error::Error>> {
    let config = WidgetConfig::from_env()?;
    let path = cli
        .store
        .or_else(|| std::env::var_os("CART_STORE_PATH").map(PathBuf::from))
        .unwrap_or_else(|| PathBuf::from(DEFAULT_STORE_PATH));
    tracing::debug!(path = %path.display(), "Opening cart store");

    let view = commands::cart::open(&path, config);
    let mut out = std::io::stdout().lock();

    match cli.command {
        Commands::Add { name, price, image } => {
            commands::cart::add(&view, &name, &price, image.as_deref(), &mut out)?;
        }
        Commands::Remove { index } => commands::cart::remove(&view, index, &mut out)?,
        Commands::Clear => commands::cart::clear(&view, &mut out)?,
        Commands::Show => commands::cart::show(&view, &mut out)?,
        Commands::Render => commands::cart::render(&view, &mut out)?,
        Commands::Checkout => commands::cart::checkout(&view, &mut out)?,
    }
    out.flush()?;
    Ok(())
}
