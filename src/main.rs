//! # Inventory Trac
//!
//! Starts the [`InventorySystem`] and either runs the interactive console on stdin/stdout,
//! or answers a single `--search` and exits.
//!
//! Logs go to stderr and never mix with the table. `RUST_LOG` overrides `--verbose`.

use actor_framework::tracing::setup_tracing;
use actor_framework::ActorClient;
use anyhow::Context;
use clap::{Parser, ValueEnum};
use inventory_trac::config::{Config, DEFAULT_CAPACITY};
use inventory_trac::console::{render, Console};
use inventory_trac::lifecycle::InventorySystem;
use tokio::io::{stdin, stdout, BufReader};
use tracing::info;

#[derive(ValueEnum, Debug, Clone, Copy, Default)]
enum OutputFormat {
    #[default]
    Table,
    Json,
}

/// In-memory product inventory with an interactive console
#[derive(Parser, Debug)]
#[command(name = "inventory-trac")]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Print the products matching QUERY and exit, instead of starting the console
    #[arg(short, long, value_name = "QUERY")]
    search: Option<String>,

    /// Output format for --search
    #[arg(short, long, value_enum, default_value_t = OutputFormat::Table)]
    format: OutputFormat,

    /// Start with an empty registry instead of the example catalog
    #[arg(long)]
    no_seed: bool,

    /// Request queue capacity of the product actor
    #[arg(long, default_value_t = DEFAULT_CAPACITY, value_parser = parse_capacity)]
    capacity: usize,

    /// Enable debug logging
    #[arg(short, long)]
    verbose: bool,
}

impl Args {
    fn config(&self) -> Config {
        Config {
            capacity: self.capacity,
            seed: !self.no_seed,
        }
    }
}

fn parse_capacity(raw: &str) -> Result<usize, String> {
    match raw.parse::<usize>() {
        Ok(0) => Err("capacity must be at least 1".to_string()),
        Ok(capacity) => Ok(capacity),
        Err(e) => Err(e.to_string()),
    }
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let args = Args::parse();
    setup_tracing(if args.verbose { "debug" } else { "warn" });

    let system = InventorySystem::start(args.config())
        .await
        .context("Failed to start the inventory")?;
    info!(config = ?system.config(), "Inventory ready");

    let system = match &args.search {
        Some(query) => {
            let products = system.product_client.search(query.clone()).await?;
            let rendered = match args.format {
                OutputFormat::Table => render::product_table(&products),
                OutputFormat::Json => serde_json::to_string_pretty(&products)?,
            };
            println!("{rendered}");
            system
        }
        None => {
            let mut console = Console::new(BufReader::new(stdin()), stdout());
            console.run(system).await.context("Console stopped")?
        }
    };

    system.shutdown().await.context("Shutdown failed")?;
    Ok(())
}
