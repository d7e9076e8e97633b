//! # Catalog Lookup
//!
//! Loads the grocery catalog the same way the store does and prints records.
//!
//! ## Usage
//! ```bash
//! # Show which data file was found and how many items it holds
//! cargo run -p grocery-db --bin grocery-lookup
//!
//! # Look up product codes
//! cargo run -p grocery-db --bin grocery-lookup -- 00072250018548 00041303015745
//!
//! # Use a specific config file
//! cargo run -p grocery-db --bin grocery-lookup -- --config ./catalog.toml 00072250018548
//! ```
//!
//! ## Log Levels
//! - `RUST_LOG=debug` - Show probing and load details
//! - Default: INFO level

use std::env;
use std::path::PathBuf;
use std::process::ExitCode;

use grocery_db::{CatalogConfig, ItemCatalog};
use tracing_subscriber::EnvFilter;

fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn main() -> ExitCode {
    init_tracing();

    match run() {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("FAILED - {}", e);
            ExitCode::FAILURE
        }
    }
}

fn run() -> Result<(), Box<dyn std::error::Error>> {
    let args: Vec<String> = env::args().skip(1).collect();

    let mut config_path: Option<PathBuf> = None;
    let mut codes = Vec::new();

    let mut i = 0;
    while i < args.len() {
        match args[i].as_str() {
            "--config" | "-c" => {
                let path = args.get(i + 1).ok_or("--config requires a path")?;
                config_path = Some(PathBuf::from(path));
                i += 1;
            }
            "--help" | "-h" => {
                println!("Grocery Catalog Lookup");
                println!();
                println!("Usage: grocery-lookup [OPTIONS] [CODE...]");
                println!();
                println!("Options:");
                println!("  -c, --config <PATH>  Catalog config file (default: platform config dir)");
                println!("  -h, --help           Show this help message");
                return Ok(());
            }
            code => codes.push(code.to_string()),
        }
        i += 1;
    }

    let config = CatalogConfig::load(config_path)?;
    let catalog = ItemCatalog::open(&config);

    match catalog.source() {
        Some(path) => println!("Catalog: {}", path.display()),
        None => println!("Catalog: (none found)"),
    }
    println!("Items:   {}", catalog.len());

    if !codes.is_empty() {
        println!();
    }
    for code in &codes {
        match catalog.find(code) {
            Some(item) => println!("{:.2}", item),
            None => println!("{code}: not found"),
        }
    }

    Ok(())
}
