//! # Seed Data Writer
//!
//! Writes the starter catalog, an empty cart and the placeholder company
//! info into a data directory.
//!
//! ## Usage
//! ```bash
//! # Seed the configured data directory
//! cargo run -p decor-store --bin seed
//!
//! # Seed a specific directory
//! cargo run -p decor-store --bin seed -- --data-dir ./data
//!
//! # Overwrite whatever is there
//! cargo run -p decor-store --bin seed -- --reset
//! ```

use std::env;
use std::path::PathBuf;
use tracing::info;
use tracing_subscriber::EnvFilter;

use decor_core::CartLine;
use decor_store::defaults::{default_about_info, default_products};
use decor_store::storage::save_snapshot;
use decor_store::{FileStorage, Storage, StoreConfig, Storefront};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    init_tracing();

    let args: Vec<String> = env::args().collect();

    let mut data_dir: Option<PathBuf> = None;
    let mut reset = false;

    let mut i = 1;
    while i < args.len() {
        match args[i].as_str() {
            "--data-dir" | "-d" => {
                if i + 1 < args.len() {
                    data_dir = Some(PathBuf::from(&args[i + 1]));
                    i += 1;
                }
            }
            "--reset" => reset = true,
            "--help" | "-h" => {
                println!("Decor Storefront Seed Data Writer");
                println!();
                println!("Usage: seed [OPTIONS]");
                println!();
                println!("Options:");
                println!("  -d, --data-dir <PATH>  Data directory (default: from storefront.toml)");
                println!("      --reset            Overwrite existing catalog, cart and about info");
                println!("  -h, --help             Show this help message");
                return Ok(());
            }
            other => eprintln!("Ignoring unknown argument: {}", other),
        }
        i += 1;
    }

    let mut config = StoreConfig::load(None)?;
    if let Some(dir) = data_dir {
        config.data_dir = dir;
    }
    config.validate()?;

    println!("Decor Storefront Seed");
    println!("=====================");
    println!("Data dir: {}", config.data_dir.display());
    println!();

    let storage = FileStorage::open(&config.data_dir)?;

    if !reset && storage.get(&config.keys.products)?.is_some() {
        println!("Catalog already present under '{}'", config.keys.products);
        println!("  Skipping seed. Pass --reset to overwrite.");
        return Ok(());
    }

    let products = default_products();
    save_snapshot(&storage, &config.keys.products, &products)?;
    save_snapshot(&storage, &config.keys.cart, &Vec::<CartLine>::new())?;
    save_snapshot(&storage, &config.keys.about, &default_about_info())?;
    info!(products = products.len(), reset, "Seed data written");

    // Read back through the stores to confirm the snapshots decode
    let shop = Storefront::open(&config)?;
    let stats = shop.products.stats();

    println!("Products:   {}", stats.total_products);
    println!("Featured:   {}", stats.featured_products);
    println!("Categories: {}", shop.products.categories().join(", "));
    println!("Value:      {}", stats.total_value);
    println!("Company:    {}", shop.about.get().company_name);
    println!();
    println!("Seed complete");

    Ok(())
}

fn init_tracing() {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info,decor=debug"));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .init();
}
