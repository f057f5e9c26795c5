//! Stats command implementation

use super::format_price;
use anyhow::Result;
use bookstore_core::{InventoryStore, LocalStorage};

/// Display aggregate statistics for the inventory
pub fn stats(store: &InventoryStore<LocalStorage>, json: bool) -> Result<()> {
    let stats = store.statistics();

    if json {
        println!("{}", serde_json::to_string_pretty(&stats)?);
    } else {
        println!("Store Statistics");
        println!("  Total Books:   {}", stats.count);
        println!("  Total Value:   {}", format_price(stats.total_value));
        println!("  Average Price: {}", format_price(stats.average_price));
    }

    Ok(())
}
