//! CLI command implementations

mod add;
mod list;
mod remove;
mod stats;

pub use add::add;
pub use list::list;
pub use remove::remove;
pub use stats::stats;

use bookstore_core::{InventoryStore, LocalStorage, StoreConfig};
use std::path::Path;

/// Open the inventory kept under `data_dir`
pub fn open_store(data_dir: &Path, config: StoreConfig) -> InventoryStore<LocalStorage> {
    tracing::debug!("Opening inventory in {:?}", data_dir);
    InventoryStore::open(LocalStorage::new(data_dir), config)
}

/// Format an amount the way the store displays prices
pub fn format_price(amount: f64) -> String {
    format!("${:.2}", amount)
}

/// Tell the user that a change was applied but not saved
fn warn_unsaved(store: &InventoryStore<LocalStorage>) {
    let location = store
        .storage()
        .path_for(&store.config().storage_key)
        .map(|p| p.display().to_string())
        .unwrap_or_else(|_| store.storage().root().display().to_string());
    eprintln!(
        "Warning: the inventory could not be saved to {}; this change will not persist",
        location
    );
}
