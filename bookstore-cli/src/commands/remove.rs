//! Remove command implementation

use anyhow::{Context, Result};
use bookstore_core::{BookId, InventoryStore, LocalStorage};
use std::io::{self, Write};

/// Remove a book from the inventory by id, asking first unless `yes` is set
pub fn remove(mut store: InventoryStore<LocalStorage>, id: &str, yes: bool) -> Result<()> {
    let id = BookId::from(id);

    if !yes {
        if let Some(book) = store.get(&id) {
            let question = format!(
                "Remove \"{}\" from the store? This cannot be undone.",
                book.title
            );
            if !confirm(&question)? {
                println!("Cancelled; nothing removed.");
                return Ok(());
            }
        }
    }

    match store.remove(&id) {
        Ok(change) => {
            println!("Removed \"{}\" from the store.", change.book.title);
            if !change.persisted {
                super::warn_unsaved(&store);
            }
            Ok(())
        }
        Err(e) if e.is_soft() => {
            println!("No book with id {} in the store; nothing removed.", id);
            Ok(())
        }
        Err(e) => Err(e).context("Could not remove book"),
    }
}

/// Ask a yes/no question on stderr; anything but "y" or "yes" means no
fn confirm(question: &str) -> Result<bool> {
    eprint!("{} [y/N] ", question);
    io::stderr().flush()?;

    let mut answer = String::new();
    io::stdin()
        .read_line(&mut answer)
        .context("Failed to read confirmation")?;
    Ok(matches!(
        answer.trim().to_ascii_lowercase().as_str(),
        "y" | "yes"
    ))
}
