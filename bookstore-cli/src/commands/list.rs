//! List command implementation

use super::format_price;
use anyhow::Result;
use bookstore_core::{Book, InventoryStore, LocalStorage};

const HEADERS: [&str; 6] = ["Title", "Author", "Year", "ISBN", "Price", "Id"];

/// List the inventory, filtered by an optional search query
pub fn list(store: &InventoryStore<LocalStorage>, search: Option<&str>, json: bool) -> Result<()> {
    let books = store.search(search.unwrap_or(""));

    if json {
        println!("{}", serde_json::to_string_pretty(&books)?);
        return Ok(());
    }

    println!("Book Inventory ({} books)", store.len());
    println!();

    if books.is_empty() {
        if store.is_empty() {
            println!("No books in your store yet");
            println!("Add your first book with `bookstore add`");
        } else {
            println!("No books match your search");
            println!("Try adjusting your search terms");
        }
        return Ok(());
    }

    print!("{}", render_table(&books));
    Ok(())
}

fn row(book: &Book) -> [String; 6] {
    [
        book.title.clone(),
        book.author.clone(),
        book.year.to_string(),
        book.isbn.clone(),
        format_price(book.price),
        book.id.to_string(),
    ]
}

/// Render books as left-aligned columns, one line per book
fn render_table(books: &[&Book]) -> String {
    let rows: Vec<[String; 6]> = books.iter().map(|book| row(book)).collect();

    let mut widths = HEADERS.map(|h| h.chars().count());
    for row in &rows {
        for (width, cell) in widths.iter_mut().zip(row) {
            *width = (*width).max(cell.chars().count());
        }
    }

    let mut out = String::new();
    push_line(&mut out, HEADERS.as_slice(), &widths);
    let rule: Vec<String> = widths.iter().map(|w| "-".repeat(*w)).collect();
    push_line(&mut out, rule.as_slice(), &widths);
    for row in &rows {
        push_line(&mut out, row.as_slice(), &widths);
    }
    out
}

fn push_line<S: AsRef<str>>(out: &mut String, cells: &[S], widths: &[usize]) {
    let line: Vec<String> = cells
        .iter()
        .zip(widths)
        .map(|(cell, width)| format!("{:<width$}", cell.as_ref(), width = *width))
        .collect();
    out.push_str(line.join("  ").trim_end());
    out.push('\n');
}
