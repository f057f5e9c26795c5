//! Bookstore CLI - Command-line interface for the book inventory

mod commands;

use anyhow::Result;
use bookstore_core::{IsbnMatch, StoreConfig};
use clap::{Parser, Subcommand};
use std::path::PathBuf;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[derive(Parser)]
#[command(name = "bookstore")]
#[command(author, version, about = "Manage a book store inventory", long_about = None)]
struct Cli {
    /// Verbose output
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Directory holding the inventory file
    #[arg(long, global = true, env = "BOOKSTORE_DATA_DIR")]
    data_dir: Option<PathBuf>,

    /// Treat ISBNs differing only in hyphens, spaces or case as duplicates
    #[arg(long, global = true)]
    normalize_isbn: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Add a book to the inventory
    Add {
        /// Book title
        #[arg(long)]
        title: String,

        /// Author name
        #[arg(long)]
        author: String,

        /// Publication year
        #[arg(long, allow_hyphen_values = true)]
        year: String,

        /// ISBN (must be unique in the inventory)
        #[arg(long)]
        isbn: String,

        /// Price in dollars
        #[arg(long, allow_hyphen_values = true)]
        price: String,
    },

    /// Remove a book from the inventory
    Remove {
        /// Id of the book, as shown by `list`
        id: String,

        /// Skip the confirmation prompt
        #[arg(short, long)]
        yes: bool,
    },

    /// List books, optionally filtered by title, author or ISBN
    List {
        /// Case-insensitive search text
        #[arg(short, long)]
        search: Option<String>,

        /// Output as JSON
        #[arg(long)]
        json: bool,
    },

    /// Show inventory statistics
    Stats {
        /// Output as JSON
        #[arg(long)]
        json: bool,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize tracing
    let filter = if cli.verbose {
        "bookstore_cli=debug,bookstore_core=debug"
    } else {
        "bookstore_cli=info,bookstore_core=warn"
    };

    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(filter))
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let data_dir = cli.data_dir.unwrap_or_else(default_data_dir);
    let isbn_match = if cli.normalize_isbn {
        IsbnMatch::Normalized
    } else {
        IsbnMatch::Exact
    };
    let config = StoreConfig::new().with_isbn_match(isbn_match);
    let store = commands::open_store(&data_dir, config);

    match cli.command {
        Commands::Add {
            title,
            author,
            year,
            isbn,
            price,
        } => commands::add(store, title, author, year, isbn, price),

        Commands::Remove { id, yes } => commands::remove(store, &id, yes),

        Commands::List { search, json } => commands::list(&store, search.as_deref(), json),

        Commands::Stats { json } => commands::stats(&store, json),
    }
}

fn default_data_dir() -> PathBuf {
    if let Some(proj_dirs) = directories::ProjectDirs::from("com", "bookstore", "Bookstore") {
        proj_dirs.data_dir().to_path_buf()
    } else {
        // Fallback to current directory
        PathBuf::from("bookstore_data")
    }
}
