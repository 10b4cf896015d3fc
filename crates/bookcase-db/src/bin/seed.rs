//! # Seed Data Generator
//!
//! Populates the catalog with sample books for development.
//!
//! ## Usage
//! ```bash
//! # Seed the database named by BOOKCASE_DATABASE_PATH (default ./books.db)
//! cargo run -p bookcase-db --bin seed
//!
//! # Seed a specific file, repeating the sample list three times
//! cargo run -p bookcase-db --bin seed -- --db ./data/books.db --rounds 3
//! ```
//!
//! Set `RUST_LOG=debug` to see every repository call.

use bookcase_core::{PageRequest, SearchCriteria};
use bookcase_db::{Database, DbConfig};
use clap::Parser;
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

/// Sample catalog: (title, author, year)
const BOOKS: &[(&str, &str, Option<i32>)] = &[
    ("War and Peace", "Leo Tolstoy", Some(1869)),
    ("Anna Karenina", "Leo Tolstoy", Some(1877)),
    ("Crime and Punishment", "Fyodor Dostoevsky", Some(1866)),
    ("The Brothers Karamazov", "Fyodor Dostoevsky", Some(1880)),
    ("Преступление и наказание", "Фёдор Достоевский", Some(1866)),
    ("Dead Souls", "Nikolai Gogol", Some(1842)),
    ("Eugene Onegin", "Alexander Pushkin", Some(1833)),
    ("Fathers and Sons", "Ivan Turgenev", Some(1862)),
    ("Madame Bovary", "Gustave Flaubert", Some(1857)),
    ("Les Misérables", "Victor Hugo", Some(1862)),
    ("Don Quixote", "Miguel de Cervantes", Some(1605)),
    ("Pride and Prejudice", "Jane Austen", Some(1813)),
    ("Moby-Dick", "Herman Melville", Some(1851)),
    ("Middlemarch", "George Eliot", Some(1871)),
    ("Ulysses", "James Joyce", Some(1922)),
    ("In Search of Lost Time", "Marcel Proust", Some(1913)),
    ("The Master and Margarita", "Mikhail Bulgakov", Some(1967)),
    ("One Hundred Years of Solitude", "Gabriel García Márquez", Some(1967)),
    ("吾輩は猫である", "夏目漱石", Some(1905)),
    ("The Epic of Gilgamesh", "Unknown", None),
];

/// Seed the book catalog with sample data.
#[derive(Debug, Parser)]
#[command(name = "seed", version)]
struct Args {
    /// Database file path (overrides BOOKCASE_DATABASE_PATH)
    #[arg(short, long)]
    db: Option<String>,

    /// How many times to insert the sample list
    #[arg(short, long, default_value_t = 1)]
    rounds: u32,

    /// Seed even if the catalog already has books
    #[arg(long)]
    force: bool,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let args = Args::parse();

    let mut config = DbConfig::from_env()?;
    if let Some(path) = args.db {
        config.database_path = path.into();
    }

    info!(path = %config.database_path.display(), rounds = args.rounds, "Seeding catalog");

    let db = Database::new(config).await?;
    let books = db.books();

    let existing = books.count().await?;
    if existing > 0 && !args.force {
        warn!(existing, "Catalog already has books, skipping seed (use --force to add more)");
        db.close().await;
        return Ok(());
    }

    let start = std::time::Instant::now();
    let mut inserted = 0u64;

    for _ in 0..args.rounds {
        for (title, author, year) in BOOKS {
            match books.create(title, author, *year).await {
                Ok(_) => inserted += 1,
                Err(e) => warn!(title, error = %e, "Failed to insert book"),
            }
        }
    }

    info!(inserted, elapsed = ?start.elapsed(), "Seed complete");

    // Sanity-check the search path
    let page = books
        .search(&SearchCriteria::new().author("tolstoy"), PageRequest::default())
        .await?;
    info!(total = page.total, total_pages = page.total_pages, "Search 'tolstoy'");

    let page = books
        .search(
            &SearchCriteria::new().year_from(1850).year_to(1900),
            PageRequest::default(),
        )
        .await?;
    info!(total = page.total, "Search 1850..=1900");

    db.close().await;
    Ok(())
}
