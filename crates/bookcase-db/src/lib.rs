//! # bookcase-db: Database Layer for Bookcase
//!
//! This crate provides persistent storage for the book catalog.
//! It uses SQLite with sqlx for async operations.
//!
//! ## Architecture Position
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                        Bookcase Data Flow                               │
//! │                                                                         │
//! │  API boundary (SearchBooks)                                            │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  ┌─────────────────────────────────────────────────────────────────┐   │
//! │  │                     bookcase-db (THIS CRATE)                    │   │
//! │  │                                                                 │   │
//! │  │   ┌───────────────┐    ┌───────────────┐    ┌──────────────┐  │   │
//! │  │   │   Database    │    │  Repository   │    │  Migrations  │  │   │
//! │  │   │   (pool.rs)   │    │   (book.rs)   │    │  (embedded)  │  │   │
//! │  │   │               │    │               │    │              │  │   │
//! │  │   │ SqlitePool    │◄───│ BookRepository│    │ 001_books    │  │   │
//! │  │   └───────────────┘    └───────┬───────┘    └──────────────┘  │   │
//! │  │                                │ validate / compose / window   │   │
//! │  │                                ▼                                │   │
//! │  │                          bookcase-core                          │   │
//! │  └─────────────────────────────────────────────────────────────────┘   │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  SQLite database file (books.db)                                       │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Module Organization
//!
//! - [`pool`] - Connection pool creation and configuration
//! - [`migrations`] - Embedded database migrations
//! - [`error`] - Database error types
//! - [`repository`] - Repository implementations
//!
//! ## Usage
//!
//! ```rust,ignore
//! use bookcase_db::{Database, DbConfig};
//! use bookcase_core::{PageRequest, SearchCriteria};
//!
//! let db = Database::new(DbConfig::new("./books.db")).await?;
//!
//! let book = db.books().create("War and Peace", "Leo Tolstoy", Some(1869)).await?;
//! let page = db
//!     .books()
//!     .search(&SearchCriteria::new().author("tolstoy"), PageRequest::default())
//!     .await?;
//!
//! db.close().await;
//! ```

// =============================================================================
// Module Declarations
// =============================================================================

pub mod error;
pub mod migrations;
pub mod pool;
pub mod repository;

// =============================================================================
// Re-exports
// =============================================================================

pub use error::{ConfigError, DbError, DbResult, ErrorKind};
pub use pool::{Database, DbConfig};

pub use repository::book::BookRepository;
