//! # bookcase-core: Pure Catalog Logic
//!
//! This crate is the **heart** of the book catalog. It contains the field
//! rules, patch semantics, search filter and pagination arithmetic as pure
//! functions with zero I/O dependencies.
//!
//! ## Architecture Position
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                        Bookcase Architecture                            │
//! │                                                                         │
//! │  ┌─────────────────────────────────────────────────────────────────┐   │
//! │  │                  API boundary (external)                        │   │
//! │  │   CreateBook, GetBook, ListBooks, UpdateBook, SearchBooks ...   │   │
//! │  └─────────────────────────────┬───────────────────────────────────┘   │
//! │                                │                                        │
//! │  ┌─────────────────────────────▼───────────────────────────────────┐   │
//! │  │                    bookcase-db (Repository)                     │   │
//! │  └─────────────────────────────┬───────────────────────────────────┘   │
//! │                                │                                        │
//! │  ┌─────────────────────────────▼───────────────────────────────────┐   │
//! │  │               ★ bookcase-core (THIS CRATE) ★                    │   │
//! │  │                                                                 │   │
//! │  │   ┌───────────┐  ┌────────────┐  ┌──────────┐  ┌────────────┐  │   │
//! │  │   │   types   │  │ validation │  │  filter  │  │ pagination │  │   │
//! │  │   │   Book    │  │ new/patch  │  │ Criteria │  │ PageRequest│  │   │
//! │  │   │ BookPatch │  │   rules    │  │ Clauses  │  │    Page    │  │   │
//! │  │   └───────────┘  └────────────┘  └──────────┘  └────────────┘  │   │
//! │  │                                                                 │   │
//! │  │   NO I/O • NO DATABASE • NO NETWORK • PURE FUNCTIONS           │   │
//! │  └─────────────────────────────────────────────────────────────────┘   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Modules
//!
//! - [`types`] - Domain types (Book, BookDraft, BookPatch)
//! - [`error`] - Validation error type
//! - [`validation`] - Field rules for new books and patches
//! - [`filter`] - Search criteria and the composed conjunctive filter
//! - [`pagination`] - Page windows and page-count arithmetic
//!
//! ## Example Usage
//!
//! ```rust
//! use bookcase_core::validation::validate_new_in;
//! use bookcase_core::pagination::PageRequest;
//!
//! let draft = validate_new_in("  War and Peace ", "Leo Tolstoy", Some(1869), 2026).unwrap();
//! assert_eq!(draft.title, "War and Peace");
//!
//! let request = PageRequest::new(3, 10);
//! assert_eq!(request.skip(), 20);
//! assert_eq!(request.total_pages(25), 3);
//! ```

// =============================================================================
// Module Declarations
// =============================================================================

pub mod error;
pub mod filter;
pub mod pagination;
pub mod types;
pub mod validation;

// =============================================================================
// Re-exports for Convenience
// =============================================================================

pub use error::ValidationError;
pub use filter::{Clause, Filter, SearchCriteria};
pub use pagination::{Page, PageRequest};
pub use types::*;

// =============================================================================
// Crate-Level Constants
// =============================================================================

/// Maximum length of `title` and `author`, in characters, after trimming.
pub const MAX_TEXT_LENGTH: usize = 255;

/// Earliest publication year accepted for a book.
pub const MIN_YEAR: i32 = 1000;

/// How many years past the current calendar year a publication year may be.
///
/// ## Business Reason
/// Lets announced but not yet published titles into the catalog.
pub const FUTURE_YEAR_ALLOWANCE: i32 = 2;

/// Default number of items per page.
pub const DEFAULT_PAGE_SIZE: u32 = 10;

/// Largest page size a caller may request.
pub const MAX_PAGE_SIZE: u32 = 100;
