//! # Domain Types
//!
//! Core domain types used throughout the catalog.
//!
//! ## Type Overview
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Domain Types                                    │
//! │                                                                         │
//! │  ┌─────────────────┐   ┌─────────────────┐   ┌─────────────────────┐   │
//! │  │   BookDraft     │   │      Book       │   │     BookPatch       │   │
//! │  │  ─────────────  │   │  ─────────────  │   │  ─────────────────  │   │
//! │  │  title          │──►│  id (i64)       │◄──│  title?             │   │
//! │  │  author         │   │  title          │   │  author?            │   │
//! │  │  year?          │   │  author         │   │  year? (absent /    │   │
//! │  │  (validated,    │   │  year?          │   │   null / value)     │   │
//! │  │   no id yet)    │   │                 │   │                     │   │
//! │  └─────────────────┘   └─────────────────┘   └─────────────────────┘   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! A `BookDraft` only exists after validation; the repository turns it into
//! a `Book` by assigning the next id.

use serde::{Deserialize, Deserializer, Serialize};
use ts_rs::TS;

// =============================================================================
// Book
// =============================================================================

/// A persisted book record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[cfg_attr(feature = "sqlx", derive(sqlx::FromRow))]
#[ts(export)]
pub struct Book {
    /// System-assigned identifier, increasing in insertion order.
    pub id: i64,

    /// Title, trimmed, 1-255 characters.
    pub title: String,

    /// Author, trimmed, 1-255 characters, any script.
    pub author: String,

    /// Publication year, if known.
    pub year: Option<i32>,
}

impl Book {
    /// Attaches a store-assigned id to a validated draft.
    pub fn from_draft(id: i64, draft: BookDraft) -> Self {
        Book {
            id,
            title: draft.title,
            author: draft.author,
            year: draft.year,
        }
    }
}

// =============================================================================
// Book Draft
// =============================================================================

/// Validated field values for a book that has not been stored yet.
///
/// Produced by [`crate::validation::validate_new`]; the fields already hold
/// their trimmed, stored form.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BookDraft {
    pub title: String,
    pub author: String,
    pub year: Option<i32>,
}

// =============================================================================
// Book Patch
// =============================================================================

/// A partial update.
///
/// Each field is `None` when the caller did not supply it. `year` has a
/// second level: `Some(None)` clears the year, `Some(Some(y))` sets it.
///
/// ## Wire Form
/// ```text
/// {}                      → nothing changes
/// {"author": "X"}         → author only
/// {"year": null}          → year cleared
/// {"year": 1869}          → year set
/// {"title": null}         → title untouched (title cannot be cleared)
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct BookPatch {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub author: Option<String>,

    #[serde(
        default,
        deserialize_with = "present",
        skip_serializing_if = "Option::is_none"
    )]
    pub year: Option<Option<i32>>,
}

impl BookPatch {
    /// An empty patch (changes nothing).
    pub fn new() -> Self {
        BookPatch::default()
    }

    /// Sets the new title.
    pub fn title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    /// Sets the new author.
    pub fn author(mut self, author: impl Into<String>) -> Self {
        self.author = Some(author.into());
        self
    }

    /// Sets the new year; `None` clears it.
    pub fn year(mut self, year: Option<i32>) -> Self {
        self.year = Some(year);
        self
    }

    /// Returns true if no field is supplied.
    pub fn is_empty(&self) -> bool {
        self.title.is_none() && self.author.is_none() && self.year.is_none()
    }
}

/// Marks a key as present even when its value is `null`.
///
/// Only runs when the key exists, so `#[serde(default)]` keeps the outer
/// `None` for an absent key.
fn present<'de, D, T>(deserializer: D) -> Result<Option<T>, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de>,
{
    T::deserialize(deserializer).map(Some)
}

// =============================================================================
// Unit Tests
// =============================================================================
