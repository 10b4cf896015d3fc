//! # Validation Module
//!
//! Field rules for books, applied on creation and on patch application.
//!
//! ## Rules
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  Field    Rule                                         Error reason     │
//! │  ───────  ───────────────────────────────────────────  ─────────────    │
//! │  title    trimmed, non-empty                            empty           │
//! │           at most 255 characters after trimming         too_long        │
//! │  author   same as title, any script                     empty/too_long  │
//! │  year     absent, or 1000 ≤ year ≤ current year + 2     out_of_range    │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Every function here is pure. The `*_in` variants take the current
//! calendar year explicitly; the plain variants read it from the clock.
//!
//! ## Usage
//! ```rust
//! use bookcase_core::validation::{validate_new_in, validate_patch_in};
//! use bookcase_core::{Book, BookPatch};
//!
//! let draft = validate_new_in("Anna Karenina", "Leo Tolstoy", Some(1877), 2026).unwrap();
//! let book = Book::from_draft(1, draft);
//!
//! let patched = validate_patch_in(&book, &BookPatch::new().year(None), 2026).unwrap();
//! assert_eq!(patched.year, None);
//! assert_eq!(patched.title, "Anna Karenina");
//! ```

use chrono::{Datelike, Utc};

use crate::error::ValidationError;
use crate::types::{Book, BookDraft, BookPatch};
use crate::{FUTURE_YEAR_ALLOWANCE, MAX_TEXT_LENGTH, MIN_YEAR};

/// Result type for validation operations.
pub type ValidationResult<T> = Result<T, ValidationError>;

/// The current calendar year (UTC).
pub fn current_year() -> i32 {
    Utc::now().year()
}

// =============================================================================
// Field Validators
// =============================================================================

/// Trims a required text field and checks its length.
///
/// Returns the stored (trimmed) form.
pub fn validate_text(field: &str, value: &str) -> ValidationResult<String> {
    let value = value.trim();

    if value.is_empty() {
        return Err(ValidationError::empty(field));
    }

    if value.chars().count() > MAX_TEXT_LENGTH {
        return Err(ValidationError::too_long(field, MAX_TEXT_LENGTH));
    }

    Ok(value.to_string())
}

/// Validates an optional publication year against `current_year`.
///
/// ## Example
/// ```rust
/// use bookcase_core::validation::validate_year;
///
/// assert!(validate_year(None, 2026).is_ok());
/// assert!(validate_year(Some(1869), 2026).is_ok());
/// assert!(validate_year(Some(2028), 2026).is_ok());
/// assert!(validate_year(Some(2029), 2026).is_err());
/// assert!(validate_year(Some(999), 2026).is_err());
/// ```
pub fn validate_year(year: Option<i32>, current_year: i32) -> ValidationResult<Option<i32>> {
    let max = current_year + FUTURE_YEAR_ALLOWANCE;

    match year {
        Some(y) if !(MIN_YEAR..=max).contains(&y) => Err(ValidationError::out_of_range(
            "year",
            MIN_YEAR as i64,
            max as i64,
        )),
        _ => Ok(year),
    }
}

// =============================================================================
// Entity Validators
// =============================================================================

/// Validates the fields of a new book against the current year.
pub fn validate_new(title: &str, author: &str, year: Option<i32>) -> ValidationResult<BookDraft> {
    validate_new_in(title, author, year, current_year())
}

/// Validates the fields of a new book against an explicit current year.
///
/// Fields are checked in order title, author, year; the first failure wins.
pub fn validate_new_in(
    title: &str,
    author: &str,
    year: Option<i32>,
    current_year: i32,
) -> ValidationResult<BookDraft> {
    Ok(BookDraft {
        title: validate_text("title", title)?,
        author: validate_text("author", author)?,
        year: validate_year(year, current_year)?,
    })
}

/// Applies a patch to an existing book against the current year.
pub fn validate_patch(existing: &Book, patch: &BookPatch) -> ValidationResult<Book> {
    validate_patch_in(existing, patch, current_year())
}

/// Applies a patch to an existing book against an explicit current year.
///
/// ## Semantics
/// - A field absent from the patch keeps its existing value, unvalidated.
/// - A supplied field is validated and replaces the existing value.
/// - `year: Some(None)` clears the year.
///
/// `existing` is never modified; on error nothing is applied.
pub fn validate_patch_in(
    existing: &Book,
    patch: &BookPatch,
    current_year: i32,
) -> ValidationResult<Book> {
    let mut updated = existing.clone();

    if let Some(title) = &patch.title {
        updated.title = validate_text("title", title)?;
    }

    if let Some(author) = &patch.author {
        updated.author = validate_text("author", author)?;
    }

    if let Some(year) = patch.year {
        updated.year = validate_year(year, current_year)?;
    }

    Ok(updated)
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    const YEAR: i32 = 2026;

    fn tolstoy() -> Book {
        Book {
            id: 1,
            title: "War and Peace".to_string(),
            author: "Leo Tolstoy".to_string(),
            year: Some(1869),
        }
    }

    #[test]
    fn test_validate_new_trims() {
        let draft = validate_new_in("  War and Peace\t", "\nLeo Tolstoy ", None, YEAR).unwrap();
        assert_eq!(draft.title, "War and Peace");
        assert_eq!(draft.author, "Leo Tolstoy");
        assert_eq!(draft.year, None);
    }

    #[test]
    fn test_validate_new_empty_fields() {
        let err = validate_new_in("", "Author", None, YEAR).unwrap_err();
        assert_eq!(err.field(), "title");
        assert_eq!(err.reason(), "empty");

        let err = validate_new_in("Title", "   ", None, YEAR).unwrap_err();
        assert_eq!(err.field(), "author");
        assert_eq!(err.reason(), "empty");
    }

    #[test]
    fn test_validate_new_too_long() {
        assert!(validate_new_in(&"A".repeat(255), "Author", None, YEAR).is_ok());

        let err = validate_new_in(&"A".repeat(256), "Author", None, YEAR).unwrap_err();
        assert_eq!(err.field(), "title");
        assert_eq!(err.reason(), "too_long");

        // Surrounding whitespace does not count towards the limit
        let padded = format!("  {}  ", "B".repeat(255));
        assert!(validate_new_in("Title", &padded, None, YEAR).is_ok());
    }

    #[test]
    fn test_length_counts_characters_not_bytes() {
        // 255 Cyrillic characters are 510 bytes
        let author = "Л".repeat(255);
        assert!(validate_new_in("Title", &author, None, YEAR).is_ok());
    }

    #[test]
    fn test_validate_year_bounds() {
        assert!(validate_new_in("T", "A", Some(1000), YEAR).is_ok());
        assert!(validate_new_in("T", "A", Some(YEAR + 2), YEAR).is_ok());

        let err = validate_new_in("T", "A", Some(999), YEAR).unwrap_err();
        assert_eq!(err.field(), "year");
        assert_eq!(err.reason(), "out_of_range");

        assert!(validate_new_in("T", "A", Some(YEAR + 3), YEAR).is_err());
    }

    #[test]
    fn test_first_failing_field_is_reported() {
        let err = validate_new_in("", "", Some(1), YEAR).unwrap_err();
        assert_eq!(err.field(), "title");
    }

    #[test]
    fn test_patch_only_author() {
        let book = tolstoy();
        let patched = validate_patch_in(&book, &BookPatch::new().author(" X "), YEAR).unwrap();

        assert_eq!(patched.author, "X");
        assert_eq!(patched.title, book.title);
        assert_eq!(patched.year, book.year);
        assert_eq!(patched.id, book.id);
    }

    #[test]
    fn test_patch_clear_year() {
        let patched = validate_patch_in(&tolstoy(), &BookPatch::new().year(None), YEAR).unwrap();
        assert_eq!(patched.year, None);
    }

    #[test]
    fn test_empty_patch_is_identity() {
        let book = tolstoy();
        assert_eq!(validate_patch_in(&book, &BookPatch::new(), YEAR).unwrap(), book);
    }

    #[test]
    fn test_patch_rejects_invalid_supplied_field() {
        let err = validate_patch_in(&tolstoy(), &BookPatch::new().title("  "), YEAR).unwrap_err();
        assert_eq!(err.field(), "title");

        let err =
            validate_patch_in(&tolstoy(), &BookPatch::new().year(Some(500)), YEAR).unwrap_err();
        assert_eq!(err.field(), "year");
    }

    #[test]
    fn test_patch_does_not_revalidate_absent_fields() {
        // An untouched year is carried over even if it would fail today
        let mut book = tolstoy();
        book.year = Some(YEAR + 5);
        let patched = validate_patch_in(&book, &BookPatch::new().author("Y"), YEAR).unwrap();
        assert_eq!(patched.year, Some(YEAR + 5));
    }

    #[test]
    fn test_clock_variants_accept_current_year() {
        let year = current_year();
        assert!(validate_new("T", "A", Some(year)).is_ok());
        assert!(validate_patch(&tolstoy(), &BookPatch::new().year(Some(year))).is_ok());
    }
}
