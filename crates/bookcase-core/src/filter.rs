//! # Search Filter
//!
//! Turns optional search criteria into a conjunctive list of typed clauses.
//!
//! ## Composition
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  SearchCriteria                      Filter (clauses ANDed)             │
//! │  ──────────────────────────          ─────────────────────────────      │
//! │  title: "peace"             ──►      TitleContains("peace")             │
//! │  author: "TOLSTOY"          ──►      AuthorContains("tolstoy")          │
//! │  year: 1869                 ──►      YearEquals(1869)                   │
//! │  year_from: 1860, year_to: 1900 ──►  YearBetween(1860, 1900)            │
//! │  year_from only             ──►      YearAtLeast(..)                    │
//! │  year_to only               ──►      YearAtMost(..)                     │
//! │  absent / blank text        ──►      (no clause)                        │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Text clauses hold a case-folded needle; the store compares it against
//! case-folded copies of `title` and `author`. A book without a year never
//! satisfies a year clause.
//!
//! The exact year and the year range are independent clauses: when both are
//! supplied both apply.

use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::error::ValidationError;
use crate::types::Book;
use crate::validation::ValidationResult;
use crate::MIN_YEAR;

/// Case-folds text for case-insensitive matching in every script.
///
/// Lowercasing alone is context-sensitive for Greek sigma (final `ς` vs
/// medial `σ`), so both forms fold to `σ`.
pub fn fold_case(value: &str) -> String {
    value
        .to_lowercase()
        .chars()
        .map(|c| if c == 'ς' { 'σ' } else { c })
        .collect()
}

// =============================================================================
// Search Criteria
// =============================================================================

/// Optional search criteria, as supplied by the caller.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct SearchCriteria {
    /// Case-insensitive substring of the title.
    #[serde(default)]
    pub title: Option<String>,

    /// Case-insensitive substring of the author.
    #[serde(default)]
    pub author: Option<String>,

    /// Exact publication year.
    #[serde(default)]
    pub year: Option<i32>,

    /// Inclusive lower bound of the publication year.
    #[serde(default)]
    pub year_from: Option<i32>,

    /// Inclusive upper bound of the publication year.
    #[serde(default)]
    pub year_to: Option<i32>,
}

impl SearchCriteria {
    /// Criteria that match every book.
    pub fn new() -> Self {
        SearchCriteria::default()
    }

    pub fn title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    pub fn author(mut self, author: impl Into<String>) -> Self {
        self.author = Some(author.into());
        self
    }

    pub fn year(mut self, year: i32) -> Self {
        self.year = Some(year);
        self
    }

    pub fn year_from(mut self, year: i32) -> Self {
        self.year_from = Some(year);
        self
    }

    pub fn year_to(mut self, year: i32) -> Self {
        self.year_to = Some(year);
        self
    }

    /// Composes the criteria into a filter. See [`compose`].
    pub fn compose(&self) -> ValidationResult<Filter> {
        compose(self)
    }
}

// =============================================================================
// Filter
// =============================================================================

/// One typed predicate over a book.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Clause {
    /// Folded title contains the folded needle.
    TitleContains(String),
    /// Folded author contains the folded needle.
    AuthorContains(String),
    YearEquals(i32),
    /// Inclusive on both ends.
    YearBetween(i32, i32),
    YearAtLeast(i32),
    YearAtMost(i32),
}

impl Clause {
    /// Evaluates the clause against a book.
    pub fn matches(&self, book: &Book) -> bool {
        match self {
            Clause::TitleContains(needle) => fold_case(&book.title).contains(needle.as_str()),
            Clause::AuthorContains(needle) => fold_case(&book.author).contains(needle.as_str()),
            Clause::YearEquals(y) => book.year == Some(*y),
            Clause::YearBetween(from, to) => book.year.is_some_and(|y| *from <= y && y <= *to),
            Clause::YearAtLeast(from) => book.year.is_some_and(|y| y >= *from),
            Clause::YearAtMost(to) => book.year.is_some_and(|y| y <= *to),
        }
    }
}

/// A conjunction of clauses. An empty filter matches everything.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Filter {
    clauses: Vec<Clause>,
}

impl Filter {
    /// The filter that matches every book.
    pub fn all() -> Self {
        Filter::default()
    }

    /// The clauses, in composition order.
    pub fn clauses(&self) -> &[Clause] {
        &self.clauses
    }

    pub fn is_empty(&self) -> bool {
        self.clauses.is_empty()
    }

    /// Returns true if the book satisfies every clause.
    pub fn matches(&self, book: &Book) -> bool {
        self.clauses.iter().all(|clause| clause.matches(book))
    }
}

/// Builds the filter for a set of criteria.
///
/// ## Errors
/// `year` and `year_from`, when supplied, must be at least 1000.
/// `year_to` is unconstrained; a range with `year_from > year_to` is valid
/// and matches nothing.
///
/// ## Example
/// ```rust
/// use bookcase_core::filter::{Clause, SearchCriteria};
///
/// let filter = SearchCriteria::new()
///     .author("Tolstoy")
///     .year_from(1870)
///     .compose()
///     .unwrap();
///
/// assert_eq!(
///     filter.clauses(),
///     &[Clause::AuthorContains("tolstoy".to_string()), Clause::YearAtLeast(1870)]
/// );
/// ```
pub fn compose(criteria: &SearchCriteria) -> ValidationResult<Filter> {
    for (field, value) in [("year", criteria.year), ("year_from", criteria.year_from)] {
        if let Some(y) = value {
            if y < MIN_YEAR {
                return Err(ValidationError::below_minimum(field, MIN_YEAR as i64));
            }
        }
    }

    let mut clauses = Vec::new();

    if let Some(needle) = text_needle(criteria.title.as_deref()) {
        clauses.push(Clause::TitleContains(needle));
    }

    if let Some(needle) = text_needle(criteria.author.as_deref()) {
        clauses.push(Clause::AuthorContains(needle));
    }

    if let Some(year) = criteria.year {
        clauses.push(Clause::YearEquals(year));
    }

    match (criteria.year_from, criteria.year_to) {
        (Some(from), Some(to)) => clauses.push(Clause::YearBetween(from, to)),
        (Some(from), None) => clauses.push(Clause::YearAtLeast(from)),
        (None, Some(to)) => clauses.push(Clause::YearAtMost(to)),
        (None, None) => {}
    }

    Ok(Filter { clauses })
}

/// Blank text imposes no constraint. Other text is matched as given,
/// surrounding whitespace included.
fn text_needle(value: Option<&str>) -> Option<String> {
    value.filter(|v| !v.trim().is_empty()).map(fold_case)
}

// =============================================================================
// Unit Tests
// =============================================================================
