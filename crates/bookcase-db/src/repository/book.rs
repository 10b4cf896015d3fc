//! # Book Repository
//!
//! Database operations for books.
//!
//! ## Key Operations
//! - Validated create and partial update
//! - Hard delete by id
//! - Paginated listing and filtered search
//!
//! ## Search
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    How Search Works                                     │
//! │                                                                         │
//! │  SearchCriteria { author: "Tolstoy", year_from: 1870 }                 │
//! │       │                                                                 │
//! │       ▼  compose() (bookcase-core)                                     │
//! │  [AuthorContains("tolstoy"), YearAtLeast(1870)]                        │
//! │       │                                                                 │
//! │       ▼  push_filter()                                                 │
//! │  WHERE instr(author_folded, ?) > 0 AND year >= ?                       │
//! │       │                                                                 │
//! │       ├──► SELECT COUNT(*) ...               → total                   │
//! │       └──► SELECT ... ORDER BY id LIMIT ? OFFSET ?  → items            │
//! │                                                                         │
//! │  Both queries run in one transaction, so total and items agree.        │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use bookcase_core::filter::fold_case;
use bookcase_core::validation::{validate_new, validate_patch};
use bookcase_core::{Book, BookDraft, BookPatch, Clause, Filter, Page, PageRequest, SearchCriteria};
use sqlx::{QueryBuilder, Sqlite, SqlitePool};
use tracing::debug;

use crate::error::{DbError, DbResult};

const SELECT_BOOKS: &str = "SELECT id, title, author, year FROM books";

/// Repository for book database operations.
///
/// ## Usage
/// ```rust,ignore
/// let repo = BookRepository::new(pool);
///
/// let book = repo.create("War and Peace", "Leo Tolstoy", Some(1869)).await?;
/// let same = repo.get(book.id).await?;
/// ```
#[derive(Debug, Clone)]
pub struct BookRepository {
    pool: SqlitePool,
}

impl BookRepository {
    /// Creates a new BookRepository.
    pub fn new(pool: SqlitePool) -> Self {
        BookRepository { pool }
    }

    /// Validates and stores a new book.
    ///
    /// ## Returns
    /// * `Ok(Book)` - Stored book with its new id
    /// * `Err(DbError::Validation)` - Bad title, author or year
    pub async fn create(&self, title: &str, author: &str, year: Option<i32>) -> DbResult<Book> {
        let draft = validate_new(title, author, year)?;
        self.insert(&draft).await
    }

    /// Stores an already validated draft.
    pub async fn insert(&self, draft: &BookDraft) -> DbResult<Book> {
        debug!(title = %draft.title, "Inserting book");

        let book = sqlx::query_as::<_, Book>(
            r#"
            INSERT INTO books (title, author, year, title_folded, author_folded)
            VALUES (?1, ?2, ?3, ?4, ?5)
            RETURNING id, title, author, year
            "#,
        )
        .bind(&draft.title)
        .bind(&draft.author)
        .bind(draft.year)
        .bind(fold_case(&draft.title))
        .bind(fold_case(&draft.author))
        .fetch_one(&self.pool)
        .await?;

        debug!(id = book.id, "Book inserted");
        Ok(book)
    }

    /// Gets a book by its id, if it exists.
    pub async fn find(&self, id: i64) -> DbResult<Option<Book>> {
        let book = sqlx::query_as::<_, Book>(&format!("{SELECT_BOOKS} WHERE id = ?1"))
            .bind(id)
            .fetch_optional(&self.pool)
            .await?;

        Ok(book)
    }

    /// Gets a book by its id.
    ///
    /// ## Returns
    /// * `Ok(Book)` - Book found
    /// * `Err(DbError::NotFound)` - No book with this id
    pub async fn get(&self, id: i64) -> DbResult<Book> {
        self.find(id)
            .await?
            .ok_or_else(|| DbError::not_found("Book", id))
    }

    /// Lists books in id order.
    ///
    /// ## Arguments
    /// * `skip` - Rows to skip
    /// * `limit` - Maximum rows to return; `0` returns no items
    ///
    /// ## Returns
    /// The window and the total number of books.
    pub async fn list(&self, skip: u64, limit: u32) -> DbResult<(Vec<Book>, u64)> {
        debug!(skip, limit, "Listing books");
        self.fetch_window(&Filter::all(), skip, limit).await
    }

    /// Lists one page of books with pagination metadata.
    pub async fn list_page(&self, request: PageRequest) -> DbResult<Page<Book>> {
        let (items, total) = self.list(request.skip(), request.limit()).await?;
        Ok(Page::new(items, total, request))
    }

    /// Applies a partial patch to a book.
    ///
    /// Load, validate and write happen in one `BEGIN IMMEDIATE` transaction,
    /// so concurrent updates queue on the write lock instead of failing.
    /// Any failure leaves the stored row untouched.
    ///
    /// ## Returns
    /// * `Ok(Book)` - The book as stored after the patch
    /// * `Err(DbError::NotFound)` - No book with this id
    /// * `Err(DbError::Validation)` - A supplied field is invalid
    pub async fn update(&self, id: i64, patch: &BookPatch) -> DbResult<Book> {
        debug!(id, "Updating book");

        // Take the write lock up front; a deferred read cannot be upgraded
        // while another connection is writing.
        let mut tx = self
            .pool
            .begin_with("BEGIN IMMEDIATE")
            .await
            .map_err(|e| DbError::TransactionFailed(e.to_string()))?;

        let existing = sqlx::query_as::<_, Book>(&format!("{SELECT_BOOKS} WHERE id = ?1"))
            .bind(id)
            .fetch_optional(&mut *tx)
            .await?
            .ok_or_else(|| DbError::not_found("Book", id))?;

        let updated = validate_patch(&existing, patch)?;

        if updated != existing {
            sqlx::query(
                r#"
                UPDATE books SET
                    title = ?2,
                    author = ?3,
                    year = ?4,
                    title_folded = ?5,
                    author_folded = ?6
                WHERE id = ?1
                "#,
            )
            .bind(id)
            .bind(&updated.title)
            .bind(&updated.author)
            .bind(updated.year)
            .bind(fold_case(&updated.title))
            .bind(fold_case(&updated.author))
            .execute(&mut *tx)
            .await?;
        }

        tx.commit()
            .await
            .map_err(|e| DbError::TransactionFailed(e.to_string()))?;

        Ok(updated)
    }

    /// Permanently deletes a book.
    ///
    /// ## Returns
    /// * `Ok(true)` - The book existed and was removed
    /// * `Ok(false)` - There was no such book
    pub async fn delete(&self, id: i64) -> DbResult<bool> {
        debug!(id, "Deleting book");

        let result = sqlx::query("DELETE FROM books WHERE id = ?1")
            .bind(id)
            .execute(&self.pool)
            .await?;

        Ok(result.rows_affected() > 0)
    }

    /// Searches books matching every supplied criterion.
    ///
    /// `total` counts all matches, independent of the requested page.
    ///
    /// ## Returns
    /// * `Ok(Page<Book>)` - Matches in id order, windowed by `request`
    /// * `Err(DbError::Validation)` - `year` or `year_from` below 1000
    pub async fn search(
        &self,
        criteria: &SearchCriteria,
        request: PageRequest,
    ) -> DbResult<Page<Book>> {
        let filter = criteria.compose()?;

        debug!(
            clauses = filter.clauses().len(),
            page = request.page,
            page_size = request.page_size,
            "Searching books"
        );

        let (items, total) = self
            .fetch_window(&filter, request.skip(), request.limit())
            .await?;

        debug!(count = items.len(), total, "Search returned books");
        Ok(Page::new(items, total, request))
    }

    /// Counts all books.
    pub async fn count(&self) -> DbResult<u64> {
        let count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM books")
            .fetch_one(&self.pool)
            .await?;

        Ok(count as u64)
    }

    /// Counts the rows matching `filter` and fetches one window of them.
    async fn fetch_window(
        &self,
        filter: &Filter,
        skip: u64,
        limit: u32,
    ) -> DbResult<(Vec<Book>, u64)> {
        let mut tx = self
            .pool
            .begin()
            .await
            .map_err(|e| DbError::TransactionFailed(e.to_string()))?;

        let mut count = QueryBuilder::<Sqlite>::new("SELECT COUNT(*) FROM books");
        push_filter(&mut count, filter);
        let total: i64 = count.build_query_scalar().fetch_one(&mut *tx).await?;

        let mut select = QueryBuilder::<Sqlite>::new(SELECT_BOOKS);
        push_filter(&mut select, filter);
        select
            .push(" ORDER BY id LIMIT ")
            .push_bind(i64::from(limit))
            .push(" OFFSET ")
            .push_bind(i64::try_from(skip).unwrap_or(i64::MAX));
        let items: Vec<Book> = select.build_query_as().fetch_all(&mut *tx).await?;

        tx.commit()
            .await
            .map_err(|e| DbError::TransactionFailed(e.to_string()))?;

        Ok((items, total as u64))
    }
}

/// Appends a `WHERE` clause for `filter`, one bound predicate per clause.
///
/// Year comparisons against a NULL year are never true, so undated books
/// never match a year clause.
fn push_filter(builder: &mut QueryBuilder<'_, Sqlite>, filter: &Filter) {
    for (i, clause) in filter.clauses().iter().enumerate() {
        builder.push(if i == 0 { " WHERE " } else { " AND " });

        match clause {
            Clause::TitleContains(needle) => {
                builder
                    .push("instr(title_folded, ")
                    .push_bind(needle.clone())
                    .push(") > 0");
            }
            Clause::AuthorContains(needle) => {
                builder
                    .push("instr(author_folded, ")
                    .push_bind(needle.clone())
                    .push(") > 0");
            }
            Clause::YearEquals(year) => {
                builder.push("year = ").push_bind(*year);
            }
            Clause::YearBetween(from, to) => {
                builder
                    .push("year BETWEEN ")
                    .push_bind(*from)
                    .push(" AND ")
                    .push_bind(*to);
            }
            Clause::YearAtLeast(from) => {
                builder.push("year >= ").push_bind(*from);
            }
            Clause::YearAtMost(to) => {
                builder.push("year <= ").push_bind(*to);
            }
        }
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
