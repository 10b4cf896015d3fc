//! # Repository Module
//!
//! Database repository implementations for the catalog.
//!
//! ## Repository Pattern
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Repository Pattern                                   │
//! │                                                                         │
//! │  API boundary                                                          │
//! │       │  db.books().search(&criteria, page)                            │
//! │       ▼                                                                 │
//! │  BookRepository                                                        │
//! │  ├── create / get / find                                               │
//! │  ├── list / list_page                                                  │
//! │  ├── update (partial patch)                                            │
//! │  ├── delete (hard delete)                                              │
//! │  └── search (filter + window)                                          │
//! │       │  SQL                                                            │
//! │       ▼                                                                 │
//! │  SQLite Database                                                       │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Available Repositories
//!
//! - [`BookRepository`](book::BookRepository) - Book CRUD and search

pub mod book;
