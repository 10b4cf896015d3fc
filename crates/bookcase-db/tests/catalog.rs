//! End-to-end catalog behaviour through the public `Database` API.

use bookcase_core::{BookPatch, PageRequest, SearchCriteria};
use bookcase_db::{Database, DbConfig, DbError, ErrorKind};

async fn open() -> Database {
    Database::new(DbConfig::in_memory()).await.unwrap()
}

async fn tolstoy(db: &Database) {
    db.books()
        .create("War and Peace", "Leo Tolstoy", Some(1869))
        .await
        .unwrap();
    db.books()
        .create("Anna Karenina", "Leo Tolstoy", Some(1877))
        .await
        .unwrap();
}

#[tokio::test]
async fn create_then_get_round_trips() {
    let db = open().await;
    let created = db
        .books()
        .create("  The Idiot  ", "  Fyodor Dostoevsky ", Some(1869))
        .await
        .unwrap();

    let fetched = db.books().get(created.id).await.unwrap();
    assert_eq!(fetched.title, "The Idiot");
    assert_eq!(fetched.author, "Fyodor Dostoevsky");
    assert_eq!(fetched.year, Some(1869));
}

#[tokio::test]
async fn partial_update_changes_only_supplied_field() {
    let db = open().await;
    let book = db
        .books()
        .create("War and Peace", "Leo Tolstoy", Some(1869))
        .await
        .unwrap();

    let updated = db
        .books()
        .update(book.id, &BookPatch::new().author("X"))
        .await
        .unwrap();

    assert_eq!(updated.author, "X");
    assert_eq!(updated.title, book.title);
    assert_eq!(updated.year, book.year);
    assert_eq!(db.books().get(book.id).await.unwrap(), updated);
}

#[tokio::test]
async fn delete_is_true_once_then_not_found() {
    let db = open().await;
    let book = db.books().create("T", "A", None).await.unwrap();

    assert!(db.books().delete(book.id).await.unwrap());
    assert!(matches!(
        db.books().get(book.id).await,
        Err(DbError::NotFound { .. })
    ));
    assert!(!db.books().delete(book.id).await.unwrap());
}

#[tokio::test]
async fn validation_failures_name_the_field() {
    let db = open().await;

    let err = db.books().create("", "Author", None).await.unwrap_err();
    assert_eq!(err.kind(), ErrorKind::Validation);
    assert_eq!(err.as_validation().unwrap().field(), "title");

    let err = db.books().create("T", "A", Some(999)).await.unwrap_err();
    assert_eq!(err.as_validation().unwrap().field(), "year");
    assert_eq!(err.as_validation().unwrap().reason(), "out_of_range");
}

#[tokio::test]
async fn pagination_arithmetic() {
    let db = open().await;

    let page = db.books().list_page(PageRequest::new(1, 10)).await.unwrap();
    assert_eq!(page.total, 0);
    assert_eq!(page.total_pages, 0);

    for i in 0..25 {
        db.books()
            .create(&format!("Volume {i}"), "Serial Author", None)
            .await
            .unwrap();
    }

    let page = db.books().list_page(PageRequest::new(3, 10)).await.unwrap();
    assert_eq!(page.total, 25);
    assert_eq!(page.total_pages, 3);
    assert_eq!(page.items.len(), 5);
}

#[tokio::test]
async fn search_by_author_and_year_range() {
    let db = open().await;
    tolstoy(&db).await;

    let page = db
        .books()
        .search(&SearchCriteria::new().author("tolstoy"), PageRequest::default())
        .await
        .unwrap();
    assert_eq!(page.total, 2);

    let page = db
        .books()
        .search(
            &SearchCriteria::new().year_from(1870).year_to(1900),
            PageRequest::default(),
        )
        .await
        .unwrap();
    assert_eq!(page.total, 1);
    assert_eq!(page.items[0].title, "Anna Karenina");
}

#[tokio::test]
async fn repeated_listing_is_stable() {
    let db = open().await;
    tolstoy(&db).await;

    let first = db.books().list_page(PageRequest::new(1, 10)).await.unwrap();
    let second = db.books().list_page(PageRequest::new(1, 10)).await.unwrap();
    assert_eq!(first, second);
}

#[tokio::test]
async fn catalog_survives_reopen_without_reusing_ids() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("books.db");

    let last_id = {
        let db = Database::new(DbConfig::new(&path)).await.unwrap();
        db.books().create("Kept", "A", Some(1900)).await.unwrap();
        let gone = db.books().create("Gone", "A", None).await.unwrap();
        assert!(db.books().delete(gone.id).await.unwrap());
        db.close().await;
        gone.id
    };

    let db = Database::new(DbConfig::new(&path)).await.unwrap();
    assert_eq!(db.books().count().await.unwrap(), 1);

    let next = db.books().create("New", "A", None).await.unwrap();
    assert!(next.id > last_id);
    db.close().await;
}

#[tokio::test]
async fn concurrent_creates_get_distinct_ids() {
    let dir = tempfile::tempdir().unwrap();
    let db = Database::new(DbConfig::new(dir.path().join("books.db")).max_connections(4))
        .await
        .unwrap();

    let handles: Vec<_> = (0..8)
        .map(|i| {
            let books = db.books();
            tokio::spawn(async move { books.create(&format!("Book {i}"), "Writer", None).await })
        })
        .collect();

    let mut ids = Vec::new();
    for handle in handles {
        ids.push(handle.await.unwrap().unwrap().id);
    }
    ids.sort_unstable();
    ids.dedup();

    assert_eq!(ids.len(), 8);
    assert_eq!(db.books().count().await.unwrap(), 8);
    db.close().await;
}

#[tokio::test(flavor = "multi_thread", worker_threads = 4)]
async fn concurrent_updates_all_succeed() {
    let dir = tempfile::tempdir().unwrap();
    let db = Database::new(DbConfig::new(dir.path().join("books.db")).max_connections(8))
        .await
        .unwrap();

    let mut ids = Vec::new();
    for i in 0..16 {
        let book = db
            .books()
            .create(&format!("Book {i}"), "Writer", Some(1900))
            .await
            .unwrap();
        ids.push(book.id);
    }

    for round in 0..20 {
        let handles: Vec<_> = ids
            .iter()
            .map(|&id| {
                let books = db.books();
                tokio::spawn(async move {
                    books
                        .update(id, &BookPatch::new().author(format!("Writer {round}")))
                        .await
                })
            })
            .collect();

        for handle in handles {
            let book = handle.await.unwrap().unwrap();
            assert_eq!(book.author, format!("Writer {round}"));
        }
    }

    let page = db
        .books()
        .search(&SearchCriteria::new().author("writer 19"), PageRequest::new(1, 100))
        .await
        .unwrap();
    assert_eq!(page.total, 16);
    db.close().await;
}
