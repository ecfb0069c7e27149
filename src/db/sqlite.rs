use axum::async_trait;
use futures::TryStreamExt;
use sqlx::{sqlite::SqlitePoolOptions, Connection, SqlitePool};

use crate::types::book::Book;

use super::{BookStore, StoreError, INSERT_BOOK, SELECT_ALL_BOOKS, SELECT_BOOK_BY_ISBN};

/// [`BookStore`] backed by a SQLite pool.
///
/// Used for local development and tests.
#[derive(Debug, Clone)]
pub struct SqliteBookStore {
    pool: SqlitePool,
}

impl SqliteBookStore {
    pub async fn connect(url: &str) -> Result<Self, StoreError> {
        let options = SqlitePoolOptions::new();

        // Every connection to an in-memory database opens its own empty database,
        // so the pool must keep exactly one alive.
        let options = match is_in_memory(url) {
            true => options
                .max_connections(1)
                .idle_timeout(None)
                .max_lifetime(None),
            false => options,
        };

        let pool = options.connect(url).await.map_err(StoreError::Connect)?;

        let store = Self::from_pool(pool);
        store.ping().await?;

        tracing::info!("Connected to SQLite");

        Ok(store)
    }

    /// Wraps an already configured pool without pinging it.
    pub fn from_pool(pool: SqlitePool) -> Self {
        Self { pool }
    }

    async fn ping(&self) -> Result<(), StoreError> {
        let mut conn = self.pool.acquire().await.map_err(StoreError::Ping)?;

        conn.ping().await.map_err(StoreError::Ping)
    }
}

fn is_in_memory(url: &str) -> bool {
    url.contains(":memory:") || url.contains("mode=memory")
}

#[async_trait]
impl BookStore for SqliteBookStore {
    #[tracing::instrument(name = "all_books", skip_all)]
    async fn all(&self) -> Result<Vec<Book>, StoreError> {
        let books = sqlx::query_as::<_, Book>(SELECT_ALL_BOOKS)
            .fetch(&self.pool)
            .try_collect::<Vec<_>>()
            .await?;

        Ok(books)
    }

    #[tracing::instrument(name = "find_book", skip(self))]
    async fn find(&self, isbn: &str) -> Result<Option<Book>, StoreError> {
        let book = sqlx::query_as::<_, Book>(SELECT_BOOK_BY_ISBN)
            .bind(isbn)
            .fetch_optional(&self.pool)
            .await?;

        Ok(book)
    }

    #[tracing::instrument(name = "insert_book", skip_all, fields(isbn = %book.isbn))]
    async fn insert(&self, book: &Book) -> Result<u64, StoreError> {
        let result = sqlx::query(INSERT_BOOK)
            .bind(&book.isbn)
            .bind(&book.title)
            .bind(&book.author)
            .bind(book.price)
            .execute(&self.pool)
            .await
            .map_err(|err| StoreError::from_insert(err, &book.isbn))?;

        Ok(result.rows_affected())
    }
}
