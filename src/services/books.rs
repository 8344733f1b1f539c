//! Book catalog service

use crate::{
    config::{BooksConfig, LookupMode},
    error::AppResult,
    models::book::{Book, UpdateBook},
    repository::Repository,
};

#[derive(Clone)]
pub struct BooksService {
    repository: Repository,
    config: BooksConfig,
}

impl BooksService {
    pub fn new(repository: Repository, config: BooksConfig) -> Self {
        Self { repository, config }
    }

    pub async fn list(&self) -> Vec<Book> {
        self.repository.books.list().await
    }

    /// Resolve `book_id` according to the configured lookup mode
    pub async fn get(&self, book_id: i64) -> AppResult<Book> {
        let result = match self.config.lookup {
            LookupMode::Id => self.repository.books.get_by_id(book_id).await,
            LookupMode::Position => self.repository.books.get_by_position(book_id).await,
        };
        if result.is_err() {
            tracing::debug!("Book lookup missed: {:?} {}", self.config.lookup, book_id);
        }
        result
    }

    pub async fn create(&self, book: Book) -> AppResult<Book> {
        let created = self
            .repository
            .books
            .create(book, self.config.allow_duplicate_ids)
            .await?;
        tracing::info!("Created book id={} title={:?}", created.id, created.title);
        Ok(created)
    }

    pub async fn update(&self, id: i64, data: &UpdateBook) -> AppResult<Book> {
        let updated = self.repository.books.update(id, data).await?;
        tracing::info!("Updated book id={}", id);
        Ok(updated)
    }

    pub async fn delete(&self, id: i64) -> AppResult<()> {
        self.repository.books.delete(id).await?;
        tracing::info!("Deleted book id={}", id);
        Ok(())
    }

    /// Number of books currently held (for readiness)
    pub async fn count(&self) -> usize {
        self.repository.books.count().await
    }
}
