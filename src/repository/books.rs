//! In-memory book store

use std::sync::Arc;

use tokio::sync::RwLock;

use crate::{
    error::{AppError, AppResult},
    models::book::{seed_books, Book, UpdateBook},
};

/// Ordered book collection guarded by a single lock.
///
/// Clones share the same underlying collection. Reads take the read guard;
/// every mutation holds the write guard across its lookup and change.
#[derive(Clone, Default)]
pub struct BooksRepository {
    books: Arc<RwLock<Vec<Book>>>,
}

impl BooksRepository {
    pub fn new(books: Vec<Book>) -> Self {
        Self {
            books: Arc::new(RwLock::new(books)),
        }
    }

    /// Repository holding the startup catalog
    pub fn seeded() -> Self {
        Self::new(seed_books())
    }

    /// List all books in insertion order
    pub async fn list(&self) -> Vec<Book> {
        self.books.read().await.clone()
    }

    /// Get the book at a positional index
    pub async fn get_by_position(&self, index: i64) -> AppResult<Book> {
        let books = self.books.read().await;
        usize::try_from(index)
            .ok()
            .and_then(|i| books.get(i))
            .cloned()
            .ok_or_else(|| AppError::NotFound(format!("Book at position {} not found", index)))
    }

    /// Get the first book with the given id
    pub async fn get_by_id(&self, id: i64) -> AppResult<Book> {
        self.books
            .read()
            .await
            .iter()
            .find(|b| b.id == id)
            .cloned()
            .ok_or_else(|| not_found(id))
    }

    /// Append a book, optionally rejecting an id already in use
    pub async fn create(&self, book: Book, allow_duplicate_id: bool) -> AppResult<Book> {
        let mut books = self.books.write().await;
        if !allow_duplicate_id && books.iter().any(|b| b.id == book.id) {
            return Err(AppError::Conflict(format!(
                "Book with id {} already exists",
                book.id
            )));
        }
        books.push(book.clone());
        Ok(book)
    }

    /// Overwrite the mutable fields of the first book with the given id
    pub async fn update(&self, id: i64, data: &UpdateBook) -> AppResult<Book> {
        let mut books = self.books.write().await;
        let book = books
            .iter_mut()
            .find(|b| b.id == id)
            .ok_or_else(|| not_found(id))?;
        book.apply(data);
        Ok(book.clone())
    }

    /// Remove the first book with the given id
    pub async fn delete(&self, id: i64) -> AppResult<()> {
        let mut books = self.books.write().await;
        let index = books
            .iter()
            .position(|b| b.id == id)
            .ok_or_else(|| not_found(id))?;
        books.remove(index);
        Ok(())
    }

    pub async fn count(&self) -> usize {
        self.books.read().await.len()
    }
}

fn not_found(id: i64) -> AppError {
    AppError::NotFound(format!("Book {} not found", id))
}
