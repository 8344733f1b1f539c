//! Repository layer for catalog storage

pub mod books;

/// Main repository struct holding every store
#[derive(Clone)]
pub struct Repository {
    pub books: books::BooksRepository,
}

impl Repository {
    /// Create a repository with a freshly seeded catalog
    pub fn new() -> Self {
        Self {
            books: books::BooksRepository::seeded(),
        }
    }
}

impl Default for Repository {
    fn default() -> Self {
        Self::new()
    }
}
