//! Book model

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Book record
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct Book {
    /// Caller-supplied identifier
    pub id: i64,
    pub title: String,
    pub author: String,
    pub publisher: String,
    /// Publication date, ISO-like (not validated)
    #[schema(example = "2017-02-14")]
    pub publish_date: String,
    pub page_count: i64,
    pub language: String,
}

/// Update book request
///
/// Every mutable field is overwritten; `id` and `publish_date` are kept.
#[derive(Debug, Clone, Deserialize, Serialize, ToSchema)]
pub struct UpdateBook {
    pub title: String,
    pub author: String,
    pub publisher: String,
    pub page_count: i64,
    pub language: String,
}

impl Book {
    /// Overwrite the mutable fields from an update request
    pub fn apply(&mut self, update: &UpdateBook) {
        self.title.clone_from(&update.title);
        self.author.clone_from(&update.author);
        self.publisher.clone_from(&update.publisher);
        self.page_count = update.page_count;
        self.language.clone_from(&update.language);
    }
}

/// Catalog contents at startup
pub fn seed_books() -> Vec<Book> {
    let book = |id, title: &str, author: &str, publisher: &str, date: &str, pages| Book {
        id,
        title: title.to_string(),
        author: author.to_string(),
        publisher: publisher.to_string(),
        publish_date: date.to_string(),
        page_count: pages,
        language: "English".to_string(),
    };

    vec![
        book(1, "Head First Python", "Paul Barry", "O'Reilly Media", "2016-12-16", 624),
        book(2, "Fluent Python", "Luciano Ramalho", "O'Reilly Media", "2022-04-12", 1012),
        book(3, "Python Crash Course", "Eric Matthes", "No Starch Press", "2019-05-03", 544),
        book(4, "The Rust Programming Language", "Steve Klabnik", "No Starch Press", "2023-02-28", 560),
        book(5, "Two Scoops of Django", "Daniel Roy Greenfeld", "Two Scoops Press", "2020-05-15", 532),
        book(6, "Designing Data-Intensive Applications", "Martin Kleppmann", "O'Reilly Media", "2017-03-16", 616),
    ]
}
