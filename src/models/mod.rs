//! Data models for Bookly

pub mod book;

// Re-export commonly used types
pub use book::{Book, UpdateBook};
