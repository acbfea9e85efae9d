//! In-memory book catalog.
//!
//! Records live in a single `Vec` behind a mutex so display order is the
//! insertion order. Every operation takes the lock once and finishes with no
//! I/O, so a read never observes a half-applied mutation.

use std::sync::{Mutex, MutexGuard, PoisonError};

use thiserror::Error;

use super::models::{Book, BookId, BookRequest};
use super::validation::{self, ValidationErrors};

#[derive(Debug, Error)]
pub enum CatalogError {
    #[error("book {id} not found")]
    NotFound { id: BookId },

    #[error(transparent)]
    Validation(#[from] ValidationErrors),
}

#[derive(Debug, Default)]
pub struct BookCatalog {
    books: Mutex<Vec<Book>>,
}

impl BookCatalog {
    /// Catalog holding `books` in the given order.
    pub fn new(books: Vec<Book>) -> Self {
        Self {
            books: Mutex::new(books),
        }
    }

    /// Replace the whole collection, e.g. with seed data at startup.
    pub fn load(&self, books: Vec<Book>) {
        let count = books.len();
        *self.lock() = books;
        tracing::info!(count, "catalog loaded");
    }

    /// A panicked writer cannot leave a `Vec` half-mutated by any method
    /// here, so the data behind a poisoned lock is still consistent.
    fn lock(&self) -> MutexGuard<'_, Vec<Book>> {
        self.books.lock().unwrap_or_else(PoisonError::into_inner)
    }

    pub fn len(&self) -> usize {
        self.lock().len()
    }

    pub fn is_empty(&self) -> bool {
        self.lock().is_empty()
    }

    pub fn list_all(&self) -> Vec<Book> {
        self.lock().clone()
    }

    pub fn list_by_published_date(&self, year: i32) -> Vec<Book> {
        self.filter(|book| book.published_date == year)
    }

    pub fn list_by_rating(&self, rating: i32) -> Vec<Book> {
        self.filter(|book| book.rating == rating)
    }

    fn filter(&self, predicate: impl Fn(&Book) -> bool) -> Vec<Book> {
        self.lock()
            .iter()
            .filter(|book| predicate(book))
            .cloned()
            .collect()
    }

    pub fn get(&self, id: BookId) -> Result<Book, CatalogError> {
        let found = self.lock().iter().find(|book| book.id == id).cloned();
        found.ok_or_else(|| {
            tracing::debug!(book_id = id, "book lookup missed");
            CatalogError::NotFound { id }
        })
    }

    /// Validate and append a new record. Any client-supplied id is replaced
    /// by max(existing ids) + 1, or 1 for an empty catalog.
    pub fn create(&self, request: BookRequest) -> Result<Book, CatalogError> {
        validation::validate_book(&request)?;

        let mut books = self.lock();
        let id = next_id(&books);
        let book = request.into_book(id);
        books.push(book.clone());
        drop(books);

        tracing::info!(book_id = id, title = %book.title, "book created");
        Ok(book)
    }

    /// Replace the first record whose id matches `request.id`, field for
    /// field, keeping its position.
    pub fn update(&self, request: BookRequest) -> Result<Book, CatalogError> {
        let id = validation::validate_book_update(&request)?;

        let mut books = self.lock();
        let Some(slot) = books.iter_mut().find(|book| book.id == id) else {
            tracing::debug!(book_id = id, "update target missing");
            return Err(CatalogError::NotFound { id });
        };
        let book = request.into_book(id);
        *slot = book.clone();
        drop(books);

        tracing::info!(book_id = id, "book updated");
        Ok(book)
    }

    /// Remove the first record with the given id.
    pub fn delete(&self, id: BookId) -> Result<Book, CatalogError> {
        let mut books = self.lock();
        let Some(position) = books.iter().position(|book| book.id == id) else {
            tracing::debug!(book_id = id, "delete target missing");
            return Err(CatalogError::NotFound { id });
        };
        let removed = books.remove(position);
        drop(books);

        tracing::info!(book_id = id, "book deleted");
        Ok(removed)
    }
}

fn next_id(books: &[Book]) -> BookId {
    books.iter().map(|book| book.id).max().map_or(1, |max| max + 1)
}
