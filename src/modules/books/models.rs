use serde::{Deserialize, Serialize};

/// Book identifier, assigned by the catalog.
pub type BookId = i64;

/// A stored catalog entry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Book {
    /// Unique identifier for the book
    pub id: BookId,
    /// Title of the book
    pub title: String,
    /// Author, as "First Last"
    pub author: String,
    /// Short description of the book
    pub description: String,
    /// Rating from 0 to 5
    pub rating: i32,
    /// Year of publication
    pub published_date: i32,
}

/// Create/update payload.
///
/// `id` is ignored on create and required on update, where it selects the
/// record to replace.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BookRequest {
    #[serde(default)]
    pub id: Option<BookId>,
    pub title: String,
    pub author: String,
    pub description: String,
    pub rating: i32,
    pub published_date: i32,
}

impl BookRequest {
    /// Build the stored record from this payload under the given id.
    pub fn into_book(self, id: BookId) -> Book {
        Book {
            id,
            title: self.title,
            author: self.author,
            description: self.description,
            rating: self.rating,
            published_date: self.published_date,
        }
    }
}

/// Query string for `GET /books/publish`
#[derive(Debug, Clone, Deserialize)]
pub struct PublishedDateQuery {
    pub published_date: i32,
}

/// Query string for `GET /books/`
#[derive(Debug, Clone, Deserialize)]
pub struct RatingQuery {
    pub book_rating: i32,
}
