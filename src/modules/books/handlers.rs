//! HTTP handlers for the books module.

use std::sync::Arc;

use axum::extract::rejection::{JsonRejection, PathRejection, QueryRejection};
use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::Json;
use bookshelf_http::error::{AppError, AppResult};
use serde_json::json;

use super::catalog::{BookCatalog, CatalogError};
use super::models::{Book, BookId, BookRequest, PublishedDateQuery, RatingQuery};
use super::validation::RATING_FILTER_RANGE;

pub type CatalogState = State<Arc<BookCatalog>>;

impl From<CatalogError> for AppError {
    fn from(error: CatalogError) -> Self {
        match error {
            CatalogError::NotFound { .. } => AppError::not_found("Item not found"),
            CatalogError::Validation(errors) => AppError::validation(
                errors
                    .errors()
                    .iter()
                    .map(|e| json!({"field": e.field, "error": e.error}))
                    .collect(),
                "Book validation failed",
            ),
        }
    }
}

fn positive_book_id(path: Result<Path<BookId>, PathRejection>) -> AppResult<BookId> {
    let Path(book_id) = path?;
    if book_id <= 0 {
        return Err(AppError::invalid_field(
            "path.book_id",
            "must be greater than 0",
        ));
    }
    Ok(book_id)
}

/// GET /books
pub async fn list_books(State(catalog): CatalogState) -> Json<Vec<Book>> {
    Json(catalog.list_all())
}

/// GET /books/publish?published_date=
pub async fn list_by_published_date(
    State(catalog): CatalogState,
    query: Result<Query<PublishedDateQuery>, QueryRejection>,
) -> AppResult<Json<Vec<Book>>> {
    let Query(query) = query?;
    Ok(Json(catalog.list_by_published_date(query.published_date)))
}

/// GET /books/{book_id}
pub async fn get_book(
    State(catalog): CatalogState,
    path: Result<Path<BookId>, PathRejection>,
) -> AppResult<Json<Book>> {
    let book_id = positive_book_id(path)?;
    Ok(Json(catalog.get(book_id)?))
}

/// GET /books/?book_rating=
pub async fn list_by_rating(
    State(catalog): CatalogState,
    query: Result<Query<RatingQuery>, QueryRejection>,
) -> AppResult<Json<Vec<Book>>> {
    let Query(query) = query?;
    if !RATING_FILTER_RANGE.contains(&query.book_rating) {
        return Err(AppError::invalid_field(
            "query.book_rating",
            format!(
                "must be between {} and {}",
                RATING_FILTER_RANGE.start(),
                RATING_FILTER_RANGE.end()
            ),
        ));
    }
    Ok(Json(catalog.list_by_rating(query.book_rating)))
}

/// POST /create-book
///
/// Responds 201 with an empty body; the assigned id is only logged.
pub async fn create_book(
    State(catalog): CatalogState,
    body: Result<Json<BookRequest>, JsonRejection>,
) -> AppResult<StatusCode> {
    let Json(request) = body?;
    catalog.create(request)?;
    Ok(StatusCode::CREATED)
}

/// PUT /books/update_book
pub async fn update_book(
    State(catalog): CatalogState,
    body: Result<Json<BookRequest>, JsonRejection>,
) -> AppResult<StatusCode> {
    let Json(request) = body?;
    catalog.update(request)?;
    Ok(StatusCode::NO_CONTENT)
}

/// DELETE /books/{book_id}
pub async fn delete_book(
    State(catalog): CatalogState,
    path: Result<Path<BookId>, PathRejection>,
) -> AppResult<StatusCode> {
    let book_id = positive_book_id(path)?;
    catalog.delete(book_id)?;
    Ok(StatusCode::NO_CONTENT)
}
