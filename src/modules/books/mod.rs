pub mod catalog;
pub mod handlers;
pub mod models;
pub mod seed;
pub mod validation;

use std::sync::Arc;

use async_trait::async_trait;
use axum::{
    routing::{get, post, put},
    Router,
};
use bookshelf_kernel::{InitCtx, Module};
use serde_json::json;

use catalog::BookCatalog;

/// Book catalog module: CRUD over an in-memory collection of books.
pub struct BooksModule {
    catalog: Arc<BookCatalog>,
}

impl BooksModule {
    /// Module over an empty catalog; seed data is loaded during `init`.
    pub fn new() -> Self {
        Self::with_catalog(Arc::new(BookCatalog::default()))
    }

    pub fn with_catalog(catalog: Arc<BookCatalog>) -> Self {
        Self { catalog }
    }

    pub fn catalog(&self) -> &Arc<BookCatalog> {
        &self.catalog
    }
}

impl Default for BooksModule {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl Module for BooksModule {
    fn name(&self) -> &'static str {
        "books"
    }

    /// Mounted at the root: `/books`, `/create-book`, ...
    fn prefix(&self) -> String {
        String::new()
    }

    async fn init(&self, ctx: &InitCtx<'_>) -> anyhow::Result<()> {
        if ctx.settings.catalog.seed_on_start {
            self.catalog.load(seed::seed_books());
        }

        tracing::info!(
            module = self.name(),
            environment = ?ctx.settings.environment,
            books = self.catalog.len(),
            "books module initialized"
        );
        Ok(())
    }

    fn routes(&self) -> Router {
        Router::new()
            .route("/books", get(handlers::list_books))
            .route("/books/", get(handlers::list_by_rating))
            .route("/books/publish", get(handlers::list_by_published_date))
            .route("/books/update_book", put(handlers::update_book))
            .route(
                "/books/{book_id}",
                get(handlers::get_book).delete(handlers::delete_book),
            )
            .route("/create-book", post(handlers::create_book))
            .with_state(self.catalog.clone())
    }

    fn openapi(&self) -> Option<serde_json::Value> {
        let error_response = |description: &str| {
            json!({
                "description": description,
                "content": {
                    "application/json": {
                        "schema": { "$ref": "#/components/schemas/ErrorResponse" }
                    }
                }
            })
        };
        let book_list = json!({
            "description": "List of books",
            "content": {
                "application/json": {
                    "schema": {
                        "type": "array",
                        "items": { "$ref": "#/components/schemas/Book" }
                    }
                }
            }
        });
        let book_id_param = json!({
            "name": "book_id",
            "in": "path",
            "required": true,
            "schema": { "type": "integer", "format": "int64", "minimum": 1 }
        });
        let book_request_body = json!({
            "required": true,
            "content": {
                "application/json": {
                    "schema": { "$ref": "#/components/schemas/BookRequest" }
                }
            }
        });

        Some(json!({
            "paths": {
                "/books": {
                    "get": {
                        "summary": "List all books",
                        "tags": ["Books"],
                        "responses": { "200": book_list }
                    }
                },
                "/books/": {
                    "get": {
                        "summary": "List books with a given rating",
                        "tags": ["Books"],
                        "parameters": [{
                            "name": "book_rating",
                            "in": "query",
                            "required": true,
                            "schema": { "type": "integer", "minimum": 1, "maximum": 5 }
                        }],
                        "responses": {
                            "200": book_list,
                            "422": error_response("Validation error")
                        }
                    }
                },
                "/books/publish": {
                    "get": {
                        "summary": "List books published in a given year",
                        "tags": ["Books"],
                        "parameters": [{
                            "name": "published_date",
                            "in": "query",
                            "required": true,
                            "schema": { "type": "integer" }
                        }],
                        "responses": {
                            "200": book_list,
                            "422": error_response("Validation error")
                        }
                    }
                },
                "/books/{book_id}": {
                    "get": {
                        "summary": "Get a book by id",
                        "tags": ["Books"],
                        "parameters": [book_id_param],
                        "responses": {
                            "200": {
                                "description": "The book",
                                "content": {
                                    "application/json": {
                                        "schema": { "$ref": "#/components/schemas/Book" }
                                    }
                                }
                            },
                            "404": error_response("Item not found"),
                            "422": error_response("Validation error")
                        }
                    },
                    "delete": {
                        "summary": "Delete a book by id",
                        "tags": ["Books"],
                        "parameters": [book_id_param],
                        "responses": {
                            "204": { "description": "Deleted" },
                            "404": error_response("Item not found"),
                            "422": error_response("Validation error")
                        }
                    }
                },
                "/books/update_book": {
                    "put": {
                        "summary": "Replace a book, matched by id",
                        "tags": ["Books"],
                        "requestBody": book_request_body,
                        "responses": {
                            "204": { "description": "Updated" },
                            "404": error_response("Item not found"),
                            "422": error_response("Validation error")
                        }
                    }
                },
                "/create-book": {
                    "post": {
                        "summary": "Create a book",
                        "tags": ["Books"],
                        "requestBody": book_request_body,
                        "responses": {
                            "201": { "description": "Created" },
                            "422": error_response("Validation error")
                        }
                    }
                }
            },
            "components": {
                "schemas": {
                    "Book": {
                        "type": "object",
                        "properties": {
                            "id": { "type": "integer", "format": "int64" },
                            "title": { "type": "string" },
                            "author": { "type": "string" },
                            "description": { "type": "string" },
                            "rating": { "type": "integer" },
                            "published_date": { "type": "integer" }
                        },
                        "required": ["id", "title", "author", "description", "rating", "published_date"]
                    },
                    "BookRequest": {
                        "type": "object",
                        "properties": {
                            "id": {
                                "type": "integer",
                                "format": "int64",
                                "description": "Ignored on create, required on update"
                            },
                            "title": { "type": "string", "minLength": 3 },
                            "author": {
                                "type": "string",
                                "pattern": "^[A-Za-z]{2,} [A-Za-z]{2,}$",
                                "description": "Two words, each at least 2 letters"
                            },
                            "description": { "type": "string", "minLength": 3, "maxLength": 100 },
                            "rating": { "type": "integer", "minimum": 0, "maximum": 5 },
                            "published_date": { "type": "integer", "minimum": 2000, "maximum": 2025 }
                        },
                        "required": ["title", "author", "description", "rating", "published_date"],
                        "example": {
                            "title": "A new book",
                            "author": "Jane Doe",
                            "description": "A new description of a book",
                            "rating": 5,
                            "published_date": 2020
                        }
                    }
                }
            }
        }))
    }

    async fn start(&self, _ctx: &InitCtx<'_>) -> anyhow::Result<()> {
        tracing::info!(module = self.name(), "books module started");
        Ok(())
    }

    async fn stop(&self) -> anyhow::Result<()> {
        tracing::info!(
            module = self.name(),
            books = self.catalog.len(),
            "books module stopped"
        );
        Ok(())
    }
}

/// Create a new instance of the books module
pub fn create_module() -> Arc<dyn Module> {
    Arc::new(BooksModule::new())
}
