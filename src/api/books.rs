//! Book catalog endpoints

use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};
use serde::Serialize;
use utoipa::ToSchema;

use crate::models::book::{Book, BookPatch};

/// Outcome of an update. The catalog silently ignores a miss; `found` lets
/// callers that need to know check for it.
#[derive(Serialize, ToSchema)]
pub struct UpdateResponse {
    /// Whether a record with the given id existed
    pub found: bool,
    /// The updated record, when found
    #[serde(skip_serializing_if = "Option::is_none")]
    pub book: Option<Book>,
}

/// Outcome of a delete
#[derive(Serialize, ToSchema)]
pub struct DeleteResponse {
    /// Whether any record with the given id existed
    pub found: bool,
}

/// List the catalog in insertion order
#[utoipa::path(
    get,
    path = "/books",
    tag = "books",
    responses(
        (status = 200, description = "All books in insertion order", body = [Book])
    )
)]
pub async fn list_books(State(state): State<crate::AppState>) -> Json<Vec<Book>> {
    Json(state.services.catalog.list_books())
}

/// Add a book to the catalog
///
/// The id is externally assigned; a duplicate id is accepted silently.
#[utoipa::path(
    post,
    path = "/add-book",
    tag = "books",
    request_body = Book,
    responses(
        (status = 201, description = "Book appended to the catalog", body = Book),
        (status = 303, description = "Session is not admin; redirected to /books")
    )
)]
pub async fn add_book(
    State(state): State<crate::AppState>,
    Json(book): Json<Book>,
) -> (StatusCode, Json<Book>) {
    state.services.catalog.add_book(book.clone());
    (StatusCode::CREATED, Json(book))
}

/// Merge a partial update over the book with the given id
///
/// Fields absent from the body are preserved; a missing id leaves the
/// catalog unchanged and is reported through `found`.
#[utoipa::path(
    put,
    path = "/books/{id}",
    tag = "books",
    params(
        ("id" = i32, Path, description = "Book ID")
    ),
    request_body = BookPatch,
    responses(
        (status = 200, description = "Merge outcome", body = UpdateResponse)
    )
)]
pub async fn update_book(
    State(state): State<crate::AppState>,
    Path(id): Path<i32>,
    Json(patch): Json<BookPatch>,
) -> Json<UpdateResponse> {
    let book = state.services.catalog.update_book(id, &patch);
    Json(UpdateResponse {
        found: book.is_some(),
        book,
    })
}

/// Delete every book with the given id
#[utoipa::path(
    delete,
    path = "/books/{id}",
    tag = "books",
    params(
        ("id" = i32, Path, description = "Book ID")
    ),
    responses(
        (status = 200, description = "Delete outcome", body = DeleteResponse)
    )
)]
pub async fn delete_book(
    State(state): State<crate::AppState>,
    Path(id): Path<i32>,
) -> Json<DeleteResponse> {
    let found = state.services.catalog.delete_book(id);
    Json(DeleteResponse { found })
}
