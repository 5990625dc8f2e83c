//! Catalog report endpoint (admin only)

use axum::{extract::State, Json};
use serde::Serialize;
use utoipa::ToSchema;

use crate::models::book::BookStatus;

/// Catalog report response
#[derive(Serialize, ToSchema)]
pub struct CatalogReport {
    /// Total number of books
    pub total: i64,
    /// Books by status
    pub by_status: Vec<StatEntry>,
    /// Books by category, in first-appearance order
    pub by_category: Vec<StatEntry>,
}

#[derive(Serialize, ToSchema)]
pub struct StatEntry {
    /// Label
    pub label: String,
    /// Value
    pub value: i64,
}

/// Catalog report: totals by status and category
#[utoipa::path(
    get,
    path = "/reports",
    tag = "reports",
    responses(
        (status = 200, description = "Catalog report", body = CatalogReport),
        (status = 303, description = "Session is not admin; redirected to /books")
    )
)]
pub async fn catalog_report(State(state): State<crate::AppState>) -> Json<CatalogReport> {
    let books = state.services.catalog.list_books();

    let by_status = [
        BookStatus::Disponible,
        BookStatus::Prestado,
        BookStatus::Pendiente,
    ]
    .iter()
    .map(|status| StatEntry {
        label: status.to_string(),
        value: books.iter().filter(|b| b.status == *status).count() as i64,
    })
    .collect();

    let mut by_category: Vec<StatEntry> = Vec::new();
    for book in &books {
        match by_category.iter_mut().find(|e| e.label == book.category) {
            Some(entry) => entry.value += 1,
            None => by_category.push(StatEntry {
                label: book.category.clone(),
                value: 1,
            }),
        }
    }

    Json(CatalogReport {
        total: books.len() as i64,
        by_status,
        by_category,
    })
}
