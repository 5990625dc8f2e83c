//! Catalog management service

use crate::{
    models::book::{Book, BookPatch},
    store::CatalogStore,
};

#[derive(Clone)]
pub struct CatalogService {
    store: CatalogStore,
}

impl CatalogService {
    pub fn new(store: CatalogStore) -> Self {
        Self { store }
    }

    /// Full catalog in insertion order.
    pub fn list_books(&self) -> Vec<Book> {
        self.store.list()
    }

    /// Get a book by id (first match).
    pub fn get_book(&self, id: i32) -> Option<Book> {
        self.store.get(id)
    }

    /// Append a book. Duplicate ids are accepted silently.
    pub fn add_book(&self, book: Book) {
        tracing::info!(id = book.id, title = %book.title, "Catalog: adding book");
        self.store.add(book);
    }

    /// Merge `patch` over the book with the given id. Returns the updated
    /// record, or `None` when no record matched (the catalog is unchanged).
    pub fn update_book(&self, id: i32, patch: &BookPatch) -> Option<Book> {
        if self.store.update(id, patch) {
            tracing::info!(id, "Catalog: updated book");
            self.store.get(id)
        } else {
            tracing::debug!(id, "Catalog: update missed, no such book");
            None
        }
    }

    /// Delete every record with the given id. Returns whether anything was
    /// removed.
    pub fn delete_book(&self, id: i32) -> bool {
        let found = self.store.delete(id);
        if found {
            tracing::info!(id, "Catalog: deleted book");
        } else {
            tracing::debug!(id, "Catalog: delete missed, no such book");
        }
        found
    }
}
