//! In-memory book catalog

use std::sync::{Arc, PoisonError, RwLock};

use chrono::NaiveDate;

use crate::models::book::{Book, BookPatch, BookStatus};

/// Ordered collection of book records held in memory.
///
/// Mutations mirror the original store exactly: `add` appends without any
/// uniqueness check on `id` (a duplicate id is accepted silently), `update`
/// merges over the first matching record, `delete` filters out every matching
/// record. Update and delete are silent no-ops on a missing id; the returned
/// flag lets callers that care check for the miss without changing that
/// default behavior.
#[derive(Clone)]
pub struct CatalogStore {
    inner: Arc<RwLock<Vec<Book>>>,
}

impl CatalogStore {
    pub fn new(books: Vec<Book>) -> Self {
        Self {
            inner: Arc::new(RwLock::new(books)),
        }
    }

    /// Create a catalog preloaded with the twelve demo records.
    pub fn seeded() -> Self {
        Self::new(seed_books())
    }

    /// Snapshot of the collection in insertion order.
    pub fn list(&self) -> Vec<Book> {
        self.read().clone()
    }

    /// Number of records currently in the catalog.
    pub fn len(&self) -> usize {
        self.read().len()
    }

    pub fn is_empty(&self) -> bool {
        self.read().is_empty()
    }

    /// Find a record by id (first match).
    pub fn get(&self, id: i32) -> Option<Book> {
        self.read().iter().find(|b| b.id == id).cloned()
    }

    /// Append a book at the end of the collection.
    pub fn add(&self, book: Book) {
        self.write().push(book);
    }

    /// Shallow-merge `patch` over the first record whose id matches.
    /// Returns `false` (and changes nothing) when no record matches.
    pub fn update(&self, id: i32, patch: &BookPatch) -> bool {
        let mut books = self.write();
        match books.iter_mut().find(|b| b.id == id) {
            Some(book) => {
                patch.apply_to(book);
                true
            }
            None => false,
        }
    }

    /// Remove every record whose id matches. Returns `false` when nothing
    /// was removed.
    pub fn delete(&self, id: i32) -> bool {
        let mut books = self.write();
        let before = books.len();
        books.retain(|b| b.id != id);
        books.len() != before
    }

    fn read(&self) -> std::sync::RwLockReadGuard<'_, Vec<Book>> {
        self.inner.read().unwrap_or_else(PoisonError::into_inner)
    }

    fn write(&self) -> std::sync::RwLockWriteGuard<'_, Vec<Book>> {
        self.inner.write().unwrap_or_else(PoisonError::into_inner)
    }
}

fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).expect("valid seed date")
}

struct Seed {
    id: i32,
    title: &'static str,
    author: &'static str,
    isbn: &'static str,
    category: &'static str,
    status: BookStatus,
    added: NaiveDate,
    borrowed: Option<NaiveDate>,
    usuario: Option<&'static str>,
}

impl From<Seed> for Book {
    fn from(s: Seed) -> Self {
        Book {
            id: s.id,
            title: s.title.to_string(),
            author: s.author.to_string(),
            isbn: s.isbn.to_string(),
            category: s.category.to_string(),
            status: s.status,
            added_date: s.added,
            borrowed_date: s.borrowed,
            usuario: s.usuario.map(str::to_string),
        }
    }
}

/// The twelve demo records the catalog starts with.
pub fn seed_books() -> Vec<Book> {
    use BookStatus::{Disponible, Pendiente, Prestado};

    let seeds = [
        Seed { id: 1, title: "El Quijote", author: "Cervantes", isbn: "111", category: "Clásico", status: Disponible, added: date(2024, 1, 1), borrowed: None, usuario: None },
        Seed { id: 2, title: "Cien Años de Soledad", author: "García Márquez", isbn: "222", category: "Realismo", status: Prestado, added: date(2024, 1, 2), borrowed: Some(date(2024, 1, 10)), usuario: Some("user") },
        Seed { id: 3, title: "1984", author: "Orwell", isbn: "333", category: "Ficción", status: Pendiente, added: date(2024, 1, 3), borrowed: None, usuario: Some("user") },
        Seed { id: 4, title: "Rayuela", author: "Cortázar", isbn: "444", category: "Novela", status: Disponible, added: date(2024, 1, 4), borrowed: None, usuario: None },
        Seed { id: 5, title: "La Odisea", author: "Homero", isbn: "555", category: "Épico", status: Disponible, added: date(2024, 1, 5), borrowed: None, usuario: None },
        Seed { id: 6, title: "Hamlet", author: "Shakespeare", isbn: "666", category: "Teatro", status: Disponible, added: date(2024, 1, 6), borrowed: None, usuario: None },
        Seed { id: 7, title: "Fahrenheit 451", author: "Bradbury", isbn: "777", category: "Ficción", status: Disponible, added: date(2024, 1, 7), borrowed: None, usuario: None },
        Seed { id: 8, title: "El Principito", author: "Saint-Exupéry", isbn: "888", category: "Infantil", status: Disponible, added: date(2024, 1, 8), borrowed: None, usuario: None },
        Seed { id: 9, title: "Crimen y Castigo", author: "Dostoievski", isbn: "999", category: "Novela", status: Disponible, added: date(2024, 1, 9), borrowed: None, usuario: None },
        Seed { id: 10, title: "La Metamorfosis", author: "Kafka", isbn: "1010", category: "Novela", status: Disponible, added: date(2024, 1, 10), borrowed: None, usuario: None },
        Seed { id: 11, title: "El Hobbit", author: "Tolkien", isbn: "1111", category: "Fantasía", status: Disponible, added: date(2024, 1, 11), borrowed: None, usuario: None },
        Seed { id: 12, title: "Drácula", author: "Stoker", isbn: "1212", category: "Terror", status: Disponible, added: date(2024, 1, 12), borrowed: None, usuario: None },
    ];

    seeds.into_iter().map(Book::from).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_book(id: i32) -> Book {
        Book {
            id,
            title: "Test".to_string(),
            author: "Author".to_string(),
            isbn: "000".to_string(),
            category: "Prueba".to_string(),
            status: BookStatus::Disponible,
            added_date: date(2024, 2, 1),
            borrowed_date: None,
            usuario: None,
        }
    }

    #[test]
    fn seeded_catalog_has_twelve_books() {
        let store = CatalogStore::seeded();
        assert_eq!(store.len(), 12);
        assert_eq!(store.list()[0].title, "El Quijote");
        assert_eq!(store.list()[11].title, "Drácula");
    }

    #[test]
    fn add_appends_at_the_end() {
        let store = CatalogStore::seeded();
        store.add(sample_book(13));

        let books = store.list();
        assert_eq!(books.len(), 13);
        assert_eq!(books.last().map(|b| b.id), Some(13));
    }

    #[test]
    fn add_accepts_duplicate_id_silently() {
        let store = CatalogStore::seeded();
        store.add(sample_book(1));

        assert_eq!(store.len(), 13);
        let with_id_1 = store.list().iter().filter(|b| b.id == 1).count();
        assert_eq!(with_id_1, 2);
    }

    #[test]
    fn delete_removes_all_matching_and_leaves_the_rest() {
        let store = CatalogStore::seeded();
        assert!(store.delete(3));

        let books = store.list();
        assert_eq!(books.len(), 11);
        assert!(books.iter().all(|b| b.id != 3));

        // Book id 1 untouched
        let quijote = store.get(1).expect("book 1 present");
        assert_eq!(quijote.title, "El Quijote");
        assert_eq!(quijote.status, BookStatus::Disponible);
    }

    #[test]
    fn delete_missing_id_is_a_silent_noop() {
        let store = CatalogStore::seeded();
        assert!(!store.delete(99));
        assert_eq!(store.len(), 12);
    }

    #[test]
    fn update_merges_present_fields_and_preserves_the_rest() {
        let store = CatalogStore::seeded();

        let patch = BookPatch {
            status: Some(BookStatus::Disponible),
            ..Default::default()
        };
        assert!(store.update(2, &patch));

        let book = store.get(2).expect("book 2 present");
        assert_eq!(book.status, BookStatus::Disponible);
        assert_eq!(book.title, "Cien Años de Soledad");
        assert_eq!(book.borrowed_date, Some(date(2024, 1, 10)));
        assert_eq!(book.usuario.as_deref(), Some("user"));
    }

    #[test]
    fn update_explicit_null_clears_nullable_fields() {
        let store = CatalogStore::seeded();

        let patch = BookPatch {
            borrowed_date: Some(None),
            usuario: Some(None),
            ..Default::default()
        };
        assert!(store.update(2, &patch));

        let book = store.get(2).expect("book 2 present");
        assert_eq!(book.borrowed_date, None);
        assert_eq!(book.usuario, None);
    }

    #[test]
    fn update_missing_id_is_a_silent_noop() {
        let store = CatalogStore::seeded();
        let before = store.list();

        let patch = BookPatch {
            title: Some("Nada".to_string()),
            ..Default::default()
        };
        assert!(!store.update(99, &patch));
        assert_eq!(store.list(), before);
    }

    #[test]
    fn update_targets_the_first_match_when_ids_collide() {
        let store = CatalogStore::seeded();
        store.add(sample_book(1));

        let patch = BookPatch {
            category: Some("Actualizado".to_string()),
            ..Default::default()
        };
        assert!(store.update(1, &patch));

        let books = store.list();
        assert_eq!(books[0].category, "Actualizado");
        assert_eq!(books[12].category, "Prueba");
    }
}
