//! In-memory state containers
//!
//! The application holds all of its state in process memory: an ordered book
//! catalog and a single session slot. The containers are created once at
//! startup and injected into the services, so ownership stays explicit and
//! tests can build isolated instances.

pub mod catalog;
pub mod session;

pub use catalog::CatalogStore;
pub use session::SessionStore;

/// Main store struct holding all in-memory state containers
#[derive(Clone)]
pub struct Store {
    pub catalog: CatalogStore,
    pub session: SessionStore,
}

impl Store {
    /// Create a store with the catalog seeded with the demo records.
    pub fn seeded() -> Self {
        Self {
            catalog: CatalogStore::seeded(),
            session: SessionStore::new(),
        }
    }

    /// Create an empty store (no books, no session).
    pub fn empty() -> Self {
        Self {
            catalog: CatalogStore::new(Vec::new()),
            session: SessionStore::new(),
        }
    }
}
