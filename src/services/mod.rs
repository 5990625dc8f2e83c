//! Business logic services

pub mod catalog;
pub mod guard;
pub mod session;

use crate::{client::BackendClient, config::BackendConfig, error::AppResult, store::Store};

/// Container for all services
#[derive(Clone)]
pub struct Services {
    pub session: session::SessionService,
    pub catalog: catalog::CatalogService,
    pub guard: guard::RouteGuard,
    pub backend: BackendClient,
}

impl Services {
    /// Create all services over the given store
    pub fn new(store: Store, backend_config: BackendConfig) -> AppResult<Self> {
        Ok(Self {
            session: session::SessionService::new(store.session.clone()),
            catalog: catalog::CatalogService::new(store.catalog.clone()),
            guard: guard::RouteGuard::new(store.session),
            backend: BackendClient::new(backend_config)?,
        })
    }
}
