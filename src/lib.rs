//! Biblioteca Library Catalog Server
//!
//! A small Rust implementation of a browser library-catalog demo, exposing a
//! JSON API over an in-memory book catalog and a single-slot session, with a
//! route guard restricting two admin paths.

use std::sync::Arc;

pub mod api;
pub mod client;
pub mod config;
pub mod error;
pub mod models;
pub mod services;
pub mod store;

pub use config::AppConfig;
pub use error::{AppError, AppResult};

/// Application state shared across all handlers
#[derive(Clone)]
pub struct AppState {
    pub config: Arc<AppConfig>,
    pub services: Arc<services::Services>,
}
