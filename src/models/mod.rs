//! Data models for Biblioteca

pub mod book;
pub mod route;
pub mod user;

// Re-export commonly used types
pub use book::{Book, BookPatch, BookStatus};
pub use route::{RouteRule, GUARD_FALLBACK_PATH, ROUTE_TABLE};
pub use user::{LoginRequest, Role, SessionUser};
