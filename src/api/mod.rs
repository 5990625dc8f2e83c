//! API handlers for Biblioteca REST endpoints

pub mod auth;
pub mod books;
pub mod health;
pub mod openapi;
pub mod reports;

use axum::{
    extract::{Request, State},
    middleware::{self, Next},
    response::{IntoResponse, Redirect, Response},
    routing::{get, post, put},
    Router,
};
use tower_http::{
    cors::{Any, CorsLayer},
    trace::TraceLayer,
};

use crate::{services::guard::GuardDecision, AppState};

/// Route guard middleware. Evaluated before each request: a path flagged
/// admin-only in the route table is redirected to the fallback path unless
/// the session role is admin. No denial reason is surfaced beyond the
/// redirect.
pub async fn route_guard(State(state): State<AppState>, request: Request, next: Next) -> Response {
    match state.services.guard.decide(request.uri().path()) {
        GuardDecision::Allow => next.run(request).await,
        GuardDecision::Redirect(path) => Redirect::to(path).into_response(),
    }
}

/// Create the application router with all routes. Paths mirror the original
/// navigation table, so the guard rules apply to request paths directly.
pub fn create_router(state: AppState) -> Router {
    // CORS configuration
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    let router = Router::new()
        // Health check
        .route("/health", get(health::health_check))
        // Session
        .route("/login", post(auth::login))
        .route("/logout", post(auth::logout))
        .route("/user", get(auth::current_user))
        // Catalog
        .route("/books", get(books::list_books))
        .route("/add-book", post(books::add_book))
        .route(
            "/books/:id",
            put(books::update_book).delete(books::delete_book),
        )
        // Reports (admin only, via the guard)
        .route("/reports", get(reports::catalog_report))
        .layer(middleware::from_fn_with_state(state.clone(), route_guard))
        .with_state(state);

    // OpenAPI documentation
    let openapi = openapi::create_openapi_router();

    router
        .merge(openapi)
        .layer(TraceLayer::new_for_http())
        .layer(cors)
}
