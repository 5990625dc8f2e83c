//! OpenAPI documentation

use axum::Router;
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

use crate::api::{auth, books, health, reports};

#[derive(OpenApi)]
#[openapi(
    info(
        title = "Biblioteca API",
        version = "0.1.0",
        description = "Library catalog demo REST API",
        license(name = "AGPL-3.0", url = "https://www.gnu.org/licenses/agpl-3.0.html")
    ),
    paths(
        // Health
        health::health_check,
        // Auth
        auth::login,
        auth::logout,
        auth::current_user,
        // Books
        books::list_books,
        books::add_book,
        books::update_book,
        books::delete_book,
        // Reports
        reports::catalog_report,
    ),
    components(
        schemas(
            // Health
            health::HealthResponse,
            // Auth
            crate::models::user::Role,
            crate::models::user::SessionUser,
            crate::models::user::LoginRequest,
            // Books
            crate::models::book::Book,
            crate::models::book::BookPatch,
            crate::models::book::BookStatus,
            books::UpdateResponse,
            books::DeleteResponse,
            // Reports
            reports::CatalogReport,
            reports::StatEntry,
            // Errors
            crate::error::ErrorResponse,
        )
    ),
    tags(
        (name = "health", description = "Service health"),
        (name = "auth", description = "Session management"),
        (name = "books", description = "Book catalog"),
        (name = "reports", description = "Catalog reports")
    )
)]
pub struct ApiDoc;

/// Create the Swagger UI router serving the OpenAPI document
pub fn create_openapi_router() -> Router {
    Router::new().merge(SwaggerUi::new("/swagger-ui").url("/api-docs/openapi.json", ApiDoc::openapi()))
}
