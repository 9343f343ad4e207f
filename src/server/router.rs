//! HTTP routing and OpenAPI documentation configuration.
//!
//! This module defines the application's HTTP routes and generates OpenAPI documentation
//! using utoipa. Swagger UI is served at `/api/docs`.

use axum::Router;
use utoipa::OpenApi;
use utoipa_axum::{router::OpenApiRouter, routes};
use utoipa_swagger_ui::SwaggerUi;

use crate::server::{controller, model::app::AppState};

/// Builds the application's HTTP router with all API endpoints and Swagger UI documentation.
///
/// # Registered Endpoints
/// - `GET /api/loans/insight` - Portfolio totals
/// - `GET /api/loans/graph` - Monthly paid/pending series
/// - `GET /api/loans/table` - Per-borrower summary rows
/// - `GET /api/loans/payments` - Recent EMI payments
/// - `GET /api/loans/future-payments` - Upcoming scheduled payments
/// - `GET /api/loans/borrowers` - Borrowers for the loan form
/// - `POST /api/loans` - Create a loan
///
/// The OpenAPI document is served at `/api/docs/openapi.json`.
///
/// # Example
/// ```ignore
/// let router = routes().with_state(AppState { db });
/// ```
pub fn routes() -> Router<AppState> {
    #[derive(OpenApi)]
    #[openapi(info(title = "Loanbook", description = "Loanbook API"), tags(
        (name = controller::loan::LOAN_TAG, description = "Loan portfolio API routes"),
    ))]
    struct ApiDoc;

    let (routes, api) = OpenApiRouter::with_openapi(ApiDoc::openapi())
        .routes(routes!(controller::loan::get_insight))
        .routes(routes!(controller::loan::get_graph))
        .routes(routes!(controller::loan::get_table))
        .routes(routes!(controller::loan::get_payments))
        .routes(routes!(controller::loan::get_future_payments))
        .routes(routes!(controller::loan::get_borrowers))
        .routes(routes!(controller::loan::create_loan))
        .split_for_parts();

    routes.merge(SwaggerUi::new("/api/docs").url("/api/docs/openapi.json", api))
}
