use axum::{extract::State, http::StatusCode, response::IntoResponse, Json};
use dioxus_logger::tracing;

use crate::{
    model::{
        api::ErrorDto,
        loan::{
            BorrowerDto, CreateLoanDto, EmiPaymentRowDto, FuturePaymentRowDto, LoanDto,
            LoanGraphPointDto, LoanInsightDto, LoanTableRowDto,
        },
    },
    server::{error::Error, model::app::AppState, service::loan::LoanService},
};

pub static LOAN_TAG: &str = "loan";

/// Get portfolio totals across all loans
#[utoipa::path(
    get,
    path = "/api/loans/insight",
    tag = LOAN_TAG,
    responses(
        (status = 200, description = "Success when retrieving loan insight", body = LoanInsightDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_insight(State(state): State<AppState>) -> Result<impl IntoResponse, Error> {
    let loan_service = LoanService::new(&state.db);

    let insight = loan_service.get_insight().await?;

    Ok((StatusCode::OK, Json(insight)))
}

/// Get paid and pending principal/interest per month
///
/// Covers 9 months starting 3 months before the current month.
#[utoipa::path(
    get,
    path = "/api/loans/graph",
    tag = LOAN_TAG,
    responses(
        (status = 200, description = "Success when retrieving loan graph", body = Vec<LoanGraphPointDto>),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_graph(State(state): State<AppState>) -> Result<impl IntoResponse, Error> {
    let loan_service = LoanService::new(&state.db);

    let points = loan_service.get_graph().await?;

    Ok((StatusCode::OK, Json(points)))
}

/// Get one summary row per borrower
#[utoipa::path(
    get,
    path = "/api/loans/table",
    tag = LOAN_TAG,
    responses(
        (status = 200, description = "Success when retrieving loan table", body = Vec<LoanTableRowDto>),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_table(State(state): State<AppState>) -> Result<impl IntoResponse, Error> {
    let loan_service = LoanService::new(&state.db);

    let rows = loan_service.get_table().await?;

    Ok((StatusCode::OK, Json(rows)))
}

/// Get EMI payments recorded in the last 2 months
#[utoipa::path(
    get,
    path = "/api/loans/payments",
    tag = LOAN_TAG,
    responses(
        (status = 200, description = "Success when retrieving recent payments", body = Vec<EmiPaymentRowDto>),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_payments(State(state): State<AppState>) -> Result<impl IntoResponse, Error> {
    let loan_service = LoanService::new(&state.db);

    let payments = loan_service.get_recent_payments().await?;

    Ok((StatusCode::OK, Json(payments)))
}

/// Get payments scheduled from the start of this month through the next 3 months
#[utoipa::path(
    get,
    path = "/api/loans/future-payments",
    tag = LOAN_TAG,
    responses(
        (status = 200, description = "Success when retrieving upcoming payments", body = Vec<FuturePaymentRowDto>),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_future_payments(
    State(state): State<AppState>,
) -> Result<impl IntoResponse, Error> {
    let loan_service = LoanService::new(&state.db);

    let payments = loan_service.get_upcoming_payments().await?;

    Ok((StatusCode::OK, Json(payments)))
}

/// Get borrowers available for new loans
#[utoipa::path(
    get,
    path = "/api/loans/borrowers",
    tag = LOAN_TAG,
    responses(
        (status = 200, description = "Success when retrieving borrowers", body = Vec<BorrowerDto>),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_borrowers(State(state): State<AppState>) -> Result<impl IntoResponse, Error> {
    let loan_service = LoanService::new(&state.db);

    let borrowers = loan_service.get_borrowers().await?;

    Ok((StatusCode::OK, Json(borrowers)))
}

/// Create a loan
#[utoipa::path(
    post,
    path = "/api/loans",
    tag = LOAN_TAG,
    request_body = CreateLoanDto,
    responses(
        (status = 201, description = "Loan created", body = LoanDto),
        (status = 400, description = "Invalid loan payload", body = ErrorDto),
        (status = 404, description = "Borrower not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn create_loan(
    State(state): State<AppState>,
    Json(payload): Json<CreateLoanDto>,
) -> Result<impl IntoResponse, Error> {
    let loan_service = LoanService::new(&state.db);

    tracing::debug!("Creating loan for borrower ID {:?}", payload.borrower_id);

    let loan = loan_service.create_loan(payload).await?;

    Ok((StatusCode::CREATED, Json(loan)))
}
