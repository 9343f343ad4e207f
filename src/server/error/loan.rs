use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use dioxus_logger::tracing;
use thiserror::Error;

use crate::model::api::ErrorDto;

/// Reasons a loan creation payload is rejected.
#[derive(Error, Debug, PartialEq)]
pub enum LoanError {
    #[error("Borrower is required")]
    MissingBorrower,
    #[error("Borrower ID {0:?} does not exist")]
    BorrowerNotFound(i32),
    #[error("{field} must be greater than zero")]
    NonPositiveAmount { field: &'static str },
    #[error("Total amount {total} is less than initial amount {initial}")]
    TotalBelowInitial { initial: f64, total: f64 },
    #[error("Due date must not be before the loan date")]
    DueDateBeforeLoanDate,
}

impl IntoResponse for LoanError {
    fn into_response(self) -> Response {
        let status = match self {
            Self::BorrowerNotFound(_) => StatusCode::NOT_FOUND,
            _ => StatusCode::BAD_REQUEST,
        };

        tracing::warn!("Rejected loan payload: {}", self);

        (
            status,
            Json(ErrorDto {
                error: self.to_string(),
            }),
        )
            .into_response()
    }
}
