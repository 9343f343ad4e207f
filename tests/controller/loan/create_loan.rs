use axum::{extract::State, http::StatusCode, response::IntoResponse, Json};
use loanbook::{
    model::{
        api::ErrorDto,
        loan::{CreateLoanDto, LoanDto, LoanStatusDto},
    },
    server::controller::loan::create_loan,
};

use super::*;

fn payload(borrower_id: Option<i32>) -> CreateLoanDto {
    CreateLoanDto {
        borrower_id,
        initial_amount: 5000.0,
        total_amount: 5600.0,
        loan_date: factory::datetime(2026, 3, 1).and_utc(),
        due_date: factory::datetime(2027, 3, 1).and_utc(),
        status: LoanStatusDto::Active,
        notes: Some("shop renovation".to_string()),
    }
}

/// Expect 201 Created with the new loan
#[tokio::test]
async fn creates_loan() -> Result<(), TestError> {
    let test = TestBuilder::new().with_loan_tables().build().await?;
    let borrower = test.loan().insert_borrower("Asha").await?;

    let result = create_loan(State(test.into_app_state()), Json(payload(Some(borrower.id)))).await;

    assert!(result.is_ok());
    let resp = result.unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::CREATED);

    let loan: LoanDto = json_body(resp).await;
    assert_eq!(loan.borrower_id, Some(borrower.id));
    assert_eq!(loan.interest_amount, 600.0);
    assert_eq!(loan.notes.as_deref(), Some("shop renovation"));

    Ok(())
}

/// Expect 400 Bad Request when the total is below the initial amount
#[tokio::test]
async fn rejects_total_below_initial() -> Result<(), TestError> {
    let test = TestBuilder::new().with_loan_tables().build().await?;
    let borrower = test.loan().insert_borrower("Asha").await?;

    let mut payload = payload(Some(borrower.id));
    payload.total_amount = 4000.0;

    let result = create_loan(State(test.into_app_state()), Json(payload)).await;

    assert!(result.is_err());
    let resp = result.err().unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);

    let body: ErrorDto = json_body(resp).await;
    assert!(body.error.contains("less than initial amount"));

    Ok(())
}

/// Expect 400 Bad Request when no borrower is provided
#[tokio::test]
async fn rejects_missing_borrower() -> Result<(), TestError> {
    let test = TestBuilder::new().with_loan_tables().build().await?;

    let result = create_loan(State(test.into_app_state()), Json(payload(None))).await;

    assert!(result.is_err());
    let resp = result.err().unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);

    Ok(())
}

/// Expect 404 Not Found when the borrower does not exist
#[tokio::test]
async fn rejects_unknown_borrower() -> Result<(), TestError> {
    let test = TestBuilder::new().with_loan_tables().build().await?;

    let result = create_loan(State(test.into_app_state()), Json(payload(Some(99)))).await;

    assert!(result.is_err());
    let resp = result.err().unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);

    Ok(())
}
