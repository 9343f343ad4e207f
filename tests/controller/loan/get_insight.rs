use axum::{extract::State, http::StatusCode, response::IntoResponse};
use loanbook::{model::loan::LoanInsightDto, server::controller::loan::get_insight};

use super::*;

/// Expect 200 OK with totals for the portfolio
#[tokio::test]
async fn returns_portfolio_totals() -> Result<(), TestError> {
    let test = TestBuilder::new().with_loan_tables().build().await?;
    let date = factory::datetime(2026, 1, 1);
    let (_, loan) = test
        .loan()
        .insert_borrower_with_loan("Asha", 10000.0, 11000.0, date)
        .await?;
    test.loan()
        .insert_emi_payment(loan.id, date, 900.0, 100.0)
        .await?;

    let result = get_insight(State(test.into_app_state())).await;

    assert!(result.is_ok());
    let resp = result.unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::OK);

    let insight: LoanInsightDto = json_body(resp).await;
    assert_eq!(insight.total_principal, 10000.0);
    assert_eq!(insight.total_interest, 1000.0);
    assert_eq!(insight.amount_paid, 1000.0);
    assert_eq!(insight.amount_pending, 10000.0);

    Ok(())
}

/// Expect 500 Internal Server Error when required tables are missing
#[tokio::test]
async fn fails_when_tables_missing() -> Result<(), TestError> {
    let test = TestBuilder::new().build().await?;

    let result = get_insight(State(test.into_app_state())).await;

    assert!(result.is_err());
    let resp = result.err().unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::INTERNAL_SERVER_ERROR);

    Ok(())
}
