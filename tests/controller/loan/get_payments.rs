use axum::{extract::State, http::StatusCode, response::IntoResponse};
use chrono::{Duration, Utc};
use entity::sea_orm_active_enums::FuturePaymentStatus;
use loanbook::{
    model::loan::{EmiPaymentRowDto, FuturePaymentRowDto, FuturePaymentStatusDto},
    server::controller::loan::{get_future_payments, get_payments},
};

use super::*;

/// Expect 200 OK with payments from the last two months only
#[tokio::test]
async fn returns_recent_payments() -> Result<(), TestError> {
    let test = TestBuilder::new().with_loan_tables().build().await?;
    let now = Utc::now().naive_utc();
    let (_, loan) = test
        .loan()
        .insert_borrower_with_loan("Asha", 1000.0, 1100.0, now - Duration::days(400))
        .await?;
    let recent = test
        .loan()
        .insert_emi_payment(loan.id, now - Duration::days(10), 90.0, 10.0)
        .await?;
    test.loan()
        .insert_emi_payment(loan.id, now - Duration::days(120), 90.0, 10.0)
        .await?;

    let result = get_payments(State(test.into_app_state())).await;

    assert!(result.is_ok());
    let resp = result.unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::OK);

    let rows: Vec<EmiPaymentRowDto> = json_body(resp).await;
    assert_eq!(rows.len(), 1);
    assert_eq!(rows[0].id, recent.id);
    assert_eq!(rows[0].borrower_name, "Asha");
    assert_eq!(rows[0].total_amount, 100.0);

    Ok(())
}

/// Expect 200 OK with payments scheduled in the next three months
#[tokio::test]
async fn returns_upcoming_payments() -> Result<(), TestError> {
    let test = TestBuilder::new().with_loan_tables().build().await?;
    let now = Utc::now().naive_utc();
    let loan = test
        .loan()
        .insert_loan(None, 1000.0, 1100.0, now - Duration::days(30), None)
        .await?;
    let upcoming = test
        .loan()
        .insert_future_payment(
            loan.id,
            now + Duration::days(20),
            90.0,
            10.0,
            FuturePaymentStatus::Pending,
        )
        .await?;
    test.loan()
        .insert_future_payment(
            loan.id,
            now + Duration::days(150),
            90.0,
            10.0,
            FuturePaymentStatus::Pending,
        )
        .await?;

    let result = get_future_payments(State(test.into_app_state())).await;

    assert!(result.is_ok());
    let resp = result.unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::OK);

    let rows: Vec<FuturePaymentRowDto> = json_body(resp).await;
    assert_eq!(rows.len(), 1);
    assert_eq!(rows[0].id, upcoming.id);
    assert_eq!(rows[0].borrower_name, "-");
    assert_eq!(rows[0].status, FuturePaymentStatusDto::Pending);

    Ok(())
}

/// Expect 500 Internal Server Error when required tables are missing
#[tokio::test]
async fn fails_when_tables_missing() -> Result<(), TestError> {
    let test = TestBuilder::new().build().await?;

    let recent = get_payments(State(test.into_app_state())).await;
    let upcoming = get_future_payments(State(test.into_app_state())).await;

    assert_eq!(
        recent.err().unwrap().into_response().status(),
        StatusCode::INTERNAL_SERVER_ERROR
    );
    assert_eq!(
        upcoming.err().unwrap().into_response().status(),
        StatusCode::INTERNAL_SERVER_ERROR
    );

    Ok(())
}
