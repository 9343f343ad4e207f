use axum::{extract::State, http::StatusCode, response::IntoResponse};
use loanbook::{model::loan::LoanTableRowDto, server::controller::loan::get_table};

use super::*;

/// Expect 200 OK with a row per borrower including loan notes
#[tokio::test]
async fn returns_row_per_borrower() -> Result<(), TestError> {
    let test = TestBuilder::new()
        .with_loan_tables()
        .with_mock_borrower("Asha")
        .build()
        .await?;
    let borrower = test.loan().insert_borrower("Ravi").await?;
    test.loan()
        .insert_loan(
            Some(borrower.id),
            900.0,
            1000.0,
            factory::datetime(2026, 1, 1),
            Some("car"),
        )
        .await?;
    test.loan()
        .insert_loan(
            Some(borrower.id),
            1800.0,
            2000.0,
            factory::datetime(2026, 2, 1),
            Some("bike"),
        )
        .await?;

    let result = get_table(State(test.into_app_state())).await;

    assert!(result.is_ok());
    let resp = result.unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::OK);

    let rows: Vec<LoanTableRowDto> = json_body(resp).await;
    assert_eq!(rows.len(), 1);
    assert_eq!(rows[0].borrower_name, "Ravi");
    assert_eq!(rows[0].total_amount, 3000.0);
    assert_eq!(rows[0].remaining_amount, 3000.0);
    assert_eq!(rows[0].notes.as_deref(), Some("car -- 1000; bike -- 2000"));

    Ok(())
}

/// Expect 500 Internal Server Error when required tables are missing
#[tokio::test]
async fn fails_when_tables_missing() -> Result<(), TestError> {
    let test = TestBuilder::new().build().await?;

    let result = get_table(State(test.into_app_state())).await;

    assert!(result.is_err());
    let resp = result.err().unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::INTERNAL_SERVER_ERROR);

    Ok(())
}
