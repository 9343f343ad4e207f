use axum::{extract::State, http::StatusCode, response::IntoResponse};
use loanbook::{model::loan::LoanGraphPointDto, server::controller::loan::get_graph};

use super::*;

/// Expect 200 OK with exactly 9 monthly points
#[tokio::test]
async fn returns_nine_points() -> Result<(), TestError> {
    let test = TestBuilder::new().with_loan_tables().build().await?;

    let result = get_graph(State(test.into_app_state())).await;

    assert!(result.is_ok());
    let resp = result.unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::OK);

    let points: Vec<LoanGraphPointDto> = json_body(resp).await;
    assert_eq!(points.len(), 9);
    assert!(points.iter().all(|p| p.month.len() == 3));

    Ok(())
}

/// Expect 500 Internal Server Error when required tables are missing
#[tokio::test]
async fn fails_when_tables_missing() -> Result<(), TestError> {
    let test = TestBuilder::new().build().await?;

    let result = get_graph(State(test.into_app_state())).await;

    assert!(result.is_err());
    let resp = result.err().unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::INTERNAL_SERVER_ERROR);

    Ok(())
}
