use axum::{extract::State, http::StatusCode, response::IntoResponse};
use loanbook::{model::loan::BorrowerDto, server::controller::loan::get_borrowers};

use super::*;

/// Expect 200 OK with borrowers sorted by name
#[tokio::test]
async fn returns_borrowers_by_name() -> Result<(), TestError> {
    let test = TestBuilder::new()
        .with_loan_tables()
        .with_mock_borrower("Ravi")
        .with_mock_borrower("Asha")
        .build()
        .await?;

    let result = get_borrowers(State(test.into_app_state())).await;

    assert!(result.is_ok());
    let resp = result.unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::OK);

    let borrowers: Vec<BorrowerDto> = json_body(resp).await;
    let names: Vec<&str> = borrowers.iter().map(|b| b.name.as_str()).collect();
    assert_eq!(names, vec!["Asha", "Ravi"]);

    Ok(())
}
