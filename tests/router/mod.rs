//! Tests for the assembled HTTP router.
//!
//! Requests go through [`routes`] with `tower::ServiceExt::oneshot`, covering path
//! registration, JSON field naming and request body extraction.

use axum::{
    body::Body,
    http::{header, Method, Request, StatusCode},
    Router,
};
use loanbook::server::router::routes;
use loanbook_test_utils::prelude::*;
use serde_json::Value;
use tower::ServiceExt;

use crate::util::{json_body, TestContextExt};

fn app(test: &TestContext) -> Router {
    routes().with_state(test.into_app_state())
}

fn get(uri: &str) -> Request<Body> {
    Request::builder()
        .uri(uri)
        .body(Body::empty())
        .expect("Failed to build request")
}

fn post_json(uri: &str, body: Value) -> Request<Body> {
    Request::builder()
        .method(Method::POST)
        .uri(uri)
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(body.to_string()))
        .expect("Failed to build request")
}

/// Expect every read endpoint to be routed and return 200 OK
#[tokio::test]
async fn routes_read_endpoints() -> Result<(), TestError> {
    let test = TestBuilder::new().with_loan_tables().build().await?;

    for uri in [
        "/api/loans/insight",
        "/api/loans/graph",
        "/api/loans/table",
        "/api/loans/payments",
        "/api/loans/future-payments",
        "/api/loans/borrowers",
    ] {
        let resp = app(&test).oneshot(get(uri)).await.unwrap();

        assert_eq!(resp.status(), StatusCode::OK, "GET {}", uri);
    }

    Ok(())
}

/// Expect camelCase field names in the insight response
#[tokio::test]
async fn serializes_insight_in_camel_case() -> Result<(), TestError> {
    let test = TestBuilder::new().with_loan_tables().build().await?;
    test.loan()
        .insert_borrower_with_loan("Asha", 1000.0, 1200.0, factory::datetime(2026, 1, 1))
        .await?;

    let resp = app(&test)
        .oneshot(get("/api/loans/insight"))
        .await
        .unwrap();

    assert_eq!(resp.status(), StatusCode::OK);
    let body: Value = json_body(resp).await;
    assert_eq!(body["totalPrincipal"], 1000.0);
    assert_eq!(body["totalInterest"], 200.0);
    assert_eq!(body["amountPaid"], 0.0);
    assert_eq!(body["amountPending"], 1200.0);

    Ok(())
}

/// Expect table rows to expose an ISO-8601 loan date and null notes when no loan has notes
#[tokio::test]
async fn serializes_table_rows() -> Result<(), TestError> {
    let test = TestBuilder::new().with_loan_tables().build().await?;
    test.loan()
        .insert_borrower_with_loan("Asha", 1000.0, 1200.0, factory::datetime(2026, 1, 5))
        .await?;

    let resp = app(&test).oneshot(get("/api/loans/table")).await.unwrap();

    let body: Value = json_body(resp).await;
    assert_eq!(body[0]["borrowerName"], "Asha");
    assert_eq!(body[0]["loanDate"], "2026-01-05T00:00:00");
    assert_eq!(body[0]["paidAmount"], 0.0);
    assert_eq!(body[0]["remainingAmount"], 1200.0);
    assert!(body[0]["notes"].is_null());

    Ok(())
}

/// Expect 201 Created when posting a valid loan as JSON
#[tokio::test]
async fn creates_loan_from_json() -> Result<(), TestError> {
    let test = TestBuilder::new().with_loan_tables().build().await?;
    let borrower = test.loan().insert_borrower("Asha").await?;

    let resp = app(&test)
        .oneshot(post_json(
            "/api/loans",
            serde_json::json!({
                "borrowerId": borrower.id,
                "initialAmount": 1000,
                "totalAmount": 1150.5,
                "loanDate": "2026-02-01T00:00:00.000Z",
                "dueDate": "2026-08-01T00:00:00Z",
                "notes": "car"
            }),
        ))
        .await
        .unwrap();

    assert_eq!(resp.status(), StatusCode::CREATED);
    let body: Value = json_body(resp).await;
    assert_eq!(body["borrowerId"], borrower.id);
    assert_eq!(body["interestAmount"], 150.5);
    assert_eq!(body["status"], "active");
    assert_eq!(body["loanDate"], "2026-02-01T00:00:00");

    Ok(())
}

/// Expect the form-only status vocabulary to be rejected
#[tokio::test]
async fn rejects_unknown_status() -> Result<(), TestError> {
    let test = TestBuilder::new().with_loan_tables().build().await?;
    let borrower = test.loan().insert_borrower("Asha").await?;

    let resp = app(&test)
        .oneshot(post_json(
            "/api/loans",
            serde_json::json!({
                "borrowerId": borrower.id,
                "initialAmount": 1000,
                "totalAmount": 1100,
                "loanDate": "2026-02-01T00:00:00Z",
                "dueDate": "2026-08-01T00:00:00Z",
                "status": "PENDING"
            }),
        ))
        .await
        .unwrap();

    assert_eq!(resp.status(), StatusCode::UNPROCESSABLE_ENTITY);

    Ok(())
}

/// Expect 400 Bad Request with an error body for a non-positive amount
#[tokio::test]
async fn rejects_non_positive_amount() -> Result<(), TestError> {
    let test = TestBuilder::new().with_loan_tables().build().await?;
    let borrower = test.loan().insert_borrower("Asha").await?;

    let resp = app(&test)
        .oneshot(post_json(
            "/api/loans",
            serde_json::json!({
                "borrowerId": borrower.id,
                "initialAmount": 0,
                "totalAmount": 1100,
                "loanDate": "2026-02-01T00:00:00Z",
                "dueDate": "2026-08-01T00:00:00Z"
            }),
        ))
        .await
        .unwrap();

    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
    let body: Value = json_body(resp).await;
    assert_eq!(body["error"], "Initial amount must be greater than zero");

    Ok(())
}

/// Expect the OpenAPI document to be served alongside Swagger UI
#[tokio::test]
async fn serves_openapi_document() -> Result<(), TestError> {
    let test = TestBuilder::new().build().await?;

    let resp = app(&test)
        .oneshot(get("/api/docs/openapi.json"))
        .await
        .unwrap();

    assert_eq!(resp.status(), StatusCode::OK);
    let body: Value = json_body(resp).await;
    assert!(body["paths"]["/api/loans/insight"]["get"].is_object());
    assert!(body["paths"]["/api/loans"]["post"].is_object());

    Ok(())
}
