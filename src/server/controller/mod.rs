//! HTTP controller endpoints for the loanbook web API.
//!
//! Axum handlers that delegate to the service layer and serialize the resulting DTOs as JSON.
//! Each handler carries a utoipa annotation so it appears in the OpenAPI document.

pub mod loan;
