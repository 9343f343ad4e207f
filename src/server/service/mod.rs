//! Service layer for business logic.
//!
//! Services compose the repositories in [`crate::server::data`] with the pure aggregation
//! functions and return the DTOs served over HTTP.

pub mod loan;
