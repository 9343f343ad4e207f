//! Loan and EMI bookkeeping backend.
//!
//! `model` holds the serializable records exchanged with clients and builds without the
//! `server` feature. `server` holds persistence, aggregation and the HTTP surface.

pub mod model;

#[cfg(feature = "server")]
pub mod server;
