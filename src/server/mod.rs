//! Server application core modules.
//!
//! This module contains all server-side functionality: configuration, database access to the
//! borrower/loan/payment schema, the loan aggregation service, and the HTTP controllers and
//! router exposing it under `/api/loans`.

#![warn(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]

pub mod config;
pub mod controller;
pub mod data;
pub mod error;
pub mod model;
pub mod router;
pub mod service;
pub mod startup;
pub mod util;
