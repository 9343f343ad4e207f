//! Utility functions and helpers for server operations.
//!
//! Currently calendar-month arithmetic and date formatting used by the loan aggregation.

pub mod time;
