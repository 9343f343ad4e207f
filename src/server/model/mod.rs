//! Server application models and type definitions.
//!
//! This module contains the application state shared by HTTP handlers and database model type
//! aliases, together with conversions between database enums and API enums.

pub mod app;
pub mod db;
