//! Tests for HTTP controller endpoints.
//!
//! Handlers are called directly with an [`AppState`](loanbook::server::model::app::AppState)
//! backed by an in-memory SQLite database.

mod loan;

use loanbook_test_utils::prelude::*;

use crate::util::{json_body, TestContextExt};
