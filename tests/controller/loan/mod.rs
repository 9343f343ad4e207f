//! Tests for loan controller endpoints.

mod create_loan;
mod get_borrowers;
mod get_graph;
mod get_insight;
mod get_payments;
mod get_table;

use super::*;
