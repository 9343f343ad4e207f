//! Factory functions for generating mock loan schema models.
//!
//! Provides pure functions for creating database models with standard test values. These are
//! in-memory model instances that don't require database interaction, suitable for unit tests
//! of the aggregation logic.

use chrono::{Duration, NaiveDate, NaiveDateTime};
use entity::sea_orm_active_enums::{FuturePaymentStatus, LoanStatus};

use crate::model::{BorrowerModel, EmiPaymentModel, FuturePaymentModel, LoanModel};

/// Midnight on the given calendar day.
///
/// # Panics
/// Panics if the date is not a valid calendar day.
pub fn datetime(year: i32, month: u32, day: u32) -> NaiveDateTime {
    NaiveDate::from_ymd_opt(year, month, day)
        .and_then(|date| date.and_hms_opt(0, 0, 0))
        .expect("valid calendar date")
}

pub fn mock_borrower_model(id: i32, name: &str) -> BorrowerModel {
    BorrowerModel {
        id,
        name: name.to_string(),
        created_at: datetime(2025, 1, 1),
    }
}

/// Create an active mock loan due one year after `loan_date`.
pub fn mock_loan_model(
    id: i32,
    borrower_id: Option<i32>,
    initial_amount: f64,
    total_amount: f64,
    loan_date: NaiveDateTime,
    notes: Option<&str>,
) -> LoanModel {
    LoanModel {
        id,
        borrower_id,
        initial_amount,
        total_amount,
        loan_date,
        due_date: loan_date + Duration::days(365),
        status: LoanStatus::Active,
        notes: notes.map(str::to_string),
        created_at: loan_date,
    }
}

/// Create a mock cash EMI payment whose total is `principal + interest`.
pub fn mock_emi_payment_model(
    id: i32,
    loan_id: i32,
    payment_date: NaiveDateTime,
    principal_amount: f64,
    interest_amount: f64,
) -> EmiPaymentModel {
    EmiPaymentModel {
        id,
        loan_id,
        payment_date,
        principal_amount,
        interest_amount,
        total_amount: principal_amount + interest_amount,
        payment_method: "cash".to_string(),
        notes: None,
        created_at: payment_date,
    }
}

/// Create a mock scheduled payment whose total is `principal + interest`.
pub fn mock_future_payment_model(
    id: i32,
    loan_id: i32,
    planned_date: NaiveDateTime,
    principal_amount: f64,
    interest_amount: f64,
    status: FuturePaymentStatus,
) -> FuturePaymentModel {
    FuturePaymentModel {
        id,
        loan_id,
        planned_date,
        principal_amount,
        interest_amount,
        total_amount: principal_amount + interest_amount,
        status,
        notes: None,
        created_at: planned_date,
    }
}
