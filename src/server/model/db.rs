//! Database model type aliases.
//!
//! This module provides convenient type aliases for SeaORM database entity models used
//! throughout the application, plus conversions from the database status enums to the
//! status enums exposed over the API.

use entity::sea_orm_active_enums::{FuturePaymentStatus, LoanStatus};

use crate::model::loan::{FuturePaymentStatusDto, LoanStatusDto};

/// Type alias for borrower database model.
///
/// # Fields (from `entity::borrower::Model`)
/// - `id` - Primary key
/// - `name` - Display name
/// - `created_at` - Timestamp when the record was created
pub type BorrowerModel = entity::borrower::Model;

/// Type alias for loan database model.
///
/// # Fields (from `entity::loan::Model`)
/// - `id` - Primary key
/// - `borrower_id` - Owning borrower, absent when the borrower was removed or never linked
/// - `initial_amount` - Principal disbursed
/// - `total_amount` - Principal plus scheduled interest
/// - `loan_date` - Date the loan was given
/// - `due_date` - Date the loan is due
/// - `status` - Canonical loan status
/// - `notes` - Optional free text
/// - `created_at` - Timestamp when the record was created
pub type LoanModel = entity::loan::Model;

/// Type alias for recorded EMI payment database model.
///
/// # Fields (from `entity::emi_payment::Model`)
/// - `id` - Primary key
/// - `loan_id` - Loan the payment was made against
/// - `payment_date` - Date the money was received
/// - `principal_amount` - Principal portion
/// - `interest_amount` - Interest portion
/// - `total_amount` - Amount received
/// - `payment_method` - Free text such as `cash` or `UPI`
/// - `notes` - Optional free text
/// - `created_at` - Timestamp when the record was created
pub type EmiPaymentModel = entity::emi_payment::Model;

/// Type alias for scheduled future payment database model.
///
/// # Fields (from `entity::future_payment::Model`)
/// - `id` - Primary key
/// - `loan_id` - Loan the payment is planned against
/// - `planned_date` - Date the payment is expected
/// - `principal_amount` - Principal portion
/// - `interest_amount` - Interest portion
/// - `total_amount` - Expected amount
/// - `status` - `pending`, `completed` or `cancelled`
/// - `notes` - Optional free text
/// - `created_at` - Timestamp when the record was created
pub type FuturePaymentModel = entity::future_payment::Model;

impl From<LoanStatus> for LoanStatusDto {
    fn from(status: LoanStatus) -> Self {
        match status {
            LoanStatus::Active => Self::Active,
            LoanStatus::Closed => Self::Closed,
            LoanStatus::Defaulted => Self::Defaulted,
        }
    }
}

impl From<LoanStatusDto> for LoanStatus {
    fn from(status: LoanStatusDto) -> Self {
        match status {
            LoanStatusDto::Active => Self::Active,
            LoanStatusDto::Closed => Self::Closed,
            LoanStatusDto::Defaulted => Self::Defaulted,
        }
    }
}

impl From<FuturePaymentStatus> for FuturePaymentStatusDto {
    fn from(status: FuturePaymentStatus) -> Self {
        match status {
            FuturePaymentStatus::Pending => Self::Pending,
            FuturePaymentStatus::Completed => Self::Completed,
            FuturePaymentStatus::Cancelled => Self::Cancelled,
        }
    }
}
