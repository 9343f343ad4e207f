//! Database model type aliases for test utilities.
//!
//! These aliases match those in the main loanbook crate to keep test signatures short.

/// Type alias for borrower database model.
pub type BorrowerModel = entity::borrower::Model;

/// Type alias for loan database model.
pub type LoanModel = entity::loan::Model;

/// Type alias for recorded EMI payment database model.
pub type EmiPaymentModel = entity::emi_payment::Model;

/// Type alias for scheduled future payment database model.
pub type FuturePaymentModel = entity::future_payment::Model;
