//! Test fixture modules for database record creation.
//!
//! - `loan` - borrowers, loans, recorded EMI payments and scheduled future payments

pub mod loan;
