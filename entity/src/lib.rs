//! SeaORM entities for the loanbook schema.

pub mod prelude;

pub mod borrower;
pub mod emi_payment;
pub mod future_payment;
pub mod loan;
pub mod sea_orm_active_enums;
