//! Data access layer repositories.
//!
//! One repository per table of the loan schema. Repositories are generic over SeaORM's
//! `ConnectionTrait` so they can run on a pooled connection or inside a transaction. They are
//! read-mostly; the only write is loan creation.

pub mod borrower;
pub mod emi_payment;
pub mod future_payment;
pub mod loan;
