pub use super::borrower::Entity as Borrower;
pub use super::emi_payment::Entity as EmiPayment;
pub use super::future_payment::Entity as FuturePayment;
pub use super::loan::Entity as Loan;
