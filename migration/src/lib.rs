pub use sea_orm_migration::prelude::*;

mod m20251101_000001_create_borrower_table;
mod m20251101_000002_create_loan_table;
mod m20251101_000003_create_emi_payment_table;
mod m20251101_000004_create_future_payment_table;

pub struct Migrator;

#[async_trait::async_trait]
impl MigratorTrait for Migrator {
    fn migrations() -> Vec<Box<dyn MigrationTrait>> {
        vec![
            Box::new(m20251101_000001_create_borrower_table::Migration),
            Box::new(m20251101_000002_create_loan_table::Migration),
            Box::new(m20251101_000003_create_emi_payment_table::Migration),
            Box::new(m20251101_000004_create_future_payment_table::Migration),
        ]
    }
}
