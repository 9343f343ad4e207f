//! Declarative test builder.
//!
//! This module provides the `TestBuilder` API for configuring test environments before execution.
//! Configuration methods are chained together and all queued operations are executed during the
//! final `build()` call.

use sea_orm::{sea_query::TableCreateStatement, EntityTrait, Schema};

use crate::{error::TestError, TestContext};

/// Builder for declarative test initialization.
///
/// Sets up an in-memory database with the requested tables and borrower fixtures.
pub struct TestBuilder {
    tables: Vec<TableCreateStatement>,
    include_loan_tables: bool,

    // Borrower names to insert, in order
    borrowers: Vec<String>,
}

impl TestBuilder {
    pub fn new() -> Self {
        Self {
            tables: Vec::new(),
            include_loan_tables: false,
            borrowers: Vec::new(),
        }
    }

    /// Add every table of the loan schema to the test database.
    ///
    /// Creates Borrower, Loan, EmiPayment and FuturePayment in dependency order.
    pub fn with_loan_tables(mut self) -> Self {
        self.include_loan_tables = true;
        self
    }

    /// Add a custom entity table to the test database.
    ///
    /// Generates a CREATE TABLE statement for the entity, which will be executed during `build()`.
    /// Chain multiple calls to add multiple tables.
    ///
    /// # Example
    ///
    /// ```no_run
    /// use loanbook_test_utils::TestBuilder;
    /// use entity::prelude::*;
    ///
    /// # async fn example() -> Result<(), loanbook_test_utils::TestError> {
    /// let test = TestBuilder::new()
    ///     .with_table(Borrower)
    ///     .with_table(Loan)
    ///     .build()
    ///     .await?;
    /// # Ok(())
    /// # }
    /// ```
    pub fn with_table<E: EntityTrait>(mut self, entity: E) -> Self {
        let schema = Schema::new(sea_orm::DbBackend::Sqlite);
        self.tables.push(schema.create_table_from_entity(entity));
        self
    }

    /// Insert a borrower with the given name during `build()`.
    ///
    /// Borrowers are inserted in the order they are queued, so the first queued borrower
    /// receives ID 1.
    pub fn with_mock_borrower(mut self, name: impl Into<String>) -> Self {
        self.borrowers.push(name.into());
        self
    }

    pub async fn build(self) -> Result<TestContext, TestError> {
        let setup = TestContext::new().await?;

        let mut all_tables = Vec::new();

        if self.include_loan_tables {
            let schema = Schema::new(sea_orm::DbBackend::Sqlite);
            all_tables.extend(vec![
                schema.create_table_from_entity(entity::prelude::Borrower),
                schema.create_table_from_entity(entity::prelude::Loan),
                schema.create_table_from_entity(entity::prelude::EmiPayment),
                schema.create_table_from_entity(entity::prelude::FuturePayment),
            ]);
        }

        all_tables.extend(self.tables);
        setup.with_tables(all_tables).await?;

        for name in self.borrowers {
            setup.loan().insert_borrower(&name).await?;
        }

        Ok(setup)
    }
}

impl Default for TestBuilder {
    fn default() -> Self {
        Self::new()
    }
}
