pub mod builder;
pub mod context;
pub mod error;
pub mod fixtures;
pub mod model;

pub use builder::TestBuilder;
pub use context::TestContext;
pub use error::TestError;

pub mod prelude {
    pub use crate::{
        fixtures::loan::factory, test_setup_with_loan_tables, test_setup_with_tables, TestBuilder,
        TestContext, TestError,
    };
}

/// Create a test context with the provided entity tables.
///
/// With no arguments the context has an empty database, which is useful for asserting
/// that operations fail when their tables are missing.
#[macro_export]
macro_rules! test_setup_with_tables {
    () => {{
        $crate::TestBuilder::new().build().await
    }};

    ($($entity:expr),+ $(,)?) => {{
        $crate::TestBuilder::new()
            $(.with_table($entity))+
            .build()
            .await
    }};
}

/// Create a test context with every table of the loan schema.
#[macro_export]
macro_rules! test_setup_with_loan_tables {
    () => {{
        $crate::TestBuilder::new().with_loan_tables().build().await
    }};
}
