//! Loan schema fixture utilities.
//!
//! Methods here insert records into the test database. Pure in-memory model constructors
//! live in [`factory`].

pub mod factory;

use chrono::{Duration, NaiveDateTime, Utc};
use entity::sea_orm_active_enums::{FuturePaymentStatus, LoanStatus};
use sea_orm::{ActiveValue, EntityTrait};

use crate::{
    error::TestError,
    model::{BorrowerModel, EmiPaymentModel, FuturePaymentModel, LoanModel},
    TestContext,
};

impl TestContext {
    pub fn loan<'a>(&'a self) -> LoanFixtures<'a> {
        LoanFixtures { setup: self }
    }
}

pub struct LoanFixtures<'a> {
    setup: &'a TestContext,
}

impl<'a> LoanFixtures<'a> {
    pub async fn insert_borrower(&self, name: &str) -> Result<BorrowerModel, TestError> {
        Ok(
            entity::prelude::Borrower::insert(entity::borrower::ActiveModel {
                name: ActiveValue::Set(name.to_string()),
                created_at: ActiveValue::Set(Utc::now().naive_utc()),
                ..Default::default()
            })
            .exec_with_returning(&self.setup.db)
            .await?,
        )
    }

    /// Insert an active loan due one year after `loan_date`.
    pub async fn insert_loan(
        &self,
        borrower_id: Option<i32>,
        initial_amount: f64,
        total_amount: f64,
        loan_date: NaiveDateTime,
        notes: Option<&str>,
    ) -> Result<LoanModel, TestError> {
        self.insert_loan_with_status(
            borrower_id,
            initial_amount,
            total_amount,
            loan_date,
            notes,
            LoanStatus::Active,
        )
        .await
    }

    pub async fn insert_loan_with_status(
        &self,
        borrower_id: Option<i32>,
        initial_amount: f64,
        total_amount: f64,
        loan_date: NaiveDateTime,
        notes: Option<&str>,
        status: LoanStatus,
    ) -> Result<LoanModel, TestError> {
        Ok(
            entity::prelude::Loan::insert(entity::loan::ActiveModel {
                borrower_id: ActiveValue::Set(borrower_id),
                initial_amount: ActiveValue::Set(initial_amount),
                total_amount: ActiveValue::Set(total_amount),
                loan_date: ActiveValue::Set(loan_date),
                due_date: ActiveValue::Set(loan_date + Duration::days(365)),
                status: ActiveValue::Set(status),
                notes: ActiveValue::Set(notes.map(str::to_string)),
                created_at: ActiveValue::Set(Utc::now().naive_utc()),
                ..Default::default()
            })
            .exec_with_returning(&self.setup.db)
            .await?,
        )
    }

    /// Insert a borrower together with a single loan without notes.
    pub async fn insert_borrower_with_loan(
        &self,
        name: &str,
        initial_amount: f64,
        total_amount: f64,
        loan_date: NaiveDateTime,
    ) -> Result<(BorrowerModel, LoanModel), TestError> {
        let borrower = self.insert_borrower(name).await?;
        let loan = self
            .insert_loan(
                Some(borrower.id),
                initial_amount,
                total_amount,
                loan_date,
                None,
            )
            .await?;

        Ok((borrower, loan))
    }

    /// Insert a recorded cash EMI payment whose total is `principal + interest`.
    pub async fn insert_emi_payment(
        &self,
        loan_id: i32,
        payment_date: NaiveDateTime,
        principal_amount: f64,
        interest_amount: f64,
    ) -> Result<EmiPaymentModel, TestError> {
        Ok(
            entity::prelude::EmiPayment::insert(entity::emi_payment::ActiveModel {
                loan_id: ActiveValue::Set(loan_id),
                payment_date: ActiveValue::Set(payment_date),
                principal_amount: ActiveValue::Set(principal_amount),
                interest_amount: ActiveValue::Set(interest_amount),
                total_amount: ActiveValue::Set(principal_amount + interest_amount),
                payment_method: ActiveValue::Set("cash".to_string()),
                notes: ActiveValue::Set(None),
                created_at: ActiveValue::Set(Utc::now().naive_utc()),
                ..Default::default()
            })
            .exec_with_returning(&self.setup.db)
            .await?,
        )
    }

    /// Insert a scheduled payment whose total is `principal + interest`.
    pub async fn insert_future_payment(
        &self,
        loan_id: i32,
        planned_date: NaiveDateTime,
        principal_amount: f64,
        interest_amount: f64,
        status: FuturePaymentStatus,
    ) -> Result<FuturePaymentModel, TestError> {
        Ok(
            entity::prelude::FuturePayment::insert(entity::future_payment::ActiveModel {
                loan_id: ActiveValue::Set(loan_id),
                planned_date: ActiveValue::Set(planned_date),
                principal_amount: ActiveValue::Set(principal_amount),
                interest_amount: ActiveValue::Set(interest_amount),
                total_amount: ActiveValue::Set(principal_amount + interest_amount),
                status: ActiveValue::Set(status),
                notes: ActiveValue::Set(None),
                created_at: ActiveValue::Set(Utc::now().naive_utc()),
                ..Default::default()
            })
            .exec_with_returning(&self.setup.db)
            .await?,
        )
    }
}
