use chrono::{NaiveDateTime, Utc};
use entity::sea_orm_active_enums::LoanStatus;
use sea_orm::{ActiveModelTrait, ActiveValue, ConnectionTrait, DbErr, EntityTrait, QueryOrder};

/// Fields required to insert a loan
pub struct NewLoan {
    pub borrower_id: i32,
    pub initial_amount: f64,
    pub total_amount: f64,
    pub loan_date: NaiveDateTime,
    pub due_date: NaiveDateTime,
    pub status: LoanStatus,
    pub notes: Option<String>,
}

pub struct LoanRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> LoanRepository<'a, C> {
    /// Creates a new instance of [`LoanRepository`]
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    /// Creates a new loan
    ///
    /// The borrower must exist in the borrower table due to foreign key constraint.
    pub async fn create(&self, loan: NewLoan) -> Result<entity::loan::Model, DbErr> {
        let loan = entity::loan::ActiveModel {
            borrower_id: ActiveValue::Set(Some(loan.borrower_id)),
            initial_amount: ActiveValue::Set(loan.initial_amount),
            total_amount: ActiveValue::Set(loan.total_amount),
            loan_date: ActiveValue::Set(loan.loan_date),
            due_date: ActiveValue::Set(loan.due_date),
            status: ActiveValue::Set(loan.status),
            notes: ActiveValue::Set(loan.notes),
            created_at: ActiveValue::Set(Utc::now().naive_utc()),
            ..Default::default()
        };

        loan.insert(self.db).await
    }

    /// Lists every loan, regardless of status, with all of its recorded EMI payments
    pub async fn get_all_with_payments(
        &self,
    ) -> Result<Vec<(entity::loan::Model, Vec<entity::emi_payment::Model>)>, DbErr> {
        entity::prelude::Loan::find()
            .find_with_related(entity::prelude::EmiPayment)
            .order_by_asc(entity::loan::Column::Id)
            .order_by_asc(entity::emi_payment::Column::Id)
            .all(self.db)
            .await
    }
}
