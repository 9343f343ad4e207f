use chrono::NaiveDateTime;
use sea_orm::{
    ColumnTrait, ConnectionTrait, DbErr, EntityTrait, FromQueryResult, JoinType, QueryFilter,
    QueryOrder, QuerySelect, RelationTrait,
};

/// A recorded EMI payment joined to the name of the owning loan's borrower
#[derive(Clone, Debug, PartialEq, FromQueryResult)]
pub struct EmiPaymentWithBorrower {
    pub id: i32,
    pub loan_id: i32,
    pub payment_date: NaiveDateTime,
    pub principal_amount: f64,
    pub interest_amount: f64,
    pub total_amount: f64,
    pub payment_method: String,
    /// `None` when the loan has no borrower
    pub borrower_name: Option<String>,
}

pub struct EmiPaymentRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> EmiPaymentRepository<'a, C> {
    /// Creates a new instance of [`EmiPaymentRepository`]
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    /// Lists payments made on or after `min_payment_date` with their borrower name
    ///
    /// Results are in insertion (ID) order.
    pub async fn get_since_with_borrower(
        &self,
        min_payment_date: NaiveDateTime,
    ) -> Result<Vec<EmiPaymentWithBorrower>, DbErr> {
        entity::prelude::EmiPayment::find()
            .select_only()
            .columns([
                entity::emi_payment::Column::Id,
                entity::emi_payment::Column::LoanId,
                entity::emi_payment::Column::PaymentDate,
                entity::emi_payment::Column::PrincipalAmount,
                entity::emi_payment::Column::InterestAmount,
                entity::emi_payment::Column::TotalAmount,
                entity::emi_payment::Column::PaymentMethod,
            ])
            .column_as(entity::borrower::Column::Name, "borrower_name")
            .join(JoinType::InnerJoin, entity::emi_payment::Relation::Loan.def())
            .join(JoinType::LeftJoin, entity::loan::Relation::Borrower.def())
            .filter(entity::emi_payment::Column::PaymentDate.gte(min_payment_date))
            .order_by_asc(entity::emi_payment::Column::Id)
            .into_model::<EmiPaymentWithBorrower>()
            .all(self.db)
            .await
    }

    /// Lists payments with `start <= payment_date < end`
    pub async fn get_between(
        &self,
        start: NaiveDateTime,
        end: NaiveDateTime,
    ) -> Result<Vec<entity::emi_payment::Model>, DbErr> {
        entity::prelude::EmiPayment::find()
            .filter(entity::emi_payment::Column::PaymentDate.gte(start))
            .filter(entity::emi_payment::Column::PaymentDate.lt(end))
            .order_by_asc(entity::emi_payment::Column::Id)
            .all(self.db)
            .await
    }

    /// Sums the total amount paid per loan
    ///
    /// Returns `(loan_id, paid_amount)` tuples; loans without payments are absent.
    pub async fn get_paid_totals_by_loan(&self) -> Result<Vec<(i32, f64)>, DbErr> {
        entity::prelude::EmiPayment::find()
            .select_only()
            .column(entity::emi_payment::Column::LoanId)
            .column_as(entity::emi_payment::Column::TotalAmount.sum(), "paid_amount")
            .group_by(entity::emi_payment::Column::LoanId)
            .order_by_asc(entity::emi_payment::Column::LoanId)
            .into_tuple::<(i32, f64)>()
            .all(self.db)
            .await
    }
}
