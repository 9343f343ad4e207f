use chrono::NaiveDateTime;
use entity::sea_orm_active_enums::FuturePaymentStatus;
use sea_orm::{
    ColumnTrait, ConnectionTrait, DbErr, EntityTrait, FromQueryResult, JoinType, QueryFilter,
    QueryOrder, QuerySelect, RelationTrait,
};

/// A scheduled payment joined to the name of the owning loan's borrower
#[derive(Clone, Debug, PartialEq, FromQueryResult)]
pub struct FuturePaymentWithBorrower {
    pub id: i32,
    pub loan_id: i32,
    pub planned_date: NaiveDateTime,
    pub principal_amount: f64,
    pub interest_amount: f64,
    pub total_amount: f64,
    pub status: FuturePaymentStatus,
    /// `None` when the loan has no borrower
    pub borrower_name: Option<String>,
}

pub struct FuturePaymentRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> FuturePaymentRepository<'a, C> {
    /// Creates a new instance of [`FuturePaymentRepository`]
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    /// Lists payments planned within `start..=end`, any status, with their borrower name
    ///
    /// Results are in insertion (ID) order.
    pub async fn get_between_with_borrower(
        &self,
        start: NaiveDateTime,
        end: NaiveDateTime,
    ) -> Result<Vec<FuturePaymentWithBorrower>, DbErr> {
        entity::prelude::FuturePayment::find()
            .select_only()
            .columns([
                entity::future_payment::Column::Id,
                entity::future_payment::Column::LoanId,
                entity::future_payment::Column::PlannedDate,
                entity::future_payment::Column::PrincipalAmount,
                entity::future_payment::Column::InterestAmount,
                entity::future_payment::Column::TotalAmount,
                entity::future_payment::Column::Status,
            ])
            .column_as(entity::borrower::Column::Name, "borrower_name")
            .join(
                JoinType::InnerJoin,
                entity::future_payment::Relation::Loan.def(),
            )
            .join(JoinType::LeftJoin, entity::loan::Relation::Borrower.def())
            .filter(entity::future_payment::Column::PlannedDate.gte(start))
            .filter(entity::future_payment::Column::PlannedDate.lte(end))
            .order_by_asc(entity::future_payment::Column::Id)
            .into_model::<FuturePaymentWithBorrower>()
            .all(self.db)
            .await
    }

    /// Lists payments with `start <= planned_date < end`, any status
    pub async fn get_between(
        &self,
        start: NaiveDateTime,
        end: NaiveDateTime,
    ) -> Result<Vec<entity::future_payment::Model>, DbErr> {
        entity::prelude::FuturePayment::find()
            .filter(entity::future_payment::Column::PlannedDate.gte(start))
            .filter(entity::future_payment::Column::PlannedDate.lt(end))
            .order_by_asc(entity::future_payment::Column::Id)
            .all(self.db)
            .await
    }
}
