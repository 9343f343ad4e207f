use sea_orm::entity::prelude::*;

use super::sea_orm_active_enums::LoanStatus;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "loan")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub borrower_id: Option<i32>,
    pub initial_amount: f64,
    pub total_amount: f64,
    pub loan_date: DateTime,
    pub due_date: DateTime,
    pub status: LoanStatus,
    #[sea_orm(column_type = "Text", nullable)]
    pub notes: Option<String>,
    pub created_at: DateTime,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::borrower::Entity",
        from = "Column::BorrowerId",
        to = "super::borrower::Column::Id",
        on_update = "NoAction",
        on_delete = "SetNull"
    )]
    Borrower,
    #[sea_orm(has_many = "super::emi_payment::Entity")]
    EmiPayment,
    #[sea_orm(has_many = "super::future_payment::Entity")]
    FuturePayment,
}

impl Related<super::borrower::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Borrower.def()
    }
}

impl Related<super::emi_payment::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::EmiPayment.def()
    }
}

impl Related<super::future_payment::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::FuturePayment.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
