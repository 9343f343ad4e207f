use sea_orm_migration::{prelude::*, schema::*};

use crate::m20251101_000002_create_loan_table::Loan;

static IDX_FUTURE_PAYMENT_LOAN_ID: &str = "idx_future_payment_loan_id";
static IDX_FUTURE_PAYMENT_PLANNED_DATE: &str = "idx_future_payment_planned_date";
static FK_FUTURE_PAYMENT_LOAN_ID: &str = "fk_future_payment_loan_id";

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(FuturePayment::Table)
                    .if_not_exists()
                    .col(pk_auto(FuturePayment::Id))
                    .col(integer(FuturePayment::LoanId))
                    .col(timestamp(FuturePayment::PlannedDate))
                    .col(double(FuturePayment::PrincipalAmount))
                    .col(double(FuturePayment::InterestAmount))
                    .col(double(FuturePayment::TotalAmount))
                    .col(string_len(FuturePayment::Status, 16))
                    .col(text_null(FuturePayment::Notes))
                    .col(timestamp(FuturePayment::CreatedAt))
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name(IDX_FUTURE_PAYMENT_LOAN_ID)
                    .table(FuturePayment::Table)
                    .col(FuturePayment::LoanId)
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name(IDX_FUTURE_PAYMENT_PLANNED_DATE)
                    .table(FuturePayment::Table)
                    .col(FuturePayment::PlannedDate)
                    .to_owned(),
            )
            .await?;

        manager
            .create_foreign_key(
                ForeignKey::create()
                    .name(FK_FUTURE_PAYMENT_LOAN_ID)
                    .from_tbl(FuturePayment::Table)
                    .from_col(FuturePayment::LoanId)
                    .to_tbl(Loan::Table)
                    .to_col(Loan::Id)
                    .on_delete(ForeignKeyAction::Cascade)
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_foreign_key(
                ForeignKey::drop()
                    .name(FK_FUTURE_PAYMENT_LOAN_ID)
                    .table(FuturePayment::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_index(
                Index::drop()
                    .name(IDX_FUTURE_PAYMENT_PLANNED_DATE)
                    .table(FuturePayment::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_index(
                Index::drop()
                    .name(IDX_FUTURE_PAYMENT_LOAN_ID)
                    .table(FuturePayment::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_table(Table::drop().table(FuturePayment::Table).to_owned())
            .await?;

        Ok(())
    }
}

#[derive(DeriveIden)]
enum FuturePayment {
    Table,
    Id,
    LoanId,
    PlannedDate,
    PrincipalAmount,
    InterestAmount,
    TotalAmount,
    Status,
    Notes,
    CreatedAt,
}
