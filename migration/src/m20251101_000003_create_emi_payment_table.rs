use sea_orm_migration::{prelude::*, schema::*};

use crate::m20251101_000002_create_loan_table::Loan;

static IDX_EMI_PAYMENT_LOAN_ID: &str = "idx_emi_payment_loan_id";
static IDX_EMI_PAYMENT_PAYMENT_DATE: &str = "idx_emi_payment_payment_date";
static FK_EMI_PAYMENT_LOAN_ID: &str = "fk_emi_payment_loan_id";

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(EmiPayment::Table)
                    .if_not_exists()
                    .col(pk_auto(EmiPayment::Id))
                    .col(integer(EmiPayment::LoanId))
                    .col(timestamp(EmiPayment::PaymentDate))
                    .col(double(EmiPayment::PrincipalAmount))
                    .col(double(EmiPayment::InterestAmount))
                    .col(double(EmiPayment::TotalAmount))
                    .col(string(EmiPayment::PaymentMethod))
                    .col(text_null(EmiPayment::Notes))
                    .col(timestamp(EmiPayment::CreatedAt))
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name(IDX_EMI_PAYMENT_LOAN_ID)
                    .table(EmiPayment::Table)
                    .col(EmiPayment::LoanId)
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name(IDX_EMI_PAYMENT_PAYMENT_DATE)
                    .table(EmiPayment::Table)
                    .col(EmiPayment::PaymentDate)
                    .to_owned(),
            )
            .await?;

        manager
            .create_foreign_key(
                ForeignKey::create()
                    .name(FK_EMI_PAYMENT_LOAN_ID)
                    .from_tbl(EmiPayment::Table)
                    .from_col(EmiPayment::LoanId)
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
                    .name(FK_EMI_PAYMENT_LOAN_ID)
                    .table(EmiPayment::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_index(
                Index::drop()
                    .name(IDX_EMI_PAYMENT_PAYMENT_DATE)
                    .table(EmiPayment::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_index(
                Index::drop()
                    .name(IDX_EMI_PAYMENT_LOAN_ID)
                    .table(EmiPayment::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_table(Table::drop().table(EmiPayment::Table).to_owned())
            .await?;

        Ok(())
    }
}

#[derive(DeriveIden)]
enum EmiPayment {
    Table,
    Id,
    LoanId,
    PaymentDate,
    PrincipalAmount,
    InterestAmount,
    TotalAmount,
    PaymentMethod,
    Notes,
    CreatedAt,
}
