use sea_orm_migration::{prelude::*, schema::*};

use crate::m20251101_000001_create_borrower_table::Borrower;

static IDX_LOAN_BORROWER_ID: &str = "idx_loan_borrower_id";
static IDX_LOAN_LOAN_DATE: &str = "idx_loan_loan_date";
static FK_LOAN_BORROWER_ID: &str = "fk_loan_borrower_id";

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Loan::Table)
                    .if_not_exists()
                    .col(pk_auto(Loan::Id))
                    .col(integer_null(Loan::BorrowerId))
                    .col(double(Loan::InitialAmount))
                    .col(double(Loan::TotalAmount))
                    .col(timestamp(Loan::LoanDate))
                    .col(timestamp(Loan::DueDate))
                    .col(string_len(Loan::Status, 16))
                    .col(text_null(Loan::Notes))
                    .col(timestamp(Loan::CreatedAt))
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name(IDX_LOAN_BORROWER_ID)
                    .table(Loan::Table)
                    .col(Loan::BorrowerId)
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name(IDX_LOAN_LOAN_DATE)
                    .table(Loan::Table)
                    .col(Loan::LoanDate)
                    .to_owned(),
            )
            .await?;

        manager
            .create_foreign_key(
                ForeignKey::create()
                    .name(FK_LOAN_BORROWER_ID)
                    .from_tbl(Loan::Table)
                    .from_col(Loan::BorrowerId)
                    .to_tbl(Borrower::Table)
                    .to_col(Borrower::Id)
                    .on_delete(ForeignKeyAction::SetNull)
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_foreign_key(
                ForeignKey::drop()
                    .name(FK_LOAN_BORROWER_ID)
                    .table(Loan::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_index(
                Index::drop()
                    .name(IDX_LOAN_LOAN_DATE)
                    .table(Loan::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_index(
                Index::drop()
                    .name(IDX_LOAN_BORROWER_ID)
                    .table(Loan::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_table(Table::drop().table(Loan::Table).to_owned())
            .await?;

        Ok(())
    }
}

#[derive(DeriveIden)]
pub enum Loan {
    Table,
    Id,
    BorrowerId,
    InitialAmount,
    TotalAmount,
    LoanDate,
    DueDate,
    Status,
    Notes,
    CreatedAt,
}
