use sea_orm_migration::{prelude::*, schema::*};

static IDX_BORROWER_NAME: &str = "idx_borrower_name";

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Borrower::Table)
                    .if_not_exists()
                    .col(pk_auto(Borrower::Id))
                    .col(string(Borrower::Name))
                    .col(timestamp(Borrower::CreatedAt))
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name(IDX_BORROWER_NAME)
                    .table(Borrower::Table)
                    .col(Borrower::Name)
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_index(
                Index::drop()
                    .name(IDX_BORROWER_NAME)
                    .table(Borrower::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_table(Table::drop().table(Borrower::Table).to_owned())
            .await?;

        Ok(())
    }
}

#[derive(DeriveIden)]
pub enum Borrower {
    Table,
    Id,
    Name,
    CreatedAt,
}
