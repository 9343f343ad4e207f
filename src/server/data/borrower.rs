use sea_orm::{ConnectionTrait, DbErr, EntityTrait, QueryOrder};

pub struct BorrowerRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> BorrowerRepository<'a, C> {
    /// Creates a new instance of [`BorrowerRepository`]
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    pub async fn get_by_id(
        &self,
        borrower_id: i32,
    ) -> Result<Option<entity::borrower::Model>, DbErr> {
        entity::prelude::Borrower::find_by_id(borrower_id)
            .one(self.db)
            .await
    }

    /// Lists every borrower ordered by name
    pub async fn get_all(&self) -> Result<Vec<entity::borrower::Model>, DbErr> {
        entity::prelude::Borrower::find()
            .order_by_asc(entity::borrower::Column::Name)
            .order_by_asc(entity::borrower::Column::Id)
            .all(self.db)
            .await
    }

    /// Lists every borrower together with all of their loans
    ///
    /// Borrowers without loans are included with an empty list.
    pub async fn get_all_with_loans(
        &self,
    ) -> Result<Vec<(entity::borrower::Model, Vec<entity::loan::Model>)>, DbErr> {
        entity::prelude::Borrower::find()
            .find_with_related(entity::prelude::Loan)
            .order_by_asc(entity::borrower::Column::Id)
            .order_by_asc(entity::loan::Column::Id)
            .all(self.db)
            .await
    }
}
