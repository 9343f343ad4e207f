//! Loan service layer.
//!
//! Reads loans, payments and borrowers through the repositories and aggregates them into the
//! portfolio insight, the monthly graph, the borrower table and the payment lists. Also
//! validates and creates loans.

pub mod aggregate;

#[cfg(test)]
mod tests;

use chrono::{NaiveDateTime, Utc};
use dioxus_logger::tracing;
use sea_orm::DatabaseConnection;

use crate::{
    model::loan::{
        BorrowerDto, CreateLoanDto, EmiPaymentRowDto, FuturePaymentRowDto, LoanDto,
        LoanGraphPointDto, LoanInsightDto, LoanTableRowDto,
    },
    server::{
        data::{
            borrower::BorrowerRepository,
            emi_payment::EmiPaymentRepository,
            future_payment::FuturePaymentRepository,
            loan::{LoanRepository, NewLoan},
        },
        error::{loan::LoanError, Error},
        model::db::LoanModel,
    },
};

/// Service for loan portfolio reporting and loan creation.
///
/// Every read has an `*_at` variant taking the reference time explicitly; the plain variant
/// uses the current UTC time. Database failures surface as [`Error::DbErr`].
pub struct LoanService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> LoanService<'a> {
    /// Creates a new instance of [`LoanService`]
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Portfolio totals across every loan regardless of status.
    ///
    /// # Returns
    /// - `Ok(LoanInsightDto)` - Totals, all zero when there are no loans
    /// - `Err(Error::DbErr)` - Database operation failed
    pub async fn get_insight(&self) -> Result<LoanInsightDto, Error> {
        let loan_repo = LoanRepository::new(self.db);

        let loans = loan_repo.get_all_with_payments().await?;

        Ok(aggregate::build_insight(&loans))
    }

    pub async fn get_graph(&self) -> Result<Vec<LoanGraphPointDto>, Error> {
        self.get_graph_at(Utc::now().naive_utc()).await
    }

    /// Monthly paid and pending principal/interest for the 9 months starting 3 months before
    /// `now`.
    ///
    /// # Returns
    /// - `Ok(Vec<LoanGraphPointDto>)` - Exactly 9 points in chronological order
    /// - `Err(Error::DbErr)` - Database operation failed
    /// - `Err(Error::ParseError)` - `now` is too close to the representable date range limits
    pub async fn get_graph_at(&self, now: NaiveDateTime) -> Result<Vec<LoanGraphPointDto>, Error> {
        let emi_payment_repo = EmiPaymentRepository::new(self.db);
        let future_payment_repo = FuturePaymentRepository::new(self.db);

        let months = aggregate::graph_months(now)?;
        let (start, end) = aggregate::graph_window(now)?;

        let past = emi_payment_repo.get_between(start, end).await?;
        let future = future_payment_repo.get_between(start, end).await?;

        tracing::debug!(
            "Building loan graph from {} to {} over {} recorded and {} scheduled payments",
            start,
            end,
            past.len(),
            future.len()
        );

        Ok(aggregate::build_graph(&months, &past, &future))
    }

    /// One row per borrower with loans, ordered by the borrower's earliest loan date.
    pub async fn get_table(&self) -> Result<Vec<LoanTableRowDto>, Error> {
        let borrower_repo = BorrowerRepository::new(self.db);
        let emi_payment_repo = EmiPaymentRepository::new(self.db);

        let borrowers = borrower_repo.get_all_with_loans().await?;
        let paid_by_loan = emi_payment_repo
            .get_paid_totals_by_loan()
            .await?
            .into_iter()
            .collect();

        Ok(aggregate::build_table(borrowers, &paid_by_loan))
    }

    pub async fn get_recent_payments(&self) -> Result<Vec<EmiPaymentRowDto>, Error> {
        self.get_recent_payments_at(Utc::now().naive_utc()).await
    }

    /// Recorded payments dated within the two months before `now`, inclusive.
    pub async fn get_recent_payments_at(
        &self,
        now: NaiveDateTime,
    ) -> Result<Vec<EmiPaymentRowDto>, Error> {
        let emi_payment_repo = EmiPaymentRepository::new(self.db);

        let since = aggregate::recent_payments_since(now)?;
        let payments = emi_payment_repo.get_since_with_borrower(since).await?;

        Ok(payments
            .into_iter()
            .map(aggregate::emi_payment_row)
            .collect())
    }

    pub async fn get_upcoming_payments(&self) -> Result<Vec<FuturePaymentRowDto>, Error> {
        self.get_upcoming_payments_at(Utc::now().naive_utc()).await
    }

    /// Scheduled payments planned from the start of the current month through 3 months after
    /// `now`, inclusive, in any status.
    pub async fn get_upcoming_payments_at(
        &self,
        now: NaiveDateTime,
    ) -> Result<Vec<FuturePaymentRowDto>, Error> {
        let future_payment_repo = FuturePaymentRepository::new(self.db);

        let (start, end) = aggregate::upcoming_payments_window(now)?;
        let payments = future_payment_repo
            .get_between_with_borrower(start, end)
            .await?;

        Ok(payments
            .into_iter()
            .map(aggregate::future_payment_row)
            .collect())
    }

    /// Borrowers selectable when creating a loan, ordered by name.
    pub async fn get_borrowers(&self) -> Result<Vec<BorrowerDto>, Error> {
        let borrower_repo = BorrowerRepository::new(self.db);

        let borrowers = borrower_repo.get_all().await?;

        Ok(borrowers
            .into_iter()
            .map(|b| BorrowerDto {
                id: b.id,
                name: b.name,
            })
            .collect())
    }

    /// Validates and inserts a loan.
    ///
    /// # Arguments
    /// - `payload` - Loan to create
    ///
    /// # Returns
    /// - `Ok(LoanDto)` - The created loan
    /// - `Err(Error::LoanError)` - Payload rejected, see [`validate_new_loan`]
    /// - `Err(Error::LoanError(LoanError::BorrowerNotFound))` - Borrower ID does not exist
    /// - `Err(Error::DbErr)` - Database operation failed
    pub async fn create_loan(&self, payload: CreateLoanDto) -> Result<LoanDto, Error> {
        let new_loan = validate_new_loan(payload)?;

        let borrower_repo = BorrowerRepository::new(self.db);
        let loan_repo = LoanRepository::new(self.db);

        if borrower_repo.get_by_id(new_loan.borrower_id).await?.is_none() {
            return Err(LoanError::BorrowerNotFound(new_loan.borrower_id).into());
        }

        let loan = loan_repo.create(new_loan).await?;

        tracing::info!(
            "Created loan ID {} of {} for borrower ID {:?}",
            loan.id,
            loan.total_amount,
            loan.borrower_id
        );

        Ok(to_loan_dto(loan))
    }
}

/// Checks a creation payload and converts it into an insertable loan.
///
/// Rejects a missing borrower, non-positive amounts, a total below the initial amount and a
/// due date before the loan date. Borrower existence is checked by the caller.
pub fn validate_new_loan(payload: CreateLoanDto) -> Result<NewLoan, LoanError> {
    let borrower_id = payload.borrower_id.ok_or(LoanError::MissingBorrower)?;

    if payload.initial_amount <= 0.0 {
        return Err(LoanError::NonPositiveAmount {
            field: "Initial amount",
        });
    }
    if payload.total_amount <= 0.0 {
        return Err(LoanError::NonPositiveAmount {
            field: "Total amount",
        });
    }
    if payload.total_amount < payload.initial_amount {
        return Err(LoanError::TotalBelowInitial {
            initial: payload.initial_amount,
            total: payload.total_amount,
        });
    }
    if payload.due_date < payload.loan_date {
        return Err(LoanError::DueDateBeforeLoanDate);
    }

    Ok(NewLoan {
        borrower_id,
        initial_amount: payload.initial_amount,
        total_amount: payload.total_amount,
        loan_date: payload.loan_date.naive_utc(),
        due_date: payload.due_date.naive_utc(),
        status: payload.status.into(),
        notes: payload.notes.filter(|notes| !notes.trim().is_empty()),
    })
}

fn to_loan_dto(loan: LoanModel) -> LoanDto {
    LoanDto {
        id: loan.id,
        borrower_id: loan.borrower_id,
        initial_amount: loan.initial_amount,
        total_amount: loan.total_amount,
        interest_amount: loan.total_amount - loan.initial_amount,
        loan_date: loan.loan_date,
        due_date: loan.due_date,
        status: loan.status.into(),
        notes: loan.notes,
    }
}
