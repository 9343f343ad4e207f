//! Loan financial aggregation.
//!
//! Pure functions turning already-fetched loan, payment and borrower records into the records
//! served by the loan endpoints. Nothing here touches the database or reads the clock; callers
//! pass `now` explicitly.

use std::collections::HashMap;

use chrono::{Datelike, NaiveDateTime};

use crate::{
    model::loan::{
        EmiPaymentRowDto, FuturePaymentRowDto, LoanGraphPointDto, LoanInsightDto,
        LoanTableRowDto, NOTE_AMOUNT_SEPARATOR, NOTE_ENTRY_SEPARATOR,
    },
    server::{
        data::{emi_payment::EmiPaymentWithBorrower, future_payment::FuturePaymentWithBorrower},
        error::Error,
        model::db::{BorrowerModel, EmiPaymentModel, FuturePaymentModel, LoanModel},
        util::time::{format_display_date, format_month_label, shift_months, start_of_month},
    },
};
use entity::sea_orm_active_enums::FuturePaymentStatus;

/// Display name used when a loan has no borrower
pub const BORROWER_PLACEHOLDER: &str = "-";

/// Number of monthly points in the paid/pending series
pub const GRAPH_MONTHS: usize = 9;

/// How many months before the current month the series starts
const GRAPH_MONTHS_BEFORE: i32 = 3;

/// Recent payments reach this many months back from now
const RECENT_PAYMENT_MONTHS: i32 = 2;

/// Upcoming payments reach this many months ahead of now
const UPCOMING_PAYMENT_MONTHS: i32 = 3;

/// Portfolio totals over every loan regardless of status.
///
/// Empty input yields all zeros.
pub fn build_insight(loans: &[(LoanModel, Vec<EmiPaymentModel>)]) -> LoanInsightDto {
    let mut insight = loans.iter().fold(
        LoanInsightDto::default(),
        |mut acc, (loan, payments)| {
            acc.total_principal += loan.initial_amount;
            acc.total_interest += loan.total_amount - loan.initial_amount;
            acc.amount_paid += payments.iter().map(|p| p.total_amount).sum::<f64>();
            acc
        },
    );

    insight.amount_pending = insight.total_principal + insight.total_interest - insight.amount_paid;

    insight
}

/// First instant of each month in the series: `now - 3` through `now + 5` months.
pub fn graph_months(now: NaiveDateTime) -> Result<Vec<NaiveDateTime>, Error> {
    let first = start_of_month(shift_months(now, -GRAPH_MONTHS_BEFORE)?)?;

    (0..GRAPH_MONTHS as i32)
        .map(|offset| shift_months(first, offset))
        .collect()
}

/// Half-open range `[start, end)` covering every month of the series.
pub fn graph_window(now: NaiveDateTime) -> Result<(NaiveDateTime, NaiveDateTime), Error> {
    let months = graph_months(now)?;
    let start = months[0];
    let end = shift_months(months[GRAPH_MONTHS - 1], 1)?;

    Ok((start, end))
}

/// Buckets paid and pending principal/interest by calendar month.
///
/// Recorded payments feed the paid series; scheduled payments still `pending` feed the pending
/// series. Payments outside `months` are ignored.
///
/// Unlike [`build_insight`], which totals every loan unfiltered, the pending series skips
/// completed and cancelled schedules so a settled instalment is not counted as both paid and
/// pending.
pub fn build_graph(
    months: &[NaiveDateTime],
    past: &[EmiPaymentModel],
    future: &[FuturePaymentModel],
) -> Vec<LoanGraphPointDto> {
    let mut points: Vec<LoanGraphPointDto> = months
        .iter()
        .map(|month| LoanGraphPointDto {
            month: format_month_label(*month),
            principal_paid: 0.0,
            interest_paid: 0.0,
            principal_pending: 0.0,
            interest_pending: 0.0,
        })
        .collect();

    let index: HashMap<(i32, u32), usize> = months
        .iter()
        .enumerate()
        .map(|(i, month)| ((month.year(), month.month()), i))
        .collect();

    for payment in past {
        let key = (payment.payment_date.year(), payment.payment_date.month());
        if let Some(&i) = index.get(&key) {
            points[i].principal_paid += payment.principal_amount;
            points[i].interest_paid += payment.interest_amount;
        }
    }

    for payment in future
        .iter()
        .filter(|p| p.status == FuturePaymentStatus::Pending)
    {
        let key = (payment.planned_date.year(), payment.planned_date.month());
        if let Some(&i) = index.get(&key) {
            points[i].principal_pending += payment.principal_amount;
            points[i].interest_pending += payment.interest_amount;
        }
    }

    points
}

/// One row per borrower with at least one loan, ordered by earliest loan date.
///
/// `paid_by_loan` maps loan IDs to the sum of their recorded payments; loans missing from it
/// count as unpaid. Each loan with notes contributes a `"<notes> -- <totalAmount>"` entry to the
/// row's notes, joined with `"; "`.
pub fn build_table(
    borrowers: Vec<(BorrowerModel, Vec<LoanModel>)>,
    paid_by_loan: &HashMap<i32, f64>,
) -> Vec<LoanTableRowDto> {
    let mut rows: Vec<LoanTableRowDto> = borrowers
        .into_iter()
        .filter_map(|(borrower, loans)| {
            let loan_date = loans.iter().map(|l| l.loan_date).min()?;
            let total_amount: f64 = loans.iter().map(|l| l.total_amount).sum();
            let paid_amount: f64 = loans
                .iter()
                .map(|l| paid_by_loan.get(&l.id).copied().unwrap_or(0.0))
                .sum();

            let entries: Vec<String> = loans
                .iter()
                .filter_map(|l| {
                    l.notes
                        .as_ref()
                        .map(|notes| format!("{}{}{}", notes, NOTE_AMOUNT_SEPARATOR, l.total_amount))
                })
                .collect();
            let notes = (!entries.is_empty()).then(|| entries.join(NOTE_ENTRY_SEPARATOR));

            Some(LoanTableRowDto {
                id: borrower.id,
                borrower_name: borrower.name,
                loan_date,
                total_amount,
                paid_amount,
                remaining_amount: total_amount - paid_amount,
                notes,
            })
        })
        .collect();

    rows.sort_by(|a, b| a.loan_date.cmp(&b.loan_date).then(a.id.cmp(&b.id)));

    rows
}

/// Earliest payment date, inclusive, of the recent payments list.
pub fn recent_payments_since(now: NaiveDateTime) -> Result<NaiveDateTime, Error> {
    shift_months(now, -RECENT_PAYMENT_MONTHS)
}

/// Inclusive planned-date range of the upcoming payments list.
pub fn upcoming_payments_window(
    now: NaiveDateTime,
) -> Result<(NaiveDateTime, NaiveDateTime), Error> {
    Ok((
        start_of_month(now)?,
        shift_months(now, UPCOMING_PAYMENT_MONTHS)?,
    ))
}

pub fn emi_payment_row(payment: EmiPaymentWithBorrower) -> EmiPaymentRowDto {
    EmiPaymentRowDto {
        id: payment.id,
        loan_id: payment.loan_id,
        borrower_name: payment
            .borrower_name
            .unwrap_or_else(|| BORROWER_PLACEHOLDER.to_string()),
        payment_date: format_display_date(payment.payment_date),
        principal_amount: payment.principal_amount,
        interest_amount: payment.interest_amount,
        total_amount: payment.total_amount,
        payment_method: payment.payment_method,
    }
}

pub fn future_payment_row(payment: FuturePaymentWithBorrower) -> FuturePaymentRowDto {
    FuturePaymentRowDto {
        id: payment.id,
        loan_id: payment.loan_id,
        borrower_name: payment
            .borrower_name
            .unwrap_or_else(|| BORROWER_PLACEHOLDER.to_string()),
        planned_date: format_display_date(payment.planned_date),
        principal_amount: payment.principal_amount,
        interest_amount: payment.interest_amount,
        total_amount: payment.total_amount,
        status: payment.status.into(),
    }
}
