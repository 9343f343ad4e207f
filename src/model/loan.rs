use chrono::{DateTime, NaiveDateTime, Utc};
use serde::{Deserialize, Serialize};

/// Separator placed between the per-loan entries of a borrower's concatenated notes.
pub const NOTE_ENTRY_SEPARATOR: &str = "; ";

/// Separator placed between a loan's note text and its total amount.
pub const NOTE_AMOUNT_SEPARATOR: &str = " -- ";

/// Canonical loan status.
///
/// The loan creation form historically offered `PENDING/APPROVED/PAID`; that vocabulary is not
/// accepted anywhere, every surface uses this enum.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "server", derive(utoipa::ToSchema))]
#[serde(rename_all = "lowercase")]
pub enum LoanStatusDto {
    #[default]
    Active,
    Closed,
    Defaulted,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "server", derive(utoipa::ToSchema))]
#[serde(rename_all = "lowercase")]
pub enum FuturePaymentStatusDto {
    Pending,
    Completed,
    Cancelled,
}

/// Portfolio-wide totals across every loan regardless of status
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "server", derive(utoipa::ToSchema))]
#[serde(rename_all = "camelCase")]
pub struct LoanInsightDto {
    pub total_principal: f64,
    pub total_interest: f64,
    pub amount_paid: f64,
    pub amount_pending: f64,
}

/// One month of the paid/pending principal and interest chart
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "server", derive(utoipa::ToSchema))]
#[serde(rename_all = "camelCase")]
pub struct LoanGraphPointDto {
    /// Three-letter month label, e.g. `Oct`
    pub month: String,
    pub principal_paid: f64,
    pub interest_paid: f64,
    pub principal_pending: f64,
    pub interest_pending: f64,
}

/// Aggregated loans of a single borrower
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "server", derive(utoipa::ToSchema))]
#[serde(rename_all = "camelCase")]
pub struct LoanTableRowDto {
    /// Borrower ID
    pub id: i32,
    pub borrower_name: String,
    /// Earliest loan date across the borrower's loans
    pub loan_date: NaiveDateTime,
    pub total_amount: f64,
    pub paid_amount: f64,
    pub remaining_amount: f64,
    /// Per-loan `"<notes> -- <totalAmount>"` entries joined with `"; "`, see [`split_notes`]
    pub notes: Option<String>,
}

/// A single loan's entry recovered from a borrower's concatenated notes
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct LoanNote {
    pub text: String,
    /// Loan total as written, `None` when the entry carried no amount
    pub amount: Option<String>,
}

impl LoanNote {
    /// Parse the amount as a number
    pub fn amount_value(&self) -> Option<f64> {
        self.amount.as_deref().and_then(|a| a.parse().ok())
    }
}

/// Splits the `notes` column of a [`LoanTableRowDto`] back into its per-loan entries.
///
/// Entries are separated by `;` and each entry is split at the first `--` into note text and
/// amount. Surrounding whitespace is trimmed and empty entries are skipped. The split is lossless
/// for notes that contain neither `;` nor `--`.
pub fn split_notes(notes: &str) -> Vec<LoanNote> {
    notes
        .split(';')
        .map(str::trim)
        .filter(|entry| !entry.is_empty())
        .map(|entry| match entry.split_once("--") {
            Some((text, amount)) => LoanNote {
                text: text.trim().to_string(),
                amount: Some(amount.trim().to_string()),
            },
            None => LoanNote {
                text: entry.to_string(),
                amount: None,
            },
        })
        .collect()
}

/// A recorded EMI payment with the owning loan's borrower name
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "server", derive(utoipa::ToSchema))]
#[serde(rename_all = "camelCase")]
pub struct EmiPaymentRowDto {
    pub id: i32,
    pub loan_id: i32,
    /// Borrower name, `"-"` when the loan has no borrower
    pub borrower_name: String,
    /// Display date formatted as `dd MMM yyyy`
    pub payment_date: String,
    pub principal_amount: f64,
    pub interest_amount: f64,
    pub total_amount: f64,
    pub payment_method: String,
}

/// A scheduled payment with the owning loan's borrower name
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "server", derive(utoipa::ToSchema))]
#[serde(rename_all = "camelCase")]
pub struct FuturePaymentRowDto {
    pub id: i32,
    pub loan_id: i32,
    /// Borrower name, `"-"` when the loan has no borrower
    pub borrower_name: String,
    /// Display date formatted as `dd MMM yyyy`
    pub planned_date: String,
    pub principal_amount: f64,
    pub interest_amount: f64,
    pub total_amount: f64,
    pub status: FuturePaymentStatusDto,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "server", derive(utoipa::ToSchema))]
pub struct BorrowerDto {
    pub id: i32,
    pub name: String,
}

/// Payload for creating a loan
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "server", derive(utoipa::ToSchema))]
#[serde(rename_all = "camelCase")]
pub struct CreateLoanDto {
    pub borrower_id: Option<i32>,
    pub initial_amount: f64,
    pub total_amount: f64,
    pub loan_date: DateTime<Utc>,
    pub due_date: DateTime<Utc>,
    #[serde(default)]
    pub status: LoanStatusDto,
    pub notes: Option<String>,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "server", derive(utoipa::ToSchema))]
#[serde(rename_all = "camelCase")]
pub struct LoanDto {
    pub id: i32,
    pub borrower_id: Option<i32>,
    pub initial_amount: f64,
    pub total_amount: f64,
    /// `totalAmount - initialAmount`
    pub interest_amount: f64,
    pub loan_date: NaiveDateTime,
    pub due_date: NaiveDateTime,
    pub status: LoanStatusDto,
    pub notes: Option<String>,
}
