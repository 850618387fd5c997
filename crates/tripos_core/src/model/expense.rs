//! Expense ledger entries.
//!
//! # Invariants
//! - `amount_twd` is the conversion recorded at entry time; it is never
//!   recomputed from `amount_jpy`.
//! - `date` is set at creation and never edited.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Note attached to expenses recorded through the calculator.
pub const QUICK_ENTRY_NOTE: &str = "快速記帳";

/// Spending category of an expense.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ExpenseCategory {
    Food,
    Shopping,
    Transport,
    Other,
}

/// One recorded expense, in both currencies.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ExpenseItem {
    pub id: String,
    #[serde(rename = "amountJPY")]
    pub amount_jpy: f64,
    #[serde(rename = "amountTWD")]
    pub amount_twd: f64,
    pub note: String,
    pub category: ExpenseCategory,
    /// Creation instant, stored as RFC 3339.
    pub date: DateTime<Utc>,
}
