//! Read-only projections over the trip document.
//!
//! # Responsibility
//! - Compute view-ready values (day list, timeline of one day, totals,
//!   checklist progress) without touching storage.
//!
//! # Invariants
//! - Date and time ordering is lexical; see `model::format` for the input
//!   contract that makes it chronological.
//! - Nothing here allocates ids or reads the clock, except `today_key` and
//!   `unique_dates_or_today`.

use crate::model::checklist::{ChecklistCategory, ChecklistItem};
use crate::model::document::Document;
use crate::model::expense::{ExpenseCategory, ExpenseItem};
use crate::model::format::{parse_date_key, to_date_key};
use crate::model::itinerary::ItineraryItem;
use chrono::Utc;
use std::collections::{BTreeMap, BTreeSet};

/// Default JPY → TWD rate used by the calculator.
pub const DEFAULT_JPY_TO_TWD_RATE: f64 = 0.21;

/// Caption shown on the home screen when no itinerary exists.
pub const EMPTY_TRIP_CAPTION: &str = "PLAN YOUR TRIP";

/// Distinct itinerary dates in ascending order.
pub fn unique_sorted_dates(itinerary: &[ItineraryItem]) -> Vec<String> {
    itinerary
        .iter()
        .map(|item| item.date.as_str())
        .collect::<BTreeSet<_>>()
        .into_iter()
        .map(str::to_string)
        .collect()
}

/// Day selector contents: the distinct dates, or today alone when empty.
pub fn unique_dates_or_today(itinerary: &[ItineraryItem]) -> Vec<String> {
    let dates = unique_sorted_dates(itinerary);
    if dates.is_empty() {
        return vec![today_key()];
    }
    dates
}

/// Events on `date`, ordered by their `time` text.
pub fn items_for_date<'a>(itinerary: &'a [ItineraryItem], date: &str) -> Vec<&'a ItineraryItem> {
    let mut items: Vec<&ItineraryItem> = itinerary
        .iter()
        .filter(|item| item.date == date)
        .collect();
    items.sort_by(|a, b| a.time.cmp(&b.time));
    items
}

/// First and last itinerary dates, or `None` for an empty itinerary.
pub fn date_range_summary(itinerary: &[ItineraryItem]) -> Option<(String, String)> {
    let first = itinerary.iter().map(|item| item.date.as_str()).min()?;
    let last = itinerary.iter().map(|item| item.date.as_str()).max()?;
    Some((first.to_string(), last.to_string()))
}

/// Home-screen caption for the trip's date span, e.g. `NOV 15 - NOV 16`.
pub fn date_range_caption(itinerary: &[ItineraryItem]) -> String {
    match date_range_summary(itinerary) {
        None => EMPTY_TRIP_CAPTION.to_string(),
        Some((first, last)) if first == last => short_date(&first),
        Some((first, last)) => format!("{} - {}", short_date(&first), short_date(&last)),
    }
}

fn short_date(date_key: &str) -> String {
    match parse_date_key(date_key) {
        Some(date) => date.format("%b %-d").to_string().to_uppercase(),
        None => date_key.to_string(),
    }
}

/// Sum of recorded TWD amounts.
pub fn total_expense_twd(expenses: &[ExpenseItem]) -> f64 {
    expenses.iter().map(|expense| expense.amount_twd).sum()
}

/// TWD totals per category; categories without expenses are absent.
pub fn expense_totals_by_category(expenses: &[ExpenseItem]) -> BTreeMap<ExpenseCategory, f64> {
    let mut totals = BTreeMap::new();
    for expense in expenses {
        *totals.entry(expense.category).or_insert(0.0) += expense.amount_twd;
    }
    totals
}

/// Entries of one checklist view, in stored order.
pub fn checklist_items(
    checklist: &[ChecklistItem],
    category: ChecklistCategory,
) -> Vec<&ChecklistItem> {
    checklist
        .iter()
        .filter(|item| item.category == category)
        .collect()
}

/// `(checked, total)` for one checklist view.
pub fn checklist_counts(
    checklist: &[ChecklistItem],
    category: ChecklistCategory,
) -> (usize, usize) {
    checklist_items(checklist, category)
        .into_iter()
        .fold((0, 0), |(checked, total), item| {
            (checked + usize::from(item.checked), total + 1)
        })
}

/// Label of `date`, empty when none is set.
pub fn day_label<'a>(doc: &'a Document, date: &str) -> &'a str {
    doc.day_labels.get(date).map_or("", String::as_str)
}

/// Converts JPY to TWD, rounding half away from zero.
pub fn convert(jpy_amount: f64, rate: f64) -> f64 {
    (jpy_amount * rate).round()
}

/// Today's date-key in UTC.
pub fn today_key() -> String {
    to_date_key(Utc::now().date_naive())
}

#[cfg(test)]
mod tests {
    use super::{convert, short_date};

    #[test]
    fn convert_rounds_half_away_from_zero() {
        assert_eq!(convert(1500.0, 0.21), 315.0);
        assert_eq!(convert(10.0, 0.25), 3.0);
        assert_eq!(convert(2.0, 0.25), 1.0);
        assert_eq!(convert(0.0, 0.21), 0.0);
    }

    #[test]
    fn short_date_falls_back_to_raw_key() {
        assert_eq!(short_date("2023-11-05"), "NOV 5");
        assert_eq!(short_date("soon"), "soon");
    }
}
