//! Pure document transitions.
//!
//! # Responsibility
//! - Derive a new `Document` from a previous one and one user intent.
//! - Provide `TripAction` as the single dispatch vocabulary for callers.
//!
//! # Invariants
//! - Inputs are borrowed and never modified; every function returns a new
//!   document value.
//! - An id that matches nothing is a silent no-op, never an error.
//! - Days exist only through itinerary dates; `add_day` is the only way to
//!   introduce a date that is not already present.

use crate::id::new_id;
use crate::model::checklist::{ChecklistCategory, ChecklistItem};
use crate::model::document::Document;
use crate::model::expense::{ExpenseCategory, ExpenseItem, QUICK_ENTRY_NOTE};
use crate::model::format::{parse_date_key, to_date_key};
use crate::model::itinerary::{
    ItineraryField, ItineraryItem, ItineraryKind, DAY_START_TIME, DAY_START_TITLE,
    DEFAULT_EVENT_LOCATION, DEFAULT_EVENT_TIME, DEFAULT_EVENT_TITLE,
};
use chrono::{DateTime, Days, NaiveDate, Utc};

/// One user intent against the trip document.
#[derive(Debug, Clone, PartialEq)]
pub enum TripAction {
    AddItineraryItem {
        date: String,
    },
    AddDay,
    DeleteDay {
        date: String,
    },
    UpdateDayLabel {
        date: String,
        label: String,
    },
    UpdateDate {
        old_date: String,
        new_date: String,
    },
    DeleteItineraryItem {
        id: String,
    },
    UpdateItineraryItem {
        id: String,
        field: ItineraryField,
        value: String,
    },
    AddExpense {
        amount_jpy: f64,
        amount_twd: f64,
    },
    DeleteExpense {
        id: String,
    },
    ToggleChecklistItem {
        id: String,
    },
    AddChecklistItem {
        text: String,
        category: ChecklistCategory,
    },
    DeleteChecklistItem {
        id: String,
    },
}

impl TripAction {
    /// Stable action name used in log events.
    pub fn name(&self) -> &'static str {
        match self {
            Self::AddItineraryItem { .. } => "add_itinerary_item",
            Self::AddDay => "add_day",
            Self::DeleteDay { .. } => "delete_day",
            Self::UpdateDayLabel { .. } => "update_day_label",
            Self::UpdateDate { .. } => "update_date",
            Self::DeleteItineraryItem { .. } => "delete_itinerary_item",
            Self::UpdateItineraryItem { .. } => "update_itinerary_item",
            Self::AddExpense { .. } => "add_expense",
            Self::DeleteExpense { .. } => "delete_expense",
            Self::ToggleChecklistItem { .. } => "toggle_checklist_item",
            Self::AddChecklistItem { .. } => "add_checklist_item",
            Self::DeleteChecklistItem { .. } => "delete_checklist_item",
        }
    }
}

/// Applies one action, reading the wall clock where the action needs it.
pub fn apply(doc: &Document, action: &TripAction) -> Document {
    match action {
        TripAction::AddItineraryItem { date } => add_itinerary_item(doc, date),
        TripAction::AddDay => add_day(doc),
        TripAction::DeleteDay { date } => delete_day(doc, date),
        TripAction::UpdateDayLabel { date, label } => update_day_label(doc, date, label),
        TripAction::UpdateDate { old_date, new_date } => update_date(doc, old_date, new_date),
        TripAction::DeleteItineraryItem { id } => delete_itinerary_item(doc, id),
        TripAction::UpdateItineraryItem { id, field, value } => {
            update_itinerary_item(doc, id, *field, value)
        }
        TripAction::AddExpense {
            amount_jpy,
            amount_twd,
        } => add_expense(doc, *amount_jpy, *amount_twd),
        TripAction::DeleteExpense { id } => delete_expense(doc, id),
        TripAction::ToggleChecklistItem { id } => toggle_checklist_item(doc, id),
        TripAction::AddChecklistItem { text, category } => {
            add_checklist_item(doc, text, *category)
        }
        TripAction::DeleteChecklistItem { id } => delete_checklist_item(doc, id),
    }
}

/// Appends a placeholder event on `date`.
pub fn add_itinerary_item(doc: &Document, date: &str) -> Document {
    let mut next = doc.clone();
    next.itinerary.push(ItineraryItem::new(
        new_id(),
        date,
        DEFAULT_EVENT_TIME,
        DEFAULT_EVENT_TITLE,
        DEFAULT_EVENT_LOCATION,
        ItineraryKind::Other,
    ));
    next
}

/// Opens a new day after the latest itinerary date, using today's UTC date
/// when the itinerary is empty.
pub fn add_day(doc: &Document) -> Document {
    add_day_from(doc, Utc::now().date_naive())
}

/// `add_day` with an explicit fallback date.
///
/// The latest date is the lexical maximum of the stored keys. If that key is
/// not a parseable date-key, `today` is used as the base instead.
pub fn add_day_from(doc: &Document, today: NaiveDate) -> Document {
    let base = doc
        .itinerary
        .iter()
        .map(|item| item.date.as_str())
        .max()
        .and_then(parse_date_key)
        .unwrap_or(today);
    let next_day = base.checked_add_days(Days::new(1)).unwrap_or(base);

    let mut next = doc.clone();
    next.itinerary.push(ItineraryItem::new(
        new_id(),
        to_date_key(next_day),
        DAY_START_TIME,
        DAY_START_TITLE,
        "",
        ItineraryKind::Other,
    ));
    next
}

/// Removes every event on `date` and that date's label.
pub fn delete_day(doc: &Document, date: &str) -> Document {
    let mut next = doc.clone();
    next.itinerary.retain(|item| item.date != date);
    next.day_labels.remove(date);
    next
}

/// Sets the label of `date`. An empty label still creates the key.
pub fn update_day_label(doc: &Document, date: &str, label: &str) -> Document {
    let mut next = doc.clone();
    next.day_labels.insert(date.to_string(), label.to_string());
    next
}

/// Moves a whole day to `new_date`, merging into any existing day there.
///
/// A label on `old_date` replaces any label already on `new_date`.
pub fn update_date(doc: &Document, old_date: &str, new_date: &str) -> Document {
    if old_date == new_date {
        return doc.clone();
    }

    let mut next = doc.clone();
    for item in next
        .itinerary
        .iter_mut()
        .filter(|item| item.date == old_date)
    {
        item.date = new_date.to_string();
    }
    if let Some(label) = next.day_labels.remove(old_date) {
        next.day_labels.insert(new_date.to_string(), label);
    }
    next
}

pub fn delete_itinerary_item(doc: &Document, id: &str) -> Document {
    let mut next = doc.clone();
    next.itinerary.retain(|item| item.id != id);
    next
}

/// Overwrites one text field of the event with `id`.
pub fn update_itinerary_item(
    doc: &Document,
    id: &str,
    field: ItineraryField,
    value: &str,
) -> Document {
    let mut next = doc.clone();
    if let Some(item) = next.itinerary.iter_mut().find(|item| item.id == id) {
        field.assign(item, value);
    }
    next
}

/// Records a calculator entry as the newest expense, stamped with now.
pub fn add_expense(doc: &Document, amount_jpy: f64, amount_twd: f64) -> Document {
    add_expense_at(doc, amount_jpy, amount_twd, Utc::now())
}

/// `add_expense` with an explicit creation instant.
pub fn add_expense_at(
    doc: &Document,
    amount_jpy: f64,
    amount_twd: f64,
    now: DateTime<Utc>,
) -> Document {
    let mut next = doc.clone();
    next.expenses.insert(
        0,
        ExpenseItem {
            id: new_id(),
            amount_jpy,
            amount_twd,
            note: QUICK_ENTRY_NOTE.to_string(),
            category: ExpenseCategory::Shopping,
            date: now,
        },
    );
    next
}

pub fn delete_expense(doc: &Document, id: &str) -> Document {
    let mut next = doc.clone();
    next.expenses.retain(|expense| expense.id != id);
    next
}

pub fn toggle_checklist_item(doc: &Document, id: &str) -> Document {
    let mut next = doc.clone();
    if let Some(item) = next.checklist.iter_mut().find(|item| item.id == id) {
        item.checked = !item.checked;
    }
    next
}

/// Appends an unchecked entry to the given checklist.
pub fn add_checklist_item(doc: &Document, text: &str, category: ChecklistCategory) -> Document {
    let mut next = doc.clone();
    next.checklist.push(ChecklistItem {
        id: new_id(),
        text: text.to_string(),
        checked: false,
        category,
    });
    next
}

pub fn delete_checklist_item(doc: &Document, id: &str) -> Document {
    let mut next = doc.clone();
    next.checklist.retain(|item| item.id != id);
    next
}
