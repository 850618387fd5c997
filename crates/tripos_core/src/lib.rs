//! Core domain logic for TRIP.OS.
//! This crate is the single source of truth for the trip document, its
//! state transitions and its on-device persistence.

pub mod calc;
pub mod config;
pub mod db;
pub mod id;
pub mod logging;
pub mod model;
pub mod repo;
pub mod service;

pub use calc::{Calculator, CalculatorError, MAX_DISPLAY_DIGITS};
pub use config::CoreConfig;
pub use id::new_id;
pub use logging::{default_log_level, init_logging, logging_status, LoggingError};
pub use model::checklist::{ChecklistCategory, ChecklistItem};
pub use model::document::{DayLabels, Document};
pub use model::expense::{ExpenseCategory, ExpenseItem};
pub use model::format::{is_clock_time, is_date_key};
pub use model::itinerary::{ItineraryField, ItineraryItem, ItineraryKind};
pub use repo::slot_repo::{RepoError, RepoResult, SlotStore, SqliteSlotStore};
pub use service::mutation::{
    add_checklist_item, add_day, add_day_from, add_expense, add_expense_at, add_itinerary_item,
    apply, delete_checklist_item, delete_day, delete_expense, delete_itinerary_item,
    toggle_checklist_item, update_date, update_day_label, update_itinerary_item, TripAction,
};
pub use service::persistence::{
    GatewayError, LoadSource, LoadedDocument, PersistenceGateway, STORAGE_KEY,
};
pub use service::query::{
    checklist_counts, checklist_items, convert, date_range_caption, date_range_summary,
    day_label, expense_totals_by_category, items_for_date, today_key, total_expense_twd,
    unique_dates_or_today, unique_sorted_dates, DEFAULT_JPY_TO_TWD_RATE,
};
pub use service::session::TripSession;

/// Minimal health-check API for early integration.
pub fn ping() -> &'static str {
    "pong"
}

/// Returns the core crate version.
pub fn core_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}
