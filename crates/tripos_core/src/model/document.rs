//! Root trip document and the seed data used on first launch.
//!
//! # Responsibility
//! - Hold the four persisted collections as one atomic unit.
//! - Provide the illustrative seed document returned when nothing is stored.
//!
//! # Invariants
//! - `day_labels` is always present in memory; documents stored without it
//!   are backfilled by the persistence gateway before deserialization.
//! - Documents are replaced as values; mutation functions never edit the
//!   input document.

use crate::model::checklist::{ChecklistCategory, ChecklistItem};
use crate::model::expense::{ExpenseCategory, ExpenseItem};
use crate::model::itinerary::{ItineraryItem, ItineraryKind};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Date-key to free-text day name.
pub type DayLabels = BTreeMap<String, String>;

/// The single persisted aggregate of all trip data.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct Document {
    pub itinerary: Vec<ItineraryItem>,
    /// Newest first by insertion convention.
    pub expenses: Vec<ExpenseItem>,
    pub checklist: Vec<ChecklistItem>,
    #[serde(rename = "dayLabels")]
    pub day_labels: DayLabels,
}

impl Document {
    /// Returns the seed document, stamping the sample expense with now.
    pub fn seed() -> Self {
        Self::seed_at(Utc::now())
    }

    /// Returns the seed document with an explicit sample-expense instant.
    ///
    /// Seed contents: 4 events over 2023-11-15/16, one ¥1500 → NT$315 expense,
    /// three checklist entries (one luggage entry checked) and two day labels.
    pub fn seed_at(now: DateTime<Utc>) -> Self {
        let itinerary = vec![
            ItineraryItem::new(
                "1",
                "2023-11-15",
                "10:00",
                "抵達東京成田",
                "Narita Airport",
                ItineraryKind::Transport,
            ),
            ItineraryItem::new(
                "2",
                "2023-11-15",
                "13:00",
                "Check-in 飯店",
                "Shinjuku Hotel",
                ItineraryKind::Other,
            ),
            ItineraryItem::new(
                "3",
                "2023-11-15",
                "18:00",
                "燒肉晚餐",
                "Rokkasen",
                ItineraryKind::Food,
            ),
            ItineraryItem::new(
                "4",
                "2023-11-16",
                "09:00",
                "迪士尼樂園",
                "Tokyo Disneyland",
                ItineraryKind::Sightseeing,
            ),
        ];

        let expenses = vec![ExpenseItem {
            id: "1".to_string(),
            amount_jpy: 1500.0,
            amount_twd: 315.0,
            note: "便利商店".to_string(),
            category: ExpenseCategory::Food,
            date: now,
        }];

        let checklist = vec![
            checklist_entry("1", "護照", false, ChecklistCategory::Luggage),
            checklist_entry("2", "日幣現金", true, ChecklistCategory::Luggage),
            checklist_entry("3", "東京香蕉", false, ChecklistCategory::Souvenir),
        ];

        let day_labels = DayLabels::from([
            ("2023-11-15".to_string(), "Arrival Day".to_string()),
            ("2023-11-16".to_string(), "Disney Land".to_string()),
        ]);

        Self {
            itinerary,
            expenses,
            checklist,
            day_labels,
        }
    }

    /// Looks up an itinerary item by id.
    pub fn itinerary_item(&self, id: &str) -> Option<&ItineraryItem> {
        self.itinerary.iter().find(|item| item.id == id)
    }

    /// Looks up a checklist item by id.
    pub fn checklist_item(&self, id: &str) -> Option<&ChecklistItem> {
        self.checklist.iter().find(|item| item.id == id)
    }
}

fn checklist_entry(
    id: &str,
    text: &str,
    checked: bool,
    category: ChecklistCategory,
) -> ChecklistItem {
    ChecklistItem {
        id: id.to_string(),
        text: text.to_string(),
        checked,
        category,
    }
}
