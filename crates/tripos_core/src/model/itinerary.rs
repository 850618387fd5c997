//! Itinerary timeline entries.
//!
//! # Invariants
//! - `date` is a `YYYY-MM-DD` date-key and `time` is `HH:MM`; both are
//!   compared as plain strings, so callers must supply zero-padded values.
//! - `kind` is informational only; no logic branches on it.

use serde::{Deserialize, Serialize};

/// Default time for events added to an existing day.
pub const DEFAULT_EVENT_TIME: &str = "12:00";
/// Placeholder title for newly added events.
pub const DEFAULT_EVENT_TITLE: &str = "New Activity";
/// Placeholder location for newly added events.
pub const DEFAULT_EVENT_LOCATION: &str = "TBD";
/// Time of the opening event created together with a new day.
pub const DAY_START_TIME: &str = "09:00";
/// Title of the opening event created together with a new day.
pub const DAY_START_TITLE: &str = "Day Start";

/// Category tag of an itinerary event.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ItineraryKind {
    Food,
    Sightseeing,
    Transport,
    Shopping,
    Other,
}

/// One scheduled event on the trip timeline.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ItineraryItem {
    pub id: String,
    /// Date-key (`YYYY-MM-DD`) grouping this event into a day.
    pub date: String,
    /// Free-text start time, conventionally `HH:MM` 24-hour.
    pub time: String,
    pub title: String,
    pub location: String,
    /// Map or booking link. Not validated.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub link: Option<String>,
    /// Serialized as `type` to match the stored layout.
    #[serde(rename = "type")]
    pub kind: ItineraryKind,
}

impl ItineraryItem {
    /// Builds an item with the given identity and schedule, no link.
    pub fn new(
        id: impl Into<String>,
        date: impl Into<String>,
        time: impl Into<String>,
        title: impl Into<String>,
        location: impl Into<String>,
        kind: ItineraryKind,
    ) -> Self {
        Self {
            id: id.into(),
            date: date.into(),
            time: time.into(),
            title: title.into(),
            location: location.into(),
            link: None,
            kind,
        }
    }
}

/// Editable text fields of an itinerary item.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ItineraryField {
    Date,
    Time,
    Title,
    Location,
    /// An empty value clears the link.
    Link,
}

impl ItineraryField {
    /// Writes `value` into the field this variant names.
    pub(crate) fn assign(self, item: &mut ItineraryItem, value: &str) {
        match self {
            Self::Date => item.date = value.to_string(),
            Self::Time => item.time = value.to_string(),
            Self::Title => item.title = value.to_string(),
            Self::Location => item.location = value.to_string(),
            Self::Link => {
                item.link = if value.is_empty() {
                    None
                } else {
                    Some(value.to_string())
                }
            }
        }
    }
}
