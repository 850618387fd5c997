//! Luggage and souvenir checklist entries.

use serde::{Deserialize, Serialize};

/// Which checklist view an entry belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ChecklistCategory {
    Luggage,
    Souvenir,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChecklistItem {
    pub id: String,
    pub text: String,
    pub checked: bool,
    pub category: ChecklistCategory,
}
