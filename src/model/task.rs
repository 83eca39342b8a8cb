use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::category::Category;
use super::priority::PriorityLevel;

/// A task in the application
///
/// The filter logic only depends on `date`; everything else is carried for
/// display and for round-tripping the user data file.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Task {
    pub id: Uuid,
    pub done: bool,
    pub pinned: bool,
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub emoji: Option<String>,
    /// Hex color for the task card
    pub color: String,
    pub date: NaiveDateTime,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub deadline: Option<NaiveDateTime>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub category: Option<Vec<Category>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub priority: Option<PriorityLevel>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub last_save: Option<NaiveDateTime>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub shared_by: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub position: Option<u32>,
}

impl Task {
    /// Create a task dated `date` with defaults for everything else
    pub fn new(name: impl Into<String>, date: NaiveDateTime) -> Self {
        Self {
            id: Uuid::new_v4(),
            done: false,
            pinned: false,
            name: name.into(),
            description: None,
            emoji: None,
            color: "#b624ff".to_string(),
            date,
            deadline: None,
            category: None,
            priority: None,
            last_save: None,
            shared_by: None,
            position: None,
        }
    }

    /// Case-insensitive substring match against name and description
    #[must_use]
    pub fn matches_search(&self, query: &str) -> bool {
        if query.is_empty() {
            return true;
        }
        let query = query.to_lowercase();
        if self.name.to_lowercase().contains(&query) {
            return true;
        }
        self.description
            .as_deref()
            .is_some_and(|d| d.to_lowercase().contains(&query))
    }
}
