//! Task priority levels and their fixed display configuration

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

use crate::constants::{
    PRIORITY_COLOR_CRITICAL, PRIORITY_COLOR_HIGH, PRIORITY_COLOR_LOW, PRIORITY_COLOR_MEDIUM,
};

/// Four-level urgency classification attached to a task
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PriorityLevel {
    Critical,
    High,
    Medium,
    Low,
}

/// Fixed display configuration for one priority level
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PriorityConfig {
    pub level: PriorityLevel,
    /// Hex color used for the badge dot and label
    pub color: &'static str,
    pub label: &'static str,
    /// One-line description shown in the priority selector
    pub description: &'static str,
}

/// All levels in selector order, highest urgency first
pub const PRIORITY_LEVELS: [PriorityLevel; 4] = [
    PriorityLevel::Critical,
    PriorityLevel::High,
    PriorityLevel::Medium,
    PriorityLevel::Low,
];

impl PriorityLevel {
    /// Look up the fixed display configuration for this level
    #[must_use]
    pub fn config(self) -> PriorityConfig {
        match self {
            PriorityLevel::Critical => PriorityConfig {
                level: self,
                color: PRIORITY_COLOR_CRITICAL,
                label: "Critical",
                description: "Urgent and important",
            },
            PriorityLevel::High => PriorityConfig {
                level: self,
                color: PRIORITY_COLOR_HIGH,
                label: "High",
                description: "Important but not urgent",
            },
            PriorityLevel::Medium => PriorityConfig {
                level: self,
                color: PRIORITY_COLOR_MEDIUM,
                label: "Medium",
                description: "Moderate importance",
            },
            PriorityLevel::Low => PriorityConfig {
                level: self,
                color: PRIORITY_COLOR_LOW,
                label: "Low",
                description: "Low importance",
            },
        }
    }
}

impl fmt::Display for PriorityLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.config().label)
    }
}

/// Error returned when parsing an unknown priority level name
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown priority level: {0}")]
pub struct ParsePriorityError(pub String);

impl FromStr for PriorityLevel {
    type Err = ParsePriorityError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "Critical" => Ok(PriorityLevel::Critical),
            "High" => Ok(PriorityLevel::High),
            "Medium" => Ok(PriorityLevel::Medium),
            "Low" => Ok(PriorityLevel::Low),
            other => Err(ParsePriorityError(other.to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn config_is_closed_over_all_levels() {
        for level in PRIORITY_LEVELS {
            let config = level.config();
            assert_eq!(config.level, level);
            assert!(config.color.starts_with('#'));
            assert!(!config.description.is_empty());
        }
    }

    #[test]
    fn display_round_trips_through_from_str() {
        for level in PRIORITY_LEVELS {
            assert_eq!(level.to_string().parse::<PriorityLevel>(), Ok(level));
        }
        assert!("Urgent".parse::<PriorityLevel>().is_err());
    }
}
