//! Constants used throughout the application
//!
//! This module centralizes magic strings, UI text, and other constant values
//! to improve maintainability and consistency.

// Application identity
pub const APP_NAME: &str = "taskdeck";
pub const CONFIG_FILE_NAME: &str = "taskdeck.toml";
pub const USER_FILE_NAME: &str = "user.json";
pub const LOG_FILE_NAME: &str = "taskdeck.log";

// Priority colors (hex, shared between the model and badge rendering)
pub const PRIORITY_COLOR_CRITICAL: &str = "#ff3131";
pub const PRIORITY_COLOR_HIGH: &str = "#ff9318";
pub const PRIORITY_COLOR_MEDIUM: &str = "#b624ff";
pub const PRIORITY_COLOR_LOW: &str = "#22c55e";

// Filter bar labels
pub const FILTER_LABEL_ALL: &str = "All Tasks";
pub const FILTER_LABEL_TODAY: &str = "Today";
pub const FILTER_LABEL_THIS_WEEK: &str = "This Week";
pub const FILTER_LABEL_CUSTOM: &str = "Custom Range";

// Priority selector
pub const PRIORITY_SELECT_NONE: &str = "No Priority";
pub const PRIORITY_SELECT_TITLE: &str = "Priority";

// Status messages
pub const SUCCESS_TASK_COMPLETED: &str = "✅ Task completed";
pub const SUCCESS_TASK_REOPENED: &str = "↩️ Task reopened";
pub const SUCCESS_PRIORITY_UPDATED: &str = "✅ Task priority updated";
pub const SUCCESS_PRIORITY_CLEARED: &str = "✅ Task priority cleared";
pub const SUCCESS_FILTERS_CLEARED: &str = "✅ All filters cleared";
pub const SUCCESS_USER_SAVED: &str = "✅ Tasks saved";

// Error messages
pub const ERROR_INVALID_DATE_FORMAT: &str = "❌ Dates must be in YYYY-MM-DD format";
pub const ERROR_RANGE_INCOMPLETE: &str = "❌ Both start and end dates are required";
pub const ERROR_USER_SAVE_FAILED: &str = "❌ Failed to save tasks";

// Informational messages
pub const CONFIG_GENERATED: &str = "Generated default configuration";

// Layout
pub const FILTER_BAR_HEIGHT: u16 = 3;
pub const STATUS_BAR_HEIGHT: u16 = 1;
