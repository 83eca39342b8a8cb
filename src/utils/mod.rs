//! Utility modules for the taskdeck application.
//!
//! Cross-cutting helpers shared by the filter logic and the UI:
//!
//! - [`datetime`] - Date parsing, start/end-of-day bounds, and human-readable formatting
//! - [`color`] - Hex color string conversion for terminal rendering

pub mod color;
pub mod datetime;
