//! taskdeck - A terminal-based personal task manager
//!
//! This library provides a terminal interface for managing a personal task
//! list: four-level priorities with colored badges, free-text search, and a
//! date filter bar (all / today / this week / custom range) built with
//! Ratatui.
//!
//! # Modules
//!
//! The library is organized into several key modules:
//!
//! * [`config`] - Application configuration management
//! * [`filter`] - Filter state and the date predicates behind it
//! * [`model`] - Tasks, categories, users, and priority levels
//! * [`ui`] - Terminal user interface components
//! * [`utils`] - Utility functions and helpers

/// Configuration module for managing application settings
pub mod config;

/// Application constants and default values
pub mod constants;

/// Filter state machine and date-range predicates
pub mod filter;

/// File logging setup
pub mod logger;

/// Data model for tasks, categories, users, and priorities
pub mod model;

/// Terminal user interface components and rendering
pub mod ui;

/// Utility functions for date/time handling and other helpers
pub mod utils;

// Re-export the most used types for convenient access
pub use filter::{DateFilter, DateRange, FilterContext};
pub use model::{Category, PriorityLevel, Task, User};
