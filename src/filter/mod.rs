//! Filter state and date-range predicates
//!
//! [`FilterContext`] holds the free-text search string, the coarse date
//! filter mode, and the explicit custom date range. It is plain owned
//! state: the UI constructs one in [`crate::ui::app::App`] and mutates it
//! only through the action methods here, so every consumer sees a
//! consistent view without any locking.
//!
//! The predicates in [`predicates`] are pure functions; the task list
//! applies them to decide which tasks stay visible.

pub mod predicates;

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

use crate::constants::{
    FILTER_LABEL_ALL, FILTER_LABEL_CUSTOM, FILTER_LABEL_THIS_WEEK, FILTER_LABEL_TODAY,
};

/// Coarse mode selecting which date-based view of tasks is active
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum DateFilter {
    #[default]
    All,
    Today,
    ThisWeek,
    Custom,
}

/// All modes in menu order
pub const DATE_FILTERS: [DateFilter; 4] = [
    DateFilter::All,
    DateFilter::Today,
    DateFilter::ThisWeek,
    DateFilter::Custom,
];

impl DateFilter {
    /// Menu label for this mode
    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            DateFilter::All => FILTER_LABEL_ALL,
            DateFilter::Today => FILTER_LABEL_TODAY,
            DateFilter::ThisWeek => FILTER_LABEL_THIS_WEEK,
            DateFilter::Custom => FILTER_LABEL_CUSTOM,
        }
    }
}

impl fmt::Display for DateFilter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Error returned when parsing an unknown date filter name
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown date filter: {0}")]
pub struct ParseDateFilterError(pub String);

impl FromStr for DateFilter {
    type Err = ParseDateFilterError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "all" => Ok(DateFilter::All),
            "today" => Ok(DateFilter::Today),
            "thisWeek" => Ok(DateFilter::ThisWeek),
            "custom" => Ok(DateFilter::Custom),
            other => Err(ParseDateFilterError(other.to_string())),
        }
    }
}

/// Explicit from/to bound pair used by the custom filter mode
///
/// Both bounds are `None` when inactive. The other modes derive their
/// bounds from the clock at evaluation time and ignore this entirely.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct DateRange {
    pub from: Option<NaiveDateTime>,
    pub to: Option<NaiveDateTime>,
}

impl DateRange {
    pub fn new(from: Option<NaiveDateTime>, to: Option<NaiveDateTime>) -> Self {
        Self { from, to }
    }

    /// True when both bounds are set
    #[must_use]
    pub fn is_complete(&self) -> bool {
        self.from.is_some() && self.to.is_some()
    }

    /// True when neither bound is set
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.from.is_none() && self.to.is_none()
    }
}

/// In-memory filter state for the current session
///
/// Created with defaults at startup and discarded at exit; mutated only
/// through the methods below.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct FilterContext {
    search: String,
    date_filter: DateFilter,
    date_range: DateRange,
}

impl FilterContext {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn search(&self) -> &str {
        &self.search
    }

    pub fn date_filter(&self) -> DateFilter {
        self.date_filter
    }

    pub fn date_range(&self) -> DateRange {
        self.date_range
    }

    pub fn set_search(&mut self, search: impl Into<String>) {
        self.search = search.into();
    }

    /// Switch the date filter mode directly
    ///
    /// Does not touch the stored range; entering `Custom` without a
    /// populated range leaves the date filter inactive until one is set.
    pub fn set_date_filter(&mut self, mode: DateFilter) {
        self.date_filter = mode;
    }

    pub fn set_date_range(&mut self, range: DateRange) {
        self.date_range = range;
    }

    /// Store an explicit range, switching to `Custom` once both bounds
    /// are present
    pub fn set_custom_date_range(&mut self, from: Option<NaiveDateTime>, to: Option<NaiveDateTime>) {
        self.date_range = DateRange { from, to };
        if from.is_some() && to.is_some() {
            self.date_filter = DateFilter::Custom;
        }
    }

    /// Reset the date filter to `All` and drop the stored range
    pub fn clear_date_filter(&mut self) {
        self.date_filter = DateFilter::All;
        self.date_range = DateRange::default();
    }

    /// Reset search, mode, and range to their defaults in one call
    pub fn clear_all_filters(&mut self) {
        *self = Self::default();
    }

    /// True iff any filter deviates from its default
    #[must_use]
    pub fn is_filter_active(&self) -> bool {
        !self.search.is_empty()
            || self.date_filter != DateFilter::All
            || self.date_range.from.is_some()
            || self.date_range.to.is_some()
    }

    /// Apply the current date filter mode to a task date
    ///
    /// `Custom` with an incomplete range means "filter inactive", not
    /// "match nothing".
    #[must_use]
    pub fn date_matches(&self, date: NaiveDateTime) -> bool {
        match self.date_filter {
            DateFilter::All => true,
            DateFilter::Today => predicates::is_today(date),
            DateFilter::ThisWeek => predicates::is_this_week(date),
            DateFilter::Custom => {
                if self.date_range.is_complete() {
                    predicates::is_in_date_range(date, &self.date_range)
                } else {
                    true
                }
            }
        }
    }
}
