//! Application state for the TUI
//!
//! `App` owns the loaded user data and the filter context; every UI event
//! mutates state synchronously through the methods here before the next
//! event is processed.

use uuid::Uuid;

use crate::config::Config;
use crate::constants::{
    ERROR_INVALID_DATE_FORMAT, ERROR_RANGE_INCOMPLETE, SUCCESS_FILTERS_CLEARED,
    SUCCESS_PRIORITY_CLEARED, SUCCESS_PRIORITY_UPDATED, SUCCESS_TASK_COMPLETED,
    SUCCESS_TASK_REOPENED,
};
use crate::filter::{DateFilter, FilterContext, DATE_FILTERS};
use crate::model::{PriorityLevel, Task, User, PRIORITY_LEVELS};
use crate::utils::datetime;

/// Which control currently owns keyboard input
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum InputMode {
    #[default]
    Normal,
    /// Typing into the search field; filtering applies live
    Search,
    /// Date filter mode menu is open; holds the highlighted row
    FilterMenu(usize),
    /// Custom range editor is open
    CustomRange {
        start: String,
        end: String,
        /// False while the start field has focus
        editing_end: bool,
    },
    /// Priority selector is open; row 0 is "No Priority"
    PrioritySelect(usize),
}

/// Main application state
pub struct App {
    pub config: Config,
    pub user: User,
    pub filter: FilterContext,
    pub input_mode: InputMode,
    /// Index into the currently visible (filtered) task list
    pub selected_index: usize,
    pub status_message: Option<String>,
    pub should_quit: bool,
}

impl App {
    pub fn new(config: Config, user: User) -> Self {
        let mut filter = FilterContext::new();
        filter.set_date_filter(config.default_filter());
        Self {
            config,
            user,
            filter,
            input_mode: InputMode::default(),
            selected_index: 0,
            status_message: None,
            should_quit: false,
        }
    }

    /// Tasks passing the current search and date filters
    ///
    /// Pinned tasks sort first; within each group the stored order is kept.
    pub fn visible_tasks(&self) -> Vec<&Task> {
        let mut tasks: Vec<&Task> = self
            .user
            .tasks
            .iter()
            .filter(|t| t.matches_search(self.filter.search()) && self.filter.date_matches(t.date))
            .collect();
        tasks.sort_by_key(|t| !t.pinned);
        tasks
    }

    /// Id of the task under the cursor, if any
    pub fn selected_task_id(&self) -> Option<Uuid> {
        self.visible_tasks().get(self.selected_index).map(|t| t.id)
    }

    pub fn select_next(&mut self) {
        let count = self.visible_tasks().len();
        if count > 0 {
            self.selected_index = (self.selected_index + 1) % count;
        }
    }

    pub fn select_previous(&mut self) {
        let count = self.visible_tasks().len();
        if count > 0 {
            self.selected_index = self.selected_index.checked_sub(1).unwrap_or(count - 1);
        }
    }

    /// Keep the cursor inside the visible list after a filter change
    pub fn clamp_selection(&mut self) {
        let count = self.visible_tasks().len();
        if count == 0 {
            self.selected_index = 0;
        } else if self.selected_index >= count {
            self.selected_index = count - 1;
        }
    }

    pub fn toggle_selected_done(&mut self) {
        let Some(id) = self.selected_task_id() else { return };
        if let Some(task) = self.user.tasks.iter_mut().find(|t| t.id == id) {
            task.done = !task.done;
            self.status_message = Some(
                if task.done {
                    SUCCESS_TASK_COMPLETED
                } else {
                    SUCCESS_TASK_REOPENED
                }
                .to_string(),
            );
        }
    }

    /// Apply a selector choice to the task under the cursor
    pub fn set_selected_priority(&mut self, priority: Option<PriorityLevel>) {
        let Some(id) = self.selected_task_id() else { return };
        if let Some(task) = self.user.tasks.iter_mut().find(|t| t.id == id) {
            task.priority = priority;
            self.status_message = Some(
                if priority.is_some() {
                    SUCCESS_PRIORITY_UPDATED
                } else {
                    SUCCESS_PRIORITY_CLEARED
                }
                .to_string(),
            );
        }
    }

    /// Menu selection → filter mode transition
    ///
    /// Picking `Custom` opens the range editor instead of filtering right
    /// away; the mode still switches immediately, which leaves the date
    /// filter inactive until a complete range is applied.
    pub fn apply_filter_menu_choice(&mut self, index: usize) {
        let Some(&mode) = DATE_FILTERS.get(index) else { return };
        self.filter.set_date_filter(mode);
        if mode == DateFilter::Custom {
            self.input_mode = InputMode::CustomRange {
                start: String::new(),
                end: String::new(),
                editing_end: false,
            };
        } else {
            self.input_mode = InputMode::Normal;
        }
        self.clamp_selection();
    }

    /// Parse and apply the custom range editor's two fields
    ///
    /// Returns to normal mode on success; on bad input the editor stays
    /// open with a status message.
    pub fn submit_custom_range(&mut self, start: &str, end: &str) {
        if start.is_empty() || end.is_empty() {
            self.status_message = Some(ERROR_RANGE_INCOMPLETE.to_string());
            return;
        }
        match (
            datetime::parse_date_start_of_day(start),
            datetime::parse_date_start_of_day(end),
        ) {
            (Ok(from), Ok(to)) => {
                self.filter.set_custom_date_range(Some(from), Some(to));
                self.input_mode = InputMode::Normal;
                self.clamp_selection();
            }
            _ => {
                self.status_message = Some(ERROR_INVALID_DATE_FORMAT.to_string());
            }
        }
    }

    /// Drop the custom range and revert to showing all tasks
    pub fn clear_date_filter(&mut self) {
        self.filter.clear_date_filter();
        self.input_mode = InputMode::Normal;
        self.clamp_selection();
    }

    pub fn clear_all_filters(&mut self) {
        self.filter.clear_all_filters();
        self.status_message = Some(SUCCESS_FILTERS_CLEARED.to_string());
        self.clamp_selection();
    }

    /// Highlighted row count for the priority selector (levels + clear row)
    pub const PRIORITY_SELECT_ROWS: usize = PRIORITY_LEVELS.len() + 1;
}
