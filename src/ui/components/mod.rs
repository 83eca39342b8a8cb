//! UI components for the taskdeck interface

pub mod filter_bar;
pub mod priority_badge;
pub mod priority_select;
pub mod status_bar;
pub mod tasks_list;

pub use filter_bar::FilterBar;
pub use priority_select::PrioritySelect;
pub use status_bar::StatusBar;
pub use tasks_list::TasksList;
