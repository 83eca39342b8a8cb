//! Data model for tasks, categories, users, and priorities

pub mod category;
pub mod priority;
pub mod task;
pub mod user;

pub use category::Category;
pub use priority::{PriorityConfig, PriorityLevel, PRIORITY_LEVELS};
pub use task::Task;
pub use user::{AppSettings, DarkModeOptions, SortOption, User};
