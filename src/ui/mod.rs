//! UI module for taskdeck
//!
//! This module handles all user interface components, rendering, and user interactions.

pub mod app;
pub mod components;
pub mod events;
pub mod layout;
pub mod render;

pub use app::App;
pub use events::handle_events;
pub use layout::LayoutManager;
pub use render::run_app;
