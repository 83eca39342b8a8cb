//! User profile and application settings
//!
//! The user file bundles the task list, categories, and per-device
//! settings into one JSON document. The deleted-id lists are kept so an
//! external sync layer can reconcile removals across devices; this crate
//! only stores them.

use anyhow::{Context, Result};
use chrono::{Local, NaiveDateTime};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use uuid::Uuid;

use super::category::Category;
use super::task::Task;
use crate::constants::{APP_NAME, USER_FILE_NAME};

/// Dark mode preference
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DarkModeOptions {
    #[default]
    System,
    Auto,
    Light,
    Dark,
}

/// Task list sort order
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum SortOption {
    #[default]
    DateCreated,
    DueDate,
    Alphabetical,
    Custom,
}

/// Reduce-motion preference
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ReduceMotionOption {
    #[default]
    System,
    On,
    Off,
}

/// Application settings for the user
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct AppSettings {
    pub enable_categories: bool,
    pub done_to_bottom: bool,
    pub show_progress_bar: bool,
    pub sort_option: SortOption,
    pub reduce_motion: ReduceMotionOption,
}

impl Default for AppSettings {
    fn default() -> Self {
        Self {
            enable_categories: true,
            done_to_bottom: false,
            show_progress_bar: true,
            sort_option: SortOption::default(),
            reduce_motion: ReduceMotionOption::default(),
        }
    }
}

/// A user in the application
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct User {
    pub name: Option<String>,
    pub created_at: NaiveDateTime,
    /// URL or local file reference for the profile picture
    pub profile_picture: Option<String>,
    pub tasks: Vec<Task>,
    /// IDs of tasks deleted locally, retained for sync reconciliation
    pub deleted_tasks: Vec<Uuid>,
    pub categories: Vec<Category>,
    pub deleted_categories: Vec<Uuid>,
    pub favorite_categories: Vec<Uuid>,
    /// Palette offered when creating tasks and categories
    pub color_list: Vec<String>,
    pub settings: AppSettings,
    pub theme: String,
    pub darkmode: DarkModeOptions,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub last_synced_at: Option<NaiveDateTime>,
}

impl Default for User {
    fn default() -> Self {
        Self {
            name: None,
            created_at: Local::now().naive_local(),
            profile_picture: None,
            tasks: Vec::new(),
            deleted_tasks: Vec::new(),
            categories: Vec::new(),
            deleted_categories: Vec::new(),
            favorite_categories: Vec::new(),
            color_list: vec![
                "#ff3131".to_string(),
                "#ff9318".to_string(),
                "#b624ff".to_string(),
                "#22c55e".to_string(),
            ],
            settings: AppSettings::default(),
            theme: "system".to_string(),
            darkmode: DarkModeOptions::default(),
            last_synced_at: None,
        }
    }
}

impl User {
    /// Load user data from the default location, or start fresh
    ///
    /// A missing file is not an error; a present but unreadable or
    /// malformed file is.
    pub fn load() -> Result<Self> {
        let path = Self::default_path()?;
        if path.exists() {
            Self::load_from_file(&path)
        } else {
            Ok(Self::default())
        }
    }

    /// Load user data from a specific JSON file
    pub fn load_from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(&path)
            .with_context(|| format!("Failed to read user file: {}", path.as_ref().display()))?;
        serde_json::from_str(&content)
            .with_context(|| format!("Failed to parse user file: {}", path.as_ref().display()))
    }

    /// Save user data to the default location
    pub fn save(&self) -> Result<()> {
        self.save_to_file(Self::default_path()?)
    }

    /// Save user data to a specific JSON file
    pub fn save_to_file<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        if let Some(parent) = path.as_ref().parent() {
            std::fs::create_dir_all(parent)
                .with_context(|| format!("Failed to create data directory: {}", parent.display()))?;
        }
        let content = serde_json::to_string_pretty(self).context("Failed to serialize user data")?;
        std::fs::write(&path, content)
            .with_context(|| format!("Failed to write user file: {}", path.as_ref().display()))
    }

    /// Remove a task, recording its id for sync reconciliation
    pub fn delete_task(&mut self, id: Uuid) {
        if let Some(pos) = self.tasks.iter().position(|t| t.id == id) {
            self.tasks.remove(pos);
            self.deleted_tasks.push(id);
        }
    }

    /// Default user file path under the platform data directory
    pub fn default_path() -> Result<PathBuf> {
        dirs::data_dir()
            .ok_or_else(|| anyhow::anyhow!("Could not determine data directory"))
            .map(|dir| dir.join(APP_NAME).join(USER_FILE_NAME))
    }
}
