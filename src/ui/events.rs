//! Event handling: key presses → application state mutations
//!
//! Pure event-to-action wiring; the state transitions themselves live on
//! [`App`] and [`crate::filter::FilterContext`].

use anyhow::Result;
use crossterm::event::{Event, KeyCode, KeyEvent, KeyEventKind};

use super::app::{App, InputMode};
use crate::constants::{ERROR_USER_SAVE_FAILED, SUCCESS_USER_SAVED};
use crate::model::PRIORITY_LEVELS;

/// Handle a terminal event, returning true if it was consumed
pub fn handle_events(event: Event, app: &mut App) -> Result<bool> {
    let Event::Key(key) = event else {
        return Ok(false);
    };
    if key.kind != KeyEventKind::Press {
        return Ok(false);
    }

    match app.input_mode.clone() {
        InputMode::Normal => handle_normal_key(key, app),
        InputMode::Search => handle_search_key(key, app),
        InputMode::FilterMenu(selected) => handle_filter_menu_key(key, app, selected),
        InputMode::CustomRange {
            start,
            end,
            editing_end,
        } => handle_custom_range_key(key, app, start, end, editing_end),
        InputMode::PrioritySelect(selected) => handle_priority_select_key(key, app, selected),
    }

    Ok(true)
}

fn handle_normal_key(key: KeyEvent, app: &mut App) {
    match key.code {
        KeyCode::Char('q') => app.should_quit = true,
        KeyCode::Char('j') | KeyCode::Down => app.select_next(),
        KeyCode::Char('k') | KeyCode::Up => app.select_previous(),
        KeyCode::Char(' ') => app.toggle_selected_done(),
        KeyCode::Char('/') => app.input_mode = InputMode::Search,
        KeyCode::Char('f') => app.input_mode = InputMode::FilterMenu(0),
        KeyCode::Char('p') => {
            if app.selected_task_id().is_some() {
                app.input_mode = InputMode::PrioritySelect(0);
            }
        }
        KeyCode::Char('c') => app.clear_date_filter(),
        KeyCode::Char('C') => app.clear_all_filters(),
        KeyCode::Char('s') => match app.user.save() {
            Ok(()) => app.status_message = Some(SUCCESS_USER_SAVED.to_string()),
            Err(e) => {
                log::error!("saving user data failed: {e:#}");
                app.status_message = Some(ERROR_USER_SAVE_FAILED.to_string());
            }
        },
        _ => {}
    }
}

fn handle_search_key(key: KeyEvent, app: &mut App) {
    match key.code {
        KeyCode::Esc | KeyCode::Enter => app.input_mode = InputMode::Normal,
        KeyCode::Backspace => {
            let mut search = app.filter.search().to_string();
            search.pop();
            app.filter.set_search(search);
            app.clamp_selection();
        }
        KeyCode::Char(c) => {
            let mut search = app.filter.search().to_string();
            search.push(c);
            app.filter.set_search(search);
            app.clamp_selection();
        }
        _ => {}
    }
}

fn handle_filter_menu_key(key: KeyEvent, app: &mut App, selected: usize) {
    match key.code {
        KeyCode::Esc => app.input_mode = InputMode::Normal,
        KeyCode::Char('j') | KeyCode::Down => {
            app.input_mode = InputMode::FilterMenu((selected + 1) % 4);
        }
        KeyCode::Char('k') | KeyCode::Up => {
            app.input_mode = InputMode::FilterMenu(selected.checked_sub(1).unwrap_or(3));
        }
        KeyCode::Enter => app.apply_filter_menu_choice(selected),
        _ => {}
    }
}

fn handle_custom_range_key(key: KeyEvent, app: &mut App, mut start: String, mut end: String, editing_end: bool) {
    match key.code {
        KeyCode::Esc => {
            // Abandoning the editor reverts the date filter entirely
            app.clear_date_filter();
        }
        KeyCode::Tab | KeyCode::BackTab => {
            app.input_mode = InputMode::CustomRange {
                start,
                end,
                editing_end: !editing_end,
            };
        }
        KeyCode::Enter => app.submit_custom_range(&start, &end),
        KeyCode::Backspace => {
            if editing_end {
                end.pop();
            } else {
                start.pop();
            }
            app.input_mode = InputMode::CustomRange { start, end, editing_end };
        }
        KeyCode::Char(c) if c.is_ascii_digit() || c == '-' => {
            if editing_end {
                end.push(c);
            } else {
                start.push(c);
            }
            app.input_mode = InputMode::CustomRange { start, end, editing_end };
        }
        _ => {}
    }
}

fn handle_priority_select_key(key: KeyEvent, app: &mut App, selected: usize) {
    match key.code {
        KeyCode::Esc => app.input_mode = InputMode::Normal,
        KeyCode::Char('j') | KeyCode::Down => {
            app.input_mode = InputMode::PrioritySelect((selected + 1) % App::PRIORITY_SELECT_ROWS);
        }
        KeyCode::Char('k') | KeyCode::Up => {
            app.input_mode =
                InputMode::PrioritySelect(selected.checked_sub(1).unwrap_or(App::PRIORITY_SELECT_ROWS - 1));
        }
        KeyCode::Enter => {
            // Row 0 clears the priority, the rest map onto the fixed levels
            let priority = selected.checked_sub(1).map(|i| PRIORITY_LEVELS[i]);
            app.set_selected_priority(priority);
            app.input_mode = InputMode::Normal;
        }
        _ => {}
    }
}
