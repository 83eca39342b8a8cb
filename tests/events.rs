use chrono::Local;
use crossterm::event::{Event, KeyCode, KeyEvent, KeyModifiers};
use taskdeck::config::Config;
use taskdeck::filter::DateFilter;
use taskdeck::model::{PriorityLevel, Task, User};
use taskdeck::ui::app::{App, InputMode};
use taskdeck::ui::handle_events;

fn press(app: &mut App, code: KeyCode) {
    let event = Event::Key(KeyEvent::new(code, KeyModifiers::NONE));
    handle_events(event, app).unwrap();
}

fn type_str(app: &mut App, s: &str) {
    for c in s.chars() {
        press(app, KeyCode::Char(c));
    }
}

fn app_with_one_task() -> App {
    let mut user = User::default();
    let date = Local::now().naive_local();
    user.tasks.push(Task::new("Buy groceries", date));
    App::new(Config::default(), user)
}

#[test]
fn test_quit_key() {
    let mut app = app_with_one_task();
    press(&mut app, KeyCode::Char('q'));
    assert!(app.should_quit);
}

#[test]
fn test_search_mode_types_into_filter() {
    let mut app = app_with_one_task();
    press(&mut app, KeyCode::Char('/'));
    assert_eq!(app.input_mode, InputMode::Search);

    type_str(&mut app, "groc");
    assert_eq!(app.filter.search(), "groc");
    assert!(app.filter.is_filter_active());

    press(&mut app, KeyCode::Backspace);
    assert_eq!(app.filter.search(), "gro");

    press(&mut app, KeyCode::Enter);
    assert_eq!(app.input_mode, InputMode::Normal);
    // Leaving search mode keeps the query applied
    assert_eq!(app.filter.search(), "gro");
}

#[test]
fn test_filter_menu_selects_this_week() {
    let mut app = app_with_one_task();
    press(&mut app, KeyCode::Char('f'));
    assert_eq!(app.input_mode, InputMode::FilterMenu(0));

    press(&mut app, KeyCode::Down);
    press(&mut app, KeyCode::Down);
    press(&mut app, KeyCode::Enter);
    assert_eq!(app.filter.date_filter(), DateFilter::ThisWeek);
    assert_eq!(app.input_mode, InputMode::Normal);
}

#[test]
fn test_filter_menu_wraps_and_cancels() {
    let mut app = app_with_one_task();
    press(&mut app, KeyCode::Char('f'));
    press(&mut app, KeyCode::Up);
    assert_eq!(app.input_mode, InputMode::FilterMenu(3));
    press(&mut app, KeyCode::Esc);
    assert_eq!(app.input_mode, InputMode::Normal);
    assert_eq!(app.filter.date_filter(), DateFilter::All);
}

#[test]
fn test_custom_range_entry_applies_filter() {
    let mut app = app_with_one_task();
    press(&mut app, KeyCode::Char('f'));
    press(&mut app, KeyCode::Up);
    press(&mut app, KeyCode::Enter);
    assert!(matches!(app.input_mode, InputMode::CustomRange { .. }));

    type_str(&mut app, "2024-06-01");
    press(&mut app, KeyCode::Tab);
    type_str(&mut app, "2024-06-05");
    press(&mut app, KeyCode::Enter);

    assert_eq!(app.filter.date_filter(), DateFilter::Custom);
    assert!(app.filter.date_range().is_complete());
    assert_eq!(app.input_mode, InputMode::Normal);
}

#[test]
fn test_custom_range_esc_reverts_to_all() {
    let mut app = app_with_one_task();
    press(&mut app, KeyCode::Char('f'));
    press(&mut app, KeyCode::Up);
    press(&mut app, KeyCode::Enter);

    press(&mut app, KeyCode::Esc);
    assert_eq!(app.filter.date_filter(), DateFilter::All);
    assert!(app.filter.date_range().is_empty());
    assert_eq!(app.input_mode, InputMode::Normal);
}

#[test]
fn test_custom_range_input_rejects_letters() {
    let mut app = app_with_one_task();
    press(&mut app, KeyCode::Char('f'));
    press(&mut app, KeyCode::Up);
    press(&mut app, KeyCode::Enter);

    type_str(&mut app, "2024-06-ab");
    let InputMode::CustomRange { start, .. } = &app.input_mode else {
        panic!("expected custom range editor");
    };
    assert_eq!(start, "2024-06-");
}

#[test]
fn test_priority_select_assigns_and_clears() {
    let mut app = app_with_one_task();

    press(&mut app, KeyCode::Char('p'));
    assert_eq!(app.input_mode, InputMode::PrioritySelect(0));
    // Row 1 is Critical
    press(&mut app, KeyCode::Down);
    press(&mut app, KeyCode::Enter);
    assert_eq!(app.user.tasks[0].priority, Some(PriorityLevel::Critical));

    // Row 0 clears back to no priority
    press(&mut app, KeyCode::Char('p'));
    press(&mut app, KeyCode::Enter);
    assert_eq!(app.user.tasks[0].priority, None);
}

#[test]
fn test_clear_all_filters_key() {
    let mut app = app_with_one_task();
    press(&mut app, KeyCode::Char('/'));
    type_str(&mut app, "x");
    press(&mut app, KeyCode::Esc);
    press(&mut app, KeyCode::Char('f'));
    press(&mut app, KeyCode::Down);
    press(&mut app, KeyCode::Enter);
    assert!(app.filter.is_filter_active());

    press(&mut app, KeyCode::Char('C'));
    assert!(!app.filter.is_filter_active());
    assert_eq!(app.filter.search(), "");
    assert_eq!(app.filter.date_filter(), DateFilter::All);
}

#[test]
fn test_space_toggles_done() {
    let mut app = app_with_one_task();
    press(&mut app, KeyCode::Char(' '));
    assert!(app.user.tasks[0].done);
}
