use chrono::{Duration, Local, NaiveDate};
use taskdeck::config::Config;
use taskdeck::filter::DateFilter;
use taskdeck::model::{PriorityLevel, Task, User};
use taskdeck::ui::app::{App, InputMode};

fn task_on(name: &str, date: chrono::NaiveDateTime) -> Task {
    Task::new(name, date)
}

fn app_with_tasks(tasks: Vec<Task>) -> App {
    let user = User {
        tasks,
        ..User::default()
    };
    App::new(Config::default(), user)
}

fn noon(date: NaiveDate) -> chrono::NaiveDateTime {
    date.and_hms_opt(12, 0, 0).unwrap()
}

#[test]
fn test_visible_tasks_applies_search() {
    let today = noon(Local::now().date_naive());
    let mut app = app_with_tasks(vec![
        task_on("Buy groceries", today),
        task_on("Water plants", today),
    ]);

    assert_eq!(app.visible_tasks().len(), 2);
    app.filter.set_search("groc");
    let visible = app.visible_tasks();
    assert_eq!(visible.len(), 1);
    assert_eq!(visible[0].name, "Buy groceries");
}

#[test]
fn test_visible_tasks_applies_date_filter() {
    let today = noon(Local::now().date_naive());
    let last_month = today - Duration::days(30);
    let mut app = app_with_tasks(vec![task_on("recent", today), task_on("old", last_month)]);

    app.filter.set_date_filter(DateFilter::Today);
    let visible = app.visible_tasks();
    assert_eq!(visible.len(), 1);
    assert_eq!(visible[0].name, "recent");
}

#[test]
fn test_pinned_tasks_sort_first() {
    let today = noon(Local::now().date_naive());
    let mut pinned = task_on("pinned", today);
    pinned.pinned = true;
    let app = app_with_tasks(vec![task_on("plain", today), pinned]);

    let visible = app.visible_tasks();
    assert_eq!(visible[0].name, "pinned");
    assert_eq!(visible[1].name, "plain");
}

#[test]
fn test_toggle_selected_done() {
    let today = noon(Local::now().date_naive());
    let mut app = app_with_tasks(vec![task_on("a", today)]);

    app.toggle_selected_done();
    assert!(app.user.tasks[0].done);
    app.toggle_selected_done();
    assert!(!app.user.tasks[0].done);
}

#[test]
fn test_set_selected_priority_and_clear() {
    let today = noon(Local::now().date_naive());
    let mut app = app_with_tasks(vec![task_on("a", today)]);

    app.set_selected_priority(Some(PriorityLevel::High));
    assert_eq!(app.user.tasks[0].priority, Some(PriorityLevel::High));

    app.set_selected_priority(None);
    assert_eq!(app.user.tasks[0].priority, None);
}

#[test]
fn test_filter_menu_choice_custom_opens_range_editor() {
    let mut app = app_with_tasks(vec![]);

    // Menu order: all, today, thisWeek, custom
    app.apply_filter_menu_choice(3);
    assert_eq!(app.filter.date_filter(), DateFilter::Custom);
    assert!(matches!(app.input_mode, InputMode::CustomRange { .. }));
    // Mode switched but no range yet: date filter is inactive
    assert!(app.filter.date_range().is_empty());

    app.apply_filter_menu_choice(1);
    assert_eq!(app.filter.date_filter(), DateFilter::Today);
    assert_eq!(app.input_mode, InputMode::Normal);
}

#[test]
fn test_submit_custom_range_parses_and_applies() {
    let mut app = app_with_tasks(vec![]);
    app.apply_filter_menu_choice(3);

    app.submit_custom_range("2024-06-01", "2024-06-05");
    assert_eq!(app.filter.date_filter(), DateFilter::Custom);
    assert!(app.filter.date_range().is_complete());
    assert_eq!(app.input_mode, InputMode::Normal);
    assert_eq!(
        app.filter.date_range().from.unwrap().date(),
        NaiveDate::from_ymd_opt(2024, 6, 1).unwrap()
    );
}

#[test]
fn test_submit_custom_range_rejects_bad_input() {
    let mut app = app_with_tasks(vec![]);
    app.apply_filter_menu_choice(3);

    app.submit_custom_range("06/01/2024", "2024-06-05");
    // Editor stays open, nothing applied
    assert!(matches!(app.input_mode, InputMode::CustomRange { .. }));
    assert!(app.filter.date_range().is_empty());
    assert!(app.status_message.is_some());

    app.submit_custom_range("", "2024-06-05");
    assert!(app.filter.date_range().is_empty());
}

#[test]
fn test_clear_date_filter_reverts_to_all() {
    let mut app = app_with_tasks(vec![]);
    app.apply_filter_menu_choice(3);
    app.submit_custom_range("2024-06-01", "2024-06-05");

    app.clear_date_filter();
    assert_eq!(app.filter.date_filter(), DateFilter::All);
    assert!(app.filter.date_range().is_empty());
}

#[test]
fn test_selection_wraps_and_clamps() {
    let today = noon(Local::now().date_naive());
    let mut app = app_with_tasks(vec![task_on("a", today), task_on("b", today)]);

    app.select_next();
    assert_eq!(app.selected_index, 1);
    app.select_next();
    assert_eq!(app.selected_index, 0);
    app.select_previous();
    assert_eq!(app.selected_index, 1);

    // Narrowing the list pulls the cursor back in range
    app.filter.set_search("a");
    app.clamp_selection();
    assert_eq!(app.selected_index, 0);
}

#[test]
fn test_default_filter_from_config() {
    let mut config = Config::default();
    config.ui.default_filter = "thisWeek".to_string();
    let app = App::new(config, User::default());
    assert_eq!(app.filter.date_filter(), DateFilter::ThisWeek);
}
