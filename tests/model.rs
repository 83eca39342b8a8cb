use chrono::NaiveDate;
use taskdeck::model::{Category, PriorityLevel, SortOption, Task, User};
use uuid::Uuid;

fn sample_task() -> Task {
    let date = NaiveDate::from_ymd_opt(2024, 6, 12).unwrap().and_hms_opt(9, 30, 0).unwrap();
    let mut task = Task::new("Write report", date);
    task.description = Some("Quarterly numbers".to_string());
    task.priority = Some(PriorityLevel::High);
    task.category = Some(vec![Category::new("Work", "#4180ff")]);
    task
}

#[test]
fn test_task_search_matches_name_and_description() {
    let task = sample_task();
    assert!(task.matches_search(""));
    assert!(task.matches_search("REPORT"));
    assert!(task.matches_search("quarterly"));
    assert!(!task.matches_search("groceries"));
}

#[test]
fn test_user_json_round_trip() {
    let mut user = User::default();
    user.name = Some("Alex".to_string());
    user.tasks.push(sample_task());
    user.categories.push(Category::new("Home", "#22c55e"));
    user.settings.sort_option = SortOption::DueDate;

    let json = serde_json::to_string_pretty(&user).unwrap();
    let back: User = serde_json::from_str(&json).unwrap();
    assert_eq!(back, user);
}

#[test]
fn test_user_json_uses_camel_case_keys() {
    let user = User::default();
    let json = serde_json::to_string(&user).unwrap();
    assert!(json.contains("\"createdAt\""));
    assert!(json.contains("\"deletedTasks\""));
    assert!(json.contains("\"favoriteCategories\""));
}

#[test]
fn test_delete_task_records_id_for_sync() {
    let mut user = User::default();
    let task = sample_task();
    let id = task.id;
    user.tasks.push(task);

    user.delete_task(id);
    assert!(user.tasks.is_empty());
    assert_eq!(user.deleted_tasks, vec![id]);

    // Deleting an unknown id is a no-op
    user.delete_task(Uuid::new_v4());
    assert_eq!(user.deleted_tasks.len(), 1);
}

#[test]
fn test_user_save_and_load_file() {
    let mut user = User::default();
    user.tasks.push(sample_task());

    let path = std::env::temp_dir().join(format!("taskdeck-test-{}.json", Uuid::new_v4()));
    user.save_to_file(&path).unwrap();
    let loaded = User::load_from_file(&path).unwrap();
    std::fs::remove_file(&path).ok();

    assert_eq!(loaded, user);
}
