use taskdeck::config::Config;
use taskdeck::filter::DateFilter;
use taskdeck::utils::datetime;

#[test]
fn test_default_config() {
    let config = Config::default();
    assert_eq!(config.ui.default_filter, "all");
    assert!(config.ui.mouse_enabled);
    assert!(config.display.show_descriptions);
    assert!(config.display.show_priorities);
    assert!(!config.logging.enabled);
    assert_eq!(config.default_filter(), DateFilter::All);
}

#[test]
fn test_config_validation() {
    let mut config = Config::default();

    // Valid config should pass
    assert!(config.validate().is_ok());

    // Unknown filter mode should fail
    config.ui.default_filter = "nextMonth".to_string();
    assert!(config.validate().is_err());

    // Reset and test invalid date format
    config.ui.default_filter = "thisWeek".to_string();
    config.display.date_format = "%Q".to_string();
    assert!(config.validate().is_err());
}

#[test]
fn test_config_serialization() {
    let config = Config::default();
    let toml_str = toml::to_string_pretty(&config).unwrap();
    assert!(toml_str.contains("default_filter = \"all\""));
    assert!(toml_str.contains("mouse_enabled = true"));
}

#[test]
fn test_generate_default_config_writes_loadable_file() {
    let dir = std::env::temp_dir().join(format!("taskdeck-config-{}", uuid::Uuid::new_v4()));
    let path = dir.join("config.toml");

    Config::generate_default_config(&path).unwrap();
    let content = std::fs::read_to_string(&path).unwrap();
    assert!(content.starts_with("# taskdeck Configuration File"));

    // The generated file must load and validate as-is
    let loaded = Config::load_from_file(&path).unwrap();
    assert_eq!(loaded.ui.default_filter, "all");
    assert!(!loaded.logging.enabled);

    std::fs::remove_dir_all(&dir).ok();
}

#[test]
fn test_default_config_path_is_under_the_app_config_dir() {
    let path = Config::get_default_config_path().unwrap();
    assert!(path.ends_with("taskdeck/config.toml"));
    assert_eq!(Config::get_xdg_config_dir().unwrap(), path.parent().unwrap());
}

#[test]
fn test_partial_config_deserialization() {
    // Partial TOML configs merge with defaults
    let partial_toml = r#"
[ui]
default_filter = "today"

[logging]
enabled = true
"#;

    let config: Config = toml::from_str(partial_toml).unwrap();

    // Check that specified values are used
    assert_eq!(config.ui.default_filter, "today");
    assert_eq!(config.default_filter(), DateFilter::Today);
    assert!(config.logging.enabled);

    // Check that unspecified values use defaults
    assert!(config.ui.mouse_enabled);
    assert_eq!(config.display.date_format, datetime::DATE_FORMAT);
}
