use super::*;

#[test]
fn test_defaults() {
    let settings = Settings::default();
    assert_eq!(settings.color(), "auto");
    assert!(!settings.verbose());
    assert_eq!(settings.language(), None);
}

#[test]
fn test_parse_settings_block() {
    let settings = Settings::parse(
        r#"
        settings {
            language "python"
            color "never"
            verbose "true"
        }
        "#,
    )
    .unwrap();

    assert_eq!(settings.language(), Some("python"));
    assert_eq!(settings.color(), "never");
    assert!(settings.verbose());
    assert_eq!(settings.all().len(), 3);
}

#[test]
fn test_missing_keys_keep_defaults() {
    let settings = Settings::parse(r#"settings { language "nodejs" }"#).unwrap();
    assert_eq!(settings.language(), Some("nodejs"));
    assert_eq!(settings.color(), "auto");
}

#[test]
fn test_unknown_key_rejected() {
    let err = Settings::parse(r#"settings { editor "vim" }"#).unwrap_err();
    assert!(err.to_string().contains("Unknown setting: 'editor'"));
}

#[test]
fn test_invalid_color_rejected() {
    let err = Settings::parse(r#"settings { color "rainbow" }"#).unwrap_err();
    assert!(err.to_string().contains("Invalid value for 'color'"));
}

#[test]
fn test_empty_language_rejected() {
    assert!(Settings::parse(r#"settings { language "" }"#).is_err());
}

#[test]
fn test_setting_without_value_rejected() {
    let err = Settings::parse("settings {\n    color\n}\n").unwrap_err();
    assert!(err.to_string().contains("requires a value"));
}

#[test]
fn test_unknown_top_level_node_rejected() {
    assert!(Settings::parse(r#"language "python""#).is_err());
}

#[test]
fn test_missing_file_gives_defaults() {
    let dir = tempfile::tempdir().unwrap();
    let settings = Settings::load_from(&dir.path().join("config.kdl")).unwrap();
    assert_eq!(settings.color(), "auto");
}

#[test]
fn test_load_from_file() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("config.kdl");
    std::fs::write(&path, "settings {\n    language \"rust\"\n}\n").unwrap();

    let settings = Settings::load_from(&path).unwrap();
    assert_eq!(settings.language(), Some("rust"));
}

#[test]
fn test_broken_file_names_path() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("config.kdl");
    std::fs::write(&path, "settings { color \"never\"").unwrap();

    let err = Settings::load_from(&path).unwrap_err();
    assert!(err.to_string().contains("config.kdl"));
}
