//! Tests for affirm configuration.

use super::*;

#[test]
fn test_toml_parsing() {
    let toml = r#"
        [messages]
        max_line_length = 120
        clip_strings = false

        [failure]
        handlers = ["log", "collect"]
        log_level = "warn"
    "#;

    let config = AffirmConfig::from_toml_str(toml).unwrap();
    assert_eq!(config.messages.max_line_length, 120);
    assert!(!config.messages.clip_strings);
    assert_eq!(config.messages.collection_display_limit, 10);
    assert_eq!(
        config.failure.handlers,
        vec![HandlerKind::Log, HandlerKind::Collect]
    );
    assert_eq!(config.failure.log_level, LogLevel::Warn);
    assert!(config.validate().is_ok());
}

#[test]
fn test_yaml_parsing() {
    let yaml = r#"
        messages:
          excess_preview_limit: 5
        failure:
          handlers: [raise]
    "#;

    let config = AffirmConfig::from_yaml_str(yaml).unwrap();
    assert_eq!(config.messages.excess_preview_limit, 5);
    assert_eq!(config.messages.max_line_length, 78);
    assert_eq!(config.failure.handlers, vec![HandlerKind::Raise]);
}

#[test]
fn test_defaults() {
    let config = AffirmConfig::from_toml_str("").unwrap();
    assert_eq!(config, AffirmConfig::default());
    assert_eq!(config.failure.handlers, vec![HandlerKind::Raise]);
    assert_eq!(config.failure.log_level, LogLevel::Error);
}

#[test]
fn test_builder() {
    let config = AffirmConfig::new()
        .with_max_line_length(90)
        .without_string_clipping()
        .with_handlers([HandlerKind::Log])
        .with_handler(HandlerKind::Raise);

    assert_eq!(config.messages.max_line_length, 90);
    assert!(!config.messages.clip_strings);
    assert_eq!(
        config.failure.handlers,
        vec![HandlerKind::Log, HandlerKind::Raise]
    );
}

#[test]
fn test_validate_rejects_short_lines() {
    let config = AffirmConfig::new().with_max_line_length(10);
    assert!(matches!(config.validate(), Err(ConfigError::Invalid(_))));
}

#[test]
fn test_validate_rejects_unreachable_handler() {
    let config = AffirmConfig::new().with_handlers([HandlerKind::Raise, HandlerKind::Log]);
    let err = config.validate().unwrap_err();
    assert!(err.to_string().contains("never runs"));
}

#[test]
fn test_invalid_handler_name() {
    let result = AffirmConfig::from_toml_str("[failure]\nhandlers = [\"panic\"]");
    assert!(matches!(result, Err(ConfigError::Toml(_))));
}

#[test]
fn test_load_missing_file() {
    let result = AffirmConfig::load("/nonexistent/affirm.toml");
    assert!(matches!(result, Err(ConfigError::Io(_))));
}
