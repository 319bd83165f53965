//! Integration tests for configuration file loading and validation.

use std::io::Write;

use chrono::Weekday;
use daygrid::{AppConfig, SelectionShape};
use tempfile::NamedTempFile;

fn write_config(contents: &str) -> NamedTempFile {
    let mut file = tempfile::Builder::new()
        .suffix(".toml")
        .tempfile()
        .expect("temp config file");
    file.write_all(contents.as_bytes()).expect("write config");
    file
}

// ==================== File Loading Tests ====================

#[test]
fn test_explicit_file_overrides_defaults() {
    let file = write_config(
        r#"
[window]
title = "Appointment Picker"
width = 500.0
height = 600.0

[picker]
first_weekday = "sunday"
show_out_of_month_days = false
unselectable_weekdays = ["saturday", "sunday"]
selection_shape = "rounded_rect"
"#,
    );

    let config = AppConfig::load_with_file(Some(file.path())).expect("config loads");

    assert_eq!(config.window.title, "Appointment Picker");
    assert_eq!(config.window.width, 500.0);
    assert_eq!(config.picker.selection_shape, SelectionShape::RoundedRect);

    let policy = config.picker.to_policy().expect("valid policy");
    assert_eq!(policy.first_weekday, Weekday::Sun);
    assert!(!policy.show_out_of_month_days);
    assert_eq!(policy.unselectable_weekdays, vec![Weekday::Sat, Weekday::Sun]);
}

#[test]
fn test_partial_file_keeps_remaining_defaults() {
    let file = write_config(
        r#"
[picker]
first_weekday = "wednesday"
"#,
    );

    let config = AppConfig::load_with_file(Some(file.path())).expect("config loads");

    assert_eq!(config.window.title, "Daygrid");
    assert!(config.picker.show_out_of_month_days);
    assert_eq!(
        config.picker.to_policy().unwrap().first_weekday,
        Weekday::Wed
    );
}

#[test]
fn test_flagged_colors_roundtrip() {
    let file = write_config(
        r#"
[picker]
flagged_weekday = "friday"
flagged_text = { r = 0.1, g = 0.2, b = 0.9 }
flagged_background = { r = 0.3, g = 0.0, b = 0.3, a = 0.8 }

[picker.font]
family = "Avenir"
scale = "large"
"#,
    );

    let config = AppConfig::load_with_file(Some(file.path())).expect("config loads");
    let policy = config.picker.to_policy().expect("valid policy");

    assert_eq!(policy.flagged_weekday, Some(Weekday::Fri));
    let text = policy.flagged_text.expect("flag text");
    assert_eq!((text.r, text.g, text.b, text.a), (0.1, 0.2, 0.9, 1.0));
    let bg = policy.flagged_background.expect("flag background");
    assert_eq!(bg.a, 0.8);
    assert_eq!(policy.label_font.family.as_deref(), Some("Avenir"));
}

// ==================== Validation Tests ====================

#[test]
fn test_bad_weekday_name_fails_at_load() {
    let file = write_config(
        r#"
[picker]
first_weekday = "moonday"
"#,
    );

    let result = AppConfig::load_with_file(Some(file.path()));
    assert!(result.is_err());
}

#[test]
fn test_out_of_range_color_fails_at_load() {
    let file = write_config(
        r#"
[picker]
flagged_weekday = "friday"
flagged_text = { r = 2.0, g = 0.0, b = 0.0 }
"#,
    );

    let result = AppConfig::load_with_file(Some(file.path()));
    assert!(result.is_err());
}

#[test]
fn test_missing_explicit_file_is_an_error() {
    let result =
        AppConfig::load_with_file(Some(std::path::Path::new("/nonexistent/daygrid.toml")));
    assert!(result.is_err());
}
