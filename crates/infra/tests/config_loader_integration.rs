//! Integration tests for configuration loader
//!
//! Tests the end-to-end behavior of loading configuration from files.

use std::fs;

use slotwise_domain::{LogFormat, SlotwiseError, WeekStart};
use slotwise_infra::config;
use tempfile::TempDir;

#[test]
fn test_load_config_from_json_file() -> anyhow::Result<()> {
    let dir = TempDir::new()?;
    let path = dir.path().join("slotwise.json");
    fs::write(
        &path,
        r#"{
            "business": { "timezone": "Europe/Berlin" },
            "calendar": {
                "display_start_hour": 7,
                "display_end_hour": 21,
                "week_starts_on": "sunday"
            },
            "reschedule": { "snap_minutes": 15 },
            "logging": { "level": "slotwise_core=debug", "format": "json" }
        }"#,
    )?;

    let config = config::load_from_file(Some(path))?;

    assert_eq!(config.business.timezone, "Europe/Berlin");
    assert_eq!(config.calendar.display_start_hour, 7);
    assert_eq!(config.calendar.display_end_hour, 21);
    assert_eq!(config.calendar.week_starts_on, WeekStart::Sunday);
    assert_eq!(config.reschedule.snap_minutes, 15);
    assert_eq!(config.reschedule.cell_height, 60.0);
    assert_eq!(config.logging.format, LogFormat::Json);
    Ok(())
}

#[test]
fn test_load_config_from_toml_file() -> anyhow::Result<()> {
    let dir = TempDir::new()?;
    let path = dir.path().join("config.toml");
    fs::write(
        &path,
        r#"
[business]
timezone = "Asia/Tokyo"

[calendar]
slot_height = 80.0
min_card_height = 20.0
"#,
    )?;

    let config = config::load_from_file(Some(path))?;
    assert_eq!(config.business.timezone, "Asia/Tokyo");
    assert_eq!(config.calendar.slot_height, 80.0);
    assert_eq!(config.calendar.min_card_height, 20.0);
    assert_eq!(config.calendar.display_start_hour, 8);
    Ok(())
}

#[test]
fn test_unknown_timezone_is_rejected_at_load() -> anyhow::Result<()> {
    let dir = TempDir::new()?;
    let path = dir.path().join("slotwise.toml");
    fs::write(&path, "[business]\ntimezone = \"Mars/Olympus_Mons\"\n")?;

    let err = config::load_from_file(Some(path)).unwrap_err();
    assert!(matches!(err, SlotwiseError::Config(_)));
    assert!(err.to_string().contains("Mars/Olympus_Mons"));
    Ok(())
}

#[test]
fn test_invalid_geometry_is_rejected_at_load() -> anyhow::Result<()> {
    let dir = TempDir::new()?;
    let path = dir.path().join("slotwise.json");
    fs::write(&path, r#"{ "calendar": { "display_start_hour": 18, "display_end_hour": 9 } }"#)?;

    assert!(matches!(config::load_from_file(Some(path)), Err(SlotwiseError::Config(_))));
    Ok(())
}

#[test]
fn test_missing_file_is_a_config_error() {
    let result = config::load_from_file(Some("/nonexistent/slotwise.json".into()));
    assert!(matches!(result, Err(SlotwiseError::Config(_))));
}

#[test]
fn test_probe_prefers_slotwise_file_and_walks_up() -> anyhow::Result<()> {
    let root = TempDir::new()?;
    let nested = root.path().join("a").join("b");
    fs::create_dir_all(&nested)?;

    assert_eq!(config::probe_config_paths_from(&nested), None);

    fs::write(root.path().join("config.toml"), "")?;
    let found = config::probe_config_paths_from(&nested);
    assert_eq!(found, Some(nested.join("../..").join("config.toml")));

    fs::write(nested.join("config.json"), "{}")?;
    fs::write(nested.join("slotwise.toml"), "")?;
    let found = config::probe_config_paths_from(&nested);
    assert_eq!(found, Some(nested.join("slotwise.toml")));
    Ok(())
}
