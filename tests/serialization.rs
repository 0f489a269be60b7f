//! End-to-end checks of the persisted JSON shape: what a host writes out
//! is exactly what another session can load back.

use anyhow::Result;
use chrono::{TimeZone, Utc};
use serde_json::Value;
use thermolog::{ConversionDirection, ConversionEntry, ConversionHistory, Error};

fn seeded_history() -> ConversionHistory {
    let mut history = ConversionHistory::new();
    history.add_entry(ConversionEntry::new(
        ConversionDirection::FahrenheitToCelsius,
        72.5,
        Utc.timestamp_opt(1_700_000_000, 0).unwrap(),
    ));
    history.add_entry(ConversionEntry::new(
        ConversionDirection::CelsiusToFahrenheit,
        100.0,
        Utc.timestamp_opt(1_700_000_060, 0).unwrap(),
    ));
    history
}

#[test]
fn json_shape_uses_camel_case_and_display_names() -> Result<()> {
    let history = seeded_history();
    let json = history.to_json()?;
    let values: Vec<Value> = serde_json::from_str(&json)?;

    assert_eq!(values.len(), 2);
    // newest first
    assert_eq!(values[0]["direction"], "Celsius to Fahrenheit");
    assert_eq!(values[0]["inputValue"], 100.0);
    assert_eq!(values[0]["outputValue"], 212.0);
    assert!(values[0]["timestamp"].as_str().unwrap().contains('T'));
    assert_eq!(values[1]["direction"], "Fahrenheit to Celsius");
    Ok(())
}

#[test]
fn json_round_trip_reproduces_entries_in_order() -> Result<()> {
    let history = seeded_history();
    let json = history.to_json()?;

    let mut restored = ConversionHistory::new();
    let loaded = restored.load_json(&json, true)?;

    assert_eq!(loaded, 2);
    assert_eq!(restored.entries(), history.entries());
    Ok(())
}

#[test]
fn one_malformed_record_does_not_block_the_rest() -> Result<()> {
    let json = r#"[
        {"direction": "Fahrenheit to Celsius", "inputValue": 32.0, "outputValue": 0.0, "timestamp": "2023-11-14T22:13:20+00:00"},
        {"direction": "Sideways", "inputValue": 1.0, "outputValue": 1.0, "timestamp": "2023-11-14T22:13:21+00:00"},
        {"direction": "Celsius to Fahrenheit", "inputValue": 0.0, "outputValue": 32.0, "timestamp": "2023-11-14T22:13:22+00:00"}
    ]"#;

    let mut history = ConversionHistory::new();
    let loaded = history.load_json(json, true)?;

    assert_eq!(loaded, 2);
    assert_eq!(history.len(), 2);
    assert_eq!(
        history.entries()[0].direction,
        ConversionDirection::CelsiusToFahrenheit
    );
    Ok(())
}

#[test]
fn records_missing_fields_are_skipped_too() -> Result<()> {
    let json = r#"[
        {"direction": "Fahrenheit to Celsius", "inputValue": 212.0},
        {"direction": "Fahrenheit to Celsius", "inputValue": 212.0, "outputValue": 100.0, "timestamp": "2023-11-14T22:13:20+00:00"}
    ]"#;

    let mut history = ConversionHistory::new();
    assert_eq!(history.load_json(json, true)?, 1);
    assert_eq!(history.entries()[0].output_value, 100.0);
    Ok(())
}

#[test]
fn non_array_top_level_is_a_hard_error() {
    let mut history = ConversionHistory::new();
    let result = history.load_json(r#"{"direction": "Fahrenheit to Celsius"}"#, true);
    assert!(matches!(result, Err(Error::InvalidJson(_))));
}

#[test]
fn loading_without_clearing_merges_by_timestamp() -> Result<()> {
    let mut history = seeded_history();
    let json = r#"[
        {"direction": "Fahrenheit to Celsius", "inputValue": -40.0, "outputValue": -40.0, "timestamp": "2023-11-14T22:20:00+00:00"}
    ]"#;

    history.load_json(json, false)?;
    assert_eq!(history.len(), 3);
    // 22:20:00 is newer than both seeded entries
    assert_eq!(history.entries()[0].input_value, -40.0);
    Ok(())
}
