#![allow(clippy::float_cmp)]

use serde_json::json;

use super::*;
use crate::stroke::{Point, PointKind};

fn sample_state() -> PersistedState {
    PersistedState {
        color: "blue".into(),
        size: 15.0,
        points: StrokeLog::from(vec![
            Point::new(10.0, 10.0, 7.5, "blue", PointKind::Begin),
            Point::new(20.0, 20.0, 7.5, "blue", PointKind::Move),
            Point::new(20.5, 21.25, 7.5, "blue", PointKind::End),
        ]),
    }
}

#[test]
fn line_width_is_half_the_brush_size() {
    assert_eq!(line_width_for(15.0), 7.5);
    assert_eq!(ToolState::new("black", 10.0).line_width(), 5.0);
    assert_eq!(line_width_for(-3.0), -1.5);
}

#[test]
fn tool_from_config_uses_first_entries() {
    let tool = ToolState::from_config(&BoardConfig::default());
    assert_eq!(tool, ToolState::new("black", 10.0));
}

#[test]
fn deserialize_none_is_default_state() {
    let state = deserialize(None, &BoardConfig::default()).unwrap();
    assert_eq!(state.color, "black");
    assert_eq!(state.size, 10.0);
    assert!(state.points.is_empty());
}

#[test]
fn deserialize_none_follows_configured_defaults() {
    let config = BoardConfig { palette: vec!["red".into()], brush_sizes: vec![4], ..BoardConfig::default() };
    let state = deserialize(None, &config).unwrap();
    assert_eq!((state.color.as_str(), state.size), ("red", 4.0));
}

#[test]
fn round_trip_preserves_state() {
    let state = sample_state();
    let raw = serialize(&state.view()).unwrap();
    let back = deserialize(Some(&raw), &BoardConfig::default()).unwrap();
    assert_eq!(back, state);
}

#[test]
fn serialized_shape_matches_storage_format() {
    let raw = serialize(&sample_state().view()).unwrap();
    assert!(raw.starts_with(r#"{"color":"blue","size":15,"points":["#));
    let value: serde_json::Value = serde_json::from_str(&raw).unwrap();
    assert_eq!(
        value["points"][0],
        json!({ "x": 10.0, "y": 10.0, "size": 7.5, "color": "blue", "type": "begin" })
    );
}

#[test]
fn deserialize_accepts_integer_numbers() {
    let raw = r#"{"color":"green","size":20,"points":[{"x":1,"y":2,"size":10,"color":"green","type":"begin"}]}"#;
    let state = deserialize(Some(raw), &BoardConfig::default()).unwrap();
    assert_eq!(state.points.len(), 1);
    assert_eq!(state.points.as_slice()[0].size, 10.0);
}

#[test]
fn deserialize_malformed_json_is_parse_error() {
    let err = deserialize(Some("{not json"), &BoardConfig::default()).unwrap_err();
    assert!(matches!(err, BoardError::Parse(_)));
}

#[test]
fn deserialize_wrong_shape_is_parse_error() {
    let err = deserialize(Some(r#"{"color":"red"}"#), &BoardConfig::default()).unwrap_err();
    assert!(matches!(err, BoardError::Parse(_)));
}

#[test]
fn deserialize_empty_string_is_default_state() {
    let state = deserialize(Some(""), &BoardConfig::default()).unwrap();
    assert_eq!(state, PersistedState::empty(&BoardConfig::default()));
}

#[test]
fn deserialize_whitespace_is_parse_error() {
    let err = deserialize(Some("  "), &BoardConfig::default()).unwrap_err();
    assert!(matches!(err, BoardError::Parse(_)));
}

#[test]
fn deserialize_keeps_fractional_size() {
    let raw = r#"{"color":"red","size":12.5,"points":[]}"#;
    let state = deserialize(Some(raw), &BoardConfig::default()).unwrap();
    assert_eq!(state.size, 12.5);
}

#[test]
fn deserialize_keeps_negative_size() {
    let raw = r#"{"color":"red","size":-4,"points":[]}"#;
    let state = deserialize(Some(raw), &BoardConfig::default()).unwrap();
    assert_eq!(state.size, -4.0);
}

#[test]
fn deserialize_numeric_point_type_is_move() {
    let raw = r#"{"color":"red","size":10,"points":[{"x":1,"y":2,"size":5,"color":"red","type":3}]}"#;
    let state = deserialize(Some(raw), &BoardConfig::default()).unwrap();
    assert_eq!(state.points.as_slice()[0].kind, PointKind::Move);
}

#[test]
fn serialize_writes_whole_sizes_without_fraction() {
    let mut state = sample_state();
    state.size = 20.0;
    assert!(serialize(&state.view()).unwrap().starts_with(r#"{"color":"blue","size":20,"#));
    state.size = 12.5;
    assert!(serialize(&state.view()).unwrap().starts_with(r#"{"color":"blue","size":12.5,"#));
}
