use std::collections::HashMap;

use super::*;

fn lookup_from(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
    let map: HashMap<String, String> = pairs
        .iter()
        .map(|(k, v)| ((*k).to_owned(), (*v).to_owned()))
        .collect();
    move |key: &str| map.get(key).cloned()
}

#[test]
fn default_matches_stock_panels() {
    let config = BoardConfig::default();
    assert_eq!(config.palette, vec!["black", "green", "blue", "yellow", "brown"]);
    assert_eq!(config.brush_sizes, vec![10, 15, 20]);
    assert_eq!(config.storage_key, "state");
    assert_eq!(config.stroke_policy, StrokePolicy::Permissive);
}

#[test]
fn default_color_and_size_are_first_entries() {
    let config = BoardConfig::default();
    assert_eq!(config.default_color(), "black");
    assert_eq!(config.default_size(), 10);
}

#[test]
fn empty_lookup_yields_defaults() {
    let config = BoardConfig::from_lookup(|_| None).unwrap();
    assert_eq!(config, BoardConfig::default());
}

#[test]
fn lookup_overrides_palette_and_defaults_follow() {
    let config = BoardConfig::from_lookup(lookup_from(&[("palette", " red , #00ff00 ,")])).unwrap();
    assert_eq!(config.palette, vec!["red", "#00ff00"]);
    assert_eq!(config.default_color(), "red");
}

#[test]
fn lookup_overrides_brushes() {
    let config = BoardConfig::from_lookup(lookup_from(&[("brushes", "4,8")])).unwrap();
    assert_eq!(config.brush_sizes, vec![4, 8]);
    assert_eq!(config.default_size(), 4);
}

#[test]
fn lookup_rejects_bad_brush_size() {
    let err = BoardConfig::from_lookup(lookup_from(&[("brushes", "10,big")])).unwrap_err();
    assert!(matches!(err, BoardError::Config(msg) if msg.contains("big")));
}

#[test]
fn lookup_rejects_empty_palette() {
    let err = BoardConfig::from_lookup(lookup_from(&[("palette", " , ")])).unwrap_err();
    assert!(matches!(err, BoardError::Config(_)));
}

#[test]
fn lookup_rejects_empty_storage_key() {
    let err = BoardConfig::from_lookup(lookup_from(&[("storage-key", "  ")])).unwrap_err();
    assert!(matches!(err, BoardError::Config(_)));
}

#[test]
fn lookup_reads_storage_key() {
    let config = BoardConfig::from_lookup(lookup_from(&[("storage-key", "board-2")])).unwrap();
    assert_eq!(config.storage_key, "board-2");
}

#[test]
fn lookup_reads_strict_policy() {
    let config = BoardConfig::from_lookup(lookup_from(&[("stroke-policy", "strict")])).unwrap();
    assert_eq!(config.stroke_policy, StrokePolicy::Strict);
}

#[test]
fn lookup_rejects_unknown_policy() {
    let err = BoardConfig::from_lookup(lookup_from(&[("stroke-policy", "lenient")])).unwrap_err();
    assert!(matches!(err, BoardError::Config(msg) if msg.contains("lenient")));
}
