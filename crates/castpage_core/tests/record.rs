use castpage_core::{columns, ThemeError, ThemeRecord, TokenGroup};
use pretty_assertions::assert_eq;
use serde_json::json;

#[test]
fn string_and_object_groups_are_equivalent() {
    let tokens = json!({"font": {"heading": "Inter"}, "scale": {"heading": 24}});
    let parsed = ThemeRecord::from_value(json!({"typography_tokens": tokens.clone()})).unwrap();
    let raw = ThemeRecord::from_value(json!({"typography_tokens": tokens.to_string()})).unwrap();
    assert_eq!(parsed, raw);
    assert_eq!(raw.token(TokenGroup::Typography, "scale.heading"), Some(&json!(24)));
}

#[test]
fn malformed_group_text_is_fatal() {
    let err = ThemeRecord::from_value(json!({"widget_styles": "{not json"})).unwrap_err();
    match err {
        ThemeError::MalformedGroup { group, .. } => assert_eq!(group, "widget_styles"),
        other => panic!("unexpected error: {other}"),
    }
}

#[test]
fn non_object_inputs_are_rejected() {
    assert!(matches!(
        ThemeRecord::from_value(json!([1, 2])),
        Err(ThemeError::NotAnObject { found: "array" })
    ));
    assert!(matches!(
        ThemeRecord::from_value(json!({"spacing_tokens": 4})),
        Err(ThemeError::GroupNotObject { group: "spacing_tokens", found: "number" })
    ));
    assert!(matches!(
        ThemeRecord::from_json_str("{"),
        Err(ThemeError::Json(_))
    ));
}

#[test]
fn blank_and_null_groups_are_empty_or_absent() {
    let record = ThemeRecord::from_value(json!({
        "iconography_tokens": "  ",
        "shape_tokens": null,
        "motion_tokens": "null",
    }))
    .unwrap();
    assert_eq!(record.group(TokenGroup::Iconography).map(|g| g.len()), Some(0));
    assert!(record.group(TokenGroup::Shape).is_none());
    assert_eq!(record.group(TokenGroup::Motion).map(|g| g.len()), Some(0));
}

#[test]
fn serde_round_trip_keeps_extra_columns() {
    let text = r##"{
        "name": "Studio",
        "page_background": "#101820",
        "color_tokens": "{\"primary\":\"#ff0066\"}"
    }"##;
    let record: ThemeRecord = serde_json::from_str(text).unwrap();
    assert_eq!(record.column_str("name"), Some("Studio"));
    assert_eq!(record.column_str(columns::PAGE_BACKGROUND), Some("#101820"));

    let value = serde_json::to_value(&record).unwrap();
    assert_eq!(
        value,
        json!({
            "name": "Studio",
            "page_background": "#101820",
            "color_tokens": {"primary": "#ff0066"},
        })
    );
    let again: ThemeRecord = serde_json::from_value(value).unwrap();
    assert_eq!(again, record);
}

#[test]
fn swatches_skip_duplicates_and_non_colors() {
    let record = ThemeRecord::from_value(json!({
        "page_background": "linear-gradient(135deg, #ff7e5f 0%, #feb47b 100%)",
        "widget_background": "#FF7E5F",
        "widget_border_color": "transparent",
        "color_tokens": {"primary": "#123", "radius": 4},
    }))
    .unwrap();
    let hex: Vec<String> = record.swatches(8).iter().map(|c| c.to_hex()).collect();
    assert_eq!(hex, vec!["#ff7e5f", "#112233"]);
}
