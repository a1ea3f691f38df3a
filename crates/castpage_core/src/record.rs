//! Persisted theme records
//!
//! A theme row mixes scalar columns with JSON token groups. Token groups may
//! arrive as JSON text (straight from a database column) or as already-parsed
//! objects; both are resolved into parsed maps when the record is built, so
//! nothing downstream has to care which encoding was stored.

use std::fmt::{Display, Formatter};

use rustc_hash::FxHashMap;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::color::Color;
use crate::error::ThemeError;
use crate::format::json_type_name;

/// Flat UI edit buffer keyed by field id
pub type UiState = Map<String, Value>;

/// Page-level attributes (profile image, page name effect, ...)
pub type PageAttributes = Map<String, Value>;

/// Direct (non-JSON) theme columns
pub mod columns {
    pub const PAGE_BACKGROUND: &str = "page_background";
    pub const WIDGET_BACKGROUND: &str = "widget_background";
    pub const WIDGET_BORDER_COLOR: &str = "widget_border_color";
    pub const HEADING_FONT: &str = "heading_font";
    pub const BODY_FONT: &str = "body_font";
}

/// JSON token groups stored on a theme record
#[derive(Clone, Copy, Debug, Hash, Eq, PartialEq, Ord, PartialOrd)]
pub enum TokenGroup {
    Typography,
    WidgetStyles,
    Iconography,
    Spacing,
    Color,
    Shape,
    Motion,
}

impl TokenGroup {
    /// Every group, in column order
    pub const ALL: [TokenGroup; 7] = [
        TokenGroup::Typography,
        TokenGroup::WidgetStyles,
        TokenGroup::Iconography,
        TokenGroup::Spacing,
        TokenGroup::Color,
        TokenGroup::Shape,
        TokenGroup::Motion,
    ];

    /// Database column name
    pub fn column(self) -> &'static str {
        match self {
            Self::Typography => "typography_tokens",
            Self::WidgetStyles => "widget_styles",
            Self::Iconography => "iconography_tokens",
            Self::Spacing => "spacing_tokens",
            Self::Color => "color_tokens",
            Self::Shape => "shape_tokens",
            Self::Motion => "motion_tokens",
        }
    }

    pub fn from_column(name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|g| g.column() == name)
    }
}

impl Display for TokenGroup {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.column())
    }
}

/// A token group as stored: JSON text or an already-parsed object
#[derive(Clone, Debug, PartialEq)]
pub enum RawTokenGroup {
    Raw(String),
    Parsed(Map<String, Value>),
}

impl RawTokenGroup {
    /// Classify a stored column value. `null` means the group is absent.
    pub fn from_value(group: TokenGroup, value: Value) -> Result<Option<Self>, ThemeError> {
        match value {
            Value::Null => Ok(None),
            Value::String(text) => Ok(Some(Self::Raw(text))),
            Value::Object(map) => Ok(Some(Self::Parsed(map))),
            other => Err(ThemeError::GroupNotObject {
                group: group.column(),
                found: json_type_name(&other),
            }),
        }
    }

    /// Resolve into a parsed map. Blank text is treated as an empty group.
    pub fn parse(self, group: TokenGroup) -> Result<Map<String, Value>, ThemeError> {
        match self {
            Self::Parsed(map) => Ok(map),
            Self::Raw(text) if text.trim().is_empty() => Ok(Map::new()),
            Self::Raw(text) => {
                tracing::trace!("parsing string-encoded token group {}", group);
                let value: Value =
                    serde_json::from_str(&text).map_err(|source| ThemeError::MalformedGroup {
                        group: group.column(),
                        source,
                    })?;
                match value {
                    Value::Object(map) => Ok(map),
                    Value::Null => Ok(Map::new()),
                    other => Err(ThemeError::GroupNotObject {
                        group: group.column(),
                        found: json_type_name(&other),
                    }),
                }
            }
        }
    }
}

/// A persisted theme: scalar columns plus parsed token groups
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "Value", into = "Value")]
pub struct ThemeRecord {
    columns: Map<String, Value>,
    groups: FxHashMap<TokenGroup, Map<String, Value>>,
}

impl ThemeRecord {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build from a JSON object, parsing any string-encoded token groups
    pub fn from_value(value: Value) -> Result<Self, ThemeError> {
        let object = match value {
            Value::Object(object) => object,
            other => {
                return Err(ThemeError::NotAnObject {
                    found: json_type_name(&other),
                })
            }
        };

        let mut record = Self::new();
        for (key, value) in object {
            match TokenGroup::from_column(&key) {
                Some(group) => {
                    if let Some(raw) = RawTokenGroup::from_value(group, value)? {
                        record.groups.insert(group, raw.parse(group)?);
                    }
                }
                None if value.is_null() => {}
                None => {
                    record.columns.insert(key, value);
                }
            }
        }
        Ok(record)
    }

    /// Parse a JSON document describing a whole record
    pub fn from_json_str(json: &str) -> Result<Self, ThemeError> {
        Self::from_value(serde_json::from_str(json)?)
    }

    /// Scalar column value (never `null`)
    pub fn column(&self, name: &str) -> Option<&Value> {
        self.columns.get(name).filter(|v| !v.is_null())
    }

    /// Scalar column as a non-empty string
    pub fn column_str(&self, name: &str) -> Option<&str> {
        self.column(name)
            .and_then(Value::as_str)
            .filter(|s| !s.trim().is_empty())
    }

    pub fn columns(&self) -> &Map<String, Value> {
        &self.columns
    }

    /// Parsed token group, if stored
    pub fn group(&self, group: TokenGroup) -> Option<&Map<String, Value>> {
        self.groups.get(&group)
    }

    /// Resolve a dotted sub-path inside a token group
    pub fn token(&self, group: TokenGroup, path: &str) -> Option<&Value> {
        self.group(group).and_then(|map| lookup_path(map, path))
    }

    pub fn set_column(&mut self, name: impl Into<String>, value: Value) {
        self.columns.insert(name.into(), value);
    }

    pub fn set_group(&mut self, group: TokenGroup, tokens: Map<String, Value>) {
        self.groups.insert(group, tokens);
    }

    pub fn with_column(mut self, name: impl Into<String>, value: Value) -> Self {
        self.set_column(name, value);
        self
    }

    pub fn with_group(mut self, group: TokenGroup, tokens: Map<String, Value>) -> Self {
        self.set_group(group, tokens);
        self
    }

    /// Up to `limit` distinct hex colors that characterize this theme,
    /// for preview cards.
    pub fn swatches(&self, limit: usize) -> Vec<Color> {
        let mut candidates: Vec<&Value> = Vec::new();
        for name in [
            columns::PAGE_BACKGROUND,
            columns::WIDGET_BACKGROUND,
            columns::WIDGET_BORDER_COLOR,
        ] {
            candidates.extend(self.column(name));
        }
        if let Some(colors) = self
            .token(TokenGroup::Typography, "color")
            .and_then(Value::as_object)
        {
            candidates.extend(colors.values());
        }
        if let Some(colors) = self.group(TokenGroup::Color) {
            candidates.extend(colors.values());
        }

        let mut swatches: Vec<Color> = Vec::new();
        for color in candidates
            .into_iter()
            .filter_map(Value::as_str)
            .filter_map(first_hex_color)
        {
            if swatches.len() >= limit {
                break;
            }
            if !swatches.contains(&color) {
                swatches.push(color);
            }
        }
        swatches
    }
}

impl TryFrom<Value> for ThemeRecord {
    type Error = ThemeError;

    fn try_from(value: Value) -> Result<Self, Self::Error> {
        Self::from_value(value)
    }
}

impl From<ThemeRecord> for Value {
    fn from(record: ThemeRecord) -> Self {
        let mut object = record.columns;
        // Emit groups in a stable column order
        let mut groups = record.groups;
        for group in TokenGroup::ALL {
            if let Some(tokens) = groups.remove(&group) {
                object.insert(group.column().to_string(), Value::Object(tokens));
            }
        }
        Value::Object(object)
    }
}

/// Walk a dotted path through nested objects.
///
/// Any missing key, `null`, or non-object encountered mid-walk yields `None`.
pub fn lookup_path<'a>(map: &'a Map<String, Value>, path: &str) -> Option<&'a Value> {
    let mut segments = path.split('.');
    let mut current = map.get(segments.next()?)?;
    for segment in segments {
        current = current.as_object()?.get(segment)?;
    }
    (!current.is_null()).then_some(current)
}

/// First hex color in a CSS value (plain color or gradient)
fn first_hex_color(value: &str) -> Option<Color> {
    value.match_indices('#').find_map(|(idx, _)| {
        let tail = &value[idx + 1..];
        let len = tail.chars().take_while(|c| c.is_ascii_hexdigit()).count();
        match len {
            3 | 6 => Color::parse_hex(&tail[..len]),
            _ => None,
        }
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use serde_json::json;

    #[test]
    fn string_and_object_groups_are_equivalent() {
        let text = ThemeRecord::from_value(json!({
            "page_background": "#ffffff",
            "typography_tokens": "{\"color\":{\"heading\":\"#111111\"}}",
        }))
        .unwrap();
        let parsed = ThemeRecord::from_value(json!({
            "page_background": "#ffffff",
            "typography_tokens": {"color": {"heading": "#111111"}},
        }))
        .unwrap();
        assert_eq!(text, parsed);
        assert_eq!(
            text.token(TokenGroup::Typography, "color.heading"),
            Some(&json!("#111111"))
        );
    }

    #[test]
    fn malformed_group_is_an_error() {
        let err = ThemeRecord::from_value(json!({"widget_styles": "{not json"})).unwrap_err();
        assert!(matches!(
            err,
            ThemeError::MalformedGroup {
                group: "widget_styles",
                ..
            }
        ));
    }

    #[test]
    fn non_object_inputs_are_rejected() {
        assert!(matches!(
            ThemeRecord::from_value(json!([1, 2])),
            Err(ThemeError::NotAnObject { found: "array" })
        ));
        assert!(matches!(
            ThemeRecord::from_value(json!({"spacing_tokens": 4})),
            Err(ThemeError::GroupNotObject { .. })
        ));
    }

    #[test]
    fn blank_and_null_groups_are_empty() {
        let record = ThemeRecord::from_value(json!({
            "spacing_tokens": "",
            "shape_tokens": null,
            "name": null,
        }))
        .unwrap();
        assert_eq!(record.group(TokenGroup::Spacing), Some(&Map::new()));
        assert_eq!(record.group(TokenGroup::Shape), None);
        assert_eq!(record.column("name"), None);
    }

    #[test]
    fn lookup_stops_at_non_objects() {
        let map = json!({"a": {"b": 1, "c": null}, "d": "x"});
        let map = map.as_object().unwrap();
        assert_eq!(lookup_path(map, "a.b"), Some(&json!(1)));
        assert_eq!(lookup_path(map, "a.c"), None);
        assert_eq!(lookup_path(map, "a.b.c"), None);
        assert_eq!(lookup_path(map, "d.e"), None);
        assert_eq!(lookup_path(map, "missing"), None);
    }

    #[test]
    fn serializes_groups_as_objects() {
        let record = ThemeRecord::from_value(json!({
            "widget_background": "#fafafa",
            "iconography_tokens": "{\"size\":\"24px\"}",
        }))
        .unwrap();
        let value = serde_json::to_value(&record).unwrap();
        assert_eq!(
            value,
            json!({"widget_background": "#fafafa", "iconography_tokens": {"size": "24px"}})
        );
        let back: ThemeRecord = serde_json::from_value(value).unwrap();
        assert_eq!(back, record);
    }

    #[test]
    fn swatches_pick_distinct_colors() {
        let record = ThemeRecord::from_value(json!({
            "page_background": "linear-gradient(135deg, #ff7e5f 0%, #feb47b 100%)",
            "widget_background": "#ffffff",
            "widget_border_color": "#FFFFFF",
            "typography_tokens": {"color": {"heading": "#1e1e2e", "body": "#45475a"}},
        }))
        .unwrap();
        let hex: Vec<String> = record.swatches(3).iter().map(Color::to_hex).collect();
        assert_eq!(hex, vec!["#ff7e5f", "#ffffff", "#1e1e2e"]);
    }
}
