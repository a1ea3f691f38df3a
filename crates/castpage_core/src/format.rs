//! CSS value formatting helpers
//!
//! Every numeric value that reaches a stylesheet goes through
//! [`format_number`] so repeated renders of the same input produce
//! byte-identical strings.

use serde_json::Value;

/// Round to three decimals and print without trailing zeros (`2.0` -> `2`).
pub fn format_number(value: f64) -> String {
    if !value.is_finite() {
        return "0".to_string();
    }
    let rounded = (value * 1000.0).round() / 1000.0;
    // Avoid printing "-0"
    if rounded == 0.0 {
        return "0".to_string();
    }
    format!("{rounded}")
}

/// Format a number as a pixel length (`12` -> `12px`).
pub fn px(value: f64) -> String {
    format!("{}px", format_number(value))
}

/// Format a number with an arbitrary CSS unit suffix.
pub fn with_unit(value: f64, unit: &str) -> String {
    format!("{}{}", format_number(value), unit)
}

/// Wrap a font family in quotes with a generic fallback.
///
/// Names that already carry a fallback stack (contain a comma) are kept as-is.
pub fn font_stack(name: &str) -> String {
    let trimmed = name.trim();
    if trimmed.contains(',') {
        return trimmed.to_string();
    }
    let unquoted = trimmed.trim_matches(|c| c == '"' || c == '\'');
    format!("\"{unquoted}\", sans-serif")
}

/// Render a JSON scalar as a CSS length: numbers get `px`, strings pass through.
pub fn length_value(value: &Value) -> Option<String> {
    match value {
        Value::Number(n) => n.as_f64().map(px),
        Value::String(s) if !s.trim().is_empty() => {
            let s = s.trim();
            // Bare numeric strings ("12") are lengths in pixels as well
            match s.parse::<f64>() {
                Ok(n) => Some(px(n)),
                Err(_) => Some(s.to_string()),
            }
        }
        _ => None,
    }
}

/// Render a JSON scalar as a plain CSS value.
pub fn plain_value(value: &Value) -> Option<String> {
    match value {
        Value::String(s) => Some(s.clone()),
        Value::Number(n) => n.as_f64().map(format_number),
        Value::Bool(b) => Some(b.to_string()),
        _ => None,
    }
}

/// Read a JSON value as `f64`, accepting numeric strings.
pub fn as_number(value: &Value) -> Option<f64> {
    match value {
        Value::Number(n) => n.as_f64(),
        Value::String(s) => s.trim().parse::<f64>().ok().filter(|n| n.is_finite()),
        _ => None,
    }
}

/// Short type name used in diagnostics.
pub fn json_type_name(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}
