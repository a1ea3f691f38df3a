//! Per-field value validation

use castpage_core::is_hex_color;
use castpage_registry::{FieldDefinition, FieldType};
use serde_json::Value;

/// Check a value against a field definition.
///
/// A field's own validator replaces the type-based checks entirely.
/// Validation never clamps or rewrites the value.
pub fn validate_value(field: &FieldDefinition, value: &Value) -> bool {
    if let Some(validate) = field.validation {
        return validate(value);
    }

    match field.field_type {
        FieldType::Color => value.as_str().is_some_and(is_hex_color),
        FieldType::Number
        | FieldType::Size
        | FieldType::Spacing
        | FieldType::BorderWidth
        | FieldType::Shadow
        | FieldType::Glow => value.as_f64().is_some_and(|n| within_bounds(field, n)),
        FieldType::Select => value
            .as_str()
            .is_some_and(|s| field.options.iter().any(|o| o == s)),
        FieldType::Font => value.as_str().is_some_and(|s| !s.trim().is_empty()),
        FieldType::Weight => value
            .as_object()
            .is_some_and(|w| w.contains_key("bold") || w.contains_key("italic")),
        FieldType::Gradient
        | FieldType::Image
        | FieldType::Effect
        | FieldType::Toggle => true,
    }
}

fn within_bounds(field: &FieldDefinition, value: f64) -> bool {
    field.min.map_or(true, |min| value >= min) && field.max.map_or(true, |max| value <= max)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn field(field_type: FieldType) -> FieldDefinition {
        FieldDefinition::new("f", "F", field_type, "spacing_tokens.f", "spacing")
    }

    #[test]
    fn colors_need_hex() {
        let color = field(FieldType::Color);
        assert!(validate_value(&color, &json!("#fff")));
        assert!(validate_value(&color, &json!("#A1B2C3")));
        assert!(!validate_value(&color, &json!("fff")));
        assert!(!validate_value(&color, &json!("#ffff")));
        assert!(!validate_value(&color, &json!("red")));
        assert!(!validate_value(&color, &json!(255)));
    }

    #[test]
    fn numbers_respect_bounds() {
        let size = field(FieldType::Size).range(12.0, 24.0);
        assert!(validate_value(&size, &json!(12)));
        assert!(validate_value(&size, &json!(18.5)));
        assert!(!validate_value(&size, &json!(25)));
        assert!(!validate_value(&size, &json!("16")));

        let unbounded = field(FieldType::Glow);
        assert!(validate_value(&unbounded, &json!(-3)));
    }

    #[test]
    fn selects_fonts_and_weights() {
        let select = field(FieldType::Select).options(&["none", "glow"]);
        assert!(validate_value(&select, &json!("glow")));
        assert!(!validate_value(&select, &json!("shadow")));

        let font = field(FieldType::Font);
        assert!(validate_value(&font, &json!("Inter")));
        assert!(!validate_value(&font, &json!("  ")));

        let weight = field(FieldType::Weight);
        assert!(validate_value(&weight, &json!({"bold": true})));
        assert!(validate_value(&weight, &json!({"italic": false})));
        assert!(!validate_value(&weight, &json!({})));
        assert!(!validate_value(&weight, &json!("bold")));
    }

    #[test]
    fn custom_validator_overrides_type_checks() {
        let only_zero = field(FieldType::Color).validation(|v| v == &json!(0));
        assert!(validate_value(&only_zero, &json!(0)));
        assert!(!validate_value(&only_zero, &json!("#fff")));
    }

    #[test]
    fn untyped_fields_accept_anything() {
        assert!(validate_value(&field(FieldType::Toggle), &json!("yes")));
        assert!(validate_value(&field(FieldType::Gradient), &json!(null)));
    }
}
