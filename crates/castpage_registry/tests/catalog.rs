use castpage_registry::{section_ids, FieldType, ThemeCatalog, PAGE_TITLE_EFFECTS};
use pretty_assertions::assert_eq;
use std::collections::HashSet;

fn ids(fields: &[&castpage_registry::FieldDefinition]) -> Vec<String> {
    fields.iter().map(|f| f.id.clone()).collect()
}

#[test]
fn social_icons_section_keeps_listed_order() {
    let catalog = ThemeCatalog::builtin();
    assert_eq!(
        ids(&catalog.section_fields(section_ids::SOCIAL_ICONS)),
        vec!["social-icon-color", "social-icon-size", "social-icon-spacing"]
    );
}

#[test]
fn field_registry_section_lookup_is_sorted_and_complete() {
    let catalog = ThemeCatalog::builtin();
    // The registry path also sees fields the section doesn't list yet
    assert_eq!(
        ids(&catalog.fields().fields_for_section(section_ids::SOCIAL_ICONS)),
        vec![
            "social-icon-color",
            "social-icon-size",
            "social-icon-spacing",
            "social-icon-style",
        ]
    );
}

#[test]
fn sections_are_in_display_order() {
    let catalog = ThemeCatalog::builtin();
    let order: Vec<&str> = catalog
        .sections()
        .all_sections()
        .iter()
        .map(|s| s.id.as_str())
        .collect();
    assert_eq!(
        order,
        vec![
            "page-background",
            "typography",
            "page-title",
            "profile-image",
            "widgets",
            "social-icons",
            "spacing",
            "podcast-player",
        ]
    );
}

#[test]
fn every_listed_field_exists_in_its_section() {
    let catalog = ThemeCatalog::builtin();
    for section in catalog.sections().all_sections() {
        for field_id in &section.fields {
            let field = catalog
                .field(field_id)
                .unwrap_or_else(|| panic!("{} lists unknown field {field_id}", section.id));
            assert_eq!(field.section, section.id, "{field_id}");
        }
    }
}

#[test]
fn every_field_belongs_to_a_known_section() {
    let catalog = ThemeCatalog::builtin();
    let sections: HashSet<&str> = catalog
        .sections()
        .all_sections()
        .iter()
        .map(|s| s.id.as_str())
        .collect();
    for field in catalog.fields().iter() {
        assert!(sections.contains(field.section.as_str()), "{}", field.id);
        assert!(!field.default_value.is_null(), "{} has no default", field.id);
    }
}

#[test]
fn numeric_defaults_respect_bounds() {
    let catalog = ThemeCatalog::builtin();
    for field in catalog.fields().iter().filter(|f| f.field_type.is_numeric()) {
        let value = field.default_value.as_f64().expect("numeric default");
        if let Some(min) = field.min {
            assert!(value >= min, "{} below min", field.id);
        }
        if let Some(max) = field.max {
            assert!(value <= max, "{} above max", field.id);
        }
    }
}

#[test]
fn deferred_fields_are_not_implemented() {
    let catalog = ThemeCatalog::builtin();
    for id in ["page-background-image", "line-height", "social-icon-style", "section-gap"] {
        assert!(catalog.field(id).is_some(), "{id}");
        assert!(!catalog.fields().is_implemented(id), "{id}");
    }
    assert!(catalog.fields().is_implemented("page-title-effect"));
}

#[test]
fn effect_field_validates_with_its_own_predicate() {
    let catalog = ThemeCatalog::builtin();
    let field = catalog.field("page-title-effect").unwrap();
    assert_eq!(field.field_type, FieldType::Effect);
    let validate = field.validation.expect("custom validator");
    for name in PAGE_TITLE_EFFECTS {
        assert!(validate(&serde_json::json!(name)), "{name}");
    }
    assert!(!validate(&serde_json::json!("sparkle")));
    assert!(!validate(&serde_json::json!(3)));
}
