use castpage_core::{ThemeRecord, UiState};
use castpage_preview::{CssVariables, PreviewRenderer, StyleTarget};
use castpage_registry::ThemePreset;
use pretty_assertions::assert_eq;
use serde_json::{json, Value};

fn ui(value: Value) -> UiState {
    value.as_object().cloned().unwrap()
}

#[test]
fn game_effect_recolors_and_stacks_four_shadows() {
    let renderer = PreviewRenderer::builtin();
    let state = ui(json!({"page-title-effect": "game"}));
    let vars = renderer.generate_css_variables(&ThemeRecord::new(), Some(&state), None);

    assert_eq!(vars.get("--page-title-color"), Some("#ffffff"));
    assert_eq!(vars.get("--page-title-effect-class"), Some("page-title-effect-game"));
    let shadow = vars.get("--page-title-text-shadow").unwrap();
    let terms: Vec<&str> = shadow.split(", ").collect();
    assert_eq!(terms.len(), 4);
    assert!(terms[0].ends_with("#ffd217"));
    assert!(terms[1].ends_with("#5ac7ff"));
}

#[test]
fn border_ring_is_listed_before_the_effect() {
    let renderer = PreviewRenderer::builtin();
    let state = ui(json!({
        "page-title-effect": "game",
        "page-title-border-width": 2,
        "page-title-border-color": "#000000",
    }));
    let vars = renderer.generate_css_variables(&ThemeRecord::new(), Some(&state), None);
    let terms: Vec<&str> = vars
        .get("--page-title-text-shadow")
        .unwrap()
        .split(", ")
        .collect();
    assert_eq!(terms.len(), 24 + 4);
    assert_eq!(terms[0], "2px 0 0 #000000");
    assert_eq!(terms[24], "5px 5px 0 #ffd217");
}

#[test]
fn widget_glow_uses_explicit_width() {
    let theme = ThemeRecord::from_value(json!({
        "widget_styles": {
            "border_effect": "glow",
            "glow_width": 10,
            "glow_intensity": 0.5,
        },
    }))
    .unwrap();
    let vars = PreviewRenderer::builtin().generate_css_variables(&theme, None, None);
    assert_eq!(
        vars.get("--widget-glow-box-shadow"),
        Some("0 0 10px 5px rgba(124, 58, 237, 0.55)")
    );
    assert_eq!(vars.get("--widget-box-shadow"), vars.get("--widget-glow-box-shadow"));
}

#[test]
fn gradient_backgrounds_use_the_neutral_fallback() {
    let theme = ThemePreset::Sunset.record();
    let vars = PreviewRenderer::builtin().generate_css_variables(&theme, None, None);
    assert_eq!(vars.get("--page-title-effect-class"), Some("page-title-effect-retro"));
    assert_eq!(
        vars.get("--page-title-text-shadow"),
        Some("3px 3px 0 #f5f5f5, 6px 6px 0 #363636")
    );
    assert!(vars.get("--page-background").unwrap().contains("gradient"));
}

#[test]
fn ui_edits_override_stored_tokens() {
    let theme = ThemePreset::Midnight.record();
    let state = ui(json!({
        "heading-color": "#ff0000",
        "widget-border-width": 4,
        "podcast-player-accent": "#00ff00",
    }));
    let renderer = PreviewRenderer::builtin();
    let stored = renderer.generate_css_variables(&theme, None, None);
    let edited = renderer.generate_css_variables(&theme, Some(&state), None);

    assert_eq!(stored.get("--heading-color"), Some("#f8fafc"));
    assert_eq!(edited.get("--heading-color"), Some("#ff0000"));
    assert_eq!(stored.get("--widget-border-width"), Some("1px"));
    assert_eq!(edited.get("--widget-border-width"), Some("4px"));
    assert_eq!(stored.get("--podcast-player-accent"), Some("#818cf8"));
    assert_eq!(edited.get("--podcast-player-accent"), Some("#00ff00"));
}

#[test]
fn page_attributes_feed_profile_and_title() {
    let page = ui(json!({
        "page_name_effect": "anaglyphic",
        "profile_image_size": 150,
        "profile_image_effect": "shadow",
    }));
    let state = UiState::new();
    let vars = PreviewRenderer::builtin().generate_css_variables(
        &ThemeRecord::new(),
        Some(&state),
        Some(&page),
    );
    assert_eq!(vars.get("--page-title-color"), Some("rgba(128, 0, 255, 0.5)"));
    assert_eq!(vars.get("--profile-image-size"), Some("150px"));
    assert_eq!(
        vars.get("--profile-image-box-shadow"),
        Some("4px 4px 12px rgba(0, 0, 0, 0.5)")
    );
}

#[test]
fn rendering_is_idempotent() {
    let renderer = PreviewRenderer::builtin();
    for preset in ThemePreset::all() {
        let theme = preset.record();
        let state = ui(json!({"page-title-effect": "party", "widget-glow-width": 6}));
        let first = renderer.generate_css_variables(&theme, Some(&state), None);
        let second = renderer.generate_css_variables(&theme, Some(&state), None);
        assert_eq!(first, second, "{preset}");
        assert_eq!(first.to_style_string(), second.to_style_string());
    }
}

#[test]
fn every_preset_renders_the_core_variables() {
    let renderer = PreviewRenderer::builtin();
    for preset in ThemePreset::all() {
        let vars = renderer.generate_css_variables(&preset.record(), None, None);
        for name in [
            "--page-background",
            "--heading-font",
            "--page-title-text-shadow",
            "--widget-box-shadow",
            "--social-icon-size",
        ] {
            assert!(vars.contains(name), "{preset} is missing {name}");
        }
    }
}

#[derive(Default)]
struct RecordingStyle(Vec<String>);

impl StyleTarget for RecordingStyle {
    fn set_property(&mut self, name: &str, value: &str) {
        self.0.push(format!("{name}={value}"));
    }
}

#[test]
fn variables_apply_to_custom_targets() {
    let mut vars = CssVariables::new();
    vars.set("--a", "1");
    vars.set("--b", "2px");
    let mut style = RecordingStyle::default();
    vars.apply_to(&mut style);
    assert_eq!(style.0, vec!["--a=1", "--b=2px"]);
    assert_eq!(vars.to_style_string(), "--a: 1; --b: 2px;");
}

#[test]
fn party_offsets_step_by_half_units() {
    let state = ui(json!({"page-title-effect": "party", "page-title-size": 32}));
    let vars =
        PreviewRenderer::builtin().generate_css_variables(&ThemeRecord::new(), Some(&state), None);
    let terms: Vec<&str> = vars
        .get("--page-title-text-shadow")
        .unwrap()
        .split(", ")
        .collect();
    assert_eq!(terms.len(), 9);
    assert!(terms[0].starts_with("1px 1px 0 "));
    assert!(terms[8].starts_with("9px 9px 0 "));
}

#[test]
fn title_glow_repeats_the_base_width() {
    let state = ui(json!({
        "page-title-effect": "glow",
        "page-title-glow-width": 10,
        "page-title-glow-color": "#ffffff",
    }));
    let vars =
        PreviewRenderer::builtin().generate_css_variables(&ThemeRecord::new(), Some(&state), None);
    let color = "rgba(255, 255, 255, 0.8)";
    let expected = [10, 10, 20, 30, 40]
        .iter()
        .map(|blur| format!("0 0 {blur}px {color}"))
        .collect::<Vec<_>>()
        .join(", ");
    assert_eq!(vars.get("--page-title-text-shadow"), Some(expected.as_str()));
}
