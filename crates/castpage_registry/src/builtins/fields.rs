//! Stock themeable fields

use serde_json::{json, Value};

use super::sections::ids;
use crate::field::{FieldDefinition, FieldType};

/// Page-title effect names accepted by the customizer
pub const PAGE_TITLE_EFFECTS: [&str; 14] = [
    "none",
    "shadow",
    "glow",
    "retro",
    "anaglyphic",
    "elegant",
    "deep",
    "game",
    "comic",
    "fancy",
    "pretty",
    "flat",
    "long",
    "party",
];

fn is_page_title_effect(value: &Value) -> bool {
    value
        .as_str()
        .map(|name| PAGE_TITLE_EFFECTS.contains(&name))
        .unwrap_or(false)
}

fn field(
    id: &str,
    label: &str,
    field_type: FieldType,
    token_path: &str,
    section: &str,
) -> FieldDefinition {
    FieldDefinition::new(id, label, field_type, token_path, section)
}

pub fn fields() -> Vec<FieldDefinition> {
    let mut fields = Vec::with_capacity(64);
    fields.extend(page_background());
    fields.extend(typography());
    fields.extend(page_title());
    fields.extend(profile_image());
    fields.extend(widgets());
    fields.extend(social_icons());
    fields.extend(spacing());
    fields.extend(podcast_player());
    fields
}

fn page_background() -> Vec<FieldDefinition> {
    use FieldType::*;
    let s = ids::PAGE_BACKGROUND;
    vec![
        field("page-background", "Background", Gradient, "page_background", s)
            .default_value("#ffffff")
            .implemented(),
        // No upload surface yet
        field("page-background-image", "Background Image", Image, "page_background_image", s)
            .default_value(""),
    ]
}

fn typography() -> Vec<FieldDefinition> {
    use FieldType::*;
    let s = ids::TYPOGRAPHY;
    vec![
        field("heading-font", "Heading Font", Font, "typography_tokens.font.heading", s)
            .default_value("Inter")
            .implemented(),
        field("body-font", "Body Font", Font, "typography_tokens.font.body", s)
            .default_value("Inter")
            .implemented(),
        field("heading-color", "Heading Color", Color, "typography_tokens.color.heading", s)
            .default_value("#0f172a")
            .implemented(),
        field("body-color", "Body Color", Color, "typography_tokens.color.body", s)
            .default_value("#334155")
            .implemented(),
        field("heading-size", "Heading Size", Size, "typography_tokens.scale.heading", s)
            .default_value(24)
            .range(16.0, 48.0)
            .step(1.0)
            .unit("px")
            .implemented(),
        field("body-size", "Body Size", Size, "typography_tokens.scale.body", s)
            .default_value(16)
            .range(12.0, 24.0)
            .step(1.0)
            .unit("px")
            .implemented(),
        field("heading-weight", "Heading Style", Weight, "typography_tokens.weight.heading", s)
            .default_value(json!({"bold": true, "italic": false}))
            .implemented(),
        field("body-weight", "Body Style", Weight, "typography_tokens.weight.body", s)
            .default_value(json!({"bold": false, "italic": false}))
            .implemented(),
        field("line-height", "Line Height", Number, "typography_tokens.scale.line_height", s)
            .default_value(1.5)
            .range(1.0, 2.5)
            .step(0.05),
    ]
}

fn page_title() -> Vec<FieldDefinition> {
    use FieldType::*;
    let s = ids::PAGE_TITLE;
    vec![
        field("page-title-font", "Title Font", Font, "typography_tokens.page_title.font", s)
            .default_value("Inter")
            .implemented(),
        field("page-title-color", "Title Color", Color, "typography_tokens.page_title.color", s)
            .default_value("#0f172a")
            .implemented(),
        field("page-title-size", "Title Size", Size, "typography_tokens.page_title.size", s)
            .default_value(32)
            .range(20.0, 72.0)
            .step(1.0)
            .unit("px")
            .implemented(),
        field("page-title-weight", "Title Style", Weight, "typography_tokens.page_title.weight", s)
            .default_value(json!({"bold": true, "italic": false}))
            .implemented(),
        field("page-title-uppercase", "Uppercase", Toggle, "typography_tokens.page_title.uppercase", s)
            .default_value(false)
            .implemented(),
        field("page-title-effect", "Title Effect", Effect, "page.page_name_effect", s)
            .default_value("none")
            .options(&PAGE_TITLE_EFFECTS)
            .validation(is_page_title_effect)
            .implemented(),
        field(
            "page-title-border-width",
            "Outline Width",
            BorderWidth,
            "typography_tokens.page_title.border_width",
            s,
        )
        .default_value(0)
        .range(0.0, 8.0)
        .step(0.5)
        .unit("px")
        .implemented(),
        field(
            "page-title-border-color",
            "Outline Color",
            Color,
            "typography_tokens.page_title.border_color",
            s,
        )
        .default_value("#000000")
        .implemented(),
        field(
            "page-title-shadow-color",
            "Shadow Color",
            Color,
            "typography_tokens.page_title.effect_tokens.shadow_color",
            s,
        )
        .default_value("#000000")
        .implemented(),
        field(
            "page-title-shadow-depth",
            "Shadow Depth",
            Shadow,
            "typography_tokens.page_title.effect_tokens.depth",
            s,
        )
        .default_value(4)
        .range(0.0, 20.0)
        .unit("px")
        .implemented(),
        field(
            "page-title-shadow-blur",
            "Shadow Blur",
            Shadow,
            "typography_tokens.page_title.effect_tokens.blur",
            s,
        )
        .default_value(4)
        .range(0.0, 40.0)
        .unit("px")
        .implemented(),
        field(
            "page-title-shadow-intensity",
            "Shadow Intensity",
            Number,
            "typography_tokens.page_title.effect_tokens.intensity",
            s,
        )
        .default_value(0.5)
        .range(0.0, 1.0)
        .step(0.05)
        .implemented(),
        field(
            "page-title-glow-color",
            "Glow Color",
            Color,
            "typography_tokens.page_title.effect_tokens.glow_color",
            s,
        )
        .default_value("#ffffff")
        .implemented(),
        field(
            "page-title-glow-width",
            "Glow Width",
            Glow,
            "typography_tokens.page_title.effect_tokens.glow_width",
            s,
        )
        .default_value(6)
        .range(0.0, 30.0)
        .unit("px")
        .implemented(),
    ]
}

fn profile_image() -> Vec<FieldDefinition> {
    use FieldType::*;
    let s = ids::PROFILE_IMAGE;
    vec![
        field("profile-image-size", "Image Size", Number, "page.profile_image_size", s)
            .default_value(120)
            .range(64.0, 200.0)
            .step(4.0)
            .unit("px")
            .implemented(),
        field("profile-image-radius", "Corner Radius", Number, "page.profile_image_radius", s)
            .default_value(50)
            .range(0.0, 50.0)
            .unit("%")
            .implemented(),
        field("profile-image-effect", "Image Effect", Select, "page.profile_image_effect", s)
            .default_value("none")
            .options(&["none", "shadow", "glow"])
            .implemented(),
        field(
            "profile-image-shadow-color",
            "Shadow Color",
            Color,
            "page.profile_image_shadow_color",
            s,
        )
        .default_value("#000000")
        .implemented(),
        field(
            "profile-image-shadow-intensity",
            "Shadow Intensity",
            Number,
            "page.profile_image_shadow_intensity",
            s,
        )
        .default_value(0.5)
        .range(0.0, 1.0)
        .step(0.05)
        .implemented(),
        field(
            "profile-image-shadow-depth",
            "Shadow Depth",
            Shadow,
            "page.profile_image_shadow_depth",
            s,
        )
        .default_value(4)
        .range(0.0, 20.0)
        .unit("px")
        .implemented(),
        field(
            "profile-image-shadow-blur",
            "Shadow Blur",
            Shadow,
            "page.profile_image_shadow_blur",
            s,
        )
        .default_value(12)
        .range(0.0, 40.0)
        .unit("px")
        .implemented(),
        field("profile-image-glow-color", "Glow Color", Color, "page.profile_image_glow_color", s)
            .default_value("#ffffff")
            .implemented(),
        field("profile-image-glow-width", "Glow Width", Glow, "page.profile_image_glow_width", s)
            .default_value(8)
            .range(0.0, 30.0)
            .unit("px")
            .implemented(),
        field(
            "profile-image-border-color",
            "Border Color",
            Color,
            "page.profile_image_border_color",
            s,
        )
        .default_value("#ffffff"),
        field(
            "profile-image-border-width",
            "Border Width",
            BorderWidth,
            "page.profile_image_border_width",
            s,
        )
        .default_value(0)
        .range(0.0, 8.0)
        .unit("px"),
    ]
}

fn widgets() -> Vec<FieldDefinition> {
    use FieldType::*;
    let s = ids::WIDGETS;
    vec![
        field("widget-background", "Widget Background", Gradient, "widget_background", s)
            .default_value("#ffffff")
            .implemented(),
        field("widget-border-color", "Border Color", Color, "widget_styles.border_color", s)
            .default_value("#e2e8f0")
            .implemented(),
        field("widget-border-width", "Border Width", BorderWidth, "widget_styles.border_width", s)
            .default_value(1)
            .range(0.0, 8.0)
            .step(0.5)
            .unit("px")
            .implemented(),
        field("widget-border-radius", "Corner Radius", Number, "widget_styles.border_radius", s)
            .default_value(12)
            .range(0.0, 32.0)
            .unit("px")
            .implemented(),
        field("widget-text-color", "Text Color", Color, "widget_styles.text_color", s)
            .default_value("#0f172a")
            .implemented(),
        field("widget-border-effect", "Border Effect", Select, "widget_styles.border_effect", s)
            .default_value("shadow")
            .options(&["none", "shadow", "glow"])
            .implemented(),
        field("widget-shadow-depth", "Shadow Depth", Select, "widget_styles.shadow_depth", s)
            .default_value("medium")
            .options(&["subtle", "medium", "pronounced"])
            .implemented(),
        field("widget-glow-color", "Glow Color", Color, "widget_styles.glow_color", s)
            .default_value("#7c3aed")
            .implemented(),
        field("widget-glow-width", "Glow Width", Glow, "widget_styles.glow_width", s)
            .default_value(10)
            .range(0.0, 40.0)
            .unit("px")
            .implemented(),
        field(
            "widget-glow-intensity",
            "Glow Intensity",
            Number,
            "widget_styles.glow_intensity",
            s,
        )
        .default_value(0.5)
        .range(0.0, 1.0)
        .step(0.05)
        .implemented(),
    ]
}

fn social_icons() -> Vec<FieldDefinition> {
    use FieldType::*;
    let s = ids::SOCIAL_ICONS;
    vec![
        field("social-icon-color", "Icon Color", Color, "iconography_tokens.color", s)
            .default_value("#0f172a")
            .implemented(),
        field("social-icon-size", "Icon Size", Number, "iconography_tokens.size", s)
            .default_value(24)
            .range(16.0, 48.0)
            .step(2.0)
            .unit("px")
            .implemented(),
        field("social-icon-spacing", "Icon Spacing", Number, "iconography_tokens.spacing", s)
            .default_value(1)
            .range(0.25, 3.0)
            .step(0.25)
            .unit("rem")
            .implemented(),
        // Stored by seed data; not shown in the section yet
        field("social-icon-style", "Icon Style", Select, "iconography_tokens.style", s)
            .default_value("filled")
            .options(&["filled", "outline", "monochrome"]),
    ]
}

fn spacing() -> Vec<FieldDefinition> {
    use FieldType::*;
    let s = ids::SPACING;
    vec![
        field("page-padding", "Page Padding", Spacing, "spacing_tokens.page_padding", s)
            .default_value(24)
            .range(0.0, 64.0)
            .unit("px")
            .implemented(),
        field("widget-gap", "Widget Gap", Spacing, "spacing_tokens.widget_gap", s)
            .default_value(16)
            .range(0.0, 48.0)
            .unit("px")
            .implemented(),
        field("widget-padding", "Widget Padding", Spacing, "spacing_tokens.widget_padding", s)
            .default_value(16)
            .range(0.0, 48.0)
            .unit("px")
            .implemented(),
        field("section-gap", "Section Gap", Spacing, "spacing_tokens.section_gap", s)
            .default_value(32)
            .range(0.0, 96.0)
            .unit("px"),
    ]
}

fn podcast_player() -> Vec<FieldDefinition> {
    use FieldType::*;
    let s = ids::PODCAST_PLAYER;
    vec![
        field("podcast-player-background", "Player Background", Color, "podcast_player.background", s)
            .default_value("#0f172a")
            .implemented(),
        field("podcast-player-text", "Player Text", Color, "podcast_player.text", s)
            .default_value("#ffffff")
            .implemented(),
        field("podcast-player-accent", "Player Accent", Color, "podcast_player.accent", s)
            .default_value("#7c3aed")
            .implemented(),
        field("podcast-player-progress", "Progress Bar", Color, "podcast_player.progress", s)
            .default_value("#a78bfa"),
    ]
}
