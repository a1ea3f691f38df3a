//! Built-in preset themes
//!
//! These are the stock themes new pages can start from. They use the same
//! column and token-group vocabulary as stored theme rows, including the
//! color/shape/motion groups that the preview pipeline does not flatten.

use std::fmt::{Display, Formatter};

use castpage_core::{columns, ThemeRecord, TokenGroup};
use serde_json::{json, Map, Value};

/// Built-in preset catalog.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ThemePreset {
    /// Clean white page with slate text.
    Minimal,
    /// Dark navy page with glowing widgets.
    Midnight,
    /// Warm gradient page with a retro title.
    Sunset,
    /// Cream page, typewriter fonts, long-shadow title.
    RetroRadio,
    /// Black page, party title, legacy "pronounced" widget glow.
    Neon,
}

impl ThemePreset {
    /// Stable preset id for config/serialization.
    pub fn id(self) -> &'static str {
        match self {
            Self::Minimal => "minimal",
            Self::Midnight => "midnight",
            Self::Sunset => "sunset",
            Self::RetroRadio => "retro-radio",
            Self::Neon => "neon",
        }
    }

    /// User-facing display name.
    pub fn display_name(self) -> &'static str {
        match self {
            Self::Minimal => "Minimal",
            Self::Midnight => "Midnight",
            Self::Sunset => "Sunset",
            Self::RetroRadio => "Retro Radio",
            Self::Neon => "Neon",
        }
    }

    /// Full preset list.
    pub fn all() -> &'static [ThemePreset] {
        const PRESETS: [ThemePreset; 5] = [
            ThemePreset::Minimal,
            ThemePreset::Midnight,
            ThemePreset::Sunset,
            ThemePreset::RetroRadio,
            ThemePreset::Neon,
        ];
        &PRESETS
    }

    pub fn from_id(id: &str) -> Option<Self> {
        Self::all().iter().copied().find(|p| p.id() == id)
    }

    /// Build the theme record for this preset.
    pub fn record(self) -> ThemeRecord {
        match self {
            Self::Minimal => minimal(),
            Self::Midnight => midnight(),
            Self::Sunset => sunset(),
            Self::RetroRadio => retro_radio(),
            Self::Neon => neon(),
        }
        .with_column("name", Value::from(self.display_name()))
    }
}

impl Display for ThemePreset {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.display_name())
    }
}

fn object(value: Value) -> Map<String, Value> {
    match value {
        Value::Object(map) => map,
        _ => Map::new(),
    }
}

fn shape_tokens(radius: u32) -> Map<String, Value> {
    object(json!({
        "radius": {"sm": radius / 2, "md": radius, "lg": radius * 2},
        "button": "pill",
    }))
}

fn motion_tokens(duration_ms: u32) -> Map<String, Value> {
    object(json!({
        "duration": {"fast": duration_ms / 2, "normal": duration_ms},
        "easing": "ease-out",
    }))
}

fn minimal() -> ThemeRecord {
    ThemeRecord::new()
        .with_column(columns::PAGE_BACKGROUND, json!("#ffffff"))
        .with_column(columns::WIDGET_BACKGROUND, json!("#ffffff"))
        .with_column(columns::WIDGET_BORDER_COLOR, json!("#e2e8f0"))
        .with_column(columns::HEADING_FONT, json!("Inter"))
        .with_column(columns::BODY_FONT, json!("Inter"))
        .with_group(
            TokenGroup::Typography,
            object(json!({
                "font": {"heading": "Inter", "body": "Inter"},
                "color": {"heading": "#0f172a", "body": "#334155"},
                "scale": {"heading": 24, "body": 16},
                "weight": {
                    "heading": {"bold": true, "italic": false},
                    "body": {"bold": false, "italic": false},
                },
                "page_title": {"font": "Inter", "color": "#0f172a", "size": 32},
            })),
        )
        .with_group(
            TokenGroup::WidgetStyles,
            object(json!({
                "border_color": "#e2e8f0",
                "border_width": "1px",
                "border_radius": 12,
                "border_effect": "shadow",
                "shadow_depth": "subtle",
            })),
        )
        .with_group(
            TokenGroup::Iconography,
            object(json!({"color": "#0f172a", "size": "24px", "spacing": "1rem"})),
        )
        .with_group(
            TokenGroup::Spacing,
            object(json!({"page_padding": 24, "widget_gap": 16, "widget_padding": 16})),
        )
        .with_group(
            TokenGroup::Color,
            object(json!({
                "primary": "#0f172a",
                "accent": "#6366f1",
                "podcast_player": {"background": "#0f172a", "text": "#ffffff", "accent": "#6366f1"},
            })),
        )
        .with_group(TokenGroup::Shape, shape_tokens(12))
        .with_group(TokenGroup::Motion, motion_tokens(200))
}

fn midnight() -> ThemeRecord {
    ThemeRecord::new()
        .with_column(columns::PAGE_BACKGROUND, json!("#0f172a"))
        .with_column(columns::WIDGET_BACKGROUND, json!("#1e293b"))
        .with_column(columns::WIDGET_BORDER_COLOR, json!("#334155"))
        .with_column(columns::HEADING_FONT, json!("Poppins"))
        .with_column(columns::BODY_FONT, json!("Inter"))
        .with_group(
            TokenGroup::Typography,
            object(json!({
                "font": {"heading": "Poppins", "body": "Inter"},
                "color": {"heading": "#f8fafc", "body": "#cbd5e1"},
                "scale": {"heading": 26, "body": 16},
                "page_title": {
                    "font": "Poppins",
                    "color": "#e0e7ff",
                    "size": 36,
                    "effect": "glow",
                    "effect_tokens": {"glow_color": "#818cf8", "glow_width": 6},
                },
            })),
        )
        .with_group(
            TokenGroup::WidgetStyles,
            object(json!({
                "border_color": "#334155",
                "border_width": "1px",
                "border_radius": 16,
                "border_effect": "glow",
                "glow_color": "#6366f1",
                "glow_width": 12,
                "glow_intensity": 0.6,
                "text_color": "#f8fafc",
            })),
        )
        .with_group(
            TokenGroup::Iconography,
            object(json!({"color": "#c7d2fe", "size": "28px", "spacing": "1.25rem"})),
        )
        .with_group(
            TokenGroup::Color,
            object(json!({
                "primary": "#6366f1",
                "podcast_player": {"background": "#1e1b4b", "text": "#e0e7ff", "accent": "#818cf8"},
            })),
        )
        .with_group(TokenGroup::Shape, shape_tokens(16))
        .with_group(TokenGroup::Motion, motion_tokens(250))
}

fn sunset() -> ThemeRecord {
    ThemeRecord::new()
        .with_column(
            columns::PAGE_BACKGROUND,
            json!("linear-gradient(135deg, #ff7e5f 0%, #feb47b 100%)"),
        )
        .with_column(columns::WIDGET_BACKGROUND, json!("rgba(255, 255, 255, 0.85)"))
        .with_column(columns::WIDGET_BORDER_COLOR, json!("#ffffff"))
        .with_column(columns::HEADING_FONT, json!("Playfair Display"))
        .with_column(columns::BODY_FONT, json!("Lato"))
        .with_group(
            TokenGroup::Typography,
            object(json!({
                "font": {"heading": "Playfair Display", "body": "Lato"},
                "color": {"heading": "#7c2d12", "body": "#431407"},
                "page_title": {
                    "font": "Playfair Display",
                    "color": "#ffffff",
                    "size": 40,
                    "effect": "retro",
                    "weight": {"bold": true, "italic": true},
                },
            })),
        )
        .with_group(
            TokenGroup::WidgetStyles,
            object(json!({
                "border_color": "#ffffff",
                "border_width": "2px",
                "border_radius": 24,
                "border_effect": "shadow",
                "shadow_depth": "pronounced",
            })),
        )
        .with_group(
            TokenGroup::Spacing,
            object(json!({"page_padding": 32, "widget_gap": 20})),
        )
        .with_group(
            TokenGroup::Color,
            object(json!({"primary": "#ea580c", "secondary": "#fdba74"})),
        )
        .with_group(TokenGroup::Shape, shape_tokens(24))
}

fn retro_radio() -> ThemeRecord {
    ThemeRecord::new()
        .with_column(columns::PAGE_BACKGROUND, json!("#f4e9d8"))
        .with_column(columns::WIDGET_BACKGROUND, json!("#fffaf0"))
        .with_column(columns::WIDGET_BORDER_COLOR, json!("#3d2b1f"))
        .with_column(columns::HEADING_FONT, json!("Courier Prime"))
        .with_column(columns::BODY_FONT, json!("Courier Prime"))
        .with_group(
            TokenGroup::Typography,
            object(json!({
                "font": {"heading": "Courier Prime", "body": "Courier Prime"},
                "color": {"heading": "#3d2b1f", "body": "#5c4033"},
                "page_title": {
                    "font": "Courier Prime",
                    "color": "#c2410c",
                    "size": 44,
                    "effect": "long",
                    "border_width": "2px",
                    "border_color": "#3d2b1f",
                    "effect_tokens": {"shadow_color": "#3d2b1f"},
                },
            })),
        )
        .with_group(
            TokenGroup::WidgetStyles,
            object(json!({
                "border_color": "#3d2b1f",
                "border_width": "3px",
                "border_radius": 0,
                "border_effect": "none",
            })),
        )
        .with_group(
            TokenGroup::Iconography,
            object(json!({"color": "#3d2b1f", "size": "22px", "spacing": "0.75rem", "style": "outline"})),
        )
        .with_group(TokenGroup::Shape, shape_tokens(0))
}

fn neon() -> ThemeRecord {
    ThemeRecord::new()
        .with_column(columns::PAGE_BACKGROUND, json!("#0a0a0a"))
        .with_column(columns::WIDGET_BACKGROUND, json!("#111111"))
        .with_column(columns::WIDGET_BORDER_COLOR, json!("#22d3ee"))
        .with_column(columns::HEADING_FONT, json!("Orbitron"))
        .with_column(columns::BODY_FONT, json!("Rajdhani"))
        .with_group(
            TokenGroup::Typography,
            object(json!({
                "font": {"heading": "Orbitron", "body": "Rajdhani"},
                "color": {"heading": "#f0abfc", "body": "#e5e5e5"},
                "page_title": {"font": "Orbitron", "color": "#f0abfc", "size": 40, "effect": "party"},
            })),
        )
        .with_group(
            TokenGroup::WidgetStyles,
            object(json!({
                "border_color": "#22d3ee",
                "border_width": "2px",
                "border_effect": "glow",
                "glow_color": "#22d3ee",
                "glow_intensity": "pronounced",
            })),
        )
        .with_group(
            TokenGroup::Iconography,
            object(json!({"color": "#22d3ee", "size": "26px", "spacing": "1rem"})),
        )
        .with_group(
            TokenGroup::Color,
            object(json!({
                "primary": "#f0abfc",
                "podcast_player": {"background": "#111111", "text": "#f0abfc", "accent": "#22d3ee"},
            })),
        )
        .with_group(TokenGroup::Motion, motion_tokens(150))
}
