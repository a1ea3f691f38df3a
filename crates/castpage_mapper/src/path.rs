//! Token path classification and resolution
//!
//! Both mapping directions agree on how a field's `token_path` addresses
//! stored data; this module is that agreement.

use castpage_core::{columns, lookup_path, ThemeRecord, TokenGroup};
use castpage_registry::PAGE_PREFIX;
use serde_json::{Map, Value};

/// Path prefix for podcast player colors, stored under `color_tokens.podcast_player`
pub const PODCAST_PLAYER_PREFIX: &str = "podcast_player.";

/// Nested key of the podcast player palette inside `color_tokens`
pub const PODCAST_PLAYER_KEY: &str = "podcast_player";

/// Token path of the widget border color, mirrored into its own column
pub const WIDGET_BORDER_COLOR_PATH: &str = "widget_styles.border_color";

/// Groups that UI edits are written back into
pub const WRITABLE_GROUPS: [TokenGroup; 4] = [
    TokenGroup::Typography,
    TokenGroup::WidgetStyles,
    TokenGroup::Iconography,
    TokenGroup::Spacing,
];

/// Where a field's value lives
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TokenPath<'a> {
    /// Page-level attribute, persisted outside the theme
    Page(&'a str),
    PageBackground,
    WidgetBackground,
    /// `widget_border_color` column with `widget_styles.border_color` fallback
    WidgetBorderColor,
    /// Dotted path inside a token group
    Group { group: TokenGroup, path: &'a str },
    /// Nested under `color_tokens.podcast_player`
    PodcastPlayer(&'a str),
    /// Any other column or dotted path; read-only
    Other(&'a str),
}

impl<'a> TokenPath<'a> {
    pub fn parse(path: &'a str) -> Self {
        if let Some(attr) = path.strip_prefix(PAGE_PREFIX) {
            return Self::Page(attr);
        }
        match path {
            columns::PAGE_BACKGROUND => return Self::PageBackground,
            columns::WIDGET_BACKGROUND => return Self::WidgetBackground,
            WIDGET_BORDER_COLOR_PATH => return Self::WidgetBorderColor,
            _ => {}
        }
        if let Some(rest) = path.strip_prefix(PODCAST_PLAYER_PREFIX) {
            return Self::PodcastPlayer(rest);
        }
        if let Some((head, rest)) = path.split_once('.') {
            if let Some(group) = TokenGroup::from_column(head) {
                return Self::Group { group, path: rest };
            }
        }
        Self::Other(path)
    }

    /// Whether UI edits at this path are persisted by the mapper
    pub fn is_writable(&self) -> bool {
        match self {
            Self::PageBackground
            | Self::WidgetBackground
            | Self::WidgetBorderColor
            | Self::PodcastPlayer(_) => true,
            Self::Group { group, .. } => WRITABLE_GROUPS.contains(group),
            Self::Page(_) | Self::Other(_) => false,
        }
    }
}

/// Resolve a token path against a theme record.
///
/// Page paths never resolve here; callers read those from page attributes.
pub fn resolve_path<'t>(theme: &'t ThemeRecord, path: &str) -> Option<&'t Value> {
    match TokenPath::parse(path) {
        TokenPath::Page(_) => None,
        TokenPath::PageBackground => theme.column(columns::PAGE_BACKGROUND),
        TokenPath::WidgetBackground => theme.column(columns::WIDGET_BACKGROUND),
        TokenPath::WidgetBorderColor => theme
            .column(columns::WIDGET_BORDER_COLOR)
            .or_else(|| theme.token(TokenGroup::WidgetStyles, "border_color")),
        TokenPath::Group { group, path } => theme.token(group, path),
        TokenPath::PodcastPlayer(path) => theme
            .token(TokenGroup::Color, PODCAST_PLAYER_KEY)
            .and_then(Value::as_object)
            .and_then(|player| lookup_path(player, path)),
        TokenPath::Other(path) => lookup_path(theme.columns(), path),
    }
}

/// Set a value at a dotted path, creating intermediate objects.
///
/// A non-object found mid-path is replaced by an object.
pub fn set_path(map: &mut Map<String, Value>, path: &str, value: Value) {
    match path.split_once('.') {
        None => {
            map.insert(path.to_string(), value);
        }
        Some((head, rest)) => {
            let slot = map
                .entry(head.to_string())
                .or_insert_with(|| Value::Object(Map::new()));
            if !slot.is_object() {
                *slot = Value::Object(Map::new());
            }
            if let Value::Object(child) = slot {
                set_path(child, rest, value);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use serde_json::json;

    #[test]
    fn classifies_paths() {
        assert_eq!(
            TokenPath::parse("page.profile_image_size"),
            TokenPath::Page("profile_image_size")
        );
        assert_eq!(TokenPath::parse("page_background"), TokenPath::PageBackground);
        assert_eq!(
            TokenPath::parse("widget_styles.border_color"),
            TokenPath::WidgetBorderColor
        );
        assert_eq!(
            TokenPath::parse("typography_tokens.color.heading"),
            TokenPath::Group {
                group: TokenGroup::Typography,
                path: "color.heading"
            }
        );
        assert_eq!(
            TokenPath::parse("podcast_player.accent"),
            TokenPath::PodcastPlayer("accent")
        );
        assert_eq!(TokenPath::parse("heading_font"), TokenPath::Other("heading_font"));
        assert!(!TokenPath::parse("color_tokens.primary").is_writable());
        assert!(TokenPath::parse("spacing_tokens.page_padding").is_writable());
    }

    #[test]
    fn border_color_prefers_the_column() {
        let both = ThemeRecord::from_value(json!({
            "widget_border_color": "#111111",
            "widget_styles": {"border_color": "#222222"},
        }))
        .unwrap();
        assert_eq!(
            resolve_path(&both, WIDGET_BORDER_COLOR_PATH),
            Some(&json!("#111111"))
        );

        let nested_only = ThemeRecord::from_value(json!({
            "widget_styles": "{\"border_color\":\"#222222\"}",
        }))
        .unwrap();
        assert_eq!(
            resolve_path(&nested_only, WIDGET_BORDER_COLOR_PATH),
            Some(&json!("#222222"))
        );
    }

    #[test]
    fn podcast_player_reads_color_tokens() {
        let theme = ThemeRecord::from_value(json!({
            "color_tokens": {"podcast_player": {"accent": "#7c3aed"}},
        }))
        .unwrap();
        assert_eq!(
            resolve_path(&theme, "podcast_player.accent"),
            Some(&json!("#7c3aed"))
        );
        assert_eq!(resolve_path(&theme, "podcast_player.text"), None);
    }

    #[test]
    fn page_paths_and_missing_groups_do_not_resolve() {
        let theme = ThemeRecord::from_value(json!({"heading_font": "Lora"})).unwrap();
        assert_eq!(resolve_path(&theme, "page.page_name_effect"), None);
        assert_eq!(resolve_path(&theme, "typography_tokens.font.heading"), None);
        assert_eq!(resolve_path(&theme, "heading_font"), Some(&json!("Lora")));
        assert_eq!(resolve_path(&theme, "heading_font.size"), None);
    }

    #[test]
    fn set_path_builds_nested_objects() {
        let mut map = Map::new();
        set_path(&mut map, "font.heading", json!("Inter"));
        set_path(&mut map, "font.body", json!("Lato"));
        set_path(&mut map, "size", json!(3));
        set_path(&mut map, "size.inner", json!(4));
        assert_eq!(
            Value::Object(map),
            json!({"font": {"heading": "Inter", "body": "Lato"}, "size": {"inner": 4}})
        );
    }
}
