//! Preview renderer
//!
//! [`PreviewRenderer::generate_css_variables`] turns a stored theme, the
//! in-progress UI state and the page attributes into a flat map of CSS custom
//! properties. It is a pure function of its inputs; nothing is cached between
//! calls.

use castpage_core::format::{as_number, font_stack, format_number, length_value, plain_value};
use castpage_core::{columns, hex_to_rgba, PageAttributes, ThemeRecord, UiState};
use castpage_mapper::path::WIDGET_BORDER_COLOR_PATH;
use castpage_mapper::{
    extract_token_values, parse_css_number, resolve_path, TokenPath, TokenValues,
};
use castpage_registry::ThemeCatalog;
use serde_json::{Map, Value};

use crate::effects::{
    border_ring, effective_background, EffectContext, EffectTokens, PageTitleEffect,
};
use crate::shadow::{shadow_list, Shadow};
use crate::variables::CssVariables;

/// Stored page-title effect, used when no page attribute selects one
const STORED_TITLE_EFFECT_PATH: &str = "typography_tokens.page_title.effect";

const PROFILE_GLOW_ALPHA: f64 = 0.8;

/// How a field value is written into a variable
#[derive(Clone, Copy, Debug)]
enum Format {
    /// Strings and numbers as-is
    Plain,
    /// Numbers get the field's unit, `px` when it has none
    Length,
}

const TYPOGRAPHY_VARIABLES: &[(&str, &str, Format)] = &[
    ("--heading-color", "heading-color", Format::Plain),
    ("--body-color", "body-color", Format::Plain),
    ("--heading-size", "heading-size", Format::Length),
    ("--body-size", "body-size", Format::Length),
    ("--line-height", "line-height", Format::Plain),
];

const WIDGET_VARIABLES: &[(&str, &str, Format)] = &[
    ("--widget-border-width", "widget-border-width", Format::Length),
    ("--widget-border-radius", "widget-border-radius", Format::Length),
    ("--widget-text-color", "widget-text-color", Format::Plain),
];

const PROFILE_VARIABLES: &[(&str, &str, Format)] = &[
    ("--profile-image-size", "profile-image-size", Format::Length),
    ("--profile-image-radius", "profile-image-radius", Format::Length),
    ("--profile-image-border-color", "profile-image-border-color", Format::Plain),
    ("--profile-image-border-width", "profile-image-border-width", Format::Length),
];

const LAYOUT_VARIABLES: &[(&str, &str, Format)] = &[
    ("--social-icon-color", "social-icon-color", Format::Plain),
    ("--social-icon-size", "social-icon-size", Format::Length),
    ("--social-icon-spacing", "social-icon-spacing", Format::Length),
    ("--page-padding", "page-padding", Format::Length),
    ("--widget-gap", "widget-gap", Format::Length),
    ("--widget-padding", "widget-padding", Format::Length),
    ("--section-gap", "section-gap", Format::Length),
    ("--podcast-player-background", "podcast-player-background", Format::Plain),
    ("--podcast-player-text", "podcast-player-text", Format::Plain),
    ("--podcast-player-accent", "podcast-player-accent", Format::Plain),
    ("--podcast-player-progress", "podcast-player-progress", Format::Plain),
];

/// Renders CSS variables for a live theme preview.
#[derive(Clone, Copy, Debug)]
pub struct PreviewRenderer<'c> {
    catalog: &'c ThemeCatalog,
}

impl PreviewRenderer<'static> {
    /// Renderer over the built-in catalog
    pub fn builtin() -> Self {
        Self::new(ThemeCatalog::builtin())
    }
}

impl<'c> PreviewRenderer<'c> {
    pub fn new(catalog: &'c ThemeCatalog) -> Self {
        Self { catalog }
    }

    /// Compute every preview variable.
    ///
    /// UI edits override stored tokens at the same path. Direct columns
    /// resolve UI edit, then theme column, then nested token, then default.
    pub fn generate_css_variables(
        &self,
        theme: &ThemeRecord,
        ui_state: Option<&UiState>,
        page: Option<&PageAttributes>,
    ) -> CssVariables {
        let sources = Sources::collect(self.catalog, theme, ui_state, page);
        let mut vars = CssVariables::new();

        sources.backgrounds(&mut vars);
        sources.typography(&mut vars);
        sources.page_title(&mut vars);
        sources.widgets(&mut vars);
        sources.profile_image(&mut vars, ui_state.is_some());
        sources.write_all(&mut vars, LAYOUT_VARIABLES);

        tracing::trace!("rendered {} preview variables", vars.len());
        vars
    }
}

/// All value sources for one render, already merged
struct Sources<'a> {
    catalog: &'a ThemeCatalog,
    theme: &'a ThemeRecord,
    /// Stored tokens overlaid with UI edits, keyed by token path
    values: TokenValues,
    /// UI edits to direct columns, keyed by column name
    direct: Map<String, Value>,
    /// Page attributes overlaid with UI edits to page-level fields
    page: Map<String, Value>,
}

impl<'a> Sources<'a> {
    fn collect(
        catalog: &'a ThemeCatalog,
        theme: &'a ThemeRecord,
        ui_state: Option<&UiState>,
        page: Option<&PageAttributes>,
    ) -> Self {
        let mut values = extract_token_values(theme);
        let mut direct = Map::new();
        let mut page = page.cloned().unwrap_or_default();

        for (id, value) in ui_state.into_iter().flatten() {
            if value.is_null() {
                continue;
            }
            let Some(field) = catalog.field(id) else {
                continue;
            };
            match TokenPath::parse(&field.token_path) {
                TokenPath::Page(attr) => {
                    page.insert(attr.to_string(), value.clone());
                }
                TokenPath::PageBackground => {
                    direct.insert(columns::PAGE_BACKGROUND.to_string(), value.clone());
                }
                TokenPath::WidgetBackground => {
                    direct.insert(columns::WIDGET_BACKGROUND.to_string(), value.clone());
                }
                TokenPath::WidgetBorderColor => {
                    direct.insert(columns::WIDGET_BORDER_COLOR.to_string(), value.clone());
                    values.insert(field.token_path.clone(), value.clone());
                }
                _ => {
                    values.insert(field.token_path.clone(), value.clone());
                }
            }
        }

        Self {
            catalog,
            theme,
            values,
            direct,
            page,
        }
    }

    /// Value for a field without falling back to its default
    fn lookup(&self, id: &str) -> Option<&Value> {
        let field = self.catalog.field(id)?;
        let path = field.token_path.as_str();
        let found = match TokenPath::parse(path) {
            TokenPath::Page(attr) => self.page.get(attr),
            TokenPath::PageBackground => self.layered(columns::PAGE_BACKGROUND, None),
            TokenPath::WidgetBackground => self.layered(columns::WIDGET_BACKGROUND, None),
            TokenPath::WidgetBorderColor => {
                self.layered(columns::WIDGET_BORDER_COLOR, Some(WIDGET_BORDER_COLOR_PATH))
            }
            _ => self
                .values
                .get(path)
                .filter(|v| !v.is_null())
                .or_else(|| resolve_path(self.theme, path)),
        };
        found.filter(|v| !v.is_null())
    }

    fn layered(&self, column: &str, nested: Option<&str>) -> Option<&Value> {
        self.direct
            .get(column)
            .filter(|v| !v.is_null())
            .or_else(|| self.theme.column(column))
            .or_else(|| nested.and_then(|path| self.values.get(path)))
    }

    fn default_of(&self, id: &str) -> Option<&Value> {
        self.catalog
            .field(id)
            .map(|field| &field.default_value)
            .filter(|v| !v.is_null())
    }

    fn get(&self, id: &str) -> Option<&Value> {
        self.lookup(id).or_else(|| self.default_of(id))
    }

    fn text(&self, id: &str) -> String {
        self.get(id).and_then(plain_value).unwrap_or_default()
    }

    /// Numeric value, accepting unit strings like `"2px"`
    fn number(&self, id: &str) -> f64 {
        let parse = |value: &Value| match value {
            Value::String(s) => parse_css_number(s),
            other => as_number(other),
        };
        self.lookup(id)
            .and_then(parse)
            .or_else(|| self.default_of(id).and_then(parse))
            .unwrap_or(0.0)
    }

    fn formatted(&self, id: &str, format: Format) -> Option<String> {
        let value = self.get(id)?;
        match format {
            Format::Plain => plain_value(value),
            Format::Length => {
                let unit = self.catalog.field(id).and_then(|f| f.unit.as_deref());
                match (value, unit) {
                    (Value::Number(n), Some(unit)) => {
                        n.as_f64().map(|n| format!("{}{unit}", format_number(n)))
                    }
                    _ => length_value(value),
                }
            }
        }
    }

    fn write_all(&self, vars: &mut CssVariables, table: &[(&str, &str, Format)]) {
        for &(name, id, format) in table {
            if let Some(value) = self.formatted(id, format) {
                vars.set(name, value);
            }
        }
    }

    /// Font stack with the legacy font-name column as a fallback
    fn font(&self, id: &str, column: &str) -> Option<String> {
        self.lookup(id)
            .and_then(Value::as_str)
            .or_else(|| self.theme.column_str(column))
            .or_else(|| self.default_of(id).and_then(Value::as_str))
            .map(font_stack)
    }

    fn weight(&self, vars: &mut CssVariables, prefix: &str, id: &str) {
        let weight = self.get(id).and_then(Value::as_object);
        let flag = |key: &str| {
            weight
                .and_then(|w| w.get(key))
                .and_then(Value::as_bool)
                .unwrap_or(false)
        };
        vars.set(
            format!("{prefix}-font-weight"),
            if flag("bold") { "bold" } else { "normal" },
        );
        vars.set(
            format!("{prefix}-font-style"),
            if flag("italic") { "italic" } else { "normal" },
        );
    }

    fn backgrounds(&self, vars: &mut CssVariables) {
        for (name, id) in [
            ("--page-background", "page-background"),
            ("--widget-background", "widget-background"),
            ("--widget-border-color", "widget-border-color"),
        ] {
            if let Some(value) = self.formatted(id, Format::Plain) {
                vars.set(name, value);
            }
        }
    }

    fn typography(&self, vars: &mut CssVariables) {
        if let Some(font) = self.font("heading-font", columns::HEADING_FONT) {
            vars.set("--heading-font", font);
        }
        if let Some(font) = self.font("body-font", columns::BODY_FONT) {
            vars.set("--body-font", font);
        }
        self.write_all(vars, TYPOGRAPHY_VARIABLES);
        self.weight(vars, "--heading", "heading-weight");
        self.weight(vars, "--body", "body-weight");
    }

    fn title_effect(&self) -> PageTitleEffect {
        let selected = self
            .lookup("page-title-effect")
            .or_else(|| self.values.get(STORED_TITLE_EFFECT_PATH))
            .or_else(|| self.default_of("page-title-effect"))
            .and_then(Value::as_str);
        match selected {
            None => PageTitleEffect::None,
            Some(name) => name.parse().unwrap_or_else(|err| {
                tracing::warn!("{err}; rendering page title without an effect");
                PageTitleEffect::None
            }),
        }
    }

    fn page_title(&self, vars: &mut CssVariables) {
        if let Some(font) = self.font("page-title-font", columns::HEADING_FONT) {
            vars.set("--page-title-font", font);
        }
        let base_color = self.text("page-title-color");
        let font_size = self.number("page-title-size");
        vars.set("--page-title-size", format!("{}px", format_number(font_size)));
        self.weight(vars, "--page-title", "page-title-weight");

        let uppercase = self
            .get("page-title-uppercase")
            .and_then(Value::as_bool)
            .unwrap_or(false);
        vars.set(
            "--page-title-text-transform",
            if uppercase { "uppercase" } else { "none" },
        );

        let effect = self.title_effect();
        let ctx = EffectContext {
            base_color: base_color.clone(),
            background: effective_background(&self.text("page-background")),
            font_size,
            tokens: EffectTokens {
                shadow_color: self.text("page-title-shadow-color"),
                depth: self.number("page-title-shadow-depth"),
                blur: self.number("page-title-shadow-blur"),
                intensity: self.number("page-title-shadow-intensity"),
                glow_color: self.text("page-title-glow-color"),
                glow_width: self.number("page-title-glow-width"),
            },
        };
        tracing::debug!("page title effect: {effect}");
        let style = effect.render(&ctx);

        let mut shadows = border_ring(
            self.number("page-title-border-width"),
            &self.text("page-title-border-color"),
        );
        shadows.extend(style.shadows);

        vars.set("--page-title-color", style.color.unwrap_or(base_color));
        vars.set("--page-title-text-shadow", shadow_list(&shadows));
        vars.set("--page-title-effect-class", effect.class_name());
    }

    fn widgets(&self, vars: &mut CssVariables) {
        self.write_all(vars, WIDGET_VARIABLES);

        let glow = self.widget_glow();
        let effect = self.text("widget-border-effect");
        let box_shadow = match effect.as_str() {
            "glow" => glow.clone(),
            "shadow" => widget_shadow(&self.text("widget-shadow-depth")).to_string(),
            _ => "none".to_string(),
        };
        vars.set("--widget-box-shadow", box_shadow);
        vars.set(
            "--widget-glow-box-shadow",
            if effect == "glow" { glow } else { "none".to_string() },
        );
    }

    /// Glow around widgets.
    ///
    /// Intensity is either numeric (0-1) or the legacy `subtle`/`pronounced`.
    /// An explicit stored or edited glow width sets the blur directly.
    fn widget_glow(&self) -> String {
        let color = self.text("widget-glow-color");
        let intensity = self.get("widget-glow-intensity");
        let legacy = intensity.and_then(Value::as_str).map(str::trim);
        let numeric = match legacy {
            Some(tier) if tier.eq_ignore_ascii_case("pronounced") => 1.0,
            Some(tier) if tier.eq_ignore_ascii_case("subtle") => 0.5,
            _ => intensity.and_then(as_number).unwrap_or(0.5),
        }
        .clamp(0.0, 1.0);

        let explicit_width = self.lookup("widget-glow-width").and_then(|v| match v {
            Value::String(s) => parse_css_number(s),
            other => as_number(other),
        });

        let shadow = match explicit_width {
            Some(width) => {
                Shadow::glow(width, hex_to_rgba(&color, 0.3 + numeric * 0.5)).spread(width / 2.0)
            }
            None if numeric <= 0.5 => Shadow::glow(8.0, hex_to_rgba(&color, 0.4)).spread(2.0),
            None => Shadow::glow(16.0, hex_to_rgba(&color, 0.7)).spread(4.0),
        };
        shadow.to_string()
    }

    fn profile_image(&self, vars: &mut CssVariables, has_ui_state: bool) {
        self.write_all(vars, PROFILE_VARIABLES);
        if !has_ui_state {
            return;
        }

        let box_shadow = match self.text("profile-image-effect").as_str() {
            "shadow" => {
                let depth = self.number("profile-image-shadow-depth");
                shadow_list(&[Shadow::new(
                    depth,
                    depth,
                    self.number("profile-image-shadow-blur"),
                    hex_to_rgba(
                        &self.text("profile-image-shadow-color"),
                        self.number("profile-image-shadow-intensity"),
                    ),
                )])
            }
            "glow" => {
                let width = self.number("profile-image-glow-width");
                let color = hex_to_rgba(&self.text("profile-image-glow-color"), PROFILE_GLOW_ALPHA);
                let layers: Vec<Shadow> = [1.0, 1.5, 2.0]
                    .into_iter()
                    .map(|scale| Shadow::glow(width * scale, color.clone()))
                    .collect();
                shadow_list(&layers)
            }
            _ => "none".to_string(),
        };
        vars.set("--profile-image-box-shadow", box_shadow);
    }
}

/// Fixed widget drop shadow per depth tier; unknown tiers read as medium
fn widget_shadow(depth: &str) -> &'static str {
    match depth {
        "subtle" => "0 1px 3px rgba(0, 0, 0, 0.1)",
        "pronounced" => "0 10px 25px rgba(0, 0, 0, 0.25)",
        _ => "0 4px 12px rgba(0, 0, 0, 0.15)",
    }
}
