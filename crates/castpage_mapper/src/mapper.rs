//! Conversion between the flat UI edit buffer and persisted theme tokens

use castpage_core::format::with_unit;
use castpage_core::{columns, PageAttributes, ThemeError, ThemeRecord, TokenGroup, UiState};
use castpage_registry::{FieldDefinition, ThemeCatalog};
use serde_json::{Map, Number, Value};

use crate::extract::{extract_token_values, TokenValues};
use crate::path::{resolve_path, set_path, TokenPath, PODCAST_PLAYER_KEY};
use crate::units::{is_reserved_keyword, parse_css_number};
use crate::validate::validate_value;

/// Persisted-shape theme update: token-group objects plus direct columns
pub type ThemeUpdate = Map<String, Value>;

/// Maps between UI state and theme records using a field catalog.
#[derive(Clone, Copy, Debug)]
pub struct ThemeMapper<'c> {
    catalog: &'c ThemeCatalog,
}

impl ThemeMapper<'static> {
    /// Mapper over the built-in catalog
    pub fn builtin() -> Self {
        Self::new(ThemeCatalog::builtin())
    }
}

impl<'c> ThemeMapper<'c> {
    pub fn new(catalog: &'c ThemeCatalog) -> Self {
        Self { catalog }
    }

    pub fn catalog(&self) -> &'c ThemeCatalog {
        self.catalog
    }

    /// Convert UI state into the persisted theme shape.
    ///
    /// Every registered field with a defined value is written, implemented
    /// or not. Page-level fields are left to the page record. Token groups
    /// that end up empty are omitted.
    pub fn ui_to_database(&self, ui_state: &UiState) -> ThemeUpdate {
        let mut groups: Vec<(TokenGroup, Map<String, Value>)> = Vec::new();
        let mut update = ThemeUpdate::new();

        for field in self.catalog.fields().iter() {
            let Some(value) = defined(ui_state, &field.id) else {
                continue;
            };

            let target = TokenPath::parse(&field.token_path);
            if !target.is_writable() {
                if !matches!(target, TokenPath::Page(_)) {
                    tracing::debug!(
                        "dropping {} on save: no writable target for {}",
                        field.id,
                        field.token_path
                    );
                }
                continue;
            }

            match target {
                TokenPath::PageBackground => {
                    update.insert(columns::PAGE_BACKGROUND.to_string(), value.clone());
                }
                TokenPath::WidgetBackground => {
                    update.insert(columns::WIDGET_BACKGROUND.to_string(), value.clone());
                }
                TokenPath::WidgetBorderColor => {
                    // Column for current readers, nested copy for older ones
                    update.insert(columns::WIDGET_BORDER_COLOR.to_string(), value.clone());
                    set_path(
                        group_entry(&mut groups, TokenGroup::WidgetStyles),
                        "border_color",
                        value.clone(),
                    );
                }
                TokenPath::PodcastPlayer(path) => {
                    let tokens = group_entry(&mut groups, TokenGroup::Color);
                    set_path(tokens, &format!("{PODCAST_PLAYER_KEY}.{path}"), value.clone());
                }
                TokenPath::Group { group, path } => {
                    let value = match group {
                        TokenGroup::Iconography => with_icon_unit(path, value),
                        _ => value.clone(),
                    };
                    set_path(group_entry(&mut groups, group), path, value);
                }
                TokenPath::Page(_) | TokenPath::Other(_) => {}
            }
        }

        for (group, tokens) in groups {
            if tokens.is_empty() {
                continue;
            }
            update.insert(group.column().to_string(), Value::Object(tokens));
        }
        update
    }

    /// Produce UI state from a stored theme and page.
    ///
    /// Values already present in `existing` always win over stored data.
    pub fn database_to_ui(
        &self,
        theme: &ThemeRecord,
        page: Option<&PageAttributes>,
        existing: Option<&UiState>,
    ) -> UiState {
        let mut ui_state = UiState::new();
        for field in self.catalog.fields().iter() {
            let value = match existing.and_then(|ui| defined(ui, &field.id)) {
                Some(value) => value.clone(),
                None => self.resolve(theme, page, field),
            };
            ui_state.insert(field.id.clone(), value);
        }
        ui_state
    }

    /// Stored values overlaid with the given UI state
    pub fn merge_theme_with_ui_state(&self, theme: &ThemeRecord, ui_state: &UiState) -> UiState {
        let mut merged = self.database_to_ui(theme, None, None);
        for (id, value) in ui_state {
            merged.insert(id.clone(), value.clone());
        }
        merged
    }

    /// Whether `value` is acceptable for field `id`; unknown ids never are.
    pub fn validate_field_value(&self, id: &str, value: &Value) -> bool {
        match self.catalog.field(id) {
            Some(field) => validate_value(field, value),
            None => {
                tracing::debug!("validating unknown field {id}");
                false
            }
        }
    }

    /// Every field mapped to its default value
    pub fn default_ui_state(&self) -> UiState {
        self.catalog
            .fields()
            .iter()
            .map(|field| (field.id.clone(), field.default_value.clone()))
            .collect()
    }

    pub fn extract_token_values(&self, theme: &ThemeRecord) -> TokenValues {
        extract_token_values(theme)
    }

    /// Resolve one field from stored data, falling back to its default.
    ///
    /// Unit-bearing strings on `number` and `border-width` fields come back
    /// as plain numbers.
    pub fn resolve(
        &self,
        theme: &ThemeRecord,
        page: Option<&PageAttributes>,
        field: &FieldDefinition,
    ) -> Value {
        let raw = match field.page_attribute() {
            Some(attr) => page.and_then(|page| defined(page, attr)),
            None => resolve_path(theme, &field.token_path),
        };
        let Some(raw) = raw else {
            return field.default_value.clone();
        };

        match raw {
            Value::String(text) if field.field_type.strips_units() => {
                if is_reserved_keyword(text) {
                    return field.default_value.clone();
                }
                match parse_css_number(text) {
                    Some(number) => number_value(number),
                    None => {
                        tracing::debug!("{} has non-numeric value {text:?}", field.id);
                        field.default_value.clone()
                    }
                }
            }
            other => other.clone(),
        }
    }
}

/// Apply a persisted-shape update on top of an existing theme.
///
/// Columns are replaced; token groups are merged key by key so tokens the
/// update does not mention survive.
pub fn apply_update(theme: &ThemeRecord, update: ThemeUpdate) -> Result<ThemeRecord, ThemeError> {
    let patch = ThemeRecord::from_value(Value::Object(update))?;
    let mut merged = theme.clone();
    for (name, value) in patch.columns() {
        merged.set_column(name.clone(), value.clone());
    }
    for group in TokenGroup::ALL {
        if let Some(tokens) = patch.group(group) {
            let mut target = merged.group(group).cloned().unwrap_or_default();
            deep_merge(&mut target, tokens);
            merged.set_group(group, target);
        }
    }
    Ok(merged)
}

fn deep_merge(target: &mut Map<String, Value>, patch: &Map<String, Value>) {
    for (key, value) in patch {
        if let (Some(Value::Object(existing)), Value::Object(incoming)) =
            (target.get_mut(key), value)
        {
            deep_merge(existing, incoming);
            continue;
        }
        target.insert(key.clone(), value.clone());
    }
}

/// Defined (present and non-null) entry of a flat map
fn defined<'a>(map: &'a Map<String, Value>, key: &str) -> Option<&'a Value> {
    map.get(key).filter(|v| !v.is_null())
}

fn group_entry(
    groups: &mut Vec<(TokenGroup, Map<String, Value>)>,
    group: TokenGroup,
) -> &mut Map<String, Value> {
    let index = match groups.iter().position(|(g, _)| *g == group) {
        Some(index) => index,
        None => {
            groups.push((group, Map::new()));
            groups.len() - 1
        }
    };
    &mut groups[index].1
}

/// Icon size is stored in `px`, icon spacing in `rem`
fn with_icon_unit(path: &str, value: &Value) -> Value {
    let unit = match path {
        "size" => "px",
        "spacing" => "rem",
        _ => return value.clone(),
    };
    match value.as_f64() {
        Some(n) => Value::String(with_unit(n, unit)),
        None => value.clone(),
    }
}

/// Whole numbers stay integers so `"3px"` reads back as `3`
fn number_value(n: f64) -> Value {
    if n.fract() == 0.0 && n.abs() < 9_007_199_254_740_992.0 {
        Value::from(n as i64)
    } else {
        Number::from_f64(n).map_or(Value::Null, Value::Number)
    }
}
