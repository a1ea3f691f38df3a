//! Themeable field definitions and the field registry

use std::fmt::{Display, Formatter};
use std::str::FromStr;

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Prefix marking a page-level (not theme-level) attribute
pub const PAGE_PREFIX: &str = "page.";

/// Custom validation predicate; replaces the type-based checks entirely
pub type FieldValidator = fn(&Value) -> bool;

/// Kind of value a field holds
#[derive(Clone, Copy, Debug, Hash, Eq, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum FieldType {
    Color,
    Gradient,
    Image,
    Font,
    Size,
    Spacing,
    Effect,
    Weight,
    BorderWidth,
    Shadow,
    Glow,
    Number,
    Select,
    Toggle,
}

impl FieldType {
    pub const ALL: [FieldType; 14] = [
        Self::Color,
        Self::Gradient,
        Self::Image,
        Self::Font,
        Self::Size,
        Self::Spacing,
        Self::Effect,
        Self::Weight,
        Self::BorderWidth,
        Self::Shadow,
        Self::Glow,
        Self::Number,
        Self::Select,
        Self::Toggle,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Color => "color",
            Self::Gradient => "gradient",
            Self::Image => "image",
            Self::Font => "font",
            Self::Size => "size",
            Self::Spacing => "spacing",
            Self::Effect => "effect",
            Self::Weight => "weight",
            Self::BorderWidth => "border-width",
            Self::Shadow => "shadow",
            Self::Glow => "glow",
            Self::Number => "number",
            Self::Select => "select",
            Self::Toggle => "toggle",
        }
    }

    /// Types whose values are plain numbers bounded by `min`/`max`
    pub fn is_numeric(self) -> bool {
        matches!(
            self,
            Self::Number | Self::Size | Self::Spacing | Self::BorderWidth | Self::Shadow | Self::Glow
        )
    }

    /// Types whose stored strings get CSS units stripped when loaded
    pub fn strips_units(self) -> bool {
        matches!(self, Self::Number | Self::BorderWidth)
    }
}

impl Display for FieldType {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for FieldType {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|t| t.as_str() == s)
            .ok_or_else(|| format!("unknown field type `{s}`"))
    }
}

/// One user-editable theme property
#[derive(Clone)]
pub struct FieldDefinition {
    pub id: String,
    pub label: String,
    pub field_type: FieldType,
    /// Dotted token path, bare direct column, or `page.`-prefixed attribute
    pub token_path: String,
    pub section: String,
    pub default_value: Value,
    pub min: Option<f64>,
    pub max: Option<f64>,
    pub step: Option<f64>,
    pub unit: Option<String>,
    pub options: Vec<String>,
    pub validation: Option<FieldValidator>,
    /// Whether a UI surface exists for this field yet
    pub implemented: bool,
}

impl std::fmt::Debug for FieldDefinition {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("FieldDefinition")
            .field("id", &self.id)
            .field("field_type", &self.field_type)
            .field("token_path", &self.token_path)
            .field("section", &self.section)
            .field("default_value", &self.default_value)
            .field("implemented", &self.implemented)
            .finish_non_exhaustive()
    }
}

impl FieldDefinition {
    pub fn new(
        id: impl Into<String>,
        label: impl Into<String>,
        field_type: FieldType,
        token_path: impl Into<String>,
        section: impl Into<String>,
    ) -> Self {
        Self {
            id: id.into(),
            label: label.into(),
            field_type,
            token_path: token_path.into(),
            section: section.into(),
            default_value: Value::Null,
            min: None,
            max: None,
            step: None,
            unit: None,
            options: Vec::new(),
            validation: None,
            implemented: false,
        }
    }

    pub fn default_value(mut self, value: impl Into<Value>) -> Self {
        self.default_value = value.into();
        self
    }

    pub fn range(mut self, min: f64, max: f64) -> Self {
        self.min = Some(min);
        self.max = Some(max);
        self
    }

    pub fn step(mut self, step: f64) -> Self {
        self.step = Some(step);
        self
    }

    pub fn unit(mut self, unit: impl Into<String>) -> Self {
        self.unit = Some(unit.into());
        self
    }

    pub fn options(mut self, options: &[&str]) -> Self {
        self.options = options.iter().map(|o| o.to_string()).collect();
        self
    }

    pub fn validation(mut self, validator: FieldValidator) -> Self {
        self.validation = Some(validator);
        self
    }

    pub fn implemented(mut self) -> Self {
        self.implemented = true;
        self
    }

    /// Page attribute name for `page.`-prefixed fields
    pub fn page_attribute(&self) -> Option<&str> {
        self.token_path.strip_prefix(PAGE_PREFIX)
    }

    pub fn is_page_level(&self) -> bool {
        self.page_attribute().is_some()
    }
}

/// Catalog of every themeable field, keyed by id
#[derive(Clone, Debug, Default)]
pub struct FieldRegistry {
    fields: IndexMap<String, FieldDefinition>,
}

impl FieldRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert or overwrite a field by id. Returns the replaced definition.
    pub fn register(&mut self, field: FieldDefinition) -> Option<FieldDefinition> {
        let replaced = self.fields.insert(field.id.clone(), field);
        if let Some(old) = &replaced {
            tracing::warn!("field `{}` registered twice; keeping the later definition", old.id);
        }
        replaced
    }

    pub fn get(&self, id: &str) -> Option<&FieldDefinition> {
        self.fields.get(id)
    }

    /// Fields owned by a section, sorted by id
    pub fn fields_for_section(&self, section_id: &str) -> Vec<&FieldDefinition> {
        let mut fields: Vec<&FieldDefinition> = self
            .fields
            .values()
            .filter(|f| f.section == section_id)
            .collect();
        fields.sort_by(|a, b| a.id.cmp(&b.id));
        fields
    }

    pub fn implemented_fields(&self) -> Vec<&FieldDefinition> {
        self.fields.values().filter(|f| f.implemented).collect()
    }

    pub fn all_fields(&self) -> Vec<&FieldDefinition> {
        self.fields.values().collect()
    }

    pub fn is_implemented(&self, id: &str) -> bool {
        self.get(id).map(|f| f.implemented).unwrap_or(false)
    }

    pub fn iter(&self) -> impl Iterator<Item = &FieldDefinition> {
        self.fields.values()
    }

    pub fn len(&self) -> usize {
        self.fields.len()
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }
}
