//! Display sections grouping fields in the customizer

use indexmap::IndexMap;

use crate::field::{FieldDefinition, FieldRegistry};

/// A named, ordered grouping of fields
#[derive(Clone, Debug, PartialEq)]
pub struct SectionDefinition {
    pub id: String,
    pub title: String,
    /// Explicit display order of field ids
    pub fields: Vec<String>,
    /// Sort key for sections; ties keep registration order
    pub order: i32,
    pub collapsible: bool,
    pub default_expanded: bool,
}

impl SectionDefinition {
    pub fn new(id: impl Into<String>, title: impl Into<String>, fields: &[&str]) -> Self {
        Self {
            id: id.into(),
            title: title.into(),
            fields: fields.iter().map(|f| f.to_string()).collect(),
            order: 0,
            collapsible: true,
            default_expanded: true,
        }
    }

    pub fn order(mut self, order: i32) -> Self {
        self.order = order;
        self
    }

    pub fn collapsible(mut self, collapsible: bool) -> Self {
        self.collapsible = collapsible;
        self
    }

    pub fn default_expanded(mut self, expanded: bool) -> Self {
        self.default_expanded = expanded;
        self
    }
}

#[derive(Clone, Debug, Default)]
pub struct SectionRegistry {
    sections: IndexMap<String, SectionDefinition>,
}

impl SectionRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn register(&mut self, section: SectionDefinition) -> Option<SectionDefinition> {
        let replaced = self.sections.insert(section.id.clone(), section);
        if let Some(old) = &replaced {
            tracing::warn!("section `{}` registered twice; keeping the later definition", old.id);
        }
        replaced
    }

    pub fn get(&self, id: &str) -> Option<&SectionDefinition> {
        self.sections.get(id)
    }

    /// All sections sorted by `order` (stable for equal orders)
    pub fn all_sections(&self) -> Vec<&SectionDefinition> {
        let mut sections: Vec<&SectionDefinition> = self.sections.values().collect();
        sections.sort_by_key(|s| s.order);
        sections
    }

    /// Resolve a section's field ids in their listed order.
    ///
    /// Ids that don't resolve in `fields` are skipped.
    pub fn fields_for_section<'a>(
        &self,
        id: &str,
        fields: &'a FieldRegistry,
    ) -> Vec<&'a FieldDefinition> {
        self.get(id)
            .map(|section| {
                section
                    .fields
                    .iter()
                    .filter_map(|field_id| fields.get(field_id))
                    .collect()
            })
            .unwrap_or_default()
    }

    pub fn len(&self) -> usize {
        self.sections.len()
    }

    pub fn is_empty(&self) -> bool {
        self.sections.is_empty()
    }
}
