//! The immutable field + section catalog
//!
//! Registration happens once while the catalog is being built; afterwards the
//! catalog is only read, so it can be shared freely between the mapper and
//! the preview renderer.

use std::sync::OnceLock;

use crate::builtins;
use crate::field::{FieldDefinition, FieldRegistry};
use crate::section::{SectionDefinition, SectionRegistry};

/// Process-wide built-in catalog
static BUILTIN_CATALOG: OnceLock<ThemeCatalog> = OnceLock::new();

/// Fully populated field and section registries
#[derive(Clone, Debug, Default)]
pub struct ThemeCatalog {
    fields: FieldRegistry,
    sections: SectionRegistry,
}

impl ThemeCatalog {
    pub fn builder() -> ThemeCatalogBuilder {
        ThemeCatalogBuilder::default()
    }

    /// The built-in catalog, constructed on first use
    pub fn builtin() -> &'static ThemeCatalog {
        BUILTIN_CATALOG.get_or_init(|| {
            let catalog = Self::builder().with_builtins().build();
            tracing::debug!(
                "built-in theme catalog ready: {} fields, {} sections",
                catalog.fields.len(),
                catalog.sections.len()
            );
            catalog
        })
    }

    pub fn fields(&self) -> &FieldRegistry {
        &self.fields
    }

    pub fn sections(&self) -> &SectionRegistry {
        &self.sections
    }

    pub fn field(&self, id: &str) -> Option<&FieldDefinition> {
        self.fields.get(id)
    }

    /// Fields of a section in the section's own display order
    pub fn section_fields(&self, section_id: &str) -> Vec<&FieldDefinition> {
        self.sections.fields_for_section(section_id, &self.fields)
    }
}

/// Collects registrations before freezing them into a [`ThemeCatalog`]
#[derive(Debug, Default)]
pub struct ThemeCatalogBuilder {
    fields: FieldRegistry,
    sections: SectionRegistry,
}

impl ThemeCatalogBuilder {
    pub fn field(mut self, field: FieldDefinition) -> Self {
        self.fields.register(field);
        self
    }

    pub fn section(mut self, section: SectionDefinition) -> Self {
        self.sections.register(section);
        self
    }

    /// Register the stock fields and sections
    pub fn with_builtins(mut self) -> Self {
        for field in builtins::fields() {
            self.fields.register(field);
        }
        for section in builtins::sections() {
            self.sections.register(section);
        }
        self
    }

    pub fn build(self) -> ThemeCatalog {
        ThemeCatalog {
            fields: self.fields,
            sections: self.sections,
        }
    }
}
