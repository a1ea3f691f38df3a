//! Castpage Registries
//!
//! Static description of everything a theme can customize:
//!
//! - [`FieldRegistry`]: every themeable field (type, default, bounds, token path)
//! - [`SectionRegistry`]: ordered display groupings of field ids
//! - [`ThemeCatalog`]: both registries, populated once and read thereafter
//! - [`ThemePreset`]: stock theme records
//!
//! # Token paths
//!
//! A field's `token_path` is one of:
//!
//! - a dotted path into a JSON token group (`typography_tokens.color.heading`)
//! - a bare direct column (`page_background`)
//! - a page-level attribute (`page.profile_image_size`)
//!
//! # Example
//!
//! ```rust
//! use castpage_registry::ThemeCatalog;
//!
//! let catalog = ThemeCatalog::builtin();
//! let ids: Vec<&str> = catalog
//!     .section_fields("social-icons")
//!     .iter()
//!     .map(|f| f.id.as_str())
//!     .collect();
//! assert_eq!(ids, ["social-icon-color", "social-icon-size", "social-icon-spacing"]);
//! ```

pub mod builtins;
pub mod catalog;
pub mod field;
pub mod presets;
pub mod section;

pub use builtins::{section_ids, PAGE_TITLE_EFFECTS};
pub use catalog::{ThemeCatalog, ThemeCatalogBuilder};
pub use field::{FieldDefinition, FieldRegistry, FieldType, FieldValidator, PAGE_PREFIX};
pub use presets::ThemePreset;
pub use section::{SectionDefinition, SectionRegistry};
