//! Castpage Theme Mapper
//!
//! Two-way conversion between the flat, field-id-keyed UI edit buffer and the
//! nested token structure persisted on a theme record.
//!
//! Unsaved edits always win: when a field is present in the existing UI
//! state, [`ThemeMapper::database_to_ui`] keeps it untouched.
//!
//! ```rust
//! use castpage_core::ThemeRecord;
//! use castpage_mapper::ThemeMapper;
//! use serde_json::json;
//!
//! let mapper = ThemeMapper::builtin();
//! let theme = ThemeRecord::from_value(json!({
//!     "widget_styles": {"border_width": "3px"},
//! }))
//! .unwrap();
//!
//! let ui = mapper.database_to_ui(&theme, None, None);
//! assert_eq!(ui["widget-border-width"], json!(3));
//! ```

pub mod extract;
pub mod mapper;
pub mod path;
pub mod units;
mod validate;

pub use extract::{extract_token_values, TokenValues, EXTRACTED_GROUPS};
pub use mapper::{apply_update, ThemeMapper, ThemeUpdate};
pub use path::{resolve_path, set_path, TokenPath};
pub use units::{is_reserved_keyword, parse_css_number, strip_unit};
pub use validate::validate_value;
