//! Castpage Preview Renderer
//!
//! Computes the CSS custom properties that style a live page preview from a
//! stored theme, unsaved UI edits and page attributes.
//!
//! - [`PreviewRenderer`]: the render entry point
//! - [`PageTitleEffect`]: procedural page title treatments
//! - [`CssVariables`]: ordered output map, applied through [`StyleTarget`]
//!
//! ```rust
//! use castpage_core::ThemeRecord;
//! use castpage_preview::PreviewRenderer;
//! use serde_json::json;
//!
//! let theme = ThemeRecord::from_value(json!({"page_background": "#101820"})).unwrap();
//! let vars = PreviewRenderer::builtin().generate_css_variables(&theme, None, None);
//!
//! assert_eq!(vars.get("--page-background"), Some("#101820"));
//! assert_eq!(vars.get("--page-title-effect-class"), Some(""));
//! ```

pub mod effects;
pub mod renderer;
pub mod shadow;
pub mod variables;

pub use effects::{EffectContext, EffectStyle, EffectTokens, PageTitleEffect, UnknownEffect};
pub use renderer::PreviewRenderer;
pub use shadow::{shadow_list, Shadow};
pub use variables::{CssVariables, StyleTarget};
