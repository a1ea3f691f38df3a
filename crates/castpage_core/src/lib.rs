//! Castpage Core
//!
//! Shared building blocks for the theme customization pipeline:
//!
//! - [`Color`]: hex parsing, `rgba()` output, HSL conversion and the party palette
//! - [`ThemeRecord`]: persisted theme rows with token groups parsed on ingestion
//! - [`format`]: deterministic CSS number/length/font formatting
//!
//! # Example
//!
//! ```rust
//! use castpage_core::{hex_to_rgba, ThemeRecord, TokenGroup};
//! use serde_json::json;
//!
//! let theme = ThemeRecord::from_value(json!({
//!     "page_background": "#fff",
//!     "typography_tokens": "{\"color\":{\"heading\":\"#111111\"}}",
//! }))
//! .unwrap();
//!
//! assert_eq!(
//!     theme.token(TokenGroup::Typography, "color.heading"),
//!     Some(&json!("#111111"))
//! );
//! assert_eq!(hex_to_rgba("#fff", 0.5), "rgba(255, 255, 255, 0.5)");
//! ```

pub mod color;
mod error;
pub mod format;
pub mod record;

pub use color::{
    generate_party_colors, hex_to_rgba, hsl_to_rgb, is_hex_color, rgb_to_hsl, Color, Hsl,
};
pub use error::ThemeError;
pub use record::{
    columns, lookup_path, PageAttributes, RawTokenGroup, ThemeRecord, TokenGroup, UiState,
};
