//! Flattening of token groups into `group.sub.path` keys

use castpage_core::{ThemeRecord, TokenGroup};
use serde_json::{Map, Value};

/// Groups the preview pipeline reads; color, shape and motion tokens are
/// left to other consumers.
pub const EXTRACTED_GROUPS: [TokenGroup; 4] = [
    TokenGroup::Typography,
    TokenGroup::WidgetStyles,
    TokenGroup::Iconography,
    TokenGroup::Spacing,
];

/// Flat token values keyed by full token path
pub type TokenValues = Map<String, Value>;

/// Flatten the extracted groups of a theme.
///
/// Nested objects are walked; arrays and scalars are leaves. `null` leaves
/// are skipped so they read as undefined.
pub fn extract_token_values(theme: &ThemeRecord) -> TokenValues {
    let mut values = TokenValues::new();
    for group in EXTRACTED_GROUPS {
        if let Some(tokens) = theme.group(group) {
            flatten_into(&mut values, group.column(), tokens);
        }
    }
    values
}

fn flatten_into(out: &mut TokenValues, prefix: &str, map: &Map<String, Value>) {
    for (key, value) in map {
        let path = format!("{prefix}.{key}");
        match value {
            Value::Null => {}
            Value::Object(child) => flatten_into(out, &path, child),
            leaf => {
                out.insert(path, leaf.clone());
            }
        }
    }
}
