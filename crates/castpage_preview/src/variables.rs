//! CSS custom property maps

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

/// Anything that accepts inline style properties
pub trait StyleTarget {
    fn set_property(&mut self, name: &str, value: &str);
}

impl StyleTarget for IndexMap<String, String> {
    fn set_property(&mut self, name: &str, value: &str) {
        self.insert(name.to_string(), value.to_string());
    }
}

impl StyleTarget for Vec<(String, String)> {
    fn set_property(&mut self, name: &str, value: &str) {
        self.push((name.to_string(), value.to_string()));
    }
}

/// Ordered `--name -> value` map produced by a render
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CssVariables {
    vars: IndexMap<String, String>,
}

impl CssVariables {
    pub fn new() -> Self {
        Self::default()
    }

    /// Set a variable, keeping its first insertion position
    pub fn set(&mut self, name: impl Into<String>, value: impl Into<String>) {
        self.vars.insert(name.into(), value.into());
    }

    pub fn get(&self, name: &str) -> Option<&str> {
        self.vars.get(name).map(String::as_str)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.vars.contains_key(name)
    }

    pub fn len(&self) -> usize {
        self.vars.len()
    }

    pub fn is_empty(&self) -> bool {
        self.vars.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.vars.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    /// Write every variable onto a style target
    pub fn apply_to<T: StyleTarget + ?Sized>(&self, target: &mut T) {
        for (name, value) in self.iter() {
            target.set_property(name, value);
        }
    }

    /// Inline style text: `--a: 1; --b: 2;`
    pub fn to_style_string(&self) -> String {
        self.iter()
            .map(|(name, value)| format!("{name}: {value};"))
            .collect::<Vec<_>>()
            .join(" ")
    }
}

impl<'a> IntoIterator for &'a CssVariables {
    type Item = (&'a String, &'a String);
    type IntoIter = indexmap::map::Iter<'a, String, String>;

    fn into_iter(self) -> Self::IntoIter {
        self.vars.iter()
    }
}
