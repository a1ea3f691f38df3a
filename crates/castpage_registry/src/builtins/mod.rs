//! Built-in catalog contents
//!
//! Token paths here are the contract with stored theme data: the column and
//! JSON group names must match what existing rows already contain.

mod fields;
mod sections;

pub use fields::{fields, PAGE_TITLE_EFFECTS};
pub use sections::{ids as section_ids, sections};
