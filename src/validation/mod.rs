//! Explicit request validation
//!
//! Request types implement [`Validate`] and are checked before any business
//! logic runs. A failed check yields [`ValidationErrors`], a field → message
//! map holding one message per field.

mod foo_request;

use std::collections::BTreeMap;
use std::fmt;

/// Structural validation of an incoming request
pub trait Validate {
    fn validate(&self) -> Result<(), ValidationErrors>;
}

/// Field-level violations, keyed by field name
///
/// Only the first message recorded for a field is kept. Fields are ordered
/// by name so the rendered text is stable.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ValidationErrors {
    fields: BTreeMap<String, String>,
}

impl ValidationErrors {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a violation unless the field already has one
    pub fn add(&mut self, field: &str, message: &str) {
        self.fields
            .entry(field.to_string())
            .or_insert_with(|| message.to_string());
    }

    pub fn has_field(&self, field: &str) -> bool {
        self.fields.contains_key(field)
    }

    pub fn get(&self, field: &str) -> Option<&str> {
        self.fields.get(field).map(String::as_str)
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    pub fn len(&self) -> usize {
        self.fields.len()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.fields.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    /// `Ok(())` when nothing was recorded, otherwise `Err(self)`
    pub fn into_result(self) -> Result<(), ValidationErrors> {
        if self.is_empty() { Ok(()) } else { Err(self) }
    }
}

/// Renders as `{field=message, other=message}`
impl fmt::Display for ValidationErrors {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("{")?;
        for (i, (field, message)) in self.iter().enumerate() {
            if i > 0 {
                f.write_str(", ")?;
            }
            write!(f, "{}={}", field, message)?;
        }
        f.write_str("}")
    }
}

impl std::error::Error for ValidationErrors {}

/// Present and containing at least one non-whitespace character
pub fn not_blank(value: Option<&str>) -> bool {
    value.is_some_and(|v| !v.trim().is_empty())
}

/// Length in characters (not bytes) within `[min, max]`
pub fn length_between(value: &str, min: usize, max: usize) -> bool {
    let len = value.chars().count();
    len >= min && len <= max
}
