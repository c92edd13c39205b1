//! Raw input records.
//!
//! A [`RawRecord`] mirrors the loose mapping shape the batch builder
//! accepts: every field is optional at the type level, and the builder
//! decides which ones are required. `name` and `age` must be present;
//! `wife` and `husband` are relationship indicators naming another
//! record's person.

use serde::{Deserialize, Serialize};

use crate::error::ValidationError;

/// One raw record describing a person before construction.
///
/// Records are usually assembled fluently:
///
/// ```
/// use kinroster::RawRecord;
///
/// let record = RawRecord::person("Ada", 36).wife("Grace");
/// assert_eq!(record.spouse_key(), Some("Grace"));
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RawRecord {
    /// Person name (required by the builder).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,

    /// Person age (required by the builder).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub age: Option<u32>,

    /// Name of this person's wife, checked before `husband`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub wife: Option<String>,

    /// Name of this person's husband, checked only when `wife` is
    /// absent or empty.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub husband: Option<String>,
}

impl RawRecord {
    /// Creates an empty record with no fields set.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a record with the two required fields set.
    #[must_use]
    pub fn person(name: impl Into<String>, age: u32) -> Self {
        Self {
            name: Some(name.into()),
            age: Some(age),
            ..Self::default()
        }
    }

    /// Set the person name (required).
    #[must_use]
    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    /// Set the person age (required).
    #[must_use]
    pub fn age(mut self, age: u32) -> Self {
        self.age = Some(age);
        self
    }

    /// Set the wife relationship indicator (optional).
    #[must_use]
    pub fn wife(mut self, wife: impl Into<String>) -> Self {
        self.wife = Some(wife.into());
        self
    }

    /// Set the husband relationship indicator (optional).
    #[must_use]
    pub fn husband(mut self, husband: impl Into<String>) -> Self {
        self.husband = Some(husband.into());
        self
    }

    /// Returns the name, or `MissingField` if absent.
    ///
    /// # Errors
    /// `ValidationError::MissingField` when `name` is not set.
    pub fn require_name(&self) -> Result<&str, ValidationError> {
        self.name
            .as_deref()
            .ok_or_else(|| ValidationError::missing_field("name"))
    }

    /// Returns the age, or `MissingField` if absent.
    ///
    /// # Errors
    /// `ValidationError::MissingField` when `age` is not set.
    pub fn require_age(&self) -> Result<u32, ValidationError> {
        self.age
            .ok_or_else(|| ValidationError::missing_field("age"))
    }

    /// Returns the usable relationship indicator, if any.
    ///
    /// `wife` takes priority; `husband` is consulted only when `wife` is
    /// absent or empty. An empty string is treated the same as an absent
    /// key. At most one name is ever returned.
    #[must_use]
    pub fn spouse_key(&self) -> Option<&str> {
        non_empty(self.wife.as_deref()).or_else(|| non_empty(self.husband.as_deref()))
    }
}

fn non_empty(value: Option<&str>) -> Option<&str> {
    value.filter(|v| !v.is_empty())
}
