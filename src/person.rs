//! Person records and identity.
//!
//! A [`Person`] is the sole entity type in kinroster. Every person carries
//! a stable [`PersonId`] assigned at construction; spouse links between
//! persons are expressed as ids and resolved through a
//! [`Registry`](crate::Registry) rather than owned pointers.

use std::fmt;

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Globally unique, stable person identifier.
///
/// Once created, a `PersonId` never changes. Spouse references carry the
/// id of the person they point at, never the person itself.
///
/// # Examples
///
/// ```
/// use kinroster::PersonId;
///
/// let id = PersonId::new();
/// assert!(!id.is_nil());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PersonId(Uuid);

impl PersonId {
    /// Creates a new random person ID.
    #[must_use]
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }

    /// Creates a person ID from an existing UUID.
    #[must_use]
    pub const fn from_uuid(uuid: Uuid) -> Self {
        Self(uuid)
    }

    /// Returns the underlying UUID.
    #[must_use]
    pub const fn as_uuid(&self) -> &Uuid {
        &self.0
    }

    /// Returns true if this is a nil (all zeros) UUID.
    #[must_use]
    pub fn is_nil(&self) -> bool {
        self.0.is_nil()
    }

    /// Creates a nil person ID (for testing or sentinel values).
    #[must_use]
    pub const fn nil() -> Self {
        Self(Uuid::nil())
    }
}

impl Default for PersonId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for PersonId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<Uuid> for PersonId {
    fn from(uuid: Uuid) -> Self {
        Self(uuid)
    }
}

impl From<PersonId> for Uuid {
    fn from(id: PersonId) -> Self {
        id.0
    }
}

/// A person: name, age, and an optional spouse reference.
///
/// Construction is pure and has no side effects; placing a person into a
/// [`Registry`](crate::Registry) is a separate, explicit step. The spouse
/// field is a one-directional link: if A references B, nothing forces B to
/// reference A back.
///
/// # Examples
///
/// ```
/// use kinroster::Person;
///
/// let person = Person::new("Ada", 36);
/// assert_eq!(person.name, "Ada");
/// assert!(person.spouse.is_none());
/// ```
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Person {
    /// Globally unique identifier.
    pub id: PersonId,

    /// Registry key. Stored exactly as given, no normalization.
    pub name: String,

    /// Age in years.
    pub age: u32,

    /// Id of this person's spouse, if one was resolved.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub spouse: Option<PersonId>,
}

impl Person {
    /// Creates a new person with the given name and age.
    ///
    /// # Examples
    ///
    /// ```
    /// use kinroster::Person;
    ///
    /// let person = Person::new("Grace", 47);
    /// assert_eq!(person.age, 47);
    /// ```
    #[must_use]
    pub fn new(name: impl Into<String>, age: u32) -> Self {
        Self {
            id: PersonId::new(),
            name: name.into(),
            age,
            spouse: None,
        }
    }

    /// Creates a new person with a specific ID.
    ///
    /// This is useful when you need to control the person ID,
    /// such as during data migration or testing.
    #[must_use]
    pub fn with_id(id: PersonId, name: impl Into<String>, age: u32) -> Self {
        Self {
            id,
            name: name.into(),
            age,
            spouse: None,
        }
    }

    /// Sets the spouse reference.
    pub fn set_spouse(&mut self, spouse: PersonId) {
        self.spouse = Some(spouse);
    }

    /// Clears the spouse reference.
    pub fn clear_spouse(&mut self) {
        self.spouse = None;
    }

    /// Returns true if this person has a spouse reference.
    #[must_use]
    pub const fn has_spouse(&self) -> bool {
        self.spouse.is_some()
    }
}

impl PartialEq for Person {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
    }
}

impl Eq for Person {}

impl std::hash::Hash for Person {
    fn hash<H: std::hash::Hasher>(&self, state: &mut H) {
        self.id.hash(state);
    }
}

impl fmt::Display for Person {
    // Diagnostic form only, not a data interchange format.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Person(name={:?}, age={})", self.name, self.age)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_person_id_creation() {
        let id1 = PersonId::new();
        let id2 = PersonId::new();
        assert_ne!(id1, id2);
        assert!(!id1.is_nil());
    }

    #[test]
    fn test_person_id_nil() {
        let nil = PersonId::nil();
        assert!(nil.is_nil());
    }

    #[test]
    fn test_person_id_from_uuid() {
        let uuid = Uuid::new_v4();
        let id = PersonId::from_uuid(uuid);
        assert_eq!(id.as_uuid(), &uuid);
    }

    #[test]
    fn test_person_id_display() {
        let id = PersonId::new();
        let display = format!("{id}");
        assert!(!display.is_empty());
        assert!(display.contains('-')); // UUID format
    }

    #[test]
    fn test_person_creation() {
        let person = Person::new("Ada", 36);
        assert_eq!(person.name, "Ada");
        assert_eq!(person.age, 36);
        assert!(person.spouse.is_none());
        assert!(!person.has_spouse());
    }

    #[test]
    fn test_person_with_id() {
        let id = PersonId::new();
        let person = Person::with_id(id, "Grace", 47);
        assert_eq!(person.id, id);
    }

    #[test]
    fn test_person_spouse_set_and_clear() {
        let mut person = Person::new("Ada", 36);
        let spouse = PersonId::new();

        person.set_spouse(spouse);
        assert_eq!(person.spouse, Some(spouse));
        assert!(person.has_spouse());

        person.clear_spouse();
        assert!(person.spouse.is_none());
    }

    #[test]
    fn test_person_equality() {
        let id = PersonId::new();
        let person1 = Person::with_id(id, "Ada", 36);
        let mut person2 = Person::with_id(id, "Different Name", 99);
        person2.set_spouse(PersonId::new());

        // Persons are equal if they have the same ID
        assert_eq!(person1, person2);
    }

    #[test]
    fn test_person_display_format() {
        let person = Person::new("Ada", 36);
        assert_eq!(format!("{person}"), "Person(name=\"Ada\", age=36)");
    }

    #[test]
    fn test_person_serialization() {
        let mut person = Person::new("Ada", 36);
        person.set_spouse(PersonId::new());
        let json = serde_json::to_string(&person).unwrap();
        let deserialized: Person = serde_json::from_str(&json).unwrap();
        assert_eq!(person.id, deserialized.id);
        assert_eq!(person.spouse, deserialized.spouse);
    }
}
