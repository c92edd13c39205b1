//! Name-keyed person registry.
//!
//! The registry maps each name to the most recently registered [`Person`]
//! with that name. It is caller-owned state: whoever holds the registry
//! hands it to [`build_roster`](crate::build_roster), which clears and
//! repopulates it. There is no process-wide singleton.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use crate::person::Person;

/// Mapping from name to the most recently registered person with that name.
///
/// Registration is silent last-write-wins: a duplicate name replaces the
/// earlier entry without error, and any spouse reference already resolved
/// to the replaced instance's id is orphaned (the id no longer resolves
/// through this registry).
///
/// The registry carries no internal synchronization. Callers that build
/// rosters from multiple threads against one registry must serialize
/// those calls themselves.
///
/// # Examples
///
/// ```
/// use kinroster::{Person, Registry};
///
/// let mut registry = Registry::new();
/// registry.register(Person::new("Ada", 36));
/// assert!(registry.contains("Ada"));
/// ```
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Registry {
    by_name: HashMap<String, Person>,
}

impl Registry {
    /// Creates a new empty registry.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers a person under their name.
    ///
    /// Silently replaces whichever person previously held the key and
    /// returns the displaced entry, if any.
    pub fn register(&mut self, person: Person) -> Option<Person> {
        self.by_name.insert(person.name.clone(), person)
    }

    /// Looks up the person registered under `name`.
    ///
    /// Lookup is exact string match: no trimming, no case folding.
    #[must_use]
    pub fn get(&self, name: &str) -> Option<&Person> {
        self.by_name.get(name)
    }

    /// Returns true if a person is registered under `name`.
    #[must_use]
    pub fn contains(&self, name: &str) -> bool {
        self.by_name.contains_key(name)
    }

    /// Number of registered persons.
    #[must_use]
    pub fn len(&self) -> usize {
        self.by_name.len()
    }

    /// Returns true if no persons are registered.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.by_name.is_empty()
    }

    /// Drops every entry, regardless of how it got there.
    pub fn clear(&mut self) {
        self.by_name.clear();
    }

    /// Iterates over registered persons in arbitrary order.
    pub fn iter(&self) -> impl Iterator<Item = &Person> + '_ {
        self.by_name.values()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn register_and_lookup() {
        let mut registry = Registry::new();
        let person = Person::new("Ada", 36);
        let id = person.id;

        assert!(registry.register(person).is_none());
        assert_eq!(registry.get("Ada").unwrap().id, id);
        assert!(registry.contains("Ada"));
        assert_eq!(registry.len(), 1);
        assert!(!registry.is_empty());
    }

    #[test]
    fn duplicate_name_displaces_earlier_entry() {
        let mut registry = Registry::new();
        let first = Person::new("Ada", 1);
        let first_id = first.id;
        registry.register(first);

        let displaced = registry.register(Person::new("Ada", 2)).unwrap();
        assert_eq!(displaced.id, first_id);
        assert_eq!(displaced.age, 1);

        // Only the latest registration remains reachable.
        assert_eq!(registry.len(), 1);
        assert_eq!(registry.get("Ada").unwrap().age, 2);
    }

    #[test]
    fn lookup_is_exact_match() {
        let mut registry = Registry::new();
        registry.register(Person::new("Ada", 36));

        assert!(registry.get("ada").is_none());
        assert!(registry.get(" Ada").is_none());
        assert!(registry.get("Ada").is_some());
    }

    #[test]
    fn empty_name_is_a_legal_key() {
        let mut registry = Registry::new();
        registry.register(Person::new("", 1));
        assert!(registry.contains(""));
    }

    #[test]
    fn clear_drops_all_entries() {
        let mut registry = Registry::new();
        registry.register(Person::new("Ada", 36));
        registry.register(Person::new("Grace", 47));
        assert_eq!(registry.len(), 2);

        registry.clear();
        assert!(registry.is_empty());
        assert!(registry.get("Ada").is_none());
    }

    #[test]
    fn iter_visits_every_entry() {
        let mut registry = Registry::new();
        registry.register(Person::new("Ada", 36));
        registry.register(Person::new("Grace", 47));

        let mut names: Vec<&str> = registry.iter().map(|p| p.name.as_str()).collect();
        names.sort_unstable();
        assert_eq!(names, vec!["Ada", "Grace"]);
    }
}
