//! Batch construction of person rosters.
//!
//! [`build_roster`] is the crate's single entry point: it turns an ordered
//! slice of raw records into an order-aligned roster of persons, using a
//! caller-provided [`Registry`] to resolve spouse references by name.

use crate::error::RosterResult;
use crate::person::Person;
use crate::record::RawRecord;
use crate::registry::Registry;

/// Builds an ordered roster of persons from raw records.
///
/// Runs in two passes over a freshly cleared registry:
///
/// 1. For each record, in input order, construct a person from its `name`
///    and `age` and register a copy. The output order mirrors the input
///    order exactly.
/// 2. For each (person, record) pair, in the same order, resolve the
///    record's relationship indicator (`wife` before `husband`) against
///    the now-fully-populated registry. A match sets the person's spouse
///    to the found instance's id; no match leaves it unset. Because
///    registration completes before any resolution starts, records may
///    name persons that appear later in the input, or themselves.
///
/// Duplicate names are silent last-write-wins: the registry keeps only the
/// last-constructed person per name, so spouse references resolved by that
/// name point at the last instance.
///
/// Returns a fresh vector each call and never mutates its input. The
/// registry is not synchronized; concurrent calls against one registry
/// must be serialized by the caller.
///
/// # Errors
/// `RosterError::Validation` with a `MissingField` kind when a record
/// lacks `name` or `age`. The first such record aborts the whole batch,
/// leaving the registry cleared and partially repopulated. Unresolved
/// spouse names are not errors.
///
/// # Examples
///
/// ```
/// use kinroster::{build_roster, RawRecord, Registry};
///
/// let mut registry = Registry::new();
/// let records = vec![
///     RawRecord::person("Ada", 36).husband("William"),
///     RawRecord::person("William", 40).wife("Ada"),
/// ];
///
/// let roster = build_roster(&mut registry, &records)?;
/// assert_eq!(roster[0].spouse, Some(roster[1].id));
/// assert_eq!(roster[1].spouse, Some(roster[0].id));
/// # Ok::<(), kinroster::RosterError>(())
/// ```
pub fn build_roster(registry: &mut Registry, records: &[RawRecord]) -> RosterResult<Vec<Person>> {
    registry.clear();

    let mut roster = Vec::with_capacity(records.len());
    for record in records {
        let person = Person::new(record.require_name()?, record.require_age()?);
        registry.register(person.clone());
        roster.push(person);
    }

    // The registry is fully populated at this point, so forward and self
    // references resolve like any other.
    for (person, record) in roster.iter_mut().zip(records) {
        let resolved = record
            .spouse_key()
            .and_then(|name| registry.get(name))
            .map(|found| found.id);
        if let Some(spouse) = resolved {
            person.set_spouse(spouse);
        }
    }

    Ok(roster)
}
