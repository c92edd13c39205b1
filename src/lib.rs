//! # kinroster - In-Memory Person Registry
//!
//! kinroster builds ordered rosters of persons from raw records and links
//! spouses together by name. A caller-owned [`Registry`] maps each name to
//! the most recently registered person; [`build_roster`] clears it,
//! constructs one [`Person`] per record, then resolves spouse references
//! against the fully populated registry in a second pass.
//!
//! ## Core Concepts
//!
//! - **Person**: the sole entity type, with a stable id, name, age, and an
//!   optional spouse reference
//! - **Registry**: a name-keyed mapping with silent last-write-wins
//!   registration
//! - **RawRecord**: the loose input mapping a person is constructed from
//! - **Spouse reference**: a one-directional, non-owning link carried as a
//!   [`PersonId`] and resolved by name lookup
//!
//! ## Usage
//!
//! ```rust
//! use kinroster::{build_roster, RawRecord, Registry};
//!
//! let mut registry = Registry::new();
//! let records = vec![
//!     RawRecord::person("Ada", 36).husband("William"),
//!     RawRecord::person("William", 40).wife("Ada"),
//! ];
//!
//! let roster = build_roster(&mut registry, &records)?;
//! assert_eq!(roster[0].spouse, Some(roster[1].id));
//! # Ok::<(), kinroster::RosterError>(())
//! ```
//!
//! The registry is single-threaded state: it carries no locking, and
//! concurrent builds against one registry must be serialized by the caller.

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]

pub mod build;
pub mod error;
pub mod person;
pub mod record;
pub mod registry;

// Re-export primary types at crate root for convenience
pub use build::build_roster;
pub use error::{RosterError, RosterResult, ValidationError};
pub use person::{Person, PersonId};
pub use record::RawRecord;
pub use registry::Registry;
