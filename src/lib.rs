//! Core library surface for orthofetch. Three entry points do all the real
//! work: passage resolution ([`PassageResolver::resolve_reference`]),
//! calendar lookup ([`CalendarLookup::entry_for`]), and random verse
//! selection ([`scripture::random_verse`]). Everything else, argument
//! parsing and terminal rendering included, is glue around them. Data flows
//! one direction: a date or reference string goes in, immutable passage data
//! comes out, and no component mutates another's state.

pub mod calendar;
pub mod error;
pub mod models;
pub mod paths;
pub mod scripture;
pub mod ui;

/// The date-to-liturgical-record side of the system.
pub use calendar::{CalendarLookup, DATASET_YEAR};

/// The shared failure taxonomy; every lookup error is one of these and all
/// of them are recoverable by the caller.
pub use error::{LookupError, MalformedReason};

/// The primary domain types other layers manipulate.
pub use models::{Book, CalendarEntry, Citation, Reference};

/// The citation-to-text side of the system.
pub use scripture::{CorpusStore, Passage, PassageResolver};
