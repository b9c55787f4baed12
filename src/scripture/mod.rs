//! Scripture lookup split across logical submodules.

pub mod corpus;
pub mod names;
pub mod passage;
pub mod random;
pub mod reference;

pub use corpus::CorpusStore;
pub use names::{BookInfo, BookNameResolver};
pub use passage::{Passage, PassageResolver};
pub use random::{random_verse, random_verse_in, VersePick};
pub use reference::RawReference;
