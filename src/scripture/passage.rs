//! The passage resolver, the single entry point for turning a raw reference
//! string into verse text. It chains the lexical parser, the name resolver,
//! and the corpus store, and hands back either a fully resolved passage or
//! the precise condition that stopped it.

use crate::error::LookupError;
use crate::models::Reference;
use crate::scripture::corpus::CorpusStore;
use crate::scripture::names::{BookInfo, BookNameResolver};
use crate::scripture::reference;

/// A resolved passage. Verse text is borrowed from the corpus store, never
/// copied, and is always in ascending verse order; the front end renders it
/// in reading order as-is.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Passage<'c> {
    /// Book-only query: the chapter list, no verse text.
    Contents {
        reference: Reference,
        book: &'c str,
        chapters: Vec<u32>,
    },
    /// One chapter, one verse, or an inclusive verse range.
    Verses {
        reference: Reference,
        book: &'c str,
        chapter: u32,
        verses: Vec<(u32, &'c str)>,
    },
}

impl Passage<'_> {
    /// The canonical locator this passage answers.
    pub fn reference(&self) -> &Reference {
        match self {
            Passage::Contents { reference, .. } | Passage::Verses { reference, .. } => reference,
        }
    }
}

/// Owns the name table and the corpus store and resolves references against
/// them.
pub struct PassageResolver {
    names: BookNameResolver,
    store: CorpusStore,
}

impl PassageResolver {
    pub fn new(store: CorpusStore) -> Self {
        Self {
            names: BookNameResolver::new(),
            store,
        }
    }

    /// Direct access to the underlying store, used by random selection.
    pub fn store_mut(&mut self) -> &mut CorpusStore {
        &mut self.store
    }

    /// Resolve a bare book name through the alias table, for callers that
    /// need a book id rather than a passage (e.g. book-constrained random
    /// selection).
    pub fn resolve_book_name(&self, raw: &str) -> Result<&'static BookInfo, LookupError> {
        self.names.resolve(raw).ok_or_else(|| LookupError::UnknownBook {
            name: raw.trim().to_string(),
        })
    }

    /// Resolve a raw reference string to its exact passage. Failures are
    /// precise: `Malformed` from the grammar, `UnknownBook` from name
    /// resolution, `CorpusUnavailable` from loading, `OutOfRange` naming the
    /// offending coordinate. A requested range past the end of the chapter
    /// is out of range, never silently truncated, since a clamped passage
    /// would misreport what the citation denotes.
    pub fn resolve_reference(&mut self, raw: &str) -> Result<Passage<'_>, LookupError> {
        let parsed = reference::parse(raw)?;
        let info = self
            .names
            .resolve(&parsed.book)
            .ok_or_else(|| LookupError::UnknownBook {
                name: parsed.book.clone(),
            })?;
        let book = self.store.load(info.id)?;

        let resolved = Reference {
            book_id: info.id.to_string(),
            chapter: parsed.chapter,
            verse_start: parsed.verse_start,
            verse_end: parsed.verse_end,
        };

        let Some(chapter_no) = parsed.chapter else {
            return Ok(Passage::Contents {
                reference: resolved,
                book: &book.name,
                chapters: book.chapters.iter().map(|c| c.number).collect(),
            });
        };

        let chapter = book
            .chapter(chapter_no)
            .ok_or_else(|| LookupError::OutOfRange {
                book: book.name.clone(),
                chapter: chapter_no,
                verse: None,
            })?;

        let (start, end) = match (parsed.verse_start, parsed.verse_end) {
            (None, _) => (1, chapter.verses.len() as u32),
            (Some(start), None) => (start, start),
            (Some(start), Some(end)) => (start, end),
        };
        for bound in [start, end] {
            if chapter.verse(bound).is_none() {
                return Err(LookupError::OutOfRange {
                    book: book.name.clone(),
                    chapter: chapter_no,
                    verse: Some(bound),
                });
            }
        }

        let verses = chapter.verses[(start - 1) as usize..=(end - 1) as usize]
            .iter()
            .map(|v| (v.number, v.text.as_str()))
            .collect();

        Ok(Passage::Verses {
            reference: resolved,
            book: &book.name,
            chapter: chapter_no,
            verses,
        })
    }
}

#[cfg(test)]
mod tests {
    use tempfile::tempdir;

    use crate::scripture::corpus::fixtures::{write_book, write_john};
    use super::*;

    fn resolver(dir: &std::path::Path) -> PassageResolver {
        PassageResolver::new(CorpusStore::new(dir.to_path_buf()))
    }

    fn verse_numbers(passage: &Passage<'_>) -> Vec<u32> {
        match passage {
            Passage::Verses { verses, .. } => verses.iter().map(|(n, _)| *n).collect(),
            other => panic!("expected verses, got {other:?}"),
        }
    }

    #[test]
    fn single_verse_returns_exactly_that_text() {
        let dir = tempdir().expect("tempdir");
        write_john(dir.path());
        let mut resolver = resolver(dir.path());

        match resolver.resolve_reference("John 3:16").expect("resolves") {
            Passage::Verses { book, chapter, verses, .. } => {
                assert_eq!(book, "John");
                assert_eq!(chapter, 3);
                assert_eq!(verses, vec![(16, "For God so loved the world")]);
            }
            other => panic!("expected verses, got {other:?}"),
        }
    }

    #[test]
    fn dot_and_colon_resolve_identically() {
        let dir = tempdir().expect("tempdir");
        write_john(dir.path());
        let mut resolver = resolver(dir.path());

        let colon = format!("{:?}", resolver.resolve_reference("John 3:16"));
        let dot = format!("{:?}", resolver.resolve_reference("John 3.16"));
        assert_eq!(colon, dot);
    }

    #[test]
    fn ranges_are_inclusive_and_ascending() {
        let dir = tempdir().expect("tempdir");
        write_john(dir.path());
        let mut resolver = resolver(dir.path());

        let passage = resolver.resolve_reference("John 3.15-18").expect("resolves");
        let numbers = verse_numbers(&passage);
        assert_eq!(numbers, vec![15, 16, 17, 18]);
        assert!(numbers.windows(2).all(|w| w[0] < w[1]));
    }

    #[test]
    fn multiword_and_roman_spellings_reach_the_same_verses() {
        let dir = tempdir().expect("tempdir");
        write_book(
            dir.path(),
            "1KI",
            "1 Kings",
            &[&["a"], &["b"], &["v1", "v2", "v3", "v4", "v5", "v6"]],
        );
        let mut resolver = resolver(dir.path());

        let arabic = format!("{:?}", resolver.resolve_reference("1 Kings 3.1-5"));
        let roman = format!("{:?}", resolver.resolve_reference("I Kings 3:1-5"));
        assert_eq!(arabic, roman);

        match resolver.resolve_reference("1 Kings 3.1-5").expect("resolves") {
            Passage::Verses { verses, .. } => assert_eq!(verses.len(), 5),
            other => panic!("expected verses, got {other:?}"),
        }
    }

    #[test]
    fn chapter_without_verse_returns_the_whole_chapter() {
        let dir = tempdir().expect("tempdir");
        write_john(dir.path());
        let mut resolver = resolver(dir.path());

        let passage = resolver.resolve_reference("John 2").expect("resolves");
        assert_eq!(verse_numbers(&passage), vec![1, 2]);
    }

    #[test]
    fn book_only_query_lists_chapters() {
        let dir = tempdir().expect("tempdir");
        write_john(dir.path());
        let mut resolver = resolver(dir.path());

        match resolver.resolve_reference("John").expect("resolves") {
            Passage::Contents { book, chapters, reference } => {
                assert_eq!(book, "John");
                assert_eq!(chapters, vec![1, 2, 3]);
                assert_eq!(reference.book_id, "JHN");
                assert_eq!(reference.chapter, None);
            }
            other => panic!("expected contents, got {other:?}"),
        }
    }

    #[test]
    fn out_of_range_chapter_names_the_chapter() {
        let dir = tempdir().expect("tempdir");
        write_john(dir.path());
        let mut resolver = resolver(dir.path());

        let err = resolver.resolve_reference("John 99:1").expect_err("fails");
        assert_eq!(
            err,
            LookupError::OutOfRange {
                book: "John".into(),
                chapter: 99,
                verse: None,
            }
        );
    }

    #[test]
    fn range_past_the_last_verse_fails_instead_of_clamping() {
        let dir = tempdir().expect("tempdir");
        write_john(dir.path());
        let mut resolver = resolver(dir.path());

        let err = resolver.resolve_reference("John 2.1-9").expect_err("fails");
        assert_eq!(
            err,
            LookupError::OutOfRange {
                book: "John".into(),
                chapter: 2,
                verse: Some(9),
            }
        );
    }

    #[test]
    fn unknown_book_is_reported_as_such() {
        let dir = tempdir().expect("tempdir");
        write_john(dir.path());
        let mut resolver = resolver(dir.path());

        let err = resolver.resolve_reference("Frobnicate 1:1").expect_err("fails");
        assert_eq!(
            err,
            LookupError::UnknownBook {
                name: "Frobnicate".into(),
            }
        );
    }
}
