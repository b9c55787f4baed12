//! Domain models passed between the lookup components and the terminal front
//! end. These types stay light-weight data holders: the corpus store owns the
//! only copy of all Book/Chapter/Verse data for the life of the process, and
//! everything else refers into it by book id and chapter/verse numbers so the
//! multi-megabyte corpus is never duplicated.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Which part of the corpus a book belongs to. `Deuterocanonical` covers the
/// books beyond the 66-book Protestant canon that this corpus carries.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Testament {
    Old,
    New,
    Deuterocanonical,
}

impl fmt::Display for Testament {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            Testament::Old => "Old Testament",
            Testament::New => "New Testament",
            Testament::Deuterocanonical => "Deuterocanon",
        };
        write!(f, "{label}")
    }
}

/// One fully loaded scripture book. Built exactly once per book id by the
/// corpus store and immutable afterwards.
#[derive(Debug, Clone)]
pub struct Book {
    /// Canonical short code, e.g. `1KI`. Stable across display names and
    /// aliases; every other component keys on this.
    pub id: String,
    /// Canonical display name, e.g. "1 Kings".
    pub name: String,
    pub testament: Testament,
    /// Chapters in reading order; `chapters[0]` is chapter 1.
    pub chapters: Vec<Chapter>,
}

impl Book {
    /// Look up a chapter by its 1-based number.
    pub fn chapter(&self, number: u32) -> Option<&Chapter> {
        self.chapters.get(number.checked_sub(1)? as usize)
    }

    /// Total verses across every chapter.
    pub fn verse_count(&self) -> usize {
        self.chapters.iter().map(|c| c.verses.len()).sum()
    }

    /// Map a flat offset in `0..verse_count()` to the chapter and verse at
    /// that position, walking chapters in order. This is the per-book half of
    /// the prefix-sum mapping used by random selection.
    pub fn verse_at(&self, mut offset: usize) -> Option<(&Chapter, &Verse)> {
        for chapter in &self.chapters {
            if offset < chapter.verses.len() {
                return Some((chapter, &chapter.verses[offset]));
            }
            offset -= chapter.verses.len();
        }
        None
    }
}

/// One chapter, owned by exactly one `Book`.
#[derive(Debug, Clone)]
pub struct Chapter {
    /// 1-based ordinal within the book.
    pub number: u32,
    /// Verses in order; contiguous from verse 1. The corpus store rejects
    /// documents where this does not hold.
    pub verses: Vec<Verse>,
}

impl Chapter {
    /// Look up a verse by its 1-based number.
    pub fn verse(&self, number: u32) -> Option<&Verse> {
        self.verses.get(number.checked_sub(1)? as usize)
    }
}

/// One verse, owned by exactly one `Chapter`.
#[derive(Debug, Clone)]
pub struct Verse {
    /// 1-based ordinal within the chapter.
    pub number: u32,
    pub text: String,
}

/// A resolved, book-qualified locator. No chapter means "table of contents";
/// a chapter with no verse bounds means the whole chapter.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Reference {
    /// Canonical book id (not the user's spelling).
    pub book_id: String,
    pub chapter: Option<u32>,
    pub verse_start: Option<u32>,
    /// Only ever present together with `verse_start`, and never below it.
    pub verse_end: Option<u32>,
}

impl fmt::Display for Reference {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.book_id)?;
        if let Some(chapter) = self.chapter {
            write!(f, " {chapter}")?;
            if let Some(start) = self.verse_start {
                write!(f, ":{start}")?;
                if let Some(end) = self.verse_end {
                    write!(f, "-{end}")?;
                }
            }
        }
        Ok(())
    }
}

/// One numbered reading citation embedded in a calendar entry. The raw
/// `[<n>] ` label has already been stripped; `reference` is ready for the
/// reference parser as-is.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Citation {
    /// 1-based, user-facing selection number.
    pub index: u32,
    /// Raw reference text, e.g. `John 3.15-18`.
    pub reference: String,
}

impl fmt::Display for Citation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}] {}", self.index, self.reference)
    }
}

/// The liturgical record for one supported date. Loaded once from the
/// calendar dataset and read-only afterwards.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CalendarEntry {
    pub month: u32,
    pub day: u32,
    /// Commemorated saints, free text.
    pub saints: String,
    /// Feast name(s); empty for an ordinary day, which is still a valid
    /// entry.
    pub feasts: String,
    /// Fasting-rule label, e.g. "Wine and oil allowed".
    pub fasting: String,
    /// Readings in liturgical order. Opaque strings until a caller resolves
    /// one by its index.
    pub readings: Vec<Citation>,
}

impl CalendarEntry {
    /// Fetch a reading by its 1-based citation index.
    pub fn reading(&self, index: u32) -> Option<&Citation> {
        self.readings.iter().find(|c| c.index == index)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn book() -> Book {
        Book {
            id: "JHN".into(),
            name: "John".into(),
            testament: Testament::New,
            chapters: vec![
                Chapter {
                    number: 1,
                    verses: vec![
                        Verse { number: 1, text: "a".into() },
                        Verse { number: 2, text: "b".into() },
                    ],
                },
                Chapter {
                    number: 2,
                    verses: vec![Verse { number: 1, text: "c".into() }],
                },
            ],
        }
    }

    #[test]
    fn chapter_and_verse_lookups_are_one_based() {
        let book = book();
        assert_eq!(
            book.chapter(1).and_then(|c| c.verse(2)).map(|v| v.text.as_str()),
            Some("b")
        );
        assert!(book.chapter(0).is_none());
        assert!(book.chapter(3).is_none());
        assert!(book.chapter(2).and_then(|c| c.verse(2)).is_none());
    }

    #[test]
    fn verse_at_walks_chapters_in_order() {
        let book = book();
        assert_eq!(book.verse_count(), 3);
        let (chapter, verse) = book.verse_at(2).expect("offset in range");
        assert_eq!((chapter.number, verse.number), (2, 1));
        assert!(book.verse_at(3).is_none());
    }

    #[test]
    fn reference_display_is_canonical() {
        let reference = Reference {
            book_id: "JHN".into(),
            chapter: Some(3),
            verse_start: Some(16),
            verse_end: Some(17),
        };
        assert_eq!(reference.to_string(), "JHN 3:16-17");
    }
}
