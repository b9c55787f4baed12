//! The error taxonomy shared by every lookup component. All five conditions
//! are recoverable by the caller: the front end turns them into a one-line
//! message instead of aborting, and a failure is always scoped to the smallest
//! unit that caused it (one book, one reference, one date). Nothing here
//! retries, because all data is local and either present or absent.

use chrono::NaiveDate;
use thiserror::Error;

/// Why the reference parser rejected an input. Keeping the diagnosis as an
/// enum (rather than a pre-rendered string) lets tests assert the exact
/// failure and lets the front end phrase each case differently.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum MalformedReason {
    /// The input was empty, or stripping the chapter/verse run left no book
    /// name behind (e.g. a bare `"3:16"`).
    #[error("no book name")]
    EmptyReference,
    /// A chapter or verse position held something other than digits.
    #[error("expected a number, found {0:?}")]
    NonNumericToken(String),
    /// A `.`/`:` or `-` with nothing after it.
    #[error("dangling separator")]
    DanglingSeparator,
    /// A range written high-to-low, e.g. `3:18-15`.
    #[error("descending verse range {start}-{end}")]
    DescendingRange { start: u32, end: u32 },
}

/// Every way a lookup can fail. Each variant carries the exact coordinate or
/// text that went wrong so messages can name it precisely.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LookupError {
    /// The reference string does not fit the grammar. Purely lexical; the
    /// books named in a malformed reference were never consulted.
    #[error("malformed reference {input:?}: {reason}")]
    Malformed {
        input: String,
        reason: MalformedReason,
    },

    /// The book name survived parsing but matched neither a canonical name
    /// nor any alias.
    #[error("unknown book {name:?}")]
    UnknownBook { name: String },

    /// The book exists in the catalog but its corpus document is missing or
    /// unreadable. Never affects any other book.
    #[error("corpus data for {book_id} unavailable: {detail}")]
    CorpusUnavailable { book_id: String, detail: String },

    /// A chapter or verse number past what the book actually contains.
    /// `verse` is `None` when the chapter itself was out of range.
    #[error("{book} has no {}", coordinate(.chapter, .verse))]
    OutOfRange {
        book: String,
        chapter: u32,
        verse: Option<u32>,
    },

    /// The date is outside the supported calendar dataset. Distinct from an
    /// ordinary day, which is a real entry with no feast text.
    #[error("no calendar entry for {date}")]
    NoEntry { date: NaiveDate },
}

fn coordinate(chapter: &u32, verse: &Option<u32>) -> String {
    match verse {
        Some(v) => format!("verse {v} in chapter {chapter}"),
        None => format!("chapter {chapter}"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn out_of_range_names_the_offending_coordinate() {
        let err = LookupError::OutOfRange {
            book: "John".into(),
            chapter: 99,
            verse: None,
        };
        assert_eq!(err.to_string(), "John has no chapter 99");

        let err = LookupError::OutOfRange {
            book: "John".into(),
            chapter: 3,
            verse: Some(40),
        };
        assert_eq!(err.to_string(), "John has no verse 40 in chapter 3");
    }

    #[test]
    fn malformed_reports_the_reason() {
        let err = LookupError::Malformed {
            input: "John 3:x".into(),
            reason: MalformedReason::NonNumericToken("x".into()),
        };
        assert_eq!(
            err.to_string(),
            "malformed reference \"John 3:x\": expected a number, found \"x\""
        );
    }
}
