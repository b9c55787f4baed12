//! Lexical parsing of reference strings. The grammar is
//! `<book-name-text> [<chapter> [<sep><verse>[-<verse>]]]` with `<sep>` being
//! either `.` or `:`. The book-name-text is everything before the last
//! whitespace-delimited run of the form `<digits>[<sep><digits>[-<digits>]]`,
//! which is what keeps the leading "1" of "1 Kings 3" attached to the book
//! name instead of being read as a chapter. Parsing never consults the
//! corpus; whether the book exists is the resolver's concern.

use crate::error::{LookupError, MalformedReason};

/// Parser output: the untouched book-name text plus whichever chapter/verse
/// positions the trailing run supplied. Still unresolved; `book` is whatever
/// the user typed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RawReference {
    pub book: String,
    pub chapter: Option<u32>,
    pub verse_start: Option<u32>,
    pub verse_end: Option<u32>,
}

/// Split a raw reference into book text and numeric positions, or fail with
/// the specific reason the input does not fit the grammar.
pub fn parse(raw: &str) -> Result<RawReference, LookupError> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return Err(malformed(raw, MalformedReason::EmptyReference));
    }

    let (book, run) = match trimmed.rsplit_once(char::is_whitespace) {
        Some((head, tail)) if looks_like_run(tail) => (head.trim_end(), Some(tail)),
        Some(_) => (trimmed, None),
        // Single token: a numeric run with no book text in front of it is
        // not a book-only query, it is a reference with the book missing.
        None if looks_like_run(trimmed) => {
            return Err(malformed(raw, MalformedReason::EmptyReference));
        }
        None => (trimmed, None),
    };

    let (chapter, verse_start, verse_end) = match run {
        Some(run) => {
            let (chapter, start, end) = parse_run(run).map_err(|reason| malformed(raw, reason))?;
            (Some(chapter), start, end)
        }
        None => (None, None, None),
    };

    Ok(RawReference {
        book: book.to_string(),
        chapter,
        verse_start,
        verse_end,
    })
}

/// Whether a token is an attempted chapter/verse run. Bare digits and
/// anything digit-led with a verse separator count, so "3", "3:16" and the
/// misspelled "3:x" are all parsed (the last one failing with a precise
/// diagnosis). A concatenated book name like "1Kings" is neither, and stays
/// part of the book text.
fn looks_like_run(token: &str) -> bool {
    if !token.chars().next().is_some_and(|c| c.is_ascii_digit()) {
        return false;
    }
    token.chars().all(|c| c.is_ascii_digit()) || token.contains(['.', ':'])
}

/// Parse the trailing `<chapter>[<sep><verse>[-<verse>]]` run.
fn parse_run(run: &str) -> Result<(u32, Option<u32>, Option<u32>), MalformedReason> {
    let (chapter_text, verse_text) = match run.find(['.', ':']) {
        Some(pos) => (&run[..pos], Some(&run[pos + 1..])),
        None => (run, None),
    };
    let chapter = parse_number(chapter_text)?;

    let Some(verse_text) = verse_text else {
        return Ok((chapter, None, None));
    };
    if verse_text.is_empty() {
        return Err(MalformedReason::DanglingSeparator);
    }

    match verse_text.split_once('-') {
        None => Ok((chapter, Some(parse_number(verse_text)?), None)),
        Some((start, end)) => {
            if start.is_empty() || end.is_empty() {
                return Err(MalformedReason::DanglingSeparator);
            }
            let start = parse_number(start)?;
            let end = parse_number(end)?;
            if end < start {
                return Err(MalformedReason::DescendingRange { start, end });
            }
            Ok((chapter, Some(start), Some(end)))
        }
    }
}

fn parse_number(text: &str) -> Result<u32, MalformedReason> {
    if text.is_empty() || !text.chars().all(|c| c.is_ascii_digit()) {
        return Err(MalformedReason::NonNumericToken(text.to_string()));
    }
    text.parse()
        .map_err(|_| MalformedReason::NonNumericToken(text.to_string()))
}

fn malformed(raw: &str, reason: MalformedReason) -> LookupError {
    LookupError::Malformed {
        input: raw.to_string(),
        reason,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parsed(raw: &str) -> RawReference {
        parse(raw).expect("reference should parse")
    }

    fn reason(raw: &str) -> MalformedReason {
        match parse(raw) {
            Err(LookupError::Malformed { reason, .. }) => reason,
            other => panic!("expected Malformed, got {other:?}"),
        }
    }

    #[test]
    fn book_only_queries_keep_the_whole_input() {
        let r = parsed("Wisdom of Solomon");
        assert_eq!(r.book, "Wisdom of Solomon");
        assert_eq!((r.chapter, r.verse_start, r.verse_end), (None, None, None));
    }

    #[test]
    fn a_leading_number_belongs_to_the_book_name() {
        let r = parsed("1 Kings 3.1-5");
        assert_eq!(r.book, "1 Kings");
        assert_eq!(r.chapter, Some(3));
        assert_eq!((r.verse_start, r.verse_end), (Some(1), Some(5)));

        // With no trailing run, even a numbered name is a book-only query.
        let r = parsed("1 Kings");
        assert_eq!(r.book, "1 Kings");
        assert_eq!(r.chapter, None);

        // Concatenated spellings are not chapter/verse runs.
        let r = parsed("1Kings");
        assert_eq!(r.book, "1Kings");
        assert_eq!(r.chapter, None);
        let r = parsed("4Maccabees 2");
        assert_eq!(r.book, "4Maccabees");
        assert_eq!(r.chapter, Some(2));
    }

    #[test]
    fn chapter_without_verse() {
        let r = parsed("4 Maccabees 2");
        assert_eq!(r.book, "4 Maccabees");
        assert_eq!(r.chapter, Some(2));
        assert_eq!((r.verse_start, r.verse_end), (None, None));
    }

    #[test]
    fn dot_and_colon_separators_parse_identically() {
        assert_eq!(parsed("John 3:16"), parsed("John 3.16"));
        assert_eq!(parsed("John 3:16-17"), parsed("John 3.16-17"));
    }

    #[test]
    fn single_verse_has_no_end_bound() {
        let r = parsed("John 3:16");
        assert_eq!((r.verse_start, r.verse_end), (Some(16), None));
    }

    #[test]
    fn surrounding_whitespace_is_tolerated() {
        assert_eq!(parsed("  John   3:16 "), parsed("John 3:16"));
    }

    #[test]
    fn empty_and_bookless_inputs_are_rejected() {
        assert_eq!(reason(""), MalformedReason::EmptyReference);
        assert_eq!(reason("   "), MalformedReason::EmptyReference);
        assert_eq!(reason("3:16"), MalformedReason::EmptyReference);
    }

    #[test]
    fn non_numeric_tokens_are_named() {
        assert_eq!(
            reason("John 3:x"),
            MalformedReason::NonNumericToken("x".into())
        );
        assert_eq!(
            reason("John 3.1.5"),
            MalformedReason::NonNumericToken("1.5".into())
        );
    }

    #[test]
    fn dangling_separators_are_rejected() {
        assert_eq!(reason("John 3:"), MalformedReason::DanglingSeparator);
        assert_eq!(reason("John 3:16-"), MalformedReason::DanglingSeparator);
    }

    #[test]
    fn descending_ranges_are_rejected_at_parse_time() {
        assert_eq!(
            reason("John 3:18-15"),
            MalformedReason::DescendingRange { start: 18, end: 15 }
        );
    }
}
