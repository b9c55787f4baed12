//! The scripture corpus store. One JSON document per book on disk, loaded
//! lazily the first time any component asks for that book and memoized for
//! the rest of the process. The store is the sole owner of all
//! Book/Chapter/Verse data; everything else borrows into it.

use std::collections::HashMap;
use std::fs::File;
use std::io::BufReader;
use std::path::PathBuf;

use serde::Deserialize;
use tracing::{debug, warn};

use crate::error::LookupError;
use crate::models::{Book, Chapter, Testament, Verse};
use crate::paths;
use crate::scripture::names::BOOKS;

/// On-disk shape of one book: chapter number maps to its position in
/// `chapters`, and each chapter is the ordered list of verse texts. The array
/// encoding makes verse numbering contiguous from 1 by construction.
#[derive(Debug, Deserialize)]
struct BookDocument {
    id: String,
    name: String,
    testament: Testament,
    chapters: Vec<Vec<String>>,
}

/// Cached verse count for one successfully loaded book, in canonical book
/// order. The backbone of the prefix-sum mapping for random selection.
#[derive(Debug, Clone)]
pub struct BookCount {
    pub id: String,
    pub verses: usize,
}

/// Lazy, memoized loader over a directory of `<BOOKID>.json` documents.
pub struct CorpusStore {
    root: PathBuf,
    books: HashMap<String, Book>,
    totals: Option<Vec<BookCount>>,
}

impl CorpusStore {
    /// Store over an explicit corpus directory. Nothing is read until the
    /// first `load`.
    pub fn new(root: PathBuf) -> Self {
        Self {
            root,
            books: HashMap::new(),
            totals: None,
        }
    }

    /// Store over the default corpus location (working-tree `data/corpus`,
    /// else the per-user install directory).
    pub fn open_default() -> anyhow::Result<Self> {
        Ok(Self::new(paths::corpus_dir()?))
    }

    /// Fetch a book, reading its document on first request. Repeated calls
    /// for the same id return the same in-memory structure. A failure is
    /// scoped to this one book and leaves every other book loadable.
    pub fn load(&mut self, book_id: &str) -> Result<&Book, LookupError> {
        if !self.books.contains_key(book_id) {
            let book = self.read_book(book_id)?;
            debug!(
                book = book_id,
                chapters = book.chapters.len(),
                "loaded corpus document"
            );
            self.books.insert(book_id.to_string(), book);
        }
        Ok(&self.books[book_id])
    }

    /// Verse count for one book, loading it if needed.
    pub fn verse_count(&mut self, book_id: &str) -> Result<usize, LookupError> {
        Ok(self.load(book_id)?.verse_count())
    }

    /// Verses across the whole corpus. Computed from the cached per-book
    /// counts; the corpus never changes during the process lifetime.
    pub fn total_verse_count(&mut self) -> usize {
        self.verse_totals().iter().map(|count| count.verses).sum()
    }

    /// Per-book verse counts in canonical order, computed once. Books whose
    /// documents are missing or unreadable are skipped with a warning; they
    /// simply do not take part in corpus-wide selection.
    pub fn verse_totals(&mut self) -> &[BookCount] {
        if self.totals.is_none() {
            let mut totals = Vec::new();
            for info in BOOKS {
                match self.load(info.id) {
                    Ok(book) => totals.push(BookCount {
                        id: book.id.clone(),
                        verses: book.verse_count(),
                    }),
                    Err(err) => warn!(book = info.id, %err, "book absent from corpus totals"),
                }
            }
            self.totals = Some(totals);
        }
        match &self.totals {
            Some(totals) => totals,
            None => &[],
        }
    }

    /// Read and validate one document. The file handle lives only inside
    /// this function, so it is closed on every exit path, parse failures
    /// included.
    fn read_book(&self, book_id: &str) -> Result<Book, LookupError> {
        let path = self.root.join(format!("{book_id}.json"));
        let file = File::open(&path).map_err(|err| {
            unavailable(book_id, format!("cannot open {}: {err}", path.display()))
        })?;
        let doc: BookDocument = serde_json::from_reader(BufReader::new(file))
            .map_err(|err| unavailable(book_id, format!("invalid document: {err}")))?;

        if doc.id != book_id {
            return Err(unavailable(
                book_id,
                format!("document declares id {:?}", doc.id),
            ));
        }
        if doc.chapters.is_empty() {
            return Err(unavailable(book_id, "document has no chapters".into()));
        }
        if let Some(pos) = doc.chapters.iter().position(|verses| verses.is_empty()) {
            return Err(unavailable(
                book_id,
                format!("chapter {} has no verses", pos + 1),
            ));
        }

        Ok(Book {
            id: doc.id,
            name: doc.name,
            testament: doc.testament,
            chapters: doc
                .chapters
                .into_iter()
                .enumerate()
                .map(|(c, verses)| Chapter {
                    number: c as u32 + 1,
                    verses: verses
                        .into_iter()
                        .enumerate()
                        .map(|(v, text)| Verse {
                            number: v as u32 + 1,
                            text,
                        })
                        .collect(),
                })
                .collect(),
        })
    }
}

fn unavailable(book_id: &str, detail: String) -> LookupError {
    LookupError::CorpusUnavailable {
        book_id: book_id.to_string(),
        detail,
    }
}
