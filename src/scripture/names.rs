//! Book name resolution. User-typed names arrive in many spellings ("John",
//! "Jn", "1 Kings", "I Kings", "1Kings", "Wisdom") and all of them have to
//! land on one canonical book id. Resolution is a single exact lookup into an
//! alias table built once at startup, never per-call pattern matching, so the
//! outcome for any given spelling is deterministic and easy to test.

use std::collections::HashMap;

use crate::models::Testament;

/// Catalog row for one book the corpus can carry: canonical id, display
/// name, testament, and the accepted alternate spellings.
#[derive(Debug)]
pub struct BookInfo {
    pub id: &'static str,
    pub name: &'static str,
    pub testament: Testament,
    pub aliases: &'static [&'static str],
}

const fn book(
    id: &'static str,
    name: &'static str,
    testament: Testament,
    aliases: &'static [&'static str],
) -> BookInfo {
    BookInfo {
        id,
        name,
        testament,
        aliases,
    }
}

/// Every book this corpus knows, in canonical order. The deuterocanonical
/// rows carry the Orthodox alternate titles (e.g. "3 Kingdoms" for 1 Kings)
/// as aliases so either tradition's spelling resolves.
pub const BOOKS: &[BookInfo] = &[
    // Old Testament
    book("GEN", "Genesis", Testament::Old, &["Gen", "Gn"]),
    book("EXO", "Exodus", Testament::Old, &["Exod", "Ex"]),
    book("LEV", "Leviticus", Testament::Old, &["Lev", "Lv"]),
    book("NUM", "Numbers", Testament::Old, &["Num", "Nm"]),
    book("DEU", "Deuteronomy", Testament::Old, &["Deut", "Dt"]),
    book("JOS", "Joshua", Testament::Old, &["Josh"]),
    book("JDG", "Judges", Testament::Old, &["Judg", "Jdg"]),
    book("RUT", "Ruth", Testament::Old, &["Ru"]),
    book("1SA", "1 Samuel", Testament::Old, &["1 Sam", "1 Kingdoms"]),
    book("2SA", "2 Samuel", Testament::Old, &["2 Sam", "2 Kingdoms"]),
    book("1KI", "1 Kings", Testament::Old, &["1 Kgs", "3 Kingdoms"]),
    book("2KI", "2 Kings", Testament::Old, &["2 Kgs", "4 Kingdoms"]),
    book("1CH", "1 Chronicles", Testament::Old, &["1 Chron", "1 Chr"]),
    book("2CH", "2 Chronicles", Testament::Old, &["2 Chron", "2 Chr"]),
    book("EZR", "Ezra", Testament::Old, &["Ezr"]),
    book("NEH", "Nehemiah", Testament::Old, &["Neh"]),
    book("EST", "Esther", Testament::Old, &["Esth"]),
    book("JOB", "Job", Testament::Old, &[]),
    book("PSA", "Psalms", Testament::Old, &["Psalm", "Ps", "Psalter"]),
    book("PRO", "Proverbs", Testament::Old, &["Prov", "Prv"]),
    book("ECC", "Ecclesiastes", Testament::Old, &["Eccl", "Qoheleth"]),
    book(
        "SNG",
        "Song of Solomon",
        Testament::Old,
        &["Song of Songs", "Song", "Canticles"],
    ),
    book("ISA", "Isaiah", Testament::Old, &["Isa", "Is"]),
    book("JER", "Jeremiah", Testament::Old, &["Jer"]),
    book("LAM", "Lamentations", Testament::Old, &["Lam"]),
    book("EZK", "Ezekiel", Testament::Old, &["Ezek", "Ez"]),
    book("DAN", "Daniel", Testament::Old, &["Dan", "Dn"]),
    book("HOS", "Hosea", Testament::Old, &["Hos"]),
    book("JOL", "Joel", Testament::Old, &["Jl"]),
    book("AMO", "Amos", Testament::Old, &["Am"]),
    book("OBA", "Obadiah", Testament::Old, &["Obad", "Ob"]),
    book("JON", "Jonah", Testament::Old, &["Jon"]),
    book("MIC", "Micah", Testament::Old, &["Mic"]),
    book("NAM", "Nahum", Testament::Old, &["Nah"]),
    book("HAB", "Habakkuk", Testament::Old, &["Hab"]),
    book("ZEP", "Zephaniah", Testament::Old, &["Zeph"]),
    book("HAG", "Haggai", Testament::Old, &["Hag"]),
    book("ZEC", "Zechariah", Testament::Old, &["Zech"]),
    book("MAL", "Malachi", Testament::Old, &["Mal"]),
    // Deuterocanon
    book("TOB", "Tobit", Testament::Deuterocanonical, &["Tob"]),
    book("JDT", "Judith", Testament::Deuterocanonical, &["Jdt"]),
    book(
        "WIS",
        "Wisdom of Solomon",
        Testament::Deuterocanonical,
        &["Wisdom", "Wis"],
    ),
    book(
        "SIR",
        "Sirach",
        Testament::Deuterocanonical,
        &["Ecclesiasticus", "Wisdom of Sirach"],
    ),
    book("BAR", "Baruch", Testament::Deuterocanonical, &["Bar"]),
    book(
        "LJE",
        "Letter of Jeremiah",
        Testament::Deuterocanonical,
        &["Epistle of Jeremiah"],
    ),
    book("1MA", "1 Maccabees", Testament::Deuterocanonical, &["1 Macc"]),
    book("2MA", "2 Maccabees", Testament::Deuterocanonical, &["2 Macc"]),
    book("3MA", "3 Maccabees", Testament::Deuterocanonical, &["3 Macc"]),
    book("4MA", "4 Maccabees", Testament::Deuterocanonical, &["4 Macc"]),
    book("1ES", "1 Esdras", Testament::Deuterocanonical, &["1 Esd"]),
    book(
        "MAN",
        "Prayer of Manasseh",
        Testament::Deuterocanonical,
        &["Manasseh"],
    ),
    // New Testament
    book("MAT", "Matthew", Testament::New, &["Matt", "Mt"]),
    book("MRK", "Mark", Testament::New, &["Mk"]),
    book("LUK", "Luke", Testament::New, &["Lk"]),
    book("JHN", "John", Testament::New, &["Jn"]),
    book("ACT", "Acts", Testament::New, &["Acts of the Apostles"]),
    book("ROM", "Romans", Testament::New, &["Rom"]),
    book("1CO", "1 Corinthians", Testament::New, &["1 Cor"]),
    book("2CO", "2 Corinthians", Testament::New, &["2 Cor"]),
    book("GAL", "Galatians", Testament::New, &["Gal"]),
    book("EPH", "Ephesians", Testament::New, &["Eph"]),
    book("PHP", "Philippians", Testament::New, &["Phil"]),
    book("COL", "Colossians", Testament::New, &["Col"]),
    book("1TH", "1 Thessalonians", Testament::New, &["1 Thess"]),
    book("2TH", "2 Thessalonians", Testament::New, &["2 Thess"]),
    book("1TI", "1 Timothy", Testament::New, &["1 Tim"]),
    book("2TI", "2 Timothy", Testament::New, &["2 Tim"]),
    book("TIT", "Titus", Testament::New, &["Tit"]),
    book("PHM", "Philemon", Testament::New, &["Phlm"]),
    book("HEB", "Hebrews", Testament::New, &["Heb"]),
    book("JAS", "James", Testament::New, &["Jas"]),
    book("1PE", "1 Peter", Testament::New, &["1 Pet"]),
    book("2PE", "2 Peter", Testament::New, &["2 Pet"]),
    book("1JN", "1 John", Testament::New, &["1 Jn"]),
    book("2JN", "2 John", Testament::New, &["2 Jn"]),
    book("3JN", "3 John", Testament::New, &["3 Jn"]),
    book("JUD", "Jude", Testament::New, &[]),
    book("REV", "Revelation", Testament::New, &["Rev", "Apocalypse"]),
];

/// Exact-lookup resolver over normalized spellings of every canonical name,
/// id, and alias in [`BOOKS`].
pub struct BookNameResolver {
    by_name: HashMap<String, &'static BookInfo>,
}

impl BookNameResolver {
    /// Build the alias table. Happens once per process; after this every
    /// `resolve` call is a single hash lookup.
    pub fn new() -> Self {
        let mut by_name = HashMap::new();
        for info in BOOKS {
            by_name.insert(normalize(info.id), info);
            by_name.insert(normalize(info.name), info);
            for alias in info.aliases {
                by_name.insert(normalize(alias), info);
            }
        }
        Self { by_name }
    }

    /// Map a user-typed book name to its catalog row, or `None` when nothing
    /// matches after normalization and alias lookup. Not fatal to callers;
    /// they report it as an unknown book.
    pub fn resolve(&self, raw: &str) -> Option<&'static BookInfo> {
        self.by_name.get(&normalize(raw)).copied()
    }
}

impl Default for BookNameResolver {
    fn default() -> Self {
        Self::new()
    }
}

/// Collapse the spelling variants that must not distinguish books:
/// case, extra whitespace, a leading roman numeral ("I Kings"), and a
/// numeral glued to the name ("1Kings" or "1KI").
fn normalize(raw: &str) -> String {
    let lowered = raw.to_lowercase();
    let mut tokens: Vec<String> = Vec::new();
    for token in lowered.split_whitespace() {
        let digits = token.chars().take_while(|c| c.is_ascii_digit()).count();
        if digits > 0 && digits < token.len() {
            tokens.push(token[..digits].to_string());
            tokens.push(token[digits..].to_string());
        } else {
            tokens.push(token.to_string());
        }
    }
    if tokens.len() > 1 {
        let folded = match tokens[0].as_str() {
            "i" => Some("1"),
            "ii" => Some("2"),
            "iii" => Some("3"),
            "iv" => Some("4"),
            _ => None,
        };
        if let Some(digit) = folded {
            tokens[0] = digit.to_string();
        }
    }
    tokens.join(" ")
}
