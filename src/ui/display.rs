//! One-shot terminal rendering: the day's entry beside the Orthodox cross,
//! resolved passages, and random picks. All the real lookup work happens in
//! the core modules; this layer only wraps, pads, and colors whatever
//! structured result it is handed.

use chrono::NaiveDate;
use crossterm::style::Stylize;

use crate::models::CalendarEntry;
use crate::scripture::{Passage, VersePick};
use crate::ui::helpers::{pad, wrap, wrap_hanging};

const ORTHODOX_CROSS: [&str; 9] = [
    "      ██",
    "    ██████",
    "      ██",
    "  ██████████",
    "      ██",
    "      ██",
    "    ████",
    "      ████",
    "      ██",
];

/// Gap between the cross column and the field column.
const TEXT_GAP: usize = 8;
/// Wrap width for field text and verse text.
const WRAP_WIDTH: usize = 60;

/// Print one day's liturgical record, cross on the left, labeled fields on
/// the right, exactly the layout the dataset was designed around.
pub fn print_day(date: NaiveDate, entry: &CalendarEntry) {
    println!("{}", format!("📅 {}", date.format("%A, %B %-d, %Y")).bold());
    println!();

    let fields: [(&str, Vec<String>); 4] = [
        ("[Saints]:", wrap(&entry.saints, WRAP_WIDTH)),
        ("[Feasts]:", wrap(&entry.feasts, WRAP_WIDTH)),
        ("[Fasting]:", wrap(&entry.fasting, WRAP_WIDTH)),
        ("[Readings]:", reading_lines(entry)),
    ];

    let label_width = fields.iter().map(|(l, _)| l.len()).max().unwrap_or(0);
    let cross_width = ORTHODOX_CROSS
        .iter()
        .map(|l| l.chars().count())
        .max()
        .unwrap_or(0);

    let mut rows: Vec<(Option<&str>, String)> = Vec::new();
    for (label, lines) in fields {
        for (i, line) in lines.into_iter().enumerate() {
            rows.push((if i == 0 { Some(label) } else { None }, line));
        }
    }

    for i in 0..rows.len().max(ORTHODOX_CROSS.len()) {
        let cross_col = pad(ORTHODOX_CROSS.get(i).copied().unwrap_or(""), cross_width);
        match rows.get(i) {
            Some((label, line)) => {
                let label_col = pad(label.unwrap_or(""), label_width);
                println!(
                    "{}{}{} {}",
                    cross_col.dark_yellow(),
                    " ".repeat(TEXT_GAP),
                    label_col.bold(),
                    line
                );
            }
            None => println!("{}", cross_col.dark_yellow()),
        }
    }
}

/// One wrapped line set per reading, hanging-indented under its citation
/// number.
fn reading_lines(entry: &CalendarEntry) -> Vec<String> {
    let lines: Vec<String> = entry
        .readings
        .iter()
        .flat_map(|citation| wrap_hanging(&citation.to_string(), WRAP_WIDTH, 2))
        .collect();
    if lines.is_empty() {
        vec![String::new()]
    } else {
        lines
    }
}

/// Print a resolved passage in reading order.
pub fn print_passage(passage: &Passage<'_>) {
    match passage {
        Passage::Contents { book, chapters, .. } => {
            println!("{}", book.bold());
            let list = chapters
                .iter()
                .map(u32::to_string)
                .collect::<Vec<_>>()
                .join(", ");
            println!("Chapters: {list}");
        }
        Passage::Verses {
            book,
            chapter,
            verses,
            ..
        } => {
            println!("{}", format!("{book} {chapter}").bold());
            for &(number, text) in verses {
                for (i, line) in wrap(text, WRAP_WIDTH).into_iter().enumerate() {
                    if i == 0 {
                        println!("{} {line}", format!("{number:>3}").dark_grey());
                    } else {
                        println!("    {line}");
                    }
                }
            }
        }
    }
}

/// Print one randomly drawn verse with its full coordinates.
pub fn print_pick(pick: &VersePick<'_>) {
    println!(
        "{}",
        format!("{} {}:{}", pick.book, pick.chapter, pick.verse).bold()
    );
    for line in wrap(pick.text, WRAP_WIDTH) {
        println!("{line}");
    }
}
