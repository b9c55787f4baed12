//! Binary entry point that glues the lookup core to the terminal. The
//! pipeline is the same for every subcommand: load the dataset(s) from their
//! default locations, run exactly one lookup, and hand the structured result
//! to the rendering layer. Lookup failures are ordinary errors with precise
//! messages, never panics.

use anyhow::{anyhow, Result};
use chrono::{Local, NaiveDate};
use clap::{Parser, Subcommand};

use orthofetch::{
    scripture, ui, CalendarLookup, CorpusStore, PassageResolver, DATASET_YEAR,
};

#[derive(Parser)]
#[command(
    name = "orthofetch",
    version,
    about = "Orthodox liturgical calendar and scripture lookup"
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand)]
enum Command {
    /// Show the entry for one day of the supported year
    Day { month: u32, day: u32 },
    /// Look up a passage by reference, e.g. "1 Kings 3.1-5" or "John 3:16"
    Read { reference: Vec<String> },
    /// Resolve one of today's readings by its citation number
    Reading { index: u32 },
    /// Show a random verse, optionally constrained to one book
    Random { book: Vec<String> },
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    match cli.command {
        None => show_day(Local::now().date_naive()),
        Some(Command::Day { month, day }) => {
            let date = NaiveDate::from_ymd_opt(DATASET_YEAR, month, day)
                .ok_or_else(|| anyhow!("{month}-{day} is not a valid calendar date"))?;
            show_day(date)
        }
        Some(Command::Read { reference }) => read_passage(&reference.join(" ")),
        Some(Command::Reading { index }) => show_reading(Local::now().date_naive(), index),
        Some(Command::Random { book }) => random_pick(&book.join(" ")),
    }
}

fn show_day(date: NaiveDate) -> Result<()> {
    let calendar = CalendarLookup::open_default()?;
    let entry = calendar.entry_for(date)?;
    ui::print_day(date, entry);
    Ok(())
}

fn read_passage(reference: &str) -> Result<()> {
    let mut resolver = PassageResolver::new(CorpusStore::open_default()?);
    let passage = resolver.resolve_reference(reference)?;
    ui::print_passage(&passage);
    Ok(())
}

fn show_reading(date: NaiveDate, index: u32) -> Result<()> {
    let calendar = CalendarLookup::open_default()?;
    let entry = calendar.entry_for(date)?;
    let citation = entry
        .reading(index)
        .ok_or_else(|| anyhow!("no reading [{index}] for {date}"))?;

    let mut resolver = PassageResolver::new(CorpusStore::open_default()?);
    let passage = resolver.resolve_reference(&citation.reference)?;
    ui::print_passage(&passage);
    Ok(())
}

fn random_pick(book: &str) -> Result<()> {
    let mut resolver = PassageResolver::new(CorpusStore::open_default()?);
    let mut rng = rand::thread_rng();
    let pick = if book.is_empty() {
        scripture::random_verse(resolver.store_mut(), &mut rng)?
    } else {
        let info = resolver.resolve_book_name(book)?;
        scripture::random_verse_in(resolver.store_mut(), info.id, &mut rng)?
    };
    ui::print_pick(&pick);
    Ok(())
}
