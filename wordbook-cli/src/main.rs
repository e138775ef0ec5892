//! wordbook command-line front end
//!
//! Loads a vocabulary database and prints statistics, searches and date
//! slices of it.
//!
//! Usage:
//!   wordbook --db vocabulary.db stats
//!   wordbook --db vocabulary.db range --from 01.01.2024 --to 07.01.2024
//!   wordbook --db vocabulary.db add serendipity --prop c1 --en "happy accident"

use std::path::{Path, PathBuf};

use anyhow::{Context, Result, bail};
use chrono::NaiveDate;
use clap::{Parser, Subcommand};
use tracing::{Level, debug, info};
use tracing_subscriber::FmtSubscriber;
use wordbook_store::{RecordSource, SqliteRecordSource};
use wordbook_types::{Entry, WordId, parse_date};
use wordbook_vocab::{JsonExporter, Vocabulary, VocabularyConfig};

#[derive(Parser, Debug)]
#[command(name = "wordbook")]
#[command(about = "Track and query the words you have learned")]
struct Args {
    /// Path to the vocabulary database
    #[arg(long, env = "WORDBOOK_DB", default_value = "vocabulary.db")]
    db: PathBuf,

    /// Optional TOML settings file
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Enable verbose debug logging
    #[arg(short, long)]
    verbose: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Print the statistics report
    Stats,
    /// Print statistics followed by the first entries
    Show,
    /// Words containing, or contained in, the given text
    Search { item: String },
    /// Words carrying all of the given properties
    Props {
        #[arg(required = true)]
        properties: Vec<String>,
    },
    /// Words with the given ids
    Id {
        #[arg(required = true)]
        ids: Vec<String>,
    },
    /// Words learned on a day (dd.mm.yyyy)
    Day { date: String },
    /// Words learned in an inclusive date range
    Range {
        #[arg(long)]
        from: Option<String>,
        #[arg(long)]
        to: Option<String>,
    },
    /// Words from the active day N days before the last one
    Ago { days: usize },
    /// Every word, alphabetically
    Words {
        #[arg(short, long)]
        reverse: bool,
    },
    /// Store a new word in the database
    Add {
        word: String,
        /// Learn date (dd.mm.yyyy), today if omitted
        #[arg(long)]
        date: Option<String>,
        #[arg(long = "prop")]
        properties: Vec<String>,
        #[arg(long = "en")]
        english: Vec<String>,
        #[arg(long = "ru")]
        russian: Vec<String>,
    },
    /// Write the learning chart and the word list as JSON
    Export {
        /// Output directory, overrides the config
        #[arg(short, long)]
        out: Option<PathBuf>,
    },
}

fn main() -> Result<()> {
    let args = Args::parse();
    let log_level = if args.verbose { Level::DEBUG } else { Level::INFO };
    FmtSubscriber::builder()
        .with_max_level(log_level)
        .with_target(false)
        .compact()
        .init();

    let config = match &args.config {
        Some(path) => VocabularyConfig::from_toml_file(path)
            .with_context(|| format!("failed to read config {}", path.display()))?,
        None => VocabularyConfig::default(),
    };
    debug!(?config, "Configuration loaded");

    match args.command {
        Command::Add {
            word,
            date,
            properties,
            english,
            russian,
        } => add_word(&args.db, &word, date.as_deref(), &properties, &english, &russian),
        command => {
            let vocab = Vocabulary::open_with_config(&args.db, config)
                .with_context(|| format!("failed to load {}", args.db.display()))?;
            run_query(&vocab, command)
        }
    }
}

fn run_query(vocab: &Vocabulary, command: Command) -> Result<()> {
    match command {
        Command::Stats => println!("{}", vocab.statistics()?),
        Command::Show => println!("{vocab}"),
        Command::Search { item } => print_entries(vocab.search(item.as_str())),
        Command::Props { properties } => print_entries(vocab.search_by_properties(&properties)),
        Command::Id { ids } => {
            let ids = ids
                .iter()
                .map(|id| WordId::parse(id))
                .collect::<Result<Vec<_>, _>>()?;
            print_entries(vocab.search_by_id(&ids));
        }
        Command::Day { date } => print_entries(vocab.at(parse_arg_date(&date)?)),
        Command::Range { from, to } => {
            let from = from.as_deref().map(parse_arg_date).transpose()?;
            let to = to.as_deref().map(parse_arg_date).transpose()?;
            let found = match (from, to) {
                (Some(from), Some(to)) => vocab.get(from..=to)?,
                (Some(from), None) => vocab.get(from..)?,
                (None, Some(to)) => vocab.get(..=to)?,
                (None, None) => vocab.get(..)?,
            };
            print_entries(found);
        }
        Command::Ago { days } => print_entries(vocab.item_before_now(days)?),
        Command::Words { reverse } => print_entries(&vocab.all_words(reverse)),
        Command::Export { out } => {
            let dir = out.unwrap_or_else(|| vocab.config().export_dir.clone());
            let exporter = JsonExporter::new(dir);
            let chart = vocab.export_chart(&exporter)?;
            let document = vocab.export_document(&exporter)?;
            info!(chart = %chart.display(), document = %document.display(), "Export complete");
        }
        Command::Add { word, .. } => bail!("'{word}' must be added without loading the vocabulary"),
    }
    Ok(())
}

fn add_word(
    db: &Path,
    word: &str,
    date: Option<&str>,
    properties: &[String],
    english: &[String],
    russian: &[String],
) -> Result<()> {
    let mut entry = Entry::new(word)
        .with_properties(properties)
        .with_english(english.iter().cloned())
        .with_russian(russian.iter().cloned());
    if entry.is_empty() {
        bail!("word must not be empty");
    }
    if let Some(date) = date {
        entry = entry.learned_on(parse_arg_date(date)?);
    }

    let source = SqliteRecordSource::create(db)
        .with_context(|| format!("failed to open {}", db.display()))?;
    if source.contains_word(entry.word())? {
        info!(word = %entry.word(), "A stored word already contains this one");
    }
    source.append(&entry.to_record())?;
    info!(word = %entry.word(), date = %entry.date(), "Word stored");
    Ok(())
}

fn parse_arg_date(text: &str) -> Result<NaiveDate> {
    parse_date(text).with_context(|| format!("bad date argument '{text}'"))
}

fn print_entries<'a>(entries: impl IntoIterator<Item = &'a Entry>) {
    let mut count = 0;
    for entry in entries {
        println!("{entry}");
        count += 1;
    }
    info!(count, "Entries listed");
}
