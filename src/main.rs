use clap::{Parser, Subcommand, builder::PossibleValuesParser};
use std::{fs::File, io::BufReader, path::PathBuf};
use thiserror::Error;
use tilawah::{
    Composer, DisplayOptions, Language, Markup, Prayer, ReferenceError, VerseRange,
    all_languages, profile::preset, surah::display_name, to_positional_numeral,
};
use tracing_subscriber::EnvFilter;

#[derive(Parser, Debug)]
#[command(name = "tilawah")]
#[command(about = "Compose IndoPak Quran verses into display markup", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Render prayers from a JSON dataset as HTML
    Render {
        /// Path to the dataset (array of prayers)
        data: PathBuf,

        /// One block per word instead of continuous text
        #[arg(short, long)]
        word_by_word: bool,

        /// Translation languages to show (repeatable; default all)
        #[arg(short, long = "lang", value_parser = parse_language)]
        langs: Vec<Language>,

        /// Only render the prayer with this id
        #[arg(short, long)]
        prayer: Option<String>,

        /// Normalization applied to verse text and words
        #[arg(
            long,
            default_value = "display",
            value_parser = PossibleValuesParser::new(preset::PROFILE_NAMES.iter().copied())
        )]
        profile: String,
    },

    /// List the translation languages `--lang` accepts
    Langs,

    /// Expand a verse reference such as 2:201 or 112:1-4
    Refs { reference: String },

    /// Print a number in Arabic-Indic digits
    Numeral { n: u64 },
}

#[derive(Debug, Error)]
enum CliError {
    #[error("cannot read {path}: {source}")]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("invalid dataset: {0}")]
    Json(#[from] serde_json::Error),
    #[error(transparent)]
    Reference(#[from] ReferenceError),
    #[error("no prayer with id {0:?}")]
    UnknownPrayer(String),
    #[error("unknown normalization profile {0:?}")]
    UnknownProfile(String),
}

fn parse_language(s: &str) -> Result<Language, String> {
    Language::from_key(s).ok_or_else(|| format!("unknown language {s:?}"))
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    if let Err(e) = run(Cli::parse()) {
        eprintln!("Error: {e}");
        std::process::exit(1);
    }
}

fn run(cli: Cli) -> Result<(), CliError> {
    match cli.command {
        Commands::Render {
            data,
            word_by_word,
            langs,
            prayer,
            profile,
        } => handle_render(data, word_by_word, langs, prayer, &profile),
        Commands::Refs { reference } => handle_refs(&reference),
        Commands::Langs => {
            for line in language_lines() {
                println!("{line}");
            }
            Ok(())
        }
        Commands::Numeral { n } => {
            println!("{}", to_positional_numeral(n));
            Ok(())
        }
    }
}

fn handle_render(
    data: PathBuf,
    word_by_word: bool,
    langs: Vec<Language>,
    only: Option<String>,
    profile: &str,
) -> Result<(), CliError> {
    let profile =
        preset::by_name(profile).ok_or_else(|| CliError::UnknownProfile(profile.to_string()))?;
    let composer = Composer::new(profile);

    let file = File::open(&data).map_err(|source| CliError::Io {
        path: data.clone(),
        source,
    })?;
    let prayers: Vec<Prayer> = serde_json::from_reader(BufReader::new(file))?;
    tracing::debug!(count = prayers.len(), path = %data.display(), "loaded dataset");

    let mut options = DisplayOptions::default().word_by_word(word_by_word);
    if !langs.is_empty() {
        options = options.only(langs);
    }

    let selected: Vec<&Prayer> = match &only {
        Some(id) => {
            let found: Vec<_> = prayers.iter().filter(|p| &p.id == id).collect();
            if found.is_empty() {
                return Err(CliError::UnknownPrayer(id.clone()));
            }
            found
        }
        None => prayers.iter().collect(),
    };

    for prayer in selected {
        match composer.prayer(prayer, &options) {
            Some(view) => println!("{}", Markup(&view)),
            None => tracing::warn!(id = %prayer.id, "prayer has no verses, skipped"),
        }
    }
    Ok(())
}

/// `<Key>  <tag>  <dir>  <translator>` per configured language.
fn language_lines() -> Vec<String> {
    all_languages()
        .iter()
        .map(|lang| {
            format!(
                "{:<8} {:<3} {:<4} {}",
                lang.capitalized(),
                lang.tag(),
                lang.direction().as_str(),
                lang.default_translator()
            )
        })
        .collect()
}

fn handle_refs(reference: &str) -> Result<(), CliError> {
    let range: VerseRange = reference.parse()?;
    println!("{} [{}], {} verse(s)", display_name(range.surah), range, range.len());
    for key in range.verse_keys() {
        println!("{key}");
    }
    println!("{}", range.url());
    Ok(())
}
