use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use ptcg_gallery::deck::{check_total, parse_deck_list};
use ptcg_gallery::logging::init_logging;
use ptcg_gallery::utils::{files, html, json};
use ptcg_gallery::DeckRecord;
use std::path::{Path, PathBuf};
use tracing::info;

/// Turn a Pokémon TCG deck list into a static card image gallery
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// Enable debug logging
    #[arg(short, long, global = true, default_value_t = false)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Parse a deck list, print it as JSON and write the HTML gallery
    Render {
        /// Deck list file, `-` for stdin (defaults to the built-in sample deck)
        input: Option<PathBuf>,

        /// Path where to save the HTML gallery
        #[arg(short, long, default_value = files::DEFAULT_OUTPUT)]
        output: PathBuf,

        /// JSON file with extra type code exceptions
        #[arg(short, long)]
        exceptions: Option<PathBuf>,

        /// Skip printing the JSON record
        #[arg(long, default_value_t = false)]
        no_json: bool,
    },
    /// Parse a deck list and print it as JSON
    Json {
        /// Deck list file, `-` for stdin (defaults to the built-in sample deck)
        input: Option<PathBuf>,

        /// JSON file with extra type code exceptions
        #[arg(short, long)]
        exceptions: Option<PathBuf>,
    },
}

fn load_deck(input: Option<&Path>, exceptions: Option<&Path>) -> Result<(String, DeckRecord)> {
    let mapping = files::load_exception_mapping(exceptions)
        .context("Failed to load exception mapping")?;
    let raw = files::read_deck_input(input).context("Failed to read deck list")?;
    let record = parse_deck_list(&raw, &mapping).context("Failed to parse deck list")?;
    Ok((raw, record))
}

fn report_total(raw: &str, record: &DeckRecord) -> Result<()> {
    let check = check_total(raw, record).context("Failed to read stated total")?;
    match check.warning() {
        Some(warning) => eprintln!("{}", warning),
        None => info!(total = record.total_cards(), "Deck total matches"),
    }
    Ok(())
}

fn main() -> Result<()> {
    let args = Args::parse();
    init_logging(args.verbose);

    match args.command {
        Commands::Render {
            input,
            output,
            exceptions,
            no_json,
        } => {
            let (raw, record) = load_deck(input.as_deref(), exceptions.as_deref())?;
            if !no_json {
                println!("{}", json::to_pretty_json(&record)?);
            }
            report_total(&raw, &record)?;

            let page = html::render_gallery(&record);
            files::write_output(&output, &page)
                .with_context(|| format!("Failed to write {}", output.display()))?;
            println!("HTML file generated: {}", output.display());
        }
        Commands::Json { input, exceptions } => {
            let (raw, record) = load_deck(input.as_deref(), exceptions.as_deref())?;
            println!("{}", json::to_pretty_json(&record)?);
            report_total(&raw, &record)?;
        }
    }

    Ok(())
}
