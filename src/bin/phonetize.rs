use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use tracing::info;

use phonetize::Translator;

/// Annotate text lines with phonetic transcriptions.
///
/// Prints `<line>\t<transcriptions>` for every input line whose words are
/// all found in the dictionary; other lines are skipped.
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// Dictionary file, one `<word> <transcription>` entry per line
    dictionary: PathBuf,

    /// Input text file, words separated by single spaces
    input: PathBuf,

    /// Write annotations to this file instead of standard output
    #[arg(long, short)]
    output: Option<PathBuf>,
}

fn main() -> Result<()> {
    let args = Args::parse();

    tracing_subscriber::fmt()
        .with_writer(io::stderr)
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("phonetize=warn")),
        )
        .init();

    let translator = Translator::load(&args.dictionary)
        .with_context(|| format!("failed to load dictionary {}", args.dictionary.display()))?;

    let text = phonetize::read_text(&args.input)
        .with_context(|| format!("failed to read input {}", args.input.display()))?;

    let mut writer: Box<dyn Write> = match args.output {
        Some(ref path) => Box::new(BufWriter::new(
            File::create(path)
                .with_context(|| format!("failed to create output {}", path.display()))?,
        )),
        None => Box::new(BufWriter::new(io::stdout().lock())),
    };

    let stats = translator
        .annotate(&text, &mut writer)
        .context("failed to write annotations")?;

    info!(
        "{} lines read, {} translated, {} dropped",
        stats.lines_read, stats.lines_translated, stats.lines_dropped
    );

    Ok(())
}
