//! `namefix` binary: runs the naming pass over a JSON descriptor set.
//!
//! Reads from `--input` (or stdin), writes to `--output` (or stdout). Logs go
//! to stderr so the JSON stream stays clean.
use std::fs::File;
use std::io::{self, BufReader, BufWriter};
use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;
use tracing::error;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use namefix::conf::DEFAULT_LOG_FILTER;
use namefix::error::NamefixError;
use namefix::naming::snake::CamelStyle;
use namefix::pipeline::{self, rewriter::FieldRewriter};
use namefix::Normalizer;

#[derive(Debug, Parser)]
#[command(name = "namefix", version, about = "Record idiomatic exported names for descriptor fields")]
struct Args {
    /// Descriptor set to read (stdin when omitted).
    #[arg(short, long)]
    input: Option<PathBuf>,

    /// Where to write the rewritten set (stdout when omitted).
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// JSON array of extra initialisms (overrides NAMEFIX_INITIALISMS_PATH).
    #[arg(long)]
    initialisms: Option<PathBuf>,

    /// Keep the first word of each name as written (`userID` rather than `UserID`).
    #[arg(long)]
    lower_camel: bool,

    /// Start from an empty dictionary instead of the built-in one.
    #[arg(long)]
    no_default_initialisms: bool,
}

fn main() -> ExitCode {
    tracing_subscriber::registry()
        .with(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| DEFAULT_LOG_FILTER.into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(io::stderr))
        .init();

    let args = Args::parse();
    match run(&args) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            error!("{e}");
            ExitCode::FAILURE
        }
    }
}

fn run(args: &Args) -> Result<(), NamefixError> {
    let table = pipeline::load_table(!args.no_default_initialisms, args.initialisms.as_deref())?;
    let style = if args.lower_camel {
        CamelStyle::Lower
    } else {
        CamelStyle::Upper
    };
    let rewriter = FieldRewriter::new(Normalizer::new(table), style);

    let reader: Box<dyn io::Read> = match &args.input {
        Some(path) => Box::new(BufReader::new(File::open(path).map_err(|e| {
            NamefixError::ReadFile {
                path: path.clone(),
                source: e,
            }
        })?)),
        None => Box::new(io::stdin().lock()),
    };

    let writer: Box<dyn io::Write> = match &args.output {
        Some(path) => Box::new(BufWriter::new(File::create(path).map_err(|e| {
            NamefixError::WriteFile {
                path: path.clone(),
                source: e,
            }
        })?)),
        None => Box::new(io::stdout().lock()),
    };

    pipeline::process(reader, writer, &rewriter)?;
    Ok(())
}
