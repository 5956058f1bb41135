use std::fs;
use std::io::{self, Read, Write};
use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::Context;
use clap::Parser;
use log::{info, LevelFilter};

use batch_heap::driver;

/// Sorts whitespace-separated batches through a min or max binary heap.
///
/// `min-heap` or `max-heap` starts a batch of integers, floats or words;
/// `exit` stops reading.
#[derive(Parser, Debug)]
#[command(version, about)]
struct Cli {
    /// Input file (defaults to standard input)
    input: Option<PathBuf>,

    /// Line template, e.g. '${index}: ${value}' (keys: value, index, mode)
    #[arg(short, long)]
    template: Option<String>,

    /// Increase log verbosity (-v debug, -vv trace); otherwise RUST_LOG applies
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

fn init_logging(verbose: u8) {
    let mut builder = env_logger::Builder::from_default_env();
    match verbose {
        0 => {}
        1 => {
            builder.filter_level(LevelFilter::Debug);
        }
        _ => {
            builder.filter_level(LevelFilter::Trace);
        }
    }
    builder.init();
}

fn read_input(path: Option<&PathBuf>) -> anyhow::Result<String> {
    match path {
        Some(path) => fs::read_to_string(path)
            .with_context(|| format!("failed to read input file {}", path.display())),
        None => {
            let mut input = String::new();
            io::stdin()
                .read_to_string(&mut input)
                .context("failed to read standard input")?;
            Ok(input)
        }
    }
}

fn render(input: &str, template: Option<&str>) -> anyhow::Result<Vec<String>> {
    driver::run(input, template).context("failed to format output")
}

fn try_main(cli: &Cli) -> anyhow::Result<()> {
    let input = read_input(cli.input.as_ref())?;
    let lines = render(&input, cli.template.as_deref())?;

    let stdout = io::stdout();
    let mut out = io::BufWriter::new(stdout.lock());
    for line in &lines {
        writeln!(out, "{}", line)?;
    }
    out.flush()?;

    info!("wrote {} lines", lines.len());
    Ok(())
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    if let Err(e) = try_main(&cli) {
        eprintln!("Error: {:#}", e);
        return ExitCode::FAILURE;
    }
    ExitCode::SUCCESS
}
