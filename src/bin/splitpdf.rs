//! CLI binary for splitpdf.
//!
//! A thin shim over the library crate that maps CLI flags to a `SplitConfig`,
//! runs the split, and prints the elapsed-time report.
//!
//! Exit codes: 0 on success, 1 on any validation or rasterisation failure.
//! The usage text is reprinted on every invalid-argument exit so the user can
//! self-correct without opening the docs.

use anyhow::Result;
use clap::error::ErrorKind;
use clap::{CommandFactory, Parser};
use splitpdf::{split, SplitConfig, SplitOutcome, MAX_THREADS};
use std::io;
use std::path::{Path, PathBuf};
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

const AFTER_HELP: &str = r#"EXAMPLES:
  # Basic conversion: one PNG per page into ./images
  splitpdf -p document.pdf -o images

  # Render with 8 worker threads
  splitpdf -p document.pdf -o images -m 8

  # Errors-only output
  splitpdf -p document.pdf -o images -l n

OUTPUT:
  <output_dir>/page_1.png, page_2.png, … at 300 DPI, in page order.

ENVIRONMENT VARIABLES:
  PDFIUM_LIB_PATH   Directory containing the pdfium shared library
  RUST_LOG          Overrides the log filter chosen by --logging
"#;

/// Split PDF documents into images, one per page.
#[derive(Parser, Debug)]
#[command(
    name = "splitpdf",
    version,
    about = "Split PDF documents into images, one per page",
    arg_required_else_help = true,
    after_long_help = AFTER_HELP
)]
struct Cli {
    /// Path to the input PDF file.
    #[arg(short = 'p', long = "pdf")]
    pdf: PathBuf,

    /// Directory where the page images are written (created if absent).
    #[arg(short = 'o', long = "output_dir")]
    output_dir: PathBuf,

    /// Number of rasterisation worker threads (1-20).
    #[arg(short = 'm', long = "multiple_threads", default_value_t = 1)]
    multiple_threads: usize,

    /// Log at the info level (y) or only errors (n).
    #[arg(short = 'l', long = "logging")]
    logging: Option<char>,
}

fn print_usage() {
    let mut cmd = Cli::command();
    eprintln!("{}", cmd.render_usage());
}

fn invalid_arguments(message: &str) -> ! {
    eprintln!("{message}");
    print_usage();
    std::process::exit(1);
}

/// Map the -l flag to a tracing filter directive.
///
/// Only the exact characters 'y' and 'n' are accepted ('Y' is not); absence
/// defaults to informational logging.
fn log_filter(flag: Option<char>) -> Result<&'static str, String> {
    match flag {
        None | Some('y') => Ok("info"),
        Some('n') => Ok("error"),
        Some(other) => Err(format!(
            "Invalid logging option '{other}': expected 'y' or 'n'"
        )),
    }
}

/// The final stdout report: elapsed time of the conversion call only,
/// to two decimal places.
fn success_report(outcome: &SplitOutcome, output_dir: &Path) -> String {
    format!(
        "PDF converted to images in {:.2} seconds and saved in '{}'",
        outcome.elapsed_secs(),
        output_dir.display()
    )
}

fn main() -> Result<()> {
    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        // --help / --version exit 0; everything else is an invalid
        // invocation and exits 1 (clap's message embeds the usage text).
        Err(e) if matches!(e.kind(), ErrorKind::DisplayHelp | ErrorKind::DisplayVersion) => {
            e.exit()
        }
        Err(e) => {
            let _ = e.print();
            std::process::exit(1);
        }
    };

    // ── Logging setup ────────────────────────────────────────────────────
    // The -l flag gates informational output; errors are always shown.
    let filter = match log_filter(cli.logging) {
        Ok(filter) => filter,
        Err(message) => invalid_arguments(&message),
    };

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(filter)),
        )
        .with_writer(io::stderr)
        .try_init()
        .map_err(|e| anyhow::anyhow!("failed to initialise logging: {e}"))?;

    // ── Validate parameters ──────────────────────────────────────────────
    let config = match SplitConfig::builder().threads(cli.multiple_threads).build() {
        Ok(config) => config,
        Err(e) => invalid_arguments(&format!(
            "{e}\nSpecify between 1 and {MAX_THREADS} threads."
        )),
    };

    info!("Input file:  {}", cli.pdf.display());
    info!("Output dir:  {}", cli.output_dir.display());
    info!("Threads:     {}", config.threads);

    // ── Run conversion ───────────────────────────────────────────────────
    let outcome = match split(&cli.pdf, &cli.output_dir, &config) {
        Ok(outcome) => outcome,
        Err(e) => {
            error!("{e}");
            if e.is_invalid_argument() {
                print_usage();
            }
            std::process::exit(1);
        }
    };

    println!("{}", success_report(&outcome, &cli.output_dir));

    Ok(())
}
