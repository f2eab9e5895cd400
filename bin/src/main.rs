//! fredline CLI - Concurrent downloader for FRED observation series.

use anyhow::Result;
use clap::{CommandFactory, Parser, Subcommand};
use std::path::PathBuf;

mod commands;
mod display;

use display::Format;

#[derive(Parser)]
#[command(name = "fredline")]
#[command(about = "Concurrent downloader for FRED observation series", long_about = None)]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Verbosity level (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    /// Quiet mode (suppress progress output)
    #[arg(short, long, global = true)]
    quiet: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Download a series
    Download {
        /// Series identifier (e.g. SP500, DGS10, UNRATE)
        series: String,

        /// Start date (YYYY-MM-DD)
        #[arg(short, long)]
        start: String,

        /// End date (YYYY-MM-DD). Defaults to today.
        #[arg(short, long)]
        end: Option<String>,

        /// Observation frequency (d, w, bw, m, q, sa, a)
        #[arg(short = 'F', long, default_value = "d")]
        frequency: String,

        /// Output file path. Defaults to <series>.<format>
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// Output format
        #[arg(short, long, value_enum, default_value = "csv")]
        format: Format,

        /// Maximum concurrent window requests
        #[arg(long, default_value = "8")]
        concurrency: usize,

        /// Maximum attempts per window before giving up
        #[arg(long, default_value = "5")]
        max_attempts: u32,

        /// Fixed window size in days instead of calendar months
        #[arg(long)]
        window_days: Option<u32>,

        /// API key. Defaults to the FRED_API_KEY environment variable.
        #[arg(long)]
        api_key: Option<String>,
    },

    /// Show how a date range splits into request windows
    Plan {
        /// Start date (YYYY-MM-DD)
        start: String,

        /// End date (YYYY-MM-DD). Defaults to today.
        end: Option<String>,

        /// Fixed window size in days instead of calendar months
        #[arg(long)]
        window_days: Option<u32>,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    init_tracing(cli.verbose);

    // Show help if no command provided
    let Some(command) = cli.command else {
        Cli::command().print_help()?;
        return Ok(());
    };

    match command {
        Commands::Download {
            series,
            start,
            end,
            frequency,
            output,
            format,
            concurrency,
            max_attempts,
            window_days,
            api_key,
        } => {
            commands::download::download(
                &series,
                &start,
                end.as_deref(),
                &frequency,
                output,
                format,
                concurrency,
                max_attempts,
                window_days,
                api_key,
                cli.quiet,
            )
            .await
        }
        Commands::Plan {
            start,
            end,
            window_days,
        } => commands::plan::plan(&start, end.as_deref(), window_days),
    }
}

/// Initializes stderr logging, keyed off the -v flags unless RUST_LOG is set.
fn init_tracing(verbose: u8) {
    let level = match verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}
