use clap::Parser;
use std::path::PathBuf;
use std::process::ExitCode;
use tracing_subscriber::EnvFilter;
use transcript_metrics::config::MetricsConfig;
use transcript_metrics::report::{self, OutputFormat, Report};
use transcript_metrics::transcript;

/// Summarize token, cache, cost and latency usage from an assistant
/// session transcript (JSON array or JSONL).
#[derive(Parser, Debug)]
#[command(name = "transcript-metrics", version, about)]
pub struct Cli {
    /// Transcript file to summarize
    #[arg(value_name = "TRANSCRIPT")]
    transcript: PathBuf,

    /// Config file path
    #[arg(short, long, default_value = "transcript-metrics.toml")]
    config: PathBuf,

    /// Output format (overrides config)
    #[arg(short, long, value_enum)]
    format: Option<OutputFormat>,

    /// Debug logging (payload decode details)
    #[arg(short, long, conflicts_with = "quiet")]
    verbose: bool,

    /// Only log errors
    #[arg(short, long)]
    quiet: bool,
}

fn init_tracing(cli: &Cli, config_filter: &str) {
    let filter = if cli.verbose {
        EnvFilter::new("debug")
    } else if cli.quiet {
        EnvFilter::new("error")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(config_filter))
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_thread_ids(false)
        .with_writer(std::io::stderr)
        .init();
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    // Config is read before logging exists, so a bad file is reported on stderr directly.
    let config = match MetricsConfig::load(&cli.config) {
        Ok(c) => c,
        Err(e) => {
            eprintln!("error: {e}");
            return ExitCode::FAILURE;
        }
    };

    init_tracing(&cli, &config.logging.filter);
    tracing::debug!(?cli, ?config, "resolved settings");

    let records = match transcript::load_transcript(&cli.transcript) {
        Ok(r) => r,
        Err(e) => {
            tracing::error!(error = %e, "could not load transcript");
            return ExitCode::FAILURE;
        }
    };

    let format = cli.format.unwrap_or(config.output.format);
    let report = Report::from_records(&records);
    match report::render(&report, format) {
        Ok(out) => {
            print!("{out}");
            if format == OutputFormat::Json {
                println!();
            }
            ExitCode::SUCCESS
        }
        Err(e) => {
            tracing::error!(error = %e, "could not render report");
            ExitCode::FAILURE
        }
    }
}
