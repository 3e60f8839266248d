//! Push Filter CLI
//!
//! stdin (system profile + pushes) → stdout (matching push texts)

#[cfg(feature = "cli")]
use anyhow::{Context, Result};
#[cfg(feature = "cli")]
use clap::Parser;
#[cfg(feature = "cli")]
use push_filter::OutputFormat;
#[cfg(feature = "cli")]
use std::fs::File;
#[cfg(feature = "cli")]
use std::io::{self, BufReader};
#[cfg(feature = "cli")]
use std::path::PathBuf;

#[cfg(feature = "cli")]
#[derive(Parser)]
#[command(name = "push_filter")]
#[command(about = "Print the pushes whose targeting matches the system profile", long_about = None)]
struct Cli {
    /// Read the protocol from a file instead of stdin
    #[arg(long)]
    input: Option<PathBuf>,

    /// Output format
    #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
    format: OutputFormat,

    /// Increase log verbosity on stderr (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

#[cfg(feature = "cli")]
fn init_logging(verbose: u8) {
    let default_level = match verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(default_level))
        .target(env_logger::Target::Stderr)
        .init();
}

#[cfg(feature = "cli")]
fn main() {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    if let Err(err) = execute(cli) {
        eprintln!("Error: {:#}", err);
        std::process::exit(push_filter::exit_code(&err));
    }
}

#[cfg(feature = "cli")]
fn execute(cli: Cli) -> Result<()> {
    let stdout = io::stdout();
    let mut out = stdout.lock();

    match cli.input {
        Some(path) => {
            log::info!("Reading input from {}", path.display());
            let file = File::open(&path)
                .with_context(|| format!("Failed to open input file: {}", path.display()))?;
            push_filter::run(BufReader::new(file), &mut out, cli.format)?;
        }
        None => {
            let stdin = io::stdin();
            push_filter::run(stdin.lock(), &mut out, cli.format)?;
        }
    }

    Ok(())
}

#[cfg(not(feature = "cli"))]
fn main() {
    eprintln!("push_filter CLI is not available. Enable the 'cli' feature to use it.");
    std::process::exit(1);
}
