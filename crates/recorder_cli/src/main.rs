//! Recorder CLI
//!
//! Runs a JSON input script through a recording session
//! Exports the event list JSON schema

#[cfg(feature = "cli")]
use anyhow::Result;
#[cfg(feature = "cli")]
use clap::{Parser, Subcommand};
#[cfg(feature = "cli")]
use std::path::PathBuf;

#[cfg(feature = "cli")]
#[derive(Parser)]
#[command(name = "recorder_cli")]
#[command(about = "Drive the match event recorder from JSON scripts", long_about = None)]
struct Cli {
    /// Increase log verbosity (-v debug, -vv trace)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    #[command(subcommand)]
    command: Commands,
}

#[cfg(feature = "cli")]
#[derive(Subcommand)]
enum Commands {
    /// Run an input script and report the committed events
    Run {
        /// Input script JSON file path
        #[arg(long)]
        script: PathBuf,

        /// Output report JSON file path (stdout when omitted)
        #[arg(long)]
        out: Option<PathBuf>,

        /// Recorder config JSON file (overrides the script's config block)
        #[arg(long)]
        config: Option<PathBuf>,
    },

    /// Print or write the JSON schema of the event list
    Schema {
        /// Output schema file path (stdout when omitted)
        #[arg(long)]
        out: Option<PathBuf>,
    },
}

#[cfg(feature = "cli")]
fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    match cli.command {
        Commands::Run { script, out, config } => {
            let report = recorder_cli::run_script_file(&script, config.as_deref())?;
            let summary = &report.response.summary;

            eprintln!("Script:      {}", script.display());
            eprintln!("Events:      {}", report.response.events.len());
            eprintln!(
                "  shots {} (goals {}), passes {} ({:.0}% completed), defensive {}",
                summary.shots,
                summary.goals,
                summary.passes,
                summary.pass_completion_rate * 100.0,
                summary.defensive_actions
            );
            eprintln!("  xG {:.2}, xA {:.2}", summary.total_xg, summary.total_xa);
            eprintln!(
                "History:     {}/{} (undo: {}, redo: {})",
                report.response.history_index + 1,
                report.response.history_len,
                report.response.can_undo,
                report.response.can_redo
            );

            match out {
                Some(path) => {
                    recorder_cli::write_report(&path, &report)?;
                    eprintln!("Report saved to: {}", path.display());
                }
                None => println!("{}", serde_json::to_string_pretty(&report)?),
            }
        }

        Commands::Schema { out } => match out {
            Some(path) => {
                recorder_cli::write_schema(&path)?;
                eprintln!("Schema saved to: {}", path.display());
            }
            None => println!("{}", recorder_core::event_list_schema()?),
        },
    }

    Ok(())
}

#[cfg(feature = "cli")]
fn init_logging(verbose: u8) {
    let level = match verbose {
        0 => tracing::Level::WARN,
        1 => tracing::Level::DEBUG,
        _ => tracing::Level::TRACE,
    };
    tracing_subscriber::fmt().with_max_level(level).with_writer(std::io::stderr).init();
}

#[cfg(not(feature = "cli"))]
fn main() {
    eprintln!("recorder_cli is not available. Enable the 'cli' feature to use it.");
    std::process::exit(1);
}
