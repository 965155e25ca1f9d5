//! Command-line front end for the critsit incident log.
//!
//! # Usage
//!
//! ```text
//! critsit [--data <PATH>] submit --customer <S> --contact <S> --severity <S> --problem <S> --plan <S>
//! critsit [--data <PATH>] list
//! critsit [--data <PATH>] show <ID>
//! critsit [--data <PATH>] delete <ID>
//! critsit itil
//! ```
//!
//! The data file defaults to `CRITSIT_DATA`, then `blog_data.json`.

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};

use critsit::{Config, ITIL_URL, IncidentFields, IncidentLog};

/// Record and review critical-situation incidents.
#[derive(Parser, Debug)]
#[command(name = "critsit", version, about)]
struct Cli {
    /// Path of the JSON data file (overrides CRITSIT_DATA).
    #[arg(long, global = true)]
    data: Option<PathBuf>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Record a new incident and print its identifier.
    Submit {
        /// Customer name.
        #[arg(long, default_value = "")]
        customer: String,
        /// Customer contact number.
        #[arg(long, default_value = "")]
        contact: String,
        /// Severity level (free text).
        #[arg(long, default_value = "")]
        severity: String,
        /// Problem statement.
        #[arg(long, default_value = "")]
        problem: String,
        /// Solution action plan.
        #[arg(long, default_value = "")]
        plan: String,
    },
    /// List all incidents, one per line.
    List,
    /// Print every field of one incident.
    Show {
        /// Incident identifier.
        id: u64,
    },
    /// Delete one incident.
    Delete {
        /// Incident identifier.
        id: u64,
    },
    /// Open the ITIL 4 reference page in the default browser.
    Itil,
}

/// Initialize the global `tracing` subscriber with an `EnvFilter`, writing to stderr.
///
/// Defaults to `"info"` when `RUST_LOG` is not set. Uses `try_init()` so repeated calls
/// are a silent no-op.
fn init_tracing() {
    use tracing_subscriber::EnvFilter;

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .try_init();
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_tracing();

    let config = Config::from_env().with_data_path(cli.data);

    tracing::debug!(data_path = %config.data_path.display(), "Data path");
    let mut log = IncidentLog::open(&config.data_path);
    run(cli.command, &mut log)
}

/// Execute a data command against an opened log.
fn run(command: Command, log: &mut IncidentLog) -> Result<()> {
    match command {
        Command::Submit {
            customer,
            contact,
            severity,
            problem,
            plan,
        } => {
            let record = log
                .submit(IncidentFields {
                    customer_name: customer,
                    contact_number: contact,
                    severity_level: severity,
                    problem_statement: problem,
                    solution_action_plan: plan,
                })
                .context("Failed to submit incident")?;
            println!("{}", record.id);
        }
        Command::List => {
            for record in log.records() {
                println!("{}", record.summary());
            }
        }
        Command::Show { id } => {
            let record = log
                .get(id)
                .ok_or(critsit::Error::RecordNotFound { id })
                .context("Failed to show incident")?;
            println!("{record}");
        }
        Command::Delete { id } => {
            let record = log.delete(id).context("Failed to delete incident")?;
            println!("Deleted {}", record.summary());
        }
        Command::Itil => {
            critsit::open_url(ITIL_URL).context("Failed to open ITIL link")?;
        }
    }
    Ok(())
}
