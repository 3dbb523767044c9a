//! Chispa - wiring exercise checker
//!
//! Grades a wiring script against an exercise from the catalog.
//!
//! # Usage
//!
//! ```bash
//! chispa list
//! chispa check led-basic wiring.wir
//! RUST_LOG=debug chispa --catalog exercises.chispa check blink wiring.wir --json
//! ```

use std::path::PathBuf;

use clap::{Parser, Subcommand};
use chispa_core::{
    dsl,
    error::Result,
    wiring::replay,
    EngineConfig, ProjectCatalog, Validator, WiringSession,
};

/// Wiring exercise checker
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Exercise catalog file (defaults to the built-in exercises)
    #[arg(short, long, value_name = "CATALOG_FILE", global = true)]
    catalog: Option<PathBuf>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// List the exercises in the catalog
    List,

    /// Grade a wiring script against an exercise
    Check {
        /// Exercise id
        exercise: String,

        /// Path to the wiring script
        #[arg(value_name = "WIRING_FILE")]
        wiring: PathBuf,

        /// Print the result as JSON
        #[arg(long)]
        json: bool,
    },
}

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let args = Args::parse();

    let catalog = match &args.catalog {
        Some(path) => ProjectCatalog::from_file(path)?,
        None => ProjectCatalog::builtin()?,
    };

    match args.command {
        Command::List => {
            for spec in catalog.iter() {
                println!("{:<20} {}", spec.id, spec.name);
            }
        }
        Command::Check {
            exercise,
            wiring,
            json,
        } => {
            let spec = catalog.lookup(&exercise)?;
            let script = dsl::parse_wiring_file(&wiring)?;

            // Replay the wiring
            let config = EngineConfig::default();
            let mut session = WiringSession::with_config(&config);
            let report = replay(&mut session, spec, &script)?;
            for rejected in &report.rejected {
                eprintln!(
                    "{}:{}: wire rejected: {}",
                    wiring.display(),
                    rejected.line,
                    rejected.error
                );
            }

            // Grade
            let result = Validator::from_config(&config).validate(spec, session.wires());
            if json {
                println!("{}", serde_json::to_string_pretty(&result)?);
            } else {
                println!("{}", spec.name);
                print!("{}", result);
            }
        }
    }

    Ok(())
}
