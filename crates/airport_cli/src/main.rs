//! Airport Scenario CLI
//!
//! Builds a world from a flight manifest and prints a JSON report.
//! Logs go to stderr, the report to stdout.

#[cfg(feature = "cli")]
use airport_core::ScenarioMode;
#[cfg(feature = "cli")]
use anyhow::Result;
#[cfg(feature = "cli")]
use clap::{Parser, Subcommand, ValueEnum};
#[cfg(feature = "cli")]
use std::path::PathBuf;
#[cfg(feature = "cli")]
use std::process::ExitCode;

#[cfg(feature = "cli")]
#[derive(Parser)]
#[command(name = "airport_cli")]
#[command(about = "Build and inspect airport taxi-line scenarios", long_about = None)]
struct Cli {
    /// Default log level when RUST_LOG is unset
    #[arg(long, global = true, default_value = "info")]
    log_level: String,

    #[command(subcommand)]
    command: Commands,
}

#[cfg(feature = "cli")]
#[derive(Clone, Copy, ValueEnum)]
enum ModeArg {
    Discrete,
    Continuous,
}

#[cfg(feature = "cli")]
impl From<ModeArg> for ScenarioMode {
    fn from(mode: ModeArg) -> Self {
        match mode {
            ModeArg::Discrete => ScenarioMode::DiscretePhase,
            ModeArg::Continuous => ScenarioMode::Continuous,
        }
    }
}

#[cfg(feature = "cli")]
#[derive(Subcommand)]
enum Commands {
    /// Build, reset and score a world, print the report
    Report {
        /// Flight manifest (.json or .csv)
        #[arg(long)]
        manifest: PathBuf,

        /// Scenario config (.json or .yaml); overrides --mode
        #[arg(long)]
        config: Option<PathBuf>,

        /// Mode preset when no config file is given
        #[arg(long, value_enum, default_value = "discrete")]
        mode: ModeArg,

        /// Reset RNG seed
        #[arg(long)]
        seed: Option<u64>,

        /// Pretty-print the JSON report
        #[arg(long, default_value = "false")]
        pretty: bool,
    },

    /// Parse a manifest and list flights and airports
    Validate {
        /// Flight manifest (.json or .csv)
        #[arg(long)]
        manifest: PathBuf,
    },

    /// Print the resolved scenario config as JSON
    Config {
        #[arg(long, value_enum, default_value = "discrete")]
        mode: ModeArg,
    },
}

#[cfg(feature = "cli")]
fn main() -> ExitCode {
    let cli = Cli::parse();
    airport_cli::init_logging(&cli.log_level);

    match run(cli.command) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("Error: {:#}", err);
            ExitCode::from(airport_cli::exit_code(&err))
        }
    }
}

#[cfg(feature = "cli")]
fn run(command: Commands) -> Result<()> {
    match command {
        Commands::Report {
            manifest,
            config,
            mode,
            seed,
            pretty,
        } => {
            let flights = airport_cli::load_manifest(&manifest)?;
            let config = airport_cli::resolve_config(config.as_deref(), mode.into(), seed)?;
            tracing::info!(
                manifest = %manifest.display(),
                mode = ?config.mode,
                "building scenario"
            );

            let report = airport_cli::build_report(config, &flights)?;
            let json = if pretty {
                serde_json::to_string_pretty(&report)?
            } else {
                serde_json::to_string(&report)?
            };
            println!("{}", json);
        }

        Commands::Validate { manifest } => {
            let flights = airport_cli::load_manifest(&manifest)?;
            println!("{} flights", flights.len());
            for flight in flights.flights() {
                println!(
                    "  {:<8} {} -> {}  {:>5.2}h  departs {}",
                    flight.flight_id,
                    flight.origin,
                    flight.destination,
                    flight.duration_hours,
                    flight.depart_time.format("%H:%M")
                );
            }
            let airports: Vec<_> = flights.distinct_airports().collect();
            println!("{} airports: {}", airports.len(), airports.join(", "));
        }

        Commands::Config { mode } => {
            let config = airport_core::ScenarioConfig::preset(mode.into());
            println!("{}", serde_json::to_string_pretty(&config)?);
        }
    }

    Ok(())
}

#[cfg(not(feature = "cli"))]
fn main() {
    eprintln!("airport_cli is not available. Enable the 'cli' feature to use it.");
    std::process::exit(1);
}
