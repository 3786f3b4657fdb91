//! Unitwatch CLI - observe and control systemd units from the command line.
//!
//! This binary provides a command-line interface to the unitwatch library.

mod commands;
mod error;

use clap::{Parser, Subcommand};
use unitwatch::unit::UnitCommand;

#[derive(Parser)]
#[command(name = "unitwatch")]
#[command(version = unitwatch::VERSION)]
#[command(about = "Observe and control a systemd unit", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Print the unit's current state
    Status {
        /// Unit name (e.g. nginx.service)
        unit: String,
    },
    /// Start the unit
    Start {
        /// Unit name (e.g. nginx.service)
        unit: String,
        /// Run systemctl without sudo
        #[arg(long)]
        no_sudo: bool,
    },
    /// Stop the unit
    Stop {
        /// Unit name (e.g. nginx.service)
        unit: String,
        /// Run systemctl without sudo
        #[arg(long)]
        no_sudo: bool,
    },
    /// Restart the unit
    Restart {
        /// Unit name (e.g. nginx.service)
        unit: String,
        /// Run systemctl without sudo
        #[arg(long)]
        no_sudo: bool,
    },
    /// Watch the unit and print state transitions as they happen
    Watch {
        /// Unit name (e.g. nginx.service)
        unit: String,
        /// Poll interval in milliseconds
        #[arg(long, default_value_t = 500)]
        interval_ms: u64,
        /// Enable debug logging
        #[arg(long, short)]
        verbose: bool,
    },
}

fn main() {
    let cli = Cli::parse();

    let result = match cli.command {
        Commands::Status { unit } => commands::status::run(&unit),
        Commands::Start { unit, no_sudo } => {
            commands::control::run(&unit, UnitCommand::Start, no_sudo)
        }
        Commands::Stop { unit, no_sudo } => {
            commands::control::run(&unit, UnitCommand::Stop, no_sudo)
        }
        Commands::Restart { unit, no_sudo } => {
            commands::control::run(&unit, UnitCommand::Restart, no_sudo)
        }
        Commands::Watch {
            unit,
            interval_ms,
            verbose,
        } => commands::watch::run(&unit, interval_ms, verbose),
    };

    if let Err(e) = result {
        e.exit();
    }
}
