// server/src/cli/cli.rs

// Entry point for the clinic CLI: parse arguments, load the configuration,
// open the store and hand the subcommand to its handler.

use std::io::{self, Write};

use anyhow::{Context, Result};
use clap::Parser;
use crossterm::tty::IsTty;
use log::{debug, info};
use clinic_lib::{load_clinic_config, ClinicConfig, ClinicStore};

use crate::cli::commands::{CliArgs, ClinicCommands};
use crate::cli::handlers::{
    handle_appointments, handle_dashboard, handle_doctors, handle_patients, handle_seed,
};

pub fn start_cli() -> Result<()> {
    let args = CliArgs::parse();
    let stdout = io::stdout();
    let styled = stdout.is_tty();
    let mut out = stdout.lock();
    run(args, styled, &mut out)
}

/// Loads the configuration named by `args` (or the default lookup) and runs the command.
pub fn run(args: CliArgs, styled: bool, out: &mut dyn Write) -> Result<()> {
    let config = load_clinic_config(args.config.as_deref()).context("Failed to load clinic config")?;
    run_with_config(&config, args.command, styled, out)
}

pub fn run_with_config(
    config: &ClinicConfig,
    command: ClinicCommands,
    styled: bool,
    out: &mut dyn Write,
) -> Result<()> {
    info!(
        "Opening clinic store ({} engine at {:?})",
        config.storage.engine_type, config.storage.data_directory
    );
    let mut store = ClinicStore::open(config).context("Failed to open clinic store")?;
    debug!("Dispatching {:?}", command);

    match command {
        ClinicCommands::Dashboard { json } => {
            handle_dashboard(&store, config.recent_appointments_limit, json, out)
        }
        ClinicCommands::Patients { action } => handle_patients(&mut store, action, out),
        ClinicCommands::Doctors { action } => handle_doctors(&mut store, action, out),
        ClinicCommands::Appointments { action } => handle_appointments(&mut store, action, styled, out),
        ClinicCommands::Seed => handle_seed(&mut store, out),
    }?;
    out.flush()?;
    Ok(())
}
