// server/src/main.rs

// Main entry point for the clinic CLI. Loads `.env`, initializes logging
// and dispatches to the CLI logic.

use anyhow::Result;
use clinic_server::cli::start_cli;

fn main() -> Result<()> {
    // CLINIC_CONFIG and RUST_LOG may come from a .env file
    dotenvy::dotenv().ok();
    env_logger::init();

    start_cli()
}
