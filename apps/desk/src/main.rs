//! # Kiraya Desk Entry Point
//!
//! Interactive terminal front end for the rental desk.
//!
//! ## Startup Sequence
//! 1. Initialize tracing (logging)
//! 2. Parse command line arguments
//! 3. Build the desk at the standard tax rate
//! 4. Seed the fleet (built-in defaults, or `--fleet <path.json>`)
//! 5. Run the menu loop until the operator exits

mod input;
mod menu;
mod seed;

use std::env;
use std::io;

use tracing::info;
use tracing_subscriber::EnvFilter;

use kiraya_core::{RentalDesk, TaxRate, DEFAULT_TAX_RATE_BPS};

fn main() {
    if let Err(e) = run() {
        eprintln!("kiraya-desk: {}", e);
        std::process::exit(1);
    }
}

fn run() -> Result<(), Box<dyn std::error::Error>> {
    init_tracing();

    // Parse command line arguments
    let args: Vec<String> = env::args().collect();
    let mut fleet_path: Option<String> = None;

    let mut i = 1;
    while i < args.len() {
        match args[i].as_str() {
            "--fleet" | "-f" => {
                if i + 1 < args.len() {
                    fleet_path = Some(args[i + 1].clone());
                    i += 1;
                }
            }
            "--help" | "-h" => {
                println!("Kiraya Rental Desk");
                println!();
                println!("Usage: kiraya-desk [OPTIONS]");
                println!();
                println!("Options:");
                println!("  -f, --fleet <PATH>  JSON fleet file to seed from");
                println!("  -h, --help          Show this help message");
                return Ok(());
            }
            _ => {}
        }
        i += 1;
    }

    let mut desk = RentalDesk::new(TaxRate::from_bps(DEFAULT_TAX_RATE_BPS))?;

    match fleet_path {
        Some(path) => {
            let count = seed::load_fleet_file(&mut desk, &path)?;
            info!(count, path = %path, "fleet loaded from file");
        }
        None => {
            seed::seed_default(&mut desk)?;
            info!(count = desk.fleet().len(), "fleet seeded with defaults");
        }
    }

    let stdin = io::stdin();
    menu::run(&mut desk, &mut stdin.lock())?;

    Ok(())
}

/// Initializes the tracing subscriber for structured logging.
///
/// ## Log Levels
/// - `RUST_LOG=debug` - Show debug messages
/// - `RUST_LOG=kiraya=trace` - Show trace for kiraya crates only
/// - Default: WARN, so logging stays out of the menu's way
fn init_tracing() {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("warn,kiraya=info"));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}
