//! # Aqua Desk Library
//!
//! Session, configuration and command layer over `aqua-core`.
//!
//! ## Module Organization
//! ```text
//! aqua_desk/
//! ├── lib.rs          ◄─── You are here (logging setup & run)
//! ├── state/
//! │   ├── mod.rs      ◄─── State type exports
//! │   ├── session.rs  ◄─── Per-screen selection state
//! │   └── config.rs   ◄─── Configuration state
//! ├── commands/
//! │   ├── mod.rs      ◄─── Command exports
//! │   ├── booking.rs  ◄─── Selection, quote and confirm commands
//! │   └── request.rs  ◄─── JSON quote requests
//! └── error.rs        ◄─── API error type for commands
//! ```

pub mod commands;
pub mod error;
pub mod state;

use std::io::Read;
use std::process::ExitCode;

use tracing::{error, info};
use tracing_subscriber::EnvFilter;

use commands::request::{handle_request, QuoteRequest};
use error::ApiError;
use state::ConfigState;

/// Runs the quote tool.
///
/// ## Sequence
/// ```text
/// ┌─────────────────────────────────────────────────────────────────────────┐
/// │                       Quote Tool                                        │
/// │                                                                         │
/// │  1. Initialize Logging ───────────────────────────────────────────────► │
/// │     • tracing-subscriber with env filter, to stderr                     │
/// │     • Default: info,aqua=debug; override with RUST_LOG                  │
/// │                                                                         │
/// │  2. Load Configuration ───────────────────────────────────────────────► │
/// │     • AQUA_* environment variables over defaults                        │
/// │                                                                         │
/// │  3. Read Request ─────────────────────────────────────────────────────► │
/// │     • File path argument, or stdin when absent                          │
/// │                                                                         │
/// │  4. Price / Confirm ──────────────────────────────────────────────────► │
/// │     • stdout: quote or booking summary as JSON, exit 0                  │
/// │     • stdout: ApiError as JSON, exit 1                                  │
/// └─────────────────────────────────────────────────────────────────────────┘
/// ```
pub fn run() -> ExitCode {
    init_tracing();

    let config = ConfigState::from_env();
    info!(business = %config.business_name, "Starting Aqua Desk");

    let result = read_request(std::env::args().nth(1)).and_then(|request| {
        let today = chrono::Local::now().date_naive();
        handle_request(&config, &request, today)
    });

    let (output, code) = match result {
        Ok(response) => (serde_json::to_string_pretty(&response), ExitCode::SUCCESS),
        Err(err) => {
            error!(error = %err, "request failed");
            (serde_json::to_string_pretty(&err), ExitCode::FAILURE)
        }
    };

    match output {
        Ok(json) => {
            println!("{}", json);
            code
        }
        Err(err) => {
            error!(error = %err, "could not serialize response");
            ExitCode::FAILURE
        }
    }
}

/// Reads and parses the request from a file, or stdin when no path is given.
fn read_request(path: Option<String>) -> Result<QuoteRequest, ApiError> {
    let raw = match &path {
        Some(path) => std::fs::read_to_string(path)
            .map_err(|e| ApiError::validation(format!("Could not read {}: {}", path, e)))?,
        None => {
            let mut raw = String::new();
            std::io::stdin()
                .read_to_string(&mut raw)
                .map_err(|e| ApiError::internal(format!("Could not read stdin: {}", e)))?;
            raw
        }
    };

    serde_json::from_str(&raw)
        .map_err(|e| ApiError::validation(format!("Invalid request: {}", e)))
}

/// Initializes the tracing subscriber for structured logging.
///
/// Logs go to stderr so stdout carries only the JSON response.
///
/// ## Log Levels
/// - `RUST_LOG=debug` - Show debug messages
/// - `RUST_LOG=aqua=trace` - Show trace for aqua crates only
/// - Default: `info,aqua=debug`
fn init_tracing() {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info,aqua=debug"));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}
