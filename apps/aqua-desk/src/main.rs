//! # Aqua Desk Entry Point
//!
//! Prices a booking described as JSON.
//!
//! ```text
//! $ echo '{"service": "jetski", "quantity": 3, "durationHours": 5}' | aqua-desk
//! {
//!   "flow": "booking",
//!   "policy": "quantity_based",
//!   ...
//!   "total": 33000
//! }
//! ```
//!
//! Exit code 1 with an `{ "code", "message" }` error on failure.

use std::process::ExitCode;

fn main() -> ExitCode {
    // Setup lives in lib.rs for testability
    aqua_desk::run()
}
