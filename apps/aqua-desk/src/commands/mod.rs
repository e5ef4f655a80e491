//! # Commands Module
//!
//! All operations exposed to the booking and customize screens.
//!
//! ## Command Organization
//! ```text
//! commands/
//! ├── mod.rs      ◄─── You are here (exports)
//! ├── booking.rs  ◄─── Per-interaction selection, quote and confirm
//! └── request.rs  ◄─── Whole-booking JSON requests (used by the binary)
//! ```
//!
//! ## How Commands Work
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Command Flow                                         │
//! │                                                                         │
//! │  Screen tap ("+" on the jet ski counter)                                │
//! │         │                                                               │
//! │         ▼                                                               │
//! │  step_quantity(&session, true)                                          │
//! │         │                                                               │
//! │         ├── SelectionAction::IncrementQuantity                          │
//! │         ├── session.update(reducer)  ◄── Arc<Mutex<Session>>            │
//! │         └── quote(catalog, selection)                                   │
//! │         │                                                               │
//! │         ▼                                                               │
//! │  Result<SelectionView, ApiError>  ──► JSON to the front-end             │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Every command takes only the session handle it acts on; the catalog and
//! booking horizon travel inside it.

pub mod booking;
pub mod request;
