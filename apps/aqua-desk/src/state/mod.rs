//! # State Module
//!
//! Application state for the desk.
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    State Architecture                                   │
//! │                                                                         │
//! │  ┌──────────────────────────┐        ┌──────────────────────────────┐  │
//! │  │      ConfigState         │        │       SessionState           │  │
//! │  │                          │ builds │                              │  │
//! │  │  business name           │───────►│  Arc<Catalog>  (injected)    │  │
//! │  │  booking horizon         │        │  Arc<Mutex<Session>>         │  │
//! │  │  catalog file paths      │        │  session id (UUID)           │  │
//! │  └──────────────────────────┘        └──────────────────────────────┘  │
//! │                                                                         │
//! │  THREAD SAFETY:                                                        │
//! │  • ConfigState: read-only after initialization                         │
//! │  • SessionState: selection protected by Arc<Mutex<T>>                  │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

mod config;
mod session;

pub use config::{ConfigError, ConfigState};
pub use session::{Session, SessionState};
