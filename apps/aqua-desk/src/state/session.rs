//! # Session State
//!
//! One booking or customize screen's in-progress selection.
//!
//! ## Lifecycle
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Session Lifecycle                                    │
//! │                                                                         │
//! │  Screen mounts ─────────► SessionState::new(flow, catalog)             │
//! │                           selection = flow's initial state              │
//! │                                                                         │
//! │  User taps ─────────────► with_selection_mut(|s| reducer(s))           │
//! │                                                                         │
//! │  Confirm (ok) ──────────► summary returned, selection reset            │
//! │  Confirm (error) ───────► selection untouched, user may retry          │
//! │                                                                         │
//! │  Screen unmounts ───────► SessionState dropped, nothing persisted      │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Thread Safety
//! The selection lives behind `Arc<Mutex<T>>` so clones of a session handle
//! share one state and writes are exclusive. Sessions never share state
//! with each other.

use std::sync::{Arc, Mutex};

use aqua_core::{
    BookingFlow, Catalog, CoreResult, RandomReferenceGenerator, ReferenceGenerator,
    SelectionState,
};
use uuid::Uuid;

/// Mutable part of a session: the selection and the reference source.
pub struct Session {
    pub selection: SelectionState,
    pub references: Box<dyn ReferenceGenerator + Send>,
}

impl std::fmt::Debug for Session {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Session")
            .field("selection", &self.selection)
            .finish_non_exhaustive()
    }
}

/// A screen session handle.
///
/// Catalog and booking horizon are injected at construction; nothing is
/// read from globals.
#[derive(Debug, Clone)]
pub struct SessionState {
    id: Uuid,
    flow: BookingFlow,
    catalog: Arc<Catalog>,
    horizon_days: i64,
    inner: Arc<Mutex<Session>>,
}

impl SessionState {
    /// Opens a session with random booking references.
    pub fn new(flow: BookingFlow, catalog: Arc<Catalog>, horizon_days: i64) -> CoreResult<Self> {
        Self::with_references(
            flow,
            catalog,
            horizon_days,
            Box::new(RandomReferenceGenerator::from_entropy()),
        )
    }

    /// Opens a session with a caller-supplied reference source.
    pub fn with_references(
        flow: BookingFlow,
        catalog: Arc<Catalog>,
        horizon_days: i64,
        references: Box<dyn ReferenceGenerator + Send>,
    ) -> CoreResult<Self> {
        let selection = SelectionState::new(flow, &catalog)?;
        let id = Uuid::new_v4();
        tracing::debug!(session = %id, ?flow, "session opened");

        Ok(SessionState {
            id,
            flow,
            catalog,
            horizon_days,
            inner: Arc::new(Mutex::new(Session {
                selection,
                references,
            })),
        })
    }

    pub fn id(&self) -> Uuid {
        self.id
    }

    pub fn flow(&self) -> BookingFlow {
        self.flow
    }

    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    pub fn horizon_days(&self) -> i64 {
        self.horizon_days
    }

    /// Executes a function with read access to the session.
    pub fn with_session<F, R>(&self, f: F) -> R
    where
        F: FnOnce(&Session) -> R,
    {
        let session = self.inner.lock().expect("Session mutex poisoned");
        f(&session)
    }

    /// Executes a function with write access to the session.
    pub fn with_session_mut<F, R>(&self, f: F) -> R
    where
        F: FnOnce(&mut Session) -> R,
    {
        let mut session = self.inner.lock().expect("Session mutex poisoned");
        f(&mut session)
    }

    /// Snapshot of the current selection.
    pub fn selection(&self) -> SelectionState {
        self.with_session(|s| s.selection.clone())
    }

    /// Runs a reducer and stores its result. On error the stored selection
    /// is left as it was.
    pub fn update<F>(&self, reducer: F) -> CoreResult<SelectionState>
    where
        F: FnOnce(&Catalog, &SelectionState) -> CoreResult<SelectionState>,
    {
        self.with_session_mut(|session| {
            let next = reducer(&self.catalog, &session.selection)?;
            session.selection = next.clone();
            Ok(next)
        })
    }

    /// Puts the selection back to the flow's initial state.
    pub fn reset(&self) -> CoreResult<()> {
        let fresh = SelectionState::new(self.flow, &self.catalog)?;
        self.with_session_mut(|session| session.selection = fresh);
        Ok(())
    }
}
