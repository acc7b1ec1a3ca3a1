//! The state shared by the envelope route handlers.

use std::sync::{Arc, Mutex, MutexGuard};

use axum::extract::FromRef;
use rusqlite::Connection;

use crate::{AppState, Error};

/// The state needed to read and change envelopes.
#[derive(Debug, Clone)]
pub struct EnvelopeState {
    /// The database connection for managing envelopes.
    pub db_connection: Arc<Mutex<Connection>>,
}

impl EnvelopeState {
    /// Acquire the database connection for the duration of one operation.
    ///
    /// # Errors
    /// Returns [Error::DatabaseLockError] if the lock is poisoned.
    pub fn lock_connection(&self) -> Result<MutexGuard<'_, Connection>, Error> {
        self.db_connection.lock().map_err(|error| {
            tracing::error!("could not acquire database lock: {error}");
            Error::DatabaseLockError
        })
    }
}

impl FromRef<AppState> for EnvelopeState {
    fn from_ref(state: &AppState) -> Self {
        Self {
            db_connection: state.db_connection.clone(),
        }
    }
}
