//! A small REST API for managing budget envelopes.
//!
//! An envelope is a named bucket holding a budget. The API supports creating,
//! reading, updating and deleting envelopes, and transferring part of one
//! envelope's budget to another. All state lives in a single SQLite table.

#![warn(missing_docs)]

use std::{net::SocketAddr, time::Duration};

use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use axum_server::Handle;
use tokio::signal;

mod app_state;
mod db;
pub mod endpoints;
mod envelope;
mod extract;
mod logging;
mod not_found;
mod response;
mod routing;
#[cfg(test)]
mod test_utils;

pub use app_state::AppState;
pub use db::initialize as initialize_db;
pub use envelope::{
    Envelope, EnvelopeId, EnvelopeTitle, NewEnvelope, Transfer, create_envelope, get_envelope,
    list_envelopes, transfer_budget,
};
pub use logging::{LOG_BODY_LENGTH_LIMIT, logging_middleware};
pub use routing::build_router;

use crate::response::ErrorBody;

/// How long in-flight requests are given to finish once a shutdown signal is received.
const SHUTDOWN_GRACE_PERIOD: Duration = Duration::from_secs(5);

/// An async task that waits for either the ctrl+c or terminate signal, whichever comes first, and
/// then signals the server to shut down gracefully.
///
/// `handle` is a handle to an Axum `Server`.
pub async fn graceful_shutdown(handle: Handle<SocketAddr>) {
    let ctrl_c = async {
        signal::ctrl_c()
            .await
            .expect("failed to install Ctrl+C handler");
    };

    #[cfg(unix)]
    let terminate = async {
        signal::unix::signal(signal::unix::SignalKind::terminate())
            .expect("failed to install signal handler")
            .recv()
            .await;
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {
            tracing::debug!("Received ctrl+c signal.");
        },
        _ = terminate => {
            tracing::debug!("Received terminate signal.");
        },
    }

    tracing::info!(
        "Shutting down, waiting up to {}s for in-flight requests",
        SHUTDOWN_GRACE_PERIOD.as_secs()
    );
    handle.graceful_shutdown(Some(SHUTDOWN_GRACE_PERIOD));
}

/// The errors that may occur in the application.
#[derive(Debug, thiserror::Error, PartialEq)]
pub enum Error {
    /// The requested envelope was not found.
    ///
    /// Path IDs that are not integers also produce this error, since they
    /// cannot refer to any envelope.
    ///
    /// Internally, this error may occur when a query returns no rows.
    #[error("there is no envelope with this id")]
    NotFound,

    /// Listing envelopes found no envelopes at all.
    #[error("there are no envelopes")]
    EmptyCollection,

    /// An empty (or all whitespace) string was used as an envelope title.
    #[error("envelope title cannot be empty")]
    EmptyTitle,

    /// A budget below zero was used to create or update an envelope.
    #[error("budget must not be negative, got {0}")]
    NegativeBudget(i64),

    /// A transfer amount that is zero or negative.
    #[error("transfer amount must be greater than zero, got {0}")]
    InvalidAmount(i64),

    /// A transfer where the source and destination are the same envelope.
    #[error("cannot transfer from an envelope to itself")]
    SameEnvelope,

    /// The source envelope of a transfer does not hold enough budget.
    #[error("insufficient funds: requested {requested} but only {available} is available")]
    InsufficientFunds {
        /// The budget of the source envelope.
        available: i64,
        /// The amount the transfer asked for.
        requested: i64,
    },

    /// Crediting the destination envelope would overflow its budget.
    #[error("the destination budget would overflow")]
    BudgetOverflow,

    /// The request body could not be parsed as the expected JSON.
    ///
    /// `status` is the status code chosen by the JSON extractor, e.g. 415 for
    /// a missing content type or 422 for a missing field.
    #[error("invalid request body: {message}")]
    InvalidRequestBody {
        /// The status code to respond with.
        status: StatusCode,
        /// A description of what was wrong with the body.
        message: String,
    },

    /// Could not acquire the database lock
    #[error("could not acquire the database lock")]
    DatabaseLockError,

    /// An unhandled/unexpected SQL error.
    ///
    /// The error should only be logged for debugging on the server. The
    /// client only ever sees a generic internal server error.
    #[error("an unexpected SQL error occurred: {0}")]
    SqlError(rusqlite::Error),
}

impl From<rusqlite::Error> for Error {
    fn from(value: rusqlite::Error) -> Self {
        match value {
            rusqlite::Error::QueryReturnedNoRows => Error::NotFound,
            error => Error::SqlError(error),
        }
    }
}

impl Error {
    /// The HTTP status code that this error maps to.
    pub fn status_code(&self) -> StatusCode {
        match self {
            Error::NotFound | Error::EmptyCollection => StatusCode::NOT_FOUND,
            Error::EmptyTitle
            | Error::NegativeBudget(_)
            | Error::InvalidAmount(_)
            | Error::SameEnvelope => StatusCode::BAD_REQUEST,
            Error::InsufficientFunds { .. } | Error::BudgetOverflow => {
                StatusCode::UNPROCESSABLE_ENTITY
            }
            Error::InvalidRequestBody { status, .. } => *status,
            Error::DatabaseLockError | Error::SqlError(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for Error {
    fn into_response(self) -> Response {
        let status = self.status_code();

        let message = match &self {
            Error::NotFound => "There is no envelope with this id".to_owned(),
            Error::EmptyCollection => "There are no envelopes".to_owned(),
            // Storage errors are not shown to the client.
            Error::SqlError(error) => {
                tracing::error!("An unhandled SQL error occurred: {error}");
                INTERNAL_ERROR_MESSAGE.to_owned()
            }
            // Already logged when the lock was found to be poisoned.
            Error::DatabaseLockError => INTERNAL_ERROR_MESSAGE.to_owned(),
            error => capitalize(&error.to_string()),
        };

        (status, Json(ErrorBody::new(message))).into_response()
    }
}

const INTERNAL_ERROR_MESSAGE: &str = "Something went wrong, check the server logs for more details";

fn capitalize(text: &str) -> String {
    let mut chars = text.chars();

    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}
