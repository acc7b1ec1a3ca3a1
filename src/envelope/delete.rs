//! Defines the endpoint for deleting an envelope.

use axum::{extract::State, http::StatusCode};

use crate::{
    Error,
    envelope::{EnvelopeState, delete_envelope, parse_envelope_id},
    extract::AppPath,
};

/// A route handler for deleting an envelope, responds with 204 No Content.
pub async fn delete_envelope_endpoint(
    State(state): State<EnvelopeState>,
    AppPath(raw_id): AppPath<String>,
) -> Result<StatusCode, Error> {
    let envelope_id = parse_envelope_id(&raw_id)?;

    let connection = state.lock_connection()?;

    delete_envelope(envelope_id, &connection)?;
    tracing::debug!("Deleted envelope {envelope_id}");

    Ok(StatusCode::NO_CONTENT)
}
