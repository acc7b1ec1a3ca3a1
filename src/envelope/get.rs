//! Getting a single envelope.

use axum::{
    extract::State,
    response::{IntoResponse, Response},
};

use crate::{
    Error,
    envelope::{EnvelopeState, get_envelope, parse_envelope_id},
    extract::AppPath,
    response::ApiResponse,
};

/// A route handler for getting an envelope by its ID.
pub async fn get_envelope_endpoint(
    State(state): State<EnvelopeState>,
    AppPath(raw_id): AppPath<String>,
) -> Result<Response, Error> {
    let envelope_id = parse_envelope_id(&raw_id)?;

    let connection = state.lock_connection()?;

    let envelope = get_envelope(envelope_id, &connection)?;

    Ok(ApiResponse::ok("Envelope information retrieved!", envelope).into_response())
}
