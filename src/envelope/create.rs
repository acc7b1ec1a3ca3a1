//! Defines the endpoint for creating a new envelope.

use axum::{
    extract::State,
    response::{IntoResponse, Response},
};

use crate::{
    Error,
    envelope::{EnvelopeForm, EnvelopeState, NewEnvelope, create_envelope},
    extract::AppJson,
    response::ApiResponse,
};

/// A route handler for creating a new envelope, responds with the created envelope.
pub async fn create_envelope_endpoint(
    State(state): State<EnvelopeState>,
    AppJson(form): AppJson<EnvelopeForm>,
) -> Result<Response, Error> {
    let new_envelope = NewEnvelope::try_from(form)?;

    let connection = state.lock_connection()?;

    let envelope = create_envelope(&new_envelope, &connection)?;
    tracing::debug!("Created envelope {}", envelope.id);

    Ok(ApiResponse::created("New envelope created!", envelope).into_response())
}
