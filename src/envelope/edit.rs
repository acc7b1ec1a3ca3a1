//! Defines the endpoint for updating an envelope.

use axum::{
    extract::State,
    response::{IntoResponse, Response},
};

use crate::{
    Error,
    envelope::{EnvelopeForm, EnvelopeState, NewEnvelope, parse_envelope_id, update_envelope},
    extract::{AppJson, AppPath},
    response::ApiResponse,
};

/// A route handler for overwriting the title and budget of an envelope.
///
/// Responds with the updated envelope, or 404 Not Found if the envelope does not exist.
pub async fn update_envelope_endpoint(
    State(state): State<EnvelopeState>,
    AppPath(raw_id): AppPath<String>,
    AppJson(form): AppJson<EnvelopeForm>,
) -> Result<Response, Error> {
    let envelope_id = parse_envelope_id(&raw_id)?;
    let new_envelope = NewEnvelope::try_from(form)?;

    let connection = state.lock_connection()?;

    let envelope = update_envelope(envelope_id, &new_envelope, &connection)?;

    Ok(ApiResponse::ok("The envelope has been updated!", envelope).into_response())
}

#[cfg(test)]
mod tests {
    use std::sync::{Arc, Mutex};

    use axum::{
        extract::State,
        http::StatusCode,
        response::IntoResponse,
    };
    use serde_json::json;

    use crate::{
        envelope::{
            EnvelopeForm, EnvelopeState, EnvelopeTitle, NewEnvelope, create_envelope,
            get_envelope, update_envelope_endpoint,
        },
        extract::{AppJson, AppPath},
        test_utils::{must_create_test_connection, parse_json_body},
    };

    fn get_test_state() -> EnvelopeState {
        let connection = must_create_test_connection();
        create_envelope(
            &NewEnvelope {
                title: EnvelopeTitle::new_unchecked("Restaurant"),
                budget: 90,
            },
            &connection,
        )
        .expect("Could not create test envelope");

        EnvelopeState {
            db_connection: Arc::new(Mutex::new(connection)),
        }
    }

    #[tokio::test]
    async fn can_update_envelope() {
        let state = get_test_state();
        let form = EnvelopeForm {
            title: "Surf lesson".to_owned(),
            budget: 150,
        };

        let response =
            update_envelope_endpoint(State(state.clone()), AppPath("1".to_owned()), AppJson(form))
                .await
                .into_response();

        assert_eq!(response.status(), StatusCode::OK);
        let body = parse_json_body(response).await;
        assert_eq!(
            body["data"],
            json!({"id": 1, "title": "Surf lesson", "budget": 150})
        );
        let got = get_envelope(1, &state.db_connection.lock().unwrap()).unwrap();
        assert_eq!(got.title.as_ref(), "Surf lesson");
        assert_eq!(got.budget, 150);
    }

    #[tokio::test]
    async fn missing_envelope_responds_not_found() {
        let state = get_test_state();
        let form = EnvelopeForm {
            title: "Surf lesson".to_owned(),
            budget: 150,
        };

        let response =
            update_envelope_endpoint(State(state), AppPath("42".to_owned()), AppJson(form))
                .await
                .into_response();

        assert_eq!(response.status(), StatusCode::NOT_FOUND);
    }

    #[tokio::test]
    async fn invalid_form_leaves_envelope_unchanged() {
        let state = get_test_state();
        let form = EnvelopeForm {
            title: "".to_owned(),
            budget: 150,
        };

        let response =
            update_envelope_endpoint(State(state.clone()), AppPath("1".to_owned()), AppJson(form))
                .await
                .into_response();

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        let got = get_envelope(1, &state.db_connection.lock().unwrap()).unwrap();
        assert_eq!(got.title.as_ref(), "Restaurant");
        assert_eq!(got.budget, 90);
    }
}
