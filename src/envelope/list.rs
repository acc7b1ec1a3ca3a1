//! Listing all envelopes.

use axum::{
    extract::State,
    response::{IntoResponse, Response},
};

use crate::{
    Error,
    envelope::{EnvelopeState, list_envelopes},
    response::ApiResponse,
};

/// A route handler for listing every envelope ordered by ID.
///
/// Responds with 404 Not Found if there are no envelopes.
pub async fn list_envelopes_endpoint(
    State(state): State<EnvelopeState>,
) -> Result<Response, Error> {
    let connection = state.lock_connection()?;

    let envelopes = list_envelopes(&connection)?;

    Ok(ApiResponse::ok("Envelope information retrieved!", envelopes).into_response())
}

#[cfg(test)]
mod tests {
    use std::sync::{Arc, Mutex};

    use axum::{extract::State, http::StatusCode, response::IntoResponse};
    use serde_json::json;

    use crate::{
        envelope::{EnvelopeState, EnvelopeTitle, NewEnvelope, create_envelope},
        test_utils::{must_create_test_connection, parse_json_body},
    };

    use super::list_envelopes_endpoint;

    fn get_test_state() -> EnvelopeState {
        EnvelopeState {
            db_connection: Arc::new(Mutex::new(must_create_test_connection())),
        }
    }

    #[tokio::test]
    async fn empty_table_responds_not_found() {
        let state = get_test_state();

        let response = list_envelopes_endpoint(State(state)).await.into_response();

        assert_eq!(response.status(), StatusCode::NOT_FOUND);
        let body = parse_json_body(response).await;
        assert_eq!(body["message"], "There are no envelopes");
    }

    #[tokio::test]
    async fn responds_with_all_envelopes() {
        let state = get_test_state();
        {
            let connection = state.db_connection.lock().unwrap();
            for (title, budget) in [("Restaurant", 90), ("Surf lesson", 150)] {
                let envelope = NewEnvelope {
                    title: EnvelopeTitle::new_unchecked(title),
                    budget,
                };
                create_envelope(&envelope, &connection).unwrap();
            }
        }

        let response = list_envelopes_endpoint(State(state)).await.into_response();

        assert_eq!(response.status(), StatusCode::OK);
        let body = parse_json_body(response).await;
        assert_eq!(body["status"], "Success");
        assert_eq!(
            body["data"],
            json!([
                {"id": 1, "title": "Restaurant", "budget": 90},
                {"id": 2, "title": "Surf lesson", "budget": 150}
            ])
        );
    }
}
