//! Application router configuration.

use std::path::PathBuf;

use axum::{
    Router,
    handler::HandlerWithoutStateExt,
    routing::{get, post},
};
use tower_http::services::ServeDir;

use crate::{
    AppState, endpoints,
    envelope::{
        create_envelope_endpoint, delete_envelope_endpoint, get_envelope_endpoint,
        list_envelopes_endpoint, transfer_endpoint, update_envelope_endpoint,
    },
    not_found::{get_404_not_found, get_405_method_not_allowed},
};

/// Return a router with all the app's routes.
///
/// If `public_dir` is given, requests that do not match a route are served
/// from that directory as static files.
/// Anything else gets a 404 response with a JSON error body, and a known path
/// requested with the wrong method gets a 405 with a JSON error body.
pub fn build_router(state: AppState, public_dir: Option<PathBuf>) -> Router {
    let router = Router::new()
        .route(endpoints::ROOT, get(get_hello_world))
        .route(
            endpoints::ENVELOPES,
            get(list_envelopes_endpoint).post(create_envelope_endpoint),
        )
        .route(
            endpoints::ENVELOPE,
            get(get_envelope_endpoint)
                .put(update_envelope_endpoint)
                .delete(delete_envelope_endpoint),
        )
        .route(endpoints::TRANSFER, post(transfer_endpoint))
        .method_not_allowed_fallback(get_405_method_not_allowed);

    let router = match public_dir {
        Some(public_dir) => router.fallback_service(
            ServeDir::new(public_dir).not_found_service(get_404_not_found.into_service()),
        ),
        None => router.fallback(get_404_not_found),
    };

    router.with_state(state)
}

/// Greet the client, useful for checking that the server is up.
async fn get_hello_world() -> &'static str {
    "Hello world"
}
