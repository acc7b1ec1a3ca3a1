//! Request extractors that reject with the API's JSON error body.

use axum::extract::{
    FromRequest, FromRequestParts,
    rejection::{JsonRejection, PathRejection},
};

use crate::Error;

/// A JSON request body.
///
/// Works like [axum::Json], except that a body that cannot be parsed is
/// rejected with an [Error::InvalidRequestBody] so that the client gets the
/// same JSON error body as every other error.
#[derive(Debug, FromRequest)]
#[from_request(via(axum::Json), rejection(Error))]
pub struct AppJson<T>(pub T);

impl From<JsonRejection> for Error {
    fn from(rejection: JsonRejection) -> Self {
        Error::InvalidRequestBody {
            status: rejection.status(),
            message: rejection.body_text(),
        }
    }
}

/// Parameters taken from the request path.
///
/// Works like [axum::extract::Path], except that a path that cannot be
/// parsed is rejected with [Error::NotFound], since no envelope can live at
/// such a path.
#[derive(Debug, FromRequestParts)]
#[from_request(via(axum::extract::Path), rejection(Error))]
pub struct AppPath<T>(pub T);

impl From<PathRejection> for Error {
    fn from(rejection: PathRejection) -> Self {
        tracing::debug!("Rejected request path: {}", rejection.body_text());
        Error::NotFound
    }
}
