//! The responses for requests that do not match any route, method or static file.

use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};

use crate::response::ErrorBody;

pub async fn get_404_not_found() -> Response {
    get_404_not_found_response()
}

pub fn get_404_not_found_response() -> Response {
    (
        StatusCode::NOT_FOUND,
        Json(ErrorBody::new("The requested resource could not be found")),
    )
        .into_response()
}

pub async fn get_405_method_not_allowed() -> Response {
    (
        StatusCode::METHOD_NOT_ALLOWED,
        Json(ErrorBody::new("This method is not allowed for the requested resource")),
    )
        .into_response()
}
