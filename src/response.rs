//! JSON response bodies shared by the API's route handlers.

use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::Serialize;

/// The value of `status` in every successful response body.
pub const SUCCESS_STATUS: &str = "Success";
/// The value of `status` in every error response body.
pub const ERROR_STATUS: &str = "Error";

/// A successful response carrying `data`, sent with the status code `code`.
#[derive(Debug)]
pub struct ApiResponse<T> {
    code: StatusCode,
    body: SuccessBody<T>,
}

/// The JSON body of a successful response.
#[derive(Debug, Serialize, PartialEq)]
pub struct SuccessBody<T> {
    /// Always [SUCCESS_STATUS].
    pub status: String,
    /// A human readable description of what happened.
    pub message: String,
    /// The envelope(s) that the request read or changed.
    pub data: T,
}

impl<T> ApiResponse<T> {
    /// A response with the status code 200 OK.
    pub fn ok(message: &str, data: T) -> Self {
        Self::with_code(StatusCode::OK, message, data)
    }

    /// A response with the status code 201 Created.
    pub fn created(message: &str, data: T) -> Self {
        Self::with_code(StatusCode::CREATED, message, data)
    }

    fn with_code(code: StatusCode, message: &str, data: T) -> Self {
        Self {
            code,
            body: SuccessBody {
                status: SUCCESS_STATUS.to_owned(),
                message: message.to_owned(),
                data,
            },
        }
    }
}

impl<T: Serialize> IntoResponse for ApiResponse<T> {
    fn into_response(self) -> Response {
        (self.code, Json(self.body)).into_response()
    }
}

/// The JSON body of an error response.
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct ErrorBody {
    /// Always [ERROR_STATUS].
    pub status: String,
    /// A human readable description of the error.
    pub message: String,
}

impl ErrorBody {
    /// Create an error body with `message`.
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            status: ERROR_STATUS.to_owned(),
            message: message.into(),
        }
    }
}
