//! 核心错误处理模块
//!
//! Every failure a handler can produce ends up here. `NotFound` is the only
//! variant that maps to 404; everything else is reported as a client error.

use axum::{
    extract::rejection::{BytesRejection, FormRejection, JsonRejection},
    http::StatusCode,
    response::{IntoResponse, Response},
};
use tracing::debug;

/// 核心错误类型
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CoreError {
    BadRequest(String),
    NotFound(String),
}

impl CoreError {
    pub fn bad_request(message: impl Into<String>) -> Self {
        CoreError::BadRequest(message.into())
    }

    pub fn not_found(message: impl Into<String>) -> Self {
        CoreError::NotFound(message.into())
    }

    pub fn status(&self) -> StatusCode {
        match self {
            CoreError::BadRequest(_) => StatusCode::BAD_REQUEST,
            CoreError::NotFound(_) => StatusCode::NOT_FOUND,
        }
    }

    pub fn message(&self) -> &str {
        match self {
            CoreError::BadRequest(msg) | CoreError::NotFound(msg) => msg,
        }
    }
}

impl std::fmt::Display for CoreError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.message())
    }
}

impl std::error::Error for CoreError {}

impl IntoResponse for CoreError {
    fn into_response(self) -> Response {
        let status = self.status();
        debug!(status = status.as_u16(), "request rejected: {}", self);

        // Plain-text body: the message is the whole response.
        let message = match self {
            CoreError::BadRequest(msg) | CoreError::NotFound(msg) => msg,
        };
        (status, message).into_response()
    }
}

impl From<JsonRejection> for CoreError {
    fn from(rejection: JsonRejection) -> Self {
        CoreError::BadRequest(rejection.body_text())
    }
}

impl From<BytesRejection> for CoreError {
    fn from(rejection: BytesRejection) -> Self {
        CoreError::BadRequest(rejection.body_text())
    }
}

impl From<FormRejection> for CoreError {
    fn from(rejection: FormRejection) -> Self {
        CoreError::BadRequest(rejection.body_text())
    }
}
