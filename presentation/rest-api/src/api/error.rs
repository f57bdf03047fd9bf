use poem::http::StatusCode;
use poem_openapi::{Object, payload::Json};

#[derive(Object, Debug)]
pub struct ErrorResponse {
    /// Error class: NotFound, ValidationError, Conflict or InternalError
    pub name: String,
    /// Human-readable description of the violated rule
    pub message: String,
}

impl ErrorResponse {
    pub fn validation(message: impl Into<String>) -> Json<Self> {
        Json(Self {
            name: "ValidationError".to_string(),
            message: message.into(),
        })
    }
}

pub trait IntoErrorResponse {
    fn into_error_response(self) -> (StatusCode, Json<ErrorResponse>);
}
