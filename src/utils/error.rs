use std::collections::HashMap;

use actix_web::{HttpResponse, ResponseError, http::StatusCode};
use serde_json::json;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum CustomError {
    #[error("Unauthorized: {0}")]
    UnauthorizedError(String),

    #[error("Bad Request: {0}")]
    BadRequestError(String),

    #[error("Validation Error: invalid input")]
    ValidationError(HashMap<String, String>),

    #[error("Not Found: {0}")]
    NotFoundError(String),

    #[error("Comment Not Found: {0}")]
    CommentNotFoundError(String),

    #[error("Already Liked: {0}")]
    AlreadyLikedError(String),

    #[error("Not Liked: {0}")]
    NotLikedError(String),

    #[error("Internal Server Error: {0}")]
    InternalServerError(String),
}

impl ResponseError for CustomError {
    fn status_code(&self) -> StatusCode {
        match *self {
            CustomError::UnauthorizedError(..) => StatusCode::UNAUTHORIZED,
            CustomError::BadRequestError(..)
            | CustomError::ValidationError(..)
            | CustomError::AlreadyLikedError(..)
            | CustomError::NotLikedError(..) => StatusCode::BAD_REQUEST,
            CustomError::NotFoundError(..) | CustomError::CommentNotFoundError(..) => {
                StatusCode::NOT_FOUND
            }
            CustomError::InternalServerError(..) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    fn error_response(&self) -> HttpResponse {
        let mut error_message = json!({
            "success": false,
            "message": self.to_string(),
            "httpStatusCode": self.status_code().as_u16(),
            "error": match *self {
                CustomError::UnauthorizedError(..) => "UNAUTHORIZED_ERROR",
                CustomError::BadRequestError(..) => "BAD_REQUEST_ERROR",
                CustomError::ValidationError(..) => "VALIDATION_ERROR",
                CustomError::NotFoundError(..) => "NOT_FOUND_ERROR",
                CustomError::CommentNotFoundError(..) => "COMMENT_NOT_FOUND_ERROR",
                CustomError::AlreadyLikedError(..) => "ALREADY_LIKED_ERROR",
                CustomError::NotLikedError(..) => "NOT_LIKED_ERROR",
                CustomError::InternalServerError(..) => "INTERNAL_SERVER_ERROR",
            },
            "service": std::env::var("SERVICE_NAME").unwrap_or_else(|_| "Unknown".to_string()),
        });

        // Validation failures carry the field-level error map in the body.
        if let CustomError::ValidationError(errors) = self {
            error_message["errors"] = json!(errors);
        }

        HttpResponse::build(self.status_code()).json(error_message)
    }
}
