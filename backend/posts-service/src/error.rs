/// Error types for posts-service
///
/// Every failure a handler can produce is an `AppError`. The variant picks the
/// HTTP status; the message is the only detail a client ever sees.
use crate::db::StoreError;
use crate::models::ErrorResponse;
use actix_web::{error::ResponseError, http::StatusCode, HttpResponse};
use thiserror::Error;

/// Result type for posts-service operations
pub type Result<T> = std::result::Result<T, AppError>;

/// User-facing error messages
pub mod messages {
    pub const POST_PAYLOAD_INVALID: &str = "Please provide title and contents for the post.";
    pub const COMMENT_PAYLOAD_INVALID: &str = "Please provide text for the comment.";

    pub const POST_NOT_FOUND: &str = "The post with the specified ID does not exist.";
    pub const COMMENT_NOT_FOUND: &str = "The comment with the specified ID does not exist.";
    pub const POST_HAS_NO_COMMENTS: &str = "The post has no comments.";

    pub const POST_SAVE_FAILED: &str = "There was an error while saving the post to the database.";
    pub const POSTS_RETRIEVE_FAILED: &str = "The posts information could not be retrieved.";
    pub const POST_RETRIEVE_FAILED: &str = "The post information could not be retrieved.";
    pub const POST_UPDATE_FAILED: &str = "The post information could not be modified.";
    pub const POST_REMOVE_FAILED: &str = "The post could not be removed";

    pub const COMMENT_SAVE_FAILED: &str =
        "There was an error while saving the comment to the database.";
    pub const COMMENTS_RETRIEVE_FAILED: &str = "The comments information could not be retrieved.";
    pub const COMMENT_RETRIEVE_FAILED: &str = "The comment information could not be retrieved.";

    pub const ROUTE_NOT_FOUND: &str = "The requested resource does not exist.";
}

/// Application error types
#[derive(Debug, Error)]
pub enum AppError {
    /// Client payload is missing a required field
    #[error("{0}")]
    Validation(&'static str),

    /// Referenced resource is absent
    #[error("{0}")]
    NotFound(&'static str),

    /// A store operation failed
    #[error("{message}")]
    Persistence {
        message: &'static str,
        #[source]
        source: StoreError,
    },
}

impl AppError {
    /// Wrap a store failure, logging the underlying cause
    pub fn persistence(message: &'static str, source: StoreError) -> Self {
        tracing::error!(error = %source, "{}", message);
        AppError::Persistence { message, source }
    }
}

impl ResponseError for AppError {
    fn status_code(&self) -> StatusCode {
        match self {
            AppError::Validation(_) => StatusCode::BAD_REQUEST,
            AppError::NotFound(_) => StatusCode::NOT_FOUND,
            AppError::Persistence { .. } => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    fn error_response(&self) -> HttpResponse {
        HttpResponse::build(self.status_code()).json(ErrorResponse::new(self.to_string()))
    }
}
