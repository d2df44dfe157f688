/// HTTP handlers for the posts API
///
/// This module contains handlers for:
/// - Posts: create, list, read, replace, delete
/// - Comments: create and list under a post, read by id
/// - Health: liveness and readiness probes
///
/// Every handler is a straight pipeline: validate the body, check the
/// referenced post exists, call the store, shape the envelope.
pub mod comments;
pub mod health;
pub mod posts;

use crate::db::PostStore;
use crate::error::{messages, AppError, Result};
use crate::models::{ErrorResponse, Post};
use actix_web::HttpResponse;
use std::sync::Arc;

pub use comments::{create_comment, get_comment, get_post_comment, list_post_comments};
pub use health::{health_summary, liveness_check, readiness_summary};
pub use posts::{create_post, delete_post, get_post, list_posts, update_post};

/// Shared handler state
#[derive(Clone)]
pub struct AppState {
    pub store: Arc<dyn PostStore>,
}

impl AppState {
    pub fn new(store: Arc<dyn PostStore>) -> Self {
        Self { store }
    }
}

/// Path ids must be canonical decimal integers; anything else ("+1", "01",
/// "abc") can never name a stored record
pub(crate) fn parse_id(raw: &str) -> Option<i64> {
    let id: i64 = raw.parse().ok()?;
    (id.to_string() == raw).then_some(id)
}

/// Look up the post named by a path segment.
///
/// `failure` is the message reported if the store itself errors; it differs
/// per endpoint.
pub(crate) async fn require_post(
    store: &dyn PostStore,
    raw_id: &str,
    failure: &'static str,
) -> Result<Post> {
    let post_id = parse_id(raw_id).ok_or(AppError::NotFound(messages::POST_NOT_FOUND))?;

    store
        .find_by_id(post_id)
        .await
        .map_err(|e| AppError::persistence(failure, e))?
        .ok_or(AppError::NotFound(messages::POST_NOT_FOUND))
}

/// Fallback for unmatched routes
pub async fn route_not_found() -> HttpResponse {
    HttpResponse::NotFound().json(ErrorResponse::new(messages::ROUTE_NOT_FOUND))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_id_accepts_integers_only() {
        assert_eq!(parse_id("12"), Some(12));
        assert_eq!(parse_id("0"), Some(0));
        assert_eq!(parse_id("-3"), Some(-3));
        assert_eq!(parse_id("+1"), None);
        assert_eq!(parse_id("01"), None);
        assert_eq!(parse_id("-0"), None);
        assert_eq!(parse_id("abc"), None);
        assert_eq!(parse_id("1.5"), None);
        assert_eq!(parse_id(""), None);
    }
}
