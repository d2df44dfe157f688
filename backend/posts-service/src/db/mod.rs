/// Database access layer
///
/// This module provides:
/// - `PostStore`: the async persistence contract the handlers depend on
/// - `InMemoryPostStore`: process-local storage for development and tests
/// - `PgPostStore`: PostgreSQL storage backed by the post/comment repositories
use crate::models::{Comment, NewComment, NewPost, Post};
use async_trait::async_trait;
use thiserror::Error;

pub mod comment_repo;
pub mod memory;
pub mod pg;
pub mod post_repo;

pub use memory::InMemoryPostStore;
pub use pg::PgPostStore;

pub type StoreResult<T> = std::result::Result<T, StoreError>;

/// Failures reported by a store
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("database error: {0}")]
    Database(#[source] sqlx::Error),

    /// A comment referenced a post that is not stored
    #[error("post {0} does not exist")]
    MissingPost(i64),

    /// The store could not be reached (pool exhausted or closed, I/O failure)
    #[error("storage unavailable: {0}")]
    Unavailable(String),
}

impl From<sqlx::Error> for StoreError {
    fn from(err: sqlx::Error) -> Self {
        match err {
            sqlx::Error::PoolTimedOut | sqlx::Error::PoolClosed | sqlx::Error::Io(_) => {
                StoreError::Unavailable(err.to_string())
            }
            other => StoreError::Database(other),
        }
    }
}

/// Persistence operations for posts and their comments.
///
/// `update` and `remove` are conditional: they return `None` when the post is
/// gone by the time the statement runs, so callers never act on a stale lookup.
#[async_trait]
pub trait PostStore: Send + Sync {
    /// All posts, ordered by id
    async fn find(&self) -> StoreResult<Vec<Post>>;

    async fn find_by_id(&self, id: i64) -> StoreResult<Option<Post>>;

    /// Insert a post; the store assigns its id
    async fn insert(&self, post: NewPost) -> StoreResult<Post>;

    /// Replace title and contents of an existing post
    async fn update(&self, id: i64, post: NewPost) -> StoreResult<Option<Post>>;

    /// Delete a post (and its comments), returning the removed record
    async fn remove(&self, id: i64) -> StoreResult<Option<Post>>;

    /// Comments of one post, ordered by id
    async fn find_post_comments(&self, post_id: i64) -> StoreResult<Vec<Comment>>;

    /// Insert a comment; fails with `MissingPost` if the parent is absent
    async fn insert_comment(&self, comment: NewComment) -> StoreResult<Comment>;

    async fn find_comment_by_id(&self, id: i64) -> StoreResult<Option<Comment>>;

    /// Cheap connectivity probe used by the readiness endpoint
    async fn health_check(&self) -> StoreResult<()>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn connectivity_failures_are_unavailable() {
        for err in [
            sqlx::Error::PoolTimedOut,
            sqlx::Error::PoolClosed,
            sqlx::Error::Io(std::io::Error::new(
                std::io::ErrorKind::ConnectionReset,
                "reset",
            )),
        ] {
            assert!(matches!(StoreError::from(err), StoreError::Unavailable(_)));
        }
    }

    #[test]
    fn query_failures_stay_database_errors() {
        assert!(matches!(
            StoreError::from(sqlx::Error::RowNotFound),
            StoreError::Database(sqlx::Error::RowNotFound)
        ));
    }
}
