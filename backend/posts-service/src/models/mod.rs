/// Data models for posts-service
///
/// This module defines structures for:
/// - Post / Comment: persisted records as returned by the store
/// - Request payloads accepted by the HTTP handlers
/// - Response envelopes written back to clients
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

/// A top-level post record
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, sqlx::FromRow, ToSchema)]
pub struct Post {
    pub id: i64,
    pub title: String,
    pub contents: String,
}

/// A comment attached to exactly one post
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, sqlx::FromRow, ToSchema)]
pub struct Comment {
    pub id: i64,
    pub text: String,
    pub post_id: i64,
}

/// Validated fields for inserting or replacing a post
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewPost {
    pub title: String,
    pub contents: String,
}

/// Validated comment text that has not been attached to a post yet
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommentDraft {
    pub text: String,
}

impl CommentDraft {
    /// Bind the draft to the post named in the request path
    pub fn for_post(self, post_id: i64) -> NewComment {
        NewComment {
            text: self.text,
            post_id,
        }
    }
}

/// Comment ready for insertion
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewComment {
    pub text: String,
    pub post_id: i64,
}

/// Request body for creating or updating a post
#[derive(Debug, Default, Deserialize, Validate, ToSchema)]
pub struct PostPayload {
    #[validate(required, length(min = 1))]
    pub title: Option<String>,
    #[validate(required, length(min = 1))]
    pub contents: Option<String>,
}

/// Request body for creating a comment.
///
/// Any `post_id` sent by the client is ignored; the path parameter wins.
#[derive(Debug, Default, Deserialize, Validate, ToSchema)]
pub struct CommentPayload {
    #[validate(required, length(min = 1))]
    pub text: Option<String>,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct PostResponse {
    pub success: bool,
    pub post: Post,
}

impl PostResponse {
    pub fn new(post: Post) -> Self {
        Self {
            success: true,
            post,
        }
    }
}

#[derive(Debug, Serialize, ToSchema)]
pub struct PostsResponse {
    pub success: bool,
    pub posts: Vec<Post>,
}

impl PostsResponse {
    pub fn new(posts: Vec<Post>) -> Self {
        Self {
            success: true,
            posts,
        }
    }
}

#[derive(Debug, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct PostUpdatedResponse {
    pub success: bool,
    pub post_id_updated: i64,
}

impl PostUpdatedResponse {
    pub fn new(post_id: i64) -> Self {
        Self {
            success: true,
            post_id_updated: post_id,
        }
    }
}

#[derive(Debug, Serialize, ToSchema)]
pub struct CommentResponse {
    pub success: bool,
    pub comment: Comment,
}

impl CommentResponse {
    pub fn new(comment: Comment) -> Self {
        Self {
            success: true,
            comment,
        }
    }
}

#[derive(Debug, Serialize, ToSchema)]
pub struct CommentsResponse {
    pub success: bool,
    pub comments: Vec<Comment>,
}

impl CommentsResponse {
    pub fn new(comments: Vec<Comment>) -> Self {
        Self {
            success: true,
            comments,
        }
    }
}

/// Body written for every failed request
#[derive(Debug, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ErrorResponse {
    pub success: bool,
    pub error_message: String,
}

impl ErrorResponse {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            success: false,
            error_message: message.into(),
        }
    }
}
