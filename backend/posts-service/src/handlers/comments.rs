/// Comment handlers - HTTP endpoints for comments nested under posts
use super::{parse_id, require_post, AppState};
use crate::db::StoreError;
use crate::error::{messages, AppError, Result};
use crate::models::{CommentPayload, CommentResponse, CommentsResponse};
use crate::validation::validate_comment_payload;
use actix_web::{web, HttpResponse};

/// Create a comment on a post
#[utoipa::path(
    post,
    path = "/api/posts/{post_id}/comments",
    tag = "comments",
    params(("post_id" = i64, Path, description = "Parent post id")),
    request_body = CommentPayload,
    responses(
        (status = 201, description = "Comment created", body = CommentResponse),
        (status = 400, description = "Text missing", body = ErrorResponse),
        (status = 404, description = "No such post", body = ErrorResponse),
        (status = 500, description = "Store failure", body = ErrorResponse)
    )
)]
pub async fn create_comment(
    state: web::Data<AppState>,
    post_id: web::Path<String>,
    req: web::Json<CommentPayload>,
) -> Result<HttpResponse> {
    let draft = validate_comment_payload(&req)?;

    let post = require_post(
        state.store.as_ref(),
        &post_id,
        messages::COMMENT_SAVE_FAILED,
    )
    .await?;

    let comment = state
        .store
        .insert_comment(draft.for_post(post.id))
        .await
        .map_err(|e| match e {
            // Parent deleted after the lookup
            StoreError::MissingPost(_) => AppError::NotFound(messages::POST_NOT_FOUND),
            other => AppError::persistence(messages::COMMENT_SAVE_FAILED, other),
        })?;

    tracing::info!(post_id = post.id, comment_id = comment.id, "Comment created");
    Ok(HttpResponse::Created().json(CommentResponse::new(comment)))
}

/// Get comments for a post
#[utoipa::path(
    get,
    path = "/api/posts/{post_id}/comments",
    tag = "comments",
    params(("post_id" = i64, Path, description = "Parent post id")),
    responses(
        (status = 200, description = "Comments of the post", body = CommentsResponse),
        (status = 404, description = "No such post, or the post has no comments", body = ErrorResponse),
        (status = 500, description = "Store failure", body = ErrorResponse)
    )
)]
pub async fn list_post_comments(
    state: web::Data<AppState>,
    post_id: web::Path<String>,
) -> Result<HttpResponse> {
    let post = require_post(
        state.store.as_ref(),
        &post_id,
        messages::COMMENTS_RETRIEVE_FAILED,
    )
    .await?;

    let comments = state
        .store
        .find_post_comments(post.id)
        .await
        .map_err(|e| AppError::persistence(messages::COMMENTS_RETRIEVE_FAILED, e))?;

    if comments.is_empty() {
        return Err(AppError::NotFound(messages::POST_HAS_NO_COMMENTS));
    }

    Ok(HttpResponse::Ok().json(CommentsResponse::new(comments)))
}

/// Get a single comment by its own id
#[utoipa::path(
    get,
    path = "/api/posts/comments/{comment_id}",
    tag = "comments",
    params(("comment_id" = i64, Path, description = "Comment id")),
    responses(
        (status = 200, description = "The comment", body = CommentResponse),
        (status = 404, description = "No such comment", body = ErrorResponse),
        (status = 500, description = "Store failure", body = ErrorResponse)
    )
)]
pub async fn get_comment(
    state: web::Data<AppState>,
    comment_id: web::Path<String>,
) -> Result<HttpResponse> {
    let comment_id =
        parse_id(&comment_id).ok_or(AppError::NotFound(messages::COMMENT_NOT_FOUND))?;

    let comment = state
        .store
        .find_comment_by_id(comment_id)
        .await
        .map_err(|e| AppError::persistence(messages::COMMENT_RETRIEVE_FAILED, e))?
        .ok_or(AppError::NotFound(messages::COMMENT_NOT_FOUND))?;

    Ok(HttpResponse::Ok().json(CommentResponse::new(comment)))
}

/// Get a comment through its parent post
#[utoipa::path(
    get,
    path = "/api/posts/{post_id}/comments/{comment_id}",
    tag = "comments",
    params(
        ("post_id" = i64, Path, description = "Parent post id"),
        ("comment_id" = i64, Path, description = "Comment id")
    ),
    responses(
        (status = 200, description = "The comment", body = CommentResponse),
        (status = 404, description = "No such post, or no such comment on it", body = ErrorResponse),
        (status = 500, description = "Store failure", body = ErrorResponse)
    )
)]
pub async fn get_post_comment(
    state: web::Data<AppState>,
    path: web::Path<(String, String)>,
) -> Result<HttpResponse> {
    let (post_id, comment_id) = path.into_inner();

    let post = require_post(
        state.store.as_ref(),
        &post_id,
        messages::COMMENT_RETRIEVE_FAILED,
    )
    .await?;

    let comment_id =
        parse_id(&comment_id).ok_or(AppError::NotFound(messages::COMMENT_NOT_FOUND))?;

    let comment = state
        .store
        .find_comment_by_id(comment_id)
        .await
        .map_err(|e| AppError::persistence(messages::COMMENT_RETRIEVE_FAILED, e))?
        .filter(|comment| comment.post_id == post.id)
        .ok_or(AppError::NotFound(messages::COMMENT_NOT_FOUND))?;

    Ok(HttpResponse::Ok().json(CommentResponse::new(comment)))
}
