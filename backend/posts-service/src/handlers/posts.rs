/// Post handlers - HTTP endpoints for post operations
use super::{require_post, AppState};
use crate::error::{messages, AppError, Result};
use crate::models::{PostPayload, PostResponse, PostUpdatedResponse, PostsResponse};
use crate::validation::validate_post_payload;
use actix_web::{web, HttpResponse};

/// Create a new post
#[utoipa::path(
    post,
    path = "/api/posts",
    tag = "posts",
    request_body = PostPayload,
    responses(
        (status = 201, description = "Post created", body = PostResponse),
        (status = 400, description = "Title or contents missing", body = ErrorResponse),
        (status = 500, description = "Store failure", body = ErrorResponse)
    )
)]
pub async fn create_post(
    state: web::Data<AppState>,
    req: web::Json<PostPayload>,
) -> Result<HttpResponse> {
    let new_post = validate_post_payload(&req)?;

    let post = state
        .store
        .insert(new_post)
        .await
        .map_err(|e| AppError::persistence(messages::POST_SAVE_FAILED, e))?;

    tracing::info!(post_id = post.id, "Post created");
    Ok(HttpResponse::Created().json(PostResponse::new(post)))
}

/// List all posts
#[utoipa::path(
    get,
    path = "/api/posts",
    tag = "posts",
    responses(
        (status = 200, description = "All posts", body = PostsResponse),
        (status = 500, description = "Store failure", body = ErrorResponse)
    )
)]
pub async fn list_posts(state: web::Data<AppState>) -> Result<HttpResponse> {
    let posts = state
        .store
        .find()
        .await
        .map_err(|e| AppError::persistence(messages::POSTS_RETRIEVE_FAILED, e))?;

    Ok(HttpResponse::Ok().json(PostsResponse::new(posts)))
}

/// Get a post by ID
#[utoipa::path(
    get,
    path = "/api/posts/{post_id}",
    tag = "posts",
    params(("post_id" = i64, Path, description = "Post id")),
    responses(
        (status = 200, description = "The post", body = PostResponse),
        (status = 404, description = "No such post", body = ErrorResponse),
        (status = 500, description = "Store failure", body = ErrorResponse)
    )
)]
pub async fn get_post(
    state: web::Data<AppState>,
    post_id: web::Path<String>,
) -> Result<HttpResponse> {
    let post = require_post(
        state.store.as_ref(),
        &post_id,
        messages::POST_RETRIEVE_FAILED,
    )
    .await?;

    Ok(HttpResponse::Ok().json(PostResponse::new(post)))
}

/// Replace the title and contents of a post
#[utoipa::path(
    put,
    path = "/api/posts/{post_id}",
    tag = "posts",
    params(("post_id" = i64, Path, description = "Post id")),
    request_body = PostPayload,
    responses(
        (status = 200, description = "Post updated", body = PostUpdatedResponse),
        (status = 400, description = "Title or contents missing", body = ErrorResponse),
        (status = 404, description = "No such post", body = ErrorResponse),
        (status = 500, description = "Store failure", body = ErrorResponse)
    )
)]
pub async fn update_post(
    state: web::Data<AppState>,
    post_id: web::Path<String>,
    req: web::Json<PostPayload>,
) -> Result<HttpResponse> {
    let changes = validate_post_payload(&req)?;

    let post = require_post(
        state.store.as_ref(),
        &post_id,
        messages::POST_UPDATE_FAILED,
    )
    .await?;

    // The row can vanish between lookup and update; the store reports that as None.
    let updated = state
        .store
        .update(post.id, changes)
        .await
        .map_err(|e| AppError::persistence(messages::POST_UPDATE_FAILED, e))?
        .ok_or(AppError::NotFound(messages::POST_NOT_FOUND))?;

    tracing::info!(post_id = updated.id, "Post updated");
    Ok(HttpResponse::Ok().json(PostUpdatedResponse::new(updated.id)))
}

/// Delete a post, returning the removed record
#[utoipa::path(
    delete,
    path = "/api/posts/{post_id}",
    tag = "posts",
    params(("post_id" = i64, Path, description = "Post id")),
    responses(
        (status = 200, description = "The deleted post", body = PostResponse),
        (status = 404, description = "No such post", body = ErrorResponse),
        (status = 500, description = "Store failure", body = ErrorResponse)
    )
)]
pub async fn delete_post(
    state: web::Data<AppState>,
    post_id: web::Path<String>,
) -> Result<HttpResponse> {
    let post = require_post(
        state.store.as_ref(),
        &post_id,
        messages::POST_REMOVE_FAILED,
    )
    .await?;

    let removed = state
        .store
        .remove(post.id)
        .await
        .map_err(|e| AppError::persistence(messages::POST_REMOVE_FAILED, e))?
        .ok_or(AppError::NotFound(messages::POST_NOT_FOUND))?;

    tracing::info!(post_id = removed.id, "Post deleted");
    Ok(HttpResponse::Ok().json(PostResponse::new(removed)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::db::InMemoryPostStore;
    use std::sync::Arc;

    fn state() -> web::Data<AppState> {
        web::Data::new(AppState::new(Arc::new(InMemoryPostStore::new())))
    }

    #[actix_web::test]
    async fn non_numeric_id_is_not_found() {
        let err = get_post(state(), web::Path::from("abc".to_string()))
            .await
            .unwrap_err();

        assert!(matches!(err, AppError::NotFound(msg) if msg == messages::POST_NOT_FOUND));
    }

    #[actix_web::test]
    async fn update_validates_before_lookup() {
        let payload = web::Json(PostPayload {
            title: Some("only title".into()),
            contents: None,
        });

        let err = update_post(state(), web::Path::from("404".to_string()), payload)
            .await
            .unwrap_err();

        assert!(matches!(err, AppError::Validation(msg) if msg == messages::POST_PAYLOAD_INVALID));
    }
}
