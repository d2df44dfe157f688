/// OpenAPI documentation for the posts API
use crate::handlers;
use crate::models::{
    Comment, CommentPayload, CommentResponse, CommentsResponse, ErrorResponse, Post, PostPayload,
    PostResponse, PostUpdatedResponse, PostsResponse,
};
use actix_web::HttpResponse;
use utoipa::OpenApi;

#[derive(OpenApi)]
#[openapi(
    info(
        title = "Posts API",
        version = "1.0.0",
        description = "CRUD API for posts and the comments attached to them.",
        license(name = "MIT")
    ),
    paths(
        handlers::posts::create_post,
        handlers::posts::list_posts,
        handlers::posts::get_post,
        handlers::posts::update_post,
        handlers::posts::delete_post,
        handlers::comments::create_comment,
        handlers::comments::list_post_comments,
        handlers::comments::get_comment,
        handlers::comments::get_post_comment,
    ),
    components(schemas(
        Post,
        Comment,
        PostPayload,
        CommentPayload,
        PostResponse,
        PostsResponse,
        PostUpdatedResponse,
        CommentResponse,
        CommentsResponse,
        ErrorResponse,
    )),
    tags(
        (name = "posts", description = "Post creation, retrieval, updates, and deletion"),
        (name = "comments", description = "Comments attached to posts"),
    )
)]
pub struct ApiDoc;

pub async fn openapi_json() -> HttpResponse {
    match ApiDoc::openapi().to_json() {
        Ok(body) => HttpResponse::Ok()
            .content_type("application/json")
            .body(body),
        Err(e) => {
            tracing::error!("OpenAPI serialization failed: {}", e);
            HttpResponse::InternalServerError().finish()
        }
    }
}
