use crate::models::{Comment, NewComment};
use sqlx::PgPool;

/// Get comments for a post, oldest first
pub async fn find_post_comments(pool: &PgPool, post_id: i64) -> Result<Vec<Comment>, sqlx::Error> {
    let comments = sqlx::query_as::<_, Comment>(
        r#"
        SELECT id, text, post_id
        FROM comments
        WHERE post_id = $1
        ORDER BY id
        "#,
    )
    .bind(post_id)
    .fetch_all(pool)
    .await?;

    Ok(comments)
}

/// Get a comment by ID
pub async fn find_comment_by_id(
    pool: &PgPool,
    comment_id: i64,
) -> Result<Option<Comment>, sqlx::Error> {
    let comment = sqlx::query_as::<_, Comment>(
        r#"
        SELECT id, text, post_id
        FROM comments
        WHERE id = $1
        "#,
    )
    .bind(comment_id)
    .fetch_optional(pool)
    .await?;

    Ok(comment)
}

/// Create a new comment.
/// A missing parent post surfaces as a foreign key violation.
pub async fn create_comment(pool: &PgPool, comment: &NewComment) -> Result<Comment, sqlx::Error> {
    let comment = sqlx::query_as::<_, Comment>(
        r#"
        INSERT INTO comments (text, post_id)
        VALUES ($1, $2)
        RETURNING id, text, post_id
        "#,
    )
    .bind(&comment.text)
    .bind(comment.post_id)
    .fetch_one(pool)
    .await?;

    Ok(comment)
}
