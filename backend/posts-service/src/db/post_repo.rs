use crate::models::{NewPost, Post};
use sqlx::PgPool;

/// List every post in id order
pub async fn find_posts(pool: &PgPool) -> Result<Vec<Post>, sqlx::Error> {
    let posts = sqlx::query_as::<_, Post>(
        r#"
        SELECT id, title, contents
        FROM posts
        ORDER BY id
        "#,
    )
    .fetch_all(pool)
    .await?;

    Ok(posts)
}

/// Find a post by ID
pub async fn find_post_by_id(pool: &PgPool, post_id: i64) -> Result<Option<Post>, sqlx::Error> {
    let post = sqlx::query_as::<_, Post>(
        r#"
        SELECT id, title, contents
        FROM posts
        WHERE id = $1
        "#,
    )
    .bind(post_id)
    .fetch_optional(pool)
    .await?;

    Ok(post)
}

/// Create a new post
/// Returns the created post with its assigned id
pub async fn create_post(pool: &PgPool, post: &NewPost) -> Result<Post, sqlx::Error> {
    let post = sqlx::query_as::<_, Post>(
        r#"
        INSERT INTO posts (title, contents)
        VALUES ($1, $2)
        RETURNING id, title, contents
        "#,
    )
    .bind(&post.title)
    .bind(&post.contents)
    .fetch_one(pool)
    .await?;

    Ok(post)
}

/// Replace title and contents in a single statement.
/// Returns None if the post no longer exists.
pub async fn update_post(
    pool: &PgPool,
    post_id: i64,
    post: &NewPost,
) -> Result<Option<Post>, sqlx::Error> {
    let post = sqlx::query_as::<_, Post>(
        r#"
        UPDATE posts
        SET title = $1, contents = $2, updated_at = NOW()
        WHERE id = $3
        RETURNING id, title, contents
        "#,
    )
    .bind(&post.title)
    .bind(&post.contents)
    .bind(post_id)
    .fetch_optional(pool)
    .await?;

    Ok(post)
}

/// Delete a post, returning the removed row.
/// Comments go with it through the foreign key cascade.
pub async fn delete_post(pool: &PgPool, post_id: i64) -> Result<Option<Post>, sqlx::Error> {
    let post = sqlx::query_as::<_, Post>(
        r#"
        DELETE FROM posts
        WHERE id = $1
        RETURNING id, title, contents
        "#,
    )
    .bind(post_id)
    .fetch_optional(pool)
    .await?;

    Ok(post)
}
