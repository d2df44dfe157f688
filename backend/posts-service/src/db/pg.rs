//! PostgreSQL-backed store.

use super::{comment_repo, post_repo, PostStore, StoreError, StoreResult};
use crate::models::{Comment, NewComment, NewPost, Post};
use async_trait::async_trait;
use sqlx::PgPool;

#[derive(Clone)]
pub struct PgPostStore {
    pool: PgPool,
}

impl PgPostStore {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Apply the bundled schema migrations
    pub async fn run_migrations(&self) -> Result<(), sqlx::migrate::MigrateError> {
        tracing::debug!("Running posts-service database migrations");
        sqlx::migrate!("./migrations").run(&self.pool).await?;
        tracing::info!("Database migrations completed successfully");
        Ok(())
    }
}

#[async_trait]
impl PostStore for PgPostStore {
    async fn find(&self) -> StoreResult<Vec<Post>> {
        Ok(post_repo::find_posts(&self.pool).await?)
    }

    async fn find_by_id(&self, id: i64) -> StoreResult<Option<Post>> {
        Ok(post_repo::find_post_by_id(&self.pool, id).await?)
    }

    async fn insert(&self, post: NewPost) -> StoreResult<Post> {
        Ok(post_repo::create_post(&self.pool, &post).await?)
    }

    async fn update(&self, id: i64, post: NewPost) -> StoreResult<Option<Post>> {
        Ok(post_repo::update_post(&self.pool, id, &post).await?)
    }

    async fn remove(&self, id: i64) -> StoreResult<Option<Post>> {
        Ok(post_repo::delete_post(&self.pool, id).await?)
    }

    async fn find_post_comments(&self, post_id: i64) -> StoreResult<Vec<Comment>> {
        Ok(comment_repo::find_post_comments(&self.pool, post_id).await?)
    }

    async fn insert_comment(&self, comment: NewComment) -> StoreResult<Comment> {
        comment_repo::create_comment(&self.pool, &comment)
            .await
            .map_err(|err| match err {
                sqlx::Error::Database(ref db_err) if db_err.is_foreign_key_violation() => {
                    StoreError::MissingPost(comment.post_id)
                }
                other => StoreError::from(other),
            })
    }

    async fn find_comment_by_id(&self, id: i64) -> StoreResult<Option<Comment>> {
        Ok(comment_repo::find_comment_by_id(&self.pool, id).await?)
    }

    async fn health_check(&self) -> StoreResult<()> {
        Ok(db_pool::ping(&self.pool).await?)
    }
}
