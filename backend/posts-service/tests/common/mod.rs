#![allow(dead_code)]

use async_trait::async_trait;
use posts_service::db::{InMemoryPostStore, PostStore, StoreError, StoreResult};
use posts_service::models::{Comment, NewComment, NewPost, Post};
use std::sync::Mutex;

/// Build the posts API around `$store` (an `Arc<dyn PostStore>`)
macro_rules! init_app {
    ($store:expr) => {
        actix_web::test::init_service(
            actix_web::App::new()
                .app_data(actix_web::web::Data::new(posts_service::AppState::new($store)))
                .wrap(posts_service::middleware::MetricsMiddleware)
                .configure(posts_service::routes::configure_operational)
                .configure(posts_service::routes::configure)
                .default_service(actix_web::web::to(
                    posts_service::handlers::route_not_found,
                )),
        )
        .await
    };
}
pub(crate) use init_app;

/// Which store calls should fail
#[derive(Debug, Clone, Copy, Default)]
pub struct Faults {
    pub reads: bool,
    pub writes: bool,
}

/// In-memory store that records every call and fails on demand
#[derive(Default)]
pub struct FaultyStore {
    inner: InMemoryPostStore,
    faults: Mutex<Faults>,
    calls: Mutex<Vec<&'static str>>,
}

impl FaultyStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set_faults(&self, faults: Faults) {
        *self.faults.lock().unwrap() = faults;
    }

    pub fn calls(&self) -> Vec<&'static str> {
        self.calls.lock().unwrap().clone()
    }

    pub fn clear_calls(&self) {
        self.calls.lock().unwrap().clear();
    }

    fn enter(&self, call: &'static str, write: bool) -> StoreResult<()> {
        self.calls.lock().unwrap().push(call);
        let faults = *self.faults.lock().unwrap();
        if (write && faults.writes) || (!write && faults.reads) {
            return Err(StoreError::Unavailable(format!("{call} failed")));
        }
        Ok(())
    }
}

#[async_trait]
impl PostStore for FaultyStore {
    async fn find(&self) -> StoreResult<Vec<Post>> {
        self.enter("find", false)?;
        self.inner.find().await
    }

    async fn find_by_id(&self, id: i64) -> StoreResult<Option<Post>> {
        self.enter("find_by_id", false)?;
        self.inner.find_by_id(id).await
    }

    async fn insert(&self, post: NewPost) -> StoreResult<Post> {
        self.enter("insert", true)?;
        self.inner.insert(post).await
    }

    async fn update(&self, id: i64, post: NewPost) -> StoreResult<Option<Post>> {
        self.enter("update", true)?;
        self.inner.update(id, post).await
    }

    async fn remove(&self, id: i64) -> StoreResult<Option<Post>> {
        self.enter("remove", true)?;
        self.inner.remove(id).await
    }

    async fn find_post_comments(&self, post_id: i64) -> StoreResult<Vec<Comment>> {
        self.enter("find_post_comments", false)?;
        self.inner.find_post_comments(post_id).await
    }

    async fn insert_comment(&self, comment: NewComment) -> StoreResult<Comment> {
        self.enter("insert_comment", true)?;
        self.inner.insert_comment(comment).await
    }

    async fn find_comment_by_id(&self, id: i64) -> StoreResult<Option<Comment>> {
        self.enter("find_comment_by_id", false)?;
        self.inner.find_comment_by_id(id).await
    }

    async fn health_check(&self) -> StoreResult<()> {
        self.enter("health_check", false)
    }
}

/// Store whose posts exist for lookups but are gone by the time a write runs
pub struct VanishingStore {
    post: Post,
}

impl VanishingStore {
    pub fn new(id: i64) -> Self {
        Self {
            post: Post {
                id,
                title: "about to vanish".to_string(),
                contents: "deleted concurrently".to_string(),
            },
        }
    }
}

#[async_trait]
impl PostStore for VanishingStore {
    async fn find(&self) -> StoreResult<Vec<Post>> {
        Ok(vec![self.post.clone()])
    }

    async fn find_by_id(&self, id: i64) -> StoreResult<Option<Post>> {
        Ok((id == self.post.id).then(|| self.post.clone()))
    }

    async fn insert(&self, post: NewPost) -> StoreResult<Post> {
        Ok(Post {
            id: self.post.id + 1,
            title: post.title,
            contents: post.contents,
        })
    }

    async fn update(&self, _id: i64, _post: NewPost) -> StoreResult<Option<Post>> {
        Ok(None)
    }

    async fn remove(&self, _id: i64) -> StoreResult<Option<Post>> {
        Ok(None)
    }

    async fn find_post_comments(&self, _post_id: i64) -> StoreResult<Vec<Comment>> {
        Ok(Vec::new())
    }

    async fn insert_comment(&self, comment: NewComment) -> StoreResult<Comment> {
        Err(StoreError::MissingPost(comment.post_id))
    }

    async fn find_comment_by_id(&self, _id: i64) -> StoreResult<Option<Comment>> {
        Ok(None)
    }

    async fn health_check(&self) -> StoreResult<()> {
        Ok(())
    }
}
