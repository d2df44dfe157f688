//! Process-local store.
//!
//! Ids start at 1 and are never reused. Removing a post removes its comments.

use super::{PostStore, StoreError, StoreResult};
use crate::models::{Comment, NewComment, NewPost, Post};
use async_trait::async_trait;
use std::collections::BTreeMap;
use tokio::sync::RwLock;

#[derive(Debug, Default)]
struct Tables {
    posts: BTreeMap<i64, Post>,
    comments: BTreeMap<i64, Comment>,
    next_post_id: i64,
    next_comment_id: i64,
}

impl Tables {
    fn allocate_post_id(&mut self) -> i64 {
        self.next_post_id += 1;
        self.next_post_id
    }

    fn allocate_comment_id(&mut self) -> i64 {
        self.next_comment_id += 1;
        self.next_comment_id
    }
}

#[derive(Debug, Default)]
pub struct InMemoryPostStore {
    tables: RwLock<Tables>,
}

impl InMemoryPostStore {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl PostStore for InMemoryPostStore {
    async fn find(&self) -> StoreResult<Vec<Post>> {
        let tables = self.tables.read().await;
        Ok(tables.posts.values().cloned().collect())
    }

    async fn find_by_id(&self, id: i64) -> StoreResult<Option<Post>> {
        let tables = self.tables.read().await;
        Ok(tables.posts.get(&id).cloned())
    }

    async fn insert(&self, post: NewPost) -> StoreResult<Post> {
        let mut tables = self.tables.write().await;
        let id = tables.allocate_post_id();
        let post = Post {
            id,
            title: post.title,
            contents: post.contents,
        };
        tables.posts.insert(id, post.clone());
        Ok(post)
    }

    async fn update(&self, id: i64, post: NewPost) -> StoreResult<Option<Post>> {
        let mut tables = self.tables.write().await;
        Ok(tables.posts.get_mut(&id).map(|stored| {
            stored.title = post.title;
            stored.contents = post.contents;
            stored.clone()
        }))
    }

    async fn remove(&self, id: i64) -> StoreResult<Option<Post>> {
        let mut tables = self.tables.write().await;
        let removed = tables.posts.remove(&id);
        if removed.is_some() {
            tables.comments.retain(|_, comment| comment.post_id != id);
        }
        Ok(removed)
    }

    async fn find_post_comments(&self, post_id: i64) -> StoreResult<Vec<Comment>> {
        let tables = self.tables.read().await;
        Ok(tables
            .comments
            .values()
            .filter(|comment| comment.post_id == post_id)
            .cloned()
            .collect())
    }

    async fn insert_comment(&self, comment: NewComment) -> StoreResult<Comment> {
        let mut tables = self.tables.write().await;
        if !tables.posts.contains_key(&comment.post_id) {
            return Err(StoreError::MissingPost(comment.post_id));
        }

        let id = tables.allocate_comment_id();
        let comment = Comment {
            id,
            text: comment.text,
            post_id: comment.post_id,
        };
        tables.comments.insert(id, comment.clone());
        Ok(comment)
    }

    async fn find_comment_by_id(&self, id: i64) -> StoreResult<Option<Comment>> {
        let tables = self.tables.read().await;
        Ok(tables.comments.get(&id).cloned())
    }

    async fn health_check(&self) -> StoreResult<()> {
        Ok(())
    }
}
