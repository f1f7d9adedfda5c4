use std::cmp::Reverse;

use async_trait::async_trait;
use chrono::Utc;
use portfolio_types::{
    BlogPost, BlogPostUpdate, ContactMessage, ListMessagesOptions, ListPostsOptions,
    NewBlogPost, NewContactMessage, PostOrder,
};
use tokio::sync::RwLock;

use crate::error::{PersistError, Result};
use crate::trait_client::PersistenceClient;

#[derive(Default)]
struct Tables {
    posts: Vec<BlogPost>,
    messages: Vec<ContactMessage>,
    next_post_id: i64,
    next_message_id: i64,
}

impl Tables {
    fn post_id(&mut self) -> i64 {
        self.next_post_id += 1;
        self.next_post_id
    }

    fn message_id(&mut self) -> i64 {
        self.next_message_id += 1;
        self.next_message_id
    }
}

/// Process-local store used by tests and the `memory` backend.
///
/// A single lock covers both tables, so id assignment and the slug check
/// happen atomically with the insert.
#[derive(Default)]
pub struct InMemoryPersistenceClient {
    tables: RwLock<Tables>,
}

impl InMemoryPersistenceClient {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl PersistenceClient for InMemoryPersistenceClient {
    fn backend(&self) -> &'static str {
        "memory"
    }

    async fn ping(&self) -> Result<()> {
        Ok(())
    }

    async fn create_post(&self, post: NewBlogPost) -> Result<BlogPost> {
        let mut tables = self.tables.write().await;

        if tables.posts.iter().any(|p| p.slug == post.slug) {
            return Err(PersistError::DuplicateSlug(post.slug));
        }

        let id = tables.post_id();
        let stored = BlogPost::from_new(id, post, Utc::now());
        tables.posts.push(stored.clone());
        Ok(stored)
    }

    async fn update_post(&self, slug: &str, update: BlogPostUpdate) -> Result<BlogPost> {
        let mut tables = self.tables.write().await;

        let post = tables
            .posts
            .iter_mut()
            .find(|p| p.slug == slug)
            .ok_or_else(|| PersistError::PostNotFound(slug.to_string()))?;

        post.apply_update(update, Utc::now());
        Ok(post.clone())
    }

    async fn get_post(&self, slug: &str) -> Result<Option<BlogPost>> {
        let tables = self.tables.read().await;
        Ok(tables.posts.iter().find(|p| p.slug == slug).cloned())
    }

    async fn list_posts(&self, options: &ListPostsOptions) -> Result<Vec<BlogPost>> {
        let tables = self.tables.read().await;

        let mut posts: Vec<BlogPost> = tables
            .posts
            .iter()
            .filter(|p| options.matches(p.published))
            .cloned()
            .collect();

        match options.order {
            PostOrder::Newest => posts.sort_by_key(|p| Reverse((p.created_at, p.id))),
            PostOrder::Oldest => posts.sort_by_key(|p| (p.created_at, p.id)),
        }
        Ok(posts)
    }

    async fn create_message(&self, message: NewContactMessage) -> Result<ContactMessage> {
        let mut tables = self.tables.write().await;

        let id = tables.message_id();
        let stored = ContactMessage::from_new(id, message, Utc::now());
        tables.messages.push(stored.clone());
        Ok(stored)
    }

    async fn list_messages(&self, options: &ListMessagesOptions) -> Result<Vec<ContactMessage>> {
        let tables = self.tables.read().await;

        let mut messages: Vec<ContactMessage> = tables
            .messages
            .iter()
            .filter(|m| !options.unread_only || !m.read)
            .cloned()
            .collect();
        messages.sort_by_key(|m| Reverse((m.created_at, m.id)));
        Ok(messages)
    }

    async fn set_message_read(&self, id: i64, read: bool) -> Result<ContactMessage> {
        let mut tables = self.tables.write().await;

        let message = tables
            .messages
            .iter_mut()
            .find(|m| m.id == id)
            .ok_or(PersistError::MessageNotFound(id))?;

        message.read = read;
        Ok(message.clone())
    }
}
