use async_trait::async_trait;
use portfolio_types::{
    BlogPost, BlogPostUpdate, ContactMessage, ListMessagesOptions, ListPostsOptions,
    NewBlogPost, NewContactMessage,
};

use crate::error::Result;

/// Trait for database persistence operations
///
/// Implementations own id and timestamp assignment and enforce slug
/// uniqueness. Inputs are expected to be validated by the caller.
#[async_trait]
pub trait PersistenceClient: Send + Sync {
    /// Short backend name for health reporting
    fn backend(&self) -> &'static str;

    /// Check that the store is reachable
    async fn ping(&self) -> Result<()>;

    /// Insert a post. Fails with `DuplicateSlug` if the slug is taken.
    async fn create_post(&self, post: NewBlogPost) -> Result<BlogPost>;

    /// Rewrite the content fields of the post identified by `slug`
    async fn update_post(&self, slug: &str, update: BlogPostUpdate) -> Result<BlogPost>;

    /// Get a post by slug
    async fn get_post(&self, slug: &str) -> Result<Option<BlogPost>>;

    /// List posts
    async fn list_posts(&self, options: &ListPostsOptions) -> Result<Vec<BlogPost>>;

    /// Store a contact message (always unread)
    async fn create_message(&self, message: NewContactMessage) -> Result<ContactMessage>;

    /// List contact messages, newest first
    async fn list_messages(&self, options: &ListMessagesOptions) -> Result<Vec<ContactMessage>>;

    /// Set the read flag of a message
    async fn set_message_read(&self, id: i64, read: bool) -> Result<ContactMessage>;
}
