use async_trait::async_trait;
use mongodb::{bson::doc, Client};
use portfolio_types::{
    BlogPost, BlogPostUpdate, ContactMessage, ListMessagesOptions, ListPostsOptions,
    NewBlogPost, NewContactMessage,
};

use crate::dbs::mongo::repositories::{
    CounterRepository, MongoBlogPostRepository, MongoContactMessageRepository,
};
use crate::error::{PersistError, Result};
use crate::trait_client::PersistenceClient;

const BLOG_POST_COUNTER: &str = "blog_posts";
const CONTACT_MESSAGE_COUNTER: &str = "contact_messages";

pub struct MongoPersistenceClient {
    client: Client,
    database: String,
    post_repo: MongoBlogPostRepository,
    message_repo: MongoContactMessageRepository,
    counters: CounterRepository,
}

impl MongoPersistenceClient {
    /// Connect to MongoDB, create repositories and ensure indexes exist
    pub async fn connect(mongodb_uri: &str, database: &str) -> Result<Self> {
        let client = Client::with_uri_str(mongodb_uri)
            .await
            .map_err(|e| PersistError::Connection(e.to_string()))?;

        let post_repo = MongoBlogPostRepository::new(&client, database);
        let message_repo = MongoContactMessageRepository::new(&client, database);
        let counters = CounterRepository::new(&client, database);

        post_repo.ensure_indexes().await?;
        tracing::debug!(database, "MongoDB indexes ensured");

        Ok(Self {
            client,
            database: database.to_string(),
            post_repo,
            message_repo,
            counters,
        })
    }

    /// MongoDB stores dates with millisecond precision
    fn now() -> chrono::DateTime<chrono::Utc> {
        mongodb::bson::DateTime::now().to_chrono()
    }
}

#[async_trait]
impl PersistenceClient for MongoPersistenceClient {
    fn backend(&self) -> &'static str {
        "mongodb"
    }

    async fn ping(&self) -> Result<()> {
        self.client
            .database(&self.database)
            .run_command(doc! { "ping": 1 })
            .await?;
        Ok(())
    }

    async fn create_post(&self, post: NewBlogPost) -> Result<BlogPost> {
        // A duplicate slug burns one id; ids stay unique, not gapless.
        let id = self.counters.next_id(BLOG_POST_COUNTER).await?;
        let stored = BlogPost::from_new(id, post, Self::now());
        let inserted = self.post_repo.insert_post(stored.into()).await?;
        Ok(inserted.into())
    }

    async fn update_post(&self, slug: &str, update: BlogPostUpdate) -> Result<BlogPost> {
        self.post_repo
            .update_post(slug, update)
            .await?
            .map(Into::into)
            .ok_or_else(|| PersistError::PostNotFound(slug.to_string()))
    }

    async fn get_post(&self, slug: &str) -> Result<Option<BlogPost>> {
        let post = self.post_repo.get_post(slug).await?;
        Ok(post.map(Into::into))
    }

    async fn list_posts(&self, options: &ListPostsOptions) -> Result<Vec<BlogPost>> {
        let posts = self.post_repo.list_posts(options).await?;
        Ok(posts.into_iter().map(Into::into).collect())
    }

    async fn create_message(&self, message: NewContactMessage) -> Result<ContactMessage> {
        let id = self.counters.next_id(CONTACT_MESSAGE_COUNTER).await?;
        let stored = ContactMessage::from_new(id, message, Self::now());
        let inserted = self.message_repo.insert_message(stored.into()).await?;
        Ok(inserted.into())
    }

    async fn list_messages(&self, options: &ListMessagesOptions) -> Result<Vec<ContactMessage>> {
        let messages = self.message_repo.list_messages(options).await?;
        Ok(messages.into_iter().map(Into::into).collect())
    }

    async fn set_message_read(&self, id: i64, read: bool) -> Result<ContactMessage> {
        self.message_repo
            .set_read(id, read)
            .await?
            .map(Into::into)
            .ok_or(PersistError::MessageNotFound(id))
    }
}
