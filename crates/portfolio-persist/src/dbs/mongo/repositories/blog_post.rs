use futures::TryStreamExt;
use mongodb::options::{IndexOptions, ReturnDocument};
use mongodb::{bson, bson::doc, bson::Document, Client, Collection, IndexModel};
use portfolio_types::{BlogPostUpdate, ListPostsOptions, PostOrder};

use super::is_duplicate_key;
use crate::dbs::mongo::models::MongoBlogPost;
use crate::error::{PersistError, Result};

#[derive(Clone)]
pub struct MongoBlogPostRepository {
    collection: Collection<MongoBlogPost>,
}

impl MongoBlogPostRepository {
    pub fn new(client: &Client, db_name: &str) -> Self {
        let collection = client.database(db_name).collection("blog_posts");
        Self { collection }
    }

    /// Create the unique slug index (idempotent)
    pub async fn ensure_indexes(&self) -> Result<()> {
        let slug_index = IndexModel::builder()
            .keys(doc! { "slug": 1 })
            .options(IndexOptions::builder().unique(true).build())
            .build();
        self.collection.create_index(slug_index).await?;
        Ok(())
    }

    /// Insert a post, mapping unique-index violations to `DuplicateSlug`
    pub async fn insert_post(&self, post: MongoBlogPost) -> Result<MongoBlogPost> {
        match self.collection.insert_one(&post).await {
            Ok(_) => Ok(post),
            Err(e) if is_duplicate_key(&e) => Err(PersistError::DuplicateSlug(post.slug)),
            Err(e) => Err(e.into()),
        }
    }

    /// Get post by slug
    pub async fn get_post(&self, slug: &str) -> Result<Option<MongoBlogPost>> {
        let filter = doc! { "slug": slug };
        Ok(self.collection.find_one(filter).await?)
    }

    /// List posts with explicit ordering and published filter
    pub async fn list_posts(&self, options: &ListPostsOptions) -> Result<Vec<MongoBlogPost>> {
        let mut filter = Document::new();
        if let Some(published) = options.published {
            filter.insert("published", published);
        }

        let direction = match options.order {
            PostOrder::Newest => -1,
            PostOrder::Oldest => 1,
        };

        let posts = self
            .collection
            .find(filter)
            .sort(doc! { "created_at": direction, "_id": direction })
            .await?
            .try_collect()
            .await?;
        Ok(posts)
    }

    /// Rewrite content fields and refresh `updated_at`
    pub async fn update_post(
        &self,
        slug: &str,
        update: BlogPostUpdate,
    ) -> Result<Option<MongoBlogPost>> {
        let filter = doc! { "slug": slug };
        let update = doc! {
            "$set": {
                "title": update.title,
                "excerpt": update.excerpt,
                "content": update.content,
                "category": update.category,
                "tags": update.tags,
                "image_url": update.image_url,
                "published": update.published,
                "read_time": update.read_time,
                "updated_at": bson::DateTime::now(),
            }
        };

        let updated = self
            .collection
            .find_one_and_update(filter, update)
            .return_document(ReturnDocument::After)
            .await?;
        Ok(updated)
    }
}
