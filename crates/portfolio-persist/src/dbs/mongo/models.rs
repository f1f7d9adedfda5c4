use bson::serde_helpers::chrono_datetime_as_bson_datetime;
use chrono::{DateTime, Utc};
use portfolio_types::{BlogPost, ContactMessage};
use serde::{Deserialize, Serialize};

/// MongoDB document for a blog post (numeric `_id` from the counters collection)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MongoBlogPost {
    #[serde(rename = "_id")]
    pub id: i64,
    pub title: String,
    pub slug: String,
    pub excerpt: String,
    pub content: String,
    pub category: String,
    pub tags: Vec<String>,
    pub image_url: Option<String>,
    pub published: bool,
    pub read_time: i32,
    #[serde(with = "chrono_datetime_as_bson_datetime")]
    pub created_at: DateTime<Utc>,
    #[serde(with = "chrono_datetime_as_bson_datetime")]
    pub updated_at: DateTime<Utc>,
}

/// MongoDB document for a contact message
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MongoContactMessage {
    #[serde(rename = "_id")]
    pub id: i64,
    pub name: String,
    pub email: String,
    pub subject: String,
    pub message: String,
    pub read: bool,
    #[serde(with = "chrono_datetime_as_bson_datetime")]
    pub created_at: DateTime<Utc>,
}

// Conversions between database-agnostic and MongoDB-specific models

impl From<BlogPost> for MongoBlogPost {
    fn from(post: BlogPost) -> Self {
        Self {
            id: post.id,
            title: post.title,
            slug: post.slug,
            excerpt: post.excerpt,
            content: post.content,
            category: post.category,
            tags: post.tags,
            image_url: post.image_url,
            published: post.published,
            read_time: post.read_time,
            created_at: post.created_at,
            updated_at: post.updated_at,
        }
    }
}

impl From<MongoBlogPost> for BlogPost {
    fn from(post: MongoBlogPost) -> Self {
        Self {
            id: post.id,
            title: post.title,
            slug: post.slug,
            excerpt: post.excerpt,
            content: post.content,
            category: post.category,
            tags: post.tags,
            image_url: post.image_url,
            published: post.published,
            read_time: post.read_time,
            created_at: post.created_at,
            updated_at: post.updated_at,
        }
    }
}

impl From<ContactMessage> for MongoContactMessage {
    fn from(msg: ContactMessage) -> Self {
        Self {
            id: msg.id,
            name: msg.name,
            email: msg.email,
            subject: msg.subject,
            message: msg.message,
            read: msg.read,
            created_at: msg.created_at,
        }
    }
}

impl From<MongoContactMessage> for ContactMessage {
    fn from(msg: MongoContactMessage) -> Self {
        Self {
            id: msg.id,
            name: msg.name,
            email: msg.email,
            subject: msg.subject,
            message: msg.message,
            read: msg.read,
            created_at: msg.created_at,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use portfolio_types::NewBlogPost;

    #[test]
    fn test_timestamps_stored_as_bson_dates() {
        let post = BlogPost::from_new(
            1,
            NewBlogPost {
                title: "T".to_string(),
                slug: "t".to_string(),
                tags: vec!["a".to_string(), "b".to_string()],
                ..Default::default()
            },
            Utc::now(),
        );
        let doc = bson::to_document(&MongoBlogPost::from(post)).unwrap();

        assert_eq!(doc.get_i64("_id").unwrap(), 1);
        assert!(doc.get_datetime("created_at").is_ok());
        let tags: Vec<_> = doc
            .get_array("tags")
            .unwrap()
            .iter()
            .filter_map(|t| t.as_str())
            .collect();
        assert_eq!(tags, ["a", "b"]);
    }
}
