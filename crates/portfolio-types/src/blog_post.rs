use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

use crate::validation::{not_blank, slug, tags, Validated};

/// Read time assumed when a post does not specify one
pub const DEFAULT_READ_TIME: i32 = 5;

/// Stored blog post
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct BlogPost {
    pub id: i64,
    pub title: String,
    pub slug: String,
    pub excerpt: String,
    pub content: String,
    pub category: String,
    pub tags: Vec<String>,
    pub image_url: Option<String>,
    pub published: bool,
    /// Estimated read time in minutes
    pub read_time: i32,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl BlogPost {
    /// Build a stored post from its insert payload. Id and timestamps are
    /// always assigned by the store.
    pub fn from_new(id: i64, input: NewBlogPost, now: DateTime<Utc>) -> Self {
        Self {
            id,
            title: input.title,
            slug: input.slug,
            excerpt: input.excerpt,
            content: input.content,
            category: input.category,
            tags: input.tags,
            image_url: input.image_url,
            published: input.published,
            read_time: input.read_time,
            created_at: now,
            updated_at: now,
        }
    }

    /// Rewrite content fields. The slug never changes.
    pub fn apply_update(&mut self, update: BlogPostUpdate, now: DateTime<Utc>) {
        self.title = update.title;
        self.excerpt = update.excerpt;
        self.content = update.content;
        self.category = update.category;
        self.tags = update.tags;
        self.image_url = update.image_url;
        self.published = update.published;
        self.read_time = update.read_time;
        self.updated_at = now;
    }
}

/// Payload for creating a post: everything except id and timestamps.
///
/// Missing keys deserialize to empty values so that validation, not the JSON
/// extractor, reports which field is absent.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase", default)]
pub struct NewBlogPost {
    #[validate(custom(function = "not_blank"))]
    pub title: String,
    #[validate(custom(function = "slug"))]
    pub slug: String,
    #[validate(custom(function = "not_blank"))]
    pub excerpt: String,
    #[validate(custom(function = "not_blank"))]
    pub content: String,
    #[validate(custom(function = "not_blank"))]
    pub category: String,
    #[validate(custom(function = "tags"))]
    pub tags: Vec<String>,
    #[validate(url(message = "must be a valid URL"))]
    pub image_url: Option<String>,
    pub published: bool,
    #[validate(range(min = 1, message = "must be at least 1 minute"))]
    pub read_time: i32,
}

impl Default for NewBlogPost {
    fn default() -> Self {
        Self {
            title: String::new(),
            slug: String::new(),
            excerpt: String::new(),
            content: String::new(),
            category: String::new(),
            tags: Vec::new(),
            image_url: None,
            published: false,
            read_time: DEFAULT_READ_TIME,
        }
    }
}

// `content` is Markdown and kept verbatim; leading indentation is significant.
impl Validated for NewBlogPost {
    fn normalize(mut self) -> Self {
        self.title = self.title.trim().to_string();
        self.slug = self.slug.trim().to_string();
        self.excerpt = self.excerpt.trim().to_string();
        self.category = self.category.trim().to_string();
        self.tags = self.tags.iter().map(|t| t.trim().to_string()).collect();
        self.image_url = normalize_optional(self.image_url);
        self
    }
}

/// Full rewrite of a post's content fields (PUT semantics).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase", default)]
pub struct BlogPostUpdate {
    #[validate(custom(function = "not_blank"))]
    pub title: String,
    #[validate(custom(function = "not_blank"))]
    pub excerpt: String,
    #[validate(custom(function = "not_blank"))]
    pub content: String,
    #[validate(custom(function = "not_blank"))]
    pub category: String,
    #[validate(custom(function = "tags"))]
    pub tags: Vec<String>,
    #[validate(url(message = "must be a valid URL"))]
    pub image_url: Option<String>,
    pub published: bool,
    #[validate(range(min = 1, message = "must be at least 1 minute"))]
    pub read_time: i32,
}

impl Default for BlogPostUpdate {
    fn default() -> Self {
        Self {
            title: String::new(),
            excerpt: String::new(),
            content: String::new(),
            category: String::new(),
            tags: Vec::new(),
            image_url: None,
            published: false,
            read_time: DEFAULT_READ_TIME,
        }
    }
}

impl Validated for BlogPostUpdate {
    fn normalize(mut self) -> Self {
        self.title = self.title.trim().to_string();
        self.excerpt = self.excerpt.trim().to_string();
        self.category = self.category.trim().to_string();
        self.tags = self.tags.iter().map(|t| t.trim().to_string()).collect();
        self.image_url = normalize_optional(self.image_url);
        self
    }
}

fn normalize_optional(value: Option<String>) -> Option<String> {
    value
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}
