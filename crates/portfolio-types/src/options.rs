use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Sort order for blog post listings
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "lowercase")]
pub enum PostOrder {
    /// `created_at` descending, ties broken by id descending
    #[default]
    Newest,
    /// Insertion order
    Oldest,
}

/// Explicit listing parameters. The defaults return every post, newest first.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ListPostsOptions {
    #[serde(default)]
    pub order: PostOrder,
    /// `None` returns drafts and published posts alike
    #[serde(default)]
    pub published: Option<bool>,
}

impl ListPostsOptions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn order(mut self, order: PostOrder) -> Self {
        self.order = order;
        self
    }

    pub fn published(mut self, published: bool) -> Self {
        self.published = Some(published);
        self
    }

    pub fn matches(&self, published: bool) -> bool {
        self.published.map_or(true, |wanted| wanted == published)
    }
}

/// Admin inbox listing parameters. Messages are always newest first.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ListMessagesOptions {
    #[serde(default)]
    pub unread_only: bool,
}

impl ListMessagesOptions {
    pub fn unread_only() -> Self {
        Self { unread_only: true }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_return_everything_newest_first() {
        let opts = ListPostsOptions::default();
        assert_eq!(opts.order, PostOrder::Newest);
        assert!(opts.matches(true));
        assert!(opts.matches(false));
    }

    #[test]
    fn test_published_filter() {
        let opts = ListPostsOptions::new().published(true);
        assert!(opts.matches(true));
        assert!(!opts.matches(false));
    }

    #[test]
    fn test_order_parses_lowercase() {
        let opts: ListPostsOptions =
            serde_json::from_str(r#"{"order": "oldest", "published": false}"#).unwrap();
        assert_eq!(opts.order, PostOrder::Oldest);
        assert_eq!(opts.published, Some(false));
    }
}
