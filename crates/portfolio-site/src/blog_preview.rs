use chrono::{DateTime, TimeZone, Utc};
use portfolio_types::BlogPost;

/// Number of posts shown in the home page blog section
pub const PREVIEW_SIZE: usize = 3;

/// Posts selected for the home page blog section
#[derive(Debug, Clone, PartialEq)]
pub struct BlogPreview {
    pub posts: Vec<BlogPost>,
    /// True when the API returned nothing and sample posts are shown instead
    pub is_fallback: bool,
}

impl BlogPreview {
    /// Take the first [`PREVIEW_SIZE`] posts of a listing, or the sample
    /// posts when the listing is empty.
    pub fn from_listing(mut posts: Vec<BlogPost>) -> Self {
        if posts.is_empty() {
            return Self {
                posts: sample_posts(),
                is_fallback: true,
            };
        }

        posts.truncate(PREVIEW_SIZE);
        Self {
            posts,
            is_fallback: false,
        }
    }
}

fn sample_date(year: i32, month: u32, day: u32) -> DateTime<Utc> {
    Utc.with_ymd_and_hms(year, month, day, 0, 0, 0)
        .single()
        .unwrap_or_default()
}

#[allow(clippy::too_many_arguments)]
fn sample_post(
    id: i64,
    title: &str,
    slug: &str,
    excerpt: &str,
    category: &str,
    tags: &[&str],
    image_url: &str,
    read_time: i32,
    created_at: DateTime<Utc>,
) -> BlogPost {
    BlogPost {
        id,
        title: title.to_string(),
        slug: slug.to_string(),
        excerpt: excerpt.to_string(),
        content: String::new(),
        category: category.to_string(),
        tags: tags.iter().map(|t| t.to_string()).collect(),
        image_url: Some(image_url.to_string()),
        published: true,
        read_time,
        created_at,
        updated_at: created_at,
    }
}

/// Placeholder posts shown while the blog has no content
pub fn sample_posts() -> Vec<BlogPost> {
    vec![
        sample_post(
            1,
            "Advanced React Hooks: Custom Hooks for Complex State Management",
            "advanced-react-hooks",
            "Learn how to create powerful custom hooks that simplify complex state logic and improve code reusability across your React applications.",
            "React",
            &["React", "Hooks"],
            "https://images.unsplash.com/photo-1633356122544-f134324a6cee?ixlib=rb-4.0.3&auto=format&fit=crop&w=800&h=400",
            5,
            sample_date(2023, 12, 15),
        ),
        sample_post(
            2,
            "Node.js Performance Optimization: From Basics to Advanced Techniques",
            "nodejs-performance-optimization",
            "Discover proven strategies to optimize your Node.js applications for better performance, including memory management and clustering.",
            "Node.js",
            &["Node.js", "Performance"],
            "https://images.unsplash.com/photo-1627398242454-45a1465c2479?ixlib=rb-4.0.3&auto=format&fit=crop&w=800&h=400",
            7,
            sample_date(2023, 12, 12),
        ),
        sample_post(
            3,
            "NextJS 14: New Features and Migration Best Practices",
            "nextjs-14-features",
            "Explore the latest features in NextJS 14 and learn how to migrate your existing applications with minimal disruption.",
            "NextJS",
            &["NextJS", "Migration"],
            "https://images.unsplash.com/photo-1555066931-4365d14bab8c?ixlib=rb-4.0.3&auto=format&fit=crop&w=800&h=400",
            6,
            sample_date(2023, 12, 10),
        ),
    ]
}

/// Badge colour class for a post category
pub fn category_color(category: &str) -> &'static str {
    match category {
        "React" => "bg-blue-600",
        "Node.js" => "bg-emerald-600",
        "NextJS" => "bg-purple-600",
        "JavaScript" => "bg-yellow-600",
        "TypeScript" => "bg-blue-700",
        _ => "bg-gray-600",
    }
}

/// Long-form date, e.g. "December 15, 2023"
pub fn format_date(date: &DateTime<Utc>) -> String {
    date.format("%B %-d, %Y").to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn listing(count: i64) -> Vec<BlogPost> {
        (1..=count)
            .map(|id| {
                let mut post = sample_posts().remove(0);
                post.id = id;
                post.slug = format!("post-{}", id);
                post
            })
            .collect()
    }

    #[test]
    fn test_empty_listing_falls_back_to_samples() {
        let preview = BlogPreview::from_listing(Vec::new());
        assert!(preview.is_fallback);
        assert_eq!(preview.posts.len(), 3);
        assert_eq!(preview.posts[0].slug, "advanced-react-hooks");
    }

    #[test]
    fn test_listing_is_cut_to_preview_size() {
        let preview = BlogPreview::from_listing(listing(5));
        assert!(!preview.is_fallback);
        let ids: Vec<i64> = preview.posts.iter().map(|p| p.id).collect();
        assert_eq!(ids, vec![1, 2, 3]);
    }

    #[test]
    fn test_short_listing_is_kept_whole() {
        let preview = BlogPreview::from_listing(listing(2));
        assert!(!preview.is_fallback);
        assert_eq!(preview.posts.len(), 2);
    }

    #[test]
    fn test_sample_posts_are_published() {
        for post in sample_posts() {
            assert!(post.published);
            assert!(post.read_time >= 1);
            assert_eq!(post.created_at, post.updated_at);
        }
    }

    #[test]
    fn test_category_color() {
        assert_eq!(category_color("React"), "bg-blue-600");
        assert_eq!(category_color("TypeScript"), "bg-blue-700");
        assert_eq!(category_color("Rust"), "bg-gray-600");
    }

    #[test]
    fn test_format_date() {
        assert_eq!(format_date(&sample_date(2023, 12, 15)), "December 15, 2023");
        assert_eq!(format_date(&sample_date(2024, 3, 5)), "March 5, 2024");
    }
}
