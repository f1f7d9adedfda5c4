pub mod blog_posts;
pub mod contact;
pub mod health;
