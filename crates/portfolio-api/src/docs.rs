use utoipa::OpenApi;

use portfolio_types::{
    BlogPost, BlogPostUpdate, ContactMessage, FieldError, NewBlogPost, NewContactMessage,
    PostOrder, ReadFlagUpdate,
};

use crate::error::ErrorBody;
use crate::routes::{blog_posts, contact, health};

#[derive(OpenApi)]
#[openapi(
    info(title = "Portfolio API", description = "Blog posts and contact messages"),
    paths(
        health::health_check,
        blog_posts::list_posts,
        blog_posts::get_post,
        blog_posts::create_post,
        blog_posts::update_post,
        contact::submit_contact,
        contact::list_messages,
        contact::set_read,
    ),
    components(schemas(
        BlogPost,
        NewBlogPost,
        BlogPostUpdate,
        PostOrder,
        ContactMessage,
        NewContactMessage,
        ReadFlagUpdate,
        FieldError,
        ErrorBody,
        health::HealthResponse,
    )),
    tags(
        (name = "health", description = "Service status"),
        (name = "blog", description = "Blog posts"),
        (name = "contact", description = "Contact form and admin inbox")
    )
)]
pub struct ApiDoc;
