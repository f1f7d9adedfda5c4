pub mod blog_post;
pub mod contact_message;
pub mod options;
pub mod user;
pub mod validation;

pub use blog_post::{BlogPost, BlogPostUpdate, NewBlogPost, DEFAULT_READ_TIME};
pub use contact_message::{ContactMessage, NewContactMessage, ReadFlagUpdate};
pub use options::{ListMessagesOptions, ListPostsOptions, PostOrder};
pub use user::{NewUser, User};
pub use validation::{FieldError, Validated, ValidationFailure};
