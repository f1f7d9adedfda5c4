//! Presentation-side logic for the portfolio site.
//!
//! Nothing in here is domain state: the contact form, the blog preview and the
//! page view state all live for one page session and are rebuilt on reload.

pub mod blog_preview;
pub mod client;
pub mod contact_form;
pub mod error;
pub mod view;

pub use blog_preview::{category_color, format_date, sample_posts, BlogPreview, PREVIEW_SIZE};
pub use client::SiteClient;
pub use contact_form::ContactForm;
pub use error::{Result, SiteError};
pub use view::{PageState, Section, SectionLayout, Theme};
