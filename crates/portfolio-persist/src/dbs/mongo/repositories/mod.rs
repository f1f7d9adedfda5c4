pub mod blog_post;
pub mod contact_message;
pub mod counter;

pub use blog_post::MongoBlogPostRepository;
pub use contact_message::MongoContactMessageRepository;
pub use counter::CounterRepository;

use mongodb::error::{ErrorKind, WriteFailure};

const DUPLICATE_KEY: i32 = 11000;

/// Unique-index violation on insert or update
pub(crate) fn is_duplicate_key(err: &mongodb::error::Error) -> bool {
    matches!(
        err.kind.as_ref(),
        ErrorKind::Write(WriteFailure::WriteError(write_error)) if write_error.code == DUPLICATE_KEY
    )
}
