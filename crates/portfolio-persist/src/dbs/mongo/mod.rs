#[cfg(feature = "mongodb")]
pub mod client;
#[cfg(feature = "mongodb")]
pub mod models;
#[cfg(feature = "mongodb")]
pub mod repositories;
