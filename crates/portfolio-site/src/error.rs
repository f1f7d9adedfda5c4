use portfolio_types::ValidationFailure;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum SiteError {
    /// The privacy checkbox was not ticked; no request was sent.
    #[error("Privacy agreement required: please accept the privacy policy to continue")]
    ConsentRequired,

    #[error(transparent)]
    Validation(#[from] ValidationFailure),

    #[error("Conflict: {0}")]
    Conflict(String),

    #[error("Not found: {0}")]
    NotFound(String),

    /// Network failure or server-side outage. Safe to resubmit.
    #[error("Failed to reach the server, please try again later: {0}")]
    Transient(String),

    #[error("Unexpected response ({status}): {message}")]
    Unexpected { status: u16, message: String },
}

impl SiteError {
    /// Whether pressing submit again could succeed without changing the input
    pub fn is_retryable(&self) -> bool {
        matches!(self, SiteError::Transient(_))
    }
}

impl From<reqwest::Error> for SiteError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_decode() {
            SiteError::Unexpected {
                status: err.status().map_or(0, |s| s.as_u16()),
                message: err.to_string(),
            }
        } else {
            SiteError::Transient(err.to_string())
        }
    }
}

pub type Result<T> = std::result::Result<T, SiteError>;
