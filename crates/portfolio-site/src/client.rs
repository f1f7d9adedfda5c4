use portfolio_types::{
    BlogPost, ContactMessage, FieldError, ListPostsOptions, NewContactMessage, ReadFlagUpdate,
    Validated, ValidationFailure,
};
use reqwest::header::{HeaderMap, HeaderValue, ACCEPT};
use reqwest::StatusCode;
use serde::de::DeserializeOwned;
use serde::Deserialize;

use crate::contact_form::ContactForm;
use crate::error::{Result, SiteError};

/// Error body produced by the API
#[derive(Debug, Default, Deserialize)]
struct ErrorBody {
    #[serde(default)]
    error: String,
    #[serde(default)]
    fields: Vec<FieldError>,
}

/// HTTP client for the portfolio API
///
/// No retries are attempted: a `Transient` error is handed back so the user
/// can press submit again.
pub struct SiteClient {
    http_client: reqwest::Client,
    base_url: String,
}

impl SiteClient {
    /// Create a client for the API served at `base_url`
    pub fn new(base_url: impl Into<String>) -> Result<Self> {
        let mut headers = HeaderMap::new();
        headers.insert(ACCEPT, HeaderValue::from_static("application/json"));

        let http_client = reqwest::Client::builder()
            .default_headers(headers)
            .build()?;

        Ok(Self {
            http_client,
            base_url: base_url.into().trim_end_matches('/').to_string(),
        })
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    /// Fetch blog posts. An empty result is returned as-is; substituting
    /// sample posts is up to [`crate::BlogPreview`].
    pub async fn list_blog_posts(&self, options: &ListPostsOptions) -> Result<Vec<BlogPost>> {
        let response = self
            .http_client
            .get(self.url("/api/blog-posts"))
            .query(options)
            .send()
            .await?;
        Self::handle(response).await
    }

    /// Send the contact form.
    ///
    /// The consent gate and field validation run before any request is made.
    /// The form is cleared only after the server accepted the message, so a
    /// failed attempt never loses what the user typed.
    pub async fn submit_contact(&self, form: &mut ContactForm) -> Result<ContactMessage> {
        let payload = form.submission()?;

        let message = self.post_contact(&payload).await.inspect_err(|e| {
            tracing::warn!(retryable = e.is_retryable(), "Contact submission failed: {}", e);
        })?;

        form.reset();
        tracing::info!(id = message.id, "Contact message sent");
        Ok(message)
    }

    /// Send a contact message without a form (no consent gate)
    pub async fn create_contact_message(&self, message: NewContactMessage) -> Result<ContactMessage> {
        let payload = message.validated()?;
        self.post_contact(&payload).await
    }

    async fn post_contact(&self, payload: &NewContactMessage) -> Result<ContactMessage> {
        let response = self
            .http_client
            .post(self.url("/api/contact"))
            .json(payload)
            .send()
            .await?;
        Self::handle(response).await
    }

    /// Admin inbox listing, newest first
    pub async fn list_contact_messages(&self, unread_only: bool) -> Result<Vec<ContactMessage>> {
        let mut request = self.http_client.get(self.url("/api/contact-messages"));
        if unread_only {
            request = request.query(&[("unread", "true")]);
        }
        let response = request.send().await?;
        Self::handle(response).await
    }

    /// Mark a contact message read or unread
    pub async fn set_message_read(&self, id: i64, read: bool) -> Result<ContactMessage> {
        let response = self
            .http_client
            .patch(self.url(&format!("/api/contact-messages/{}/read", id)))
            .json(&ReadFlagUpdate { read })
            .send()
            .await?;
        Self::handle(response).await
    }

    async fn handle<T: DeserializeOwned>(response: reqwest::Response) -> Result<T> {
        let status = response.status();
        if status.is_success() {
            return Ok(response.json().await?);
        }

        let body: ErrorBody = response.json().await.unwrap_or_default();
        let message = if body.error.is_empty() {
            status.canonical_reason().unwrap_or("request failed").to_string()
        } else {
            body.error
        };

        Err(match status {
            StatusCode::BAD_REQUEST if !body.fields.is_empty() => {
                SiteError::Validation(ValidationFailure::new(body.fields))
            }
            StatusCode::CONFLICT => SiteError::Conflict(message),
            StatusCode::NOT_FOUND => SiteError::NotFound(message),
            StatusCode::REQUEST_TIMEOUT | StatusCode::TOO_MANY_REQUESTS => {
                SiteError::Transient(message)
            }
            s if s.is_server_error() => SiteError::Transient(message),
            s => SiteError::Unexpected {
                status: s.as_u16(),
                message,
            },
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_base_url_trailing_slash_is_dropped() {
        let client = SiteClient::new("http://example.com/").unwrap();
        assert_eq!(client.url("/api/contact"), "http://example.com/api/contact");
    }
}
