use portfolio_types::{NewContactMessage, Validated};

use crate::error::{Result, SiteError};

/// Contact form state for one page session
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ContactForm {
    pub name: String,
    pub email: String,
    pub subject: String,
    pub message: String,
    /// Privacy-policy checkbox
    pub privacy: bool,
}

impl ContactForm {
    pub fn new() -> Self {
        Self::default()
    }

    /// Update a text input by its `name` attribute. Returns false for
    /// unknown inputs.
    pub fn set_field(&mut self, field: &str, value: impl Into<String>) -> bool {
        let slot = match field {
            "name" => &mut self.name,
            "email" => &mut self.email,
            "subject" => &mut self.subject,
            "message" => &mut self.message,
            _ => return false,
        };
        *slot = value.into();
        true
    }

    pub fn set_privacy(&mut self, accepted: bool) {
        self.privacy = accepted;
    }

    /// Build the request payload: consent first, then the shared validator.
    /// The form itself is never modified.
    pub fn submission(&self) -> Result<NewContactMessage> {
        if !self.privacy {
            return Err(SiteError::ConsentRequired);
        }

        let payload = NewContactMessage::new(
            self.name.clone(),
            self.email.clone(),
            self.subject.clone(),
            self.message.clone(),
        );
        Ok(payload.validated()?)
    }

    /// Clear every input and untick the checkbox
    pub fn reset(&mut self) {
        *self = Self::default();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn filled() -> ContactForm {
        let mut form = ContactForm::new();
        form.set_field("name", "Jane Doe");
        form.set_field("email", "jane@example.com");
        form.set_field("subject", "Hello");
        form.set_field("message", "Interested in working together.");
        form
    }

    #[test]
    fn test_consent_is_checked_before_fields() {
        let form = ContactForm::new();
        assert!(matches!(form.submission(), Err(SiteError::ConsentRequired)));
    }

    #[test]
    fn test_submission_validates_fields() {
        let mut form = filled();
        form.set_privacy(true);
        form.set_field("email", "");

        match form.submission() {
            Err(SiteError::Validation(failure)) => assert!(failure.mentions("email")),
            other => panic!("expected validation error, got {other:?}"),
        }
        assert_eq!(form.name, "Jane Doe");
    }

    #[test]
    fn test_submission_excludes_privacy_flag() {
        let mut form = filled();
        form.set_privacy(true);

        let payload = form.submission().unwrap();
        let json = serde_json::to_value(&payload).unwrap();
        assert_eq!(json.as_object().unwrap().len(), 4);
        assert!(json.get("privacy").is_none());
    }

    #[test]
    fn test_unknown_field_is_ignored() {
        let mut form = ContactForm::new();
        assert!(!form.set_field("phone", "555"));
        assert_eq!(form, ContactForm::new());
    }

    #[test]
    fn test_reset_clears_everything() {
        let mut form = filled();
        form.set_privacy(true);
        form.reset();
        assert_eq!(form, ContactForm::default());
    }
}
