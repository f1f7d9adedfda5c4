//! Input validation shared by every caller (HTTP handlers, the site client).
//!
//! Failures are always reported as a list of `{field, message}` pairs so the
//! caller can point at the offending inputs.

use serde::{Deserialize, Serialize};
use thiserror::Error;
use utoipa::ToSchema;
use validator::{Validate, ValidateEmail, ValidationError, ValidationErrors};

/// A single rejected field
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct FieldError {
    pub field: String,
    pub message: String,
}

impl FieldError {
    pub fn new(field: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            field: field.into(),
            message: message.into(),
        }
    }
}

/// Field-level validation failure
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("invalid input: {}", summarize(.fields))]
pub struct ValidationFailure {
    pub fields: Vec<FieldError>,
}

impl ValidationFailure {
    pub fn new(fields: Vec<FieldError>) -> Self {
        Self { fields }
    }

    /// Whether any error refers to `field` (JSON name, e.g. `readTime`)
    pub fn mentions(&self, field: &str) -> bool {
        self.fields.iter().any(|f| f.field == field)
    }
}

fn summarize(fields: &[FieldError]) -> String {
    fields
        .iter()
        .map(|f| format!("{} {}", f.field, f.message))
        .collect::<Vec<_>>()
        .join("; ")
}

impl From<ValidationErrors> for ValidationFailure {
    fn from(errors: ValidationErrors) -> Self {
        let mut fields: Vec<FieldError> = errors
            .field_errors()
            .into_iter()
            .flat_map(|(field, errs)| {
                let field = json_field_name(&field);
                errs.iter().map(move |err| FieldError {
                    field: field.clone(),
                    message: err
                        .message
                        .as_ref()
                        .map(|m| m.to_string())
                        .unwrap_or_else(|| err.code.to_string()),
                })
            })
            .collect();

        // HashMap iteration order is unstable
        fields.sort_by(|a, b| a.field.cmp(&b.field));
        Self { fields }
    }
}

/// Validate after normalizing (trimming) the payload.
pub trait Validated: Validate + Sized {
    fn normalize(self) -> Self {
        self
    }

    fn validated(self) -> Result<Self, ValidationFailure> {
        let value = self.normalize();
        value.validate()?;
        Ok(value)
    }
}

/// `read_time` -> `readTime`, matching the serde representation.
fn json_field_name(field: &str) -> String {
    let mut out = String::with_capacity(field.len());
    let mut upper = false;
    for c in field.chars() {
        if c == '_' {
            upper = true;
        } else if upper {
            out.extend(c.to_uppercase());
            upper = false;
        } else {
            out.push(c);
        }
    }
    out
}

fn rejected(code: &'static str, message: &'static str) -> ValidationError {
    ValidationError::new(code).with_message(message.into())
}

pub(crate) fn not_blank(value: &str) -> Result<(), ValidationError> {
    if value.trim().is_empty() {
        return Err(rejected("blank", "must not be empty"));
    }
    Ok(())
}

pub(crate) fn email_address(value: &str) -> Result<(), ValidationError> {
    let value = value.trim();
    if value.is_empty() {
        return Err(rejected("blank", "must not be empty"));
    }
    if !value.validate_email() {
        return Err(rejected("email", "must be a valid email address"));
    }
    Ok(())
}

/// Lowercase ASCII words joined by single hyphens.
pub(crate) fn slug(value: &str) -> Result<(), ValidationError> {
    if value.is_empty() {
        return Err(rejected("blank", "must not be empty"));
    }
    let well_formed = value.split('-').all(|part| {
        !part.is_empty()
            && part
                .chars()
                .all(|c| c.is_ascii_lowercase() || c.is_ascii_digit())
    });
    if !well_formed {
        return Err(rejected(
            "slug",
            "must contain only lowercase letters, digits and single hyphens",
        ));
    }
    Ok(())
}

pub(crate) fn tags(values: &[String]) -> Result<(), ValidationError> {
    if values.iter().any(|tag| tag.trim().is_empty()) {
        return Err(rejected("blank_tag", "must not contain empty tags"));
    }
    Ok(())
}
