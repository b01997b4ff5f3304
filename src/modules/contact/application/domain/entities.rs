use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// A stored contact form submission. Append-only.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ContactMessage {
    #[serde(rename = "_id")]
    pub id: String,
    pub name: String,
    pub email: String,
    pub message: String,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ContactValidationError {
    #[error("{0} is required")]
    MissingField(&'static str),
}

/// A submission that passed the required-field checks and may be stored.
/// Values are kept as typed; only presence is checked.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewContactMessage {
    name: String,
    email: String,
    message: String,
}

impl NewContactMessage {
    pub fn new(
        name: Option<String>,
        email: Option<String>,
        message: Option<String>,
    ) -> Result<Self, ContactValidationError> {
        Ok(Self {
            name: required("name", name)?,
            email: required("email", email)?,
            message: required("message", message)?,
        })
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn email(&self) -> &str {
        &self.email
    }

    pub fn message(&self) -> &str {
        &self.message
    }

    pub fn into_parts(self) -> (String, String, String) {
        (self.name, self.email, self.message)
    }
}

fn required(field: &'static str, value: Option<String>) -> Result<String, ContactValidationError> {
    match value {
        Some(v) if !v.trim().is_empty() => Ok(v),
        _ => Err(ContactValidationError::MissingField(field)),
    }
}
