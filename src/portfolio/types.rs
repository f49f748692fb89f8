/// Core portfolio type definitions
///
/// Defines the persisted entities (Project, ProjectImage, Message) and the
/// form payloads submitted by the browser, including their presence checks.

use crate::error::AppError;
use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

/// A portfolio entry with an optional link, free-text tags, and an image gallery
#[derive(Debug, Clone, Serialize)]
pub struct Project {
    /// Auto-assigned row id
    pub id: i64,
    pub title: String,
    pub description: String,
    /// Optional URL to the live project or its repository
    pub link: Option<String>,
    /// Optional comma-separated free-text tags
    pub tags: Option<String>,
    pub created_at: NaiveDateTime,
    /// Stored filenames of the project's gallery images, upload order
    pub images: Vec<String>,
}

/// A contact-form submission stored for later review
///
/// Write-only from the application's perspective; there is no admin route,
/// messages are read straight from the database.
#[derive(Debug, Clone, Serialize)]
pub struct Message {
    pub id: i64,
    pub name: String,
    pub email: String,
    pub subject: Option<String>,
    pub message: String,
    pub created_at: NaiveDateTime,
}

/// Text fields of the new-project form (images travel separately as blobs)
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ProjectForm {
    pub title: String,
    pub description: String,
    pub link: String,
    pub tags: String,
}

impl ProjectForm {
    /// Presence check: title and description must be non-empty after trimming
    pub fn validate(&self) -> Result<(), AppError> {
        if self.title.trim().is_empty() || self.description.trim().is_empty() {
            return Err(AppError::Validation("Title and description are required."));
        }
        Ok(())
    }

    /// Optional fields are stored as NULL when left blank
    pub fn link(&self) -> Option<&str> {
        non_empty(&self.link)
    }

    pub fn tags(&self) -> Option<&str> {
        non_empty(&self.tags)
    }
}

/// Fields of the contact form
///
/// Every field defaults to empty so a submission with fields missing outright
/// still deserializes and reaches [`ContactForm::validate`], whose flash
/// notice is the user-facing outcome for all presence failures.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct ContactForm {
    pub name: String,
    pub email: String,
    pub subject: String,
    pub message: String,
}

impl ContactForm {
    /// Presence check: name, email, and message must be non-empty after trimming
    pub fn validate(&self) -> Result<(), AppError> {
        if self.name.trim().is_empty()
            || self.email.trim().is_empty()
            || self.message.trim().is_empty()
        {
            return Err(AppError::Validation("Name, email, and message are required."));
        }
        Ok(())
    }

    pub fn subject(&self) -> Option<&str> {
        non_empty(&self.subject)
    }
}

fn non_empty(value: &str) -> Option<&str> {
    let trimmed = value.trim();
    (!trimmed.is_empty()).then_some(trimmed)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn project_form_requires_title_and_description() {
        let mut form = ProjectForm {
            title: "Portfolio Site".into(),
            description: "A demo".into(),
            ..Default::default()
        };
        assert!(form.validate().is_ok());

        form.title = "   ".into();
        assert!(form.validate().is_err());

        form.title = "Portfolio Site".into();
        form.description = String::new();
        assert!(form.validate().is_err());
    }

    #[test]
    fn contact_form_requires_name_email_and_message() {
        let form = ContactForm {
            name: "Jane".into(),
            email: "jane@x.com".into(),
            subject: String::new(),
            message: "Hello".into(),
        };
        assert!(form.validate().is_ok());
        assert_eq!(form.subject(), None);

        let missing_email = ContactForm {
            email: "  ".into(),
            ..form.clone()
        };
        assert!(missing_email.validate().is_err());
    }

    #[test]
    fn contact_form_with_absent_fields_still_deserializes() {
        // Missing fields must reach validate() and its notice, not fail
        // deserialization in the extractor.
        let form: ContactForm = serde_json::from_str("{}").unwrap();
        assert!(form.validate().is_err());

        let form: ContactForm = serde_json::from_str(r#"{"name":"Jane"}"#).unwrap();
        assert!(form.validate().is_err());

        let form: ContactForm =
            serde_json::from_str(r#"{"name":"Jane","email":"jane@x.com","message":"Hello"}"#)
                .unwrap();
        assert!(form.validate().is_ok());
        assert_eq!(form.subject(), None);
    }

    #[test]
    fn blank_optional_fields_become_none() {
        let form = ProjectForm {
            title: "t".into(),
            description: "d".into(),
            link: "  ".into(),
            tags: "web,demo".into(),
        };
        assert_eq!(form.link(), None);
        assert_eq!(form.tags(), Some("web,demo"));
    }
}
