//! Capabilities the controller needs from its host environment.
//!
//! A browser host backs these with a toast library, a modal dialog and the
//! history API. `jobctl` backs them with the terminal.

use std::time::Duration;

use reqwest::Url;

use crate::error::ClipboardError;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Level {
    Success,
    Info,
    Warning,
    Error,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Notification {
    pub level: Level,
    pub title: String,
    pub detail: Option<String>,
    pub duration: Duration,
}

pub trait Notifier: Send + Sync {
    fn show(&self, notification: &Notification);

    /// Removes a notification that is still on screen.
    fn clear(&self, notification: &Notification);
}

/// A resume attached to an application.
#[derive(Debug, Clone, PartialEq)]
pub struct ResumeFile {
    pub file_name: String,
    pub content_type: String,
    pub bytes: Vec<u8>,
}

/// Apply form input. Only name and email are required.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct ApplicationSubmission {
    pub name: String,
    pub email: String,
    pub phone: Option<String>,
    pub cover_letter: Option<String>,
    pub resume: Option<ResumeFile>,
}

impl ApplicationSubmission {
    pub const MISSING_FIELDS: &'static str = "Please fill in your name and email.";

    pub fn new(name: impl Into<String>, email: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            email: email.into(),
            ..Self::default()
        }
    }

    pub fn validate(&self) -> Result<(), &'static str> {
        if self.name.trim().is_empty() || self.email.trim().is_empty() {
            return Err(Self::MISSING_FIELDS);
        }
        Ok(())
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum FormOutcome {
    Submitted(ApplicationSubmission),
    Cancelled,
}

pub trait Dialog: Send + Sync {
    /// Shows the blocking apply form. `validation` is set when the previous
    /// attempt was rejected before reaching the server.
    fn application_form(&self, job_id: &str, validation: Option<&str>) -> FormOutcome;

    /// Shows a link the user has to copy by hand.
    fn show_link(&self, title: &str, url: &str);
}

pub trait Navigator: Send + Sync {
    fn current_url(&self) -> Url;

    /// Full navigation away from the page.
    fn redirect(&self, path: &str);

    /// History entry without a reload.
    fn push_url(&self, url: &Url);
}

pub trait Clipboard: Send + Sync {
    fn write_text(&self, text: &str) -> Result<(), ClipboardError>;
}

/// The host capabilities bundled together.
pub struct Host {
    pub notifier: Box<dyn Notifier>,
    pub dialog: Box<dyn Dialog>,
    pub navigator: Box<dyn Navigator>,
    pub clipboard: Box<dyn Clipboard>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_blank_name_or_email_is_rejected() {
        assert!(ApplicationSubmission::new("Jane", "").validate().is_err());
        assert!(ApplicationSubmission::new("   ", "jane@example.com").validate().is_err());
        assert_eq!(
            ApplicationSubmission::new("", "").validate(),
            Err("Please fill in your name and email.")
        );
    }

    #[test]
    fn test_optional_fields_are_optional() {
        assert!(ApplicationSubmission::new("Jane", "jane@example.com").validate().is_ok());
    }
}
