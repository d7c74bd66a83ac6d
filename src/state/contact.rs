//! Contact form fields, validation, and submit lifecycle.
//!
//! DESIGN
//! ======
//! `ContactForm` holds field values and inline errors. Submission is split
//! into `begin_submit` (validate and enter the sending state) and
//! `finish_submit` (apply the relay outcome), so the async relay call in the
//! component sits between two synchronous, testable transitions.

#[cfg(test)]
#[path = "contact_test.rs"]
mod contact_test;

use std::collections::BTreeMap;
use std::sync::OnceLock;

use regex_lite::Regex;

use super::notification::Notification;
use crate::net::relay::RelayError;

pub const INVALID_FORM_MESSAGE: &str = "Please fill in all required fields correctly.";
pub const SENT_MESSAGE: &str = "Message sent successfully! I will get back to you soon.";
pub const SEND_FAILED_MESSAGE: &str = "Failed to send message. Please try again later.";

pub const IDLE_LABEL: &str = "Send Message";
pub const LOADING_LABEL: &str = "Sending...";

const EMAIL_PATTERN: &str = r"^[^\s@]+@[^\s@]+\.[^\s@]+$";

/// Inline field error. The `Display` text is what the form shows.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum FieldError {
    #[error("This field is required.")]
    Required,
    #[error("Please enter a valid email address.")]
    InvalidEmail,
}

/// Reasons a submit never reaches the relay.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum SubmitError {
    #[error("form has invalid fields")]
    Invalid,
    #[error("a message is already being sent")]
    InFlight,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldKind {
    Text,
    Email,
}

/// Static description of one form control.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FieldSpec {
    pub name: &'static str,
    pub label: &'static str,
    pub kind: FieldKind,
    pub required: bool,
    pub multiline: bool,
}

pub const CONTACT_FIELDS: [FieldSpec; 4] = [
    FieldSpec { name: "name", label: "Name", kind: FieldKind::Text, required: true, multiline: false },
    FieldSpec { name: "email", label: "Email", kind: FieldKind::Email, required: true, multiline: false },
    FieldSpec { name: "subject", label: "Subject", kind: FieldKind::Text, required: false, multiline: false },
    FieldSpec { name: "message", label: "Message", kind: FieldKind::Text, required: true, multiline: true },
];

/// Simplified `local@domain.tld` check.
pub fn is_valid_email(value: &str) -> bool {
    static PATTERN: OnceLock<Option<Regex>> = OnceLock::new();
    PATTERN
        .get_or_init(|| Regex::new(EMAIL_PATTERN).ok())
        .as_ref()
        .is_some_and(|re| re.is_match(value))
}

/// Validate a single value. The required check runs first, so an empty
/// email field reports `Required` rather than `InvalidEmail`.
///
/// # Errors
///
/// Returns the `FieldError` to show inline.
pub fn validate(spec: &FieldSpec, value: &str) -> Result<(), FieldError> {
    if !spec.required {
        return Ok(());
    }
    if value.trim().is_empty() {
        return Err(FieldError::Required);
    }
    if spec.kind == FieldKind::Email && !is_valid_email(value) {
        return Err(FieldError::InvalidEmail);
    }
    Ok(())
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldState {
    pub spec: FieldSpec,
    pub value: String,
    pub error: Option<FieldError>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ContactForm {
    fields: Vec<FieldState>,
    sending: bool,
}

impl Default for ContactForm {
    fn default() -> Self {
        Self::new(&CONTACT_FIELDS)
    }
}

impl ContactForm {
    pub fn new(specs: &[FieldSpec]) -> Self {
        let fields = specs
            .iter()
            .map(|spec| FieldState { spec: *spec, value: String::new(), error: None })
            .collect();
        Self { fields, sending: false }
    }

    pub fn fields(&self) -> &[FieldState] {
        &self.fields
    }

    pub fn value(&self, name: &str) -> Option<&str> {
        self.field(name).map(|f| f.value.as_str())
    }

    pub fn error(&self, name: &str) -> Option<FieldError> {
        self.field(name).and_then(|f| f.error)
    }

    pub fn has_errors(&self) -> bool {
        self.fields.iter().any(|f| f.error.is_some())
    }

    pub fn is_sending(&self) -> bool {
        self.sending
    }

    /// Label for the submit control in the current state.
    pub fn submit_label(&self) -> &'static str {
        if self.sending { LOADING_LABEL } else { IDLE_LABEL }
    }

    /// Record an input event and revalidate that field. Unknown names are
    /// ignored.
    pub fn input(&mut self, name: &str, value: impl Into<String>) {
        let Some(field) = self.fields.iter_mut().find(|f| f.spec.name == name) else {
            return;
        };
        field.value = value.into();
        field.error = validate(&field.spec, &field.value).err();
    }

    /// Revalidate every field and return whether the form is valid.
    pub fn validate_all(&mut self) -> bool {
        let mut valid = true;
        for field in &mut self.fields {
            field.error = validate(&field.spec, &field.value).err();
            valid &= field.error.is_none();
        }
        valid
    }

    /// Validate and, when valid, enter the sending state.
    ///
    /// # Errors
    ///
    /// `SubmitError::Invalid` when any required field fails validation,
    /// `SubmitError::InFlight` while a previous submit is still pending.
    pub fn begin_submit(&mut self) -> Result<BTreeMap<String, String>, SubmitError> {
        if self.sending {
            return Err(SubmitError::InFlight);
        }
        if !self.validate_all() {
            return Err(SubmitError::Invalid);
        }
        self.sending = true;
        Ok(self
            .fields
            .iter()
            .map(|f| (f.spec.name.to_owned(), f.value.clone()))
            .collect())
    }

    /// Apply the relay outcome and return the banner to show. Success clears
    /// the form; failure keeps values and errors for a retry.
    pub fn finish_submit(&mut self, outcome: &Result<(), RelayError>) -> Notification {
        self.sending = false;
        match outcome {
            Ok(()) => {
                self.reset();
                Notification::success(SENT_MESSAGE)
            }
            Err(_) => Notification::error(SEND_FAILED_MESSAGE),
        }
    }

    /// Clear every value and error annotation.
    pub fn reset(&mut self) {
        for field in &mut self.fields {
            field.value.clear();
            field.error = None;
        }
    }

    fn field(&self, name: &str) -> Option<&FieldState> {
        self.fields.iter().find(|f| f.spec.name == name)
    }
}

/// Banner for a submit that was blocked before reaching the relay.
pub fn blocked_notification(err: SubmitError) -> Option<Notification> {
    match err {
        SubmitError::Invalid => Some(Notification::error(INVALID_FORM_MESSAGE)),
        SubmitError::InFlight => None,
    }
}
