use serde::{Deserialize, Serialize};
use std::borrow::Cow;
use std::collections::BTreeMap;
use std::fmt;
use std::sync::LazyLock;

use regex::Regex;
use validator::{Validate, ValidationError, ValidationErrors};

// ---------------------------------------------------------------------------
// Field names
// ---------------------------------------------------------------------------

/// One of the six inputs on the contact form.
///
/// The wire names returned by [`ContactField::as_str`] are what the form
/// posts, so the receiving service dispatches on them. Do not rename.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ContactField {
    Name,
    Email,
    Phone,
    Subject,
    Message,
    #[serde(rename = "bot-field")]
    BotField,
}

/// The fields a human fills in, in display order.
pub const VISIBLE_FIELDS: &[ContactField] = &[
    ContactField::Name,
    ContactField::Email,
    ContactField::Phone,
    ContactField::Subject,
    ContactField::Message,
];

/// Wire name of the honeypot input.
pub const HONEYPOT_FIELD_NAME: &str = "bot-field";

impl ContactField {
    pub fn as_str(&self) -> &'static str {
        match self {
            ContactField::Name => "name",
            ContactField::Email => "email",
            ContactField::Phone => "phone",
            ContactField::Subject => "subject",
            ContactField::Message => "message",
            ContactField::BotField => HONEYPOT_FIELD_NAME,
        }
    }

    /// Parse a wire name. Returns `None` for anything not on the form.
    pub fn from_name(name: &str) -> Option<Self> {
        match name {
            "name" => Some(ContactField::Name),
            "email" => Some(ContactField::Email),
            "phone" => Some(ContactField::Phone),
            "subject" => Some(ContactField::Subject),
            "message" => Some(ContactField::Message),
            HONEYPOT_FIELD_NAME => Some(ContactField::BotField),
            _ => None,
        }
    }

    pub fn is_honeypot(&self) -> bool {
        matches!(self, ContactField::BotField)
    }
}

impl fmt::Display for ContactField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// ---------------------------------------------------------------------------
// Validation messages
// ---------------------------------------------------------------------------

pub const NAME_REQUIRED: &str = "Please enter your full name";
pub const EMAIL_REQUIRED: &str = "We need your email to get back to you";
pub const PHONE_INVALID: &str = "Your phone number does not appear to be valid";
pub const SUBJECT_REQUIRED: &str = "We need a subject to help us respond";
pub const MESSAGE_REQUIRED: &str = "Please enter your message here";

/// `local@domain.tld` with no whitespace and exactly one `@`.
static EMAIL_SHAPE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").expect("email pattern compiles"));

/// Digits, whitespace, hyphens and parentheses, at least seven of them.
static PHONE_SHAPE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[0-9\s\-()]{7,}$").expect("phone pattern compiles"));

pub fn is_valid_email(email: &str) -> bool {
    EMAIL_SHAPE.is_match(email)
}

pub fn is_valid_phone(phone: &str) -> bool {
    PHONE_SHAPE.is_match(phone)
}

fn rule_failure(code: &'static str, message: &'static str) -> ValidationError {
    ValidationError::new(code).with_message(Cow::Borrowed(message))
}

fn require_text(value: &str, message: &'static str) -> Result<(), ValidationError> {
    if value.trim().is_empty() {
        return Err(rule_failure("required", message));
    }
    Ok(())
}

fn validate_name(value: &str) -> Result<(), ValidationError> {
    require_text(value, NAME_REQUIRED)
}

fn validate_email(value: &str) -> Result<(), ValidationError> {
    require_text(value, EMAIL_REQUIRED)?;
    if !is_valid_email(value) {
        return Err(rule_failure("email", EMAIL_REQUIRED));
    }
    Ok(())
}

// Phone is optional; only a non-empty raw value is checked.
fn validate_phone(value: &str) -> Result<(), ValidationError> {
    if !value.is_empty() && !is_valid_phone(value) {
        return Err(rule_failure("phone", PHONE_INVALID));
    }
    Ok(())
}

fn validate_subject(value: &str) -> Result<(), ValidationError> {
    require_text(value, SUBJECT_REQUIRED)
}

fn validate_message(value: &str) -> Result<(), ValidationError> {
    require_text(value, MESSAGE_REQUIRED)
}

// ---------------------------------------------------------------------------
// Field state
// ---------------------------------------------------------------------------

/// Current values of every input on the form.
///
/// Serializes with the wire names, so the same struct doubles as the
/// url-encoded body the form posts.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, Validate)]
#[serde(default)]
pub struct FieldState {
    #[validate(custom(function = "validate_name"))]
    pub name: String,
    #[validate(custom(function = "validate_email"))]
    pub email: String,
    #[validate(custom(function = "validate_phone"))]
    pub phone: String,
    #[validate(custom(function = "validate_subject"))]
    pub subject: String,
    #[validate(custom(function = "validate_message"))]
    pub message: String,
    /// Honeypot. Never shown to humans; not checked on the client.
    #[serde(rename = "bot-field")]
    pub bot_field: String,
}

impl FieldState {
    pub fn get(&self, field: ContactField) -> &str {
        match field {
            ContactField::Name => &self.name,
            ContactField::Email => &self.email,
            ContactField::Phone => &self.phone,
            ContactField::Subject => &self.subject,
            ContactField::Message => &self.message,
            ContactField::BotField => &self.bot_field,
        }
    }

    /// Copy of `self` with one field replaced.
    pub fn with_field(&self, field: ContactField, value: impl Into<String>) -> Self {
        let mut next = self.clone();
        let value = value.into();
        match field {
            ContactField::Name => next.name = value,
            ContactField::Email => next.email = value,
            ContactField::Phone => next.phone = value,
            ContactField::Subject => next.subject = value,
            ContactField::Message => next.message = value,
            ContactField::BotField => next.bot_field = value,
        }
        next
    }

    /// True when an automated submitter has filled the hidden field.
    pub fn is_honeypot_tripped(&self) -> bool {
        !self.bot_field.is_empty()
    }
}

/// A single input change, detached from any UI framework's event type.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FieldChange {
    pub field: ContactField,
    pub value: String,
}

impl FieldChange {
    pub fn new(field: ContactField, value: impl Into<String>) -> Self {
        Self {
            field,
            value: value.into(),
        }
    }
}

// ---------------------------------------------------------------------------
// Error map
// ---------------------------------------------------------------------------

/// Validation messages keyed by field. A missing key means the field passed.
///
/// Only ever built from a validation run, and never holds the honeypot.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ErrorMap(BTreeMap<ContactField, String>);

impl ErrorMap {
    pub fn get(&self, field: ContactField) -> Option<&str> {
        self.0.get(&field).map(String::as_str)
    }

    pub fn contains(&self, field: ContactField) -> bool {
        self.0.contains_key(&field)
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn iter(&self) -> impl Iterator<Item = (ContactField, &str)> {
        self.0.iter().map(|(field, msg)| (*field, msg.as_str()))
    }
}

impl From<ValidationErrors> for ErrorMap {
    fn from(errors: ValidationErrors) -> Self {
        let mut map = BTreeMap::new();
        for (field, errs) in errors.field_errors() {
            let Some(field) = ContactField::from_name(&field).filter(|f| !f.is_honeypot()) else {
                continue;
            };
            if let Some(first) = errs.first() {
                let msg = first
                    .message
                    .as_ref()
                    .map(|m| m.to_string())
                    .unwrap_or_else(|| format!("Invalid value for {}", field));
                map.insert(field, msg);
            }
        }
        ErrorMap(map)
    }
}

/// Result of one validation pass over a [`FieldState`].
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ValidationReport {
    pub errors: ErrorMap,
    pub success: bool,
}

/// Run every field rule against `state`. Failures accumulate; nothing
/// short-circuits.
pub fn validate(state: &FieldState) -> ValidationReport {
    let errors = match Validate::validate(state) {
        Ok(()) => ErrorMap::default(),
        Err(errs) => ErrorMap::from(errs),
    };
    ValidationReport {
        success: errors.is_empty(),
        errors,
    }
}
