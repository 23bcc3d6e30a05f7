use once_cell::sync::Lazy;
use regex::Regex;

use crate::leads::models::{ContactField, ContactInquiry, DemoField, DemoRequest, FieldErrors};

static EMAIL_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").expect("email pattern compiles")
});

// Absolute URL with a scheme and a host, the shape a `type="url"` input accepts.
static URL_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^[A-Za-z][A-Za-z0-9+.\-]*://[^\s/?#]+[^\s]*$").expect("url pattern compiles")
});

const PHONE_DIGITS: usize = 10;
const MIN_QUERY_CHARS: usize = 10;

pub fn phone_digits(raw: &str) -> String {
    raw.chars().filter(|c| c.is_ascii_digit()).collect()
}

pub fn is_valid_email(raw: &str) -> bool {
    EMAIL_RE.is_match(raw)
}

pub fn is_valid_url(raw: &str) -> bool {
    URL_RE.is_match(raw)
}

/// Strict rules for the contact form. Runs on the values exactly as typed;
/// only the emptiness checks trim.
pub fn validate_contact(inquiry: &ContactInquiry) -> FieldErrors<ContactField> {
    let mut errors = FieldErrors::new();

    if inquiry.name.trim().is_empty() {
        errors.insert(ContactField::Name, "Name is required".to_string());
    }

    if inquiry.phone_number.trim().is_empty() {
        errors.insert(ContactField::PhoneNumber, "Phone number is required".to_string());
    } else if phone_digits(&inquiry.phone_number).len() != PHONE_DIGITS {
        errors.insert(
            ContactField::PhoneNumber,
            "Please enter a valid 10-digit phone number".to_string(),
        );
    }

    if inquiry.email.trim().is_empty() {
        errors.insert(ContactField::Email, "Email is required".to_string());
    } else if !is_valid_email(&inquiry.email) {
        errors.insert(ContactField::Email, "Please enter a valid email address".to_string());
    }

    let query = inquiry.query.trim();
    if query.is_empty() {
        errors.insert(ContactField::Query, "Query is required".to_string());
    } else if query.encode_utf16().count() < MIN_QUERY_CHARS {
        errors.insert(
            ContactField::Query,
            "Query must be at least 10 characters long".to_string(),
        );
    }

    errors
}

/// Presence-only rules for the demo form, plus the URL shape of the
/// optional LinkedIn profile. The demo form stays looser than the contact form.
pub fn validate_demo(request: &DemoRequest) -> FieldErrors<DemoField> {
    let mut errors: FieldErrors<DemoField> = DemoField::ALL
        .into_iter()
        .filter(|field| field.is_required())
        .filter(|field| request.get(*field).trim().is_empty())
        .map(|field| (field, format!("{} is required", field.label())))
        .collect();

    if let Some(profile) = request.linkedin() {
        if !is_valid_url(profile) {
            errors.insert(
                DemoField::LinkedinProfile,
                "Please enter a valid URL".to_string(),
            );
        }
    }

    errors
}
