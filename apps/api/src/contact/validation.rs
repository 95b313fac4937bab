use std::collections::BTreeMap;
use std::sync::LazyLock;

use regex::Regex;

use crate::contact::models::{ContactRequest, Submission};

/// Field name → one or more human-readable error messages.
/// BTreeMap keeps the serialized error object in a stable order.
pub type FieldErrors = BTreeMap<&'static str, Vec<String>>;

/// Indian mobile number: 10 digits starting 6-9, optional 91 / +91 prefix.
static PHONE_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^(?:\+?91)?[6-9][0-9]{9}$").unwrap());

static EMAIL_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").unwrap());

const MESSAGE_MAX_CHARS: usize = 500;

/// Validates a raw form payload into a normalized `Submission`.
///
/// Whole-record pass/fail: any failing field rejects the submission, and the
/// error map names every offending field. Empty string counts as "not
/// provided" for the optional fields (email, preferredDate, message).
///
/// The same function runs on both sides of the wire — the frontend build
/// shares this schema, and the server never trusts client validation.
pub fn validate(raw: &ContactRequest) -> Result<Submission, FieldErrors> {
    let mut errors = FieldErrors::new();

    let school_name = raw.school_name.trim();
    check_required("schoolName", "School name", school_name, 2, 100, &mut errors);

    let city = raw.city.trim();
    check_required("city", "City", city, 2, 50, &mut errors);

    let contact_name = raw.contact_name.trim();
    check_required("contactName", "Contact name", contact_name, 2, 50, &mut errors);

    let phone = raw.phone.trim();
    if phone.is_empty() {
        push_error(&mut errors, "phone", "Phone number is required".to_string());
    } else if !PHONE_RE.is_match(phone) {
        push_error(
            &mut errors,
            "phone",
            "Enter a valid 10-digit Indian mobile number".to_string(),
        );
    }

    let email = raw.email.trim();
    if !email.is_empty() && !EMAIL_RE.is_match(email) {
        push_error(&mut errors, "email", "Enter a valid email address".to_string());
    }

    let message = raw.message.trim();
    if message.chars().count() > MESSAGE_MAX_CHARS {
        push_error(
            &mut errors,
            "message",
            format!("Message must be at most {MESSAGE_MAX_CHARS} characters"),
        );
    }

    if !errors.is_empty() {
        return Err(errors);
    }

    Ok(Submission {
        school_name: school_name.to_string(),
        city: city.to_string(),
        contact_name: contact_name.to_string(),
        phone: normalize_phone(phone),
        email: email.to_string(),
        preferred_date: raw.preferred_date.trim().to_string(),
        message: message.to_string(),
    })
}

fn check_required(
    field: &'static str,
    label: &str,
    value: &str,
    min: usize,
    max: usize,
    errors: &mut FieldErrors,
) {
    if value.is_empty() {
        push_error(errors, field, format!("{label} is required"));
    } else {
        let len = value.chars().count();
        if len < min || len > max {
            push_error(
                errors,
                field,
                format!("{label} must be between {min} and {max} characters"),
            );
        }
    }
}

fn push_error(errors: &mut FieldErrors, field: &'static str, message: String) {
    errors.entry(field).or_default().push(message);
}

/// Strips a 91 / +91 country-code prefix, leaving the bare 10-digit number.
/// Only called on values that already matched `PHONE_RE`.
fn normalize_phone(phone: &str) -> String {
    let digits = phone.strip_prefix('+').unwrap_or(phone);
    if digits.len() == 12 {
        digits[2..].to_string()
    } else {
        digits.to_string()
    }
}
