//! Boundary field validation
//!
//! Request fields are checked against length and character-class rules and
//! failures are reported as typed `(field, kind)` pairs. The HTTP boundary
//! renders the pairs into user-facing strings.

use std::sync::OnceLock;

use regex::Regex;

/// Violation categories a field check can report
///
/// Categories are checked in declaration order and the first failure wins;
/// a field contributes at most one violation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ViolationKind {
    /// Required field absent from the request
    Missing,
    /// Value length outside the allowed range
    Length,
    /// Value contains characters outside the allowed class
    CharacterClass,
}

/// A single field constraint failure
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldViolation {
    /// Name of the offending request field
    pub field: &'static str,
    /// Which constraint failed
    pub kind: ViolationKind,
}

impl FieldViolation {
    /// Create a new violation for a field
    pub fn new(field: &'static str, kind: ViolationKind) -> Self {
        Self { field, kind }
    }
}

/// Minimum allowed length for a user id
pub const USER_ID_MIN: usize = 6;
/// Maximum allowed length for a user id
pub const USER_ID_MAX: usize = 20;
/// Minimum allowed length for a password
pub const PASSWORD_MIN: usize = 8;
/// Maximum allowed length for a password
pub const PASSWORD_MAX: usize = 20;

static USER_ID_RE: OnceLock<Regex> = OnceLock::new();
static PASSWORD_RE: OnceLock<Regex> = OnceLock::new();

fn user_id_regex() -> &'static Regex {
    USER_ID_RE.get_or_init(|| {
        // Length is enforced separately; the pattern constrains characters.
        Regex::new("^[a-zA-Z0-9]+$")
            .unwrap_or_else(|error| panic!("user id regex failed to compile: {error}"))
    })
}

fn password_regex() -> &'static Regex {
    PASSWORD_RE.get_or_init(|| {
        Regex::new("^[a-zA-Z0-9!@#$%^&*()_+=-]+$")
            .unwrap_or_else(|error| panic!("password regex failed to compile: {error}"))
    })
}

/// Validate the `user_id` field of a signup body
pub fn user_id(value: Option<&str>) -> Option<FieldViolation> {
    check(
        "user_id",
        value,
        USER_ID_MIN,
        USER_ID_MAX,
        Some(user_id_regex()),
    )
}

/// Validate a required `password` field
pub fn password(value: Option<&str>) -> Option<FieldViolation> {
    check(
        "password",
        value,
        PASSWORD_MIN,
        PASSWORD_MAX,
        Some(password_regex()),
    )
}

/// Validate an optional `password` field
///
/// Absence is allowed; a present value is held to the full password rule,
/// so an empty string fails the length check.
pub fn optional_password(value: Option<&str>) -> Option<FieldViolation> {
    value.and_then(|v| password(Some(v)))
}

/// Validate the `confirm` field of a close-account body
pub fn confirm(value: Option<bool>) -> Option<FieldViolation> {
    if value.is_none() {
        Some(FieldViolation::new("confirm", ViolationKind::Missing))
    } else {
        None
    }
}

/// Validate a path-supplied user id
///
/// Path ids are length-checked only; the character-class rule applies at the
/// signup boundary, the one place a key can enter the table.
pub fn path_user_id(value: &str) -> Option<FieldViolation> {
    check("user_id", Some(value), USER_ID_MIN, USER_ID_MAX, None)
}

fn check(
    field: &'static str,
    value: Option<&str>,
    min: usize,
    max: usize,
    pattern: Option<&Regex>,
) -> Option<FieldViolation> {
    let Some(value) = value else {
        return Some(FieldViolation::new(field, ViolationKind::Missing));
    };

    let length = value.chars().count();
    if length < min || length > max {
        return Some(FieldViolation::new(field, ViolationKind::Length));
    }

    if let Some(re) = pattern {
        if !re.is_match(value) {
            return Some(FieldViolation::new(field, ViolationKind::CharacterClass));
        }
    }

    None
}
