//! Declarative field validation
//!
//! Submission handlers check every field against these rules and collect the
//! full set of violations, so a caller can fix all of them in one round trip.

use std::sync::OnceLock;

use regex::Regex;

use crate::utils::errors::{AppError, FieldViolation, Result};

fn email_re() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"^[^@\s]+@[^@\s]+\.[^@\s]+$").expect("email regex"))
}

fn digits_re(len: usize) -> Regex {
    Regex::new(&format!(r"^\d{{{}}}$", len)).expect("digits regex")
}

/// Accumulates field violations across a whole submission.
#[derive(Debug, Default)]
pub struct Validator {
    violations: Vec<FieldViolation>,
}

impl Validator {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, field: &str, message: impl Into<String>) -> &mut Self {
        self.violations.push(FieldViolation::new(field, message));
        self
    }

    /// Field must be present and non-blank.
    pub fn require(&mut self, field: &str, value: &str) -> &mut Self {
        if value.trim().is_empty() {
            self.push(field, format!("{field} is required"));
        }
        self
    }

    /// Field must be at least `min` characters after trimming.
    pub fn min_len(&mut self, field: &str, value: &str, min: usize) -> &mut Self {
        if value.trim().chars().count() < min {
            self.push(field, format!("{field} must be at least {min} characters"));
        }
        self
    }

    /// Field must look like an email address.
    pub fn email(&mut self, field: &str, value: &str) -> &mut Self {
        if !email_re().is_match(value.trim()) {
            self.push(field, "Invalid email format");
        }
        self
    }

    /// Field must be exactly `len` decimal digits, e.g. 10-digit contact
    /// numbers and 6-digit postal codes.
    pub fn digits(&mut self, field: &str, value: &str, len: usize) -> &mut Self {
        if !digits_re(len).is_match(value.trim()) {
            self.push(field, format!("{field} must be a {len}-digit number"));
        }
        self
    }

    /// Field must be one of an enumerated set of values.
    pub fn one_of(&mut self, field: &str, value: &str, allowed: &[&str]) -> &mut Self {
        if !allowed.contains(&value.trim()) {
            self.push(field, format!("{field} must be one of: {}", allowed.join(", ")));
        }
        self
    }

    pub fn is_empty(&self) -> bool {
        self.violations.is_empty()
    }

    /// Resolve to `Ok(())` or a `Validation` error carrying every violation.
    pub fn finish(self) -> Result<()> {
        if self.violations.is_empty() {
            Ok(())
        } else {
            Err(AppError::Validation(self.violations))
        }
    }
}
