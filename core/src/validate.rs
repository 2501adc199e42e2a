//! Field validators and the ordered checks run against request input.
//!
//! Only an absent field counts as "not provided". An empty string is a
//! value like any other and fails membership.

use std::sync::LazyLock;

use chrono::{Days, NaiveDate};
use regex::Regex;

use crate::error::ValidationError;
use crate::types::{Category, Priority, Status, TodoPayload, TodoQuery};

/// Four-digit year, month 1-12 and day 1-31, each optionally zero-padded.
static DATE_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^([0-9]{4})-(0?[1-9]|1[0-2])-(0?[1-9]|[12][0-9]|3[01])$")
        .expect("date pattern is valid")
});

pub fn is_valid_priority(raw: &str) -> bool {
    Priority::parse(raw).is_some()
}

pub fn is_valid_category(raw: &str) -> bool {
    Category::parse(raw).is_some()
}

pub fn is_valid_status(raw: &str) -> bool {
    Status::parse(raw).is_some()
}

/// Pattern check only. `2024-02-31` passes.
pub fn is_valid_date(raw: &str) -> bool {
    DATE_PATTERN.is_match(raw)
}

/// Canonical `yyyy-MM-dd` form of a pattern-valid date.
///
/// Days past the end of the month roll into the next month, so
/// `2024-02-31` becomes `2024-03-02`.
pub fn normalize_date(raw: &str) -> Option<String> {
    let captures = DATE_PATTERN.captures(raw)?;
    let year: i32 = captures[1].parse().ok()?;
    let month: u32 = captures[2].parse().ok()?;
    let day: u64 = captures[3].parse().ok()?;

    let date = NaiveDate::from_ymd_opt(year, month, 1)?.checked_add_days(Days::new(day - 1))?;
    Some(date.format("%Y-%m-%d").to_string())
}

/// Input that carries enumerated fields checked before a handler runs.
pub trait Validate {
    /// Stops at the first invalid field.
    fn validate(&self) -> Result<(), ValidationError>;
}

fn check(
    value: Option<&str>,
    is_valid: fn(&str) -> bool,
    error: ValidationError,
) -> Result<(), ValidationError> {
    match value {
        Some(raw) if !is_valid(raw) => Err(error),
        _ => Ok(()),
    }
}

impl Validate for TodoPayload {
    fn validate(&self) -> Result<(), ValidationError> {
        check(self.category.as_deref(), is_valid_category, ValidationError::Category)?;
        check(self.priority.as_deref(), is_valid_priority, ValidationError::Priority)?;
        check(self.status.as_deref(), is_valid_status, ValidationError::Status)?;
        check(self.due_date.as_deref(), is_valid_date, ValidationError::DueDate)
    }
}

impl Validate for TodoQuery {
    fn validate(&self) -> Result<(), ValidationError> {
        check(self.category.as_deref(), is_valid_category, ValidationError::Category)?;
        check(self.priority.as_deref(), is_valid_priority, ValidationError::Priority)?;
        check(self.status.as_deref(), is_valid_status, ValidationError::Status)
    }
}

/// The agenda date is mandatory. Returns it in canonical form.
pub fn validate_agenda_date(date: Option<&str>) -> Result<String, ValidationError> {
    date.and_then(normalize_date).ok_or(ValidationError::DueDate)
}
