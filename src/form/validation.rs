use std::collections::BTreeMap;

use chrono::NaiveDate;
use once_cell::sync::Lazy;
use regex::Regex;
use serde::Serialize;

use crate::model::employee::{EmployeeDraft, Field};

pub const NAME_REQUIRED: &str = "Name is required.";
pub const EMPLOYEE_ID_REQUIRED: &str = "Employee ID is required.";
pub const EMPLOYEE_ID_TOO_LONG: &str = "Employee ID must be 10 characters or less.";
pub const EMAIL_INVALID: &str = "Email is invalid.";
pub const PHONE_INVALID: &str = "Phone number must be 10 digits.";
pub const DEPARTMENT_REQUIRED: &str = "Department is required.";
pub const DATE_REQUIRED: &str = "Date of Joining is required.";
pub const DATE_INVALID: &str = "Date of Joining is invalid.";
pub const DATE_IN_FUTURE: &str = "Date cannot be in the future.";
pub const ROLE_REQUIRED: &str = "Role is required.";

pub const EMPLOYEE_ID_MAX_CHARS: usize = 10;

/// Format produced by a date input.
pub const DATE_FORMAT: &str = "%Y-%m-%d";

// Unanchored: any `x@y.z` run inside the value is enough.
static EMAIL_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\S+@\S+\.\S+").expect("email pattern is valid"));

// ASCII digits only; `\d` would also admit other Unicode digits.
static PHONE_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[0-9]{10}$").expect("phone pattern is valid"));

/// Failing fields and their messages. A field with no entry is valid.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct ErrorMap(BTreeMap<Field, String>);

impl ErrorMap {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, field: Field, message: impl Into<String>) {
        self.0.insert(field, message.into());
    }

    pub fn get(&self, field: Field) -> Option<&str> {
        self.0.get(&field).map(String::as_str)
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn clear(&mut self) {
        self.0.clear();
    }

    /// Failing fields in form order.
    pub fn fields(&self) -> Vec<Field> {
        self.iter().map(|(field, _)| field).collect()
    }

    pub fn iter(&self) -> impl Iterator<Item = (Field, &str)> {
        self.0.iter().map(|(f, m)| (*f, m.as_str()))
    }
}

/// Run every field check against `draft`.
///
/// `today` stands in for the current date so the result depends on nothing
/// but the arguments. Each field reports at most one message: the first rule
/// it breaks.
pub fn validate(draft: &EmployeeDraft, today: NaiveDate) -> ErrorMap {
    let mut errors = ErrorMap::new();

    let checks: [(Field, Option<&'static str>); 7] = [
        (Field::Name, check_required(&draft.name, NAME_REQUIRED)),
        (Field::EmployeeId, check_employee_id(&draft.employee_id)),
        (Field::Email, check_email(&draft.email)),
        (Field::Phone, check_phone(&draft.phone)),
        (Field::Department, check_department(&draft.department)),
        (Field::DateOfJoining, check_date_of_joining(&draft.date_of_joining, today)),
        (Field::Role, check_required(&draft.role, ROLE_REQUIRED)),
    ];

    for (field, failure) in checks {
        if let Some(message) = failure {
            errors.insert(field, message);
        }
    }

    errors
}

fn check_required(value: &str, message: &'static str) -> Option<&'static str> {
    value.trim().is_empty().then_some(message)
}

fn check_employee_id(value: &str) -> Option<&'static str> {
    if value.trim().is_empty() {
        Some(EMPLOYEE_ID_REQUIRED)
    } else if value.chars().count() > EMPLOYEE_ID_MAX_CHARS {
        // length of the raw input, surrounding spaces included
        Some(EMPLOYEE_ID_TOO_LONG)
    } else {
        None
    }
}

fn check_email(value: &str) -> Option<&'static str> {
    (!EMAIL_RE.is_match(value)).then_some(EMAIL_INVALID)
}

fn check_phone(value: &str) -> Option<&'static str> {
    (!PHONE_RE.is_match(value)).then_some(PHONE_INVALID)
}

// Membership in `Department::choices()` is deliberately not checked.
fn check_department(value: &str) -> Option<&'static str> {
    value.is_empty().then_some(DEPARTMENT_REQUIRED)
}

fn check_date_of_joining(value: &str, today: NaiveDate) -> Option<&'static str> {
    if value.is_empty() {
        return Some(DATE_REQUIRED);
    }

    match NaiveDate::parse_from_str(value.trim(), DATE_FORMAT) {
        Ok(date) if date > today => Some(DATE_IN_FUTURE),
        Ok(_) => None,
        Err(_) => Some(DATE_INVALID),
    }
}
