use serde::Serialize;
use strum_macros::{EnumIter, EnumString, IntoStaticStr};

use super::department::Department;

/// The seven inputs of the form, in display order.
///
/// The derived `Ord` follows declaration order, which is also the order in
/// which validation messages are listed.
#[derive(
    Debug,
    Copy,
    Clone,
    Eq,
    PartialEq,
    Ord,
    PartialOrd,
    Hash,
    Serialize,
    EnumIter,
    EnumString,
    IntoStaticStr,
)]
#[serde(rename_all = "camelCase")]
#[strum(serialize_all = "camelCase")]
pub enum Field {
    Name,
    EmployeeId,
    Email,
    Phone,
    Department,
    DateOfJoining,
    Role,
}

#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub enum InputKind {
    Text,
    Email,
    Select,
    Date,
}

impl Field {
    /// camelCase key used by the form inputs and the serialized record.
    pub fn key(&self) -> &'static str {
        (*self).into()
    }

    pub fn label(&self) -> &'static str {
        match self {
            Field::Name => "Name",
            Field::EmployeeId => "Employee ID",
            Field::Email => "Email",
            Field::Phone => "Phone",
            Field::Department => "Department",
            Field::DateOfJoining => "Date of Joining",
            Field::Role => "Role",
        }
    }

    pub fn kind(&self) -> InputKind {
        match self {
            Field::Email => InputKind::Email,
            Field::Department => InputKind::Select,
            Field::DateOfJoining => InputKind::Date,
            _ => InputKind::Text,
        }
    }

    /// Hint shown while the input is empty. The date picker has none.
    pub fn placeholder(&self) -> Option<&'static str> {
        match self {
            Field::Name => Some("Enter full name"),
            Field::EmployeeId => Some("E.g., EMP12345"),
            Field::Email => Some("example@email.com"),
            Field::Phone => Some("10-digit phone number"),
            Field::Department => Some(Department::PLACEHOLDER),
            Field::DateOfJoining => None,
            Field::Role => Some("E.g., Manager, Developer"),
        }
    }
}

/// In-progress employee record. Every value is the raw text of its input,
/// including the date.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct EmployeeDraft {
    pub name: String,
    pub employee_id: String,
    pub email: String,
    pub phone: String,
    pub department: String,
    pub date_of_joining: String,
    pub role: String,
}

impl EmployeeDraft {
    pub fn get(&self, field: Field) -> &str {
        match field {
            Field::Name => &self.name,
            Field::EmployeeId => &self.employee_id,
            Field::Email => &self.email,
            Field::Phone => &self.phone,
            Field::Department => &self.department,
            Field::DateOfJoining => &self.date_of_joining,
            Field::Role => &self.role,
        }
    }

    /// Replace one field, leaving the others untouched.
    pub fn set(&mut self, field: Field, value: impl Into<String>) {
        let slot = match field {
            Field::Name => &mut self.name,
            Field::EmployeeId => &mut self.employee_id,
            Field::Email => &mut self.email,
            Field::Phone => &mut self.phone,
            Field::Department => &mut self.department,
            Field::DateOfJoining => &mut self.date_of_joining,
            Field::Role => &mut self.role,
        };
        *slot = value.into();
    }

    pub fn is_empty(&self) -> bool {
        *self == EmployeeDraft::default()
    }
}
