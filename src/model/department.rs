use strum::IntoEnumIterator;
use strum_macros::{Display, EnumIter};

/// Departments offered by the picker. Validation only requires a non-empty
/// value, so anything outside this list is still accepted.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Display, EnumIter)]
pub enum Department {
    #[strum(serialize = "HR")]
    Hr,
    Engineering,
    Marketing,
    Finance,
}

impl Department {
    /// Text shown for the empty choice.
    pub const PLACEHOLDER: &'static str = "Select a department";

    pub fn choices() -> Vec<Department> {
        Department::iter().collect()
    }
}
