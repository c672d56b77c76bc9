use chrono::{Local, NaiveDate};
use tracing::{debug, info, instrument, warn};

use super::validation::{ErrorMap, validate};
use crate::model::department::Department;
use crate::model::employee::{EmployeeDraft, Field};

pub const DEFAULT_SUCCESS_MESSAGE: &str = "Employee added successfully!";

#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub enum FormMode {
    Editing,
    /// A submit went through and its success message is still showing.
    Submitted,
}

/// Owns the "Add Employee" form: the draft bound to the inputs, the errors
/// from the last submit attempt and the success message.
#[derive(Debug)]
pub struct FormController {
    draft: EmployeeDraft,
    errors: ErrorMap,
    success_message: Option<String>,
    success_text: String,
}

impl Default for FormController {
    fn default() -> Self {
        Self::new(DEFAULT_SUCCESS_MESSAGE)
    }
}

impl FormController {
    pub fn new(success_text: impl Into<String>) -> Self {
        Self {
            draft: EmployeeDraft::default(),
            errors: ErrorMap::new(),
            success_message: None,
            success_text: success_text.into(),
        }
    }

    pub fn draft(&self) -> &EmployeeDraft {
        &self.draft
    }

    pub fn value(&self, field: Field) -> &str {
        self.draft().get(field)
    }

    pub fn errors(&self) -> &ErrorMap {
        &self.errors
    }

    pub fn error(&self, field: Field) -> Option<&str> {
        self.errors().get(field)
    }

    pub fn success_message(&self) -> Option<&str> {
        self.success_message.as_deref()
    }

    pub fn mode(&self) -> FormMode {
        if self.success_message.is_some() {
            FormMode::Submitted
        } else {
            FormMode::Editing
        }
    }

    pub fn departments(&self) -> Vec<Department> {
        Department::choices()
    }

    /// Write one input's value into the draft. Errors are left as they are
    /// until the next submit; a lingering success message is dropped.
    pub fn update_field(&mut self, field: Field, value: impl Into<String>) {
        let value = value.into();
        debug!(field = field.key(), len = value.chars().count(), "Field updated");
        self.draft.set(field, value);

        if self.success_message.take().is_some() {
            debug!("Editing resumed, success message cleared");
        }
    }

    /// Check the current draft without changing any state.
    pub fn validate(&self, today: NaiveDate) -> ErrorMap {
        validate(&self.draft, today)
    }

    /// Validate and, if everything passes, accept the draft.
    ///
    /// On success the accepted record is returned and logged, and the form is
    /// emptied. On failure the errors are kept for display and returned; the
    /// draft is not touched.
    #[instrument(name = "form_submit", skip(self))]
    pub fn submit(&mut self, today: NaiveDate) -> Result<EmployeeDraft, ErrorMap> {
        let errors = self.validate(today);

        if !errors.is_empty() {
            let failing: Vec<&str> = errors.fields().iter().map(Field::key).collect();
            info!(count = errors.len(), fields = ?failing, "Validation failed");
            self.errors = errors.clone();
            return Err(errors);
        }

        let record = std::mem::take(&mut self.draft);
        match serde_json::to_string(&record) {
            Ok(json) => info!(record = %json, "Employee accepted"),
            Err(e) => warn!(error = %e, record = ?record, "Employee accepted, JSON encoding failed"),
        }

        self.errors.clear();
        self.success_message = Some(self.success_text.clone());
        Ok(record)
    }

    /// `submit` against the local calendar date.
    pub fn submit_now(&mut self) -> Result<EmployeeDraft, ErrorMap> {
        self.submit(Local::now().date_naive())
    }

    /// Empty every input. Errors and the success message stay as they are.
    pub fn reset(&mut self) {
        debug!(was_empty = self.draft.is_empty(), "Form reset");
        self.draft = EmployeeDraft::default();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::form::validation::{
        DATE_IN_FUTURE, DEPARTMENT_REQUIRED, EMAIL_INVALID, EMPLOYEE_ID_TOO_LONG, NAME_REQUIRED,
        PHONE_INVALID, ROLE_REQUIRED,
    };
    use chrono::Duration;
    use pretty_assertions::assert_eq;

    fn today() -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 6, 15).unwrap()
    }

    fn yesterday() -> String {
        (today() - Duration::days(1)).format("%Y-%m-%d").to_string()
    }

    fn filled_form() -> FormController {
        let mut form = FormController::default();
        form.update_field(Field::Name, "Jane Doe");
        form.update_field(Field::EmployeeId, "EMP1");
        form.update_field(Field::Email, "jane@x.com");
        form.update_field(Field::Phone, "1234567890");
        form.update_field(Field::Department, "HR");
        form.update_field(Field::DateOfJoining, yesterday());
        form.update_field(Field::Role, "Manager");
        form
    }

    #[test]
    fn starts_empty_and_editing() {
        let form = FormController::default();

        assert!(form.draft().is_empty());
        assert!(form.errors().is_empty());
        assert_eq!(form.success_message(), None);
        assert_eq!(form.mode(), FormMode::Editing);
    }

    #[test]
    fn update_field_does_not_validate() {
        let mut form = FormController::default();
        form.update_field(Field::Phone, "12");

        assert_eq!(form.value(Field::Phone), "12");
        assert!(form.errors().is_empty());
    }

    #[test]
    fn successful_submit_clears_form() {
        let mut form = filled_form();
        let expected = form.draft().clone();

        let accepted = form.submit(today()).unwrap();

        assert_eq!(accepted, expected);
        assert!(form.draft().is_empty());
        assert!(form.errors().is_empty());
        assert_eq!(form.success_message(), Some(DEFAULT_SUCCESS_MESSAGE));
        assert_eq!(form.mode(), FormMode::Submitted);
    }

    #[test]
    fn failed_submit_keeps_draft() {
        for (field, bad, message) in [
            (Field::Name, "  ", NAME_REQUIRED),
            (Field::EmployeeId, "EMP123456789", EMPLOYEE_ID_TOO_LONG),
            (Field::Email, "jane.x.com", EMAIL_INVALID),
            (Field::Phone, "12345abcde", PHONE_INVALID),
            (Field::Department, "", DEPARTMENT_REQUIRED),
            (Field::DateOfJoining, "2024-06-16", DATE_IN_FUTURE),
            (Field::Role, "\t", ROLE_REQUIRED),
        ] {
            let mut form = filled_form();
            form.update_field(field, bad);
            let before = form.draft().clone();

            let errors = form.submit(today()).unwrap_err();

            assert_eq!(errors.fields(), vec![field]);
            assert_eq!(form.error(field), Some(message));
            assert_eq!(form.draft(), &before);
            assert_eq!(form.success_message(), None);
            assert_eq!(form.mode(), FormMode::Editing);
        }
    }

    #[test]
    fn stored_errors_replaced_wholesale() {
        let mut form = FormController::default();
        form.submit(today()).unwrap_err();
        assert_eq!(form.errors().len(), 7);

        let mut form_two = filled_form();
        form_two.update_field(Field::Role, "");
        form_two.submit(today()).unwrap_err();
        assert_eq!(form_two.errors().fields(), vec![Field::Role]);

        form_two.update_field(Field::Role, "Developer");
        form_two.submit(today()).unwrap();
        assert!(form_two.errors().is_empty());
    }

    #[test]
    fn editing_after_success_clears_message() {
        let mut form = filled_form();
        form.submit(today()).unwrap();

        form.update_field(Field::Name, "J");

        assert_eq!(form.success_message(), None);
        assert_eq!(form.mode(), FormMode::Editing);
    }

    #[test]
    fn reset_only_clears_draft() {
        let mut form = filled_form();
        form.update_field(Field::Email, "nope");
        form.submit(today()).unwrap_err();

        form.reset();

        assert!(form.draft().is_empty());
        assert_eq!(form.error(Field::Email), Some(EMAIL_INVALID));

        let mut done = filled_form();
        done.submit(today()).unwrap();
        done.reset();
        assert_eq!(done.success_message(), Some(DEFAULT_SUCCESS_MESSAGE));
    }

    #[test]
    fn validate_is_side_effect_free() {
        let form = FormController::default();

        let errors = form.validate(today());

        assert_eq!(errors.len(), 7);
        assert!(form.errors().is_empty());
    }

    #[test]
    fn custom_success_text() {
        let mut form = FormController::new("Saved.");
        for field in [Field::Name, Field::EmployeeId, Field::Department, Field::Role] {
            form.update_field(field, "X");
        }
        form.update_field(Field::Email, "x@y.io");
        form.update_field(Field::Phone, "0000000000");
        form.update_field(Field::DateOfJoining, "2020-02-29");

        form.submit(today()).unwrap();

        assert_eq!(form.success_message(), Some("Saved."));
    }
}
