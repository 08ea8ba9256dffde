//! Form values, edit events and derived validity
//!
//! Validity is recomputed on every change. Errors stay hidden until the
//! first submit attempt, then follow each edit.

use vehrec_core::{validate_query, Field, ValidationErrors, VehicleQuery};

/// Discrete input event
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FormEvent {
    /// Field value changed
    Edit {
        /// Edited field
        field: Field,
        /// New value
        value: String,
    },
    /// Reset control pressed
    Reset,
}

impl FormEvent {
    /// Edit event
    #[inline]
    #[must_use]
    pub fn edit(field: Field, value: impl Into<String>) -> Self {
        Self::Edit {
            field,
            value: value.into(),
        }
    }
}

/// Editable form values
#[derive(Debug, Clone)]
pub struct FormState {
    values: VehicleQuery,
    validity: Result<(), ValidationErrors>,
    submitted: bool,
}

impl FormState {
    /// Empty form
    #[must_use]
    pub fn new() -> Self {
        let values = VehicleQuery::default();
        let validity = validate_query(&values).map(|_| ());
        Self {
            values,
            validity,
            submitted: false,
        }
    }

    /// Apply an input event
    ///
    /// # Errors
    /// `FormError::UnknownOption` if a dropdown is given a value outside its
    /// catalog; the form is left unchanged.
    pub fn apply(&mut self, event: FormEvent) -> Result<(), FormError> {
        match event {
            FormEvent::Edit { field, value } => self.edit(field, value),
            FormEvent::Reset => {
                self.reset();
                Ok(())
            }
        }
    }

    fn edit(&mut self, field: Field, value: String) -> Result<(), FormError> {
        if !field.kind().accepts(&value) {
            return Err(FormError::UnknownOption { field, value });
        }
        self.values.set(field, value);
        self.revalidate();
        Ok(())
    }

    /// Clear every value and hide errors
    pub fn reset(&mut self) {
        self.values = VehicleQuery::default();
        self.submitted = false;
        self.revalidate();
    }

    fn revalidate(&mut self) {
        self.validity = validate_query(&self.values).map(|_| ());
    }

    /// Record a submit attempt; errors become visible from now on
    pub fn mark_submitted(&mut self) {
        self.submitted = true;
    }

    /// Current values
    #[inline]
    #[must_use]
    pub fn values(&self) -> &VehicleQuery {
        &self.values
    }

    /// Value of one field
    #[inline]
    #[must_use]
    pub fn value(&self, field: Field) -> &str {
        self.values.get(field)
    }

    /// All constraints currently satisfied
    #[inline]
    #[must_use]
    pub fn is_valid(&self) -> bool {
        self.validity.is_ok()
    }

    /// Errors shown inline, once a submit has been attempted
    #[must_use]
    pub fn visible_errors(&self) -> Option<&ValidationErrors> {
        if self.submitted {
            self.validity.as_ref().err()
        } else {
            None
        }
    }

    /// Inline message for one field
    #[must_use]
    pub fn field_error(&self, field: Field) -> Option<&str> {
        self.visible_errors().and_then(|e| e.reason(field))
    }
}

impl Default for FormState {
    fn default() -> Self {
        Self::new()
    }
}

/// Form interaction errors
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum FormError {
    /// Inputs are disabled while a request is pending
    #[error("form is locked while a request is pending")]
    Locked,

    /// Dropdown value outside its catalog
    #[error("'{value}' is not an option for {field}")]
    UnknownOption {
        /// Dropdown field
        field: Field,
        /// Rejected value
        value: String,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    fn filled() -> FormState {
        let mut form = FormState::new();
        for (field, value) in [
            (Field::Company, "Toyota"),
            (Field::Fuel, "Hybrid"),
            (Field::Transmission, "Automatic"),
            (Field::Price, "140000"),
            (Field::Year, "2014"),
        ] {
            form.apply(FormEvent::edit(field, value)).unwrap();
        }
        form
    }

    #[test]
    fn new_form_is_invalid_but_quiet() {
        let form = FormState::new();
        assert!(!form.is_valid());
        assert!(form.visible_errors().is_none());
    }

    #[test]
    fn validity_follows_each_edit() {
        let mut form = filled();
        assert!(form.is_valid());

        form.apply(FormEvent::edit(Field::Year, "14")).unwrap();
        assert!(!form.is_valid());

        form.apply(FormEvent::edit(Field::Year, "2015")).unwrap();
        assert!(form.is_valid());
    }

    #[test]
    fn errors_visible_after_submit_attempt() {
        let mut form = FormState::new();
        form.mark_submitted();
        assert_eq!(
            form.field_error(Field::Company),
            Some("Company Name shouldn't be empty")
        );

        form.apply(FormEvent::edit(Field::Company, "Audi")).unwrap();
        assert_eq!(form.field_error(Field::Company), None);
        assert!(form.field_error(Field::Price).is_some());
    }

    #[test]
    fn dropdown_rejects_unknown_option() {
        let mut form = filled();
        let err = form
            .apply(FormEvent::edit(Field::Transmission, "CVT"))
            .unwrap_err();
        assert_eq!(
            err,
            FormError::UnknownOption {
                field: Field::Transmission,
                value: "CVT".to_string()
            }
        );
        assert_eq!(form.value(Field::Transmission), "Automatic");
    }

    #[test]
    fn text_fields_take_anything() {
        let mut form = filled();
        form.apply(FormEvent::edit(Field::Price, "abc")).unwrap();
        assert_eq!(form.value(Field::Price), "abc");
        assert!(!form.is_valid());
    }

    #[test]
    fn reset_clears_values_and_hides_errors() {
        let mut form = filled();
        form.mark_submitted();
        form.apply(FormEvent::Reset).unwrap();

        assert_eq!(form.values(), &VehicleQuery::default());
        assert!(form.visible_errors().is_none());
    }
}
