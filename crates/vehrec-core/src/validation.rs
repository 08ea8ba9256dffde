//! Field-level schema validation for vehicle queries
//!
//! A [`Schema`] is an ordered list of per-field rules. Validation is pure:
//! the candidate is borrowed, and on success the same record comes back
//! unchanged. On failure every invalid field is reported once, with the
//! message of its first failing constraint.

use crate::field::Field;
use crate::query::VehicleQuery;
use once_cell::sync::Lazy;
use regex::Regex;
use serde::Serialize;
use std::fmt;

static VEHICLE_QUERY_SCHEMA: Lazy<Schema> = Lazy::new(Schema::build_vehicle_query);

/// A single check applied to a field value
#[derive(Debug, Clone)]
pub enum Constraint {
    /// At least `min` characters
    MinLength {
        /// Minimum character count
        min: usize,
        /// Reported reason
        message: &'static str,
    },
    /// At most `max` characters
    MaxLength {
        /// Maximum character count
        max: usize,
        /// Reported reason
        message: &'static str,
    },
    /// Between `min` and `max` ASCII digits and nothing else
    Digits {
        /// Minimum digit count
        min: usize,
        /// Maximum digit count
        max: usize,
        /// Reported reason
        message: &'static str,
    },
    /// Whole value matches `regex`
    Pattern {
        /// Anchored pattern
        regex: Regex,
        /// Reported reason
        message: &'static str,
    },
}

impl Constraint {
    /// Length lower bound
    #[inline]
    #[must_use]
    pub fn min_length(min: usize, message: &'static str) -> Self {
        Self::MinLength { min, message }
    }

    /// Length upper bound
    #[inline]
    #[must_use]
    pub fn max_length(max: usize, message: &'static str) -> Self {
        Self::MaxLength { max, message }
    }

    /// Digit-only check; `\d` style Unicode digits are rejected
    #[inline]
    #[must_use]
    pub fn digits(min: usize, max: usize, message: &'static str) -> Self {
        Self::Digits { min, max, message }
    }

    /// Format check
    ///
    /// # Errors
    /// Returns the regex compile error for a malformed pattern.
    pub fn pattern(pattern: &str, message: &'static str) -> Result<Self, regex::Error> {
        Ok(Self::Pattern {
            regex: Regex::new(pattern)?,
            message,
        })
    }

    /// `None` when `value` passes, else the reason
    #[must_use]
    pub fn check(&self, value: &str) -> Option<&'static str> {
        match self {
            Constraint::MinLength { min, message } => {
                (value.chars().count() < *min).then_some(*message)
            }
            Constraint::MaxLength { max, message } => {
                (value.chars().count() > *max).then_some(*message)
            }
            Constraint::Digits { min, max, message } => {
                let ok = (*min..=*max).contains(&value.len())
                    && value.bytes().all(|b| b.is_ascii_digit());
                (!ok).then_some(*message)
            }
            Constraint::Pattern { regex, message } => {
                (!regex.is_match(value)).then_some(*message)
            }
        }
    }
}

/// Constraints for one field, checked in order
#[derive(Debug, Clone)]
pub struct FieldRule {
    /// Target field
    pub field: Field,
    /// Ordered checks
    pub constraints: Vec<Constraint>,
}

impl FieldRule {
    /// Create rule for `field`
    #[inline]
    #[must_use]
    pub fn new(field: Field, constraints: Vec<Constraint>) -> Self {
        Self { field, constraints }
    }

    /// First failing constraint's reason, if any
    #[must_use]
    pub fn check(&self, value: &str) -> Option<&'static str> {
        self.constraints.iter().find_map(|c| c.check(value))
    }
}

/// Ordered set of field rules
#[derive(Debug, Clone, Default)]
pub struct Schema {
    rules: Vec<FieldRule>,
}

impl Schema {
    /// Empty schema; everything passes
    #[inline]
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a rule
    #[must_use]
    pub fn with_rule(mut self, rule: FieldRule) -> Self {
        self.rules.push(rule);
        self
    }

    /// Fixed schema for the vehicle recommendation form
    #[must_use]
    pub fn vehicle_query() -> &'static Schema {
        &VEHICLE_QUERY_SCHEMA
    }

    /// Rules in check order
    #[inline]
    #[must_use]
    pub fn rules(&self) -> &[FieldRule] {
        &self.rules
    }

    /// Validate a candidate record
    ///
    /// # Returns
    /// - `Ok(query)` with a clone of the unchanged record
    /// - `Err(ValidationErrors)` listing exactly the failing fields
    ///
    /// # Errors
    /// See above; the error is never empty.
    pub fn validate(&self, query: &VehicleQuery) -> Result<VehicleQuery, ValidationErrors> {
        let errors: Vec<FieldError> = self
            .rules
            .iter()
            .filter_map(|rule| {
                rule.check(query.get(rule.field))
                    .map(|reason| FieldError::new(rule.field, reason))
            })
            .collect();

        if errors.is_empty() {
            Ok(query.clone())
        } else {
            Err(ValidationErrors(errors))
        }
    }

    fn build_vehicle_query() -> Schema {
        let price = Constraint::digits(
            1,
            8,
            "Price must be a numeric value between 1 & 8 digits.",
        );
        let year = Constraint::digits(4, 4, "Please enter a valid 4-digit year.");

        Schema::new()
            .with_rule(FieldRule::new(
                Field::Company,
                vec![
                    Constraint::min_length(1, "Company Name shouldn't be empty"),
                    Constraint::max_length(20, "Company name shouldn't be greater than 20 characters"),
                ],
            ))
            .with_rule(FieldRule::new(
                Field::Fuel,
                vec![
                    Constraint::min_length(1, "Fuel Value shouldn't be empty"),
                    Constraint::max_length(10, "Fuel value shouldn't be greater than 10 characters"),
                ],
            ))
            .with_rule(FieldRule::new(
                Field::Transmission,
                vec![
                    Constraint::min_length(1, "Transmission Value shouldn't be empty"),
                    Constraint::max_length(
                        15,
                        "Transmission value shouldn't be greater than 15 characters",
                    ),
                ],
            ))
            .with_rule(FieldRule::new(
                Field::Price,
                vec![price],
            ))
            .with_rule(FieldRule::new(
                Field::Year,
                vec![
                    Constraint::max_length(4, "Year shouldn't be longer than 4 digits"),
                    year,
                ],
            ))
    }
}

/// Validate against the fixed vehicle schema
///
/// # Errors
/// `ValidationErrors` naming every failing field.
pub fn validate_query(query: &VehicleQuery) -> Result<VehicleQuery, ValidationErrors> {
    Schema::vehicle_query().validate(query)
}

/// One invalid field and why
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FieldError {
    /// Invalid field
    pub field: Field,
    /// Human-readable reason
    pub reason: String,
}

impl FieldError {
    /// Create field error
    #[inline]
    #[must_use]
    pub fn new(field: Field, reason: impl Into<String>) -> Self {
        Self {
            field,
            reason: reason.into(),
        }
    }
}

impl fmt::Display for FieldError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.field, self.reason)
    }
}

/// Non-empty list of field errors in schema order
#[derive(Debug, Clone, PartialEq, Eq, Serialize, thiserror::Error)]
#[error("invalid fields: {}", join_fields(.0))]
pub struct ValidationErrors(Vec<FieldError>);

fn join_fields(errors: &[FieldError]) -> String {
    errors
        .iter()
        .map(|e| e.field.name())
        .collect::<Vec<_>>()
        .join(", ")
}

impl ValidationErrors {
    /// All errors
    #[inline]
    #[must_use]
    pub fn errors(&self) -> &[FieldError] {
        &self.0
    }

    /// Failing fields, in order
    pub fn fields(&self) -> impl Iterator<Item = Field> + '_ {
        self.0.iter().map(|e| e.field)
    }

    /// Reason for `field`, if it failed
    #[must_use]
    pub fn reason(&self, field: Field) -> Option<&str> {
        self.0
            .iter()
            .find(|e| e.field == field)
            .map(|e| e.reason.as_str())
    }

    /// Number of failing fields
    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Always false; kept for clippy's `len_without_is_empty`
    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}
