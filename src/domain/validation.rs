//! Typed validation failures and the pure field checks.
//!
//! A failure names the form field and the rule it broke; the user-facing
//! message is derived from the pair, so tests can match on structure and the
//! wording lives in one place.
//!
//! ```
//! use storekeep::domain::store::StoreEdit;
//! use storekeep::domain::validation::{check_store_edit, Field, Rule};
//!
//! let report = check_store_edit(&StoreEdit::new("", "M1"));
//! assert_eq!(report.len(), 2);
//! assert!(report.contains(Field::Location, Rule::MinLength(1)));
//! assert_eq!(
//!     report.messages(),
//!     vec![
//!         "Location must be at least 1 character long.",
//!         "Manager ID must be 4 characters long.",
//!     ]
//! );
//! ```

use std::fmt;

use serde::Serialize;

use super::manager::{
    Manager, ManagerDraft, MANAGER_ID_LEN, NAME_MIN_EXCLUSIVE, SALARY_MAX, SALARY_MIN,
};
use super::store::StoreEdit;

/// Minimum location length, in characters.
pub const LOCATION_MIN_LEN: usize = 1;

/// Form field a failure is attached to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum Field {
    Location,
    ManagerId,
    Name,
    Salary,
}

impl Field {
    /// Label used in messages.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Location => "Location",
            Self::ManagerId => "Manager ID",
            Self::Name => "Name",
            Self::Salary => "Salary",
        }
    }
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Rule a field value broke.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum Rule {
    /// At least `n` characters.
    MinLength(usize),
    /// Exactly `n` characters.
    ExactLength(usize),
    /// Strictly more than `n` characters.
    LongerThan(usize),
    /// Must parse as a whole number.
    Integer,
    /// Must lie in the inclusive range.
    Range { min: i64, max: i64 },
    /// Must reference an existing record.
    Exists,
    /// Must not already be assigned to another store.
    Unassigned,
    /// Must not collide with an existing record.
    Unique,
}

/// A single validation failure.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct ValidationFailure {
    pub field: Field,
    pub rule: Rule,
}

impl ValidationFailure {
    #[must_use]
    pub const fn new(field: Field, rule: Rule) -> Self {
        Self { field, rule }
    }

    /// Human-readable message for this failure.
    #[must_use]
    pub fn message(&self) -> String {
        let field = self.field.label();
        match self.rule {
            Rule::MinLength(n) => {
                let unit = if n == 1 { "character" } else { "characters" };
                format!("{field} must be at least {n} {unit} long.")
            }
            Rule::ExactLength(n) => format!("{field} must be {n} characters long."),
            Rule::LongerThan(n) => format!("{field} must be more than {n} characters long."),
            Rule::Integer => format!("{field} must be a whole number."),
            Rule::Range { min, max } => format!("{field} must be between {min} and {max}."),
            Rule::Exists => format!("{field} does not exist."),
            Rule::Unassigned => format!("{field} is already assigned to another store."),
            Rule::Unique => format!("{field} already exists."),
        }
    }
}

impl fmt::Display for ValidationFailure {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.message())
    }
}

/// Ordered list of failures collected during one validation pass.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ValidationReport {
    failures: Vec<ValidationFailure>,
}

impl ValidationReport {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Report holding a single failure.
    #[must_use]
    pub fn single(field: Field, rule: Rule) -> Self {
        let mut report = Self::new();
        report.push(field, rule);
        report
    }

    pub fn push(&mut self, field: Field, rule: Rule) {
        self.failures.push(ValidationFailure::new(field, rule));
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.failures.is_empty()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.failures.len()
    }

    pub fn iter(&self) -> impl Iterator<Item = &ValidationFailure> {
        self.failures.iter()
    }

    /// True if a failure with this field and rule was recorded.
    #[must_use]
    pub fn contains(&self, field: Field, rule: Rule) -> bool {
        self.failures
            .iter()
            .any(|f| f.field == field && f.rule == rule)
    }

    /// True if any failure was recorded against `field`.
    #[must_use]
    pub fn has_field(&self, field: Field) -> bool {
        self.failures.iter().any(|f| f.field == field)
    }

    /// Messages in the order the failures were recorded.
    #[must_use]
    pub fn messages(&self) -> Vec<String> {
        self.failures.iter().map(ValidationFailure::message).collect()
    }
}

impl<'a> IntoIterator for &'a ValidationReport {
    type Item = &'a ValidationFailure;
    type IntoIter = std::slice::Iter<'a, ValidationFailure>;

    fn into_iter(self) -> Self::IntoIter {
        self.failures.iter()
    }
}

fn char_len(value: &str) -> usize {
    value.chars().count()
}

/// Field pass for a store edit: location length and manager ID length.
#[must_use]
pub fn check_store_edit(edit: &StoreEdit) -> ValidationReport {
    let mut report = ValidationReport::new();
    if char_len(&edit.location) < LOCATION_MIN_LEN {
        report.push(Field::Location, Rule::MinLength(LOCATION_MIN_LEN));
    }
    if edit.manager_id.len() != MANAGER_ID_LEN {
        report.push(Field::ManagerId, Rule::ExactLength(MANAGER_ID_LEN));
    }
    report
}

/// Field pass for a new manager.
///
/// Returns the parsed manager when every field is acceptable, otherwise all
/// field failures found. Uniqueness is not checked here.
pub fn parse_manager(draft: &ManagerDraft) -> Result<Manager, ValidationReport> {
    let mut report = ValidationReport::new();

    if char_len(&draft.id) != MANAGER_ID_LEN {
        report.push(Field::ManagerId, Rule::ExactLength(MANAGER_ID_LEN));
    }
    if char_len(&draft.name) <= NAME_MIN_EXCLUSIVE {
        report.push(Field::Name, Rule::LongerThan(NAME_MIN_EXCLUSIVE));
    }
    let salary = match draft.salary.trim().parse::<i64>() {
        Ok(value) if (SALARY_MIN..=SALARY_MAX).contains(&value) => Some(value),
        Ok(_) => {
            report.push(
                Field::Salary,
                Rule::Range {
                    min: SALARY_MIN,
                    max: SALARY_MAX,
                },
            );
            None
        }
        Err(_) => {
            report.push(Field::Salary, Rule::Integer);
            None
        }
    };

    match salary {
        Some(salary) if report.is_empty() => {
            Ok(Manager::new(draft.id.as_str(), draft.name.as_str(), salary))
        }
        _ => Err(report),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn store_edit_accepts_valid_fields() {
        let report = check_store_edit(&StoreEdit::new("Galway", "M001"));
        assert!(report.is_empty());
    }

    #[test]
    fn store_edit_collects_both_length_failures() {
        let report = check_store_edit(&StoreEdit::new("", "M00001"));
        assert_eq!(
            report.messages(),
            vec![
                "Location must be at least 1 character long.",
                "Manager ID must be 4 characters long.",
            ]
        );
    }

    #[test]
    fn store_edit_single_space_location_is_long_enough() {
        let report = check_store_edit(&StoreEdit::new(" ", "M001"));
        assert!(report.is_empty());
    }

    #[test]
    fn manager_parses_when_valid() {
        let manager = parse_manager(&ManagerDraft::new("M010", "Alice Byrne", "45000")).unwrap();
        assert_eq!(manager.id.as_str(), "M010");
        assert_eq!(manager.salary, 45_000);
    }

    #[test]
    fn manager_salary_bounds_are_inclusive() {
        assert!(parse_manager(&ManagerDraft::new("M010", "Alice Byrne", "30000")).is_ok());
        assert!(parse_manager(&ManagerDraft::new("M010", "Alice Byrne", "70000")).is_ok());
        let report = parse_manager(&ManagerDraft::new("M010", "Alice Byrne", "70001")).unwrap_err();
        assert!(report.contains(
            Field::Salary,
            Rule::Range {
                min: SALARY_MIN,
                max: SALARY_MAX
            }
        ));
    }

    #[test]
    fn manager_salary_is_trimmed_before_parsing() {
        let manager = parse_manager(&ManagerDraft::new("M010", "Alice Byrne", " 40000 ")).unwrap();
        assert_eq!(manager.salary, 40_000);
    }

    #[test]
    fn manager_non_numeric_salary_is_integer_failure() {
        let report = parse_manager(&ManagerDraft::new("M010", "Alice Byrne", "40k")).unwrap_err();
        assert_eq!(report.messages(), vec!["Salary must be a whole number."]);
    }

    #[test]
    fn manager_name_of_exactly_five_is_rejected() {
        let report = parse_manager(&ManagerDraft::new("M010", "Alice", "40000")).unwrap_err();
        assert_eq!(
            report.messages(),
            vec!["Name must be more than 5 characters long."]
        );
    }

    #[test]
    fn manager_accumulates_all_field_failures() {
        let report = parse_manager(&ManagerDraft::new("M1", "Al", "")).unwrap_err();
        assert_eq!(report.len(), 3);
        assert!(report.has_field(Field::ManagerId));
        assert!(report.has_field(Field::Name));
        assert!(report.contains(Field::Salary, Rule::Integer));
    }

    #[test]
    fn messages_match_rule_wording() {
        let cases = [
            (Field::ManagerId, Rule::Exists, "Manager ID does not exist."),
            (
                Field::ManagerId,
                Rule::Unassigned,
                "Manager ID is already assigned to another store.",
            ),
            (Field::ManagerId, Rule::Unique, "Manager ID already exists."),
            (
                Field::Salary,
                Rule::Range {
                    min: 30_000,
                    max: 70_000,
                },
                "Salary must be between 30000 and 70000.",
            ),
        ];
        for (field, rule, expected) in cases {
            assert_eq!(ValidationFailure::new(field, rule).message(), expected);
        }
    }
}
