// Validator framework
// A validator turns a value into a holistic verdict: success, or the full set of problems found.

use std::collections::HashSet;

use tracing::error;

use crate::error::HarnessError;

// Verdict of a validation. `Successful` is the shared success value; `Failed` always
// carries at least one error.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValidationResult {
    Successful,
    Failed(Failures),
}

// Errors of a failed validation: no order, no duplicates, never empty. Only `failure()`
// and `ValidationBuilder::build` make one.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Failures(HashSet<String>);

impl Failures {
    pub fn iter(&self) -> impl Iterator<Item = &String> {
        self.0.iter()
    }

    pub fn contains(&self, error: &str) -> bool {
        self.0.contains(error)
    }
}

impl IntoIterator for Failures {
    type Item = String;
    type IntoIter = std::collections::hash_set::IntoIter<String>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.into_iter()
    }
}

impl ValidationResult {
    pub fn failure(error: impl Into<String>) -> Self {
        ValidationResult::Failed(Failures(HashSet::from([error.into()])))
    }

    pub fn is_success(&self) -> bool {
        matches!(self, ValidationResult::Successful)
    }

    pub fn errors(&self) -> impl Iterator<Item = &String> {
        let errors = match self {
            ValidationResult::Successful => None,
            ValidationResult::Failed(errors) => Some(errors.iter()),
        };
        errors.into_iter().flatten()
    }
}

pub trait Validator<T: ?Sized> {
    fn validate(&self, value: &T) -> ValidationResult;
}

// Plain functions and closures are validators too
impl<T: ?Sized, F> Validator<T> for F
where
    F: Fn(&T) -> ValidationResult,
{
    fn validate(&self, value: &T) -> ValidationResult {
        self(value)
    }
}

// Wire enumerations carry an unassigned zero value and a catch-all for unknown values;
// neither counts as set
pub trait Enumerated {
    fn is_set(&self) -> bool;
}

// What "empty or missing" means for a field
pub trait Emptiness {
    fn is_blank(&self) -> bool;
}

impl Emptiness for str {
    fn is_blank(&self) -> bool {
        self.trim().is_empty()
    }
}

impl Emptiness for String {
    fn is_blank(&self) -> bool {
        self.as_str().is_blank()
    }
}

impl<T> Emptiness for Option<T> {
    fn is_blank(&self) -> bool {
        self.is_none()
    }
}

impl<T> Emptiness for [T] {
    fn is_blank(&self) -> bool {
        self.is_empty()
    }
}

impl<T> Emptiness for Vec<T> {
    fn is_blank(&self) -> bool {
        self.is_empty()
    }
}

fn empty_or_missing(field: &str) -> String {
    format!("Field {} is empty or missing", field)
}

// Accumulates assertions against one composite value. Nothing short-circuits: every
// assertion runs and every problem ends up in the result.
#[derive(Debug, Default)]
pub struct ValidationBuilder {
    errors: HashSet<String>,
}

impl ValidationBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn assert_not_empty<V: Emptiness + ?Sized>(mut self, value: &V, field: &str) -> Self {
        if value.is_blank() {
            self.errors.insert(empty_or_missing(field));
        }
        self
    }

    pub fn assert_not_empty_if<V: Emptiness + ?Sized>(
        self,
        condition: bool,
        value: &V,
        field: &str,
    ) -> Self {
        if condition {
            self.assert_not_empty(value, field)
        } else {
            self
        }
    }

    pub fn assert_set<E: Enumerated>(mut self, value: &E, field: &str) -> Self {
        if !value.is_set() {
            self.errors.insert(empty_or_missing(field));
        }
        self
    }

    pub fn assert_set_if<E: Enumerated>(self, condition: bool, value: &E, field: &str) -> Self {
        if condition {
            self.assert_set(value, field)
        } else {
            self
        }
    }

    pub fn assert_valid<T, V>(self, value: &T, validator: &V) -> Self
    where
        T: ?Sized,
        V: Validator<T> + ?Sized,
    {
        let result = validator.validate(value);
        self.merge(result)
    }

    pub fn assert_valid_if<T, V>(self, condition: bool, value: &T, validator: &V) -> Self
    where
        T: ?Sized,
        V: Validator<T> + ?Sized,
    {
        if condition {
            self.assert_valid(value, validator)
        } else {
            self
        }
    }

    // Absence is not an error here; pair with assert_not_empty when the value is mandatory
    pub fn assert_valid_if_present<T, V>(self, value: &Option<T>, validator: &V) -> Self
    where
        V: Validator<T> + ?Sized,
    {
        match value {
            Some(value) => self.assert_valid(value, validator),
            None => self,
        }
    }

    // An empty collection passes; non-emptiness is assert_not_empty's concern
    pub fn assert_elements_valid<'a, T, I, V>(mut self, elements: I, validator: &V) -> Self
    where
        T: 'a + ?Sized,
        I: IntoIterator<Item = &'a T>,
        V: Validator<T> + ?Sized,
    {
        for element in elements {
            self = self.assert_valid(element, validator);
        }
        self
    }

    // Second validator only runs on the transformed value if the first one passed
    pub fn assert_valid_chain<T1, T2, V1, V2, F>(
        self,
        value: &T1,
        first: &V1,
        transform: F,
        second: &V2,
    ) -> Self
    where
        T1: ?Sized,
        V1: Validator<T1> + ?Sized,
        V2: Validator<T2> + ?Sized,
        F: FnOnce(&T1) -> T2,
    {
        match first.validate(value) {
            ValidationResult::Successful => {
                let transformed = transform(value);
                self.assert_valid(&transformed, second)
            }
            failed => self.merge(failed),
        }
    }

    pub fn add_error(mut self, error: impl Into<String>) -> Self {
        self.errors.insert(error.into());
        self
    }

    pub fn add_errors(mut self, errors: impl IntoIterator<Item = String>) -> Self {
        self.errors.extend(errors);
        self
    }

    pub fn has_errors(&self) -> bool {
        !self.errors.is_empty()
    }

    pub fn build(self) -> ValidationResult {
        if self.errors.is_empty() {
            ValidationResult::Successful
        } else {
            ValidationResult::Failed(Failures(self.errors))
        }
    }

    fn merge(self, result: ValidationResult) -> Self {
        match result {
            ValidationResult::Successful => self,
            ValidationResult::Failed(errors) => self.add_errors(errors),
        }
    }
}

// Fails the current step, logging every problem first
pub fn validate_or_fail<T, V>(subject: &str, value: &T, validator: &V) -> Result<(), HarnessError>
where
    T: ?Sized,
    V: Validator<T> + ?Sized,
{
    match validator.validate(value) {
        ValidationResult::Successful => Ok(()),
        ValidationResult::Failed(errors) => {
            error!(subject, errors = ?errors, "Validation error(s)");
            Err(HarnessError::validation(subject, errors))
        }
    }
}

// Stops at the first failing element
pub fn validate_each_or_fail<'a, T, I, V>(
    subject: &str,
    values: I,
    validator: &V,
) -> Result<(), HarnessError>
where
    T: 'a + ?Sized,
    I: IntoIterator<Item = &'a T>,
    V: Validator<T> + ?Sized,
{
    for value in values {
        validate_or_fail(subject, value, validator)?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn non_zero(value: &i32) -> ValidationResult {
        if *value == 0 {
            ValidationResult::failure("zero")
        } else {
            ValidationResult::Successful
        }
    }

    fn errors_of(result: &ValidationResult) -> HashSet<String> {
        result.errors().cloned().collect()
    }

    #[test]
    fn test_build_without_errors_is_success() {
        let result = ValidationBuilder::new()
            .assert_not_empty("name", "name")
            .assert_not_empty(&vec![1], "items")
            .assert_valid(&5, &non_zero)
            .build();
        assert_eq!(result, ValidationResult::Successful);
        assert!(result.is_success());
        assert_eq!(result.errors().count(), 0);
    }

    #[test]
    fn test_every_problem_is_reported() {
        let result = ValidationBuilder::new()
            .assert_not_empty("   ", "name")
            .assert_not_empty(&Vec::<String>::new(), "capabilities")
            .assert_not_empty(&None::<i32>, "date")
            .assert_valid(&0, &non_zero)
            .build();

        let expected: HashSet<String> = [
            "Field name is empty or missing",
            "Field capabilities is empty or missing",
            "Field date is empty or missing",
            "zero",
        ]
        .iter()
        .map(|s| s.to_string())
        .collect();
        assert_eq!(errors_of(&result), expected);
    }

    #[test]
    fn test_duplicate_errors_collapse() {
        let result = ValidationBuilder::new()
            .assert_elements_valid(&[0, 0, 0], &non_zero)
            .build();
        assert_eq!(errors_of(&result).len(), 1);
    }

    #[test]
    fn test_elements_valid_on_empty_collection() {
        let result = ValidationBuilder::new()
            .assert_elements_valid(&Vec::<i32>::new(), &non_zero)
            .build();
        assert!(result.is_success());
    }

    #[test]
    fn test_elements_valid_reports_only_the_invalid_element() {
        let element_validator = |value: &i32| {
            if *value < 0 {
                ValidationResult::failure(format!("{} is negative", value))
            } else {
                ValidationResult::Successful
            }
        };
        let result = ValidationBuilder::new()
            .assert_elements_valid(&[3, 1, -4, 1, 5], &element_validator)
            .build();
        assert_eq!(
            errors_of(&result),
            HashSet::from(["-4 is negative".to_string()])
        );
    }

    #[test]
    fn test_conditional_assertions() {
        let result = ValidationBuilder::new()
            .assert_not_empty_if(false, "", "skipped")
            .assert_valid_if(false, &0, &non_zero)
            .assert_not_empty_if(true, "", "checked")
            .build();
        assert_eq!(
            errors_of(&result),
            HashSet::from(["Field checked is empty or missing".to_string()])
        );
    }

    #[test]
    fn test_valid_if_present() {
        let absent = ValidationBuilder::new()
            .assert_valid_if_present(&None, &non_zero)
            .build();
        assert!(absent.is_success());

        let present = ValidationBuilder::new()
            .assert_valid_if_present(&Some(0), &non_zero)
            .build();
        assert!(!present.is_success());
    }

    #[test]
    fn test_chain_stops_at_first_stage() {
        let parses = |value: &str| {
            if value.parse::<i32>().is_ok() {
                ValidationResult::Successful
            } else {
                ValidationResult::failure(format!("Is not a number: {}", value))
            }
        };
        let to_number = |value: &str| value.parse::<i32>().unwrap_or_default();

        let first_failed = ValidationBuilder::new()
            .assert_valid_chain("x", &parses, to_number, &non_zero)
            .build();
        assert_eq!(
            errors_of(&first_failed),
            HashSet::from(["Is not a number: x".to_string()])
        );

        let second_failed = ValidationBuilder::new()
            .assert_valid_chain("0", &parses, to_number, &non_zero)
            .build();
        assert_eq!(errors_of(&second_failed), HashSet::from(["zero".to_string()]));

        let passed = ValidationBuilder::new()
            .assert_valid_chain("7", &parses, to_number, &non_zero)
            .build();
        assert!(passed.is_success());
    }

    #[test]
    fn test_failure_is_never_empty() {
        match ValidationResult::failure("zero") {
            ValidationResult::Failed(errors) => {
                assert_eq!(errors.iter().count(), 1);
                assert!(errors.contains("zero"));
            }
            other => panic!("Unexpected result: {:?}", other),
        }

        // A builder with nothing to report never yields Failed
        assert_eq!(ValidationBuilder::new().build(), ValidationResult::Successful);
        match ValidationBuilder::new().add_errors(Vec::new()).build() {
            ValidationResult::Successful => {}
            other => panic!("Unexpected result: {:?}", other),
        }
    }

    #[test]
    fn test_has_errors() {
        let builder = ValidationBuilder::new();
        assert!(!builder.has_errors());
        let builder = builder.add_error("boom");
        assert!(builder.has_errors());
    }

    #[test]
    fn test_validate_or_fail_carries_all_errors() {
        let validator = |value: &i32| {
            ValidationBuilder::new()
                .assert_valid(value, &non_zero)
                .add_error("always")
                .build()
        };
        assert!(validate_or_fail("number", &1, &validator).is_err());

        match validate_or_fail("number", &0, &validator) {
            Err(HarnessError::ValidationFailed { subject, errors }) => {
                assert_eq!(subject, "number");
                assert_eq!(errors, vec!["always".to_string(), "zero".to_string()]);
            }
            other => panic!("Unexpected result: {:?}", other),
        }
    }

    #[test]
    fn test_validate_each_or_fail() {
        assert!(validate_each_or_fail("numbers", &[1, 2, 3], &non_zero).is_ok());
        assert!(validate_each_or_fail("numbers", &[1, 0, 3], &non_zero).is_err());
    }
}
