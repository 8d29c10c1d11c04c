//! Top-level entry points: rule construction and evaluation.

use crate::condition::Condition;
use crate::expectation::Expectation;
use crate::result::{InvalidRecord, ValidationResult};
use serde_json::Value;

/// Capability shared by every rule: evaluate against a record, writing
/// findings into a shared result.
pub trait Validatable {
    /// Run the rule against `record`, recording failures in `result`.
    fn validate(&self, record: &Value, result: &mut ValidationResult);
}

impl<T: Validatable + ?Sized> Validatable for &T {
    fn validate(&self, record: &Value, result: &mut ValidationResult) {
        (*self).validate(record, result);
    }
}

/// A top-level rule: a single-field expectation or a conditional group.
///
/// Lets heterogeneous rule lists live in one `Vec`:
///
/// ```
/// use expectations::{expect, when, validate, Rule};
/// use serde_json::json;
///
/// let rules: Vec<Rule> = vec![
///     expect("name").to_be_string().into(),
///     when("admin").is(true).then(expect("token").to_be_string()).into(),
/// ];
/// let result = validate(&rules, &json!({"name": "jane", "admin": false}));
/// assert!(result.is_valid());
/// ```
#[derive(Debug)]
pub enum Rule {
    Expect(Expectation),
    When(Condition),
}

impl Validatable for Rule {
    fn validate(&self, record: &Value, result: &mut ValidationResult) {
        match self {
            Rule::Expect(expectation) => expectation.validate(record, result),
            Rule::When(condition) => condition.validate(record, result),
        }
    }
}

impl From<Expectation> for Rule {
    fn from(expectation: Expectation) -> Self {
        Rule::Expect(expectation)
    }
}

impl From<Condition> for Rule {
    fn from(condition: Condition) -> Self {
        Rule::When(condition)
    }
}

/// Start a single-field expectation for `key`.
pub fn expect(key: impl Into<String>) -> Expectation {
    Expectation::new(key)
}

/// Start a conditional group guarded by an expectation on `key`.
pub fn when(key: impl Into<String>) -> Condition {
    Condition::new(key)
}

/// Run every rule against `record` in order, into one shared result.
///
/// Later rules may overwrite a field written by earlier rules. Rules are
/// read-only during evaluation, so passing references keeps them reusable
/// across calls.
pub fn validate<I>(rules: I, record: &Value) -> ValidationResult
where
    I: IntoIterator,
    I::Item: Validatable,
{
    let mut result = ValidationResult::new();
    for rule in rules {
        rule.validate(record, &mut result);
    }
    result
}

/// Recursively check that `result` holds zero failure messages.
pub fn is_valid(result: &ValidationResult) -> bool {
    result.is_valid()
}

/// Run rules and fold the outcome into a `Result`, for call sites that
/// propagate with `?`.
pub fn check<I>(rules: I, record: &Value) -> Result<(), InvalidRecord>
where
    I: IntoIterator,
    I::Item: Validatable,
{
    validate(rules, record).into_result()
}
