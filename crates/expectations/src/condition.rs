//! Conditional rule groups.
//!
//! A [`Condition`] gates a set of consequence expectations behind a set of
//! guard expectations. Guards and consequences are folded left-to-right with
//! AND/OR logic, and four optional `(field, message)` overrides can be fired
//! on each outcome:
//!
//! ```
//! use expectations::{expect, when, validate};
//! use serde_json::json;
//!
//! let rule = when("country")
//!     .is("US")
//!     .then(expect("zip").to_be_string().if_not("ZIP code must be text."));
//!
//! assert!(validate([&rule], &json!({"country": "DE", "zip": 10115})).is_valid());
//! assert!(!validate([&rule], &json!({"country": "US", "zip": 10115})).is_valid());
//! ```

use crate::expectation::Expectation;
use crate::message::process_message;
use crate::result::{ErrorNode, ValidationResult};
use crate::validate::{Rule, Validatable};
use regex::Regex;
use serde_json::Value;
use tracing::{debug, trace};

/// Logic operator joining an entry to the one before it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogicOperator {
    And,
    Or,
}

/// Fold one entry into the running validity. An absent operator (the first
/// entry, or consequences appended through `then`) defaults to AND.
fn fold(operator: Option<LogicOperator>, accumulator: bool, valid: bool) -> bool {
    match operator {
        Some(LogicOperator::Or) => accumulator || valid,
        Some(LogicOperator::And) | None => accumulator && valid,
    }
}

/// True once no remaining operator can change the folded outcome: a false
/// accumulator followed only by ANDs, or a true one followed only by ORs.
fn fold_is_decided(accumulator: bool, remaining: &[(Option<LogicOperator>, Expectation)]) -> bool {
    if accumulator {
        remaining
            .iter()
            .all(|(operator, _)| matches!(operator, Some(LogicOperator::Or)))
    } else {
        remaining
            .iter()
            .all(|(operator, _)| !matches!(operator, Some(LogicOperator::Or)))
    }
}

/// Messages written when a group outcome fires, each an optional
/// `(field, message)` pair.
#[derive(Debug, Default)]
struct OutcomeMessages {
    conditions_met: Option<(String, String)>,
    conditions_not_met: Option<(String, String)>,
    expectations_met: Option<(String, String)>,
    expectations_not_met: Option<(String, String)>,
}

/// A conditional rule: guard expectations gating consequence expectations.
///
/// Check-building calls apply to the current expectation: the last guard
/// until [`then`](Condition::then) has appended a consequence, the last
/// consequence afterward. [`and`](Condition::and) and [`or`](Condition::or)
/// start a new entry in whichever list is current.
#[derive(Debug)]
pub struct Condition {
    conditions: Vec<(Option<LogicOperator>, Expectation)>,
    expectations: Vec<(Option<LogicOperator>, Expectation)>,
    messages: OutcomeMessages,
}

impl Condition {
    /// Start a conditional group guarded by an expectation on `key`.
    pub fn new(key: impl Into<String>) -> Self {
        Self {
            conditions: vec![(None, Expectation::new(key))],
            expectations: Vec::new(),
            messages: OutcomeMessages::default(),
        }
    }

    /// Rebuild the current expectation through `build`.
    fn map_current(mut self, build: impl FnOnce(Expectation) -> Expectation) -> Self {
        let list = if self.expectations.is_empty() {
            &mut self.conditions
        } else {
            &mut self.expectations
        };
        if let Some((operator, expectation)) = list.pop() {
            list.push((operator, build(expectation)));
        }
        self
    }

    fn push_entry(mut self, operator: LogicOperator, key: String) -> Self {
        let list = if self.expectations.is_empty() {
            &mut self.conditions
        } else {
            &mut self.expectations
        };
        list.push((Some(operator), Expectation::new(key)));
        self
    }

    /// Add another guard (or consequence, once consequences exist) combined
    /// with AND.
    pub fn and(self, key: impl Into<String>) -> Self {
        self.push_entry(LogicOperator::And, key.into())
    }

    /// Add another guard (or consequence, once consequences exist) combined
    /// with OR.
    pub fn or(self, key: impl Into<String>) -> Self {
        self.push_entry(LogicOperator::Or, key.into())
    }

    /// Append fully-built consequence expectation(s) and switch the group
    /// into consequence-building mode.
    pub fn then(mut self, expectations: impl IntoExpectations) -> Self {
        for expectation in expectations.into_expectations() {
            trace!(
                key = expectation.key(),
                checks = %expectation.check_names(),
                "consequence attached"
            );
            self.expectations.push((None, expectation));
        }
        self
    }

    // ---- outcome messages ----

    /// Write `message` at `field` when the guards hold.
    pub fn on_conditions_met(mut self, field: impl Into<String>, message: impl Into<String>) -> Self {
        self.messages.conditions_met = Some((field.into(), message.into()));
        self
    }

    /// Write `message` at `field` when the guards do not hold.
    pub fn on_conditions_not_met(
        mut self,
        field: impl Into<String>,
        message: impl Into<String>,
    ) -> Self {
        self.messages.conditions_not_met = Some((field.into(), message.into()));
        self
    }

    /// Write `message` at `field` when the consequences hold.
    pub fn on_expectations_met(
        mut self,
        field: impl Into<String>,
        message: impl Into<String>,
    ) -> Self {
        self.messages.expectations_met = Some((field.into(), message.into()));
        self
    }

    /// Write `message` at `field` when the consequences do not hold,
    /// replacing their individual failure messages.
    pub fn on_expectations_not_met(
        mut self,
        field: impl Into<String>,
        message: impl Into<String>,
    ) -> Self {
        self.messages.expectations_not_met = Some((field.into(), message.into()));
        self
    }

    // ---- checks applied to the current expectation ----

    /// The current field must be a string matching `pattern`.
    pub fn matches(self, pattern: Regex) -> Self {
        self.map_current(|e| e.to_match(pattern))
    }

    /// The current field must be a string.
    pub fn is_string(self) -> Self {
        self.map_current(Expectation::to_be_string)
    }

    /// The current field must equal `value`.
    pub fn is(self, value: impl Into<Value>) -> Self {
        let value = value.into();
        self.map_current(|e| e.to_be(value))
    }

    /// The current field must be a number greater than `value`.
    pub fn is_greater_than(self, value: f64) -> Self {
        self.map_current(move |e| e.to_be_greater_than(value))
    }

    /// The current field must be a number smaller than `value`.
    pub fn is_less_than(self, value: f64) -> Self {
        self.map_current(move |e| e.to_be_less_than(value))
    }

    /// The current field must be an array.
    pub fn is_array(self) -> Self {
        self.map_current(Expectation::to_be_array)
    }

    /// The current field must be empty.
    pub fn is_empty(self) -> Self {
        self.map_current(Expectation::to_be_empty)
    }

    /// The current field must be an object carrying every property.
    pub fn has_properties<I, S>(self, properties: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.map_current(|e| e.to_have_properties(properties))
    }

    /// The current field must be an object carrying `property`.
    pub fn has_property(self, property: impl Into<String>) -> Self {
        self.map_current(|e| e.to_have_property(property))
    }

    /// The current field must be at least `length` long.
    pub fn has_minimum_length(self, length: usize) -> Self {
        self.map_current(move |e| e.to_have_minimum_length(length))
    }

    /// The current field must be at most `length` long.
    pub fn has_maximum_length(self, length: usize) -> Self {
        self.map_current(move |e| e.to_have_maximum_length(length))
    }

    /// The current field's length must fall within `[min, max]`.
    pub fn has_length_between(self, min: usize, max: usize) -> Self {
        self.map_current(move |e| e.to_have_length_between(min, max))
    }

    /// Append a caller-supplied check to the current field.
    pub fn is_custom<F>(self, check: F) -> Self
    where
        F: Fn(&Value) -> Option<String> + Send + Sync + 'static,
    {
        self.map_current(|e| e.to_custom(check))
    }

    /// The current field must be a JSON object.
    pub fn is_object(self) -> Self {
        self.map_current(Expectation::to_be_object)
    }

    /// The current field must be a number or a numeric string.
    pub fn is_numeric(self) -> Self {
        self.map_current(Expectation::to_be_numeric)
    }

    /// The current field must be a JSON number.
    pub fn is_number(self) -> Self {
        self.map_current(Expectation::to_be_number)
    }

    /// The current field must be a number within `[min, max]`.
    pub fn is_number_between(self, min: f64, max: f64) -> Self {
        self.map_current(move |e| e.to_be_number_between(min, max))
    }

    /// The current field must be a number greater than `value`.
    pub fn is_number_greater_than(self, value: f64) -> Self {
        self.map_current(move |e| e.to_be_number_greater_than(value))
    }

    /// The current field must be a number smaller than `value`.
    pub fn is_number_less_than(self, value: f64) -> Self {
        self.map_current(move |e| e.to_be_number_less_than(value))
    }

    /// The current field must be a boolean.
    pub fn is_boolean(self) -> Self {
        self.map_current(Expectation::to_be_boolean)
    }

    /// The current field must equal one of `values`.
    pub fn is_enum<I, V>(self, values: I) -> Self
    where
        I: IntoIterator<Item = V>,
        V: Into<Value>,
    {
        self.map_current(|e| e.to_be_enum(values))
    }

    /// Allow the current field to be absent.
    pub fn not_required(self) -> Self {
        self.map_current(Expectation::not_required)
    }

    /// Broadcast the current field's subsequent checks across array elements.
    pub fn each(self) -> Self {
        self.map_current(Expectation::each)
    }

    /// Attach nested rules to the current field.
    pub fn satisfies<I, R>(self, rules: I) -> Self
    where
        I: IntoIterator<Item = R>,
        R: Into<Rule>,
    {
        self.map_current(|e| e.to_satisfy(rules))
    }

    /// Negate the current field's next appended check.
    pub fn not(self) -> Self {
        self.map_current(Expectation::not)
    }

    // ---- evaluation ----

    /// Evaluate guards and, when they hold, consequences. Returns whether
    /// the whole group was satisfied.
    ///
    /// Guard checks must be side-effect free: the fold stops as soon as the
    /// remaining operators provably cannot change the outcome, so trailing
    /// guards may never run.
    pub fn evaluate(&self, record: &Value, result: &mut ValidationResult) -> bool {
        if !self.fold_guards(record) {
            debug!("conditions not met, skipping expectations");
            write_outcome(&self.messages.conditions_not_met, result);
            return false;
        }
        write_outcome(&self.messages.conditions_met, result);

        let mut accumulated = ValidationResult::new();
        let mut expectations_met = true;
        for (operator, expectation) in &self.expectations {
            let mut scratch = ValidationResult::new();
            expectation.validate(record, &mut scratch);
            let valid = scratch.is_valid();
            trace!(
                key = expectation.key(),
                checks = %expectation.check_names(),
                valid,
                "consequence evaluated"
            );
            expectations_met = fold(*operator, expectations_met, valid);
            // every consequence contributes its findings, deciding or not
            accumulated.merge(scratch);
        }

        if expectations_met {
            write_outcome(&self.messages.expectations_met, result);
            return true;
        }
        if self.messages.expectations_not_met.is_some() {
            write_outcome(&self.messages.expectations_not_met, result);
        } else {
            result.merge(accumulated);
        }
        false
    }

    fn fold_guards(&self, record: &Value) -> bool {
        let mut met = true;
        for (index, (operator, guard)) in self.conditions.iter().enumerate() {
            let mut scratch = ValidationResult::new();
            guard.validate(record, &mut scratch);
            let valid = scratch.is_valid();
            trace!(
                key = guard.key(),
                checks = %guard.check_names(),
                valid,
                "guard evaluated"
            );
            met = fold(*operator, met, valid);
            if fold_is_decided(met, &self.conditions[index + 1..]) {
                break;
            }
        }
        met
    }
}

fn write_outcome(entry: &Option<(String, String)>, result: &mut ValidationResult) {
    if let Some((field, message)) = entry {
        debug!(field = %field, "writing condition outcome message");
        result.insert(field, ErrorNode::Message(process_message(message, field)));
    }
}

impl Validatable for Condition {
    fn validate(&self, record: &Value, result: &mut ValidationResult) {
        self.evaluate(record, result);
    }
}

/// Accepted by [`Condition::then`]: one expectation or a collection of them.
pub trait IntoExpectations {
    fn into_expectations(self) -> Vec<Expectation>;
}

impl IntoExpectations for Expectation {
    fn into_expectations(self) -> Vec<Expectation> {
        vec![self]
    }
}

impl IntoExpectations for Vec<Expectation> {
    fn into_expectations(self) -> Vec<Expectation> {
        self
    }
}

impl<const N: usize> IntoExpectations for [Expectation; N] {
    fn into_expectations(self) -> Vec<Expectation> {
        self.into()
    }
}
