//! Single-field expectations.
//!
//! An [`Expectation`] owns an ordered list of checks for one field of a
//! record, plus the control state that shapes how they run: a required flag,
//! a negation toggle, array-broadcast mode and nested sub-rules. Builder
//! calls consume and return the expectation so rules read as one chain:
//!
//! ```
//! use expectations::{expect, validate};
//! use serde_json::json;
//!
//! let rule = expect("age").to_be_number().to_be_number_between(18.0, 120.0);
//! let result = validate([rule], &json!({"age": 34}));
//! assert!(result.is_valid());
//! ```

use crate::message::{default_missing_message, process_message};
use crate::result::{ErrorNode, ValidationResult};
use crate::validate::{Rule, Validatable};
use regex::Regex;
use serde_json::Value;
use std::fmt;
use tracing::{debug, trace};

/// Outcome-producing body of a single check.
enum CheckBody {
    /// Built-in predicate; `true` means the value passes.
    Predicate(Box<dyn Fn(&Value) -> bool + Send + Sync>),
    /// Caller-supplied check returning its own failure message.
    Custom(Box<dyn Fn(&Value) -> Option<String> + Send + Sync>),
}

/// One atomic check: a named predicate plus its failure message.
///
/// Negation and broadcast placement are captured when the check is appended,
/// so a built rule carries no mutable state into evaluation.
struct Check {
    name: &'static str,
    body: CheckBody,
    default_message: String,
    override_message: Option<String>,
    negated: bool,
    broadcast: bool,
}

impl Check {
    /// Run the check against one value, returning the formatted failure
    /// message unless the check passes or negation suppresses the failure.
    fn run(&self, value: &Value, key: &str) -> Option<String> {
        let failure = match &self.body {
            CheckBody::Predicate(test) => {
                if test(value) {
                    None
                } else {
                    Some(self.default_message.clone())
                }
            }
            CheckBody::Custom(check) => check(value),
        };
        let message = failure?;
        if self.negated {
            trace!(check = self.name, key, "failure suppressed by negation");
            return None;
        }
        let message = self.override_message.clone().unwrap_or(message);
        Some(process_message(&message, key))
    }
}

/// Strings and arrays carry a length; anything else has none.
fn length_of(value: &Value) -> Option<usize> {
    match value {
        Value::String(s) => Some(s.chars().count()),
        Value::Array(items) => Some(items.len()),
        _ => None,
    }
}

/// A fluent rule describing one field of a record.
pub struct Expectation {
    key: String,
    checks: Vec<Check>,
    sub_rules: Vec<Rule>,
    required: bool,
    array_mode: bool,
    negate_next: bool,
    missing_message: String,
}

impl Expectation {
    /// Start an expectation for `key`. The missing-field message is
    /// snapshotted from the process-wide default at this point.
    pub fn new(key: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            checks: Vec::new(),
            sub_rules: Vec::new(),
            required: true,
            array_mode: false,
            negate_next: false,
            missing_message: default_missing_message(),
        }
    }

    /// Field this expectation inspects.
    pub fn key(&self) -> &str {
        &self.key
    }

    /// Comma-separated names of the appended checks, for diagnostics.
    pub fn check_names(&self) -> String {
        self.checks
            .iter()
            .map(|check| check.name)
            .collect::<Vec<_>>()
            .join(", ")
    }

    fn push_check<F>(mut self, name: &'static str, default_message: String, test: F) -> Self
    where
        F: Fn(&Value) -> bool + Send + Sync + 'static,
    {
        self.checks.push(Check {
            name,
            body: CheckBody::Predicate(Box::new(test)),
            default_message,
            override_message: None,
            negated: std::mem::take(&mut self.negate_next),
            broadcast: self.array_mode,
        });
        self
    }

    // ---- type and shape checks ----

    /// The value must be a string.
    pub fn to_be_string(self) -> Self {
        self.push_check("string", "Should be a string".to_string(), Value::is_string)
    }

    /// The value must be a JSON number.
    pub fn to_be_number(self) -> Self {
        self.push_check("number", "Should be a number".to_string(), Value::is_number)
    }

    /// The value must be a boolean.
    pub fn to_be_boolean(self) -> Self {
        self.push_check(
            "boolean",
            "Should be a boolean value".to_string(),
            Value::is_boolean,
        )
    }

    /// The value must be a JSON object.
    pub fn to_be_object(self) -> Self {
        self.push_check("object", "Should be an object".to_string(), Value::is_object)
    }

    /// The value must be an array.
    pub fn to_be_array(self) -> Self {
        self.push_check("array", "Should be an array".to_string(), Value::is_array)
    }

    /// The value must be a number, or a string that parses as one.
    pub fn to_be_numeric(self) -> Self {
        self.push_check("numeric", "Should be numeric".to_string(), |value| {
            match value {
                Value::Number(_) => true,
                Value::String(s) => s.trim().parse::<f64>().is_ok(),
                _ => false,
            }
        })
    }

    /// The value must equal `expected` (structural equality).
    pub fn to_be(self, expected: impl Into<Value>) -> Self {
        let expected = expected.into();
        let default_message = format!("Should match {expected}");
        self.push_check("equals", default_message, move |value| *value == expected)
    }

    /// The value must be a string matching `pattern`.
    pub fn to_match(self, pattern: Regex) -> Self {
        self.push_check(
            "matches",
            "Doesn't match the regular expression".to_string(),
            move |value| value.as_str().is_some_and(|s| pattern.is_match(s)),
        )
    }

    /// The value must equal one of `values`.
    pub fn to_be_enum<I, V>(self, values: I) -> Self
    where
        I: IntoIterator<Item = V>,
        V: Into<Value>,
    {
        let values: Vec<Value> = values.into_iter().map(Into::into).collect();
        self.push_check(
            "one_of",
            "Should be one of the enum values".to_string(),
            move |value| values.contains(value),
        )
    }

    // ---- numeric comparisons ----

    /// Alias of [`to_be_number_greater_than`](Self::to_be_number_greater_than).
    pub fn to_be_greater_than(self, value: f64) -> Self {
        self.to_be_number_greater_than(value)
    }

    /// Alias of [`to_be_number_less_than`](Self::to_be_number_less_than).
    pub fn to_be_less_than(self, value: f64) -> Self {
        self.to_be_number_less_than(value)
    }

    /// Alias of [`to_be_number_between`](Self::to_be_number_between).
    pub fn to_be_between(self, min: f64, max: f64) -> Self {
        self.to_be_number_between(min, max)
    }

    /// The value must be a number strictly greater than `bound`.
    pub fn to_be_number_greater_than(self, bound: f64) -> Self {
        let default_message = format!("Should be a number greater than {bound}");
        self.push_check("number_greater_than", default_message, move |value| {
            value.as_f64().is_some_and(|n| n > bound)
        })
    }

    /// The value must be a number strictly smaller than `bound`.
    pub fn to_be_number_less_than(self, bound: f64) -> Self {
        let default_message = format!("Should be a number smaller than {bound}");
        self.push_check("number_less_than", default_message, move |value| {
            value.as_f64().is_some_and(|n| n < bound)
        })
    }

    /// The value must be a number within `[min, max]`, inclusive.
    pub fn to_be_number_between(self, min: f64, max: f64) -> Self {
        let default_message = format!("Should be a number between {min} and {max}");
        self.push_check("number_between", default_message, move |value| {
            value.as_f64().is_some_and(|n| n >= min && n <= max)
        })
    }

    // ---- property and length checks ----

    /// The value must be an object carrying `property`.
    pub fn to_have_property(self, property: impl Into<String>) -> Self {
        let property = property.into();
        self.push_check(
            "has_property",
            "Does not have the required property".to_string(),
            move |value| value.as_object().is_some_and(|map| map.contains_key(&property)),
        )
    }

    /// The value must be an object carrying every one of `properties`.
    ///
    /// Each property is checked, but a single aggregated failure is issued.
    pub fn to_have_properties<I, S>(self, properties: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let properties: Vec<String> = properties.into_iter().map(Into::into).collect();
        self.push_check(
            "has_properties",
            "Does not have the required properties.".to_string(),
            move |value| {
                value
                    .as_object()
                    .is_some_and(|map| properties.iter().all(|p| map.contains_key(p)))
            },
        )
    }

    /// A string or array value must be empty. Values without a length pass.
    pub fn to_be_empty(self) -> Self {
        self.push_check("empty", "Should be empty".to_string(), |value| {
            length_of(value).map_or(true, |len| len == 0)
        })
    }

    /// A string or array value must have exactly `length` elements.
    pub fn to_have_length(self, length: usize) -> Self {
        let default_message = format!("Does not meet the required length (required: {length})");
        self.push_check("length", default_message, move |value| {
            length_of(value) == Some(length)
        })
    }

    /// A string or array value must have at least `length` elements.
    /// Values without a length pass.
    pub fn to_have_minimum_length(self, length: usize) -> Self {
        let default_message = format!("Is too short (minimum: {length})");
        self.push_check("min_length", default_message, move |value| {
            length_of(value).map_or(true, |len| len >= length)
        })
    }

    /// A string or array value must have at most `length` elements.
    /// Values without a length pass.
    pub fn to_have_maximum_length(self, length: usize) -> Self {
        let default_message = format!("Is too long (maximum: {length})");
        self.push_check("max_length", default_message, move |value| {
            length_of(value).map_or(true, |len| len <= length)
        })
    }

    /// A string or array value's length must fall within `[min, max]`.
    /// Values without a length pass.
    pub fn to_have_length_between(self, min: usize, max: usize) -> Self {
        let default_message =
            format!("Does not meet the required length (minimum: {min}, maximum: {max})");
        self.push_check("length_between", default_message, move |value| {
            length_of(value).map_or(true, |len| len >= min && len <= max)
        })
    }

    // ---- escape hatch ----

    /// Append a caller-supplied check returning an optional failure message.
    ///
    /// Ordering, `if_not` overrides, negation and token substitution apply
    /// exactly as for built-in checks. Panics inside the closure propagate to
    /// the caller of `validate`.
    pub fn to_custom<F>(mut self, check: F) -> Self
    where
        F: Fn(&Value) -> Option<String> + Send + Sync + 'static,
    {
        self.checks.push(Check {
            name: "custom",
            body: CheckBody::Custom(Box::new(check)),
            default_message: String::new(),
            override_message: None,
            negated: std::mem::take(&mut self.negate_next),
            broadcast: self.array_mode,
        });
        self
    }

    // ---- control operations ----

    /// Negate the next appended check: its failure is suppressed rather than
    /// recorded. Calling `not` twice in a row cancels the negation. Negation
    /// never turns a passing check into a failure.
    pub fn not(mut self) -> Self {
        self.negate_next = !self.negate_next;
        self
    }

    /// Allow the field to be absent or null without recording a failure.
    pub fn not_required(mut self) -> Self {
        self.required = false;
        self
    }

    /// Broadcast subsequently appended checks (and sub-rules) across every
    /// element of an array-valued field. `each` itself checks that the value
    /// is an array; when it is not, broadcast checks are skipped with a
    /// diagnostic rather than recorded as failures.
    pub fn each(mut self) -> Self {
        self = self.push_check("each", "Should be an array".to_string(), Value::is_array);
        self.array_mode = true;
        self
    }

    /// Attach nested rules evaluated against the field's own value, or
    /// against each element when broadcast mode is on. Replaces any
    /// previously attached set.
    pub fn to_satisfy<I, R>(mut self, rules: I) -> Self
    where
        I: IntoIterator<Item = R>,
        R: Into<Rule>,
    {
        self.sub_rules = rules.into_iter().map(Into::into).collect();
        self
    }

    /// Override the message used when the field is absent while required.
    pub fn if_missing(mut self, message: impl Into<String>) -> Self {
        self.missing_message = message.into();
        self
    }

    /// Override the default message of the most recently appended check.
    /// Does nothing when no check has been appended yet.
    pub fn if_not(mut self, message: impl Into<String>) -> Self {
        match self.checks.last_mut() {
            Some(last) => last.override_message = Some(message.into()),
            None => trace!(key = %self.key, "if_not called before any check, ignoring"),
        }
        self
    }

    // ---- evaluation ----

    /// Broadcast checks and sub-rules across every element of an array value.
    fn validate_elements(&self, value: &Value, result: &mut ValidationResult) {
        let Some(items) = value.as_array() else {
            debug!(key = %self.key, "value is not an array, skipping broadcast checks");
            return;
        };
        let broadcast: Vec<&Check> = self.checks.iter().filter(|c| c.broadcast).collect();
        if broadcast.is_empty() && self.sub_rules.is_empty() {
            return;
        }

        let mut slots: Vec<ErrorNode> = vec![ErrorNode::empty(); items.len()];
        for check in &broadcast {
            for (index, item) in items.iter().enumerate() {
                trace!(key = %self.key, check = check.name, index, "running broadcast check");
                slots[index] = match check.run(item, &self.key) {
                    Some(message) => ErrorNode::Message(message),
                    None => ErrorNode::empty(),
                };
            }
        }
        if !self.sub_rules.is_empty() {
            for (index, item) in items.iter().enumerate() {
                match &mut slots[index] {
                    ErrorNode::Fields(nested) => {
                        for rule in &self.sub_rules {
                            rule.validate(item, nested);
                        }
                    }
                    _ => {
                        debug!(key = %self.key, index, "element already failed, skipping sub-rules");
                    }
                }
            }
        }
        result.insert(&self.key, ErrorNode::Items(slots));
    }

    /// Run sub-rules once against the whole value, nesting their findings
    /// under this expectation's key.
    fn validate_sub_rules(&self, value: &Value, result: &mut ValidationResult) {
        if self.sub_rules.is_empty() {
            return;
        }
        if let Some(ErrorNode::Message(_)) = result.get(&self.key) {
            debug!(key = %self.key, "field already failed, skipping sub-rules");
            return;
        }
        let mut nested = match result.get(&self.key) {
            Some(ErrorNode::Fields(existing)) => existing.clone(),
            _ => ValidationResult::new(),
        };
        for rule in &self.sub_rules {
            rule.validate(value, &mut nested);
        }
        // an array-valued field with no findings keeps the empty-sequence shape
        let node = if nested.is_empty() && value.is_array() {
            ErrorNode::Items(Vec::new())
        } else {
            ErrorNode::Fields(nested)
        };
        result.insert(&self.key, node);
    }
}

impl Validatable for Expectation {
    fn validate(&self, record: &Value, result: &mut ValidationResult) {
        let value = match record.get(self.key.as_str()) {
            Some(value) if !value.is_null() => value,
            _ => {
                if self.required {
                    debug!(key = %self.key, "required field absent");
                    result.insert(
                        &self.key,
                        ErrorNode::Message(process_message(&self.missing_message, &self.key)),
                    );
                } else {
                    trace!(key = %self.key, "optional field absent, skipping checks");
                }
                return;
            }
        };

        for check in self.checks.iter().filter(|c| !c.broadcast) {
            trace!(key = %self.key, check = check.name, "running check");
            if let Some(message) = check.run(value, &self.key) {
                result.insert(&self.key, ErrorNode::Message(message));
            }
        }

        if self.array_mode {
            self.validate_elements(value, result);
        } else {
            self.validate_sub_rules(value, result);
        }
    }
}

impl fmt::Debug for Expectation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Expectation")
            .field("key", &self.key)
            .field("checks", &self.check_names())
            .field("required", &self.required)
            .field("array_mode", &self.array_mode)
            .field("sub_rules", &self.sub_rules.len())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::validate::validate;
    use serde_json::json;

    #[test]
    fn string_check_records_default_message() {
        let result = validate([Expectation::new("name").to_be_string()], &json!({"name": 5}));
        assert_eq!(
            result.get("name"),
            Some(&ErrorNode::Message("Should be a string".to_string()))
        );
    }

    #[test]
    fn last_failing_check_wins() {
        let rule = Expectation::new("v").to_be_string().to_be_number();
        let result = validate([rule], &json!({"v": true}));
        assert_eq!(
            result.get("v"),
            Some(&ErrorNode::Message("Should be a number".to_string()))
        );
    }

    #[test]
    fn numeric_accepts_numbers_and_numeric_strings() {
        let record = json!({"a": 7, "b": "12.5", "c": "12abc"});
        assert!(validate([Expectation::new("a").to_be_numeric()], &record).is_valid());
        assert!(validate([Expectation::new("b").to_be_numeric()], &record).is_valid());
        assert!(!validate([Expectation::new("c").to_be_numeric()], &record).is_valid());
    }

    #[test]
    fn number_between_is_inclusive() {
        let rule = |min, max| Expectation::new("n").to_be_number_between(min, max);
        assert!(validate([rule(1.0, 3.0)], &json!({"n": 1})).is_valid());
        assert!(validate([rule(1.0, 3.0)], &json!({"n": 3})).is_valid());
        assert!(!validate([rule(1.0, 3.0)], &json!({"n": 4})).is_valid());
        assert!(!validate([rule(1.0, 3.0)], &json!({"n": "2"})).is_valid());
    }

    #[test]
    fn comparison_checks_require_numbers() {
        assert!(!validate(
            [Expectation::new("n").to_be_greater_than(1.0)],
            &json!({"n": "5"})
        )
        .is_valid());
        assert!(validate([Expectation::new("n").to_be_greater_than(1.0)], &json!({"n": 5})).is_valid());
        assert!(!validate([Expectation::new("n").to_be_less_than(5.0)], &json!({"n": 5})).is_valid());
    }

    #[test]
    fn match_check_only_accepts_matching_strings() {
        let pattern = || Regex::new(r"^\d{3}-\d{4}$").expect("valid pattern");
        assert!(validate(
            [Expectation::new("phone").to_match(pattern())],
            &json!({"phone": "123-4567"})
        )
        .is_valid());
        assert!(!validate(
            [Expectation::new("phone").to_match(pattern())],
            &json!({"phone": 1234567})
        )
        .is_valid());
    }

    #[test]
    fn enum_check_uses_structural_equality() {
        let rule = || Expectation::new("role").to_be_enum(["admin", "user"]);
        assert!(validate([rule()], &json!({"role": "admin"})).is_valid());
        assert!(!validate([rule()], &json!({"role": "root"})).is_valid());
    }

    #[test]
    fn property_checks_inspect_objects_only() {
        let record = json!({"user": {"id": 1, "name": "jane"}, "plain": 4});
        assert!(validate([Expectation::new("user").to_have_property("id")], &record).is_valid());
        assert!(
            !validate([Expectation::new("user").to_have_property("email")], &record).is_valid()
        );
        assert!(!validate([Expectation::new("plain").to_have_property("id")], &record).is_valid());
        assert!(validate(
            [Expectation::new("user").to_have_properties(["id", "name"])],
            &record
        )
        .is_valid());
        let result = validate(
            [Expectation::new("user").to_have_properties(["id", "email", "phone"])],
            &record,
        );
        assert_eq!(
            result.get("user"),
            Some(&ErrorNode::Message(
                "Does not have the required properties.".to_string()
            ))
        );
    }

    #[test]
    fn length_checks_pass_on_values_without_length() {
        let record = json!({"n": 12});
        assert!(validate([Expectation::new("n").to_be_empty()], &record).is_valid());
        assert!(validate([Expectation::new("n").to_have_minimum_length(3)], &record).is_valid());
        assert!(validate([Expectation::new("n").to_have_maximum_length(3)], &record).is_valid());
        assert!(validate([Expectation::new("n").to_have_length_between(1, 3)], &record).is_valid());
        // exact length still fails: 12 has no length at all
        assert!(!validate([Expectation::new("n").to_have_length(2)], &record).is_valid());
    }

    #[test]
    fn length_checks_count_characters_and_elements() {
        let record = json!({"s": "test", "items": [1, 2, 3, 4]});
        assert!(validate([Expectation::new("s").to_have_length(4)], &record).is_valid());
        assert!(validate([Expectation::new("items").to_have_length(4)], &record).is_valid());
        assert!(!validate([Expectation::new("s").to_have_length_between(5, 9)], &record).is_valid());
        assert!(validate([Expectation::new("items").to_have_length_between(3, 5)], &record).is_valid());
    }

    #[test]
    fn if_not_retargets_only_the_last_check() {
        let rule = Expectation::new("age")
            .to_be_number()
            .to_be_number_greater_than(17.0)
            .if_not("Must be an adult.");
        let result = validate([rule], &json!({"age": 12}));
        assert_eq!(
            result.get("age"),
            Some(&ErrorNode::Message("Must be an adult.".to_string()))
        );

        let rule = Expectation::new("age")
            .to_be_number()
            .to_be_number_greater_than(17.0)
            .if_not("Must be an adult.");
        let result = validate([rule], &json!({"age": "twelve"}));
        // the first check still carries its own message
        assert_eq!(
            result.get("age"),
            Some(&ErrorNode::Message("Must be an adult.".to_string()))
        );
    }

    #[test]
    fn if_not_messages_support_tokens() {
        let rule = Expectation::new("email")
            .to_be_string()
            .if_not("%key.capitalize% must be text.");
        let result = validate([rule], &json!({"email": 9}));
        assert_eq!(
            result.get("email"),
            Some(&ErrorNode::Message("Email must be text.".to_string()))
        );
    }

    #[test]
    fn custom_checks_follow_builtin_semantics() {
        let even = |value: &Value| {
            value
                .as_i64()
                .filter(|n| n % 2 != 0)
                .map(|n| format!("{n} is not even"))
        };
        let result = validate([Expectation::new("n").to_custom(even)], &json!({"n": 3}));
        assert_eq!(
            result.get("n"),
            Some(&ErrorNode::Message("3 is not even".to_string()))
        );

        // if_not overrides the custom message, negation suppresses it
        let result = validate(
            [Expectation::new("n").to_custom(even).if_not("Needs an even %key%.")],
            &json!({"n": 3}),
        );
        assert_eq!(
            result.get("n"),
            Some(&ErrorNode::Message("Needs an even n.".to_string()))
        );
        assert!(validate([Expectation::new("n").not().to_custom(even)], &json!({"n": 3})).is_valid());
    }

    #[test]
    fn negation_is_scoped_to_the_next_check() {
        // the suppressed string check does not leak onto the number check
        let rule = Expectation::new("v").not().to_be_number().to_be_string();
        let result = validate([rule], &json!({"v": 7}));
        assert_eq!(
            result.get("v"),
            Some(&ErrorNode::Message("Should be a string".to_string()))
        );
    }

    #[test]
    fn double_negation_cancels() {
        let rule = Expectation::new("v").not().not().to_be_string();
        assert!(!validate([rule], &json!({"v": 7})).is_valid());
    }

    #[test]
    fn missing_message_override_is_formatted() {
        let rule = Expectation::new("s").to_have_length(3).if_missing("No %key% given.");
        let result = validate([rule], &json!({}));
        assert_eq!(
            result.get("s"),
            Some(&ErrorNode::Message("No s given.".to_string()))
        );
    }

    #[test]
    fn null_counts_as_absent() {
        let result = validate([Expectation::new("s").to_be_string()], &json!({"s": null}));
        assert!(!result.is_valid());
        assert!(validate(
            [Expectation::new("s").not_required().to_be_string()],
            &json!({"s": null})
        )
        .is_valid());
    }

    #[test]
    fn broadcast_skips_non_arrays_without_failing() {
        let rule = Expectation::new("items").each().to_be_string();
        let result = validate([rule], &json!({"items": "oops"}));
        // the each check itself records the failure; broadcast checks skip
        assert_eq!(
            result.get("items"),
            Some(&ErrorNode::Message("Should be an array".to_string()))
        );
    }

    #[test]
    fn sub_rules_nest_under_the_field() {
        let rule = Expectation::new("address")
            .to_be_object()
            .to_satisfy([Expectation::new("city").to_be_string()]);
        let result = validate([rule], &json!({"address": {"city": 5}}));
        let Some(ErrorNode::Fields(nested)) = result.get("address") else {
            panic!("expected nested findings, got {:?}", result.get("address"));
        };
        assert_eq!(
            nested.get("city"),
            Some(&ErrorNode::Message("Should be a string".to_string()))
        );
    }

    #[test]
    fn sub_rules_are_skipped_once_the_field_failed() {
        let rule = Expectation::new("address")
            .to_be_object()
            .to_satisfy([Expectation::new("city").to_be_string()]);
        let result = validate([rule], &json!({"address": "main street"}));
        assert_eq!(
            result.get("address"),
            Some(&ErrorNode::Message("Should be an object".to_string()))
        );
    }

    #[test]
    fn clean_array_field_keeps_sequence_shape() {
        let rule = Expectation::new("tags")
            .to_be_array()
            .to_satisfy([Expectation::new("name").not_required()]);
        let result = validate([rule], &json!({"tags": ["a"]}));
        assert_eq!(result.get("tags"), Some(&ErrorNode::Items(Vec::new())));
        assert!(result.is_valid());
    }
}
