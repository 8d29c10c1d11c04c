//! The error-result tree produced by a validation pass.
//!
//! A result maps field names to findings. A finding is either a failure
//! message, a nested result for an object-valued field, or one slot per
//! element for an array-valued field. Keys are written lazily: a field shows
//! up only once a rule has inspected it, and the only representation of
//! success is the absence of message leaves.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;

/// A single finding in the error-result tree.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ErrorNode {
    /// A failure message for the field itself.
    Message(String),
    /// Per-element findings for an array-valued field, one slot per input
    /// element. An element that validated cleanly holds an empty map.
    Items(Vec<ErrorNode>),
    /// Nested findings for an object-valued field.
    Fields(ValidationResult),
}

impl ErrorNode {
    /// An empty nested map, the "no findings" slot for one array element.
    pub fn empty() -> Self {
        ErrorNode::Fields(ValidationResult::new())
    }

    /// True when no message leaf exists at or below this node.
    pub fn is_valid(&self) -> bool {
        match self {
            ErrorNode::Message(_) => false,
            ErrorNode::Items(items) => items.iter().all(ErrorNode::is_valid),
            ErrorNode::Fields(fields) => fields.is_valid(),
        }
    }

    fn message_count(&self) -> usize {
        match self {
            ErrorNode::Message(_) => 1,
            ErrorNode::Items(items) => items.iter().map(ErrorNode::message_count).sum(),
            ErrorNode::Fields(fields) => fields.error_count(),
        }
    }
}

/// The accumulated outcome of running rules against a record.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ValidationResult {
    #[serde(flatten)]
    fields: BTreeMap<String, ErrorNode>,
}

impl ValidationResult {
    /// Create an empty result.
    pub fn new() -> Self {
        Self::default()
    }

    /// True when no rule has written anything, not even empty structures.
    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    /// Recursively check that the tree holds zero message leaves.
    ///
    /// Empty structures (an array element that passed, a nested result with
    /// no findings) count as valid.
    pub fn is_valid(&self) -> bool {
        self.fields.values().all(ErrorNode::is_valid)
    }

    /// Total number of message leaves anywhere in the tree.
    pub fn error_count(&self) -> usize {
        self.fields.values().map(ErrorNode::message_count).sum()
    }

    /// Finding recorded for `field`, if any.
    pub fn get(&self, field: &str) -> Option<&ErrorNode> {
        self.fields.get(field)
    }

    /// Fields that have findings recorded (including empty structures).
    pub fn field_names(&self) -> impl Iterator<Item = &str> {
        self.fields.keys().map(String::as_str)
    }

    /// Record a finding for `field`, replacing any previous one.
    pub fn insert(&mut self, field: impl Into<String>, node: ErrorNode) {
        self.fields.insert(field.into(), node);
    }

    /// Union another result's fields into this one, later writes winning.
    pub fn merge(&mut self, other: ValidationResult) {
        self.fields.extend(other.fields);
    }

    /// Convert to a `Result`, for call sites that propagate with `?`.
    pub fn into_result(self) -> Result<(), InvalidRecord> {
        if self.is_valid() {
            Ok(())
        } else {
            Err(InvalidRecord(self))
        }
    }
}

impl fmt::Display for ValidationResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "validation failed: {} error(s)", self.error_count())
    }
}

/// Returned by [`check`](crate::check) when a record fails validation.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
#[error("{0}")]
pub struct InvalidRecord(pub ValidationResult);
