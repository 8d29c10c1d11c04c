//! # Expectations
//!
//! Declarative validation for dynamic records. Callers describe what a
//! record should look like with fluent rule builders, run the rules against
//! a [`serde_json::Value`], and receive a structured tree of field-level
//! error messages.
//!
//! ## Field expectations
//!
//! ```
//! use expectations::{expect, validate, is_valid};
//! use serde_json::json;
//!
//! let record = json!({"username": "jane", "age": 34});
//!
//! let result = validate(
//!     [
//!         expect("username").to_be_string().to_have_length_between(3, 20),
//!         expect("age").to_be_number_between(18.0, 120.0).if_not("Must be an adult."),
//!     ],
//!     &record,
//! );
//! assert!(is_valid(&result));
//! ```
//!
//! ## Conditional groups
//!
//! ```
//! use expectations::{expect, when, validate};
//! use serde_json::json;
//!
//! let rule = when("license_plate_missing")
//!     .is(false)
//!     .then(expect("license_plate").to_be_string().if_not("License must be a string."));
//!
//! let result = validate([&rule], &json!({"license_plate_missing": false, "license_plate": 7}));
//! assert!(!result.is_valid());
//! ```
//!
//! ## Arrays and nesting
//!
//! Array-valued fields broadcast checks across every element with
//! [`each`](Expectation::each); object-valued fields nest whole rule lists
//! with [`to_satisfy`](Expectation::to_satisfy). The result mirrors that
//! shape: per-element slots for arrays, nested maps for objects, and plain
//! message strings for flat failures.
//!
//! Failure messages may carry `%key%` and `%key.capitalize%` tokens,
//! substituted with the field name at evaluation time.

mod condition;
mod expectation;
mod message;
mod result;
mod validate;


pub use condition::{Condition, IntoExpectations, LogicOperator};
pub use expectation::Expectation;
pub use message::{process_message, set_default_missing_message};
pub use result::{ErrorNode, InvalidRecord, ValidationResult};
pub use validate::{check, expect, is_valid, validate, when, Rule, Validatable};

/// Prelude for glob imports.
pub mod prelude {
    pub use crate::condition::{Condition, LogicOperator};
    pub use crate::expectation::Expectation;
    pub use crate::message::{process_message, set_default_missing_message};
    pub use crate::result::{ErrorNode, InvalidRecord, ValidationResult};
    pub use crate::validate::{check, expect, is_valid, validate, when, Rule, Validatable};
}
