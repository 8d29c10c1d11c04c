//! Signup form validation demo.
//!
//! Run with: cargo run -p signup-form
//!
//! Set RUST_LOG=expectations=trace to watch the engine evaluate each check.

use expectations::{expect, is_valid, validate, when, Rule};
use regex::Regex;
use serde_json::json;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    let email_pattern = Regex::new(r"^[^@\s]+@[^@\s]+\.[^@\s]+$")?;

    let rules: Vec<Rule> = vec![
        expect("username")
            .to_be_string()
            .to_have_length_between(3, 20)
            .if_not("Username must be 3 to 20 characters.")
            .into(),
        expect("email")
            .to_be_string()
            .to_match(email_pattern)
            .if_not("%key.capitalize% doesn't look like an email address.")
            .into(),
        expect("age")
            .not_required()
            .to_be_number_greater_than(12.0)
            .if_not("You must be at least 13 to sign up.")
            .into(),
        expect("interests")
            .each()
            .to_be_string()
            .if_not("Each interest must be a tag name.")
            .into(),
        expect("address")
            .not_required()
            .to_be_object()
            .to_satisfy([
                expect("street").to_be_string(),
                expect("zip").to_be_string().if_missing("No %key% given."),
            ])
            .into(),
        when("newsletter")
            .is(true)
            .then(expect("email").to_have_minimum_length(3))
            .on_conditions_met("newsletter_note", "Subscribed to the newsletter.")
            .into(),
    ];

    let submission = json!({
        "username": "jd",
        "email": "jane.doe@example",
        "age": 34,
        "interests": ["rust", 42, "hiking"],
        "address": {"street": "Main St 1"},
        "newsletter": true,
    });

    let result = validate(&rules, &submission);
    println!("valid: {}", is_valid(&result));
    println!("{}", serde_json::to_string_pretty(&result)?);

    Ok(())
}
