//! Message templating.
//!
//! Failure messages may contain two tokens: `%key%`, replaced with the field
//! name, and `%key.capitalize%`, replaced with the field name with its first
//! character upper-cased. Substitution is global, case-sensitive, and single
//! pass; a template without tokens passes through untouched.

use std::sync::RwLock;

/// Template used for absent required fields unless overridden.
pub(crate) const BUILTIN_MISSING_MESSAGE: &str = "Missing %key.capitalize%.";

static DEFAULT_MISSING_MESSAGE: RwLock<Option<String>> = RwLock::new(None);

/// Substitute the field-name tokens into `message`.
///
/// ```
/// use expectations::process_message;
///
/// assert_eq!(process_message("Missing %key.capitalize%.", "email"), "Missing Email.");
/// ```
pub fn process_message(message: &str, key: &str) -> String {
    message
        .replace("%key%", key)
        .replace("%key.capitalize%", &capitalize(key))
}

/// Set the process-wide template used when a required field is absent.
///
/// Expectations snapshot the current default when they are constructed, so
/// changing it later does not affect rules that already exist. Returns the
/// template that was set.
pub fn set_default_missing_message(message: impl Into<String>) -> String {
    let message = message.into();
    let mut slot = match DEFAULT_MISSING_MESSAGE.write() {
        Ok(guard) => guard,
        Err(poisoned) => poisoned.into_inner(),
    };
    *slot = Some(message.clone());
    message
}

/// Current default missing-field template, read at expectation construction.
pub(crate) fn default_missing_message() -> String {
    let slot = match DEFAULT_MISSING_MESSAGE.read() {
        Ok(guard) => guard,
        Err(poisoned) => poisoned.into_inner(),
    };
    slot.clone()
        .unwrap_or_else(|| BUILTIN_MISSING_MESSAGE.to_string())
}

fn capitalize(s: &str) -> String {
    let mut chars = s.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().collect::<String>() + chars.as_str(),
        None => String::new(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn substitutes_both_tokens() {
        let message = process_message("%key.capitalize% is required (field: %key%)", "email");
        assert_eq!(message, "Email is required (field: email)");
    }

    #[test]
    fn substitutes_every_occurrence() {
        assert_eq!(process_message("%key% %key%", "a"), "a a");
    }

    #[test]
    fn leaves_token_free_templates_alone() {
        assert_eq!(process_message("nothing to do", "email"), "nothing to do");
    }

    #[test]
    fn substitution_is_single_pass() {
        // A key containing the token text must not be expanded again.
        assert_eq!(process_message("%key%", "%key%x"), "%key%x");
    }

    #[test]
    fn capitalize_handles_empty_and_unicode() {
        assert_eq!(capitalize(""), "");
        assert_eq!(capitalize("email"), "Email");
        assert_eq!(capitalize("émail"), "Émail");
    }
}
