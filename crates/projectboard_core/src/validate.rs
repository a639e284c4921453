//! Declarative field validation for form-style input.
//!
//! # Responsibility
//! - Check one submitted value against an optional rule set.
//! - Stay pure: no side effects, no panics, no error payloads.
//!
//! # Invariants
//! - Absent rules are never checked.
//! - Length rules apply to text only; range rules apply to numbers only.
//! - `min`/`max` form a closed range: both boundary values pass.

/// One submitted field value, as the two shapes a form produces.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldValue<'a> {
    /// Raw text input.
    Text(&'a str),
    /// Numeric input, already parsed by the caller.
    Number(i64),
}

/// Optional rule set for one field. `Default` checks nothing.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct FieldRules {
    /// Trimmed textual form must be non-empty.
    pub required: bool,
    /// Minimum character count, untrimmed. Text values only.
    pub min_length: Option<usize>,
    /// Maximum character count, untrimmed. Text values only.
    pub max_length: Option<usize>,
    /// Inclusive lower bound. Numeric values only.
    pub min: Option<i64>,
    /// Inclusive upper bound. Numeric values only.
    pub max: Option<i64>,
}

/// Returns whether `value` satisfies every rule present in `rules`.
///
/// Rules that do not apply to the value's shape are skipped, so a numeric
/// value trivially satisfies `min_length`/`max_length` and a text value
/// trivially satisfies `min`/`max`. A number's textual form is its decimal
/// rendering, which is never empty, so numbers always satisfy `required`.
pub fn validate(value: FieldValue<'_>, rules: &FieldRules) -> bool {
    let mut is_valid = true;

    if rules.required {
        is_valid = is_valid
            && match value {
                FieldValue::Text(text) => !text.trim().is_empty(),
                FieldValue::Number(_) => true,
            };
    }

    if let (Some(min_length), FieldValue::Text(text)) = (rules.min_length, value) {
        is_valid = is_valid && text.chars().count() >= min_length;
    }
    if let (Some(max_length), FieldValue::Text(text)) = (rules.max_length, value) {
        is_valid = is_valid && text.chars().count() <= max_length;
    }

    if let (Some(min), FieldValue::Number(number)) = (rules.min, value) {
        is_valid = is_valid && number >= min;
    }
    if let (Some(max), FieldValue::Number(number)) = (rules.max, value) {
        is_valid = is_valid && number <= max;
    }

    is_valid
}

#[cfg(test)]
mod tests {
    use super::{validate, FieldRules, FieldValue};

    #[test]
    fn default_rules_accept_anything() {
        let rules = FieldRules::default();
        assert!(validate(FieldValue::Text(""), &rules));
        assert!(validate(FieldValue::Number(-42), &rules));
    }

    #[test]
    fn required_trims_before_checking() {
        let rules = FieldRules {
            required: true,
            ..FieldRules::default()
        };
        assert!(!validate(FieldValue::Text("   "), &rules));
        assert!(validate(FieldValue::Text("  x "), &rules));
        assert!(validate(FieldValue::Number(0), &rules));
    }

    #[test]
    fn length_rules_count_untrimmed_chars() {
        let rules = FieldRules {
            min_length: Some(3),
            max_length: Some(5),
            ..FieldRules::default()
        };
        assert!(!validate(FieldValue::Text("ab"), &rules));
        assert!(validate(FieldValue::Text("  a"), &rules));
        assert!(validate(FieldValue::Text("abcde"), &rules));
        assert!(!validate(FieldValue::Text("abcdef"), &rules));
    }

    #[test]
    fn range_rules_are_closed_on_both_ends() {
        let rules = FieldRules {
            min: Some(1),
            max: Some(10),
            ..FieldRules::default()
        };
        assert!(!validate(FieldValue::Number(0), &rules));
        assert!(validate(FieldValue::Number(1), &rules));
        assert!(validate(FieldValue::Number(10), &rules));
        assert!(!validate(FieldValue::Number(11), &rules));
    }

    #[test]
    fn rules_skip_values_of_the_other_shape() {
        let length_rules = FieldRules {
            min_length: Some(100),
            ..FieldRules::default()
        };
        assert!(validate(FieldValue::Number(7), &length_rules));

        let range_rules = FieldRules {
            min: Some(100),
            ..FieldRules::default()
        };
        assert!(validate(FieldValue::Text("7"), &range_rules));
    }
}
