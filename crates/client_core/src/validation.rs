//! Field validation rules for the review form.
//!
//! Every rule is a pure predicate over the field's text. An absent value is
//! represented by the empty string, so `required` and `min_length` fail on it
//! while `max_length` passes.

pub const AUTHOR_MIN_LEN: usize = 3;
pub const AUTHOR_MAX_LEN: usize = 15;

pub const AUTHOR_RULES: &[Rule] = &[
    Rule::Required,
    Rule::MinLength(AUTHOR_MIN_LEN),
    Rule::MaxLength(AUTHOR_MAX_LEN),
];

pub const NO_RULES: &[Rule] = &[];

pub fn required(value: &str) -> bool {
    !value.is_empty()
}

pub fn min_length(len: usize) -> impl Fn(&str) -> bool {
    move |value| !value.is_empty() && char_len(value) >= len
}

pub fn max_length(len: usize) -> impl Fn(&str) -> bool {
    move |value| value.is_empty() || char_len(value) <= len
}

fn char_len(value: &str) -> usize {
    value.chars().count()
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Rule {
    Required,
    MinLength(usize),
    MaxLength(usize),
}

impl Rule {
    pub fn check(self, value: &str) -> bool {
        match self {
            Rule::Required => required(value),
            Rule::MinLength(len) => min_length(len)(value),
            Rule::MaxLength(len) => max_length(len)(value),
        }
    }

    pub fn message(self) -> String {
        match self {
            Rule::Required => "Required; ".to_string(),
            Rule::MinLength(len) => format!(
                "Should be greater than {} characters; ",
                len.saturating_sub(1)
            ),
            Rule::MaxLength(len) => format!("Should be less than {} characters; ", len + 1),
        }
    }
}

/// Runs every rule against `value` and returns the failing ones in declaration order.
pub fn failing_rules(rules: &[Rule], value: &str) -> Vec<Rule> {
    rules
        .iter()
        .copied()
        .filter(|rule| !rule.check(value))
        .collect()
}

/// Concatenates the messages of `failed`, one per rule, without deduplication.
pub fn error_message(failed: &[Rule]) -> String {
    failed.iter().map(|rule| rule.message()).collect()
}

#[cfg(test)]
#[path = "tests/validation_tests.rs"]
mod tests;
