//! Response token grammar: `[<area>](<code>)`.
//!
//! The service renders full-width parentheses; ASCII ones are accepted too.
//! Treated as a versioned grammar with its own fixture suite.

use std::sync::OnceLock;

use regex::Regex;

use crate::types::RecognizedPair;

fn token_pattern() -> &'static Regex {
    static PATTERN: OnceLock<Regex> = OnceLock::new();
    PATTERN.get_or_init(|| Regex::new(r"\[(.*?)\][（(](.*?)[）)]").expect("valid token pattern"))
}

/// Global, non-overlapping scan over `text`; one pair per token, in order
/// of appearance, duplicates preserved.
pub fn extract_pairs(text: &str) -> Vec<RecognizedPair> {
    token_pattern()
        .captures_iter(text)
        .map(|caps| RecognizedPair {
            area: caps[1].to_string(),
            code: caps[2].to_string(),
        })
        .collect()
}
