//! Deterministic line-based extractor; the no-network fallback for the
//! text path. Its code shape is a versioned grammar with a fixture suite.

use std::sync::OnceLock;

use regex::Regex;

use crate::types::RecognizedPair;

fn code_pattern() -> &'static Regex {
    static PATTERN: OnceLock<Regex> = OnceLock::new();
    PATTERN.get_or_init(|| Regex::new(r"\d{1,2}-\d-\d{4}").expect("valid code pattern"))
}

/// Single left-to-right pass over raw text, O(n) in input length.
#[derive(Debug, Clone)]
pub struct LocalCodeExtractor {
    default_area: String,
}

impl LocalCodeExtractor {
    pub fn new(default_area: impl Into<String>) -> Self {
        Self {
            default_area: default_area.into(),
        }
    }

    /// Walks trimmed, non-empty lines. A leading-dash line switches the
    /// running area to its remainder (marker and colons stripped); any
    /// other line contributes its first code-shaped substring under the
    /// running area. Lines with no match are skipped silently.
    pub fn extract(&self, text: &str) -> Vec<RecognizedPair> {
        let mut current_area = self.default_area.clone();
        let mut pairs = Vec::new();
        for line in text.lines().map(str::trim).filter(|line| !line.is_empty()) {
            if let Some(rest) = line.strip_prefix('-') {
                current_area = rest.trim_matches(&[' ', ':', '：'][..]).to_string();
                continue;
            }
            if let Some(found) = code_pattern().find(line) {
                pairs.push(RecognizedPair {
                    code: found.as_str().to_string(),
                    area: current_area.clone(),
                });
            }
        }
        pairs
    }
}
