//! Token classification for a host highlighting layer.
//!
//! Jade comments never span lines, so classification is strictly per
//! line and carries no state between calls.

use std::ops::Range;

use once_cell::sync::Lazy;
use regex::Regex;

/// Category a classified span should be painted as.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TokenCategory {
    Comment,
    Keyword,
    Type,
    /// The name in a function definition line, not a call site.
    FunctionName,
}

impl TokenCategory {
    /// Lowercase label, as printed by tooling.
    pub fn label(self) -> &'static str {
        match self {
            TokenCategory::Comment => "comment",
            TokenCategory::Keyword => "keyword",
            TokenCategory::Type => "type",
            TokenCategory::FunctionName => "function",
        }
    }
}

/// A classified slice of a line. The range is in bytes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TokenSpan {
    pub range: Range<usize>,
    pub category: TokenCategory,
}

/// The classification table, in match-priority order: a comment claims the
/// rest of the line before anything else gets a look, and the definition
/// name capture comes before the keyword that would otherwise swallow
/// `fn`. For [`TokenCategory::FunctionName`] the reported span is capture
/// group 1, the name itself.
static TOKEN_PATTERNS: Lazy<Vec<(Regex, TokenCategory)>> = Lazy::new(|| {
    vec![
        (Regex::new(r"//.*").unwrap(), TokenCategory::Comment),
        (
            Regex::new(r"^fn\s+([A-Za-z_]\w*)\s*\(\)").unwrap(),
            TokenCategory::FunctionName,
        ),
        (
            Regex::new(r"\b(?:fn|return)\b").unwrap(),
            TokenCategory::Keyword,
        ),
        (Regex::new(r"\bi32\b").unwrap(), TokenCategory::Type),
    ]
});

/// The table itself, for hosts that drive their own matching.
pub fn token_patterns() -> &'static [(Regex, TokenCategory)] {
    &TOKEN_PATTERNS
}

/// Classify one line into non-overlapping spans, left to right.
///
/// Candidates from every pattern are merged by start position, table
/// order breaking ties; a candidate inside an earlier claimed span is
/// dropped.
pub fn classify_line(line: &str) -> Vec<TokenSpan> {
    let mut candidates: Vec<(usize, usize, usize, TokenCategory)> = Vec::new();
    for (priority, (pattern, category)) in token_patterns().iter().enumerate() {
        match category {
            TokenCategory::FunctionName => {
                for caps in pattern.captures_iter(line) {
                    if let Some(name) = caps.get(1) {
                        candidates.push((name.start(), name.end(), priority, *category));
                    }
                }
            }
            _ => {
                for found in pattern.find_iter(line) {
                    candidates.push((found.start(), found.end(), priority, *category));
                }
            }
        }
    }
    candidates.sort_by_key(|&(start, _, priority, _)| (start, priority));

    let mut spans = Vec::new();
    let mut claimed = 0;
    for (start, end, _, category) in candidates {
        if start >= claimed && end > start {
            spans.push(TokenSpan {
                range: start..end,
                category,
            });
            claimed = end;
        }
    }
    spans
}
