//! Date-line recognition
//!
//! A new email starts wherever a line contains a date token. Recognition is
//! a set of predicates so that other formats can be added without touching
//! the record builder.

use crate::error::Result;
use regex::Regex;
use std::fmt;

/// A single date-line predicate
pub trait DatePattern: Send + Sync {
    /// Short name used in logs
    fn name(&self) -> &str;

    /// Whether the line contains a date token in this format
    fn matches(&self, line: &str) -> bool;
}

// Regex patterns
static NUMERIC_DATE_REGEX: std::sync::LazyLock<Regex> =
    std::sync::LazyLock::new(|| Regex::new(r"\b\d{1,2}/\d{1,2}/\d{4}\b").unwrap());

static TEXTUAL_DATE_REGEX: std::sync::LazyLock<Regex> =
    std::sync::LazyLock::new(|| Regex::new(r"\b[A-Z][a-z]{2}\s\d{1,2},\s\d{4}\b").unwrap());

/// Date predicate backed by an unanchored regular expression search
#[derive(Debug, Clone)]
pub struct RegexDatePattern {
    name: String,
    regex: Regex,
}

impl RegexDatePattern {
    /// Compile a custom pattern
    pub fn new(name: impl Into<String>, expr: &str) -> Result<Self> {
        Ok(Self {
            name: name.into(),
            regex: Regex::new(expr)?,
        })
    }

    /// `3/14/2024`, `03/04/2024`
    #[must_use]
    pub fn numeric() -> Self {
        Self {
            name: "numeric".into(),
            regex: NUMERIC_DATE_REGEX.clone(),
        }
    }

    /// `Mar 14, 2024`
    #[must_use]
    pub fn textual() -> Self {
        Self {
            name: "textual".into(),
            regex: TEXTUAL_DATE_REGEX.clone(),
        }
    }
}

impl DatePattern for RegexDatePattern {
    fn name(&self) -> &str {
        &self.name
    }

    fn matches(&self, line: &str) -> bool {
        self.regex.is_match(line)
    }
}

/// Ordered set of date predicates; a line is a date line if any member matches
pub struct DatePatterns {
    patterns: Vec<Box<dyn DatePattern>>,
}

impl DatePatterns {
    /// A set with no patterns; nothing is ever a date line
    #[must_use]
    pub fn empty() -> Self {
        Self {
            patterns: Vec::new(),
        }
    }

    /// Add a pattern
    pub fn push(&mut self, pattern: impl DatePattern + 'static) {
        self.patterns.push(Box::new(pattern));
    }

    /// Builder form of [`push`](Self::push)
    #[must_use]
    pub fn with_pattern(mut self, pattern: impl DatePattern + 'static) -> Self {
        self.push(pattern);
        self
    }

    /// Whether any pattern matches the line
    #[must_use]
    pub fn matches(&self, line: &str) -> bool {
        self.patterns.iter().any(|p| p.matches(line))
    }

    /// Name of the first pattern matching the line
    #[must_use]
    pub fn matching(&self, line: &str) -> Option<&str> {
        self.patterns
            .iter()
            .find(|p| p.matches(line))
            .map(|p| p.name())
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.patterns.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.patterns.is_empty()
    }
}

impl Default for DatePatterns {
    /// The numeric and textual built-ins
    fn default() -> Self {
        Self::empty()
            .with_pattern(RegexDatePattern::numeric())
            .with_pattern(RegexDatePattern::textual())
    }
}

impl fmt::Debug for DatePatterns {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list()
            .entries(self.patterns.iter().map(|p| p.name()))
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_numeric() {
        let p = RegexDatePattern::numeric();
        assert!(p.matches("3/14/2024"));
        assert!(p.matches("Sent: 12/01/2023 10:15 AM"));
        assert!(!p.matches("3/14/24"));
        assert!(!p.matches("123/14/2024"));
    }

    #[test]
    fn test_textual() {
        let p = RegexDatePattern::textual();
        assert!(p.matches("Mar 14, 2024"));
        assert!(p.matches("Thursday, Mar 4, 2024 9:00"));
        assert!(!p.matches("mar 14, 2024"));
        assert!(!p.matches("March 14, 2024"));
        assert!(!p.matches("Mar 14 2024"));
    }

    #[test]
    fn test_debug_lists_names() {
        assert_eq!(format!("{:?}", DatePatterns::default()), r#"["numeric", "textual"]"#);
    }
}
