//! Regular-expression patterns for the match / no-match combinators.

use std::fmt;

use regex::Regex;

use vouch_contracts::error::{VouchError, VouchResult};

/// A compiled pattern. Displays as its source between slashes, e.g. `/^admin$/`.
#[derive(Debug, Clone)]
pub struct Pattern(Regex);

impl Pattern {
    /// Compile `source`.
    ///
    /// Returns `VouchError::InvalidPattern` if the expression does not compile.
    pub fn new(source: &str) -> VouchResult<Self> {
        Regex::new(source)
            .map(Self)
            .map_err(|e| VouchError::InvalidPattern {
                pattern: source.to_string(),
                reason: e.to_string(),
            })
    }

    pub fn is_match(&self, haystack: &str) -> bool {
        self.0.is_match(haystack)
    }

    /// The source the pattern was compiled from.
    pub fn as_str(&self) -> &str {
        self.0.as_str()
    }
}

impl From<Regex> for Pattern {
    fn from(regex: Regex) -> Self {
        Self(regex)
    }
}

impl fmt::Display for Pattern {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "/{}/", self.0.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::Pattern;

    #[test]
    fn displays_source_between_slashes() {
        let pattern = Pattern::new("^admin$").unwrap();
        assert_eq!(pattern.to_string(), "/^admin$/");
        assert_eq!(pattern.as_str(), "^admin$");
    }

    #[test]
    fn invalid_source_is_rejected() {
        let err = Pattern::new("(unclosed").unwrap_err();
        assert!(err.to_string().contains("invalid pattern '(unclosed'"));
    }

    #[test]
    fn matches_anywhere_unless_anchored() {
        let pattern = Pattern::new("min").unwrap();
        assert!(pattern.is_match("admin"));
        assert!(!Pattern::new("^min").unwrap().is_match("admin"));
    }
}
