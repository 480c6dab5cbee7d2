//! Expected bytecode language level.

use std::fmt;
use std::str::FromStr;

/// Bytecode major version a run expects every class to declare.
///
/// Comparison is exact string equality against what the disassembler
/// reports: `"52"` does not match `"052"` and no numeric coercion happens.
///
/// # Examples
///
/// ```
/// use jarlevel_core::LanguageLevel;
///
/// let level = LanguageLevel::new("52");
/// assert!(level.matches("52"));
/// assert!(!level.matches("55"));
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct LanguageLevel(String);

impl LanguageLevel {
    /// Wraps a language level token verbatim.
    #[must_use]
    pub fn new(level: impl Into<String>) -> Self {
        Self(level.into())
    }

    /// Returns the token as given.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Returns `true` if `found` is exactly this level.
    #[must_use]
    pub fn matches(&self, found: &str) -> bool {
        self.0 == found
    }
}

impl fmt::Display for LanguageLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl FromStr for LanguageLevel {
    type Err = std::convert::Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(Self::new(s))
    }
}

impl From<&str> for LanguageLevel {
    fn from(level: &str) -> Self {
        Self::new(level)
    }
}

impl From<String> for LanguageLevel {
    fn from(level: String) -> Self {
        Self(level)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_exact_match_only() {
        let level = LanguageLevel::new("52");
        assert!(level.matches("52"));
        assert!(!level.matches("052"));
        assert!(!level.matches("52 "));
        assert!(!level.matches("55"));
    }

    #[test]
    fn test_display_is_verbatim() {
        assert_eq!(LanguageLevel::from("61").to_string(), "61");
        assert_eq!(LanguageLevel::new("java8").as_str(), "java8");
    }

    #[test]
    fn test_from_str() {
        let level: LanguageLevel = "55".parse().unwrap_or_else(|e| match e {});
        assert_eq!(level, LanguageLevel::new("55"));
    }
}
