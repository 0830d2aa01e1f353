use regex::Regex;

use crate::error::{Error, Result};

/// String-or-regex matcher used for import paths, specifier names and aliases.
///
/// `Any` is the wildcard: it stands in for a "falsy" matcher and accepts everything.
#[derive(Debug, Clone, Default)]
pub enum Matcher {
    Exact(String),
    Pattern(Regex),
    #[default]
    Any,
}

impl Matcher {
    pub fn exact(value: impl Into<String>) -> Self {
        Matcher::Exact(value.into())
    }

    /// Compiles `pattern` as a regular expression.
    pub fn pattern(pattern: &str) -> Result<Self> {
        Regex::new(pattern)
            .map(Matcher::Pattern)
            .map_err(|source| Error::InvalidPattern {
                pattern: pattern.to_string(),
                source,
            })
    }

    pub fn is_any(&self) -> bool {
        matches!(self, Matcher::Any)
    }

    pub fn matches(&self, input: &str) -> bool {
        match self {
            Matcher::Exact(s) => s == input,
            Matcher::Pattern(re) => re.is_match(input),
            Matcher::Any => true,
        }
    }

    /// The literal text of an `Exact` matcher, used when a new import has to be
    /// created from the matcher itself.
    pub fn as_exact(&self) -> Option<&str> {
        match self {
            Matcher::Exact(s) => Some(s),
            _ => None,
        }
    }
}

impl From<&str> for Matcher {
    fn from(value: &str) -> Self {
        if value.is_empty() {
            Matcher::Any
        } else {
            Matcher::Exact(value.to_string())
        }
    }
}

impl From<String> for Matcher {
    fn from(value: String) -> Self {
        Matcher::from(value.as_str())
    }
}

impl From<Regex> for Matcher {
    fn from(value: Regex) -> Self {
        Matcher::Pattern(value)
    }
}

impl<T: Into<Matcher>> From<Option<T>> for Matcher {
    fn from(value: Option<T>) -> Self {
        value.map(Into::into).unwrap_or(Matcher::Any)
    }
}

/// Tests `input` against `matcher`. An absent or empty input never matches, not even
/// the wildcard.
///
/// `Matcher::Exact` compares whole strings, it is not a substring search. Use
/// `Matcher::pattern` for partial matches.
pub fn is_string_matching(input: Option<&str>, matcher: &Matcher) -> bool {
    match input {
        Some(s) if !s.is_empty() => matcher.matches(s),
        _ => false,
    }
}
