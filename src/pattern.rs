//! string or precompiled patterns for name based removal
use regex::Regex;

/// A name pattern accepted by
/// [AlertGroup::remove_re][crate::AlertGroup::remove_re].
///
/// Raw strings are compiled when the operation runs, already compiled
/// [Regex] values pass through untouched. Matching is an unanchored search
/// over the entry name.
#[derive(Clone, Debug)]
pub enum NamePattern {
    /// a pattern that still has to be compiled
    Raw(String),
    /// an already compiled pattern
    Compiled(Regex),
}

impl NamePattern {
    /// normalizes to a compiled [Regex]
    pub fn compile(self) -> Result<Regex, regex::Error> {
        match self {
            NamePattern::Raw(pattern) => Regex::new(&pattern),
            NamePattern::Compiled(regex) => Ok(regex),
        }
    }
}

impl From<&str> for NamePattern {
    fn from(pattern: &str) -> Self {
        NamePattern::Raw(pattern.to_owned())
    }
}

impl From<String> for NamePattern {
    fn from(pattern: String) -> Self {
        NamePattern::Raw(pattern)
    }
}

impl From<Regex> for NamePattern {
    fn from(regex: Regex) -> Self {
        NamePattern::Compiled(regex)
    }
}
