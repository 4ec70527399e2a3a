//! Compiled rules and the any-of-N match.

use std::{fmt, slice};

use regex::Regex;

use crate::error::{Error, Result};
use crate::glob;

/// How a rule's text is interpreted.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum Syntax {
    /// Whole-string wildcard match.
    Glob,
    /// Regular expression, searched for anywhere in the candidate.
    Regexp,
}

impl Syntax {
    /// Look up a syntax by the name used in `syntax:` directives.
    pub fn from_name(name: &str) -> Option<Self> {
        match name {
            "glob" => Some(Syntax::Glob),
            "regexp" => Some(Syntax::Regexp),
            _ => None,
        }
    }
}

impl Default for Syntax {
    fn default() -> Self {
        Syntax::Glob
    }
}

impl fmt::Display for Syntax {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str(match self {
            Syntax::Glob => "glob",
            Syntax::Regexp => "regexp",
        })
    }
}

/// A single compiled rule.
///
/// Globs are translated to an anchored expression at construction, so both
/// kinds are evaluated the same way afterwards.
#[derive(Clone, Debug)]
pub struct Matcher {
    syntax: Syntax,
    line: usize,
    source: String,
    regex: Regex,
}

impl Matcher {
    /// Compile `pattern` under `syntax`. `line` is the rule's 1-based line
    /// number in its pattern source, used in error messages.
    pub fn new(syntax: Syntax, pattern: &str, line: usize) -> Result<Self> {
        let regex = match syntax {
            Syntax::Glob => glob::translate(pattern).map_err(|err| Error::Glob {
                line,
                text: pattern.to_owned(),
                err,
            })?,
            Syntax::Regexp => pattern.to_owned(),
        };

        Self::with_regex(syntax, pattern, line, &regex)
    }

    fn with_regex(syntax: Syntax, pattern: &str, line: usize, regex: &str) -> Result<Self> {
        let regex = Regex::new(regex).map_err(|err| Error::Regex {
            line,
            text: pattern.to_owned(),
            err,
        })?;

        Ok(Self {
            syntax,
            line,
            source: pattern.to_owned(),
            regex,
        })
    }

    pub fn glob(pattern: &str, line: usize) -> Result<Self> {
        Self::new(Syntax::Glob, pattern, line)
    }

    pub fn regexp(pattern: &str, line: usize) -> Result<Self> {
        Self::new(Syntax::Regexp, pattern, line)
    }

    /// A regexp that must match at the start of the candidate, but may stop
    /// anywhere. Every alternative is held to the start, not just the first.
    pub fn regexp_at_start(pattern: &str, line: usize) -> Result<Self> {
        Self::with_regex(Syntax::Regexp, pattern, line, &format!("^(?:{})", pattern))
    }

    pub fn is_match(&self, candidate: &str) -> bool {
        self.regex.is_match(candidate)
    }

    pub fn syntax(&self) -> Syntax {
        self.syntax
    }

    pub fn line(&self) -> usize {
        self.line
    }

    /// The rule text as written in the pattern source.
    pub fn source(&self) -> &str {
        &self.source
    }
}

/// An ordered list of compiled rules.
#[derive(Clone, Debug, Default)]
pub struct MatcherSet {
    matchers: Vec<Matcher>,
}

impl MatcherSet {
    pub fn new(matchers: Vec<Matcher>) -> Self {
        Self { matchers }
    }

    /// True if any rule matches the candidate. An empty set matches nothing.
    pub fn matches(&self, candidate: &str) -> bool {
        self.matchers.iter().any(|m| {
            let hit = m.is_match(candidate);
            if hit {
                trace!(
                    "{:?} matched {} rule on line {}: {}",
                    candidate,
                    m.syntax,
                    m.line,
                    m.source
                );
            }
            hit
        })
    }

    pub fn len(&self) -> usize {
        self.matchers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.matchers.is_empty()
    }

    pub fn iter(&self) -> slice::Iter<'_, Matcher> {
        self.matchers.iter()
    }
}

impl<'a> IntoIterator for &'a MatcherSet {
    type Item = &'a Matcher;
    type IntoIter = slice::Iter<'a, Matcher>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl std::iter::FromIterator<Matcher> for MatcherSet {
    fn from_iter<I: IntoIterator<Item = Matcher>>(iter: I) -> Self {
        Self::new(iter.into_iter().collect())
    }
}
