//! Inverse matching: rules that emit a payload instead of the candidate.
//!
//! Each rule line is a pattern followed by whitespace and a payload:
//!
//! ```text
//! *.jpg jabba dabba
//! ^.*foo\d+ foobar
//! ```
//!
//! There are no `syntax:` directives here. A pattern that starts with `^` is
//! a regular expression, anything else is a glob. Regular expressions here
//! must match at the start of the candidate, alternatives included.

use std::{fs, io::BufRead, path::Path, slice};

use crate::error::{Error, Result};
use crate::matcher::{Matcher, Syntax};

/// A compiled pattern and the payload it emits on a match.
#[derive(Clone, Debug)]
pub struct InverseRule {
    matcher: Matcher,
    payload: String,
}

impl InverseRule {
    /// Parse one raw line. Blank lines and comments yield `None`.
    pub fn parse(number: usize, raw: &str) -> Result<Option<Self>> {
        let line = raw.trim();
        if line.is_empty() || line.starts_with('#') {
            return Ok(None);
        }

        let (pattern, payload) = line
            .split_once(char::is_whitespace)
            .ok_or_else(|| Error::MissingPayload {
                line: number,
                text: line.to_owned(),
            })?;

        let matcher = if pattern.starts_with('^') {
            Matcher::regexp_at_start(pattern, number)?
        } else {
            Matcher::glob(pattern, number)?
        };
        let syntax = matcher.syntax();
        debug!(
            "line {}: compiled {} rule {:?} emitting {:?}",
            number,
            syntax,
            pattern,
            payload.trim_start()
        );

        Ok(Some(Self {
            matcher,
            payload: payload.trim_start().to_owned(),
        }))
    }

    pub fn matcher(&self) -> &Matcher {
        &self.matcher
    }

    pub fn payload(&self) -> &str {
        &self.payload
    }
}

/// The rules of an inverse pattern file, in file order.
#[derive(Clone, Debug, Default)]
pub struct InverseRules {
    rules: Vec<InverseRule>,
}

impl InverseRules {
    pub fn compile<I, S>(lines: I) -> Result<Self>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut rules = Vec::new();
        for (i, line) in lines.into_iter().enumerate() {
            rules.extend(InverseRule::parse(i + 1, line.as_ref())?);
        }

        Ok(Self { rules })
    }

    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        debug!("loading inverse rules from {:?}", path);

        let contents = fs::read_to_string(path).map_err(|err| Error::Read {
            path: path.to_owned(),
            err,
        })?;

        Self::compile(contents.lines())
    }

    pub fn load_from(reader: impl BufRead) -> Result<Self> {
        let lines = reader.lines().collect::<std::io::Result<Vec<_>>>()?;
        Self::compile(lines)
    }

    /// Payloads of every rule matching one candidate, in rule order.
    pub fn emit(&self, candidate: &str) -> Vec<&str> {
        self.rules
            .iter()
            .filter(|rule| rule.matcher.is_match(candidate))
            .map(InverseRule::payload)
            .collect()
    }

    /// Payloads for a whole candidate list.
    ///
    /// Rule-major: every match of the first rule, in candidate order, comes
    /// before any match of the second rule.
    pub fn apply<'r, S: AsRef<str>>(&'r self, candidates: &[S]) -> Vec<&'r str> {
        let mut out = Vec::new();
        for rule in &self.rules {
            for candidate in candidates {
                if rule.matcher.is_match(candidate.as_ref()) {
                    trace!("{:?} emits {:?}", candidate.as_ref(), rule.payload);
                    out.push(rule.payload());
                }
            }
        }

        out
    }

    pub fn len(&self) -> usize {
        self.rules.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }

    pub fn iter(&self) -> slice::Iter<'_, InverseRule> {
        self.rules.iter()
    }
}
