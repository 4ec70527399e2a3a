//! Pattern files: line classification and compilation.
//!
//! A pattern file is read top to bottom. Blank lines and lines starting with
//! `#` are skipped, `syntax: glob` / `syntax: regexp` switch how the following
//! rules are read, and every other line is a rule. Rules default to glob
//! syntax.
//!
//! ```text
//! # pictures
//! *.jpg
//!
//! syntax: regexp
//! .*foo\d+
//! ```

use std::{fs, io::BufRead, path::Path};

use crate::error::{Error, Result};
use crate::matcher::{Matcher, MatcherSet, Syntax};

/// What a single pattern line means.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum Line<'a> {
    Blank,
    Comment,
    /// Switch to the given syntax for the following rules.
    Directive(Syntax),
    /// A rule, trimmed.
    Rule(&'a str),
}

/// Classify one raw line. `number` is 1-based and only used for errors.
pub fn classify(number: usize, raw: &str) -> Result<Line<'_>> {
    let line = raw.trim();

    if line.is_empty() {
        return Ok(Line::Blank);
    }

    if line.starts_with('#') {
        return Ok(Line::Comment);
    }

    if is_directive(line) {
        return parse_directive(number, line).map(Line::Directive);
    }

    Ok(Line::Rule(line))
}

fn is_directive(line: &str) -> bool {
    match line.strip_prefix("syntax") {
        Some(rest) => {
            rest.is_empty() || rest.starts_with(|c: char| c == ':' || c.is_whitespace())
        }
        None => false,
    }
}

fn parse_directive(number: usize, line: &str) -> Result<Syntax> {
    let spaced = line.replace(':', " ");
    let mut words = spaced.split_whitespace().skip(1);

    match (words.next(), words.next()) {
        (Some(value), None) => Syntax::from_name(value).ok_or_else(|| Error::UnknownSyntax {
            line: number,
            text: line.to_owned(),
            value: value.to_owned(),
        }),
        _ => Err(Error::MalformedDirective {
            line: number,
            text: line.to_owned(),
        }),
    }
}

/// Process one line given the syntax in effect before it.
///
/// Returns the syntax in effect after the line, and the rule compiled from
/// it, if it was a rule.
pub fn step(syntax: Syntax, number: usize, raw: &str) -> Result<(Syntax, Option<Matcher>)> {
    match classify(number, raw)? {
        Line::Blank | Line::Comment => Ok((syntax, None)),
        Line::Directive(next) => {
            trace!("line {}: switching to {} syntax", number, next);
            Ok((next, None))
        }
        Line::Rule(text) => {
            let matcher = Matcher::new(syntax, text, number)?;
            debug!("line {}: compiled {} rule {:?}", number, syntax, text);
            Ok((syntax, Some(matcher)))
        }
    }
}

/// Compile a sequence of pattern lines.
///
/// Stops at the first bad line; no partial set is ever returned.
pub fn compile<I, S>(lines: I) -> Result<MatcherSet>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let (_, matchers) = lines.into_iter().enumerate().try_fold(
        (Syntax::default(), Vec::new()),
        |(syntax, mut matchers), (i, line)| -> Result<_> {
            let (syntax, matcher) = step(syntax, i + 1, line.as_ref())?;
            matchers.extend(matcher);
            Ok((syntax, matchers))
        },
    )?;

    Ok(MatcherSet::new(matchers))
}

/// Compile the pattern file at `path`.
pub fn load_patterns(path: impl AsRef<Path>) -> Result<MatcherSet> {
    let path = path.as_ref();
    debug!("loading patterns from {:?}", path);

    let contents = fs::read_to_string(path).map_err(|err| Error::Read {
        path: path.to_owned(),
        err,
    })?;

    let set = compile(contents.lines())?;
    debug!("loaded {} rules from {:?}", set.len(), path);
    Ok(set)
}

/// Compile patterns read from any buffered reader.
pub fn load_patterns_from(reader: impl BufRead) -> Result<MatcherSet> {
    let lines = reader.lines().collect::<std::io::Result<Vec<_>>>()?;
    compile(lines)
}
