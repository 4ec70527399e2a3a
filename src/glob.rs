//! Glob to regular expression translation.
//!
//! Globs match the whole candidate string. Only `*`, `?` and bracket
//! expressions are special; braces, backslashes and everything else stand for
//! themselves. The wildcards know nothing about path hierarchy: `*` runs
//! across `/` like any other character.

use thiserror::Error;

/// A `[` with no closing `]`.
#[derive(Clone, Copy, Debug, Eq, Error, PartialEq)]
#[error("unclosed character class at offset {offset}")]
pub struct UnclosedClass {
    pub offset: usize,
}

/// Translate a glob into an equivalent regular expression.
///
/// The expression is anchored at both ends and lets `.` match newlines.
///
/// # Examples
///
/// ```
/// # use pathmatcher::glob::translate;
/// let re = regex::Regex::new(&translate("*.jpg").unwrap()).unwrap();
/// assert!(re.is_match("holiday/photo.jpg"));
/// assert!(!re.is_match("photo.jpg.bak"));
/// ```
pub fn translate(glob: &str) -> Result<String, UnclosedClass> {
    let mut out = String::with_capacity(glob.len() * 2 + 6);
    out.push_str("(?s)^");

    let mut i = 0;
    while let Some(c) = glob[i..].chars().next() {
        match c {
            '*' => {
                out.push_str(".*");
                i += 1;
            }
            '?' => {
                out.push('.');
                i += 1;
            }
            '[' => {
                let (set, len) = class(&glob[i + 1..]).ok_or(UnclosedClass { offset: i })?;
                out.push_str(&set);
                i += 1 + len;
            }
            _ => {
                let end = i + c.len_utf8();
                out.push_str(&regex::escape(&glob[i..end]));
                i = end;
            }
        }
    }

    out.push('$');
    Ok(out)
}

/// Translate the bracket expression whose body starts at `body`, just past
/// the `[`. Returns the regex class and the number of bytes consumed,
/// closing `]` included.
fn class(body: &str) -> Option<(String, usize)> {
    let negated = body.starts_with('!');
    let start = if negated { 1 } else { 0 };

    // a `]` right after the opening is a member
    let search_from = if body[start..].starts_with(']') {
        start + 1
    } else {
        start
    };
    let end = search_from + body[search_from..].find(']')?;
    let members = &body[start..end];

    let mut out = String::from(if negated { "[^" } else { "[" });
    for (pos, c) in members.char_indices() {
        if c == '-' && pos > 0 && pos + 1 < members.len() {
            out.push('-');
        } else {
            let mut buf = [0; 4];
            out.push_str(&regex::escape(c.encode_utf8(&mut buf)));
        }
    }
    out.push(']');

    Some((out, end + 1))
}
