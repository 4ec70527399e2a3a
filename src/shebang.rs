//! Matching files by their interpreter line.

use std::{
    fs::File,
    io::{BufRead, BufReader},
    path::Path,
};

use regex::bytes::Regex;

use crate::error::{Error, Result};

const MARKER: &[u8] = b"#!/";

/// Matches a candidate path when its file starts with a `#!/` line that
/// contains the given expression.
#[derive(Clone, Debug)]
pub struct HeaderMatcher {
    regex: Regex,
}

impl HeaderMatcher {
    pub fn new(expr: &str) -> Result<Self> {
        let regex = Regex::new(expr).map_err(|err| Error::Shebang {
            text: expr.to_owned(),
            err,
        })?;

        Ok(Self { regex })
    }

    /// Check an already-read first line, without its terminator.
    pub fn is_match_line(&self, line: &[u8]) -> bool {
        line.starts_with(MARKER) && self.regex.is_match(line)
    }

    /// Read the first line of the file at `path` and check it.
    ///
    /// Unreadable files are errors, not non-matches.
    pub fn is_match_file(&self, path: impl AsRef<Path>) -> Result<bool> {
        let path = path.as_ref();
        let read_err = |err| Error::Read {
            path: path.to_owned(),
            err,
        };

        let mut reader = BufReader::new(File::open(path).map_err(read_err)?);
        let mut line = Vec::new();
        reader.read_until(b'\n', &mut line).map_err(read_err)?;

        if line.ends_with(b"\n") {
            line.pop();
            if line.ends_with(b"\r") {
                line.pop();
            }
        }

        let hit = self.is_match_line(&line);
        trace!(
            "{:?}: first line {:?}, match={}",
            path,
            String::from_utf8_lossy(&line),
            hit
        );
        Ok(hit)
    }

    /// The candidates whose files match, in order.
    pub fn filter<'c, S: AsRef<str>>(&self, candidates: &'c [S]) -> Result<Vec<&'c str>> {
        let mut out = Vec::new();
        for candidate in candidates {
            if self.is_match_file(candidate.as_ref())? {
                out.push(candidate.as_ref());
            }
        }

        Ok(out)
    }
}
