//! Retention policy over a candidate list.

use std::collections::HashSet;

use crate::error::Result;
use crate::matcher::MatcherSet;
use crate::shebang::HeaderMatcher;

/// Which candidates survive filtering.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum FilterMode {
    /// Keep the candidates that match.
    Whitelist,
    /// Keep the candidates that don't match.
    Blacklist,
}

impl FilterMode {
    /// Whether a candidate with the given match outcome is kept.
    pub fn retains(self, matched: bool) -> bool {
        match self {
            FilterMode::Whitelist => matched,
            FilterMode::Blacklist => !matched,
        }
    }
}

impl Default for FilterMode {
    fn default() -> Self {
        FilterMode::Whitelist
    }
}

/// Filter `candidates` against `set`, preserving order and duplicates.
pub fn filter<'c, S: AsRef<str>>(
    candidates: &'c [S],
    set: &MatcherSet,
    mode: FilterMode,
) -> Vec<&'c str> {
    candidates
        .iter()
        .map(|candidate| candidate.as_ref())
        .filter(|candidate| {
            let keep = mode.retains(set.matches(candidate));
            trace!("{:?}: {}", candidate, if keep { "kept" } else { "dropped" });
            keep
        })
        .collect()
}

/// Filter with an additional interpreter-line match source.
///
/// The rule matches come first, then the header matches are appended. A
/// candidate matched both ways therefore shows up twice in whitelist mode.
/// In blacklist mode the candidates are kept that appear in neither list,
/// so every occurrence of a matched string is dropped.
///
/// Without a header matcher this is the same as [`filter`].
pub fn filter_with_headers<'c, S: AsRef<str>>(
    candidates: &'c [S],
    set: &MatcherSet,
    headers: Option<&HeaderMatcher>,
    mode: FilterMode,
) -> Result<Vec<&'c str>> {
    let headers = match headers {
        Some(headers) => headers,
        None => return Ok(filter(candidates, set, mode)),
    };

    let mut matched = filter(candidates, set, FilterMode::Whitelist);
    let by_header = headers.filter(candidates)?;
    debug!(
        "{} candidates matched rules, {} matched headers",
        matched.len(),
        by_header.len()
    );
    matched.extend(by_header);

    Ok(match mode {
        FilterMode::Whitelist => matched,
        FilterMode::Blacklist => {
            let matched: HashSet<&str> = matched.into_iter().collect();
            candidates
                .iter()
                .map(|candidate| candidate.as_ref())
                .filter(|candidate| !matched.contains(candidate))
                .collect()
        }
    })
}
