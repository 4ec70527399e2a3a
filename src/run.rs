use std::{
    borrow::Cow,
    io::{self, BufRead, Write},
};

use crate::config::Config;
use crate::error::Result;
use crate::filter::filter_with_headers;
use crate::inverse::InverseRules;
use crate::pattern::load_patterns;
use crate::shebang::HeaderMatcher;

/// Run with stdin and stdout.
pub fn run(config: Config) -> Result<()> {
    let stdin = io::stdin();
    let stdout = io::stdout();
    run_with(&config, stdin.lock(), stdout.lock())
}

/// Run reading candidates from `input` (when the config has none) and
/// writing results to `output`.
///
/// Patterns are compiled before any candidate is read, so a bad pattern file
/// fails without consuming input.
pub fn run_with(config: &Config, input: impl BufRead, output: impl Write) -> Result<()> {
    if config.inverse {
        let rules = InverseRules::load(&config.pattern_file)?;
        let candidates = load_candidates(config, input)?;
        let results = rules.apply(&candidates);
        info!(
            "{} rules emitted {} payloads for {} candidates",
            rules.len(),
            results.len(),
            candidates.len()
        );
        return write_results(output, &results, &config.separator);
    }

    let set = load_patterns(&config.pattern_file)?;
    let headers = config
        .shebang
        .as_deref()
        .map(HeaderMatcher::new)
        .transpose()?;
    let candidates = load_candidates(config, input)?;

    let results = filter_with_headers(&candidates, &set, headers.as_ref(), config.mode)?;
    info!(
        "{:?} kept {} of {} candidates",
        config.mode,
        results.len(),
        candidates.len()
    );
    write_results(output, &results, &config.separator)
}

fn load_candidates(config: &Config, input: impl BufRead) -> Result<Vec<String>> {
    if config.paths.is_empty() {
        debug!("reading candidates from input");
        read_candidates(input)
    } else {
        Ok(config.paths.clone())
    }
}

/// One candidate per line, without line terminators. Empty lines are kept.
///
/// Lines that aren't valid UTF-8 are decoded lossily rather than rejected.
pub fn read_candidates(mut input: impl BufRead) -> Result<Vec<String>> {
    let mut candidates = Vec::new();
    let mut line = Vec::new();

    while input.read_until(b'\n', &mut line)? > 0 {
        if line.ends_with(b"\n") {
            line.pop();
            if line.ends_with(b"\r") {
                line.pop();
            }
        }

        let candidate = String::from_utf8_lossy(&line);
        if let Cow::Owned(_) = candidate {
            warn!(
                "input line {} is not valid UTF-8, matching it as {:?}",
                candidates.len() + 1,
                candidate
            );
        }
        candidates.push(candidate.into_owned());
        line.clear();
    }

    Ok(candidates)
}

/// Write results joined by `separator`, then a newline. Writes nothing at all
/// when there are no results.
pub fn write_results<S: AsRef<str>>(
    mut output: impl Write,
    results: &[S],
    separator: &str,
) -> Result<()> {
    if results.is_empty() {
        return Ok(());
    }

    for (i, result) in results.iter().enumerate() {
        if i > 0 {
            output.write_all(separator.as_bytes())?;
        }
        output.write_all(result.as_ref().as_bytes())?;
    }

    output.write_all(b"\n")?;
    output.flush()?;
    Ok(())
}
