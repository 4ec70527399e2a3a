use std::{fmt, io, path::PathBuf};

use thiserror::Error;

pub type Result<T> = ::std::result::Result<T, Error>;

/// The broad classes of failure, for callers that only care about the category.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum ErrorKind {
    /// The pattern file or the run options are malformed.
    Configuration,
    /// A rule could not be compiled as a glob or a regular expression.
    PatternSyntax,
    /// A file or stream could not be read or written.
    Io,
}

#[derive(Error)]
#[non_exhaustive]
pub enum Error {
    /// A `syntax` directive names something other than `glob` or `regexp`.
    #[error("line {line}: unknown syntax `{value}` in `{text}`")]
    UnknownSyntax {
        line: usize,
        text: String,
        value: String,
    },

    /// A `syntax` directive without exactly one value.
    #[error("line {line}: malformed syntax directive `{text}`")]
    MalformedDirective { line: usize, text: String },

    /// An inverse rule with a pattern but nothing to emit.
    #[error("line {line}: rule `{text}` has no payload")]
    MissingPayload { line: usize, text: String },

    /// The options given to a run cannot be used together.
    #[error("invalid configuration: {0}")]
    Config(String),

    #[error("line {line}: invalid glob `{text}`: {err}")]
    Glob {
        line: usize,
        text: String,
        #[source]
        err: crate::glob::UnclosedClass,
    },

    #[error("line {line}: invalid regular expression `{text}`: {err}")]
    Regex {
        line: usize,
        text: String,
        #[source]
        err: regex::Error,
    },

    /// The shebang expression given on the command line does not compile.
    #[error("invalid shebang expression `{text}`: {err}")]
    Shebang {
        text: String,
        #[source]
        err: regex::Error,
    },

    #[error("couldn't read '{}': {err}", path.display())]
    Read {
        path: PathBuf,
        #[source]
        err: io::Error,
    },

    #[error("I/O error: {0}")]
    Io(#[from] io::Error),
}

impl Error {
    pub fn kind(&self) -> ErrorKind {
        match self {
            Error::UnknownSyntax { .. }
            | Error::MalformedDirective { .. }
            | Error::MissingPayload { .. }
            | Error::Config(_) => ErrorKind::Configuration,
            Error::Glob { .. } | Error::Regex { .. } | Error::Shebang { .. } => {
                ErrorKind::PatternSyntax
            }
            Error::Read { .. } | Error::Io(_) => ErrorKind::Io,
        }
    }
}

impl From<String> for Error {
    fn from(err: String) -> Self {
        Error::Config(err)
    }
}

// main() prints errors with Debug
impl fmt::Debug for Error {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        fmt::Display::fmt(self, f)
    }
}
