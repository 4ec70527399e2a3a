//! Configuration for a pathmatcher run.
//!
//! The [`Config`] struct is not constructable, use [`ConfigBuilder`].
//!
//! # Examples
//!
//! ```
//! # use pathmatcher::config::ConfigBuilder;
//! ConfigBuilder::default()
//!     .pattern_file("patterns.txt")
//!     .paths(vec!["photo.jpg".to_string()])
//!     .build()
//!     .expect("mission failed");
//! ```

use std::path::PathBuf;

use crate::filter::FilterMode;

/// Arguments to a run
#[derive(Builder, Clone, Debug)]
#[builder(setter(into, strip_option))]
#[builder(build_fn(validate = "Self::validate"))]
#[non_exhaustive]
pub struct Config {
    /// File with the rules to match against.
    pub pattern_file: PathBuf,
    /// Keep matching candidates, or keep the rest.
    #[builder(default)]
    pub mode: FilterMode,
    /// Placed between results in the output.
    #[builder(default = "String::from(\"\\n\")")]
    pub separator: String,
    /// Also match files whose `#!/` line contains this expression.
    #[builder(default)]
    pub shebang: Option<String>,
    /// Treat the pattern file as pattern/payload pairs and output payloads.
    #[builder(default)]
    pub inverse: bool,
    /// Candidates to match. If empty, candidates are read from stdin.
    #[builder(default)]
    pub paths: Vec<String>,
}

impl ConfigBuilder {
    fn validate(&self) -> Result<(), String> {
        if self.inverse != Some(true) {
            return Ok(());
        }

        if let Some(Some(_)) = self.shebang {
            return Err("shebang matching cannot be used in inverse mode".into());
        }

        if self.mode == Some(FilterMode::Blacklist) {
            return Err("blacklist mode cannot be used in inverse mode".into());
        }

        Ok(())
    }
}
