//! Pathmatcher: the library
//!
//! This is the library version of the `pathmatcher` CLI tool. It compiles a
//! pattern file of glob and regexp rules and classifies candidate strings,
//! usually file paths, against it.
//!
//! ```
//! use pathmatcher::{filter::{filter, FilterMode}, pattern::compile};
//!
//! let rules = compile(vec!["*.jpg", "syntax: regexp", r".*foo\d+"]).unwrap();
//! let kept = filter(&["foofoo1", "head.jpg", "foo", "bar"], &rules, FilterMode::Whitelist);
//! assert_eq!(kept, vec!["foofoo1", "head.jpg"]);
//! ```

#![deny(unsafe_code)]
#![allow(clippy::default_trait_access, clippy::module_name_repetitions)]

#[macro_use]
extern crate clap;
#[macro_use]
extern crate derive_builder;
#[macro_use]
extern crate log;

pub mod cli;
pub mod config;
pub mod error;
pub mod filter;
pub mod glob;
pub mod inverse;
pub mod matcher;
pub mod pattern;
pub mod run;
pub mod shebang;

pub use run::run;
