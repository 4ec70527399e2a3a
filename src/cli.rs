use std::ffi::{OsStr, OsString};

use clap::{App, Arg, ArgMatches};
use log::LevelFilter;

use crate::config::{Config, ConfigBuilder};
use crate::error::{Error, Result};
use crate::filter::FilterMode;

pub fn app() -> App<'static, 'static> {
    App::new("pathmatcher")
        .version(crate_version!())
        .about("Match paths against glob and regexp pattern files")
        .arg(Arg::with_name("pattern-file")
                 .help("File with the patterns to match")
                 .short("p")
                 .long("pattern-file")
                 .takes_value(true)
                 .value_name("file")
                 .required(true))
        .arg(Arg::with_name("white-list")
                 .help("Keep matching paths and drop the rest (default)")
                 .long("white-list")
                 .conflicts_with("black-list"))
        .arg(Arg::with_name("black-list")
                 .help("Drop matching paths and keep the rest")
                 .long("black-list"))
        .arg(Arg::with_name("separator")
                 .help("Output separator, defaults to newline")
                 .long("separator")
                 .takes_value(true)
                 .allow_hyphen_values(true)
                 .value_name("sep"))
        .arg(Arg::with_name("shebang")
                 .help("Also match files whose #!/ line contains this regex")
                 .long("shebang")
                 .takes_value(true)
                 .value_name("regex"))
        .arg(Arg::with_name("inverse")
                 .help("Read 'pattern payload' rules and print the payloads of matching rules")
                 .long("inverse")
                 .conflicts_with_all(&["white-list", "black-list", "shebang"]))
        .arg(Arg::with_name("verbose")
                 .help("Print debugging messages to stderr")
                 .short("v")
                 .long("verbose"))
        .arg(Arg::with_name("paths")
                 .help("Paths to match against, defaults to reading lines from stdin")
                 .multiple(true))
}

pub fn get_args() -> Result<(Config, LevelFilter)> {
    get_args_from(std::env::args_os())
}

/// Parse a full command line, program name first. Exits on usage errors.
pub fn get_args_from<I, T>(args: I) -> Result<(Config, LevelFilter)>
where
    I: IntoIterator<Item = T>,
    T: Into<OsString> + Clone,
{
    let matches = app().get_matches_from(args);
    from_matches(&matches)
}

pub fn from_matches(args: &ArgMatches) -> Result<(Config, LevelFilter)> {
    let mut builder = ConfigBuilder::default();

    if let Some(file) = args.value_of_os("pattern-file") {
        builder.pattern_file(file);
    }

    if args.is_present("black-list") {
        builder.mode(FilterMode::Blacklist);
    }

    if let Some(sep) = utf8_value(args, "separator")? {
        builder.separator(sep);
    }

    if let Some(shebang) = utf8_value(args, "shebang")? {
        builder.shebang(shebang);
    }

    let paths: Vec<String> = args
        .values_of_os("paths")
        .map(|values| values.map(path_lossy).collect())
        .unwrap_or_default();

    let config = builder
        .inverse(args.is_present("inverse"))
        .paths(paths)
        .build()?;

    let loglevel = if args.is_present("verbose") {
        LevelFilter::Debug
    } else {
        LevelFilter::Warn
    };

    Ok((config, loglevel))
}

fn utf8_value<'a>(args: &'a ArgMatches, name: &str) -> Result<Option<&'a str>> {
    args.value_of_os(name)
        .map(|value| {
            value
                .to_str()
                .ok_or_else(|| Error::Config(format!("--{} is not valid UTF-8", name)))
        })
        .transpose()
}

// Rules are matched against text, so undecodable bytes become U+FFFD
fn path_lossy(path: &OsStr) -> String {
    let lossy = path.to_string_lossy();
    if path.to_str().is_none() {
        warn!("path {:?} is not valid UTF-8, matching it as {:?}", path, lossy);
    }
    lossy.into_owned()
}
