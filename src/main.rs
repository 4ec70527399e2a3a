use std::io::Write;

use pathmatcher::{cli, error::Result, run};

fn main() -> Result<()> {
    let (args, loglevel) = cli::get_args()?;

    env_logger::Builder::new()
        .format(|buf, r| writeln!(buf, "*** {}", r.args()))
        .filter(None, loglevel)
        .init();

    run(args)
}
