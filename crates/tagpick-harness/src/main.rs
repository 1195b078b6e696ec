#![forbid(unsafe_code)]

//! Tag picker harness.
//!
//! Hosts one or more tag pickers, runs an interaction script against them,
//! and prints each picker's hidden form value plus the submission outcome.
//!
//! # Running
//!
//! ```sh
//! printf 'open\ntoggle 2\nsubmit\n' | cargo run -p tagpick-harness
//! TAGPICK_WIDGETS=2 TAGPICK_SCRIPT_FILE=demo.script cargo run -p tagpick-harness
//! ```
//!
//! Configuration is read from `TAGPICK_*` environment variables (see
//! `tagpick_harness::config`). Logs go to stderr, filtered by `RUST_LOG`.

use std::io::{self, Read, Write};

use tagpick_harness::{HarnessConfig, HarnessError, Session, load_tags, parse_script};

fn run() -> Result<(), HarnessError> {
    let config = HarnessConfig::from_env()?;
    tagpick_core::logging::init_subscriber("info", config.log_json);
    tagpick_core::info!(
        widgets = config.widgets,
        max_chips = config.max_chips,
        preseed = config.preseed.len(),
        "starting tag picker harness"
    );

    let tags = load_tags(config.tags_file.as_deref())?;
    let script_text = match &config.script_file {
        Some(path) => std::fs::read_to_string(path)?,
        None => {
            let mut text = String::new();
            io::stdin().read_to_string(&mut text)?;
            text
        }
    };
    let script = parse_script(&script_text)?;

    let mut session = Session::new(&tags, &config);
    let stdout = io::stdout();
    let mut out = stdout.lock();
    session.run(&script, &mut out)?;
    session.write_summary(&mut out)?;
    out.flush()?;

    tagpick_core::info!(
        commands = script.len(),
        submissions = session.submissions().len(),
        "harness finished"
    );
    Ok(())
}

fn main() -> io::Result<()> {
    run().map_err(|err| {
        tagpick_core::error!(%err, "harness failed");
        io::Error::from(err)
    })
}
