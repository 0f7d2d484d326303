//! CLI Adapter.

use std::ffi::OsString;

use clap::error::ErrorKind;
use clap::{CommandFactory, Parser};
use log::debug;

use crate::EXIT_CODE_ERROR;
use crate::domain::{FileSpec, Invocation, RunConfig};

#[derive(Parser, Debug)]
#[command(name = "reconf")]
#[command(version)]
#[command(about = "Generate files from templates and run command", long_about = None)]
struct Cli {
    /// Generate FILE (if it does not exist) by rendering FILE.template
    ///
    /// The form TEMPLATE:FILE names the template file explicitly.
    #[arg(short = 'w', long = "render", value_name = "FILE")]
    render: Vec<String>,
    /// Force generating files, overwriting existing ones
    #[arg(short, long)]
    force: bool,
    /// Command to execute; without one reconf just generates files and exits
    #[arg(value_name = "COMMAND", trailing_var_arg = true)]
    command: Vec<OsString>,
}

/// Resolve raw process arguments (including the program name) into a run configuration.
///
/// Options come first: everything from the first positional token on is the
/// command, even tokens that look like flags.
pub fn resolve_config<I, T>(args: I) -> Result<RunConfig, clap::Error>
where
    I: IntoIterator<Item = T>,
    T: Into<OsString> + Clone,
{
    let cli = Cli::try_parse_from(args)?;

    let files = cli
        .render
        .iter()
        .map(|raw| FileSpec::new(raw))
        .collect::<Result<Vec<_>, _>>()
        .map_err(|err| Cli::command().error(ErrorKind::InvalidValue, err.to_string()))?;

    Ok(RunConfig { files, force: cli.force, command: Invocation::from_tokens(cli.command) })
}

/// Entry point for the CLI. Returns the process exit code.
///
/// When a command is given and launched successfully this never returns.
pub fn run<I, T>(args: I) -> i32
where
    I: IntoIterator<Item = T>,
    T: Into<OsString> + Clone,
{
    let config = match resolve_config(args) {
        Ok(config) => config,
        Err(err) => {
            let _ = err.print();
            return if err.use_stderr() { EXIT_CODE_ERROR } else { 0 };
        }
    };

    match crate::run(config) {
        Ok(outcome) => {
            debug!(
                "rendered {} file(s), skipped {} existing",
                outcome.rendered.len(),
                outcome.skipped.len()
            );
            0
        }
        Err(e) => {
            eprintln!("error: {}", e);
            EXIT_CODE_ERROR
        }
    }
}
