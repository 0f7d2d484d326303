//! reconf: render configuration files from templates populated with
//! environment variables, then replace the process with the real command.

pub mod adapters;
pub mod app;
pub mod domain;
pub mod ports;

#[cfg(test)]
pub(crate) mod testing;

use adapters::process::ExecLauncher;
use app::AppContext;

pub use adapters::template::Helpers;
pub use app::commands::generate::generate;
pub use app::commands::run::RunOutcome;
pub use domain::{AppError, Environ, FileSpec, FileTargets, Invocation, RunConfig, Vars};

/// Exit code for every usage, generation, or launch failure.
pub const EXIT_CODE_ERROR: i32 = 120;

/// Generate the files of `config`, then replace this process with its command.
///
/// The process environment is captured once here and used both for templates
/// and for the launched command. Returns only when there is no command to
/// launch or when something failed.
pub fn run(config: RunConfig) -> Result<RunOutcome, AppError> {
    let ctx = AppContext::new(Environ::capture(), ExecLauncher::new());
    app::commands::run::execute(&ctx, &config)
}
