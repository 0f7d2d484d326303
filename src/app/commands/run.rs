//! Generate every requested file, then hand over to the command.

use std::path::{Path, PathBuf};

use log::debug;

use crate::app::AppContext;
use crate::domain::{AppError, RunConfig};
use crate::ports::ProcessLauncher;

use super::generate::generate;

/// What a run did before handing over (or finishing).
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct RunOutcome {
    /// Outputs written, in command-line order.
    pub rendered: Vec<PathBuf>,
    /// Outputs left untouched because they already existed.
    pub skipped: Vec<PathBuf>,
    /// Whether the launcher was invoked and returned control.
    pub launched: bool,
}

/// Execute a run.
///
/// Files are processed in order and the first error aborts the run, so later
/// files and the command are skipped. The command is launched only after all
/// files have been handled.
pub fn execute<L: ProcessLauncher>(
    ctx: &AppContext<L>,
    config: &RunConfig,
) -> Result<RunOutcome, AppError> {
    let mut outcome = RunOutcome::default();

    for spec in &config.files {
        let output = spec.output_path();
        if !config.force && output_exists(&output)? {
            debug!("{} exists, skipping {}", output.display(), spec);
            outcome.skipped.push(output);
            continue;
        }
        outcome.rendered.push(generate(spec, ctx.vars(), ctx.helpers())?);
    }

    let Some(invocation) = &config.command else {
        return Ok(outcome);
    };

    ctx.launcher().launch(invocation, ctx.environ())?;
    outcome.launched = true;
    Ok(outcome)
}

/// Whether `output` exists. Anything other than "not found" (e.g. a
/// permission error on a parent directory) is reported, not treated as absent.
fn output_exists(output: &Path) -> Result<bool, AppError> {
    output.try_exists().map_err(|source| AppError::Write { path: output.to_path_buf(), source })
}
