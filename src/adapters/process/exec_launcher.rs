use std::process::Command;

use log::debug;

use crate::domain::{AppError, Environ, Invocation};
use crate::ports::ProcessLauncher;

use super::resolve_executable;

/// Launcher that replaces the running process with the command.
///
/// On unix this is a real `execve`: PID and open descriptors carry over and
/// nothing after a successful launch runs. Elsewhere the command is spawned,
/// waited for, and its exit status becomes ours.
#[derive(Debug, Default, Clone, Copy)]
pub struct ExecLauncher;

impl ExecLauncher {
    pub fn new() -> Self {
        Self
    }
}

impl ProcessLauncher for ExecLauncher {
    fn launch(&self, invocation: &Invocation, environ: &Environ) -> Result<(), AppError> {
        let executable = resolve_executable(&invocation.program, environ.get("PATH"))?;
        debug!(
            "launching {} ({}) with {} argument(s)",
            invocation.display_program(),
            executable.display(),
            invocation.args.len()
        );

        let mut command = Command::new(&executable);
        command.args(&invocation.args).env_clear().envs(environ.iter());

        Err(replace_process(command, invocation))
    }
}

#[cfg(unix)]
fn replace_process(mut command: Command, invocation: &Invocation) -> AppError {
    use std::os::unix::process::CommandExt;

    command.arg0(&invocation.program);
    let err = command.exec();
    AppError::launch(invocation.display_program(), err.to_string())
}

#[cfg(not(unix))]
fn replace_process(mut command: Command, invocation: &Invocation) -> AppError {
    match command.status() {
        Ok(status) => std::process::exit(status.code().unwrap_or(crate::EXIT_CODE_ERROR)),
        Err(err) => AppError::launch(invocation.display_program(), err.to_string()),
    }
}
