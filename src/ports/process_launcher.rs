use crate::domain::{AppError, Environ, Invocation};

/// Port for handing the process over to the trailing command.
pub trait ProcessLauncher {
    /// Resolve `invocation` and replace the current process image with it,
    /// using `environ` as the new program's environment.
    ///
    /// A real launcher only returns on failure. Test doubles may return `Ok`.
    fn launch(&self, invocation: &Invocation, environ: &Environ) -> Result<(), AppError>;
}
