use std::sync::Mutex;

use crate::domain::{AppError, Environ, Invocation};
use crate::ports::ProcessLauncher;

/// Launcher double that records requests instead of replacing the process.
#[derive(Default)]
pub struct RecordingLauncher {
    pub launched: Mutex<Vec<(Invocation, Environ)>>,
    fail: bool,
}

impl RecordingLauncher {
    pub fn new() -> Self {
        Self::default()
    }

    /// A launcher whose every launch fails as if the command was not found.
    pub fn failing() -> Self {
        Self { fail: true, ..Self::default() }
    }

    pub fn launches(&self) -> Vec<(Invocation, Environ)> {
        self.launched.lock().unwrap().clone()
    }
}

impl ProcessLauncher for RecordingLauncher {
    fn launch(&self, invocation: &Invocation, environ: &Environ) -> Result<(), AppError> {
        self.launched.lock().unwrap().push((invocation.clone(), environ.clone()));
        if self.fail {
            return Err(AppError::launch(invocation.display_program(), "not found in PATH"));
        }
        Ok(())
    }
}
