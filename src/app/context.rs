use crate::adapters::template::Helpers;
use crate::domain::{Environ, Vars};
use crate::ports::ProcessLauncher;

/// Application context holding the environment snapshot and dependencies for a run.
pub struct AppContext<L: ProcessLauncher> {
    environ: Environ,
    vars: Vars,
    helpers: Helpers,
    launcher: L,
}

impl<L: ProcessLauncher> AppContext<L> {
    /// Create a context with the standard helper table for `environ`.
    pub fn new(environ: Environ, launcher: L) -> Self {
        let vars = Vars::from_environ(&environ);
        let helpers = Helpers::standard(&environ);
        Self { environ, vars, helpers, launcher }
    }

    /// Replace the helper table.
    pub fn with_helpers(mut self, helpers: Helpers) -> Self {
        self.helpers = helpers;
        self
    }

    pub fn environ(&self) -> &Environ {
        &self.environ
    }

    pub fn vars(&self) -> &Vars {
        &self.vars
    }

    pub fn helpers(&self) -> &Helpers {
        &self.helpers
    }

    pub fn launcher(&self) -> &L {
        &self.launcher
    }
}
