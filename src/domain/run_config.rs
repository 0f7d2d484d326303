use std::ffi::OsString;

use super::FileSpec;

/// Trailing command to replace the process with.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Invocation {
    /// Program name as given; also passed as `argv[0]`.
    pub program: OsString,
    pub args: Vec<OsString>,
}

impl Invocation {
    /// Build from the trailing command tokens. Returns `None` for an empty list.
    pub fn from_tokens(tokens: Vec<OsString>) -> Option<Self> {
        let mut tokens = tokens.into_iter();
        let program = tokens.next()?;
        Some(Self { program, args: tokens.collect() })
    }

    pub fn display_program(&self) -> String {
        self.program.to_string_lossy().into_owned()
    }
}

/// Everything a run needs, resolved from the command line.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RunConfig {
    /// Files to generate, in command-line order.
    pub files: Vec<FileSpec>,
    /// Overwrite outputs that already exist.
    pub force: bool,
    pub command: Option<Invocation>,
}
