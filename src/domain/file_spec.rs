use std::fmt;
use std::path::PathBuf;

use crate::domain::AppError;

/// Suffix appended to an output path to locate its template.
pub const TEMPLATE_SUFFIX: &str = ".template";

/// Separator of the explicit `<template>:<output>` form.
pub const TEMPLATE_SEPARATOR: char = ':';

/// One `--render` request as given on the command line.
///
/// The raw token is kept as-is and only split into paths when the file is
/// about to be generated.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileSpec(String);

/// Template and output locations of a [`FileSpec`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileTargets {
    pub template: PathBuf,
    pub output: PathBuf,
}

impl FileSpec {
    /// Validate and create a new instance.
    pub fn new(raw: &str) -> Result<Self, AppError> {
        if raw.is_empty() {
            return Err(AppError::usage("--render requires a non-empty file name"));
        }
        Ok(Self(raw.to_string()))
    }

    /// Return the raw token.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Split the token into template and output paths.
    ///
    /// `out` maps to `out.template` -> `out`; `tmpl:out` maps to `tmpl` -> `out`.
    /// Parts after a second separator are ignored.
    pub fn targets(&self) -> FileTargets {
        if self.0.contains(TEMPLATE_SEPARATOR) {
            let mut parts = self.0.split(TEMPLATE_SEPARATOR);
            let template = parts.next().unwrap_or_default();
            let output = parts.next().unwrap_or_default();
            return FileTargets { template: PathBuf::from(template), output: PathBuf::from(output) };
        }

        FileTargets {
            template: PathBuf::from(format!("{}{}", self.0, TEMPLATE_SUFFIX)),
            output: PathBuf::from(&self.0),
        }
    }

    /// Output path only; used for the skip-existing check.
    pub fn output_path(&self) -> PathBuf {
        self.targets().output
    }
}

impl fmt::Display for FileSpec {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
