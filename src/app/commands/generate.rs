//! Render one template into its output file.

use std::fs::{self, File};
use std::io::{BufWriter, Write};
use std::path::PathBuf;

use log::{debug, warn};

use crate::adapters::template::{Helpers, build_template_environment, render_to};
use crate::domain::{AppError, FileSpec, FileTargets, Vars};

/// Generate the output of `spec` by rendering its template with `vars`.
///
/// Callers decide whether the output may be (over)written; this always
/// truncates. A render failure removes the partially written output before
/// the error is returned.
///
/// Returns the path that was written.
pub fn generate(spec: &FileSpec, vars: &Vars, helpers: &Helpers) -> Result<PathBuf, AppError> {
    let FileTargets { template, output } = spec.targets();

    let source = fs::read_to_string(&template)
        .map_err(|source| AppError::Read { path: template.clone(), source })?;

    let name = template.to_string_lossy().into_owned();
    let env = build_template_environment(helpers);
    let compiled = env
        .template_from_named_str(&name, &source)
        .map_err(|err| AppError::Parse { path: template.clone(), message: err.to_string() })?;

    let file = File::create(&output)
        .map_err(|source| AppError::Write { path: output.clone(), source })?;
    let mut writer = BufWriter::new(file);

    let rendered = render_to(&compiled, vars, &mut writer)
        .map_err(|err| err.to_string())
        .and_then(|()| writer.flush().map_err(|err| err.to_string()));
    drop(writer);

    if let Err(message) = rendered {
        if let Err(err) = fs::remove_file(&output) {
            warn!("failed to remove partial output {}: {}", output.display(), err);
        }
        return Err(AppError::Render { path: output, message });
    }

    debug!("rendered {} -> {}", template.display(), output.display());
    Ok(output)
}
