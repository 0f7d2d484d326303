use std::ffi::OsStr;
use std::fs;
use std::path::{Path, PathBuf};

use crate::domain::AppError;

/// Locate the executable for `program`.
///
/// A program containing a path separator is used as-is. Anything else is
/// looked up in the directories of `path_var`, in order; the first
/// executable regular file wins. Without a usable `PATH` only an absolute
/// program path is accepted.
pub fn resolve_executable(
    program: &OsStr,
    path_var: Option<&OsStr>,
) -> Result<PathBuf, AppError> {
    let name = program.to_string_lossy();
    if name.is_empty() {
        return Err(AppError::launch("", "empty command name"));
    }

    let candidate = Path::new(program);
    if has_separator(&name) {
        return check_executable(candidate)
            .map(|()| candidate.to_path_buf())
            .map_err(|rejection| AppError::launch(&*name, rejection));
    }

    let Some(path_var) = path_var.filter(|value| !value.is_empty()) else {
        return Err(AppError::launch(
            &*name,
            "PATH is empty or unset; an absolute command path is required",
        ));
    };

    let mut rejected = None;
    for dir in std::env::split_paths(path_var) {
        if dir.as_os_str().is_empty() {
            continue;
        }
        let full = dir.join(candidate);
        match check_executable(&full) {
            Ok(()) => return Ok(full),
            Err(Rejection::NotExecutable) if rejected.is_none() => rejected = Some(full),
            Err(_) => {}
        }
    }

    let reason = match rejected {
        Some(path) => format!("{} is not executable", path.display()),
        None => "not found in PATH".to_string(),
    };
    Err(AppError::launch(&*name, reason))
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Rejection {
    Missing,
    NotExecutable,
}

impl From<Rejection> for String {
    fn from(rejection: Rejection) -> Self {
        match rejection {
            Rejection::Missing => "no such file".to_string(),
            Rejection::NotExecutable => "permission denied".to_string(),
        }
    }
}

fn has_separator(name: &str) -> bool {
    name.contains('/') || name.contains(std::path::MAIN_SEPARATOR)
}

fn check_executable(path: &Path) -> Result<(), Rejection> {
    let metadata = fs::metadata(path).map_err(|_| Rejection::Missing)?;
    if !metadata.is_file() {
        return Err(Rejection::NotExecutable);
    }

    #[cfg(unix)]
    {
        use std::os::unix::fs::PermissionsExt;
        if metadata.permissions().mode() & 0o111 == 0 {
            return Err(Rejection::NotExecutable);
        }
    }

    Ok(())
}
