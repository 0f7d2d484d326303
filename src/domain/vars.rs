use std::collections::BTreeMap;

use serde::Serialize;

use super::Environ;

/// Data exposed to templates.
///
/// Environment variables are reachable as `env.NAME`.
#[derive(Debug, Clone, Default, Serialize)]
pub struct Vars {
    pub env: BTreeMap<String, String>,
}

impl Vars {
    pub fn from_environ(environ: &Environ) -> Self {
        Self { env: environ.to_string_map() }
    }
}
