use std::collections::BTreeMap;

use minijinja::{Environment, Error, ErrorKind, Value};

use crate::domain::Environ;

/// Named function table injected into the template engine.
///
/// Entries are registered as globals, so templates call them as functions:
/// `{{ getenv("HOME") }}`, `{{ split(env.HOSTS, ",") }}`.
///
/// The predicates (`has_prefix`, `has_suffix`, `contains`) are meant for `if`
/// tests. Printed directly they render as `True`/`False`, which is neither
/// JSON nor YAML; use `{{ has_prefix(a, b) | tojson }}` for `true`/`false`.
#[derive(Debug, Clone, Default)]
pub struct Helpers {
    functions: BTreeMap<String, Value>,
}

impl Helpers {
    /// A table without any functions.
    pub fn empty() -> Self {
        Self::default()
    }

    /// The default table: environment lookup plus string helpers.
    pub fn standard(environ: &Environ) -> Self {
        let env = environ.to_string_map();

        Self::empty()
            .with(
                "getenv",
                Value::from_function(
                    move |name: &str, default: Option<String>| -> Result<String, Error> {
                        match env.get(name) {
                            Some(value) => Ok(value.clone()),
                            None => default.ok_or_else(|| {
                                Error::new(
                                    ErrorKind::InvalidOperation,
                                    format!("environment variable '{}' is not set", name),
                                )
                            }),
                        }
                    },
                ),
            )
            .with(
                "split",
                Value::from_function(|s: &str, sep: &str| -> Vec<String> {
                    s.split(sep).map(str::to_string).collect()
                }),
            )
            .with(
                "join",
                Value::from_function(|items: Vec<Value>, sep: &str| -> String {
                    items.iter().map(|item| item.to_string()).collect::<Vec<_>>().join(sep)
                }),
            )
            .with(
                "has_prefix",
                Value::from_function(|s: &str, prefix: &str| -> bool { s.starts_with(prefix) }),
            )
            .with(
                "has_suffix",
                Value::from_function(|s: &str, suffix: &str| -> bool { s.ends_with(suffix) }),
            )
            .with(
                "contains",
                Value::from_function(|s: &str, needle: &str| -> bool { s.contains(needle) }),
            )
            .with(
                "replace_all",
                Value::from_function(|s: &str, from: &str, to: &str| -> String {
                    s.replace(from, to)
                }),
            )
            .with("to_upper", Value::from_function(|s: &str| -> String { s.to_uppercase() }))
            .with("to_lower", Value::from_function(|s: &str| -> String { s.to_lowercase() }))
            .with("trim_space", Value::from_function(|s: &str| -> String { s.trim().to_string() }))
    }

    /// Add or replace a named function.
    pub fn with<N: Into<String>>(mut self, name: N, function: Value) -> Self {
        self.functions.insert(name.into(), function);
        self
    }

    pub(crate) fn install(&self, env: &mut Environment<'_>) {
        for (name, function) in &self.functions {
            env.add_global(name.clone(), function.clone());
        }
    }
}
