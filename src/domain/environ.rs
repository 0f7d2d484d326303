use std::collections::BTreeMap;
use std::ffi::{OsStr, OsString};

/// Snapshot of the process environment, taken once at startup.
///
/// Both the template variables and the launched command's environment are
/// derived from this value; nothing downstream reads `std::env` directly.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Environ {
    entries: Vec<(OsString, OsString)>,
}

impl Environ {
    /// Capture the current process environment.
    pub fn capture() -> Self {
        Self { entries: std::env::vars_os().collect() }
    }

    pub fn from_pairs<I, K, V>(pairs: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<OsString>,
        V: Into<OsString>,
    {
        Self { entries: pairs.into_iter().map(|(k, v)| (k.into(), v.into())).collect() }
    }

    /// Look up a variable. Later duplicates win.
    pub fn get(&self, name: &str) -> Option<&OsStr> {
        self.entries
            .iter()
            .rev()
            .find(|(key, _)| key.as_os_str() == OsStr::new(name))
            .map(|(_, value)| value.as_os_str())
    }

    /// Entries in capture order.
    pub fn iter(&self) -> impl Iterator<Item = (&OsStr, &OsStr)> {
        self.entries.iter().map(|(k, v)| (k.as_os_str(), v.as_os_str()))
    }

    /// Name -> value map with non-UTF-8 data converted lossily.
    pub fn to_string_map(&self) -> BTreeMap<String, String> {
        self.iter()
            .map(|(k, v)| (k.to_string_lossy().into_owned(), v.to_string_lossy().into_owned()))
            .collect()
    }
}
