use std::{collections::HashMap, env};

/// Source of candidate environment names, keyed by variable name.
///
/// A missing key resolves to the empty string; callers cannot tell "unset"
/// apart from "set to empty".
pub trait EnvLookup {
    fn lookup(&self, key: &str) -> String;
}

impl<F> EnvLookup for F
where
    F: Fn(&str) -> String,
{
    fn lookup(&self, key: &str) -> String {
        self(key)
    }
}

/// Reads from the process environment via `std::env::var`.
#[derive(Clone, Copy, Debug, Default)]
pub struct ProcessEnv;

impl EnvLookup for ProcessEnv {
    fn lookup(&self, key: &str) -> String {
        // NotPresent and NotUnicode both collapse to "".
        env::var(key).unwrap_or_default()
    }
}

/// Fixed key/value table, handy for tests and for embedding hosts that
/// snapshot their environment up front.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct StaticEnv {
    vars: HashMap<String, String>,
}

impl StaticEnv {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set(&mut self, key: impl Into<String>, value: impl Into<String>) -> &mut Self {
        self.vars.insert(key.into(), value.into());
        self
    }
}

impl EnvLookup for StaticEnv {
    fn lookup(&self, key: &str) -> String {
        self.vars.get(key).cloned().unwrap_or_default()
    }
}

impl<K, V> FromIterator<(K, V)> for StaticEnv
where
    K: Into<String>,
    V: Into<String>,
{
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        StaticEnv {
            vars: iter
                .into_iter()
                .map(|(key, value)| (key.into(), value.into()))
                .collect(),
        }
    }
}
