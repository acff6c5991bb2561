use indexmap::IndexSet;

use crate::{
    error::{InspectError, Result},
    lookup::{EnvLookup, ProcessEnv},
};

/// Register, validate and inspect deployment environment names.
pub trait Inspector {
    /// Declare `name` a valid environment. Re-registering is a no-op.
    fn register(&mut self, name: impl Into<String>) -> &mut Self;

    /// Succeeds iff `candidate` has been registered (exact, case-sensitive).
    fn validate(&self, candidate: &str) -> Result<()>;

    /// Resolve `key` through `lookup` once and validate the value.
    /// Returns the resolved name on success.
    fn inspect<L>(&self, key: &str, lookup: &L) -> Result<String>
    where
        L: EnvLookup + ?Sized;

    /// [`Inspector::inspect`] against the process environment.
    fn inspect_process_env(&self, key: &str) -> Result<String> {
        self.inspect(key, &ProcessEnv)
    }
}

/// Set-backed [`Inspector`]. Names are kept in first-registration order for
/// listing; membership does not depend on order.
#[derive(Clone, Debug, Default)]
pub struct DeploymentInspector {
    names: IndexSet<String>,
    reserve_empty: bool,
}

impl DeploymentInspector {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_names<I, S>(names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        names.into_iter().collect()
    }

    /// Treat an empty lookup value as "unset": `inspect` rejects it even when
    /// the empty string has been registered. `validate` is unaffected.
    pub fn reserving_empty(mut self) -> Self {
        self.reserve_empty = true;
        self
    }

    pub fn reserves_empty(&self) -> bool {
        self.reserve_empty
    }

    pub fn contains(&self, name: &str) -> bool {
        self.names.contains(name)
    }

    pub fn len(&self) -> usize {
        self.names.len()
    }

    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }

    /// Registered names in first-registration order.
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.names.iter().map(String::as_str)
    }
}

impl Inspector for DeploymentInspector {
    fn register(&mut self, name: impl Into<String>) -> &mut Self {
        self.names.insert(name.into());
        self
    }

    fn validate(&self, candidate: &str) -> Result<()> {
        if self.names.contains(candidate) {
            Ok(())
        } else {
            Err(InspectError::not_registered(candidate))
        }
    }

    fn inspect<L>(&self, key: &str, lookup: &L) -> Result<String>
    where
        L: EnvLookup + ?Sized,
    {
        let candidate = lookup.lookup(key);
        if self.reserve_empty && candidate.is_empty() {
            return Err(InspectError::not_registered(candidate));
        }
        self.validate(&candidate)?;
        Ok(candidate)
    }
}

impl<S: Into<String>> Extend<S> for DeploymentInspector {
    fn extend<I: IntoIterator<Item = S>>(&mut self, iter: I) {
        for name in iter {
            self.register(name);
        }
    }
}

impl<S: Into<String>> FromIterator<S> for DeploymentInspector {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        let mut inspector = DeploymentInspector::new();
        inspector.extend(iter);
        inspector
    }
}
