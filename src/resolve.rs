use serde::Serialize;

use crate::{error::Result, inspector::Inspector, lookup::EnvLookup};

/// Where a resolved environment name came from.
#[derive(Serialize, Clone, Debug, PartialEq, Eq)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Source {
    /// The explicit candidate, usually a command-line value.
    Primary,
    /// The lookup source, read under `key`.
    Lookup { key: String },
}

#[derive(Serialize, Clone, Debug, PartialEq, Eq)]
pub struct Resolved {
    pub environment: String,
    pub source: Source,
}

/// Pick the deployment environment: `primary` wins when it is registered,
/// otherwise `key` is inspected through `lookup`.
///
/// When both fail the error describes the looked-up value, since that is the
/// last source consulted.
pub fn resolve<I, L>(
    inspector: &I,
    primary: Option<&str>,
    key: &str,
    lookup: &L,
) -> Result<Resolved>
where
    I: Inspector,
    L: EnvLookup + ?Sized,
{
    if let Some(candidate) = primary
        && inspector.validate(candidate).is_ok()
    {
        return Ok(Resolved {
            environment: candidate.to_string(),
            source: Source::Primary,
        });
    }

    let environment = inspector.inspect(key, lookup)?;
    Ok(Resolved {
        environment,
        source: Source::Lookup {
            key: key.to_string(),
        },
    })
}
