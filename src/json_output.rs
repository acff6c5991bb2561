use crate::{
    error::InspectError,
    inspector::DeploymentInspector,
    resolve::{Resolved, Source},
};
use serde::Serialize;

#[derive(Serialize, Clone, Debug)]
pub struct JsonDiagnostic {
    pub message: String,
    pub candidate: String,
}

impl From<InspectError> for JsonDiagnostic {
    fn from(err: InspectError) -> Self {
        JsonDiagnostic {
            message: err.to_string(),
            candidate: err.name().to_string(),
        }
    }
}

/// Machine-readable report emitted by `depenv-inspect --json`.
#[derive(Serialize, Clone, Debug)]
pub struct ResolveJsonOutput {
    pub ok: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub environment: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub source: Option<Source>,
    pub registered: Vec<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<JsonDiagnostic>,
}

impl ResolveJsonOutput {
    pub fn from_result(
        inspector: &DeploymentInspector,
        result: Result<Resolved, InspectError>,
    ) -> Self {
        let registered = inspector.names().map(str::to_string).collect();
        match result {
            Ok(resolved) => ResolveJsonOutput {
                ok: true,
                environment: Some(resolved.environment),
                source: Some(resolved.source),
                registered,
                error: None,
            },
            Err(err) => ResolveJsonOutput {
                ok: false,
                environment: None,
                source: None,
                registered,
                error: Some(err.into()),
            },
        }
    }

    pub fn into_string(self) -> String {
        serde_json::to_string(&self).expect("resolve output serialization")
    }
}
