use depenv_inspector::{
    DeploymentInspector, InspectError, Resolved, Source, StaticEnv,
    json_output::ResolveJsonOutput, resolve,
};
use insta::assert_snapshot;
use pretty_assertions::assert_eq;
use serde_json::Value;

fn inspector() -> DeploymentInspector {
    DeploymentInspector::with_names(["DEV", "STAGING", "PROD"])
}

#[test]
fn registered_primary_wins() {
    let vars: StaticEnv = [("MYAPP_ENV", "STAGING")].into_iter().collect();
    let resolved = resolve(&inspector(), Some("PROD"), "MYAPP_ENV", &vars).unwrap();
    assert_eq!(
        resolved,
        Resolved {
            environment: "PROD".to_string(),
            source: Source::Primary,
        }
    );
}

#[test]
fn invalid_primary_falls_back_to_lookup() {
    let vars: StaticEnv = [("MYAPP_ENV", "STAGING")].into_iter().collect();
    for primary in [None, Some("prod"), Some("")] {
        let resolved = resolve(&inspector(), primary, "MYAPP_ENV", &vars).unwrap();
        assert_eq!(resolved.environment, "STAGING");
        assert_eq!(
            resolved.source,
            Source::Lookup {
                key: "MYAPP_ENV".to_string()
            }
        );
    }
}

#[test]
fn both_sources_failing_reports_lookup_value() {
    let vars: StaticEnv = [("MYAPP_ENV", "QA")].into_iter().collect();
    let err = resolve(&inspector(), Some("LOCAL"), "MYAPP_ENV", &vars).unwrap_err();
    assert_eq!(err, InspectError::not_registered("QA"));
    assert_snapshot!(err.to_string(), @"deployment environment 'QA' is not registered");
}

#[test]
fn json_report_lists_registry_and_source() {
    let vars: StaticEnv = [("MYAPP_ENV", "DEV")].into_iter().collect();
    let inspector = inspector();
    let result = resolve(&inspector, None, "MYAPP_ENV", &vars);
    let payload: Value =
        serde_json::from_str(&ResolveJsonOutput::from_result(&inspector, result).into_string())
            .unwrap();
    assert_eq!(payload["ok"], Value::Bool(true));
    assert_eq!(payload["environment"].as_str(), Some("DEV"));
    assert_eq!(payload["source"]["kind"].as_str(), Some("lookup"));
    assert_eq!(payload["source"]["key"].as_str(), Some("MYAPP_ENV"));
    assert_eq!(payload["registered"].as_array().map(Vec::len), Some(3));
    assert!(payload.get("error").is_none());
}

#[test]
fn json_report_describes_failure() {
    let inspector = inspector();
    let result = resolve(&inspector, None, "MYAPP_ENV", &StaticEnv::new());
    let payload: Value =
        serde_json::from_str(&ResolveJsonOutput::from_result(&inspector, result).into_string())
            .unwrap();
    assert_eq!(payload["ok"], Value::Bool(false));
    assert!(payload.get("environment").is_none());
    assert_eq!(payload["error"]["candidate"].as_str(), Some(""));
}
