//! Determine which deployment environment (`DEV`, `STAGING`, `PROD`, ...) an
//! application is running under.
//!
//! Register the valid names once at startup, then either validate an explicit
//! candidate or read one from a lookup source such as the process environment:
//!
//! ```
//! use depenv_inspector::{DeploymentInspector, Inspector, StaticEnv};
//!
//! let mut inspector = DeploymentInspector::new();
//! inspector.register("DEV").register("STAGING").register("PROD");
//!
//! assert!(inspector.validate("PROD").is_ok());
//! assert!(inspector.validate("prod").is_err());
//!
//! let vars: StaticEnv = [("MYAPP_ENV", "STAGING")].into_iter().collect();
//! assert_eq!(inspector.inspect("MYAPP_ENV", &vars).unwrap(), "STAGING");
//! ```
#![forbid(unsafe_code)]

pub mod error;
pub mod inspector;
pub mod json_output;
pub mod lookup;
pub mod resolve;

pub use error::{InspectError, Result};
pub use inspector::{DeploymentInspector, Inspector};
pub use lookup::{EnvLookup, ProcessEnv, StaticEnv};
pub use resolve::{Resolved, Source, resolve};
