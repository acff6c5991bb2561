use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum InspectError {
    #[error("deployment environment '{name}' is not registered")]
    NotRegistered { name: String },
}

impl InspectError {
    pub fn not_registered(name: impl Into<String>) -> Self {
        InspectError::NotRegistered { name: name.into() }
    }

    /// The candidate that failed validation.
    pub fn name(&self) -> &str {
        match self {
            InspectError::NotRegistered { name } => name,
        }
    }
}

pub type Result<T> = std::result::Result<T, InspectError>;
