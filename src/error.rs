use serde::{Deserialize, Serialize};
use strum_macros::{AsRefStr, Display};
use thiserror::Error;
use utoipa::ToSchema;

/// The closed set of status kinds an HTTP-facing layer maps errors onto.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, AsRefStr, Display, ToSchema,
)]
#[strum(serialize_all = "snake_case")]
#[serde(rename_all = "snake_case")]
pub enum ErrorKind {
    BadRequest,
    NotFound,
    InternalServer,
}

#[derive(Debug, Error, Serialize, Deserialize)]
pub enum PathError {
    #[error("invalid cpath provided: {0}")]
    InvalidPath(String),

    #[error("invalid cpathexp provided: {0}")]
    InvalidPathExp(String),

    #[error("invalid resource path provided: {0}")]
    InvalidResourcePath(String),

    #[error("invalid secret provided: {0}")]
    InvalidSecret(String),

    #[error("part did not match a known part type: {0}")]
    Classification(String),

    #[error("unbound variable in resource path: {0}")]
    Substitution(String),
}

impl PathError {
    /// The status kind for this failure. Classification failures indicate an
    /// upstream invariant violation, not caller input.
    pub fn kind(&self) -> ErrorKind {
        match self {
            PathError::Classification(_) => ErrorKind::InternalServer,
            _ => ErrorKind::BadRequest,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_messages() {
        let err = PathError::InvalidPathExp("/bad".to_string());
        assert_eq!(err.to_string(), "invalid cpathexp provided: /bad");

        let err = PathError::Substitution("username".to_string());
        assert_eq!(err.to_string(), "unbound variable in resource path: username");
    }

    #[test]
    fn test_error_kinds() {
        assert_eq!(
            PathError::InvalidPath("x".to_string()).kind(),
            ErrorKind::BadRequest
        );
        assert_eq!(
            PathError::Classification("x".to_string()).kind(),
            ErrorKind::InternalServer
        );
    }

    #[test]
    fn test_error_kind_rendering() {
        assert_eq!(ErrorKind::BadRequest.to_string(), "bad_request");
        assert_eq!(ErrorKind::InternalServer.as_ref(), "internal_server");
        assert_eq!(ErrorKind::NotFound.to_string(), "not_found");
    }

    #[test]
    fn test_error_serialization() {
        let err = PathError::InvalidSecret("$wat".to_string());
        let value = serde_json::to_value(&err).unwrap();
        let back: PathError = serde_json::from_value(value).unwrap();
        assert_eq!(back.to_string(), err.to_string());
    }
}
