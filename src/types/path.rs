//! Literal credential paths.

use std::fmt::{Display, Formatter, Result as FmtResult};
use std::str::FromStr;

use serde::de::Error as DeError;
use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::error::PathError;
use crate::grammar;

/// A fully concrete credential address.
///
/// Credentials are leaf nodes in a hierarchy; each segment names a vertex:
///
/// ```text
/// /org/project/environment/service/identity/instance
/// ```
///
/// A running process derives its `CPath` from its operating context and uses
/// it to look up every credential value relevant to it. Every segment is a
/// bare slug; construction fails on anything else.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct CPath {
    org: String,
    project: String,
    environment: String,
    service: String,
    identity: String,
    instance: String,
}

impl CPath {
    pub fn org(&self) -> &str {
        &self.org
    }

    pub fn project(&self) -> &str {
        &self.project
    }

    pub fn environment(&self) -> &str {
        &self.environment
    }

    pub fn service(&self) -> &str {
        &self.service
    }

    pub fn identity(&self) -> &str {
        &self.identity
    }

    pub fn instance(&self) -> &str {
        &self.instance
    }

    /// The six segments in path order.
    pub fn parts(&self) -> [&str; 6] {
        [
            &self.org,
            &self.project,
            &self.environment,
            &self.service,
            &self.identity,
            &self.instance,
        ]
    }
}

impl FromStr for CPath {
    type Err = PathError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if !grammar::validate(s) {
            return Err(PathError::InvalidPath(s.to_string()));
        }

        let segments: Vec<&str> = s.split('/').filter(|part| !part.is_empty()).collect();
        let [org, project, environment, service, identity, instance]: [&str; 6] = segments
            .try_into()
            .map_err(|_| PathError::InvalidPath(s.to_string()))?;

        Ok(CPath {
            org: org.to_string(),
            project: project.to_string(),
            environment: environment.to_string(),
            service: service.to_string(),
            identity: identity.to_string(),
            instance: instance.to_string(),
        })
    }
}

impl Display for CPath {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        let rendered = format!("/{}", self.parts().join("/"));
        debug_assert!(grammar::validate(&rendered));
        write!(f, "{rendered}")
    }
}

impl Serialize for CPath {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.to_string())
    }
}

impl<'de> Deserialize<'de> for CPath {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let s = String::deserialize(deserializer)?;
        s.parse().map_err(D::Error::custom)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parses_into_parts_and_stringifies() {
        let path: CPath = "/org/proj/env/service/identity/instance".parse().unwrap();

        assert_eq!(path.org(), "org");
        assert_eq!(path.project(), "proj");
        assert_eq!(path.environment(), "env");
        assert_eq!(path.service(), "service");
        assert_eq!(path.identity(), "identity");
        assert_eq!(path.instance(), "instance");

        assert_eq!(path.to_string(), "/org/proj/env/service/identity/instance");
    }

    #[test]
    fn test_errors_on_bad_path() {
        let err = "/sdf/[a/sdf/sdf/sdf/sdf".parse::<CPath>().unwrap_err();
        assert!(matches!(err, PathError::InvalidPath(_)));
        assert!(err.to_string().contains("invalid cpath provided"));
    }

    #[test]
    fn test_rejects_pattern_segments() {
        assert!("/org/proj/*/service/identity/1".parse::<CPath>().is_err());
        assert!(
            "/org/proj/[a|b]/service/identity/1"
                .parse::<CPath>()
                .is_err()
        );
    }

    #[test]
    fn test_serde_uses_canonical_string_form() {
        let path: CPath = "/org/proj/env/service/identity/1".parse().unwrap();
        let value = serde_json::to_value(&path).unwrap();
        assert_eq!(value, serde_json::json!("/org/proj/env/service/identity/1"));

        let back: CPath = serde_json::from_value(value).unwrap();
        assert_eq!(back, path);
    }

    #[test]
    fn test_deserialize_rejects_invalid() {
        let result: Result<CPath, _> = serde_json::from_value(serde_json::json!("/not/enough"));
        assert!(result.is_err());
    }
}
