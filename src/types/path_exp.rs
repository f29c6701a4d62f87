//! Credential path expressions.

use std::fmt::{Display, Formatter, Result as FmtResult};
use std::hash::{Hash, Hasher};
use std::str::FromStr;

use regex::Regex;
use serde::de::Error as DeError;
use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::error::PathError;
use crate::types::CPath;
use crate::{grammar, matcher, normalize};

/// A path expression: matches many literal credential paths at once.
///
/// Expressions are supplied when a credential value is stored, letting one
/// value be shared across environments, services, identities and instances:
///
/// ```text
/// /org/www/[ci|dev-*]/*/*/*   every process in ci and dev-* environments
/// /org/www/dev-*/api/*/*      every api process in a dev-* environment
/// ```
///
/// Segments are held in normalized form (OR alternatives sorted) so equal
/// match sets compare string-equal. The matching regex is compiled once at
/// construction and never rebuilt; the value is safe to share read-only
/// across threads.
#[derive(Debug, Clone)]
pub struct CPathExp {
    parts: [String; 6],
    matcher: Regex,
}

impl CPathExp {
    pub fn org(&self) -> &str {
        &self.parts[0]
    }

    pub fn project(&self) -> &str {
        &self.parts[1]
    }

    pub fn environment(&self) -> &str {
        &self.parts[2]
    }

    pub fn service(&self) -> &str {
        &self.parts[3]
    }

    pub fn identity(&self) -> &str {
        &self.parts[4]
    }

    pub fn instance(&self) -> &str {
        &self.parts[5]
    }

    /// The normalized segments in path order.
    pub fn parts(&self) -> &[String] {
        &self.parts
    }

    /// Match a literal path string against the cached matcher.
    pub fn matches(&self, path: &str) -> bool {
        self.matcher.is_match(path)
    }

    /// Match an already-parsed literal path.
    pub fn matches_path(&self, path: &CPath) -> bool {
        self.matches(&path.to_string())
    }
}

impl FromStr for CPathExp {
    type Err = PathError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if !grammar::validate_exp(s) {
            return Err(PathError::InvalidPathExp(s.to_string()));
        }

        let segments: Vec<&str> = s.split('/').filter(|part| !part.is_empty()).collect();
        let normalized = normalize::parts(&segments);
        let matcher = matcher::build(&normalized)?;
        let parts: [String; 6] = normalized
            .try_into()
            .map_err(|_| PathError::InvalidPathExp(s.to_string()))?;

        Ok(CPathExp { parts, matcher })
    }
}

impl Display for CPathExp {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        let rendered = format!("/{}", self.parts.join("/"));
        debug_assert!(grammar::validate_exp(&rendered));
        write!(f, "{rendered}")
    }
}

// The cached matcher is derived from the parts, so identity is the parts
// alone.
impl PartialEq for CPathExp {
    fn eq(&self, other: &Self) -> bool {
        self.parts == other.parts
    }
}

impl Eq for CPathExp {}

impl Hash for CPathExp {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.parts.hash(state);
    }
}

impl Serialize for CPathExp {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.to_string())
    }
}

impl<'de> Deserialize<'de> for CPathExp {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let s = String::deserialize(deserializer)?;
        s.parse().map_err(D::Error::custom)
    }
}
