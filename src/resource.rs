//! ACL resource paths.
//!
//! Access-control entries name resources with a variable-length path of one
//! to six segments plus an optional secret name:
//!
//! ```text
//! /org/project/environment/service/identity/instance  (+ secret)
//! ```
//!
//! Trailing segments may be omitted to denote a broader resource, and any
//! segment may embed `${identifier}` placeholders that are resolved against
//! a context at substitution time. The org segment is validated but treated
//! as request context rather than a resource, so it is dropped during
//! parsing.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};
use strum::IntoEnumIterator;
use strum_macros::{AsRefStr, Display, EnumIter};
use tracing::debug;
use utoipa::ToSchema;

use crate::error::PathError;
use crate::{grammar, normalize};

/// The resource kinds of an ACL path, in permutation-walk order.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    Deserialize,
    AsRefStr,
    Display,
    EnumIter,
    ToSchema,
)]
#[strum(serialize_all = "lowercase")]
#[serde(rename_all = "lowercase")]
pub enum ResourceKind {
    Project,
    Environment,
    Service,
    Identity,
    Instance,
    Secret,
}

impl ResourceKind {
    /// Whether an OR expression forks the permutation walk at this kind.
    /// Identities and secrets never fork.
    pub fn or_eligible(self) -> bool {
        matches!(
            self,
            ResourceKind::Project
                | ResourceKind::Environment
                | ResourceKind::Service
                | ResourceKind::Instance
        )
    }
}

/// A parsed ACL resource path, keyed by resource kind.
///
/// Values are stored raw: OR expressions (normalized) and `${identifier}`
/// placeholders survive parsing untouched. Built once by [`parse`] and only
/// read afterwards.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct ResourceMap {
    project: Option<String>,
    environment: Option<String>,
    service: Option<String>,
    identity: Option<String>,
    instance: Option<String>,
    secret: Option<String>,
}

impl ResourceMap {
    pub fn get(&self, kind: ResourceKind) -> Option<&str> {
        match kind {
            ResourceKind::Project => self.project.as_deref(),
            ResourceKind::Environment => self.environment.as_deref(),
            ResourceKind::Service => self.service.as_deref(),
            ResourceKind::Identity => self.identity.as_deref(),
            ResourceKind::Instance => self.instance.as_deref(),
            ResourceKind::Secret => self.secret.as_deref(),
        }
    }

    fn set(&mut self, kind: ResourceKind, value: String) {
        let slot = match kind {
            ResourceKind::Project => &mut self.project,
            ResourceKind::Environment => &mut self.environment,
            ResourceKind::Service => &mut self.service,
            ResourceKind::Identity => &mut self.identity,
            ResourceKind::Instance => &mut self.instance,
            ResourceKind::Secret => &mut self.secret,
        };
        *slot = Some(value);
    }
}

// Stand-in slug used while grammar-checking a segment that embeds variables.
const VARIABLE_PLACEHOLDER: &str = "var";

fn excise_variables(text: &str) -> String {
    grammar::VARIABLE_REGEX
        .replace_all(text, VARIABLE_PLACEHOLDER)
        .into_owned()
}

/// Validate an ACL resource path and optional secret without raising.
///
/// Accepts the full six-segment shape and every partial prefix of it;
/// `${identifier}` placeholders are excised before the grammar check.
pub fn validate(path: &str, secret: Option<&str>) -> Result<(), PathError> {
    if !grammar::RPATH_REGEX.is_match(&excise_variables(path)) {
        return Err(PathError::InvalidResourcePath(path.to_string()));
    }

    if let Some(secret) = secret {
        if !grammar::SLUG_OR_WILDCARD_REGEX.is_match(secret) {
            return Err(PathError::InvalidSecret(secret.to_string()));
        }
    }

    Ok(())
}

/// Build a resource map from an ACL path and optional secret.
///
/// Validates, normalizes OR ordering, drops the org segment and maps the
/// remaining segments positionally onto project through instance.
pub fn parse(path: &str, secret: Option<&str>) -> Result<ResourceMap, PathError> {
    validate(path, secret)?;

    debug!(
        event = "ResourcePath",
        phase = "Parse",
        path = path,
        has_secret = secret.is_some()
    );

    let segments: Vec<&str> = path.split('/').filter(|part| !part.is_empty()).collect();
    let normalized = normalize::parts(&segments);

    let mut map = ResourceMap::default();
    // Org is request context, not a resource.
    for (kind, value) in ResourceKind::iter().zip(normalized.into_iter().skip(1)) {
        map.set(kind, value);
    }

    if let Some(secret) = secret {
        map.set(ResourceKind::Secret, secret.to_string());
    }

    Ok(map)
}

/// True iff `text` contains at least one `${identifier}` occurrence.
pub fn is_variable(text: &str) -> bool {
    grammar::VARIABLE_REGEX.is_match(text)
}

/// Replace every `${identifier}` in `text` with its binding from `context`.
///
/// Missing bindings and empty-string bindings are both rejected; callers
/// depend on this strictness.
pub fn replace_variable(
    text: &str,
    context: &HashMap<String, String>,
) -> Result<String, PathError> {
    let mut output = String::with_capacity(text.len());
    let mut last = 0;

    for found in grammar::VARIABLE_REGEX.find_iter(text) {
        // ${ and } delimit the identifier.
        let name = &text[found.start() + 2..found.end() - 1];
        let value = context
            .get(name)
            .filter(|value| !value.is_empty())
            .ok_or_else(|| PathError::Substitution(name.to_string()))?;

        output.push_str(&text[last..found.start()]);
        output.push_str(value);
        last = found.end();
    }

    output.push_str(&text[last..]);
    Ok(output)
}

struct Step {
    kind: usize,
    path: Vec<String>,
    // A forked alternative overriding the map value for this kind.
    value: Option<String>,
}

fn render(path: &[String]) -> String {
    format!("/{}", path.join("/"))
}

/// Build the path permutations a resource map denotes.
///
/// Kinds are walked in fixed order. An OR expression at an OR-eligible kind
/// forks the walk, one branch per (normalized, sorted) alternative. With
/// `explode` set, every prefix of every permutation is recorded; otherwise
/// only completed permutations are. An absent kind ends that branch of the
/// walk; in non-explode mode the partial path assembled so far is still
/// recorded.
///
/// Implemented as an explicit depth-first worklist so traversal order is
/// easy to test and alternative fan-out never grows the call stack.
pub fn expand(map: &ResourceMap, explode: bool) -> Vec<String> {
    let kinds: Vec<ResourceKind> = ResourceKind::iter().collect();
    let mut results = Vec::new();

    debug!(event = "ResourcePath", phase = "Expand", explode = explode);

    let mut stack = vec![Step {
        kind: 0,
        path: Vec::new(),
        value: None,
    }];

    while let Some(step) = stack.pop() {
        let kind = kinds[step.kind];
        let value = match step
            .value
            .or_else(|| map.get(kind).map(str::to_string))
        {
            Some(value) => value,
            None => {
                if !explode && !step.path.is_empty() {
                    results.push(render(&step.path));
                }
                continue;
            }
        };

        if kind.or_eligible() && grammar::OR_EXP_REGEX.is_match(&value) {
            // Fork: revisit this kind once per alternative. Children are
            // pushed in reverse so they pop in normalized order.
            for alternative in grammar::alternatives(&value).into_iter().rev() {
                stack.push(Step {
                    kind: step.kind,
                    path: step.path.clone(),
                    value: Some(alternative),
                });
            }
            continue;
        }

        let mut path = step.path;
        path.push(value);

        if explode || path.len() == kinds.len() {
            results.push(render(&path));
        }

        if step.kind + 1 < kinds.len() {
            stack.push(Step {
                kind: step.kind + 1,
                path,
                value: None,
            });
        }
    }

    results
}

/// Every permutation of the resource map, including all partial prefixes.
pub fn explode(map: &ResourceMap) -> Vec<String> {
    expand(map, true)
}
