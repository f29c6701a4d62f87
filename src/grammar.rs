//! Token and path grammars for credential paths.
//!
//! Every regular expression in the crate is defined here so the same string
//! always classifies identically everywhere. A credential path has exactly
//! six segments:
//!
//! ```text
//! /org/project/environment/service/identity/instance
//! ```
//!
//! A path expression uses the same shape but allows wildcards, prefix
//! wildcards (`dev-*`) and OR expressions (`[api|www]`) in the lower
//! segments. Org and project are always bare slugs; the instance segment
//! takes a bare slug or `*` only.

use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Serialize};
use strum::IntoEnumIterator;
use strum_macros::{AsRefStr, Display, EnumIter};
use utoipa::ToSchema;

use crate::error::PathError;

const SLUG: &str = r"[a-z0-9][a-z0-9\-\_]{0,63}";
const WILDCARD: &str = r"[\*]";

// `text*` and `*` are the only wildcard forms a segment supports.
static SLUG_WILDCARD: Lazy<String> = Lazy::new(|| format!("{SLUG}{WILDCARD}?"));
static SLUG_OR_WILDCARD: Lazy<String> =
    Lazy::new(|| format!("(?:{}|{WILDCARD})", &*SLUG_WILDCARD));
static SLUG_OR_STAR: Lazy<String> = Lazy::new(|| format!("(?:{SLUG}|{WILDCARD})"));
static OR_EXP: Lazy<String> =
    Lazy::new(|| format!(r"\[(?:(?:{sw})\|)*(?:{sw})\]", sw = &*SLUG_WILDCARD));
static SLUG_WILDCARD_OR_EXP: Lazy<String> =
    Lazy::new(|| format!("(?:{}|{})", &*SLUG_OR_WILDCARD, &*OR_EXP));

fn anchored(pattern: &str) -> Regex {
    Regex::new(&format!("^{pattern}$")).expect("grammar pattern must compile")
}

static SLUG_REGEX: Lazy<Regex> = Lazy::new(|| anchored(SLUG));
static WILDCARD_REGEX: Lazy<Regex> = Lazy::new(|| anchored(WILDCARD));
static SLUG_WILDCARD_REGEX: Lazy<Regex> = Lazy::new(|| anchored(&SLUG_WILDCARD));
pub(crate) static OR_EXP_REGEX: Lazy<Regex> = Lazy::new(|| anchored(&OR_EXP));
pub(crate) static SLUG_OR_WILDCARD_REGEX: Lazy<Regex> =
    Lazy::new(|| anchored(&SLUG_OR_WILDCARD));

/// Literal paths: six bare slugs, leading `/`, no trailing `/`.
static CPATH_REGEX: Lazy<Regex> =
    Lazy::new(|| anchored(&format!("/{SLUG}/{SLUG}/{SLUG}/{SLUG}/{SLUG}/{SLUG}")));

/// Path expressions: org and project stay bare slugs, the middle segments
/// take any pattern form and the instance takes a slug or `*`.
static CPATHEXP_REGEX: Lazy<Regex> = Lazy::new(|| {
    anchored(&format!(
        "/{SLUG}/{SLUG}/{swoe}/{swoe}/{swoe}/{sos}",
        swoe = &*SLUG_WILDCARD_OR_EXP,
        sos = &*SLUG_OR_STAR,
    ))
});

/// ACL resource paths: the same positional grammar as a path expression, but
/// trailing segments may be omitted to denote a broader resource.
pub(crate) static RPATH_REGEX: Lazy<Regex> = Lazy::new(|| {
    anchored(&format!(
        "/{SLUG}(?:/{SLUG}(?:/{swoe}(?:/{swoe}(?:/{swoe}(?:/{sos})?)?)?)?)?",
        swoe = &*SLUG_WILDCARD_OR_EXP,
        sos = &*SLUG_OR_STAR,
    ))
});

/// A `${identifier}` placeholder; the identifier is itself a slug.
pub(crate) static VARIABLE_REGEX: Lazy<Regex> =
    Lazy::new(|| Regex::new(&format!(r"\$\{{{SLUG}\}}")).expect("grammar pattern must compile"));

/// The token kinds a path segment can classify as, in probe order.
///
/// Slug must be probed before SlugWildcard: the wildcard suffix is optional,
/// so the SlugWildcard grammar also accepts a bare slug.
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
#[strum(serialize_all = "SCREAMING_SNAKE_CASE")]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum PartKind {
    Slug,
    SlugWildcard,
    Or,
    Wildcard,
}

impl PartKind {
    fn regex(self) -> &'static Regex {
        match self {
            PartKind::Slug => &SLUG_REGEX,
            PartKind::SlugWildcard => &SLUG_WILDCARD_REGEX,
            PartKind::Or => &OR_EXP_REGEX,
            PartKind::Wildcard => &WILDCARD_REGEX,
        }
    }

    /// Classify a single segment. Errors only on input that never passed
    /// path validation.
    pub fn classify(part: &str) -> Result<PartKind, PathError> {
        PartKind::iter()
            .find(|kind| kind.regex().is_match(part))
            .ok_or_else(|| PathError::Classification(part.to_string()))
    }
}

/// Cheap probe: is this a valid literal credential path?
pub fn validate(path: &str) -> bool {
    CPATH_REGEX.is_match(path)
}

/// Cheap probe: is this a valid credential path expression?
pub fn validate_exp(path: &str) -> bool {
    CPATHEXP_REGEX.is_match(path)
}

/// True iff `text` is a bare slug (no wildcard, no OR).
pub fn is_slug(text: &str) -> bool {
    SLUG_REGEX.is_match(text)
}

/// Split an OR expression into its alternatives. A non-OR value yields a
/// singleton of itself.
pub fn split_exp(text: &str) -> Vec<String> {
    if OR_EXP_REGEX.is_match(text) {
        alternatives(text)
    } else {
        vec![text.to_string()]
    }
}

/// The alternatives of a known-valid OR expression, in written order.
pub(crate) fn alternatives(or_exp: &str) -> Vec<String> {
    or_exp[1..or_exp.len() - 1]
        .split('|')
        .map(str::to_string)
        .collect()
}
