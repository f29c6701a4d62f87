//! Compiles a normalized path expression into its matching regex.
//!
//! The result matches exactly the literal paths the expression denotes. A
//! trailing `*` becomes a bounded character class so the 64-character slug
//! ceiling survives expansion.

use itertools::Itertools;
use regex::Regex;

use crate::error::PathError;
use crate::grammar;

const SLUG_MAX_LEN: usize = 64;

fn slug_or_wildcard_part(part: &str) -> String {
    match part.find('*') {
        None => part.to_string(),
        Some(star) => {
            let preamble = &part[..star];
            let budget = SLUG_MAX_LEN - preamble.len();
            format!(r"{preamble}[a-z0-9\-_]{{0,{budget}}}")
        }
    }
}

fn or_part(part: &str) -> String {
    let contents = grammar::alternatives(part)
        .iter()
        .map(|alt| slug_or_wildcard_part(alt))
        .join("|");
    format!("(?:{contents})")
}

/// Build the anchored matcher for the normalized segments of a path
/// expression. Compiled once and cached on the owning value.
pub(crate) fn build<S: AsRef<str>>(parts: &[S]) -> Result<Regex, PathError> {
    let mut output = Vec::with_capacity(parts.len());

    for part in parts {
        let part = part.as_ref();
        if grammar::OR_EXP_REGEX.is_match(part) {
            output.push(or_part(part));
        } else if grammar::SLUG_OR_WILDCARD_REGEX.is_match(part) {
            output.push(slug_or_wildcard_part(part));
        } else {
            output.push(part.to_string());
        }
    }

    Regex::new(&format!("^/{}$", output.join("/")))
        .map_err(|err| PathError::InvalidPathExp(err.to_string()))
}
