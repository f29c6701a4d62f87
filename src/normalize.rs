//! Path-expression normalizer.
//!
//! Orders the alternatives of every OR expression lexicographically so two
//! semantically identical expressions compare string-equal. Idempotent.

use itertools::Itertools;

use crate::error::PathError;
use crate::grammar;

fn or_part(part: &str) -> String {
    let sorted = grammar::alternatives(part).into_iter().sorted().join("|");
    format!("[{sorted}]")
}

/// Normalize a list of raw path segments.
///
/// Only OR expressions are rewritten; ordering never matters elsewhere since
/// `*` is suffix-only.
pub fn parts<S: AsRef<str>>(parts: &[S]) -> Vec<String> {
    parts
        .iter()
        .map(|part| {
            let part = part.as_ref();
            if grammar::OR_EXP_REGEX.is_match(part) {
                or_part(part)
            } else {
                part.to_string()
            }
        })
        .collect()
}

/// Normalize a full path-expression string.
pub fn exp(path: &str) -> Result<String, PathError> {
    if !grammar::validate_exp(path) {
        return Err(PathError::InvalidPathExp(path.to_string()));
    }

    let segments: Vec<&str> = path.split('/').filter(|s| !s.is_empty()).collect();
    Ok(format!("/{}", parts(&segments).join("/")))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_normalizes_an_or_statement() {
        assert_eq!(
            exp("/org/proj/[b|a|c]/d/f/g").unwrap(),
            "/org/proj/[a|b|c]/d/f/g"
        );
    }

    #[test]
    fn test_normalizes_an_or_with_a_wildcard() {
        assert_eq!(
            exp("/org/proj/[b|a|c-*]/d/f/g").unwrap(),
            "/org/proj/[a|b|c-*]/d/f/g"
        );
    }

    #[test]
    fn test_non_or_segments_pass_through() {
        let input = ["org", "proj", "dev-*", "*", "identity", "1"];
        assert_eq!(parts(&input), input.to_vec());
    }

    #[test]
    fn test_single_alternative_or_stays_bracketed() {
        assert_eq!(parts(&["[only]"]), vec!["[only]"]);
    }

    #[test]
    fn test_idempotence() {
        let once = exp("/org/proj/[c|b|a]/[www|api]/*/*").unwrap();
        let twice = exp(&once).unwrap();
        assert_eq!(once, twice);
    }

    #[test]
    fn test_rejects_invalid_expression() {
        assert!(exp("/org/proj/[a|]/d/f/g").is_err());
    }
}
