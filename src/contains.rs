//! Match-set containment between two path expressions.
//!
//! `contains(a, b)` is true iff every literal path matched by `b` is also
//! matched by `a`. Evaluated per segment:
//!
//! - exact string equality passes trivially
//! - a wildcard on `a`'s side passes; a wildcard on `b`'s side (with `a`
//!   not a wildcard) fails
//! - otherwise both sides decompose into alternative lists and every
//!   alternative of `b` must part-match some alternative of `a`

use itertools::Itertools;

use crate::error::PathError;
use crate::grammar::{self, PartKind};
use crate::types::CPathExp;

fn part_match(a: &str, b: &str) -> Result<bool, PathError> {
    let kind_a = PartKind::classify(a)?;
    let kind_b = PartKind::classify(b)?;

    if kind_a == PartKind::Slug && kind_b == PartKind::Slug {
        return Ok(a == b);
    }

    // A prefix wildcard on b's side can only be covered by a prefix wildcard
    // on a's side.
    if kind_b == PartKind::SlugWildcard && kind_a != PartKind::SlugWildcard {
        return Ok(false);
    }

    // Wildcards were ruled out at the segment level, so both sides are now
    // slugs or slug wildcards.
    let a = a.strip_suffix('*').unwrap_or(a);
    let b = b.strip_suffix('*').unwrap_or(b);

    // Substring rather than prefix containment; kept bit-compatible with the
    // behavior stored patterns already rely on.
    Ok(b.contains(a))
}

fn explode(segment: &str) -> Vec<String> {
    grammar::alternatives(segment).into_iter().sorted().collect()
}

fn segment_contains(a: &str, b: &str) -> Result<bool, PathError> {
    if a == b {
        return Ok(true);
    }

    let kind_a = PartKind::classify(a)?;
    let kind_b = PartKind::classify(b)?;

    if kind_a == PartKind::Wildcard {
        return Ok(true);
    }

    // b is less specific than a; it cannot be contained.
    if kind_b == PartKind::Wildcard {
        return Ok(false);
    }

    // An OR alternative can never itself be a bare wildcard.
    let a_alternatives = if kind_a == PartKind::Or {
        explode(a)
    } else {
        vec![a.to_string()]
    };
    let b_alternatives = if kind_b == PartKind::Or {
        explode(b)
    } else {
        vec![b.to_string()]
    };

    for b_alt in &b_alternatives {
        let mut matched = false;
        for a_alt in &a_alternatives {
            if part_match(a_alt, b_alt)? {
                matched = true;
                break;
            }
        }
        if !matched {
            return Ok(false);
        }
    }

    Ok(true)
}

/// True iff `a`'s match set is a superset of `b`'s.
pub fn contains(a: &CPathExp, b: &CPathExp) -> Result<bool, PathError> {
    for (part_a, part_b) in a.parts().iter().zip(b.parts()) {
        if !segment_contains(part_a, part_b)? {
            return Ok(false);
        }
    }

    Ok(true)
}
