//! Specificity ordering between two path expressions.
//!
//! Specificity decides which stored value wins when several expressions
//! match the same literal path. Each token kind carries a fixed rank:
//!
//! ```text
//! Slug > SlugWildcard > Or > Wildcard
//! ```
//!
//! Segments are walked left to right; the first index whose ranks differ
//! decides the ordering. Content never does: two different OR expressions
//! are equally specific regardless of how many alternatives they carry.

use std::cmp::Ordering;

use crate::error::PathError;
use crate::grammar::PartKind;
use crate::types::CPathExp;

fn rank(kind: PartKind) -> u8 {
    match kind {
        PartKind::Slug => 4,
        PartKind::SlugWildcard => 3,
        PartKind::Or => 2,
        PartKind::Wildcard => 1,
    }
}

/// Order `a` against `b`; `Greater` means `a` is more specific.
pub fn compare(a: &CPathExp, b: &CPathExp) -> Result<Ordering, PathError> {
    for (part_a, part_b) in a.parts().iter().zip(b.parts()) {
        let rank_a = rank(PartKind::classify(part_a)?);
        let rank_b = rank(PartKind::classify(part_b)?);

        match rank_a.cmp(&rank_b) {
            Ordering::Equal => continue,
            decided => return Ok(decided),
        }
    }

    Ok(Ordering::Equal)
}

#[cfg(test)]
mod tests {
    use super::*;
    use yare::parameterized;

    fn exp(s: &str) -> CPathExp {
        s.parse().unwrap()
    }

    #[test]
    fn test_returns_equal_if_exact_same() {
        let a = exp("/org/proj/env/service/identity/instance");
        assert_eq!(compare(&a, &a).unwrap(), Ordering::Equal);
    }

    #[test]
    fn test_returns_greater_if_a_more_specific() {
        let a = exp("/org/proj/env/service/identity/instance");
        let b = exp("/org/proj/*/service/identity/instance");
        assert_eq!(compare(&a, &b).unwrap(), Ordering::Greater);
    }

    #[test]
    fn test_returns_less_if_b_more_specific() {
        let a = exp("/org/proj/dev-*/service/identity/instance");
        let b = exp("/org/proj/dev-username/service/identity/instance");
        assert_eq!(compare(&a, &b).unwrap(), Ordering::Less);
    }

    #[parameterized(
        slug_beats_slug_wildcard = { "/o/p/dev/api/i/1", "/o/p/dev-*/api/i/1", Ordering::Greater },
        slug_wildcard_beats_or = { "/o/p/dev-*/api/i/1", "/o/p/[a|b]/api/i/1", Ordering::Greater },
        or_beats_wildcard = { "/o/p/[a|b]/api/i/1", "/o/p/*/api/i/1", Ordering::Greater },
        first_difference_decides = { "/o/p/*/api/i/1", "/o/p/dev/[a|b]/*/1", Ordering::Less },
        ors_compare_equal_regardless_of_content = { "/o/p/[a|b|c]/api/i/1", "/o/p/[x|y]/api/i/1", Ordering::Equal },
    )]
    fn test_specificity_ranking(a: &str, b: &str, expected: Ordering) {
        assert_eq!(compare(&exp(a), &exp(b)).unwrap(), expected);
    }

    #[parameterized(
        wildcards = { "/o/p/*/api/i/1", "/o/p/dev/api/i/1" },
        or_exps = { "/o/p/[a|b]/api/i/1", "/o/p/dev-*/*/*/1" },
        identical = { "/o/p/e/s/i/1", "/o/p/e/s/i/1" },
    )]
    fn test_antisymmetry(a: &str, b: &str) {
        let (a, b) = (exp(a), exp(b));
        assert_eq!(
            compare(&a, &b).unwrap(),
            compare(&b, &a).unwrap().reverse()
        );
    }
}
