/*!
The kangaroo-jump algorithm: Hamming distance within a mismatch budget
`k`, computed in O(k) per alignment via repeated O(1) LCP queries
instead of an O(m) character scan.

At each alignment the matcher alternates between "jump to the end of
the matching run" (an LCP query) and "step over the mismatched
character", stopping as soon as either the pattern is exhausted (a
match within budget) or the budget runs out (no match at this
alignment).
*/

use std::cmp::Ordering;
use std::fmt;

use crate::lcp::LcpIndex;

/// The outcome of matching a pattern against a text at one alignment:
/// either a mismatch count within budget, or a declaration that the
/// budget was exceeded.
///
/// `Mismatches` has no total order: a `NoMatch` is neither less than
/// nor greater than anything, including another `NoMatch` or a `Match`.
/// Only two `Match` values are ever comparable.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mismatches {
    Match(u32),
    NoMatch,
}

impl Mismatches {
    fn is_match(self) -> bool {
        matches!(self, Mismatches::Match(_))
    }

    /// Picks whichever of `self` and `other` has fewer mismatches,
    /// treating `NoMatch` as strictly worse than any `Match`, and
    /// `NoMatch` vs `NoMatch` as staying `NoMatch`.
    pub(crate) fn combine_min(self, other: Mismatches) -> Mismatches {
        match (self, other) {
            (Mismatches::Match(a), Mismatches::Match(b)) => Mismatches::Match(a.min(b)),
            (Mismatches::Match(_), Mismatches::NoMatch) => self,
            (Mismatches::NoMatch, Mismatches::Match(_)) => other,
            (Mismatches::NoMatch, Mismatches::NoMatch) => Mismatches::NoMatch,
        }
    }
}

impl fmt::Display for Mismatches {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Mismatches::Match(n) => write!(f, "{n}"),
            Mismatches::NoMatch => write!(f, "X"),
        }
    }
}

/// Compares less than when and only when both sides are matches and
/// the left count is numerically smaller. `NoMatch` is never less than
/// or greater than anything, including another `NoMatch`.
impl PartialOrd for Mismatches {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        match (self, other) {
            (Mismatches::Match(a), Mismatches::Match(b)) => a.partial_cmp(b),
            _ => None,
        }
    }
}

/// Computes the Hamming distance between `pattern` and
/// `text[offset..offset + pattern.len()]`, stopping as soon as more
/// than `k` mismatches are found.
///
/// Returns `Mismatches::NoMatch` if the distance exceeds `k`, or if the
/// alignment runs past the end of `text`.
fn kangaroo_at(lcp: &LcpIndex, k: u32, offset: usize) -> Mismatches {
    let n_p = lcp.pattern_len();
    let n_t = lcp.text_len();

    if offset + n_p > n_t {
        return Mismatches::NoMatch;
    }

    let mut mismatches = 0u32;
    let mut i_p = 0usize;

    loop {
        let run = lcp.lcp(i_p, offset + i_p);
        i_p += run;

        if i_p >= n_p {
            return Mismatches::Match(mismatches);
        }

        mismatches += 1;
        if mismatches > k {
            return Mismatches::NoMatch;
        }

        // Skip the mismatched character and keep jumping.
        i_p += 1;
    }
}

/// Finds the alignment of `pattern` against `text` with the fewest
/// mismatches, among alignments with at most `k` mismatches.
///
/// Returns `Mismatches::NoMatch` if `text` is shorter than `pattern` or
/// if no alignment stays within budget `k`. Every alignment offset in
/// `[0, n_t - n_p]` is tried, inclusive of the last one.
///
/// # Panics
///
/// Panics (via internal bounds assertions) only on programmer error;
/// see the crate's error-handling conventions. Sentinel-byte collisions
/// in `pattern` or `text` are undefined behavior here — callers that
/// need a recoverable error should call [`crate::validate_inputs`]
/// first.
pub fn min_kangaroo(k: u32, pattern: &[u8], text: &[u8]) -> Mismatches {
    let n_p = pattern.len();
    let n_t = text.len();

    if n_t < n_p {
        return Mismatches::NoMatch;
    }

    let lcp = LcpIndex::new(pattern, text);
    let mut best = Mismatches::NoMatch;

    for offset in 0..=(n_t - n_p) {
        let here = kangaroo_at(&lcp, k, offset);
        best = best.combine_min(here);
    }

    best
}
