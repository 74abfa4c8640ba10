/*!
Constant-time longest-common-prefix queries between a pattern and a
text, answered by building one generalized suffix tree over their
concatenation.

`LcpIndex::new` builds `P · T · sentinel`, indexes it with [`Lca`], and
then drops the suffix tree: once the Euler tour and string-depth tables
are copied out, the tree's dense per-node child arrays serve no further
purpose and keeping them alive would just hold onto memory the kangaroo
matcher never touches again.
*/

use crate::error::{EngineError, Result};
use crate::lca::Lca;
use crate::suffix_tree::SuffixTree;

const SENTINEL: u8 = 0x00;

/// Indexes a pattern and a text for O(1) LCP queries between any
/// pattern suffix and any text suffix.
pub(crate) struct LcpIndex {
    n_p: usize,
    n_t: usize,
    lca: Lca,
}

impl LcpIndex {
    /// Builds the index over `pattern` and `text`.
    ///
    /// Neither `pattern` nor `text` may contain the sentinel byte
    /// `0x00`; callers are expected to have validated this already; see
    /// [`EngineError::SentinelCollision`] for the surfaced error when a
    /// caller-facing entry point checks it directly.
    pub(crate) fn new(pattern: &[u8], text: &[u8]) -> Self {
        let n_p = pattern.len();
        let n_t = text.len();

        let mut combined = Vec::with_capacity(n_p + n_t + 1);
        combined.extend_from_slice(pattern);
        combined.extend_from_slice(text);
        combined.push(SENTINEL);

        let tree = SuffixTree::new(combined);
        let lca = Lca::build(&tree, n_p + n_t + 1);

        Self { n_p, n_t, lca }
    }

    /// Validates that `pattern` and `text` contain no sentinel byte,
    /// returning the offending offset (pattern-relative, with the text
    /// offset continuing past it) as a recoverable error instead of the
    /// undefined behavior that would follow from building the index
    /// over colliding input.
    pub(crate) fn validate(pattern: &[u8], text: &[u8]) -> Result<()> {
        if let Some(pos) = pattern.iter().position(|&b| b == SENTINEL) {
            return Err(EngineError::sentinel_collision(pos));
        }
        if let Some(pos) = text.iter().position(|&b| b == SENTINEL) {
            return Err(EngineError::sentinel_collision(pattern.len() + pos));
        }
        Ok(())
    }

    /// Length of the longest common prefix between `pattern[i_p..]` and
    /// `text[i_t..]`.
    pub(crate) fn lcp(&self, i_p: usize, i_t: usize) -> usize {
        assert!(i_p <= self.n_p, "LcpIndex::lcp: pattern offset out of bounds");
        assert!(i_t <= self.n_t, "LcpIndex::lcp: text offset out of bounds");

        if i_p == self.n_p || i_t == self.n_t {
            return 0;
        }

        let combined_p = i_p;
        let combined_t = self.n_p + i_t;
        self.lca.lcp(combined_p, combined_t)
    }

    pub(crate) fn pattern_len(&self) -> usize {
        self.n_p
    }

    pub(crate) fn text_len(&self) -> usize {
        self.n_t
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn lcp_naive(p: &[u8], t: &[u8], i_p: usize, i_t: usize) -> usize {
        let mut n = 0;
        while i_p + n < p.len() && i_t + n < t.len() && p[i_p + n] == t[i_t + n] {
            n += 1;
        }
        n
    }

    #[test]
    fn lcp_matches_naive_scan() {
        let pattern = b"banana";
        let text = b"ananas";
        let index = LcpIndex::new(pattern, text);
        for i_p in 0..pattern.len() {
            for i_t in 0..text.len() {
                assert_eq!(index.lcp(i_p, i_t), lcp_naive(pattern, text, i_p, i_t));
            }
        }
    }

    #[test]
    fn lcp_is_zero_at_pattern_or_text_end() {
        let index = LcpIndex::new(b"abc", b"xyz");
        assert_eq!(index.lcp(3, 0), 0);
        assert_eq!(index.lcp(0, 3), 0);
    }

    #[test]
    fn validate_rejects_sentinel_in_pattern() {
        let err = LcpIndex::validate(b"ab\0c", b"xyz").unwrap_err();
        assert!(matches!(err, EngineError::SentinelCollision { position: 2 }));
    }

    #[test]
    fn validate_rejects_sentinel_in_text_with_offset_past_pattern() {
        let err = LcpIndex::validate(b"ab", b"xy\0z").unwrap_err();
        assert!(matches!(err, EngineError::SentinelCollision { position: 4 }));
    }

    #[test]
    fn validate_accepts_clean_input() {
        assert!(LcpIndex::validate(b"abc", b"xyz").is_ok());
    }
}
