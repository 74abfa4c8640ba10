/*!
A Landau-Vishkin k-mismatch matching kernel.

Finds the best alignment of a pattern against a text allowing up to `k`
character mismatches, without scanning each alignment character by
character. The kernel builds a generalized suffix tree once over
`pattern · text · sentinel`, reduces longest-common-prefix queries to
lowest-common-ancestor queries via an Euler tour, and answers LCA in
O(1) with range-minimum queries over a ±1 array. Each alignment is then
checked in O(k) "kangaroo jumps" instead of O(m) character comparisons.

# Layout

- [`containers`]: fixed-capacity and dense N-dimensional arrays used to
  back the tree, Euler tour, and RMQ tables without reallocation.
- [`suffix_tree`]: Ukkonen's online suffix-tree construction.
- [`rmq`]: constant-time range-minimum query over a ±1 array.
- [`lca`]: Euler tour + RMQ reduction, giving O(1) lowest-common-ancestor.
- [`lcp`]: longest-common-prefix queries between a pattern and a text.
- [`kangaroo`]: the k-mismatch matcher built on top of LCP queries.

# Usage

```rust
use kmismatch_engine::{min_kangaroo, Mismatches};

let result = min_kangaroo(1, b"kitten", b"a sitten sat here");
assert_eq!(result, Mismatches::Match(1));
```

# Errors vs. panics

Conditions a caller can trigger by passing bad top-level input (a
pattern or text containing the reserved sentinel byte) surface as
[`EngineError`] through [`validate_inputs`]. Conditions that are
programmer errors inside the kernel itself — an out-of-range suffix
offset, a fixed-capacity container pushed past its declared size —
panic; they indicate a bug in this crate, not bad caller input, and
are never meant to be handled by callers.
*/

mod containers;
pub mod error;
mod kangaroo;
mod lca;
mod lcp;
mod rmq;
mod suffix_tree;

use crate::lcp::LcpIndex;

pub use error::{EngineError, Result};
pub use kangaroo::{min_kangaroo, Mismatches};

/// Validates that neither `pattern` nor `text` contains the sentinel
/// byte (`0x00`) the kernel reserves for suffix-tree construction.
///
/// Callers that cannot otherwise guarantee clean input should call this
/// before [`min_kangaroo`]; `min_kangaroo` itself does not check, since
/// doing so on every call would cost an extra O(n) scan on a hot path
/// that is normally fed already-validated input.
pub fn validate_inputs(pattern: &[u8], text: &[u8]) -> Result<()> {
    LcpIndex::validate(pattern, text)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn validate_inputs_is_reexported_and_works() {
        assert!(validate_inputs(b"abc", b"xyz").is_ok());
        assert!(validate_inputs(b"ab\0c", b"xyz").is_err());
    }
}
