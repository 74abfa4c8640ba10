/*!
Constant-time range-minimum query over a ±1 array (Bender-Farach-Colton).

The array is split into blocks of size `b = floor(log2 n) / 2` (clamped
to at least 1, which subsumes the "array too small to block" case: with
`b == 1` every element is its own block, in-block lookups are trivial,
and every query reduces to the sparse table over the whole array —
exactly the fallback the design calls for, without a separate code
path). Within a block, every possible ±1 signature has its argmin
precomputed for every sub-range; across blocks, a doubling sparse table
answers whole-block-range queries in O(1).
*/

use crate::containers::MultiArray;

fn floor_log2(x: usize) -> usize {
    assert!(x >= 1, "floor_log2: x must be >= 1");
    (usize::BITS - 1 - x.leading_zeros()) as usize
}

/// A sparse table over a fixed base array, storing at each doubling
/// level the absolute index (into `values`) of the minimum over the
/// corresponding window of base positions.
struct SparseTable {
    /// `levels[y][x]` = absolute index of the min over base positions
    /// `[x, x + 2^y)`.
    levels: MultiArray<u32>,
    base_len: usize,
}

impl SparseTable {
    fn build(values: &[u32], base: &[usize]) -> Self {
        let base_len = base.len();
        let n_y = if base_len <= 1 { 1 } else { floor_log2(base_len) + 1 };
        let mut levels: MultiArray<u32> = MultiArray::new(&[n_y, base_len.max(1)], u32::MAX);

        for (x, &idx) in base.iter().enumerate() {
            levels[&[0, x][..]] = idx as u32;
        }

        for y in 1..n_y {
            let half = 1usize << (y - 1);
            let width = 1usize << y;
            if width > base_len {
                break;
            }
            for x in 0..=(base_len - width) {
                let a = levels[&[y - 1, x][..]];
                let b = levels[&[y - 1, x + half][..]];
                levels[&[y, x][..]] = if values[a as usize] <= values[b as usize] { a } else { b };
            }
        }

        Self { levels, base_len }
    }

    /// Inclusive range `[l, r]` over base positions.
    fn query(&self, values: &[u32], l: usize, r: usize) -> usize {
        debug_assert!(l <= r && r < self.base_len);
        let len = r - l + 1;
        let y = floor_log2(len);
        let a = self.levels[&[y, l][..]] as usize;
        let b = self.levels[&[y, r + 1 - (1 << y)][..]] as usize;
        if values[a] <= values[b] {
            a
        } else {
            b
        }
    }
}

/// Constant-time RMQ over an array whose adjacent entries differ by
/// exactly ±1 (a condition the LCA layer's depth array always
/// satisfies).
pub(crate) struct RmqPmOne {
    values: Vec<u32>,
    block_size: usize,
    block_len: Vec<usize>,
    block_signature: Vec<u32>,
    /// `in_block[[signature, l, r]]` = block-relative index of the
    /// minimum of the partial-sum sequence over `[l, r]`, starting at 0
    /// and evolving by -1 for a 0 bit (descending step) or +1 for a 1
    /// bit (ascending step).
    in_block: MultiArray<u32>,
    block_sparse: SparseTable,
}

impl RmqPmOne {
    pub(crate) fn new(values: Vec<u32>) -> Self {
        let n = values.len();
        assert!(n >= 1, "RmqPmOne::new: array must be non-empty");

        let block_size = (floor_log2(n) / 2).max(1);
        let n_blocks = (n + block_size - 1) / block_size;

        let block_len: Vec<usize> = (0..n_blocks)
            .map(|i| block_size.min(n - i * block_size))
            .collect();

        let signature_bits = block_size.saturating_sub(1);
        let signature_count = 1usize << signature_bits;

        let mut in_block: MultiArray<u32> =
            MultiArray::new(&[signature_count.max(1), block_size, block_size], 0);
        for signature in 0..signature_count.max(1) {
            for l in 0..block_size {
                let mut running: i64 = 0;
                let mut best_val: i64 = 0;
                let mut best_pos = l;
                in_block[&[signature, l, l][..]] = l as u32;
                for r in (l + 1)..block_size {
                    let bit = (signature >> (r - 1)) & 1;
                    running += if bit == 1 { 1 } else { -1 };
                    if running < best_val {
                        best_val = running;
                        best_pos = r;
                    }
                    in_block[&[signature, l, r][..]] = best_pos as u32;
                }
            }
        }

        let mut block_signature = vec![0u32; n_blocks];
        for (i, signature) in block_signature.iter_mut().enumerate() {
            let width = block_len[i];
            let mut sig = 0u32;
            for j in 0..width.saturating_sub(1) {
                let a = values[i * block_size + j];
                let b = values[i * block_size + j + 1];
                if b > a {
                    sig |= 1 << j;
                }
            }
            *signature = sig;
        }

        let block_min_abs: Vec<usize> = (0..n_blocks)
            .map(|i| {
                let sig = block_signature[i] as usize;
                let local = in_block[&[sig, 0, block_len[i] - 1][..]] as usize;
                i * block_size + local
            })
            .collect();

        let block_sparse = SparseTable::build(&values, &block_min_abs);

        Self {
            values,
            block_size,
            block_len,
            block_signature,
            in_block,
            block_sparse,
        }
    }

    fn local_min(&self, block: usize, l: usize, r: usize) -> usize {
        let sig = self.block_signature[block] as usize;
        block * self.block_size + self.in_block[&[sig, l, r][..]] as usize
    }

    fn better(&self, a: usize, b: usize) -> usize {
        if self.values[a] <= self.values[b] {
            a
        } else {
            b
        }
    }

    /// Inclusive range query `[l, r]`, `0 <= l <= r < n`. Returns the
    /// absolute index of a minimum (ties broken by earliest position).
    pub(crate) fn query(&self, l: usize, r: usize) -> usize {
        assert!(l <= r && r < self.values.len(), "RmqPmOne::query: range out of bounds");

        let bl = l / self.block_size;
        let br = r / self.block_size;

        if bl == br {
            return self.local_min(bl, l - bl * self.block_size, r - bl * self.block_size);
        }

        let left = self.local_min(bl, l - bl * self.block_size, self.block_len[bl] - 1);
        let right = self.local_min(br, 0, r - br * self.block_size);
        let mut best = self.better(left, right);

        if bl + 1 <= br.saturating_sub(1) {
            let mid = self.block_sparse.query(&self.values, bl + 1, br - 1);
            best = self.better(best, mid);
        }

        best
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn naive_rmq(values: &[u32], l: usize, r: usize) -> u32 {
        *values[l..=r].iter().min().unwrap()
    }

    fn pm_one_array(steps: &[bool]) -> Vec<u32> {
        let mut v = vec![0i64];
        for &up in steps {
            let last = *v.last().unwrap();
            v.push(if up { last + 1 } else { last - 1 });
        }
        let min = *v.iter().min().unwrap();
        v.into_iter().map(|x| (x - min) as u32).collect()
    }

    #[test]
    fn single_element() {
        let rmq = RmqPmOne::new(vec![5]);
        assert_eq!(rmq.query(0, 0), 0);
    }

    #[test]
    fn small_mountain() {
        let values = pm_one_array(&[true, true, false, false, true, false]);
        let rmq = RmqPmOne::new(values.clone());
        for l in 0..values.len() {
            for r in l..values.len() {
                let idx = rmq.query(l, r);
                assert_eq!(values[idx], naive_rmq(&values, l, r));
            }
        }
    }

    proptest! {
        #[test]
        fn agrees_with_naive_scan(steps in prop::collection::vec(any::<bool>(), 2..300)) {
            let values = pm_one_array(&steps);
            let rmq = RmqPmOne::new(values.clone());
            let n = values.len();
            let idx = rmq.query(0, n - 1);
            prop_assert_eq!(values[idx], naive_rmq(&values, 0, n - 1));
        }

        #[test]
        fn agrees_with_naive_scan_on_random_ranges(
            steps in prop::collection::vec(any::<bool>(), 2..300),
            a in 0usize..300,
            b in 0usize..300,
        ) {
            let values = pm_one_array(&steps);
            let n = values.len();
            let l = a.min(n - 1).min(b.min(n - 1));
            let r = a.min(n - 1).max(b.min(n - 1));
            let rmq = RmqPmOne::new(values.clone());
            let idx = rmq.query(l, r);
            prop_assert_eq!(values[idx], naive_rmq(&values, l, r));
        }
    }
}
