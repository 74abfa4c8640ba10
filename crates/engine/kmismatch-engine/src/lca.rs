/*!
Lowest common ancestor queries via an Euler tour reduced to ±1 RMQ
(Bender-Farach-Colton).

The suffix tree is walked once with an explicit stack (not recursion,
so traversal depth never threatens the call stack) to produce three
parallel arrays: the sequence of nodes visited on an Euler tour, the
tree depth at each tour step (which changes by exactly ±1 between
consecutive steps, satisfying the RMQ layer's precondition), and the
first tour position at which each node appears. The LCA of two nodes is
then the shallowest node between their first occurrences, found by one
RMQ query.
*/

use crate::containers::FixedVec;
use crate::rmq::RmqPmOne;
use crate::suffix_tree::{NodeId, SuffixTree};

pub(crate) struct Lca {
    euler: Vec<NodeId>,
    first_index: Vec<u32>,
    string_depth: Vec<u32>,
    rmq: RmqPmOne,
    /// Leaf node for each suffix start offset into the tree's text.
    leaf_for_suffix: Vec<NodeId>,
}

struct Frame {
    node: NodeId,
    depth: u32,
    /// Next byte to try when looking for an unvisited child.
    next_byte: u16,
}

impl Lca {
    pub(crate) fn build(tree: &SuffixTree, text_len: usize) -> Self {
        let node_count = tree.node_count();
        let euler_len = 2 * node_count - 1;

        let mut euler: FixedVec<NodeId> = FixedVec::with_capacity(euler_len);
        let mut tree_depth: FixedVec<u32> = FixedVec::with_capacity(euler_len);
        let mut first_index = vec![u32::MAX; node_count];
        let mut string_depth = vec![0u32; node_count];
        let mut leaf_for_suffix = vec![NodeId::ROOT; text_len];
        let mut has_child = vec![false; node_count];

        let root = tree.root();
        let mut stack: Vec<Frame> = vec![Frame { node: root, depth: 0, next_byte: 0 }];
        first_index[root.index()] = 0;
        euler.push(root);
        tree_depth.push(0);

        while let Some(frame) = stack.last_mut() {
            let parent = frame.node;
            let parent_depth = frame.depth;
            let mut descended = None;

            while (frame.next_byte as usize) < 256 {
                let byte = frame.next_byte as u8;
                frame.next_byte += 1;
                if let Some(child) = tree.child(parent, byte) {
                    has_child[parent.index()] = true;
                    string_depth[child.index()] =
                        string_depth[parent.index()] + tree.node(child).edge_length() as u32;
                    first_index[child.index()] = euler.len() as u32;
                    euler.push(child);
                    tree_depth.push(parent_depth + 1);
                    descended = Some(child);
                    break;
                }
            }

            if let Some(child) = descended {
                stack.push(Frame { node: child, depth: parent_depth + 1, next_byte: 0 });
                continue;
            }

            let finished = stack.pop().expect("stack non-empty in loop guard");
            if !has_child[finished.node.index()] {
                let start = text_len - string_depth[finished.node.index()] as usize;
                leaf_for_suffix[start] = finished.node;
            }
            if let Some(parent_frame) = stack.last() {
                euler.push(parent_frame.node);
                tree_depth.push(parent_frame.depth);
            }
        }

        let depth_values: Vec<u32> = tree_depth.into_vec();
        let rmq = RmqPmOne::new(depth_values);

        Self {
            euler: euler.into_vec(),
            first_index,
            string_depth,
            rmq,
            leaf_for_suffix,
        }
    }

    /// String-depth (accumulated edge length from the root) of the
    /// lowest common ancestor of the leaves rooted at suffix starts `a`
    /// and `b`. This is exactly the length of their longest common
    /// prefix.
    pub(crate) fn lcp(&self, a: usize, b: usize) -> usize {
        if a == b {
            return self.string_depth[self.leaf_for_suffix[a].index()] as usize;
        }
        let leaf_a = self.leaf_for_suffix[a];
        let leaf_b = self.leaf_for_suffix[b];
        let fa = self.first_index[leaf_a.index()] as usize;
        let fb = self.first_index[leaf_b.index()] as usize;
        let (lo, hi) = if fa <= fb { (fa, fb) } else { (fb, fa) };
        let euler_pos = self.rmq.query(lo, hi);
        let lca_node = self.euler[euler_pos];
        self.string_depth[lca_node.index()] as usize
    }
}
