use std::ops::RangeInclusive;

use crate::IndexError;

/// Identity of `min`; only ever produced by nodes disjoint from the query.
const IDENTITY: f64 = f64::INFINITY;

/// Range-minimum index over a snapshot of room rates.
///
/// Nodes use the implicit layout `2 * node + 1` / `2 * node + 2`, the root at
/// slot 0 covering `[0, n - 1]`. Every node stores the minimum of the leaves
/// below it.
#[derive(Clone, Debug)]
pub struct RangeMinIndex {
    n: usize,
    tree: Vec<f64>,
}

impl RangeMinIndex {
    pub fn new(rates: &[f64]) -> Result<Self, IndexError> {
        let n = rates.len();
        if n == 0 {
            return Err(IndexError::EmptyRates);
        }
        if let Some(index) = rates.iter().position(|rate| rate.is_nan()) {
            return Err(IndexError::NanRate { index });
        }

        // Depth is ceil(log2 n), so every slot index stays below 2 * 2^depth.
        let mut tree = vec![IDENTITY; 2 * n.next_power_of_two()];
        build(&mut tree, rates, 0, 0, n - 1);

        Ok(Self { n, tree })
    }

    pub fn len(&self) -> usize {
        self.n
    }

    /// Minimum rate over the inclusive index range `left..=right`.
    pub fn min(&self, range: RangeInclusive<usize>) -> Result<f64, IndexError> {
        let (left, right) = range.into_inner();
        if left > right {
            return Err(IndexError::InvertedRange { left, right });
        }
        if right >= self.n {
            return Err(IndexError::OutOfBounds {
                right,
                len: self.n,
            });
        }

        Ok(self.query(0, 0, self.n - 1, left, right))
    }

    fn query(&self, node: usize, start: usize, end: usize, left: usize, right: usize) -> f64 {
        if start > right || end < left {
            return IDENTITY;
        }
        if left <= start && end <= right {
            return self.tree[node];
        }

        let mid = start + (end - start) / 2;
        let lhs = self.query(2 * node + 1, start, mid, left, right);
        let rhs = self.query(2 * node + 2, mid + 1, end, left, right);
        lhs.min(rhs)
    }
}

fn build(tree: &mut [f64], rates: &[f64], node: usize, start: usize, end: usize) {
    if start == end {
        tree[node] = rates[start];
        return;
    }

    let mid = start + (end - start) / 2;
    build(tree, rates, 2 * node + 1, start, mid);
    build(tree, rates, 2 * node + 2, mid + 1, end);
    tree[node] = tree[2 * node + 1].min(tree[2 * node + 2]);
}
