//! General exact decomposition over the frontier coordinate grid.
//!
//! For three or more objectives the non-dominated region is no longer a
//! staircase, so it is carved out of the per-coordinate grid spanned by the
//! frontier values instead. Candidate boxes live in index space: for each
//! coordinate, index 0 stands for `+inf`, indices `1..=g` for the distinct
//! frontier values in descending order, and `g + 1` for the reference
//! coordinate. A worklist splits candidate boxes until each one lies
//! entirely inside or outside the dominated region:
//!
//! - a box none of whose points are dominated is emitted as a cell,
//! - a box some frontier point fully dominates is discarded,
//! - anything else straddles the frontier and is split along its longest
//!   index edge.
//!
//! Classification happens purely on integer ranks, so a straddling box
//! always has an edge spanning at least two grid steps and the loop
//! terminates. Frontier values closer than `eps` are merged when the grid
//! is built; no emitted cell has a side narrower than `eps`.

use crate::data::{Cell, Matrix};
use crate::scalar::CellScalar;

/// Per-coordinate value grid plus the rank of every frontier point in it.
struct FrontGrid<T> {
    /// Distinct (eps-merged) frontier values per coordinate, descending.
    reps: Vec<Vec<T>>,
    /// 1-based rank of each frontier point in each coordinate's `reps`.
    ranks: Vec<Vec<usize>>,
}

impl<T: CellScalar> FrontGrid<T> {
    fn build(front: &Matrix<T>, eps: T) -> Self {
        let n = front.rows();
        let m = front.cols();
        let mut reps = Vec::with_capacity(m);
        let mut ranks = vec![vec![0usize; m]; n];
        for j in 0..m {
            let mut order: Vec<usize> = (0..n).collect();
            order.sort_by(|&a, &b| {
                front
                    .get(b, j)
                    .partial_cmp(&front.get(a, j))
                    .unwrap_or(std::cmp::Ordering::Equal)
            });
            let mut col_reps: Vec<T> = Vec::with_capacity(n);
            for &idx in &order {
                let v = front.get(idx, j);
                match col_reps.last() {
                    Some(&last) if last - v <= eps => {}
                    _ => col_reps.push(v),
                }
                ranks[idx][j] = col_reps.len();
            }
            reps.push(col_reps);
        }
        Self { reps, ranks }
    }

    /// Value of grid index `idx` in coordinate `j`.
    ///
    /// Index 0 is `+inf`, the largest index is the reference coordinate.
    #[inline]
    fn value(&self, j: usize, idx: usize, ref_point: &[T]) -> T {
        if idx == 0 {
            T::infinity()
        } else if idx <= self.reps[j].len() {
            self.reps[j][idx - 1]
        } else {
            ref_point[j]
        }
    }
}

/// Candidate box in index space: per coordinate, the half-open index span
/// `lo[j]..hi[j]` stands for the value interval `(value(hi), value(lo))`.
struct IndexBox {
    lo: Vec<usize>,
    hi: Vec<usize>,
}

/// Cells tiling the non-dominated region for a front of `m >= 3` objectives.
///
/// Emission order is deterministic for a given front but otherwise
/// unspecified; callers must treat the result as a set.
pub(crate) fn partition_grid<T: CellScalar>(
    front: &Matrix<T>,
    ref_point: &[T],
    eps: T,
) -> Vec<Cell<T>> {
    let m = ref_point.len();
    if front.is_empty() {
        return vec![Cell {
            lower: ref_point.to_vec(),
            upper: vec![T::infinity(); m],
        }];
    }
    let grid = FrontGrid::build(front, eps);
    let mut cells = Vec::new();
    let mut stack = vec![IndexBox {
        lo: vec![0; m],
        hi: (0..m).map(|j| grid.reps[j].len() + 1).collect(),
    }];
    while let Some(cand) = stack.pop() {
        // non-dominated: every frontier point misses the box interior in
        // some coordinate
        let non_dominated = grid
            .ranks
            .iter()
            .all(|rank| rank.iter().zip(&cand.hi).any(|(&r, &hi)| r >= hi));
        if non_dominated {
            let lower: Vec<T> = (0..m)
                .map(|j| grid.value(j, cand.hi[j], ref_point))
                .collect();
            let upper: Vec<T> = (0..m)
                .map(|j| grid.value(j, cand.lo[j], ref_point))
                .collect();
            if lower.iter().zip(&upper).all(|(&lo, &up)| lo < up) {
                cells.push(Cell { lower, upper });
            }
            continue;
        }
        // fully dominated: one frontier point covers the entire box
        let dominated = grid
            .ranks
            .iter()
            .any(|rank| rank.iter().zip(&cand.lo).all(|(&r, &lo)| r <= lo));
        if dominated {
            continue;
        }
        // straddles the frontier: split along the longest index edge. The
        // straddle witness guarantees a span of at least two somewhere.
        let (d, span) = cand
            .hi
            .iter()
            .zip(&cand.lo)
            .map(|(&hi, &lo)| hi - lo)
            .enumerate()
            .max_by_key(|&(_, span)| span)
            .unwrap_or((0, 0));
        if span < 2 {
            continue;
        }
        let mid = cand.lo[d] + span / 2;
        let mut left = IndexBox {
            lo: cand.lo.clone(),
            hi: cand.hi.clone(),
        };
        left.hi[d] = mid;
        let mut right = cand;
        right.lo[d] = mid;
        stack.push(left);
        stack.push(right);
    }
    log::debug!(
        "grid partition: {} frontier points, {} objectives -> {} cells",
        front.rows(),
        m,
        cells.len()
    );
    cells
}
