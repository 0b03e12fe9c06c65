//! Exact two-objective sweep.
//!
//! With the front sorted by descending first objective (hence ascending
//! second objective), the non-dominated region above the reference point
//! decomposes in closed form into `n + 1` cells: one staircase step per
//! frontier point plus the two unbounded flanks. Boundary values are taken
//! verbatim from the frontier and reference coordinates; no tolerance is
//! applied on this path.

use crate::data::{Cell, Matrix};
use crate::scalar::CellScalar;

/// Cells tiling the non-dominated region for a two-objective front.
///
/// `front` must be sorted by descending first objective. An empty front
/// yields the single cell from the reference point to `+inf`.
pub(crate) fn sweep_two_objectives<T: CellScalar>(
    front: &Matrix<T>,
    ref_point: &[T],
) -> Vec<Cell<T>> {
    let inf = T::infinity();
    let n = front.rows();
    if n == 0 {
        return vec![Cell {
            lower: ref_point.to_vec(),
            upper: vec![inf; 2],
        }];
    }
    let mut cells = Vec::with_capacity(n + 1);
    // flank beyond the best first objective: open in both coordinates
    cells.push(Cell {
        lower: vec![front.get(0, 0), ref_point[1]],
        upper: vec![inf, inf],
    });
    // one step per adjacent frontier pair
    for i in 1..n {
        cells.push(Cell {
            lower: vec![front.get(i, 0), front.get(i - 1, 1)],
            upper: vec![front.get(i - 1, 0), inf],
        });
    }
    // flank beyond the best second objective, down to the reference point
    cells.push(Cell {
        lower: vec![ref_point[0], front.get(n - 1, 1)],
        upper: vec![front.get(n - 1, 0), inf],
    });
    cells
}
