//! Hypercell bounds: the (2, [batch,] num_cells, m) output of a decomposition.
//!
//! A [`Cell`] is one axis-aligned box given by its lower and upper corner.
//! [`CellBounds`] stacks the cells of every batch element into a single
//! uniform tensor, padding short elements with degenerate cells
//! (`lower == upper`) so downstream volume sums need no special-casing:
//! a degenerate box has zero width in every coordinate and contributes
//! exactly zero.

use crate::scalar::CellScalar;
use serde::{Deserialize, Serialize};

/// One axis-aligned hyperrectangle, `lower[j] <= upper[j]` per coordinate.
///
/// Upper coordinates may be `+inf` for sides that are unbounded toward
/// better values.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Cell<T> {
    /// Lower (worse) corner.
    pub lower: Vec<T>,
    /// Upper (better) corner.
    pub upper: Vec<T>,
}

impl<T: CellScalar> Cell<T> {
    /// A zero-volume cell collapsed onto `corner`; used for batch padding.
    pub fn degenerate(corner: &[T]) -> Self {
        Self {
            lower: corner.to_vec(),
            upper: corner.to_vec(),
        }
    }

    /// Whether the cell has zero width in every coordinate.
    pub fn is_degenerate(&self) -> bool {
        self.lower == self.upper
    }
}

/// Stacked cell bounds for every batch element, shape `(2, [b,] k, m)`.
///
/// # Invariants
///
/// - `lower.len() == upper.len() == batch_elements * num_cells * num_outcomes`.
/// - Every batch element holds exactly `num_cells` cells; elements whose
///   decomposition produced fewer were padded with degenerate cells.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct CellBounds<T> {
    lower: Vec<T>,
    upper: Vec<T>,
    batch: Option<usize>,
    num_cells: usize,
    num_outcomes: usize,
}

impl<T: CellScalar> CellBounds<T> {
    /// Bounds for a single (unbatched) decomposition.
    pub(crate) fn from_single(cells: Vec<Cell<T>>, num_outcomes: usize) -> Self {
        let num_cells = cells.len();
        let mut lower = Vec::with_capacity(num_cells * num_outcomes);
        let mut upper = Vec::with_capacity(num_cells * num_outcomes);
        for cell in &cells {
            lower.extend_from_slice(&cell.lower);
            upper.extend_from_slice(&cell.upper);
        }
        Self {
            lower,
            upper,
            batch: None,
            num_cells,
            num_outcomes,
        }
    }

    /// Bounds for a batch, padded to the largest per-element cell count
    /// with degenerate cells collapsed onto `pad_corner`.
    pub(crate) fn from_batches(
        elements: Vec<Vec<Cell<T>>>,
        num_outcomes: usize,
        pad_corner: &[T],
    ) -> Self {
        let batch = elements.len();
        let num_cells = elements.iter().map(Vec::len).max().unwrap_or(0);
        let mut lower = Vec::with_capacity(batch * num_cells * num_outcomes);
        let mut upper = Vec::with_capacity(batch * num_cells * num_outcomes);
        for cells in &elements {
            for cell in cells {
                lower.extend_from_slice(&cell.lower);
                upper.extend_from_slice(&cell.upper);
            }
            for _ in cells.len()..num_cells {
                lower.extend_from_slice(pad_corner);
                upper.extend_from_slice(pad_corner);
            }
        }
        Self {
            lower,
            upper,
            batch: Some(batch),
            num_cells,
            num_outcomes,
        }
    }

    /// `Some(b)` for batched bounds, `None` for a single decomposition.
    #[inline]
    pub fn batch_size(&self) -> Option<usize> {
        self.batch
    }

    /// Cells per batch element (after padding).
    #[inline]
    pub fn num_cells(&self) -> usize {
        self.num_cells
    }

    /// Number of objectives.
    #[inline]
    pub fn num_outcomes(&self) -> usize {
        self.num_outcomes
    }

    /// Tensor shape as `(2, batch, num_cells, num_outcomes)`; `batch` is
    /// `None` when the decomposition was unbatched.
    pub fn shape(&self) -> (usize, Option<usize>, usize, usize) {
        (2, self.batch, self.num_cells, self.num_outcomes)
    }

    #[inline]
    fn offset(&self, elem: usize, cell: usize) -> usize {
        debug_assert!(elem < self.batch.unwrap_or(1));
        debug_assert!(cell < self.num_cells);
        (elem * self.num_cells + cell) * self.num_outcomes
    }

    /// Lower corner of cell `cell` in batch element `elem` (`0` if unbatched).
    pub fn lower(&self, elem: usize, cell: usize) -> &[T] {
        let o = self.offset(elem, cell);
        &self.lower[o..o + self.num_outcomes]
    }

    /// Upper corner of cell `cell` in batch element `elem` (`0` if unbatched).
    pub fn upper(&self, elem: usize, cell: usize) -> &[T] {
        let o = self.offset(elem, cell);
        &self.upper[o..o + self.num_outcomes]
    }

    /// Whether the stored cell is a degenerate padding cell.
    pub fn is_padding(&self, elem: usize, cell: usize) -> bool {
        self.lower(elem, cell) == self.upper(elem, cell)
    }

    /// Owned copies of the non-padding cells of one batch element.
    pub fn element_cells(&self, elem: usize) -> Vec<Cell<T>> {
        (0..self.num_cells)
            .filter(|&c| !self.is_padding(elem, c))
            .map(|c| Cell {
                lower: self.lower(elem, c).to_vec(),
                upper: self.upper(elem, c).to_vec(),
            })
            .collect()
    }
}
