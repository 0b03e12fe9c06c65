//! Hypervolume evaluation over a hypercell decomposition.
//!
//! The cells tile the *non-dominated* region above the reference point, so
//! the volume dominated by the frontier is recovered by subtraction: take
//! the box spanned by the reference point and the ideal point (coordinate-
//! wise frontier maximum), and remove the part of that box covered by
//! non-dominated cells. Cell upper corners are clamped to the ideal point,
//! widths are clamped at zero, so unbounded sides and degenerate padding
//! cells drop out of the sum without special-casing.

use crate::data::{CellBounds, Matrix};
use crate::error::ParetoCellError;
use crate::scalar::CellScalar;
use itertools::izip;

/// Result of a hypervolume evaluation: one scalar, or one per batch element.
#[derive(Clone, Debug, PartialEq)]
pub enum Hypervolume<T> {
    /// Volume of a single (unbatched) instance.
    Single(T),
    /// Per-element volumes of a batched instance, in batch order.
    Batched(Vec<T>),
}

impl<T: CellScalar> Hypervolume<T> {
    /// The scalar volume, if unbatched.
    pub fn as_scalar(&self) -> Option<T> {
        match self {
            Hypervolume::Single(v) => Some(*v),
            Hypervolume::Batched(_) => None,
        }
    }

    /// All volumes as a vector (length 1 when unbatched).
    pub fn to_vec(&self) -> Vec<T> {
        match self {
            Hypervolume::Single(v) => vec![*v],
            Hypervolume::Batched(vs) => vs.clone(),
        }
    }
}

/// Hypervolume of one batch element.
///
/// # Errors
/// Returns `Err(RefPointNotDominated)` if any frontier point fails to
/// strictly exceed the reference point in every coordinate. An empty
/// frontier yields exactly zero.
pub(crate) fn element_hypervolume<T: CellScalar>(
    front: &Matrix<T>,
    bounds: &CellBounds<T>,
    elem: usize,
    ref_point: &[T],
) -> Result<T, ParetoCellError> {
    if front.is_empty() {
        return Ok(T::zero());
    }
    for (point, row) in front.iter_rows().enumerate() {
        if row.iter().zip(ref_point).any(|(&p, &r)| p <= r) {
            return Err(ParetoCellError::RefPointNotDominated { point });
        }
    }
    // col_max is Some for a non-empty front
    let Some(ideal) = front.col_max() else {
        return Ok(T::zero());
    };
    let mut total = T::one();
    for (&id, &r) in ideal.iter().zip(ref_point) {
        total = total * (id - r);
    }
    let mut non_dominated = T::zero();
    for cell in 0..bounds.num_cells() {
        let mut volume = T::one();
        for (&lo, &up, &id) in izip!(bounds.lower(elem, cell), bounds.upper(elem, cell), &ideal) {
            volume = volume * (up.min(id) - lo).max(T::zero());
        }
        non_dominated = non_dominated + volume;
    }
    Ok(total - non_dominated)
}
