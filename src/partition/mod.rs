//! Non-dominated partitioning: Pareto store, decomposition, batching.
//!
//! [`NondominatedPartitioning`] owns the accumulated outcome data for one
//! problem (or a one-level batch of independent problems), maintains the
//! Pareto front per batch element sorted by descending first objective,
//! and caches the hypercell decomposition of the non-dominated region.
//! The cache is invalidated only through [`update`], never by reads:
//! an update that leaves the front unchanged keeps the cached cells, so
//! repeated reads are bit-identical.
//!
//! Two decomposition paths exist. Two objectives use the exact closed-form
//! sweep (batched natively, padded to a uniform cell count). Three or more
//! objectives use the grid worklist (exact for `m = 3`, best-effort beyond);
//! only a single instance (or a batch of one) is supported there, and
//! larger batches are rejected as not implemented rather than truncated.

pub(crate) mod grid;
pub(crate) mod sweep2d;

use crate::data::{Cell, CellBounds, Matrix, Outcomes};
use crate::dominance::{pareto_front, strictly_better};
use crate::error::ParetoCellError;
use crate::hypervolume::{Hypervolume, element_hypervolume};
use crate::scalar::CellScalar;

/// Pareto store plus cached hypercell decomposition.
///
/// Construction fixes the reference point (and with it the objective
/// count); outcome data arrives through [`update`](Self::update). All
/// derived state (front, cells, hypervolume) is unavailable until the
/// first update and fails with
/// [`FrontNotComputed`](ParetoCellError::FrontNotComputed) before that.
#[derive(Clone, Debug)]
pub struct NondominatedPartitioning<T> {
    ref_point: Vec<T>,
    eps_override: Option<T>,
    outcomes: Option<Outcomes<T>>,
    front: Option<Outcomes<T>>,
    cells: Option<CellBounds<T>>,
    last_update_changed: bool,
}

impl<T: CellScalar> NondominatedPartitioning<T> {
    /// New empty partitioning anchored at `ref_point`.
    ///
    /// # Errors
    /// Returns `Err(TooFewObjectives)` for fewer than two coordinates.
    pub fn new(ref_point: Vec<T>) -> Result<Self, ParetoCellError> {
        if ref_point.len() < 2 {
            return Err(ParetoCellError::TooFewObjectives {
                found: ref_point.len(),
            });
        }
        Ok(Self {
            ref_point,
            eps_override: None,
            outcomes: None,
            front: None,
            cells: None,
            last_update_changed: false,
        })
    }

    /// New partitioning seeded with initial outcome data.
    pub fn with_outcomes(
        ref_point: Vec<T>,
        outcomes: impl Into<Outcomes<T>>,
    ) -> Result<Self, ParetoCellError> {
        let mut this = Self::new(ref_point)?;
        this.update(outcomes)?;
        Ok(this)
    }

    /// Override the boundary tolerance (default is precision-dependent,
    /// see [`CellScalar::DEFAULT_EPS`]).
    pub fn with_eps(mut self, eps: T) -> Self {
        self.eps_override = Some(eps);
        self
    }

    /// The boundary tolerance in effect.
    #[inline]
    pub fn eps(&self) -> T {
        self.eps_override.unwrap_or(T::DEFAULT_EPS)
    }

    /// The reference point.
    #[inline]
    pub fn ref_point(&self) -> &[T] {
        &self.ref_point
    }

    /// Number of objectives.
    #[inline]
    pub fn num_outcomes(&self) -> usize {
        self.ref_point.len()
    }

    /// Whether the most recent [`update`](Self::update) changed the front.
    #[inline]
    pub fn last_update_changed(&self) -> bool {
        self.last_update_changed
    }

    /// Merge new outcome vectors, recompute the Pareto front, and rebuild
    /// the hypercell decomposition if the front changed.
    ///
    /// Returns whether the front changed, so callers can skip downstream
    /// work after an update that added only dominated points.
    ///
    /// # Errors
    /// - `Err(EmptyBatch)` for a batch with no elements.
    /// - `Err(ObjectiveCountMismatch)` if the data width differs from the
    ///   reference point.
    /// - `Err(UnsupportedBatchedObjectives)` for a batch of more than one
    ///   element with three or more objectives.
    /// - `Err(BatchShapeMismatch)` if the batch shape differs from the one
    ///   established by the first update.
    pub fn update(&mut self, outcomes: impl Into<Outcomes<T>>) -> Result<bool, ParetoCellError> {
        let y = outcomes.into();
        let m = self.ref_point.len();
        if let Outcomes::Batched(elems) = &y {
            if elems.is_empty() {
                return Err(ParetoCellError::EmptyBatch);
            }
        }
        for elem in y.elements() {
            if elem.cols() != m {
                return Err(ParetoCellError::ObjectiveCountMismatch {
                    expected: m,
                    found: elem.cols(),
                });
            }
        }
        if let Some(batch_size) = y.batch_size() {
            if batch_size > 1 && m > 2 {
                return Err(ParetoCellError::UnsupportedBatchedObjectives {
                    batch_size,
                    num_outcomes: m,
                });
            }
        }
        match self.outcomes.as_mut() {
            None => self.outcomes = Some(y),
            Some(Outcomes::Single(a)) => match y {
                Outcomes::Single(b) => a.extend_rows(&b)?,
                other => {
                    return Err(ParetoCellError::BatchShapeMismatch {
                        expected: None,
                        found: other.batch_size(),
                    });
                }
            },
            Some(Outcomes::Batched(a)) => match y {
                Outcomes::Batched(b) if b.len() == a.len() => {
                    for (ma, mb) in a.iter_mut().zip(&b) {
                        ma.extend_rows(mb)?;
                    }
                }
                other => {
                    return Err(ParetoCellError::BatchShapeMismatch {
                        expected: Some(a.len()),
                        found: other.batch_size(),
                    });
                }
            },
        }
        // self.outcomes is Some after the merge above
        let store = self.outcomes.as_ref().ok_or(ParetoCellError::FrontNotComputed)?;
        let front = Self::compute_front(store, &self.ref_point);
        let changed = self.front.as_ref() != Some(&front);
        if changed {
            let cells = Self::partition(&front, &self.ref_point, self.eps());
            log::debug!(
                "front changed: {} element(s), {} cell(s) per element",
                front.batch_size().unwrap_or(1),
                cells.num_cells()
            );
            self.front = Some(front);
            self.cells = Some(cells);
        }
        self.last_update_changed = changed;
        Ok(changed)
    }

    /// The Pareto front(s), sorted by descending first objective.
    ///
    /// In batched mode each element's front retains only points strictly
    /// better than the reference point in every coordinate.
    ///
    /// # Errors
    /// `Err(FrontNotComputed)` before the first update.
    pub fn pareto_front(&self) -> Result<&Outcomes<T>, ParetoCellError> {
        self.front.as_ref().ok_or(ParetoCellError::FrontNotComputed)
    }

    /// The cached hypercell bounds, shape `(2, [batch,] num_cells, m)`.
    ///
    /// # Errors
    /// `Err(FrontNotComputed)` before the first update.
    pub fn hypercell_bounds(&self) -> Result<&CellBounds<T>, ParetoCellError> {
        self.cells.as_ref().ok_or(ParetoCellError::FrontNotComputed)
    }

    /// The two-objective entry point.
    ///
    /// # Errors
    /// `Err(RequiresTwoObjectives)` when the stored data has `m != 2`;
    /// `Err(FrontNotComputed)` before the first update.
    pub fn partition_space_2d(&self) -> Result<&CellBounds<T>, ParetoCellError> {
        if self.ref_point.len() != 2 {
            return Err(ParetoCellError::RequiresTwoObjectives {
                found: self.ref_point.len(),
            });
        }
        self.hypercell_bounds()
    }

    /// Hypervolume dominated between the reference point and the front,
    /// one scalar per batch element.
    ///
    /// # Errors
    /// `Err(FrontNotComputed)` before the first update;
    /// `Err(RefPointNotDominated)` if any retained frontier point does not
    /// strictly exceed the reference point in every coordinate.
    pub fn compute_hypervolume(&self) -> Result<Hypervolume<T>, ParetoCellError> {
        let front = self.front.as_ref().ok_or(ParetoCellError::FrontNotComputed)?;
        let cells = self.cells.as_ref().ok_or(ParetoCellError::FrontNotComputed)?;
        match front {
            Outcomes::Single(f) => Ok(Hypervolume::Single(element_hypervolume(
                f,
                cells,
                0,
                &self.ref_point,
            )?)),
            Outcomes::Batched(fs) => {
                let volumes = fs
                    .iter()
                    .enumerate()
                    .map(|(elem, f)| element_hypervolume(f, cells, elem, &self.ref_point))
                    .collect::<Result<Vec<_>, _>>()?;
                Ok(Hypervolume::Batched(volumes))
            }
        }
    }

    fn compute_front(store: &Outcomes<T>, ref_point: &[T]) -> Outcomes<T> {
        match store {
            Outcomes::Single(y) => Outcomes::Single(pareto_front(y)),
            Outcomes::Batched(ys) => Outcomes::Batched(
                ys.iter()
                    .map(|y| pareto_front(&y.filter_rows(|row| strictly_better(row, ref_point))))
                    .collect(),
            ),
        }
    }

    fn element_cells(front: &Matrix<T>, ref_point: &[T], eps: T) -> Vec<Cell<T>> {
        if ref_point.len() == 2 {
            sweep2d::sweep_two_objectives(front, ref_point)
        } else {
            grid::partition_grid(front, ref_point, eps)
        }
    }

    fn partition(front: &Outcomes<T>, ref_point: &[T], eps: T) -> CellBounds<T> {
        let m = ref_point.len();
        match front {
            Outcomes::Single(f) => {
                CellBounds::from_single(Self::element_cells(f, ref_point, eps), m)
            }
            Outcomes::Batched(fs) => {
                #[cfg(feature = "rayon")]
                let per_element: Vec<Vec<Cell<T>>> = {
                    use rayon::prelude::*;
                    fs.par_iter()
                        .map(|f| Self::element_cells(f, ref_point, eps))
                        .collect()
                };
                #[cfg(not(feature = "rayon"))]
                let per_element: Vec<Vec<Cell<T>>> = fs
                    .iter()
                    .map(|f| Self::element_cells(f, ref_point, eps))
                    .collect();
                CellBounds::from_batches(per_element, m, ref_point)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use static_assertions::assert_impl_all;

    // single-owner data; nothing in the type blocks cross-thread handoff
    assert_impl_all!(NondominatedPartitioning<f64>: Send, Sync);

    fn m(rows: Vec<Vec<f64>>) -> Matrix<f64> {
        Matrix::from_rows(rows).unwrap()
    }

    #[test]
    fn derived_state_requires_an_update() {
        let part = NondominatedPartitioning::<f64>::new(vec![0.0, 0.0]).unwrap();
        assert_eq!(
            part.pareto_front().unwrap_err(),
            ParetoCellError::FrontNotComputed
        );
        assert_eq!(
            part.hypercell_bounds().unwrap_err(),
            ParetoCellError::FrontNotComputed
        );
        assert_eq!(
            part.compute_hypervolume().unwrap_err(),
            ParetoCellError::FrontNotComputed
        );
    }

    #[test]
    fn eps_default_and_override() {
        let part = NondominatedPartitioning::<f64>::new(vec![0.0, 0.0]).unwrap();
        assert_eq!(part.eps(), 1e-8);
        let part32 = NondominatedPartitioning::<f32>::new(vec![0.0, 0.0]).unwrap();
        assert_eq!(part32.eps(), 1e-6);
        let part = NondominatedPartitioning::<f64>::new(vec![0.0, 0.0])
            .unwrap()
            .with_eps(1.0);
        assert_eq!(part.eps(), 1.0);
    }

    #[test]
    fn reference_point_needs_two_objectives() {
        let err = NondominatedPartitioning::<f64>::new(vec![0.0]).unwrap_err();
        assert_eq!(err, ParetoCellError::TooFewObjectives { found: 1 });
    }

    #[test]
    fn update_reports_front_changes() {
        let mut part = NondominatedPartitioning::new(vec![0.0, 0.0]).unwrap();
        assert!(part.update(m(vec![vec![2.0, 2.0]])).unwrap());
        // dominated point: front unchanged, cells untouched
        let before = part.hypercell_bounds().unwrap().clone();
        assert!(!part.update(m(vec![vec![1.0, 1.0]])).unwrap());
        assert!(!part.last_update_changed());
        assert_eq!(part.hypercell_bounds().unwrap(), &before);
        // a new non-dominated point changes the front
        assert!(part.update(m(vec![vec![3.0, 1.0]])).unwrap());
        assert!(part.last_update_changed());
    }

    #[test]
    fn objective_count_is_validated() {
        let mut part = NondominatedPartitioning::new(vec![0.0, 0.0]).unwrap();
        let err = part.update(m(vec![vec![1.0, 2.0, 3.0]])).unwrap_err();
        assert_eq!(
            err,
            ParetoCellError::ObjectiveCountMismatch {
                expected: 2,
                found: 3
            }
        );
    }

    #[test]
    fn batched_three_objectives_not_implemented() {
        let y = vec![
            m(vec![vec![1.0, 2.0, 3.0]]),
            m(vec![vec![2.0, 3.0, 1.0]]),
        ];
        let err =
            NondominatedPartitioning::with_outcomes(vec![0.0, 0.0, 0.0], y).unwrap_err();
        assert_eq!(
            err,
            ParetoCellError::UnsupportedBatchedObjectives {
                batch_size: 2,
                num_outcomes: 3
            }
        );
    }

    #[test]
    fn batch_of_one_with_three_objectives_is_allowed() {
        let y = vec![m(vec![vec![1.0, 2.0, 3.0], vec![2.0, 3.0, 1.0]])];
        let part =
            NondominatedPartitioning::with_outcomes(vec![0.0, 0.0, 0.0], y).unwrap();
        let bounds = part.hypercell_bounds().unwrap();
        assert_eq!(bounds.batch_size(), Some(1));
        let hv = part.compute_hypervolume().unwrap();
        assert_eq!(hv.to_vec().len(), 1);
    }

    #[test]
    fn two_d_entry_point_rejects_other_widths() {
        let part = NondominatedPartitioning::with_outcomes(
            vec![0.0, 0.0, 0.0],
            m(vec![vec![1.0, 2.0, 3.0]]),
        )
        .unwrap();
        let err = part.partition_space_2d().unwrap_err();
        assert_eq!(err, ParetoCellError::RequiresTwoObjectives { found: 3 });
    }

    #[test]
    fn batch_shape_is_sticky_across_updates() {
        let mut part = NondominatedPartitioning::new(vec![0.0, 0.0]).unwrap();
        part.update(vec![m(vec![vec![1.0, 2.0]]), m(vec![vec![2.0, 1.0]])])
            .unwrap();
        let err = part.update(m(vec![vec![3.0, 3.0]])).unwrap_err();
        assert_eq!(
            err,
            ParetoCellError::BatchShapeMismatch {
                expected: Some(2),
                found: None
            }
        );
        let err = part
            .update(vec![m(vec![vec![1.0, 1.0]])])
            .unwrap_err();
        assert_eq!(
            err,
            ParetoCellError::BatchShapeMismatch {
                expected: Some(2),
                found: Some(1)
            }
        );
    }

    #[test]
    fn empty_batch_is_rejected() {
        let mut part = NondominatedPartitioning::<f64>::new(vec![0.0, 0.0]).unwrap();
        let err = part.update(Vec::<Matrix<f64>>::new()).unwrap_err();
        assert_eq!(err, ParetoCellError::EmptyBatch);
    }

    #[test]
    fn batched_fronts_drop_points_at_or_below_reference() {
        let y = vec![
            m(vec![vec![0.5, 0.5], vec![0.0, 0.9]]), // (0.0, 0.9) touches ref
            m(vec![vec![0.7, 0.2], vec![0.2, 0.7]]),
        ];
        let part = NondominatedPartitioning::with_outcomes(vec![0.0, 0.0], y).unwrap();
        let front = part.pareto_front().unwrap();
        let elems = front.as_batched().unwrap();
        assert_eq!(elems[0].rows(), 1);
        assert_eq!(elems[0].row(0), &[0.5, 0.5]);
        assert_eq!(elems[1].rows(), 2);
    }
}
