//! Outcomes: a single point set or a one-level batch of independent sets.
//!
//! Batch handling follows the one-level rule: rank 0 (one `n x m` set) and
//! rank 1 (a list of sets) are supported, deeper nesting is rejected as not
//! implemented. A rank-0 value is *not* silently promoted in the public
//! type; components that want uniform iteration use [`Outcomes::elements`].

use crate::data::matrix::Matrix;
use crate::error::ParetoCellError;
use itertools::Either;
use serde::{Deserialize, Serialize};

/// A batch of outcome vectors: one point set, or a list of independent sets.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub enum Outcomes<T> {
    /// One `n x m` point set (batch rank 0).
    Single(Matrix<T>),
    /// A list of independent point sets sharing an objective count
    /// (batch rank 1). Element point counts may differ.
    Batched(Vec<Matrix<T>>),
}

impl<T: Copy> Outcomes<T> {
    /// Build from a flat row-major buffer and an explicit tensor shape.
    ///
    /// `shape` is `[n, m]` for a single set or `[b, n, m]` for a batch.
    ///
    /// # Errors
    /// - `Err(InvalidRank)` when fewer than two axes are given.
    /// - `Err(UnsupportedBatchRank)` when more than one batch axis is given;
    ///   deep nesting is rejected rather than silently flattened.
    /// - `Err(RaggedRow)` when the buffer does not match the shape.
    pub fn from_shape(data: Vec<T>, shape: &[usize]) -> Result<Self, ParetoCellError> {
        match *shape {
            [n, m] => Ok(Outcomes::Single(Matrix::from_flat(data, n, m)?)),
            [b, n, m] => {
                if data.len() != b * n * m {
                    return Err(ParetoCellError::RaggedRow {
                        expected: b * n * m,
                        found: data.len(),
                    });
                }
                if n * m == 0 {
                    return Ok(Outcomes::Batched(vec![Matrix::empty(m); b]));
                }
                let elems = data
                    .chunks_exact(n * m)
                    .map(|chunk| Matrix::from_flat(chunk.to_vec(), n, m))
                    .collect::<Result<Vec<_>, _>>()?;
                Ok(Outcomes::Batched(elems))
            }
            _ if shape.len() < 2 => Err(ParetoCellError::InvalidRank { found: shape.len() }),
            _ => Err(ParetoCellError::UnsupportedBatchRank {
                rank: shape.len() - 2,
            }),
        }
    }

    /// Number of objectives, taken from the first element.
    pub fn num_outcomes(&self) -> usize {
        match self {
            Outcomes::Single(m) => m.cols(),
            Outcomes::Batched(b) => b.first().map_or(0, Matrix::cols),
        }
    }

    /// `Some(b)` for a batch of `b` sets, `None` for a single set.
    pub fn batch_size(&self) -> Option<usize> {
        match self {
            Outcomes::Single(_) => None,
            Outcomes::Batched(b) => Some(b.len()),
        }
    }

    /// Whether this value carries a batch dimension.
    pub fn is_batched(&self) -> bool {
        matches!(self, Outcomes::Batched(_))
    }

    /// Iterate over the underlying point sets (one for a single set).
    pub fn elements(&self) -> impl Iterator<Item = &Matrix<T>> {
        match self {
            Outcomes::Single(m) => Either::Left(std::iter::once(m)),
            Outcomes::Batched(b) => Either::Right(b.iter()),
        }
    }

    /// Borrow the single point set, if unbatched.
    pub fn as_single(&self) -> Option<&Matrix<T>> {
        match self {
            Outcomes::Single(m) => Some(m),
            Outcomes::Batched(_) => None,
        }
    }

    /// Borrow the batch elements, if batched.
    pub fn as_batched(&self) -> Option<&[Matrix<T>]> {
        match self {
            Outcomes::Single(_) => None,
            Outcomes::Batched(b) => Some(b),
        }
    }
}

impl<T> From<Matrix<T>> for Outcomes<T> {
    fn from(m: Matrix<T>) -> Self {
        Outcomes::Single(m)
    }
}

impl<T> From<Vec<Matrix<T>>> for Outcomes<T> {
    fn from(b: Vec<Matrix<T>>) -> Self {
        Outcomes::Batched(b)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn from_shape_single() {
        let y = Outcomes::from_shape(vec![1.0, 2.0, 3.0, 4.0], &[2, 2]).unwrap();
        assert!(!y.is_batched());
        assert_eq!(y.num_outcomes(), 2);
        assert_eq!(y.as_single().unwrap().row(1), &[3.0, 4.0]);
    }

    #[test]
    fn from_shape_batched() {
        let y = Outcomes::from_shape((0..12).map(f64::from).collect(), &[3, 2, 2]).unwrap();
        assert_eq!(y.batch_size(), Some(3));
        let elems = y.as_batched().unwrap();
        assert_eq!(elems[2].row(0), &[8.0, 9.0]);
    }

    #[test]
    fn deep_nesting_not_implemented() {
        let err = Outcomes::from_shape(vec![0.0; 24], &[2, 3, 2, 2]).unwrap_err();
        assert_eq!(err, ParetoCellError::UnsupportedBatchRank { rank: 2 });
        let err = Outcomes::from_shape(vec![0.0; 48], &[2, 2, 3, 2, 2]).unwrap_err();
        assert_eq!(err, ParetoCellError::UnsupportedBatchRank { rank: 3 });
    }

    #[test]
    fn too_few_axes_rejected() {
        let err = Outcomes::from_shape(vec![0.0; 4], &[4]).unwrap_err();
        assert_eq!(err, ParetoCellError::InvalidRank { found: 1 });
    }

    #[test]
    fn element_iteration_is_uniform() {
        let single: Outcomes<f64> =
            Matrix::from_rows(vec![vec![1.0, 2.0]]).unwrap().into();
        assert_eq!(single.elements().count(), 1);
        let batched: Outcomes<f64> = vec![
            Matrix::from_rows(vec![vec![1.0, 2.0]]).unwrap(),
            Matrix::from_rows(vec![vec![3.0, 4.0]]).unwrap(),
        ]
        .into();
        assert_eq!(batched.elements().count(), 2);
    }
}
