//! # pareto-cells
//!
//! pareto-cells is a Rust library for non-dominated (Pareto) partitioning of
//! multi-objective outcome vectors and the exact box decompositions derived
//! from it. Given a set of points in objective space (maximization
//! convention) and a reference point, it identifies the Pareto-efficient
//! subset and tiles the region not dominated by that frontier into
//! axis-aligned hypercells: the structure needed to compute exact
//! hypervolume indicators, for example as an acquisition-function
//! ingredient in multi-objective Bayesian optimization.
//!
//! ## Features
//! - Pairwise dominance filter with consistent duplicate handling
//! - Pareto store with change detection and cached decompositions
//! - Exact closed-form sweep for two objectives, batched with padding
//! - Exact grid decomposition for three objectives (best-effort for more)
//! - Hypervolume evaluation with reference-point validation
//! - Optional `rayon` feature for data-parallel batched sweeps
//!
//! ## Determinism
//!
//! All computation is eager and deterministic: front sorting is stable
//! and cell emission order is fixed for a given front, so repeated reads
//! without an intervening [`update`](partition::NondominatedPartitioning::update)
//! are bit-identical. Tests that use randomized inputs fix `SmallRng`
//! seeds explicitly.
//!
//! ## Usage
//!
//! ```
//! use pareto_cells::prelude::*;
//!
//! # fn try_main() -> Result<(), ParetoCellError> {
//! let outcomes = Matrix::from_rows(vec![
//!     vec![2.0, 3.0],
//!     vec![3.0, 2.0],
//!     vec![1.0, 1.0], // dominated
//! ])?;
//! let part = NondominatedPartitioning::with_outcomes(vec![0.0, 0.0], outcomes)?;
//! assert_eq!(part.pareto_front()?.as_single().unwrap().rows(), 2);
//! assert_eq!(part.compute_hypervolume()?.as_scalar(), Some(8.0));
//! # Ok(())
//! # }
//! # try_main().unwrap();
//! ```

pub mod data;
pub mod dominance;
pub mod error;
pub mod hypervolume;
pub mod partition;
pub mod scalar;

/// A convenient prelude to import the most-used traits & types:
pub mod prelude {
    pub use crate::data::{Cell, CellBounds, Matrix, Outcomes};
    pub use crate::dominance::{dominates, non_dominated_mask, pareto_front};
    pub use crate::error::ParetoCellError;
    pub use crate::hypervolume::Hypervolume;
    pub use crate::partition::NondominatedPartitioning;
    pub use crate::scalar::CellScalar;
}
