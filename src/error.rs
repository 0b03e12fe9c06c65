//! ParetoCellError: Unified error type for pareto-cells public APIs
//!
//! This error type is used throughout the pareto-cells library to provide
//! robust, non-panicking error handling for all public APIs. Variants fall
//! into three families: precondition violations (derived state requested
//! before it exists, or a reference point not dominated by the frontier),
//! dimensionality mismatches, and not-implemented rejections (deep batch
//! nesting, batched decomposition beyond two objectives).

use thiserror::Error;

/// Unified error type for pareto-cells operations.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ParetoCellError {
    /// The Pareto front was requested before any outcome data was supplied.
    #[error("Pareto front has not been computed; call update() with outcome data first")]
    FrontNotComputed,
    /// The reference point must be strictly worse than every retained
    /// frontier point in every coordinate before a hypervolume is defined.
    #[error("reference point is not strictly dominated by Pareto point {point}")]
    RefPointNotDominated {
        /// Row index of the offending frontier point (within its batch element).
        point: usize,
    },
    /// Outcome data whose objective count differs from the reference point.
    #[error("objective count mismatch: reference point has {expected}, outcomes have {found}")]
    ObjectiveCountMismatch { expected: usize, found: usize },
    /// The two-objective sweep was invoked on data of a different width.
    #[error("operation requires exactly 2 objectives, found {found}")]
    RequiresTwoObjectives { found: usize },
    /// A reference point with fewer than two coordinates.
    #[error("at least 2 objectives are required, found {found}")]
    TooFewObjectives { found: usize },
    /// A row of outcome data did not match the expected width.
    #[error("ragged outcome row: expected {expected} entries, found {found}")]
    RaggedRow { expected: usize, found: usize },
    /// An update whose batch shape differs from the shape established by
    /// the first update (`None` means unbatched).
    #[error("update batch shape mismatch: expected {expected:?}, found {found:?}")]
    BatchShapeMismatch {
        expected: Option<usize>,
        found: Option<usize>,
    },
    /// A batch containing no elements.
    #[error("outcome batch must contain at least one element")]
    EmptyBatch,
    /// Outcome data with fewer than two axes (points x objectives).
    #[error("outcome data must have at least 2 axes (points x objectives); found {found}")]
    InvalidRank { found: usize },
    /// Batch nesting deeper than one level is not implemented.
    #[error("batch rank {rank} is not implemented; at most one batch dimension is supported")]
    UnsupportedBatchRank { rank: usize },
    /// Batched decomposition is only implemented for two objectives.
    #[error(
        "batched decomposition with {num_outcomes} objectives is not implemented \
         (batch size {batch_size}; only m = 2 supports batching)"
    )]
    UnsupportedBatchedObjectives {
        batch_size: usize,
        num_outcomes: usize,
    },
}
