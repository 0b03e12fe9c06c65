//! Scalar abstraction for outcome coordinates.
//!
//! Decompositions are generic over the floating-point type so callers can
//! trade precision for memory. The only place the two precisions behave
//! differently is the default boundary tolerance: single precision cannot
//! resolve gaps at `1e-8`, so its default is looser.

use num_traits::Float;

/// Floating-point scalar usable as an outcome coordinate.
///
/// Carries the precision-dependent default tolerance used when merging
/// near-tied frontier coordinates during grid subdivision. Construction-time
/// overrides take precedence, see
/// [`NondominatedPartitioning::with_eps`](crate::partition::NondominatedPartitioning::with_eps).
pub trait CellScalar: Float + core::fmt::Debug + Send + Sync + 'static {
    /// Default boundary tolerance for this precision.
    const DEFAULT_EPS: Self;
}

impl CellScalar for f32 {
    const DEFAULT_EPS: f32 = 1e-6;
}

impl CellScalar for f64 {
    const DEFAULT_EPS: f64 = 1e-8;
}
