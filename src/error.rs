use thiserror::Error;

/// Failure modes of the sum-of-squares operations.
///
/// All arithmetic in this crate is checked `i64` arithmetic; results that do
/// not fit are reported rather than wrapped or saturated.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum SquareSumError {
    /// Squaring a single element left the `i64` range.
    #[error("squaring {value} overflows i64")]
    SquareOverflow { value: i64 },
    /// Every square fit individually, but the running total did not.
    #[error("sum of squares overflows i64")]
    SumOverflow,
}
