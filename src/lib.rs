//! Sum of squares over a sequence of signed integers.
//!
//! The crate exposes one capability, computing `Σ nᵢ²`, with two
//! interchangeable realizations: an explicit accumulation loop
//! ([`BasicSquareSum`]) and an iterator fold ([`FoldSquareSum`]). Both use
//! checked `i64` arithmetic and report overflow through [`SquareSumError`]
//! instead of wrapping. The shared test suite verifies the two agree on every
//! input, errors included.

mod error;

pub use crate::error::SquareSumError;

/// Computes the sum of squares of a sequence of integers.
///
/// Implementations are pure: the input is never mutated, no external state is
/// touched, and the result does not depend on element order. The empty
/// sequence sums to zero.
pub trait SquareSum {
    /// Returns `Σ nᵢ²` over `numbers`, or an error if the square of an
    /// element or the running total does not fit in `i64`.
    fn square_sum(&self, numbers: &[i64]) -> Result<i64, SquareSumError>;
}

/// Straightforward realization using a plain accumulation loop.
#[derive(Debug, Clone, Copy, Default)]
pub struct BasicSquareSum;

impl SquareSum for BasicSquareSum {
    fn square_sum(&self, numbers: &[i64]) -> Result<i64, SquareSumError> {
        let mut sum: i64 = 0;
        for &n in numbers {
            let square = n
                .checked_mul(n)
                .ok_or(SquareSumError::SquareOverflow { value: n })?;
            sum = sum
                .checked_add(square)
                .ok_or(SquareSumError::SumOverflow)?;
        }
        Ok(sum)
    }
}

/// Equivalent realization expressed as an iterator fold.
#[derive(Debug, Clone, Copy, Default)]
pub struct FoldSquareSum;

impl SquareSum for FoldSquareSum {
    fn square_sum(&self, numbers: &[i64]) -> Result<i64, SquareSumError> {
        numbers.iter().try_fold(0i64, |sum, &n| {
            let square = n
                .checked_mul(n)
                .ok_or(SquareSumError::SquareOverflow { value: n })?;
            sum.checked_add(square).ok_or(SquareSumError::SumOverflow)
        })
    }
}

/// Returns the sum of squares of `numbers`.
///
/// Delegates to [`BasicSquareSum`]; the plain loop carries less cognitive
/// overhead for readers than the fold, and the test suite keeps the two
/// equivalent.
pub fn square_sum(numbers: &[i64]) -> Result<i64, SquareSumError> {
    BasicSquareSum.square_sum(numbers)
}
