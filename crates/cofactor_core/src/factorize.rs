//! Prime factorization by trial division

use smallvec::SmallVec;
use tracing::trace;

use crate::error::{ensure_positive, FactorError, Result};

/// Prime factors of an integer with multiplicity, in ascending order.
///
/// Sixteen inline slots cover every `u64` below 2^16 without allocating.
pub type Factors = SmallVec<[u64; 16]>;

/// Factor `n` into primes.
///
/// Divides out each trial divisor `i = 2, 3, 4, ...` completely before moving
/// on, while `i * i` does not exceed the remaining value. Whatever remains
/// above 1 afterwards is itself prime and is appended last.
///
/// `factorize(1)` is empty. Zero is rejected.
pub fn factorize(n: u64) -> Result<Factors> {
    let mut remaining = ensure_positive(n)?;
    let mut factors = Factors::new();

    let mut divisor: u64 = 2;
    // `divisor <= remaining / divisor` is `divisor * divisor <= remaining` without overflow
    while divisor <= remaining / divisor {
        while remaining % divisor == 0 {
            factors.push(divisor);
            remaining /= divisor;
        }
        divisor += 1;
    }
    if remaining > 1 {
        factors.push(remaining);
    }

    trace!(n, ?factors, "factorized");
    Ok(factors)
}

/// Product of a factor slice, 1 for an empty slice.
///
/// Widened to `u128` so the factors of any two `u64` operands fit. Longer
/// hand-built lists that exceed `u128` fail with [`FactorError::Overflow`].
pub fn product(factors: &[u64]) -> Result<u128> {
    factors.iter().try_fold(1u128, |acc, &f| {
        acc.checked_mul(u128::from(f)).ok_or_else(|| {
            FactorError::Overflow(format!("product of {} factors exceeds u128", factors.len()))
        })
    })
}
