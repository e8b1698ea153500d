//! GCF/LCM accumulation over a finished matching pass

use serde::{Deserialize, Serialize};

use crate::error::{FactorError, Result};
use crate::factorize::product;
use crate::matching::FactorMatch;

/// Greatest common factor and least common multiple of an operand pair
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GcfLcm {
    pub gcf: u128,
    pub lcm: u128,
}

/// Multiply out a matching pass.
///
/// The GCF is the product of the shared primes, one per pair. The LCM takes
/// each shared prime once plus every leftover from both sides. Empty
/// products are 1.
///
/// Matchings of two `u64` factorizations always fit; hand-built factor lists
/// whose LCM exceeds `u128` fail with [`FactorError::Overflow`].
pub fn compute_gcf_lcm(matching: &FactorMatch) -> Result<GcfLcm> {
    let gcf = product(&matching.matched())?;
    let lcm = [
        product(&matching.unmatched_a())?,
        product(&matching.unmatched_b())?,
    ]
    .into_iter()
    .try_fold(gcf, u128::checked_mul)
    .ok_or_else(|| FactorError::Overflow("LCM exceeds u128".to_string()))?;
    Ok(GcfLcm { gcf, lcm })
}
