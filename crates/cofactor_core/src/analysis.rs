//! One-call GCF/LCM analysis of an operand pair

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::accumulate::{compute_gcf_lcm, GcfLcm};
use crate::error::{ensure_positive, Result};
use crate::factorize::{factorize, Factors};
use crate::matching::{match_factors_with, FactorMatch, MatchStrategy};

/// Everything derived from an operand pair
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Analysis {
    pub x: u64,
    pub y: u64,
    pub strategy: MatchStrategy,
    pub x_factors: Factors,
    pub y_factors: Factors,
    pub matching: FactorMatch,
    pub gcf: u128,
    pub lcm: u128,
}

impl Analysis {
    pub fn gcf_lcm(&self) -> GcfLcm {
        GcfLcm {
            gcf: self.gcf,
            lcm: self.lcm,
        }
    }
}

/// Analyze `x` and `y` with greedy matching.
pub fn analyze(x: u64, y: u64) -> Result<Analysis> {
    analyze_with(x, y, MatchStrategy::default())
}

/// Analyze `x` and `y` with the given matching strategy.
///
/// Both operands are validated before anything is computed.
pub fn analyze_with(x: u64, y: u64, strategy: MatchStrategy) -> Result<Analysis> {
    ensure_positive(x)?;
    ensure_positive(y)?;

    let x_factors = factorize(x)?;
    let y_factors = factorize(y)?;
    let matching = match_factors_with(strategy, &x_factors, &y_factors);
    let GcfLcm { gcf, lcm } = compute_gcf_lcm(&matching)?;

    debug!(x, y, %strategy, %gcf, %lcm, "analyzed operand pair");

    Ok(Analysis {
        x,
        y,
        strategy,
        x_factors,
        y_factors,
        matching,
        gcf,
        lcm,
    })
}
