//! Common-factor matching
//!
//! Pairs up shared prime factors of two factorizations. Each factor instance
//! is consumed at most once; whatever is not paired is reported as a
//! leftover of its side, keeping its original index so a presentation layer
//! can point at the exact factor it came from.
//!
//! Two strategies are available:
//!
//! - [`MatchStrategy::Greedy`]: for every factor of `a` in order, take the
//!   first unused equal factor of `b`. Pairing order follows `a`.
//! - [`MatchStrategy::ByCount`]: multiset intersection by value. The k-th
//!   occurrence of a prime in `a` pairs with the k-th occurrence in `b`, and
//!   pairs are grouped by ascending prime.
//!
//! Both produce the same pairs and leftovers for sorted inputs (which is what
//! [`factorize`](crate::factorize::factorize) returns); they only disagree on
//! the order of pairs for unsorted, hand-built lists.

use std::fmt;
use std::str::FromStr;

use rustc_hash::FxHashMap;
use serde::{Deserialize, Serialize};
use smallvec::SmallVec;
use tracing::trace;

use crate::error::FactorError;

/// How shared factors are paired
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum MatchStrategy {
    /// First unused match wins, scanning `a` then `b` in order
    #[default]
    Greedy,
    /// Count-based multiset intersection, grouped by prime
    ByCount,
}

impl MatchStrategy {
    pub fn all() -> &'static [MatchStrategy] {
        &[MatchStrategy::Greedy, MatchStrategy::ByCount]
    }

    pub fn id(&self) -> &'static str {
        match self {
            MatchStrategy::Greedy => "greedy",
            MatchStrategy::ByCount => "by-count",
        }
    }
}

impl fmt::Display for MatchStrategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.id())
    }
}

impl FromStr for MatchStrategy {
    type Err = FactorError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        MatchStrategy::all()
            .iter()
            .copied()
            .find(|strategy| strategy.id() == s)
            .ok_or_else(|| FactorError::InvalidInput(format!("unknown match strategy: {s}")))
    }
}

/// One factor from each side, consumed together
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct MatchedPair {
    pub prime: u64,
    /// Index of the factor in the first factorization
    pub a_index: usize,
    /// Index of the factor in the second factorization
    pub b_index: usize,
}

/// A factor that found no partner
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Leftover {
    pub index: usize,
    pub prime: u64,
}

/// Outcome of a matching pass
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FactorMatch {
    pairs: Vec<MatchedPair>,
    leftover_a: Vec<Leftover>,
    leftover_b: Vec<Leftover>,
}

impl FactorMatch {
    /// Matched pairs in the order they were made
    pub fn pairs(&self) -> &[MatchedPair] {
        &self.pairs
    }

    /// Unmatched factors of the first factorization, in index order
    pub fn leftover_a(&self) -> &[Leftover] {
        &self.leftover_a
    }

    /// Unmatched factors of the second factorization, in index order
    pub fn leftover_b(&self) -> &[Leftover] {
        &self.leftover_b
    }

    /// Shared primes, one per pair
    pub fn matched(&self) -> SmallVec<[u64; 16]> {
        self.pairs.iter().map(|pair| pair.prime).collect()
    }

    pub fn unmatched_a(&self) -> SmallVec<[u64; 16]> {
        self.leftover_a.iter().map(|l| l.prime).collect()
    }

    pub fn unmatched_b(&self) -> SmallVec<[u64; 16]> {
        self.leftover_b.iter().map(|l| l.prime).collect()
    }

    pub fn is_coprime(&self) -> bool {
        self.pairs.is_empty()
    }
}

/// Match with the default [`MatchStrategy::Greedy`] pass.
pub fn match_factors(a: &[u64], b: &[u64]) -> FactorMatch {
    match_factors_with(MatchStrategy::Greedy, a, b)
}

/// Match with an explicit strategy.
pub fn match_factors_with(strategy: MatchStrategy, a: &[u64], b: &[u64]) -> FactorMatch {
    let mut used_a = vec![false; a.len()];
    let mut used_b = vec![false; b.len()];

    let pairs = match strategy {
        MatchStrategy::Greedy => pair_greedy(a, b, &mut used_a, &mut used_b),
        MatchStrategy::ByCount => pair_by_count(a, b, &mut used_a, &mut used_b),
    };

    let result = FactorMatch {
        pairs,
        leftover_a: collect_leftovers(a, &used_a),
        leftover_b: collect_leftovers(b, &used_b),
    };
    trace!(%strategy, ?a, ?b, pairs = result.pairs.len(), "matched factors");
    result
}

fn pair_greedy(
    a: &[u64],
    b: &[u64],
    used_a: &mut [bool],
    used_b: &mut [bool],
) -> Vec<MatchedPair> {
    let mut pairs = Vec::new();
    for (i, &prime) in a.iter().enumerate() {
        let partner = b
            .iter()
            .zip(used_b.iter())
            .position(|(&candidate, &taken)| candidate == prime && !taken);
        if let Some(j) = partner {
            used_a[i] = true;
            used_b[j] = true;
            pairs.push(MatchedPair {
                prime,
                a_index: i,
                b_index: j,
            });
        }
    }
    pairs
}

fn pair_by_count(
    a: &[u64],
    b: &[u64],
    used_a: &mut [bool],
    used_b: &mut [bool],
) -> Vec<MatchedPair> {
    let positions_a = positions_by_value(a);
    let positions_b = positions_by_value(b);

    let mut primes: Vec<u64> = positions_a.keys().copied().collect();
    primes.sort_unstable();

    let mut pairs = Vec::new();
    for prime in primes {
        let Some(in_b) = positions_b.get(&prime) else {
            continue;
        };
        for (&i, &j) in positions_a[&prime].iter().zip(in_b) {
            used_a[i] = true;
            used_b[j] = true;
            pairs.push(MatchedPair {
                prime,
                a_index: i,
                b_index: j,
            });
        }
    }
    pairs
}

fn positions_by_value(factors: &[u64]) -> FxHashMap<u64, SmallVec<[usize; 4]>> {
    let mut positions: FxHashMap<u64, SmallVec<[usize; 4]>> = FxHashMap::default();
    for (index, &prime) in factors.iter().enumerate() {
        positions.entry(prime).or_default().push(index);
    }
    positions
}

fn collect_leftovers(factors: &[u64], used: &[bool]) -> Vec<Leftover> {
    factors
        .iter()
        .zip(used)
        .enumerate()
        .filter_map(|(index, (&prime, &taken))| (!taken).then_some(Leftover { index, prime }))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_nine_and_fifteen() {
        let m = match_factors(&[3, 3], &[3, 5]);
        assert_eq!(m.matched().as_slice(), &[3]);
        assert_eq!(m.unmatched_a().as_slice(), &[3]);
        assert_eq!(m.unmatched_b().as_slice(), &[5]);
        assert_eq!(
            m.pairs(),
            &[MatchedPair {
                prime: 3,
                a_index: 0,
                b_index: 0
            }]
        );
        assert_eq!(m.leftover_a(), &[Leftover { index: 1, prime: 3 }]);
        assert_eq!(m.leftover_b(), &[Leftover { index: 1, prime: 5 }]);
    }

    #[test]
    fn test_each_factor_consumed_once() {
        let m = match_factors(&[2, 2, 2], &[2, 2, 3]);
        assert_eq!(m.matched().as_slice(), &[2, 2]);
        assert_eq!(m.unmatched_a().as_slice(), &[2]);
        assert_eq!(m.unmatched_b().as_slice(), &[3]);
        let b_indices: Vec<usize> = m.pairs().iter().map(|p| p.b_index).collect();
        assert_eq!(b_indices, vec![0, 1]);
    }

    #[test]
    fn test_disjoint_and_empty() {
        let m = match_factors(&[2, 2], &[3, 7]);
        assert!(m.is_coprime());
        assert_eq!(m.unmatched_a().as_slice(), &[2, 2]);
        assert_eq!(m.unmatched_b().as_slice(), &[3, 7]);

        let m = match_factors(&[], &[5]);
        assert!(m.pairs().is_empty());
        assert!(m.leftover_a().is_empty());
        assert_eq!(m.unmatched_b().as_slice(), &[5]);
    }

    #[test]
    fn test_greedy_follows_first_list_order() {
        // Unsorted inputs: pairing order tracks `a`
        let m = match_factors(&[5, 3], &[3, 5]);
        assert_eq!(m.matched().as_slice(), &[5, 3]);
        assert_eq!(m.pairs()[0].b_index, 1);
    }

    #[test]
    fn test_by_count_groups_by_prime() {
        let m = match_factors_with(MatchStrategy::ByCount, &[5, 3, 5], &[3, 5]);
        assert_eq!(m.matched().as_slice(), &[3, 5]);
        assert_eq!(
            m.pairs(),
            &[
                MatchedPair {
                    prime: 3,
                    a_index: 1,
                    b_index: 0
                },
                MatchedPair {
                    prime: 5,
                    a_index: 0,
                    b_index: 1
                },
            ]
        );
        assert_eq!(m.leftover_a(), &[Leftover { index: 2, prime: 5 }]);
        assert!(m.leftover_b().is_empty());
    }

    #[test]
    fn test_strategies_agree_on_sorted_input() {
        let a = [2, 2, 2, 3, 5, 5];
        let b = [2, 3, 3, 5, 5, 5, 11];
        assert_eq!(
            match_factors_with(MatchStrategy::Greedy, &a, &b),
            match_factors_with(MatchStrategy::ByCount, &a, &b)
        );
    }

    #[test]
    fn test_strategy_ids_round_trip() {
        for strategy in MatchStrategy::all() {
            assert_eq!(strategy.id().parse::<MatchStrategy>(), Ok(*strategy));
        }
        assert!("fastest".parse::<MatchStrategy>().is_err());
    }
}
