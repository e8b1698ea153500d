//! Cofactor Core
//!
//! Greatest common factor and least common multiple, derived the way they
//! are taught: factor both operands into primes, pair up the shared primes,
//! and multiply.
//!
//! - **Factorization**: trial division with multiplicity
//! - **Matching**: greedy first-match pairing of shared primes, or a
//!   count-based multiset intersection
//! - **Accumulation**: GCF from the pairs, LCM from pairs plus leftovers
//! - **Narration**: the ordered beats a presentation layer can animate
//!
//! # Example
//!
//! ```rust
//! use cofactor_core::{analyze, Narration};
//!
//! let analysis = analyze(9, 15).unwrap();
//! assert_eq!(analysis.x_factors.as_slice(), &[3, 3]);
//! assert_eq!(analysis.matching.matched().as_slice(), &[3]);
//! assert_eq!((analysis.gcf, analysis.lcm), (3, 45));
//!
//! let narration = Narration::from_analysis(&analysis);
//! assert_eq!(
//!     narration.summary(),
//!     "The GCF of 9 and 15 is 3 and LCM of 9 and 15 is 45."
//! );
//! ```

pub mod accumulate;
pub mod analysis;
pub mod error;
pub mod factorize;
pub mod matching;
pub mod narration;

pub use accumulate::{compute_gcf_lcm, GcfLcm};
pub use analysis::{analyze, analyze_with, Analysis};
pub use error::{parse_operand, FactorError, Result};
pub use factorize::{factorize, product, Factors};
pub use matching::{
    match_factors, match_factors_with, FactorMatch, Leftover, MatchStrategy, MatchedPair,
};
pub use narration::{Narration, Operand, Step, TermExpression};
