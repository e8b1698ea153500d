//! Step-by-step narration of an analysis
//!
//! Presentation layers walk the same beats as a worked example on a board:
//!
//! 1. factor both operands,
//! 2. pull each shared prime down into the GCF and LCM together,
//! 3. carry every leftover factor into the LCM alone, `x` side first,
//! 4. multiply both running products out.
//!
//! Each running product is a [`TermExpression`] seeded with a `(1)` term, so
//! a coprime pair still shows `GCF = (1)` rather than an empty product.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::analysis::Analysis;
use crate::factorize::Factors;

/// Which operand a step refers to
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Operand {
    X,
    Y,
}

impl fmt::Display for Operand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Operand::X => f.write_str("x"),
            Operand::Y => f.write_str("y"),
        }
    }
}

/// A running product written out term by term
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TermExpression {
    terms: Vec<u64>,
}

impl TermExpression {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, term: u64) {
        self.terms.push(term);
    }
}

impl fmt::Display for TermExpression {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("(1)")?;
        for term in &self.terms {
            write!(f, " · ({term})")?;
        }
        Ok(())
    }
}

/// One beat of the narration
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "step", rename_all = "snake_case")]
pub enum Step {
    /// An operand was broken into primes
    Factorized {
        operand: Operand,
        value: u64,
        factors: Factors,
    },
    /// A shared prime joined both products
    Paired {
        prime: u64,
        x_index: usize,
        y_index: usize,
        gcf: TermExpression,
        lcm: TermExpression,
    },
    /// A leftover factor joined the LCM
    Carried {
        operand: Operand,
        index: usize,
        prime: u64,
        lcm: TermExpression,
    },
    /// Both products multiplied out
    Solved { gcf: u128, lcm: u128 },
}

impl fmt::Display for Step {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Step::Factorized {
                operand,
                value,
                factors,
            } => {
                write!(f, "factor {operand}: {value} = ")?;
                if factors.is_empty() {
                    return f.write_str("(1)");
                }
                for (i, factor) in factors.iter().enumerate() {
                    if i > 0 {
                        f.write_str(" · ")?;
                    }
                    write!(f, "({factor})")?;
                }
                Ok(())
            }
            Step::Paired {
                prime,
                x_index,
                y_index,
                gcf,
                lcm,
            } => write!(
                f,
                "pair ({prime}): x[{x_index}] with y[{y_index}]; GCF = {gcf}, LCM = {lcm}"
            ),
            Step::Carried {
                operand,
                index,
                prime,
                lcm,
            } => write!(f, "carry ({prime}) from {operand}[{index}]; LCM = {lcm}"),
            Step::Solved { gcf, lcm } => write!(f, "solve: GCF = {gcf}, LCM = {lcm}"),
        }
    }
}

/// The full ordered narration of one analysis
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Narration {
    x: u64,
    y: u64,
    gcf: u128,
    lcm: u128,
    steps: Vec<Step>,
}

impl Narration {
    pub fn from_analysis(analysis: &Analysis) -> Self {
        let matching = &analysis.matching;
        let mut steps = Vec::with_capacity(
            3 + matching.pairs().len() + matching.leftover_a().len() + matching.leftover_b().len(),
        );

        steps.push(Step::Factorized {
            operand: Operand::X,
            value: analysis.x,
            factors: analysis.x_factors.clone(),
        });
        steps.push(Step::Factorized {
            operand: Operand::Y,
            value: analysis.y,
            factors: analysis.y_factors.clone(),
        });

        let mut gcf = TermExpression::new();
        let mut lcm = TermExpression::new();

        for pair in matching.pairs() {
            gcf.push(pair.prime);
            lcm.push(pair.prime);
            steps.push(Step::Paired {
                prime: pair.prime,
                x_index: pair.a_index,
                y_index: pair.b_index,
                gcf: gcf.clone(),
                lcm: lcm.clone(),
            });
        }

        let leftovers = matching
            .leftover_a()
            .iter()
            .map(|l| (Operand::X, l))
            .chain(matching.leftover_b().iter().map(|l| (Operand::Y, l)));
        for (operand, leftover) in leftovers {
            lcm.push(leftover.prime);
            steps.push(Step::Carried {
                operand,
                index: leftover.index,
                prime: leftover.prime,
                lcm: lcm.clone(),
            });
        }

        steps.push(Step::Solved {
            gcf: analysis.gcf,
            lcm: analysis.lcm,
        });

        Self {
            x: analysis.x,
            y: analysis.y,
            gcf: analysis.gcf,
            lcm: analysis.lcm,
            steps,
        }
    }

    pub fn steps(&self) -> &[Step] {
        &self.steps
    }

    pub fn gcf(&self) -> u128 {
        self.gcf
    }

    pub fn lcm(&self) -> u128 {
        self.lcm
    }

    /// Closing sentence, e.g. "The GCF of 9 and 15 is 3 and LCM of 9 and 15 is 45."
    pub fn summary(&self) -> String {
        format!(
            "The GCF of {x} and {y} is {gcf} and LCM of {x} and {y} is {lcm}.",
            x = self.x,
            y = self.y,
            gcf = self.gcf,
            lcm = self.lcm
        )
    }
}
