//! Exact rational approximation and partition counting.
//!
//! - [Fraction] is an exact fraction with gcd reduction
//! - [decompose()] expands a rational number into continued fraction terms
//! - [ContinuedFraction::convergents()] and [InfiniteContinuedFraction::convergents()]
//!   stream the best rational approximations of finite or recurring terms
//! - [sqrt_terms()] expands `√n` into its periodic continued fraction
//! - [partitions()] counts the partitions of `n` into exactly `m` parts
//!
//! Every algorithm is generic over [IntegerRing]: fixed-width primitives stop
//! or fail at overflow, `BigInt` and `BigUint` (feature `num-bigint`) never do.

mod cont_frac;
mod error;
mod fraction;
mod partition;
mod quadratic;
pub mod symbols;
pub mod traits;

#[cfg(test)]
mod proptests;

pub use cont_frac::{
    decompose, decompose_f64, Coefficients, ContinuedFraction, ConvergentConfig, Convergents,
    Decomposition, InfiniteContinuedFraction,
};
pub use error::{Error, Result};
pub use fraction::{farey, gcd_all, Farey, Fraction};
pub use partition::partitions;
pub use quadratic::pell::pell;
pub use quadratic::surd::{sqrt_terms, QuadraticSurdBase, SqrtExpansion};
pub use traits::{Approximation, IntegerRing};
