//! Data structures and algorithms implementations related to
//! simple continued fractions
//!
//! There are three abstractions of the continued fraction
//! 1. [ContinuedFraction][ContinuedFraction] represents a simple continued fraction with finite or recurring terms
//! 2. [Decomposition][Decomposition] lazily produces the terms of an exact rational number
//! 3. [InfiniteContinuedFraction][InfiniteContinuedFraction] is a trait that streams the convergents of any term iterator
//!
//! # References:
//! - <https://pi.math.cornell.edu/~gautam/ContinuedFractions.pdf>
//! - <https://crypto.stanford.edu/pbc/notes/contfrac/>
//! - <http://www.numbertheory.org/continued_fractions.html>
//!

mod block;
mod convergents;
mod decompose;
mod infinite;
mod simple;

pub use convergents::*;
pub use decompose::*;
pub use infinite::*;
pub use simple::*;
