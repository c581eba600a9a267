//! Continued fraction expansion of quadratic surds `√n`

use crate::cont_frac::ContinuedFraction;
use crate::error::{Error, Result};
use crate::traits::IntegerRing;
use num_integer::Roots;

/// A helper trait to define valid type that can be used for square root expansion
pub trait QuadraticSurdBase: IntegerRing + Roots {}
impl<T: IntegerRing + Roots> QuadraticSurdBase for T {}

/// The continued fraction of `√n`
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum SqrtExpansion<T> {
    /// `n` is a perfect square with the given root, no periodic part exists
    PerfectSquare(T),

    /// Recurring terms `[a0; (a1, ..., ak)]` of an irrational root
    Periodic(ContinuedFraction<T>),
}

impl<T> SqrtExpansion<T> {
    #[inline]
    pub fn is_square(&self) -> bool {
        matches!(self, SqrtExpansion::PerfectSquare(_))
    }

    /// Length of the repeating block, zero for a perfect square
    #[inline]
    pub fn period(&self) -> usize {
        match self {
            SqrtExpansion::PerfectSquare(_) => 0,
            SqrtExpansion::Periodic(cf) => cf.period(),
        }
    }

    /// The recurring continued fraction, None for a perfect square
    #[inline]
    pub fn into_cont_frac(self) -> Option<ContinuedFraction<T>> {
        match self {
            SqrtExpansion::PerfectSquare(_) => None,
            SqrtExpansion::Periodic(cf) => Some(cf),
        }
    }
}

/// Expand `√n` into its periodic continued fraction.
///
/// With `a0 = floor(√n)`, `m = 0`, `d = 1`, each step computes
/// `m' = d·a − m`, `d' = (n − m'²) / d` and `a' = floor((a0 + m') / d')`.
/// The period is complete once `d'` reaches one. Every intermediate value is
/// bounded by `2√n`, so no overflow can happen for any `T` holding `n`.
///
/// Fails with [Error::InvalidArgument] for a negative `n`.
///
/// ```
/// # use num_frac::{sqrt_terms, SqrtExpansion};
/// let sq23 = sqrt_terms(23u32).unwrap().into_cont_frac().unwrap();
/// assert_eq!(sq23.terms(), &[4, 1, 3, 1, 8]);
/// assert!(matches!(sqrt_terms(49u32), Ok(SqrtExpansion::PerfectSquare(7))));
/// ```
pub fn sqrt_terms<T: QuadraticSurdBase>(n: T) -> Result<SqrtExpansion<T>> {
    if n < T::zero() {
        return Err(Error::InvalidArgument("square root of a negative number"));
    }

    let a0 = n.sqrt();
    if a0.clone() * a0.clone() == n {
        return Ok(SqrtExpansion::PerfectSquare(a0));
    }

    let mut terms = vec![a0.clone()];
    let (mut m, mut d, mut a) = (T::zero(), T::one(), a0.clone());
    loop {
        m = d.clone() * a - m;
        d = (n.clone() - m.clone() * m.clone()) / d;
        a = (a0.clone() + m.clone()) / d.clone();
        terms.push(a.clone());

        if d <= T::one() {
            break;
        }
    }

    Ok(SqrtExpansion::Periodic(ContinuedFraction::new(terms, true)))
}
