//! Decomposition of exact rational numbers into continued fraction terms

use crate::error::{Error, Result};
use crate::fraction::exact_decimal;
use crate::traits::IntegerRing;
use num_integer::Integer;

/// Iterator of the continued fraction terms of `numer / denom`, produced by
/// the Euclidean algorithm. Each step yields `floor(numer / denom)` and continues
/// with `(denom, numer mod denom)` until the denominator becomes zero.
///
/// The iterator owns a copy of its input, so cloning it forks the decomposition
/// at its current position without touching any other state.
#[derive(Debug, Clone)]
pub struct Decomposition<T> {
    numer: T,
    denom: T,
}

impl<T> Decomposition<T> {
    /// Caller guarantees `denom >= 0`
    #[inline]
    pub(crate) fn new_raw(numer: T, denom: T) -> Self {
        Decomposition { numer, denom }
    }
}

impl<T: Integer + Clone> Iterator for Decomposition<T> {
    type Item = T;

    fn next(&mut self) -> Option<T> {
        if self.denom.is_zero() {
            return None;
        }

        let (quo, rem) = self.numer.div_mod_floor(&self.denom);
        self.numer = std::mem::replace(&mut self.denom, rem);
        Some(quo)
    }
}

impl<T: Integer + Clone> std::iter::FusedIterator for Decomposition<T> {}

/// Decompose the exact rational `numer / denom` into its continued fraction terms.
///
/// A negative denominator is moved to the numerator first, so only the leading
/// term can be negative. Fails with [Error::InvalidFraction] on a zero denominator
/// and with [Error::Overflow] if the sign cannot be moved within `T`.
///
/// ```
/// # use num_frac::decompose;
/// let terms: Vec<i64> = decompose(415, 93).unwrap().collect();
/// assert_eq!(terms, vec![4, 2, 6, 7]);
/// ```
pub fn decompose<T: IntegerRing>(numer: T, denom: T) -> Result<Decomposition<T>> {
    if denom.is_zero() {
        return Err(Error::InvalidFraction);
    }

    if denom < T::zero() {
        let neg_one = T::from_i8(-1).ok_or(Error::Overflow)?;
        let numer = numer.checked_mul(&neg_one).ok_or(Error::Overflow)?;
        let denom = denom.checked_mul(&neg_one).ok_or(Error::Overflow)?;
        return Ok(Decomposition::new_raw(numer, denom));
    }

    Ok(Decomposition::new_raw(numer, denom))
}

/// Decompose a decimal number.
///
/// Only decimals that are exact in their shortest form are accepted. A float
/// approximating an irrational number (such as `2f64.sqrt()`) fails with
/// [Error::NotRational]: the rounding error compounds through the Euclidean steps
/// and produces a meaningless sequence. Use [crate::sqrt_terms] for square roots.
pub fn decompose_f64<T: IntegerRing>(f: f64) -> Result<Decomposition<T>> {
    let (numer, denom) = exact_decimal(f)?;
    decompose(numer, denom)
}
