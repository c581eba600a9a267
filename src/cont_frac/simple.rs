//! Implementation of simple continued fractions with finite or recurring terms

use super::convergents::{ConvergentConfig, Convergents};
use super::decompose::Decomposition;
use crate::traits::{Approximation, IntegerRing};
use num_integer::Integer;
use num_rational::Ratio;
use std::fmt;
use std::iter::FromIterator;

/// This struct represents a simple continued fraction `a0 + 1/(a1 + 1/ (a2 + ...))`
/// by its terms `[a0; a1, a2, ...]`.
///
/// If the fraction is recurring, the terms after `a0` repeat indefinitely, which
/// is the shape of the continued fraction of a square root (see [crate::sqrt_terms]).
/// Otherwise it's the finite expansion of a rational number.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct ContinuedFraction<T> {
    terms: Vec<T>,

    /// Whether `terms[1..]` repeats
    recurring: bool,
}

impl<T> ContinuedFraction<T> {
    /// Create a continued fraction from its terms. A sequence with fewer than two
    /// terms is accepted, but it has no convergents.
    #[inline]
    pub fn new(terms: Vec<T>, recurring: bool) -> Self {
        ContinuedFraction { terms, recurring }
    }

    #[inline]
    pub fn terms(&self) -> &[T] {
        &self.terms[..]
    }

    #[inline]
    pub fn is_recurring(&self) -> bool {
        self.recurring && self.terms.len() >= 2
    }

    #[inline]
    pub fn is_rational(&self) -> bool {
        !self.is_recurring()
    }

    /// Length of the repeating block, zero for a rational number
    #[inline]
    pub fn period(&self) -> usize {
        if self.is_recurring() {
            self.terms.len() - 1
        } else {
            0
        }
    }

    /// Returns an iterator of the terms. For a recurring fraction the iterator
    /// never ends: it cycles through the repeating block by index.
    pub fn coeffs(&self) -> Coefficients<'_, T> {
        Coefficients {
            terms: &self.terms[..],
            pos: 0,
            recurring: self.is_recurring(),
        }
    }
}

/// Iterator of terms in a [ContinuedFraction]
#[derive(Debug, Clone)]
pub struct Coefficients<'a, T> {
    terms: &'a [T],
    pos: usize,
    recurring: bool,
}

impl<'a, T> Iterator for Coefficients<'a, T> {
    type Item = &'a T;

    fn next(&mut self) -> Option<Self::Item> {
        if self.pos == self.terms.len() {
            if !self.recurring {
                return None;
            }
            self.pos = 1; // skip the leading term
        }

        let v = self.terms.get(self.pos)?;
        self.pos += 1;
        Some(v)
    }
}

impl<T: IntegerRing> ContinuedFraction<T> {
    /// Returns an iterator of the convergents `(h, k)` with the default configuration.
    ///
    /// ```
    /// # use num_frac::ContinuedFraction;
    /// let sq2 = ContinuedFraction::new(vec![1u64, 2], true);
    /// let pairs: Vec<_> = sq2.convergents().take(3).collect();
    /// assert_eq!(pairs, vec![(1, 1), (3, 2), (7, 5)]);
    /// ```
    pub fn convergents(&self) -> Convergents<std::iter::Cloned<Coefficients<'_, T>>, T> {
        self.convergents_with(&ConvergentConfig::default())
    }

    /// Returns an iterator of the convergents with the given configuration
    pub fn convergents_with(
        &self,
        config: &ConvergentConfig,
    ) -> Convergents<std::iter::Cloned<Coefficients<'_, T>>, T> {
        Convergents::new(self.coeffs().cloned(), config)
    }

    /// The value as a rational number.
    ///
    /// A rational continued fraction gives its exact value; a recurring one is
    /// expanded through one repetition of its block and the result is approximated.
    /// Returns None for an empty sequence, or when `T` cannot hold the value.
    pub fn to_rational(&self) -> Option<Approximation<Ratio<T>>> {
        match self.terms.len() {
            0 => None,
            1 => Some(Approximation::Exact(Ratio::from(self.terms[0].clone()))),
            n => {
                if self.is_recurring() {
                    let (h, k) = self.convergents().nth(n)?;
                    Some(Approximation::Approximated(to_ratio(h, k)?))
                } else {
                    let (count, last) = self
                        .convergents()
                        .fold((0, None), |(count, _), pair| (count + 1, Some(pair)));
                    // an overflow stops the stream before the last term
                    if count != n {
                        return None;
                    }
                    let (h, k) = last?;
                    Some(Approximation::Exact(to_ratio(h, k)?))
                }
            }
        }
    }

    /// The best convergent whose denominator is below `limit`. It's exact if the
    /// continued fraction is rational and all its convergents satisfy the limit.
    pub fn approximated(&self, limit: &T) -> Option<Approximation<Ratio<T>>> {
        let first = self.terms.first()?.clone();
        let mut convergents = self.convergents();
        let mut last_conv = match convergents.next() {
            Some((h, k)) if &k < limit => to_ratio(h, k)?,
            Some(_) => return Some(Approximation::Approximated(Ratio::from(first))),
            None => return self.to_rational(),
        };

        let mut consumed = 1;
        loop {
            match convergents.next() {
                Some((h, k)) => {
                    if &k < limit {
                        last_conv = to_ratio(h, k)?;
                        consumed += 1;
                    } else {
                        return Some(Approximation::Approximated(last_conv));
                    }
                }
                None => {
                    return if self.is_rational() && consumed == self.terms.len() {
                        Some(Approximation::Exact(last_conv))
                    } else {
                        Some(Approximation::Approximated(last_conv))
                    }
                }
            }
        }
    }
}

#[inline]
fn to_ratio<T: Integer + Clone>(h: T, k: T) -> Option<Ratio<T>> {
    if k.is_zero() {
        None
    } else {
        Some(Ratio::new(h, k))
    }
}

impl<T> FromIterator<T> for ContinuedFraction<T> {
    /// Collect terms into a rational (non-recurring) continued fraction
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        ContinuedFraction::new(iter.into_iter().collect(), false)
    }
}

impl<T: Integer + Clone> From<Ratio<T>> for ContinuedFraction<T> {
    fn from(r: Ratio<T>) -> Self {
        // denominator of a Ratio is always positive
        let (numer, denom) = r.into();
        Decomposition::new_raw(numer, denom).collect()
    }
}

impl<T: fmt::Display> fmt::Display for ContinuedFraction<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let first = match self.terms.first() {
            Some(v) => v,
            None => return write!(f, "[]"),
        };
        write!(f, "[{}", first)?;
        if self.terms.len() == 1 {
            return write!(f, "]");
        }

        write!(f, "; ")?;
        if self.is_recurring() {
            write!(f, "(")?;
        }
        let mut iter = self.terms.iter().skip(1);
        if let Some(v) = iter.next() {
            write!(f, "{}", v)?;
        }
        for v in iter {
            write!(f, ", {}", v)?;
        }
        if self.is_recurring() {
            write!(f, ")")?;
        }
        write!(f, "]")
    }
}
