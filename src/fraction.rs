//! Exact fractions with greatest common divisor reduction

use crate::cont_frac::decompose;
use crate::error::{Error, Result};
use crate::traits::IntegerRing;
use num_integer::Integer;
use num_rational::Ratio;
use num_traits::ToPrimitive;
use std::fmt;

/// Decimals with more significant digits than this are treated as rounded
/// values rather than exact ones. f64 round-trips at most 15 decimal digits.
const MAX_EXACT_DIGITS: usize = 15;

/// Greatest common divisor of all the values.
///
/// Fewer than two values have no meaningful common divisor and yield zero.
/// Fails with [Error::Overflow] if the divisor does not fit in `T`, which only
/// happens for values like `gcd(i64::MIN, 0)` whose divisor is `2^63`.
pub fn gcd_all<T: IntegerRing>(values: &[T]) -> Result<T> {
    if values.len() < 2 {
        return Ok(T::zero());
    }

    let (first, rest) = values.split_at(1);
    rest.iter().try_fold(first[0].clone(), |acc, v| checked_gcd(&acc, v))
}

/// `Integer::gcd` panics when the result is `|T::MIN|`: each value is either zero
/// or the most negative value of a fixed-width type, and not both are zero
fn checked_gcd<T: IntegerRing>(a: &T, b: &T) -> Result<T> {
    let at_bound = |x: &T| x.is_zero() || is_unnegatable(x);
    if at_bound(a) && at_bound(b) && !(a.is_zero() && b.is_zero()) {
        return Err(Error::Overflow);
    }
    Ok(a.gcd(b))
}

#[inline]
fn is_unnegatable<T: IntegerRing>(x: &T) -> bool {
    *x < T::zero()
        && T::from_i8(-1)
            .and_then(|neg_one| x.checked_mul(&neg_one))
            .is_none()
}

/// A fraction `numer / denom`, possibly unreduced and possibly improper.
///
/// The integer part is derived on construction by truncating toward zero, so
/// `-7/2` has integer part `-3`. Equality compares the stored representation:
/// `2/4` and `1/2` are different until reduced.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct Fraction<T> {
    numer: T,
    denom: T,
    int: T,
}

impl<T> Fraction<T> {
    #[inline]
    pub fn numer(&self) -> &T {
        &self.numer
    }

    #[inline]
    pub fn denom(&self) -> &T {
        &self.denom
    }

    /// The integer part of a mixed fraction representation
    #[inline]
    pub fn integer_part(&self) -> &T {
        &self.int
    }
}

impl<T: IntegerRing> Fraction<T> {
    /// Caller guarantees `denom > 0`, so the integer part cannot overflow
    #[inline]
    pub(crate) fn new_raw(numer: T, denom: T) -> Self {
        debug_assert!(denom > T::zero());
        let int = numer.clone() / denom.clone();
        Fraction { numer, denom, int }
    }

    /// Create a fraction, failing with [Error::InvalidFraction] on a zero denominator
    /// and with [Error::Overflow] if the integer part is not representable
    /// (`i64::MIN / -1`).
    pub fn new(numer: T, denom: T) -> Result<Self> {
        if denom.is_zero() {
            return Err(Error::InvalidFraction);
        }
        let int = numer.checked_div(&denom).ok_or(Error::Overflow)?;
        Ok(Fraction { numer, denom, int })
    }

    /// Greatest common divisor of the numerator and the denominator, see [gcd_all]
    #[inline]
    pub fn gcd(&self) -> Result<T> {
        gcd_all(&[self.numer.clone(), self.denom.clone()])
    }

    /// Divide the numerator and the denominator by their greatest common divisor in place.
    pub fn reduce(&mut self) -> Result<&mut Self> {
        let g = self.gcd()?;
        if g.is_zero() {
            return Err(Error::DivideByZero);
        }
        if !g.is_one() {
            self.numer = self.numer.clone() / g.clone();
            self.denom = self.denom.clone() / g;
        }
        Ok(self)
    }

    /// Returns a reduced version of self
    #[inline]
    pub fn reduced(mut self) -> Result<Self> {
        self.reduce()?;
        Ok(self)
    }

    /// Returns the reciprocal as a new fraction, failing when the numerator is zero
    pub fn inverse(&self) -> Result<Self> {
        Self::new(self.denom.clone(), self.numer.clone())
    }

    /// Convert a decimal into a reduced fraction.
    ///
    /// The conversion is exact for the shortest decimal form of `f`, e.g. `0.1`
    /// gives `1/10`. Non-finite values and values carrying more significant
    /// digits than an f64 can hold exactly (such as `2f64.sqrt()` or `0.1 + 0.2`)
    /// fail with [Error::NotRational].
    pub fn from_f64(f: f64) -> Result<Self> {
        let (numer, denom) = exact_decimal(f)?;
        Self::new_raw(numer, denom).reduced()
    }

    /// Continued fraction terms of the fraction, see [crate::decompose]
    pub fn cf(&self) -> Result<Vec<T>> {
        Ok(decompose(self.numer.clone(), self.denom.clone())?.collect())
    }
}

impl<T: Integer + Clone + ToPrimitive> Fraction<T> {
    /// Decimal value of the fraction
    pub fn to_f64(&self) -> Option<f64> {
        Some(self.numer.to_f64()? / self.denom.to_f64()?)
    }
}

impl<T: IntegerRing> From<Ratio<T>> for Fraction<T> {
    /// The denominator of a `Ratio` is always positive
    #[inline]
    fn from(r: Ratio<T>) -> Self {
        let (numer, denom) = r.into();
        Self::new_raw(numer, denom)
    }
}

impl<T: Integer + Clone> From<Fraction<T>> for Ratio<T> {
    /// Note that `Ratio` always reduces its value
    #[inline]
    fn from(f: Fraction<T>) -> Self {
        Ratio::new(f.numer, f.denom)
    }
}

impl<T: fmt::Display> fmt::Display for Fraction<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}", self.numer, self.denom)
    }
}

/// Split the shortest decimal form of `f` into an exact `(numer, denom)` with
/// `denom` a power of ten. The pair is not reduced.
pub(crate) fn exact_decimal<T: IntegerRing>(f: f64) -> Result<(T, T)> {
    if !f.is_finite() {
        return Err(Error::NotRational);
    }

    // Display of f64 never uses exponent notation and gives the shortest round-trip digits
    let repr = format!("{}", f.abs());
    let (int_digits, frac_digits) = match repr.split_once('.') {
        Some((i, d)) => (i, d),
        None => (repr.as_str(), ""),
    };

    let digits: String = int_digits.chars().chain(frac_digits.chars()).collect();
    let significant = digits.trim_start_matches('0').trim_end_matches('0').len();
    if significant > MAX_EXACT_DIGITS {
        return Err(Error::NotRational);
    }

    let ten = T::from_u8(10).ok_or(Error::Overflow)?;
    let mut numer = T::zero();
    for c in digits.chars() {
        let d = c.to_digit(10).and_then(T::from_u32).ok_or(Error::Overflow)?;
        numer = numer
            .checked_mul(&ten)
            .and_then(|v| v.checked_add(&d))
            .ok_or(Error::Overflow)?;
    }

    let mut denom = T::one();
    for _ in 0..frac_digits.len() {
        denom = denom.checked_mul(&ten).ok_or(Error::Overflow)?;
    }

    if f.is_sign_negative() && !numer.is_zero() {
        let neg_one = T::from_i8(-1).ok_or(Error::Overflow)?;
        numer = numer.checked_mul(&neg_one).ok_or(Error::Overflow)?;
    }

    Ok((numer, denom))
}

/// Iterator of the [farey()] sequence
#[derive(Debug, Clone)]
pub struct Farey<T> {
    n: T,
    a: T,
    b: T,
    c: T,
    d: T,
    started: bool,
}

/// The Farey sequence of order `n`: every reduced fraction in `[0, 1]` with a
/// denominator no larger than `n`, in ascending order starting from `0/1`.
///
/// Fails with [Error::InvalidArgument] when `n < 1`. For a fixed-width type the
/// sequence ends early if the next term is not representable.
pub fn farey<T: IntegerRing>(n: T) -> Result<Farey<T>> {
    if n < T::one() {
        return Err(Error::InvalidArgument("farey order must be positive"));
    }

    Ok(Farey {
        a: T::zero(),
        b: T::one(),
        c: T::one(),
        d: n.clone(),
        n,
        started: false,
    })
}

impl<T: IntegerRing> Iterator for Farey<T> {
    type Item = Fraction<T>;

    fn next(&mut self) -> Option<Self::Item> {
        if !self.started {
            self.started = true;
            return Some(Fraction::new_raw(self.a.clone(), self.b.clone()));
        }
        if self.c > self.n {
            return None;
        }

        // k = (n + b) / d, then (a, b, c, d) <- (c, d, k*c - a, k*d - b)
        let k = self.n.checked_add(&self.b)? / self.d.clone();
        let next_c = k.checked_mul(&self.c)? - self.a.clone();
        let next_d = k.checked_mul(&self.d)? - self.b.clone();

        self.a = std::mem::replace(&mut self.c, next_c);
        self.b = std::mem::replace(&mut self.d, next_d);
        Some(Fraction::new_raw(self.a.clone(), self.b.clone()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn creation_test() {
        let f = Fraction::new(7, 2).unwrap();
        assert_eq!((*f.numer(), *f.denom(), *f.integer_part()), (7, 2, 3));

        let f = Fraction::new(-7, 2).unwrap();
        assert_eq!(*f.integer_part(), -3); // truncated, not floored

        assert_eq!(Fraction::new(1, 0), Err(Error::InvalidFraction));
        assert_eq!(Fraction::new(0u32, 0), Err(Error::InvalidFraction));
    }

    #[test]
    fn creation_bounds_test() {
        assert_eq!(Fraction::new(i64::MIN, -1), Err(Error::Overflow));
        assert_eq!(Fraction::new(i8::MIN, -1), Err(Error::Overflow));

        let f = Fraction::new(i64::MIN, 1).unwrap();
        assert_eq!(*f.integer_part(), i64::MIN);
        let f = Fraction::new(i64::MAX, -1).unwrap();
        assert_eq!(*f.integer_part(), -i64::MAX);
        let f = Fraction::new(i64::MIN, i64::MAX).unwrap();
        assert_eq!(*f.integer_part(), -1);

        // the reciprocal of -1/MIN is MIN/-1
        let f = Fraction::new(-1, i64::MIN).unwrap();
        assert_eq!(f.inverse(), Err(Error::Overflow));
    }

    #[test]
    fn gcd_bounds_test() {
        assert_eq!(gcd_all(&[i64::MIN, i64::MIN]), Err(Error::Overflow));
        assert_eq!(gcd_all(&[i64::MIN, 0]), Err(Error::Overflow));
        assert_eq!(gcd_all(&[0, i64::MIN]), Err(Error::Overflow));
        assert_eq!(gcd_all(&[i64::MIN, 6]), Ok(2));
        assert_eq!(gcd_all(&[i64::MIN, -1]), Ok(1));
        assert_eq!(gcd_all(&[i64::MIN, i64::MAX]), Ok(1));
        assert_eq!(gcd_all(&[u64::MAX, 0]), Ok(u64::MAX));

        let mut f = Fraction::new(i64::MIN, i64::MIN).unwrap();
        assert!(matches!(f.reduce(), Err(Error::Overflow)));
        assert_eq!(
            Fraction::new(0, i64::MIN).unwrap().reduced(),
            Err(Error::Overflow)
        );

        let f = Fraction::new(i64::MIN, 4).unwrap().reduced().unwrap();
        assert_eq!((*f.numer(), *f.denom()), (i64::MIN / 4, 1));
        let f = Fraction::new(i64::MAX, i64::MAX).unwrap().reduced().unwrap();
        assert_eq!((*f.numer(), *f.denom()), (1, 1));
        let f = Fraction::new(i64::MIN, -2).unwrap().reduced().unwrap();
        assert_eq!((*f.numer(), *f.denom()), (i64::MIN / 2, -1));
    }

    #[test]
    fn gcd_test() {
        assert_eq!(gcd_all::<i64>(&[]), Ok(0));
        assert_eq!(gcd_all(&[12]), Ok(0));
        assert_eq!(gcd_all(&[12, 18]), Ok(6));
        assert_eq!(gcd_all(&[12, 18, 8]), Ok(2));
        assert_eq!(gcd_all(&[0, 0]), Ok(0));
        assert_eq!(Fraction::new(-12, 18).unwrap().gcd(), Ok(6));
    }

    #[test]
    fn reduce_test() {
        let mut f = Fraction::new(12, 18).unwrap();
        f.reduce().unwrap();
        assert_eq!((*f.numer(), *f.denom()), (2, 3));
        assert_eq!(f.gcd(), Ok(1));

        // idempotent
        let once = f.clone();
        f.reduce().unwrap();
        assert_eq!(f, once);

        let f = Fraction::new(-6, 4).unwrap().reduced().unwrap();
        assert_eq!((*f.numer(), *f.denom(), *f.integer_part()), (-3, 2, -1));

        let f = Fraction::new(0, 5).unwrap().reduced().unwrap();
        assert_eq!((*f.numer(), *f.denom()), (0, 1));
    }

    #[test]
    fn inverse_test() {
        let f = Fraction::new(3, 8).unwrap();
        let inv = f.inverse().unwrap();
        assert_eq!((*inv.numer(), *inv.denom(), *inv.integer_part()), (8, 3, 2));
        assert_eq!(Fraction::new(0, 8).unwrap().inverse(), Err(Error::InvalidFraction));
    }

    #[test]
    fn conversion_test() {
        assert_eq!(
            Fraction::<i64>::from_f64(0.75).unwrap(),
            Fraction::new(3, 4).unwrap()
        );
        assert_eq!(
            Fraction::<i64>::from_f64(-2.5).unwrap(),
            Fraction::new(-5, 2).unwrap()
        );
        assert_eq!(
            Fraction::<i64>::from_f64(3.0).unwrap(),
            Fraction::new(3, 1).unwrap()
        );
        assert_eq!(Fraction::<i64>::from_f64(2f64.sqrt()), Err(Error::NotRational));
        assert_eq!(Fraction::<i64>::from_f64(f64::NAN), Err(Error::NotRational));
        assert_eq!(Fraction::<i8>::from_f64(0.001), Err(Error::Overflow));
        assert_eq!(Fraction::<u32>::from_f64(-0.5), Err(Error::Overflow));

        let r: Ratio<i32> = Fraction::new(4, 6).unwrap().into();
        assert_eq!(r, Ratio::new(2, 3));
        assert_eq!(Fraction::from(Ratio::new(22, 7)), Fraction::new(22, 7).unwrap());

        assert_eq!(Fraction::new(1, 4).unwrap().to_f64(), Some(0.25));
        assert_eq!(format!("{}", Fraction::new(415, 93).unwrap()), "415/93");
    }

    #[test]
    fn cf_test() {
        assert_eq!(Fraction::new(415, 93).unwrap().cf(), Ok(vec![4, 2, 6, 7]));
        assert_eq!(Fraction::new(355u64, 113).unwrap().cf(), Ok(vec![3, 7, 16]));
        assert_eq!(Fraction::new(7, -2).unwrap().cf(), Ok(vec![-4, 2]));
    }

    #[test]
    fn farey_test() {
        let f5: Vec<String> = farey(5).unwrap().map(|f| f.to_string()).collect();
        assert_eq!(
            f5,
            vec![
                "0/1", "1/5", "1/4", "1/3", "2/5", "1/2", "3/5", "2/3", "3/4", "4/5", "1/1"
            ]
        );
        assert_eq!(farey(1u8).unwrap().count(), 2);
        assert_eq!(farey(8i64).unwrap().count(), 23);
        assert!(matches!(farey(0), Err(Error::InvalidArgument(_))));
    }
}
