//! Predefined irrational constants given by their continued fraction terms

use num_traits::{One, Zero};
use std::ops::Add;

/// Euler's number, `e = [2; 1, 2, 1, 1, 4, 1, 1, 6, ...]`
#[derive(Debug, Clone, Copy)]
pub struct E {}

impl E {
    /// Infinite iterator of the continued fraction terms of e. Feed it to
    /// [InfiniteContinuedFraction::convergents()][crate::InfiniteContinuedFraction::convergents]
    /// to approximate e.
    pub fn cfrac<T: Zero + One + Clone>(&self) -> ECoefficients<T> {
        ECoefficients { i: T::zero(), m: 0 }
    }
}

/// Iterator of the terms of [E]
#[derive(Debug, Clone)]
pub struct ECoefficients<T> {
    i: T, // zero before the leading term is returned
    m: u8,
}

impl<T: Zero + One + Clone + Add<Output = T>> Iterator for ECoefficients<T> {
    type Item = T;

    fn next(&mut self) -> Option<T> {
        if self.i.is_zero() {
            self.i = T::one() + T::one();
            return Some(T::one() + T::one()); // return 2
        }

        // after the leading 2 the terms come in blocks (1, 2k, 1)
        let result = match self.m {
            1 => self.i.clone(),
            _ => T::one(),
        };

        if self.m == 2 {
            self.m = 0;
            self.i = T::one() + T::one() + self.i.clone();
        } else {
            self.m += 1;
        }

        Some(result)
    }
}
