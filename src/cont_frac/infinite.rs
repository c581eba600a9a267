//! Convergents of continued fractions given as arbitrary term iterators

use super::convergents::{ConvergentConfig, Convergents};
use crate::traits::IntegerRing;

/// Represents a simple continued fraction whose terms come from an iterator,
/// possibly infinitely many of them (e.g. [crate::symbols::E::cfrac()]).
/// The methods are available on every iterator of integers.
pub trait InfiniteContinuedFraction: Iterator {
    /// Stream the convergents of the terms with the default [ConvergentConfig]
    fn convergents(self) -> Convergents<Self, Self::Item>
    where
        Self: Sized,
        Self::Item: IntegerRing,
    {
        Convergents::new(self, &ConvergentConfig::default())
    }

    /// Stream the convergents of the terms with the given configuration
    fn convergents_with(self, config: &ConvergentConfig) -> Convergents<Self, Self::Item>
    where
        Self: Sized,
        Self::Item: IntegerRing,
    {
        Convergents::new(self, config)
    }
}

impl<T: ?Sized> InfiniteContinuedFraction for T where T: Iterator {}
