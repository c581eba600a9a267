//! Fundamental solutions of Pell's equation `x² − n·y² = 1`

use super::surd::{sqrt_terms, QuadraticSurdBase, SqrtExpansion};
use crate::cont_frac::ConvergentConfig;
use crate::error::{Error, Result};

/// Find the minimal positive solution `(x, y)` of `x² − n·y² = 1`.
///
/// The solution is a convergent of `√n` within the first two periods of its
/// continued fraction. Returns `None` if `n` is a perfect square (there is no
/// positive solution), [Error::Overflow] if `T` cannot hold `x²` and
/// [Error::InvalidArgument] for a negative `n`.
pub fn pell<T: QuadraticSurdBase>(n: T) -> Result<Option<(T, T)>> {
    let cf = match sqrt_terms(n.clone())? {
        SqrtExpansion::PerfectSquare(_) => return Ok(None),
        SqrtExpansion::Periodic(cf) => cf,
    };

    let window = 2 * cf.period();
    for (h, k) in cf.convergents_with(&ConvergentConfig::unlimited()).take(window) {
        let hh = h.checked_mul(&h).ok_or(Error::Overflow)?;
        let nkk = k
            .checked_mul(&k)
            .and_then(|kk| n.checked_mul(&kk))
            .and_then(|v| v.checked_add(&T::one()))
            .ok_or(Error::Overflow)?;
        if hh == nkk {
            return Ok(Some((h, k)));
        }
    }

    // the window always contains the solution, so the stream stopped early
    Err(Error::Overflow)
}
