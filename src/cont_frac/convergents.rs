//! Streaming of convergents from continued fraction terms

use super::block::Block;
use crate::traits::IntegerRing;

/// Configuration for a [Convergents] stream
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ConvergentConfig {
    /// Maximum number of terms consumed from the sequence. `None` lets a
    /// recurring sequence stream forever (as long as `T` can hold the values).
    pub max_terms: Option<usize>,
}

impl Default for ConvergentConfig {
    /// A recurring stream is cut after `i32::MAX` terms
    fn default() -> Self {
        ConvergentConfig {
            max_terms: Some(i32::MAX as usize),
        }
    }
}

impl ConvergentConfig {
    /// A configuration without limit on the number of terms
    pub fn unlimited() -> Self {
        ConvergentConfig { max_terms: None }
    }

    /// A configuration consuming at most `max_terms` terms
    pub fn with_max_terms(max_terms: usize) -> Self {
        ConvergentConfig {
            max_terms: Some(max_terms),
        }
    }
}

/// Iterator of the convergents `(h, k)` of a term sequence `[a0; a1, a2, ...]`.
///
/// One convergent is computed per call to `next()`, with at most one term
/// buffered ahead. The stream is empty if the sequence has fewer than two terms.
/// It ends when the terms are exhausted, when the configured term limit is hit,
/// or when the next convergent does not fit in `T`. For a fixed-width `T` (e.g.
/// `i64`) the last case is the overflow boundary: no error is reported and the
/// pairs already produced stay valid. `BigInt` and `BigUint` never overflow.
///
/// A negative leading term gives negative numerators, e.g. `[-4; 2]` streams
/// `(-4, 1), (-7, 2)`. A negative pair does not end the stream.
#[derive(Debug, Clone)]
pub struct Convergents<I, T> {
    coeffs: I,
    block: Block<T>,
    pending: Option<T>, // the term read ahead to check the sequence length
    started: bool,
    remaining: Option<usize>,
    done: bool,
}

impl<I: Iterator<Item = T>, T: IntegerRing> Convergents<I, T> {
    pub fn new(coeffs: I, config: &ConvergentConfig) -> Self {
        Convergents {
            coeffs,
            block: Block::identity(),
            pending: None,
            started: false,
            remaining: config.max_terms,
            done: false,
        }
    }

    fn next_term(&mut self) -> Option<T> {
        if let Some(remaining) = self.remaining.as_mut() {
            if *remaining == 0 {
                return None;
            }
            *remaining -= 1;
        }

        match self.pending.take() {
            Some(a) => Some(a),
            None => self.coeffs.next(),
        }
    }

    fn step(&mut self) -> Option<(T, T)> {
        if !self.started {
            self.started = true;
            let first = self.coeffs.next()?;
            self.pending = Some(self.coeffs.next()?);

            // the first term is not counted against the read ahead one
            if let Some(remaining) = self.remaining.as_mut() {
                if *remaining == 0 {
                    return None;
                }
                *remaining -= 1;
            }
            return self.push(&first);
        }

        let a = self.next_term()?;
        self.push(&a)
    }

    fn push(&mut self, a: &T) -> Option<(T, T)> {
        // h_n = a_n * h_(n-1) + h_(n-2), k_n = a_n * k_(n-1) + k_(n-2)
        let (p, q) = self.block.checked_rmove(a)?;
        self.block.update(p.clone(), q.clone());
        Some((p, q))
    }
}

impl<I: Iterator<Item = T>, T: IntegerRing> Iterator for Convergents<I, T> {
    type Item = (T, T);

    fn next(&mut self) -> Option<(T, T)> {
        if self.done {
            return None;
        }

        let result = self.step();
        if result.is_none() {
            self.done = true;
            self.pending = None;
        }
        result
    }
}

impl<I: Iterator<Item = T>, T: IntegerRing> std::iter::FusedIterator for Convergents<I, T> {}
