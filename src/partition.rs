//! Counting integer partitions into an exact number of parts

use crate::error::{Error, Result};
use crate::traits::IntegerRing;
use std::collections::HashMap;
use std::convert::TryFrom;

/// Memo table owned by a single top-level call of [partitions()], keyed by
/// `(n - m, m - 2)`. Only computed cells are stored and none changes after
/// it is written.
struct PartitionTable<T> {
    cells: HashMap<(usize, usize), T>,
}

impl<T: IntegerRing> PartitionTable<T> {
    fn new() -> Self {
        PartitionTable {
            cells: HashMap::new(),
        }
    }

    /// The count of a base case or of an already computed cell, `None` otherwise
    fn known(&self, n: usize, m: usize) -> Result<Option<T>> {
        if n < m {
            return Ok(Some(T::zero()));
        }
        if n <= m + 1 {
            return Ok(Some(T::one()));
        }
        if m == 2 {
            return T::from_usize(n / 2).map(Some).ok_or(Error::Overflow);
        }
        Ok(self.cells.get(&(n - m, m - 2)).cloned())
    }

    fn set(&mut self, n: usize, m: usize, value: T) {
        let prev = self.cells.insert((n - m, m - 2), value);
        debug_assert!(prev.is_none());
    }
}

/// Count the partitions of `n` into exactly `m` positive parts, regardless of order.
///
/// - `m < 2` returns `m`, so `p(n, 0) = 0` for every `n` and `p(n, 1) = 1`
/// - `n < m` returns 0, and `n <= m + 1` returns 1
/// - `m == 2` returns `n / 2`
///
/// Otherwise `p(n, m) = p(n - 1, m - 1) + p(n - m, m)` is unrolled into
/// `Σ p(n - 1 - j·m, m - 1)` over `j` while `n - j·m >= m`, with every
/// intermediate count memoized for the duration of the call. The evaluation
/// runs on an explicit work stack, so neither a large `m` nor a large `n`
/// deepens the call stack.
///
/// A fixed-width `T` fails with [Error::Overflow] instead of wrapping; counts grow
/// past `u64` for `n` in the low hundreds, use `BigUint` there. Negative input fails
/// with [Error::InvalidArgument].
///
/// ```
/// # use num_frac::partitions;
/// assert_eq!(partitions::<u64>(10, 3), Ok(8));
/// ```
pub fn partitions<T: IntegerRing>(n: i64, m: i64) -> Result<T> {
    if n < 0 || m < 0 {
        return Err(Error::InvalidArgument("partition arguments must be non-negative"));
    }
    if m < 2 {
        return T::from_i64(m).ok_or(Error::Overflow);
    }

    let n = usize::try_from(n).map_err(|_| Error::InvalidArgument("partition total too large"))?;
    let m = usize::try_from(m).map_err(|_| Error::InvalidArgument("partition size too large"))?;
    count(n, m)
}

fn count<T: IntegerRing>(n: usize, m: usize) -> Result<T> {
    let mut table = PartitionTable::new();
    if let Some(v) = table.known(n, m)? {
        return Ok(v);
    }

    // a frame stays on the stack until all of its terms are known
    let mut stack = vec![(n, m)];
    while let Some(&(n, m)) = stack.last() {
        if table.known(n, m)?.is_some() {
            stack.pop();
            continue;
        }

        // either some part is 1 (drop it), or all parts are >= 2 (take 1 from each)
        let mut total = Some(T::zero());
        let mut rest = n;
        while rest >= m {
            match table.known(rest - 1, m - 1)? {
                Some(part) => {
                    if let Some(sum) = total.as_mut() {
                        *sum = sum.checked_add(&part).ok_or(Error::Overflow)?;
                    }
                }
                None => {
                    total = None;
                    stack.push((rest - 1, m - 1));
                }
            }
            rest -= m;
        }

        if let Some(total) = total {
            stack.pop();
            if stack.is_empty() {
                return Ok(total);
            }
            table.set(n, m, total);
        }
    }

    unreachable!("the bottom frame returns once all of its terms are known")
}
