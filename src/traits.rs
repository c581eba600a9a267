use num_integer::Integer;
use num_traits::{CheckedAdd, CheckedDiv, CheckedMul, FromPrimitive};

/// The integer ring every algorithm in this crate is generic over.
///
/// All growth goes through [CheckedAdd] and [CheckedMul] (and [CheckedDiv] where
/// a quotient such as `i64::MIN / -1` can leave the range), so a fixed-width
/// primitive reports overflow (`None`) at the first unrepresentable value, while
/// `BigInt` and `BigUint` never do. The same code path therefore serves both the
/// bounded and the arbitrary-precision variants.
pub trait IntegerRing:
    Integer + Clone + CheckedAdd + CheckedMul + CheckedDiv + FromPrimitive
{
}
impl<T: Integer + Clone + CheckedAdd + CheckedMul + CheckedDiv + FromPrimitive> IntegerRing for T {}

/// Result of a computation that may only be an approximation of the true value
#[derive(PartialEq, Eq, Debug, Clone, Copy)]
pub enum Approximation<T> {
    Approximated(T),
    Exact(T),
}

impl<T> Approximation<T> {
    /// Get the computed value regardless of whether it's exact
    pub fn value(self) -> T {
        match self {
            Approximation::Approximated(v) => v,
            Approximation::Exact(v) => v,
        }
    }

    #[inline]
    pub fn is_exact(&self) -> bool {
        matches!(self, Approximation::Exact(_))
    }
}
