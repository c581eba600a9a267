use thiserror::Error;

/// Errors reported by the fallible operations of this crate.
///
/// All of them are recoverable: an [Error::Overflow] on a fixed-width type can be
/// retried with `BigInt` or `BigUint`.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum Error {
    /// The denominator of a fraction is zero
    #[error("invalid fraction: denominator is zero")]
    InvalidFraction,

    /// Reduction by a zero greatest common divisor
    #[error("divide by zero: greatest common divisor is zero")]
    DivideByZero,

    /// The input is not an exact rational number
    #[error("value is not an exact rational number")]
    NotRational,

    /// A fixed-width integer cannot represent the result
    #[error("arithmetic overflow")]
    Overflow,

    #[error("invalid argument: {0}")]
    InvalidArgument(&'static str),
}

pub type Result<T> = core::result::Result<T, Error>;
