//! Data structures and algorithms implementations related to
//! quadratic surds (square roots of non-square integers).

pub mod pell;
pub mod surd;
