//! Error type shared by every fallible operation in the crate.

use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

/// The only failure the engine reports.
///
/// Every variant is a programmer or configuration error: a vector whose length
/// disagrees with a declared variable count, or an index outside that range.
/// Nothing inside the crate recovers from it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum Error {
    /// A vector (exponents, values, mask, query) or a die does not match the
    /// number of variables of the receiving object.
    #[error("dimension mismatch: expected {expected} variables, got {actual}")]
    DimensionMismatch { expected: usize, actual: usize },
}

impl Error {
    pub(crate) fn check_dims(expected: usize, actual: usize) -> Result<()> {
        if expected == actual {
            Ok(())
        } else {
            Err(Error::DimensionMismatch { expected, actual })
        }
    }
}
