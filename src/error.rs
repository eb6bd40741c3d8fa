//! Error types for conversions and text parsing.

use num_bigint::ParseBigIntError;
use thiserror::Error;

/// Error narrowing an arbitrary-precision integer into a fixed-width value.
///
/// The saturating conversions (`from_big`) map these to `ZERO` and `MAX`
/// respectively; the checked conversions surface them to the caller.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum TryFromBigError {
    /// The input was negative.
    #[error("value is negative")]
    Negative,

    /// The input magnitude does not fit in the target width.
    #[error("value overflows {width}-bit integer")]
    Overflow {
        /// Bit width of the target type.
        width: u32,
    },
}

/// Error parsing a decimal string into a fixed-width value.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ParseUintError {
    /// The text is not a valid decimal integer.
    #[error("invalid decimal integer: {0}")]
    Invalid(#[from] ParseBigIntError),

    /// The value is negative or does not fit in the target width.
    #[error(transparent)]
    OutOfRange(#[from] TryFromBigError),
}
