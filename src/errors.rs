//! Error cases surfaced by the fallible operations of this crate.

use core::fmt;

/// Everything a K-PKE operation can report. All operations are deterministic
/// given their inputs, so none of these is retryable; the caller either fixes
/// the input or gives up.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum Error {
    /// A byte input's length does not match the declared parameter set.
    /// Raised before any arithmetic touches the input.
    InvalidLength,
    /// A 12-bit field decoded to a value in `[q, 4096)`; encryption and
    /// decryption keys must carry fully reduced coefficients.
    InvalidCoefficient,
    /// A bit width `d` outside `[1, 12]` for encode/decode, or a centered
    /// binomial `eta` outside `{2, 3}`.
    InvalidParameter,
    /// The external randomness source failed to supply bytes.
    RandomSource,
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::InvalidLength => f.write_str("input length does not match the parameter set"),
            Error::InvalidCoefficient => f.write_str("decoded coefficient is not reduced mod q"),
            Error::InvalidParameter => f.write_str("bit width or eta out of range"),
            Error::RandomSource => f.write_str("random number generator failed"),
        }
    }
}
