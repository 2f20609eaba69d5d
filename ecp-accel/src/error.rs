//! Error types.

use core::fmt::{self, Display};

/// Errors reported by the accelerator bridge.
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub enum Error {
    /// Missing or malformed arguments, e.g. an input point without an
    /// x-coordinate.
    BadInput,

    /// The operand width exceeds the accelerator's capacity, or the curve
    /// family/operation combination has no hardware support.
    Unsupported,

    /// The accelerator rejected the point as not lying on the curve.
    InvalidKey,

    /// The accelerator reported a failure for well-formed input.
    HardwareFailure,

    /// A big integer has non-zero bytes beyond the operand width.
    BufferTooSmall,
}

impl Error {
    /// Is this error caused by the caller's arguments?
    pub fn is_bad_input(self) -> bool {
        matches!(self, Error::BadInput | Error::BufferTooSmall)
    }
}

impl Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Error::BadInput => "bad input data",
            Error::Unsupported => "feature unsupported by the accelerator",
            Error::InvalidKey => "invalid key",
            Error::HardwareFailure => "hardware acceleration failed",
            Error::BufferTooSmall => "buffer too small",
        })
    }
}

impl core::error::Error for Error {}

/// Result type.
pub type Result<T> = core::result::Result<T, Error>;
