//! Errors raised while decoding.

use std::io;
use std::string::FromUtf8Error;

use snafu::Snafu;

use crate::Kind;

/// Error while decoding a value.
///
/// A failed decode leaves the destination populated up to the failing field.
/// Callers retrying once more data is available should discard it.
#[derive(Debug, Snafu)]
#[snafu(visibility(pub(crate)))]
pub enum DecodeError {
    /// The destination names a kind with no wire rule.
    #[snafu(display("unsupported type: {kind}"))]
    UnsupportedType {
        /// The offending kind.
        kind: Kind,
    },

    /// The source ended before a field was complete.
    #[snafu(display(
        "unexpected end of input: needed {needed} bytes, only {available} available"
    ))]
    ShortRead {
        /// Bytes the field required.
        needed: usize,
        /// Bytes obtained before the source ended.
        available: usize,
    },

    /// A length prefix is above the decoder's configured limit.
    #[snafu(display("{kind} length {len} exceeds limit of {limit}"))]
    LengthLimit {
        /// Text or sequence.
        kind: Kind,
        /// Length read from the wire.
        len: u32,
        /// Configured limit.
        limit: u32,
    },

    /// Text bytes are not valid UTF-8.
    #[snafu(display("text is not valid UTF-8"))]
    InvalidText {
        /// Conversion error, holding the raw bytes.
        source: FromUtf8Error,
    },

    /// A 64-bit wire value does not fit the platform integer.
    #[snafu(display("{value:#x} does not fit in {kind}"))]
    OutOfRange {
        /// `usize` or `isize`.
        kind: Kind,
        /// Raw 64-bit wire value.
        value: u64,
    },

    /// The source reported a failure.
    #[snafu(display("failed to read from source"))]
    Io {
        /// Underlying I/O error.
        source: io::Error,
    },
}

/// Result type for decoding.
pub type DecodeResult<T = ()> = Result<T, DecodeError>;
