//! Errors raised while encoding.

use std::io;

use snafu::Snafu;

use crate::Kind;

/// Error while encoding a value.
#[derive(Debug, Snafu)]
#[snafu(visibility(pub(crate)))]
pub enum EncodeError {
    /// The traversal reached a kind with no wire rule.
    #[snafu(display("unsupported type: {kind}"))]
    UnsupportedType {
        /// The offending kind.
        kind: Kind,
    },

    /// A text or sequence is too long for its 32-bit length prefix.
    #[snafu(display("{kind} of length {len} exceeds the 32-bit length prefix"))]
    LengthOverflow {
        /// Text or sequence.
        kind: Kind,
        /// Actual length.
        len: usize,
    },

    /// A dynamic sequence holds elements that no single shape can decode.
    #[snafu(display("sequence element {index} ({found}) does not match the {expected} before it"))]
    MixedSequence {
        /// Position of the first element that differs.
        index: usize,
        /// Kind shared by the elements before it.
        expected: Kind,
        /// Kind of the differing element.
        found: Kind,
    },

    /// The sink reported a failure.
    #[snafu(display("failed to write to sink"))]
    Io {
        /// Underlying I/O error.
        source: io::Error,
    },
}

/// Result type for encoding.
pub type EncodeResult<T = ()> = Result<T, EncodeError>;
