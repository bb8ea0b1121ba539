//! Error types for encoding and decoding.

pub(crate) mod decode;
pub(crate) mod encode;

pub use decode::{DecodeError, DecodeResult};
pub use encode::{EncodeError, EncodeResult};
