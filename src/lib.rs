//! Byte-order aware binary marshalling.
//!
//! Values are written as a flat concatenation of their fields: no header, no
//! tags, no padding. The reader must know the exact shape it is decoding into
//! and the byte order the writer used.
//!
//! | Kind | Wire form |
//! |---|---|
//! | `bool` | 1 byte, nonzero is `true` |
//! | `u8`..`u64`, `i8`..`i64` | 1/2/4/8 bytes in the chosen order |
//! | `usize`, `isize` | 8 bytes |
//! | `f32`, `f64` | IEEE-754 bit pattern, 4/8 bytes |
//! | text | `u32` byte length, then the bytes |
//! | record | each field in declaration order |
//! | sequence | `u32` element count, then each element |
//!
//! # Example
//!
//! ```
//! # #[cfg(feature = "derive")] {
//! use wirecast::{ByteOrder, Decode, Encode};
//!
//! #[derive(Encode, Decode, Debug, Default, PartialEq)]
//! struct Reading {
//!     sensor: u16,
//!     label: String,
//!     samples: Vec<f32>,
//! }
//!
//! let reading = Reading { sensor: 3, label: "hi".into(), samples: vec![1.5] };
//!
//! let mut bytes = Vec::new();
//! wirecast::encode(&mut bytes, ByteOrder::LittleEndian, &reading).unwrap();
//! assert_eq!(bytes.len(), 2 + 4 + 2 + 4 + 4);
//!
//! let mut decoded = Reading::default();
//! wirecast::decode(&bytes[..], ByteOrder::LittleEndian, &mut decoded).unwrap();
//! assert_eq!(decoded, reading);
//! # }
//! ```

// Lets derived impls name `::wirecast` from inside this crate's own tests.
extern crate self as wirecast;

mod decoder;
mod dynamic;
mod encoder;
mod error;
mod impls;
mod kind;
mod order;
mod source;

use std::io::{Read, Write};

pub use decoder::{Decode, Decoder};
pub use dynamic::{Field, Shape, Value};
pub use encoder::{Encode, Encoder};
pub use error::{DecodeError, DecodeResult, EncodeError, EncodeResult};
pub use kind::Kind;
pub use order::ByteOrder;

#[cfg(feature = "derive")]
pub use wirecast_macros::{Decode, Encode};

/// Encode `value` into `sink`. Returns the number of bytes written.
///
/// Bytes written before an error stay in the sink.
pub fn encode<W, T>(sink: W, order: ByteOrder, value: &T) -> EncodeResult<usize>
where
    W: Write,
    T: Encode + ?Sized,
{
    let mut encoder = Encoder::new(sink, order);
    encoder.encode(value)?;
    encoder.flush()?;

    let written = encoder.bytes_written();
    tracing::trace!(?order, bytes = written, "encoded value");
    Ok(written)
}

/// Encode `value` into a new buffer.
pub fn to_vec<T: Encode + ?Sized>(order: ByteOrder, value: &T) -> EncodeResult<Vec<u8>> {
    let mut encoder = Encoder::new(Vec::new(), order);
    encoder.encode(value)?;

    let bytes = encoder.into_inner();
    tracing::trace!(?order, bytes = bytes.len(), "encoded value");
    Ok(bytes)
}

/// Decode from `source` into `destination`. Returns the number of bytes read.
///
/// On error `destination` is left populated up to the failing field.
///
/// # Untrusted input
///
/// Text and sequence lengths are read from the wire and allocated before
/// their contents arrive, with no upper bound. A bad prefix can make the
/// allocator abort the process. For input you do not control, build a
/// [`Decoder`] with [`Decoder::with_max_len`] and call
/// [`Decoder::decode_into`] instead.
pub fn decode<R, T>(source: R, order: ByteOrder, destination: &mut T) -> DecodeResult<usize>
where
    R: Read,
    T: Decode + ?Sized,
{
    let mut decoder = Decoder::new(source, order);
    decoder.decode_into(destination)?;

    let read = decoder.bytes_read();
    tracing::trace!(?order, bytes = read, "decoded value");
    Ok(read)
}

/// Decode one dynamic value of the given shape from `source`.
///
/// Lengths are unbounded, as with [`decode`]. Use
/// [`decode_value_with_limit`] or [`Decoder::read_value`] for untrusted input.
pub fn decode_value<R: Read>(source: R, order: ByteOrder, shape: &Shape) -> DecodeResult<Value> {
    let mut decoder = Decoder::new(source, order);
    let value = decoder.read_value(shape)?;

    tracing::trace!(?order, kind = %shape.kind(), bytes = decoder.bytes_read(), "decoded value");
    Ok(value)
}

/// Decode one dynamic value, rejecting any text or sequence length above
/// `max_len` before it is allocated.
pub fn decode_value_with_limit<R: Read>(
    source: R,
    order: ByteOrder,
    shape: &Shape,
    max_len: u32,
) -> DecodeResult<Value> {
    let mut decoder = Decoder::new(source, order).with_max_len(max_len);
    let value = decoder.read_value(shape)?;

    tracing::trace!(?order, kind = %shape.kind(), bytes = decoder.bytes_read(), "decoded value");
    Ok(value)
}

#[cfg(test)]
mod tests;
