//! Encoding engine.

use std::io::Write;

use snafu::ResultExt;

use crate::error::EncodeResult;
use crate::error::encode::{IoSnafu, LengthOverflowSnafu};
use crate::{ByteOrder, Kind};

/// Serialize a value through an [`Encoder`].
///
/// Scalars write their fixed-width form, records encode each field in
/// declaration order and sequences write a `u32` count followed by each
/// element. Derive it for structs with `#[derive(Encode)]`.
///
/// # Example
///
/// ```
/// use wirecast::{ByteOrder, Encoder};
///
/// let mut encoder = Encoder::new(Vec::new(), ByteOrder::BigEndian);
/// encoder.encode(&0x0102u16).unwrap();
/// assert_eq!(encoder.into_inner(), [0x01, 0x02]);
/// ```
pub trait Encode {
    /// Write `self` to the encoder's sink.
    fn encode<W: Write>(&self, encoder: &mut Encoder<W>) -> EncodeResult;
}

/// Writes encoded values to a sink in one byte order.
///
/// Bytes reach the sink as soon as each field is encoded. Nothing is rolled
/// back if a later field fails.
#[derive(Debug)]
pub struct Encoder<W> {
    sink: W,
    order: ByteOrder,
    written: usize,
}

macro_rules! write_int {
    ($($name:ident: $ty:ty => $conv:ident;)+) => {
        $(
            #[doc = concat!("Write a `", stringify!($ty), "` in the encoder's byte order.")]
            #[inline]
            pub fn $name(&mut self, value: $ty) -> EncodeResult {
                let bytes = self.order.$conv(value as _);
                self.write_raw(&bytes)
            }
        )+
    };
}

impl<W: Write> Encoder<W> {
    /// Create an encoder over `sink`.
    pub fn new(sink: W, order: ByteOrder) -> Self {
        Self {
            sink,
            order,
            written: 0,
        }
    }

    /// Byte order applied to multi-byte fields.
    #[inline]
    pub fn order(&self) -> ByteOrder {
        self.order
    }

    /// Bytes written so far.
    #[inline]
    pub fn bytes_written(&self) -> usize {
        self.written
    }

    /// Consume the encoder and return the sink.
    pub fn into_inner(self) -> W {
        self.sink
    }

    /// Encode any value.
    #[inline]
    pub fn encode<T: Encode + ?Sized>(&mut self, value: &T) -> EncodeResult {
        value.encode(self)
    }

    /// Write bytes with no framing.
    pub fn write_raw(&mut self, bytes: &[u8]) -> EncodeResult {
        self.sink.write_all(bytes).context(IoSnafu)?;
        self.written += bytes.len();
        Ok(())
    }

    /// Write a boolean as `0x00` or `0x01`.
    #[inline]
    pub fn write_bool(&mut self, value: bool) -> EncodeResult {
        self.write_u8(u8::from(value))
    }

    /// Write a single byte.
    #[inline]
    pub fn write_u8(&mut self, value: u8) -> EncodeResult {
        self.write_raw(&[value])
    }

    /// Write a signed byte as its two's-complement pattern.
    #[inline]
    pub fn write_i8(&mut self, value: i8) -> EncodeResult {
        self.write_u8(value as u8)
    }

    write_int! {
        write_u16: u16 => u16_to_bytes;
        write_u32: u32 => u32_to_bytes;
        write_u64: u64 => u64_to_bytes;
        write_i16: i16 => u16_to_bytes;
        write_i32: i32 => u32_to_bytes;
        write_i64: i64 => u64_to_bytes;
    }

    /// Write the IEEE-754 bit pattern of a single.
    #[inline]
    pub fn write_f32(&mut self, value: f32) -> EncodeResult {
        let bytes = self.order.f32_to_bytes(value);
        self.write_raw(&bytes)
    }

    /// Write the IEEE-754 bit pattern of a double.
    #[inline]
    pub fn write_f64(&mut self, value: f64) -> EncodeResult {
        let bytes = self.order.f64_to_bytes(value);
        self.write_raw(&bytes)
    }

    /// Write a `u32` length prefix for a text or sequence.
    pub fn write_len(&mut self, kind: Kind, len: usize) -> EncodeResult {
        let Ok(prefix) = u32::try_from(len) else {
            return LengthOverflowSnafu { kind, len }.fail();
        };
        self.write_u32(prefix)
    }

    /// Write a text as its byte length followed by its raw bytes.
    pub fn write_text(&mut self, text: &str) -> EncodeResult {
        self.write_len(Kind::Text, text.len())?;
        self.write_raw(text.as_bytes())
    }

    /// Write a sequence as its element count followed by each element.
    pub fn write_sequence<'a, T, I>(&mut self, items: I) -> EncodeResult
    where
        T: Encode + 'a,
        I: IntoIterator<Item = &'a T>,
        I::IntoIter: ExactSizeIterator,
    {
        let items = items.into_iter();
        self.write_len(Kind::Sequence, items.len())?;
        for item in items {
            item.encode(self)?;
        }
        Ok(())
    }

    /// Flush the sink.
    pub fn flush(&mut self) -> EncodeResult {
        self.sink.flush().context(IoSnafu)
    }
}
