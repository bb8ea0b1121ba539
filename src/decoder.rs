//! Decoding engine.

use std::io::Read;

use snafu::{ResultExt, ensure};

use crate::error::DecodeResult;
use crate::error::decode::{InvalidTextSnafu, LengthLimitSnafu};
use crate::source::FullRead;
use crate::{ByteOrder, Kind, Shape, Value};

/// Populate an existing value from a [`Decoder`].
///
/// The destination's type dictates what is read; nothing is inferred from the
/// wire. Sequences are resized to the decoded count before their elements are
/// filled in place. Derive it for structs with `#[derive(Decode)]`.
///
/// # Example
///
/// ```
/// use wirecast::{ByteOrder, Decoder};
///
/// let mut decoder = Decoder::new(&[0x01u8, 0x02][..], ByteOrder::LittleEndian);
/// let mut value = 0u16;
/// decoder.decode_into(&mut value).unwrap();
/// assert_eq!(value, 0x0201);
/// ```
pub trait Decode {
    /// Overwrite `self` with the next value from the decoder's source.
    ///
    /// On error `self` may be partially overwritten.
    fn decode_into<R: Read>(&mut self, decoder: &mut Decoder<R>) -> DecodeResult;
}

/// Reads encoded values from a source in one byte order.
#[derive(Debug)]
pub struct Decoder<R> {
    source: FullRead<R>,
    order: ByteOrder,
    max_len: Option<u32>,
}

macro_rules! read_int {
    ($($name:ident: $ty:ty => $conv:ident;)+) => {
        $(
            #[doc = concat!("Read a `", stringify!($ty), "` in the decoder's byte order.")]
            #[inline]
            pub fn $name(&mut self) -> DecodeResult<$ty> {
                let bytes = self.read_array()?;
                Ok(self.order.$conv(bytes) as $ty)
            }
        )+
    };
}

impl<R: Read> Decoder<R> {
    /// Create a decoder over `source`.
    pub fn new(source: R, order: ByteOrder) -> Self {
        Self {
            source: FullRead::new(source),
            order,
            max_len: None,
        }
    }

    /// Reject text and sequence lengths above `limit` before allocating.
    ///
    /// Without a limit a corrupt or hostile length prefix can request
    /// gigabytes, and a failed allocation aborts the process.
    #[must_use]
    pub fn with_max_len(mut self, limit: u32) -> Self {
        self.max_len = Some(limit);
        self
    }

    /// Byte order applied to multi-byte fields.
    #[inline]
    pub fn order(&self) -> ByteOrder {
        self.order
    }

    /// Bytes consumed from the source so far.
    #[inline]
    pub fn bytes_read(&self) -> usize {
        self.source.consumed()
    }

    /// Consume the decoder and return the source.
    pub fn into_inner(self) -> R {
        self.source.into_inner()
    }

    /// Decode into `destination`.
    #[inline]
    pub fn decode_into<T: Decode + ?Sized>(&mut self, destination: &mut T) -> DecodeResult {
        destination.decode_into(self)
    }

    /// Decode one dynamic value of the given shape.
    ///
    /// Honors the limit set by [`Decoder::with_max_len`] at every nesting
    /// level.
    ///
    /// ```
    /// use wirecast::{ByteOrder, DecodeError, Decoder, Shape};
    ///
    /// let shape = Shape::sequence(Shape::sequence(Shape::U8));
    /// let mut decoder = Decoder::new(&[0xFFu8; 4][..], ByteOrder::BigEndian).with_max_len(1024);
    /// let err = decoder.read_value(&shape).unwrap_err();
    /// assert!(matches!(err, DecodeError::LengthLimit { .. }));
    /// ```
    pub fn read_value(&mut self, shape: &Shape) -> DecodeResult<Value> {
        shape.decode(self)
    }

    /// Fill `buf` with raw bytes.
    #[inline]
    pub fn read_raw(&mut self, buf: &mut [u8]) -> DecodeResult {
        self.source.fill(buf)
    }

    fn read_array<const N: usize>(&mut self) -> DecodeResult<[u8; N]> {
        let mut bytes = [0u8; N];
        self.read_raw(&mut bytes)?;
        Ok(bytes)
    }

    /// Read a boolean. Any nonzero byte is `true`.
    #[inline]
    pub fn read_bool(&mut self) -> DecodeResult<bool> {
        Ok(self.read_u8()? != 0)
    }

    /// Read a single byte.
    #[inline]
    pub fn read_u8(&mut self) -> DecodeResult<u8> {
        let bytes: [u8; 1] = self.read_array()?;
        Ok(bytes[0])
    }

    /// Read a signed byte.
    #[inline]
    pub fn read_i8(&mut self) -> DecodeResult<i8> {
        Ok(self.read_u8()? as i8)
    }

    read_int! {
        read_u16: u16 => u16_from_bytes;
        read_u32: u32 => u32_from_bytes;
        read_u64: u64 => u64_from_bytes;
        read_i16: i16 => u16_from_bytes;
        read_i32: i32 => u32_from_bytes;
        read_i64: i64 => u64_from_bytes;
    }

    /// Read an IEEE-754 single from its bit pattern.
    #[inline]
    pub fn read_f32(&mut self) -> DecodeResult<f32> {
        let bytes = self.read_array()?;
        Ok(self.order.f32_from_bytes(bytes))
    }

    /// Read an IEEE-754 double from its bit pattern.
    #[inline]
    pub fn read_f64(&mut self) -> DecodeResult<f64> {
        let bytes = self.read_array()?;
        Ok(self.order.f64_from_bytes(bytes))
    }

    /// Read a `u32` length prefix and check it against the configured limit.
    pub fn read_len(&mut self, kind: Kind) -> DecodeResult<usize> {
        let len = self.read_u32()?;
        if let Some(limit) = self.max_len {
            ensure!(len <= limit, LengthLimitSnafu { kind, len, limit });
        }
        Ok(len as usize)
    }

    /// Read a length-prefixed text into `text`.
    ///
    /// `text` is only replaced once all of its bytes have arrived and are
    /// valid UTF-8.
    pub fn read_text_into(&mut self, text: &mut String) -> DecodeResult {
        let len = self.read_len(Kind::Text)?;
        let mut bytes = vec![0u8; len];
        self.read_raw(&mut bytes)?;
        *text = String::from_utf8(bytes).context(InvalidTextSnafu)?;
        Ok(())
    }

    /// Read a length-prefixed sequence into `items`.
    ///
    /// `items` is resized to exactly the decoded count, then each element is
    /// decoded in place.
    pub fn read_sequence_into<T>(&mut self, items: &mut Vec<T>) -> DecodeResult
    where
        T: Decode + Default,
    {
        let len = self.read_len(Kind::Sequence)?;
        items.clear();
        items.resize_with(len, T::default);
        for item in items.iter_mut() {
            item.decode_into(self)?;
        }
        Ok(())
    }
}
