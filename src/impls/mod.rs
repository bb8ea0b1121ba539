mod macros;

mod alloc;

use std::io::{Read, Write};

use snafu::OptionExt;

use crate::error::decode::OutOfRangeSnafu;
use crate::{Decode, DecodeResult, Decoder, Encode, EncodeResult, Encoder, Kind};

// usize/isize - always 64 bits on the wire
impl Encode for usize {
    #[inline]
    fn encode<W: Write>(&self, encoder: &mut Encoder<W>) -> EncodeResult {
        encoder.write_u64(*self as u64)
    }
}

impl Decode for usize {
    fn decode_into<R: Read>(&mut self, decoder: &mut Decoder<R>) -> DecodeResult {
        let value = decoder.read_u64()?;
        *self = usize::try_from(value).ok().context(OutOfRangeSnafu {
            kind: Kind::Usize,
            value,
        })?;
        Ok(())
    }
}

impl Encode for isize {
    #[inline]
    fn encode<W: Write>(&self, encoder: &mut Encoder<W>) -> EncodeResult {
        encoder.write_i64(*self as i64)
    }
}

impl Decode for isize {
    fn decode_into<R: Read>(&mut self, decoder: &mut Decoder<R>) -> DecodeResult {
        let value = decoder.read_i64()?;
        *self = isize::try_from(value).ok().context(OutOfRangeSnafu {
            kind: Kind::Isize,
            value: value as u64,
        })?;
        Ok(())
    }
}

impl<T: Encode + ?Sized> Encode for &T {
    #[inline]
    fn encode<W: Write>(&self, encoder: &mut Encoder<W>) -> EncodeResult {
        (**self).encode(encoder)
    }
}

impl<T: Encode + ?Sized> Encode for &mut T {
    #[inline]
    fn encode<W: Write>(&self, encoder: &mut Encoder<W>) -> EncodeResult {
        (**self).encode(encoder)
    }
}
