use std::io::{Read, Write};

use crate::{Decode, DecodeResult, Decoder, Encode, EncodeResult, Encoder};

impl Encode for str {
    #[inline]
    fn encode<W: Write>(&self, encoder: &mut Encoder<W>) -> EncodeResult {
        encoder.write_text(self)
    }
}

impl Encode for String {
    #[inline]
    fn encode<W: Write>(&self, encoder: &mut Encoder<W>) -> EncodeResult {
        encoder.write_text(self)
    }
}

impl Decode for String {
    #[inline]
    fn decode_into<R: Read>(&mut self, decoder: &mut Decoder<R>) -> DecodeResult {
        decoder.read_text_into(self)
    }
}

impl<T: Encode> Encode for [T] {
    #[inline]
    fn encode<W: Write>(&self, encoder: &mut Encoder<W>) -> EncodeResult {
        encoder.write_sequence(self)
    }
}

impl<T: Encode> Encode for Vec<T> {
    #[inline]
    fn encode<W: Write>(&self, encoder: &mut Encoder<W>) -> EncodeResult {
        encoder.write_sequence(self)
    }
}

// Vec<u8> shares the text wire form, so it doubles as unvalidated text
impl<T: Decode + Default> Decode for Vec<T> {
    #[inline]
    fn decode_into<R: Read>(&mut self, decoder: &mut Decoder<R>) -> DecodeResult {
        decoder.read_sequence_into(self)
    }
}
