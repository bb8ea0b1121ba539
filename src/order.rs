//! Byte-order primitives shared by the encoder and decoder.

/// Byte order applied to every multi-byte field of one call.
///
/// The wire format carries no marker, so the reader must be given the same
/// order the writer used.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ByteOrder {
    /// Most significant byte first.
    BigEndian,
    /// Least significant byte first.
    LittleEndian,
}

macro_rules! int_conversions {
    ($($ty:ty => $to:ident, $from:ident;)+) => {
        $(
            #[doc = concat!("Split a `", stringify!($ty), "` into bytes in this order.")]
            #[inline]
            pub const fn $to(self, value: $ty) -> [u8; size_of::<$ty>()] {
                match self {
                    Self::BigEndian => value.to_be_bytes(),
                    Self::LittleEndian => value.to_le_bytes(),
                }
            }

            #[doc = concat!("Assemble a `", stringify!($ty), "` from bytes in this order.")]
            #[inline]
            pub const fn $from(self, bytes: [u8; size_of::<$ty>()]) -> $ty {
                match self {
                    Self::BigEndian => <$ty>::from_be_bytes(bytes),
                    Self::LittleEndian => <$ty>::from_le_bytes(bytes),
                }
            }
        )+
    };
}

impl ByteOrder {
    int_conversions! {
        u16 => u16_to_bytes, u16_from_bytes;
        u32 => u32_to_bytes, u32_from_bytes;
        u64 => u64_to_bytes, u64_from_bytes;
    }

    /// Bytes of the IEEE-754 bit pattern of `value`.
    #[inline]
    pub const fn f32_to_bytes(self, value: f32) -> [u8; 4] {
        self.u32_to_bytes(value.to_bits())
    }

    /// Reinterpret bytes as an IEEE-754 single. NaN payloads are preserved.
    #[inline]
    pub const fn f32_from_bytes(self, bytes: [u8; 4]) -> f32 {
        f32::from_bits(self.u32_from_bytes(bytes))
    }

    /// Bytes of the IEEE-754 bit pattern of `value`.
    #[inline]
    pub const fn f64_to_bytes(self, value: f64) -> [u8; 8] {
        self.u64_to_bytes(value.to_bits())
    }

    /// Reinterpret bytes as an IEEE-754 double. NaN payloads are preserved.
    #[inline]
    pub const fn f64_from_bytes(self, bytes: [u8; 8]) -> f64 {
        f64::from_bits(self.u64_from_bytes(bytes))
    }
}
