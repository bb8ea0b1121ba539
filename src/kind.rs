use core::fmt;

/// Every kind the engines can meet while walking a value or a shape.
///
/// Only the kinds with a wire rule are encodable. [`Kind::Char`],
/// [`Kind::Map`], [`Kind::Null`] and [`Kind::Any`] exist so that errors can
/// name what was rejected.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Kind {
    Bool,
    U8,
    U16,
    U32,
    U64,
    Usize,
    I8,
    I16,
    I32,
    I64,
    Isize,
    F32,
    F64,
    Text,
    Record,
    Sequence,
    Char,
    Map,
    Null,
    Any,
}

impl Kind {
    /// True if the kind has a wire rule. The dynamic engines reject the rest
    /// with `UnsupportedType` before touching the stream.
    pub const fn is_supported(self) -> bool {
        !matches!(self, Self::Char | Self::Map | Self::Null | Self::Any)
    }
}

impl fmt::Display for Kind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Bool => "bool",
            Self::U8 => "u8",
            Self::U16 => "u16",
            Self::U32 => "u32",
            Self::U64 => "u64",
            Self::Usize => "usize",
            Self::I8 => "i8",
            Self::I16 => "i16",
            Self::I32 => "i32",
            Self::I64 => "i64",
            Self::Isize => "isize",
            Self::F32 => "f32",
            Self::F64 => "f64",
            Self::Text => "text",
            Self::Record => "record",
            Self::Sequence => "sequence",
            Self::Char => "char",
            Self::Map => "map",
            Self::Null => "null",
            Self::Any => "unknown kind",
        };
        f.write_str(name)
    }
}
