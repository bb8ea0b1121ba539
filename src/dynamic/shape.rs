use std::io::Read;

use snafu::ensure;

use crate::error::decode::UnsupportedTypeSnafu;
use crate::{Decode, DecodeResult, Decoder, Field, Kind, Value};

/// Runtime description of a destination.
///
/// Every node names a concrete kind. [`Shape::Any`] stands for a destination
/// whose kind is not known, which the decoder refuses.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Shape {
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
    /// Named fields in declaration order.
    Record(Vec<(String, Shape)>),
    /// Element shape.
    Sequence(Box<Shape>),
    Char,
    Map,
    Null,
    Any,
}

impl Shape {
    /// Build a record shape from `(name, shape)` pairs.
    pub fn record<N, I>(fields: I) -> Self
    where
        N: Into<String>,
        I: IntoIterator<Item = (N, Shape)>,
    {
        Self::Record(
            fields
                .into_iter()
                .map(|(name, shape)| (name.into(), shape))
                .collect(),
        )
    }

    /// Shape of a sequence of `element`.
    pub fn sequence(element: Shape) -> Self {
        Self::Sequence(Box::new(element))
    }

    pub(crate) fn scalar(kind: Kind) -> Self {
        match kind {
            Kind::Bool => Self::Bool,
            Kind::U8 => Self::U8,
            Kind::U16 => Self::U16,
            Kind::U32 => Self::U32,
            Kind::U64 => Self::U64,
            Kind::Usize => Self::Usize,
            Kind::I8 => Self::I8,
            Kind::I16 => Self::I16,
            Kind::I32 => Self::I32,
            Kind::I64 => Self::I64,
            Kind::Isize => Self::Isize,
            Kind::F32 => Self::F32,
            Kind::F64 => Self::F64,
            Kind::Text => Self::Text,
            Kind::Record => Self::Record(Vec::new()),
            Kind::Sequence => Self::sequence(Self::Any),
            Kind::Char => Self::Char,
            Kind::Map => Self::Map,
            Kind::Null => Self::Null,
            Kind::Any => Self::Any,
        }
    }

    /// Kind this shape describes.
    pub fn kind(&self) -> Kind {
        match self {
            Self::Bool => Kind::Bool,
            Self::U8 => Kind::U8,
            Self::U16 => Kind::U16,
            Self::U32 => Kind::U32,
            Self::U64 => Kind::U64,
            Self::Usize => Kind::Usize,
            Self::I8 => Kind::I8,
            Self::I16 => Kind::I16,
            Self::I32 => Kind::I32,
            Self::I64 => Kind::I64,
            Self::Isize => Kind::Isize,
            Self::F32 => Kind::F32,
            Self::F64 => Kind::F64,
            Self::Text => Kind::Text,
            Self::Record(_) => Kind::Record,
            Self::Sequence(_) => Kind::Sequence,
            Self::Char => Kind::Char,
            Self::Map => Kind::Map,
            Self::Null => Kind::Null,
            Self::Any => Kind::Any,
        }
    }

    /// Most specific shape that describes values of both `self` and `other`.
    ///
    /// [`Shape::Any`] matches any shape. Records match when their field names
    /// agree in order and every field unifies. Returns `None` if no single
    /// shape reads both.
    pub fn unify(&self, other: &Shape) -> Option<Shape> {
        match (self, other) {
            (Self::Any, shape) | (shape, Self::Any) => Some(shape.clone()),
            (Self::Record(ours), Self::Record(theirs)) => {
                if ours.len() != theirs.len() {
                    return None;
                }
                ours.iter()
                    .zip(theirs)
                    .map(|((name, a), (other_name, b))| {
                        if name != other_name {
                            return None;
                        }
                        a.unify(b).map(|shape| (name.clone(), shape))
                    })
                    .collect::<Option<_>>()
                    .map(Self::Record)
            }
            (Self::Sequence(a), Self::Sequence(b)) => a.unify(b).map(Self::sequence),
            (a, b) if a == b => Some(a.clone()),
            _ => None,
        }
    }

    /// Read one value of this shape.
    ///
    /// Sequence and text lengths come from the wire and are allocated up
    /// front. Use a decoder built with [`Decoder::with_max_len`] for
    /// untrusted input.
    pub fn decode<R: Read>(&self, decoder: &mut Decoder<R>) -> DecodeResult<Value> {
        let kind = self.kind();
        ensure!(kind.is_supported(), UnsupportedTypeSnafu { kind });

        let value = match self {
            Self::Bool => Value::Bool(decoder.read_bool()?),
            Self::U8 => Value::U8(decoder.read_u8()?),
            Self::U16 => Value::U16(decoder.read_u16()?),
            Self::U32 => Value::U32(decoder.read_u32()?),
            Self::U64 => Value::U64(decoder.read_u64()?),
            Self::Usize => {
                let mut v = 0usize;
                v.decode_into(decoder)?;
                Value::Usize(v)
            }
            Self::I8 => Value::I8(decoder.read_i8()?),
            Self::I16 => Value::I16(decoder.read_i16()?),
            Self::I32 => Value::I32(decoder.read_i32()?),
            Self::I64 => Value::I64(decoder.read_i64()?),
            Self::Isize => {
                let mut v = 0isize;
                v.decode_into(decoder)?;
                Value::Isize(v)
            }
            Self::F32 => Value::F32(decoder.read_f32()?),
            Self::F64 => Value::F64(decoder.read_f64()?),
            Self::Text => {
                let mut text = String::new();
                decoder.read_text_into(&mut text)?;
                Value::Text(text)
            }
            Self::Record(fields) => {
                let mut decoded = Vec::with_capacity(fields.len());
                for (name, shape) in fields {
                    decoded.push(Field::new(name.clone(), shape.decode(decoder)?));
                }
                Value::Record(decoded)
            }
            Self::Sequence(element) => {
                let len = decoder.read_len(Kind::Sequence)?;
                let mut items = Vec::with_capacity(len);
                for _ in 0..len {
                    items.push(element.decode(decoder)?);
                }
                Value::Sequence(items)
            }
            other => return UnsupportedTypeSnafu { kind: other.kind() }.fail(),
        };
        Ok(value)
    }
}
