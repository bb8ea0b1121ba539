use std::io::Write;

use snafu::{OptionExt, ensure};

use crate::error::encode::{MixedSequenceSnafu, UnsupportedTypeSnafu};
use crate::{Encode, EncodeResult, Encoder, Kind, Shape};

/// A named member of a [`Value::Record`].
#[derive(Debug, Clone, PartialEq)]
pub struct Field {
    /// Field name. Not written to the wire.
    pub name: String,
    /// Field value.
    pub value: Value,
}

impl Field {
    /// Create a field.
    pub fn new(name: impl Into<String>, value: Value) -> Self {
        Self {
            name: name.into(),
            value,
        }
    }
}

/// A dynamically typed value.
///
/// `Char`, `Map` and `Null` can be held but not encoded; the encoder rejects
/// them with [`EncodeError::UnsupportedType`](crate::EncodeError::UnsupportedType).
#[derive(Debug, Clone, PartialEq)]
pub enum Value {
    Bool(bool),
    U8(u8),
    U16(u16),
    U32(u32),
    U64(u64),
    Usize(usize),
    I8(i8),
    I16(i16),
    I32(i32),
    I64(i64),
    Isize(isize),
    F32(f32),
    F64(f64),
    Text(String),
    /// Fields in declaration order.
    Record(Vec<Field>),
    /// Elements of a single kind.
    Sequence(Vec<Value>),
    Char(char),
    /// Key/value pairs.
    Map(Vec<(Value, Value)>),
    Null,
}

impl Value {
    /// Build a record from `(name, value)` pairs.
    pub fn record<N, I>(fields: I) -> Self
    where
        N: Into<String>,
        I: IntoIterator<Item = (N, Value)>,
    {
        Self::Record(
            fields
                .into_iter()
                .map(|(name, value)| Field::new(name, value))
                .collect(),
        )
    }

    /// Kind of this value.
    pub fn kind(&self) -> Kind {
        match self {
            Self::Bool(_) => Kind::Bool,
            Self::U8(_) => Kind::U8,
            Self::U16(_) => Kind::U16,
            Self::U32(_) => Kind::U32,
            Self::U64(_) => Kind::U64,
            Self::Usize(_) => Kind::Usize,
            Self::I8(_) => Kind::I8,
            Self::I16(_) => Kind::I16,
            Self::I32(_) => Kind::I32,
            Self::I64(_) => Kind::I64,
            Self::Isize(_) => Kind::Isize,
            Self::F32(_) => Kind::F32,
            Self::F64(_) => Kind::F64,
            Self::Text(_) => Kind::Text,
            Self::Record(_) => Kind::Record,
            Self::Sequence(_) => Kind::Sequence,
            Self::Char(_) => Kind::Char,
            Self::Map(_) => Kind::Map,
            Self::Null => Kind::Null,
        }
    }

    /// Shape that decodes this value back.
    ///
    /// A sequence's element shape is the [`Shape::unify`] of all its
    /// elements, or the first element's shape if they disagree. An empty
    /// sequence gets [`Shape::Any`] elements, which still decode an empty
    /// sequence.
    pub fn shape(&self) -> Shape {
        match self {
            Self::Record(fields) => Shape::Record(
                fields
                    .iter()
                    .map(|f| (f.name.clone(), f.value.shape()))
                    .collect(),
            ),
            Self::Sequence(items) => {
                let element = element_shape(items)
                    .unwrap_or_else(|_| items.first().map_or(Shape::Any, Value::shape));
                Shape::sequence(element)
            }
            other => Shape::scalar(other.kind()),
        }
    }

    fn encode_scalar<W: Write>(&self, encoder: &mut Encoder<W>) -> EncodeResult {
        match self {
            Self::Bool(v) => encoder.write_bool(*v),
            Self::U8(v) => encoder.write_u8(*v),
            Self::U16(v) => encoder.write_u16(*v),
            Self::U32(v) => encoder.write_u32(*v),
            Self::U64(v) => encoder.write_u64(*v),
            Self::Usize(v) => v.encode(encoder),
            Self::I8(v) => encoder.write_i8(*v),
            Self::I16(v) => encoder.write_i16(*v),
            Self::I32(v) => encoder.write_i32(*v),
            Self::I64(v) => encoder.write_i64(*v),
            Self::Isize(v) => v.encode(encoder),
            Self::F32(v) => encoder.write_f32(*v),
            Self::F64(v) => encoder.write_f64(*v),
            Self::Text(v) => encoder.write_text(v),
            other => UnsupportedTypeSnafu { kind: other.kind() }.fail(),
        }
    }
}

/// Single shape that decodes every element of `items`.
///
/// Fails on the first element whose shape does not unify with the elements
/// before it, at any depth.
fn element_shape(items: &[Value]) -> EncodeResult<Shape> {
    let mut shape = Shape::Any;
    for (index, item) in items.iter().enumerate() {
        let found = checked_shape(item)?;
        shape = shape.unify(&found).context(MixedSequenceSnafu {
            index,
            expected: shape.kind(),
            found: found.kind(),
        })?;
    }
    Ok(shape)
}

fn checked_shape(value: &Value) -> EncodeResult<Shape> {
    match value {
        Value::Record(fields) => fields
            .iter()
            .map(|f| checked_shape(&f.value).map(|shape| (f.name.clone(), shape)))
            .collect::<EncodeResult<_>>()
            .map(Shape::Record),
        Value::Sequence(items) => element_shape(items).map(Shape::sequence),
        other => Ok(other.shape()),
    }
}

impl Encode for Value {
    fn encode<W: Write>(&self, encoder: &mut Encoder<W>) -> EncodeResult {
        let kind = self.kind();
        ensure!(kind.is_supported(), UnsupportedTypeSnafu { kind });

        match self {
            Self::Record(fields) => {
                for field in fields {
                    field.value.encode(encoder)?;
                }
                Ok(())
            }
            Self::Sequence(items) => {
                // Nothing is written unless every element shares one shape.
                element_shape(items)?;
                encoder.write_sequence(items)
            }
            scalar => scalar.encode_scalar(encoder),
        }
    }
}

macro_rules! value_from {
    ($($ty:ty => $variant:ident),+ $(,)?) => {
        $(
            impl From<$ty> for Value {
                fn from(value: $ty) -> Self {
                    Self::$variant(value)
                }
            }
        )+
    };
}

value_from! {
    bool => Bool,
    u8 => U8,
    u16 => U16,
    u32 => U32,
    u64 => U64,
    usize => Usize,
    i8 => I8,
    i16 => I16,
    i32 => I32,
    i64 => I64,
    isize => Isize,
    f32 => F32,
    f64 => F64,
    String => Text,
    char => Char,
}

impl From<&str> for Value {
    fn from(value: &str) -> Self {
        Self::Text(value.to_owned())
    }
}

impl<T: Into<Value>> From<Vec<T>> for Value {
    fn from(items: Vec<T>) -> Self {
        Self::Sequence(items.into_iter().map(Into::into).collect())
    }
}
