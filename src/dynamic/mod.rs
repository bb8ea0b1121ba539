//! Values whose shape is only known at runtime.
//!
//! [`Value`] is a tree the encoder inspects kind by kind, in the same order
//! the static impls use: scalars first, then records, then sequences. Decoding
//! needs a [`Shape`] because the wire does not say what it holds.
//!
//! ```
//! use wirecast::{ByteOrder, Shape, Value};
//!
//! let value = Value::record([("id", Value::U16(7)), ("name", Value::from("ok"))]);
//! let bytes = wirecast::to_vec(ByteOrder::BigEndian, &value).unwrap();
//! assert_eq!(bytes, [0, 7, 0, 0, 0, 2, b'o', b'k']);
//!
//! let shape = value.shape();
//! let decoded = wirecast::decode_value(&bytes[..], ByteOrder::BigEndian, &shape).unwrap();
//! assert_eq!(decoded, value);
//! ```

mod shape;
mod value;

pub use shape::Shape;
pub use value::{Field, Value};
