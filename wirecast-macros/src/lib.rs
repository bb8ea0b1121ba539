//! Derive macros for wirecast.

use proc_macro::TokenStream;
mod record;

/// Derive `Encode` for a struct.
///
/// Fields are written in declaration order. `#[wirecast(skip)]` leaves a
/// field off the wire.
#[proc_macro_derive(Encode, attributes(wirecast))]
pub fn derive_encode(input: TokenStream) -> TokenStream {
    record::derive_encode(input)
}

/// Derive `Decode` for a struct.
///
/// Fields are read in declaration order. A `#[wirecast(skip)]` field keeps
/// whatever value the destination already held.
#[proc_macro_derive(Decode, attributes(wirecast))]
pub fn derive_decode(input: TokenStream) -> TokenStream {
    record::derive_decode(input)
}
