//! Decode derive macro implementation.

use super::{bounded_generics, struct_fields, wire_members};
use proc_macro::TokenStream;
use proc_macro2::TokenStream as TokenStream2;
use quote::quote;
use syn::{DeriveInput, parse_macro_input};

/// Derive the `Decode` trait for a struct.
pub fn derive_decode(input: TokenStream) -> TokenStream {
    let input = parse_macro_input!(input as DeriveInput);

    match derive_impl(&input) {
        Ok(tokens) => tokens.into(),
        Err(e) => e.to_compile_error().into(),
    }
}

fn derive_impl(input: &DeriveInput) -> syn::Result<TokenStream2> {
    let name = &input.ident;
    let fields = struct_fields(input, "Decode")?;
    let members = wire_members(fields)?;
    let generics = bounded_generics(input, &members, quote!(::wirecast::Decode));
    let (impl_generics, ty_generics, where_clause) = generics.split_for_impl();

    // Fields are filled in place, so a failure leaves earlier fields decoded.
    let field_reads = members.iter().map(|(member, _)| {
        quote! {
            ::wirecast::Decode::decode_into(&mut self.#member, decoder)?;
        }
    });

    Ok(quote! {
        impl #impl_generics ::wirecast::Decode for #name #ty_generics #where_clause {
            #[allow(unused_variables)]
            fn decode_into<__R: ::std::io::Read>(
                &mut self,
                decoder: &mut ::wirecast::Decoder<__R>,
            ) -> ::wirecast::DecodeResult {
                #(#field_reads)*
                Ok(())
            }
        }
    })
}
