//! Encode derive macro implementation.

use super::{bounded_generics, struct_fields, wire_members};
use proc_macro::TokenStream;
use proc_macro2::TokenStream as TokenStream2;
use quote::quote;
use syn::{DeriveInput, parse_macro_input};

/// Derive the `Encode` trait for a struct.
pub fn derive_encode(input: TokenStream) -> TokenStream {
    let input = parse_macro_input!(input as DeriveInput);

    match derive_impl(&input) {
        Ok(tokens) => tokens.into(),
        Err(e) => e.to_compile_error().into(),
    }
}

fn derive_impl(input: &DeriveInput) -> syn::Result<TokenStream2> {
    let name = &input.ident;
    let fields = struct_fields(input, "Encode")?;
    let members = wire_members(fields)?;
    let generics = bounded_generics(input, &members, quote!(::wirecast::Encode));
    let (impl_generics, ty_generics, where_clause) = generics.split_for_impl();

    let field_writes = members.iter().map(|(member, _)| {
        quote! {
            ::wirecast::Encode::encode(&self.#member, encoder)?;
        }
    });

    Ok(quote! {
        impl #impl_generics ::wirecast::Encode for #name #ty_generics #where_clause {
            #[allow(unused_variables)]
            fn encode<__W: ::std::io::Write>(
                &self,
                encoder: &mut ::wirecast::Encoder<__W>,
            ) -> ::wirecast::EncodeResult {
                #(#field_writes)*
                Ok(())
            }
        }
    })
}
