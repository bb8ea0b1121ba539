//! Record derives.

mod decode;
mod encode;

pub use decode::derive_decode;
pub use encode::derive_encode;

use proc_macro2::TokenStream as TokenStream2;
use syn::{Data, DeriveInput, Fields, Member, Type};

/// Members that go on the wire, in declaration order, with their types.
pub fn wire_members(fields: &Fields) -> syn::Result<Vec<(Member, &Type)>> {
    let mut members = Vec::with_capacity(fields.len());
    for (i, field) in fields.iter().enumerate() {
        if is_skipped(field)? {
            continue;
        }
        let member = match &field.ident {
            Some(ident) => Member::Named(ident.clone()),
            None => Member::Unnamed(syn::Index::from(i)),
        };
        members.push((member, &field.ty));
    }
    Ok(members)
}

/// Fields of a struct. Enums and unions have no untagged wire form.
pub fn struct_fields<'a>(input: &'a DeriveInput, derive: &str) -> syn::Result<&'a Fields> {
    match &input.data {
        Data::Struct(data) => Ok(&data.fields),
        Data::Enum(_) => Err(syn::Error::new_spanned(
            input,
            format!("{derive} derive is not supported for enums: the wire format has no tags."),
        )),
        Data::Union(_) => Err(syn::Error::new_spanned(
            input,
            format!("{derive} derive is not supported for unions."),
        )),
    }
}

/// Generics with `bound` required of every wire member's type.
///
/// Bounding field types rather than type parameters lets a `Vec<T>` field
/// carry the extra `T: Default` its `Decode` impl needs.
pub fn bounded_generics(
    input: &DeriveInput,
    members: &[(Member, &Type)],
    bound: TokenStream2,
) -> syn::Generics {
    let mut generics = input.generics.clone();
    if generics.type_params().next().is_none() {
        return generics;
    }
    let where_clause = generics.make_where_clause();
    for (_, ty) in members {
        where_clause.predicates.push(syn::parse_quote!(#ty: #bound));
    }
    generics
}

/// Parse `#[wirecast(...)]` on a field. `skip` is the only key.
fn is_skipped(field: &syn::Field) -> syn::Result<bool> {
    let mut skip = false;
    for attr in field.attrs.iter().filter(|a| a.path().is_ident("wirecast")) {
        attr.parse_nested_meta(|meta| {
            if meta.path.is_ident("skip") {
                skip = true;
                Ok(())
            } else {
                Err(meta.error("unknown wirecast attribute, expected `skip`"))
            }
        })?;
    }
    Ok(skip)
}
