//! `#[repr(..)]` inspection
//!
//! Layout guarantees in Rust come from the representation attribute, so
//! the layout derives start here.

use syn::{Attribute, Data, DeriveInput, Type};

const INT_REPRS: &[&str] = &[
    "u8", "u16", "u32", "u64", "u128", "usize",
    "i8", "i16", "i32", "i64", "i128", "isize",
];

/// The representation hints found on an item.
#[derive(Default, Debug, Clone, Copy, PartialEq, Eq)]
pub struct Repr {
    pub c: bool,
    pub transparent: bool,
    pub int: bool,
}

impl Repr {
    /// Collect every `#[repr(..)]` attribute on an item.
    pub fn from_attrs(attrs: &[Attribute]) -> syn::Result<Self> {
        let mut repr = Repr::default();
        for attr in attrs.iter().filter(|attr| attr.path().is_ident("repr")) {
            attr.parse_nested_meta(|meta| {
                if meta.path.is_ident("C") {
                    repr.c = true;
                } else if meta.path.is_ident("transparent") {
                    repr.transparent = true;
                } else if INT_REPRS.iter().any(|int| meta.path.is_ident(int)) {
                    repr.int = true;
                } else if meta.path.is_ident("Rust") {
                    // Default representation.
                } else if meta.path.is_ident("packed") || meta.path.is_ident("align") {
                    // Alignment modifiers keep the layout defined; skip packed(N) / align(N).
                    if meta.input.peek(syn::token::Paren) {
                        let content;
                        syn::parenthesized!(content in meta.input);
                        content.parse::<proc_macro2::TokenStream>()?;
                    }
                } else {
                    return Err(meta.error("unrecognized repr"));
                }
                Ok(())
            })?;
        }
        Ok(repr)
    }

    /// Whether this representation fixes the layout of `data`.
    pub fn fixes_layout(&self, data: &Data) -> bool {
        match data {
            Data::Struct(_) | Data::Union(_) => self.c || self.transparent,
            Data::Enum(_) => self.c || self.int,
        }
    }
}

/// Every field type of a struct, enum or union, in declaration order.
pub fn field_types(input: &DeriveInput) -> Vec<&Type> {
    match &input.data {
        Data::Struct(data) => data.fields.iter().map(|f| &f.ty).collect(),
        Data::Enum(data) => data
            .variants
            .iter()
            .flat_map(|v| v.fields.iter().map(|f| &f.ty))
            .collect(),
        Data::Union(data) => data.fields.named.iter().map(|f| &f.ty).collect(),
    }
}

/// Whether the item has type, const or lifetime parameters.
pub fn is_generic(input: &DeriveInput) -> bool {
    !input.generics.params.is_empty()
}
