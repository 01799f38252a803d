//! Procedural macros for the Gosling signal core.
//!
//! - `#[derive(Operation)]`: implements `gosling::Operation`. Enum variants map to
//!   their own names, structs map to the type name.
//! - `#[derive(Payload)]`: implements the `gosling::Payload` marker, preserving
//!   generics and bounds.
//!
//! Usage:
//! ```rust,ignore
//! use gosling::{Operation, Payload};
//!
//! #[derive(Operation)]
//! enum EditorOp { Move, Rotate, Select { all: bool } }
//!
//! #[derive(Clone, Debug, Payload)]
//! struct TileChange { x: i32, y: i32 }
//! ```
use proc_macro::TokenStream;
use quote::quote;
use syn::{Data, DeriveInput, Fields, parse_macro_input};

#[proc_macro_derive(Operation)]
pub fn derive_operation(input: TokenStream) -> TokenStream {
    let input = parse_macro_input!(input as DeriveInput);
    let ident = input.ident.clone();
    let (impl_generics, ty_generics, where_clause) = input.generics.split_for_impl();

    let body = match &input.data {
        Data::Enum(data_enum) => {
            let match_arms = data_enum.variants.iter().map(|variant| {
                let variant_ident = &variant.ident;
                let variant_name = variant_ident.to_string();
                let pattern = match &variant.fields {
                    Fields::Unit => quote! { Self::#variant_ident },
                    Fields::Unnamed(_) => quote! { Self::#variant_ident(..) },
                    Fields::Named(_) => quote! { Self::#variant_ident { .. } },
                };
                quote! {
                    #pattern => ::std::borrow::Cow::Borrowed(#variant_name)
                }
            });
            quote! {
                match self {
                    #(#match_arms),*
                }
            }
        }
        _ => {
            let type_name = ident.to_string();
            quote! { ::std::borrow::Cow::Borrowed(#type_name) }
        }
    };

    let expanded = quote! {
        impl #impl_generics gosling::Operation for #ident #ty_generics #where_clause {
            fn name(&self) -> ::std::borrow::Cow<'_, str> {
                #body
            }
        }
    };
    TokenStream::from(expanded)
}

#[proc_macro_derive(Payload)]
pub fn derive_payload(input: TokenStream) -> TokenStream {
    let input = parse_macro_input!(input as DeriveInput);
    let ident = input.ident;
    let generics = input.generics;

    let (impl_generics, ty_generics, where_clause) = generics.split_for_impl();

    let expanded = quote! {
        impl #impl_generics gosling::Payload for #ident #ty_generics #where_clause {}
    };

    TokenStream::from(expanded)
}
