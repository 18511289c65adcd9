use proc_macro::TokenStream;
use quote::quote;
use syn::{parse_macro_input, DeriveInput};

/// Implements `common::serde::SerdeExt` for the annotated message type.
#[proc_macro_derive(SerdeExt)]
pub fn serde_ext_derive(input: TokenStream) -> TokenStream {
    let DeriveInput {
        ident, generics, ..
    } = parse_macro_input!(input);
    let (impl_generics, ty_generics, where_clause) = generics.split_for_impl();
    let output = quote! {
        impl #impl_generics ::common::serde::SerdeExt for #ident #ty_generics #where_clause {}
    };
    output.into()
}
