use proc_macro2::TokenStream as TokenStream2;
use quote::quote;
use syn::{Data, DeriveInput};

use crate::common::{draw_mode, DrawMode};

/// #[derive(Drawable)] implements `polydraw::Drawable` as a single line.
///
/// The line is chosen by the `#[drawable(...)]` attribute:
/// - absent: the type's identifier
/// - `label = "text"`: the literal text
/// - `display` / `debug`: the value formatted with `{}` / `{:?}`
pub fn expand_derive_drawable(input: DeriveInput) -> syn::Result<TokenStream2> {
    if let Data::Union(data) = &input.data {
        return Err(syn::Error::new(
            data.union_token.span,
            "#[derive(Drawable)] is not supported on unions",
        ));
    }

    let ident = &input.ident;
    let (impl_generics, ty_generics, where_clause) = input.generics.split_for_impl();

    let text = match draw_mode(&input.attrs)? {
        DrawMode::Name => {
            let name = ident.to_string();
            quote! { #name }
        }
        DrawMode::Label(label) => quote! { #label },
        DrawMode::Display => quote! { self },
        DrawMode::Debug => quote! { ::core::format_args!("{:?}", self) },
    };

    Ok(quote! {
        impl #impl_generics ::polydraw::Drawable for #ident #ty_generics #where_clause {
            fn draw(
                &self,
                canvas: &mut ::polydraw::Canvas<'_>,
                position: usize,
            ) -> ::core::result::Result<(), ::polydraw::DrawError> {
                canvas.line(position, #text)
            }
        }
    })
}
