//! `#[drawable(...)]` option parsing.

use syn::{
    parse::{Parse, ParseStream},
    punctuated::Punctuated,
    spanned::Spanned,
    Attribute, Ident, LitStr, Token,
};

use super::peek_any_keyword;

pub const KEYWORDS: &[&str] = &["label", "display", "debug"];

/// How a derived `Drawable` renders its value.
pub enum DrawMode {
    /// The type's identifier.
    Name,
    /// A fixed line of text.
    Label(LitStr),
    /// The `Display` form.
    Display,
    /// The `Debug` form.
    Debug,
}

/// One option inside `#[drawable(...)]`.
pub struct DrawOption {
    pub keyword: Ident,
    pub mode: DrawMode,
}

impl Parse for DrawOption {
    fn parse(input: ParseStream) -> syn::Result<Self> {
        if !peek_any_keyword(input, KEYWORDS) {
            return Err(input.error("expected one of `label = \"...\"`, `display`, `debug`"));
        }
        let keyword: Ident = input.parse()?;
        let mode = if keyword == "label" {
            input.parse::<Token![=]>()?;
            DrawMode::Label(input.parse()?)
        } else if keyword == "display" {
            DrawMode::Display
        } else {
            DrawMode::Debug
        };
        Ok(DrawOption { keyword, mode })
    }
}

/// Collect the draw mode from every `#[drawable]` attribute on an item.
///
/// At most one option may be given in total.
pub fn draw_mode(attrs: &[Attribute]) -> syn::Result<DrawMode> {
    let mut chosen: Option<DrawOption> = None;

    for attr in attrs.iter().filter(|attr| attr.path().is_ident("drawable")) {
        let options = attr.parse_args_with(Punctuated::<DrawOption, Token![,]>::parse_terminated)?;
        if options.is_empty() {
            return Err(syn::Error::new(attr.span(), "empty `#[drawable()]` attribute"));
        }
        for option in options {
            if let Some(first) = &chosen {
                let mut err = syn::Error::new(
                    option.keyword.span(),
                    format!("`{}` conflicts with `{}`", option.keyword, first.keyword),
                );
                err.combine(syn::Error::new(first.keyword.span(), "first option given here"));
                return Err(err);
            }
            chosen = Some(option);
        }
    }

    Ok(chosen.map_or(DrawMode::Name, |option| option.mode))
}
