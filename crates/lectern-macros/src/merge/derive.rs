//! Implementation of the `#[derive(Merge)]` macro.
//!
//! This macro generates an implementation of `lectern_theme::merge::Merge`
//! that destructures the override and folds each field into `self` with the
//! helper selected by the field's `#[merge(...)]` attribute.

use proc_macro2::TokenStream;
use quote::quote;
use syn::{spanned::Spanned, Data, DeriveInput, Error, Fields, Result};

use super::attrs::{parse_merge_attrs, MergeStrategy};

/// Main implementation of the Merge derive macro.
pub fn merge_derive_impl(input: DeriveInput) -> Result<TokenStream> {
    let struct_name = &input.ident;
    let (impl_generics, ty_generics, where_clause) = input.generics.split_for_impl();

    let fields = match &input.data {
        Data::Struct(data) => match &data.fields {
            Fields::Named(named) => &named.named,
            _ => {
                return Err(Error::new(
                    input.span(),
                    "Merge can only be derived for structs with named fields",
                ))
            }
        },
        _ => {
            return Err(Error::new(
                input.span(),
                "Merge can only be derived for structs",
            ))
        }
    };

    let mut bindings: Vec<TokenStream> = Vec::new();
    let mut steps: Vec<TokenStream> = Vec::new();

    for field in fields.iter() {
        let field_name = field
            .ident
            .as_ref()
            .ok_or_else(|| Error::new(field.span(), "expected named field"))?;

        let helper = match parse_merge_attrs(&field.attrs)? {
            MergeStrategy::Leaf => quote! { ::lectern_theme::merge::leaf },
            MergeStrategy::Nested => quote! { ::lectern_theme::merge::nested },
            MergeStrategy::Extend => quote! { ::lectern_theme::merge::extend },
        };

        bindings.push(quote! { #field_name });
        steps.push(quote! {
            #helper(&mut self.#field_name, #field_name);
        });
    }

    let expanded = quote! {
        impl #impl_generics ::lectern_theme::merge::Merge for #struct_name #ty_generics #where_clause {
            fn merge(&mut self, over: Self) {
                let Self { #(#bindings),* } = over;
                #(#steps)*
            }
        }
    };

    Ok(expanded)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_generates_helper_per_field() {
        let input: DeriveInput = syn::parse_quote! {
            struct HeadingSection {
                prefix: Option<String>,
                #[merge(nested)]
                colors: Option<ColorPairSection>,
                #[merge(extend)]
                unknown: BTreeMap<String, Value>,
            }
        };
        let output: String = merge_derive_impl(input)
            .unwrap()
            .to_string()
            .chars()
            .filter(|c| !c.is_whitespace())
            .collect();
        assert!(output.contains("merge::leaf(&mutself.prefix,prefix)"));
        assert!(output.contains("merge::nested(&mutself.colors,colors)"));
        assert!(output.contains("merge::extend(&mutself.unknown,unknown)"));
        assert!(output.contains("letSelf{prefix,colors,unknown}=over;"));
    }

    #[test]
    fn test_rejects_tuple_struct() {
        let input: DeriveInput = syn::parse_quote! {
            struct Pair(Option<String>, Option<String>);
        };
        let err = merge_derive_impl(input).unwrap_err();
        assert!(err.to_string().contains("named fields"));
    }

    #[test]
    fn test_rejects_enum() {
        let input: DeriveInput = syn::parse_quote! {
            enum Alignment { Left, Right }
        };
        assert!(merge_derive_impl(input).is_err());
    }
}
