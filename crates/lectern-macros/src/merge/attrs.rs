//! Attribute parsing for the Merge derive macro.
//!
//! Fields accept a single `#[merge(...)]` attribute selecting how the
//! override value is folded into the base value.

use syn::{
    parse::{Parse, ParseStream},
    spanned::Spanned,
    Attribute, Error, Ident, Result,
};

/// How a field is combined with its override.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum MergeStrategy {
    /// Scalar field: `Some` in the override replaces the base.
    #[default]
    Leaf,
    /// Nested section: recurse with `Merge::merge`.
    Nested,
    /// Keyed collection: insert every override entry.
    Extend,
}

impl MergeStrategy {
    fn from_ident(ident: &Ident) -> Result<Self> {
        match ident.to_string().as_str() {
            "leaf" => Ok(MergeStrategy::Leaf),
            "nested" => Ok(MergeStrategy::Nested),
            "extend" => Ok(MergeStrategy::Extend),
            other => Err(Error::new(
                ident.span(),
                format!(
                    "unknown merge strategy: '{}'. Expected one of: leaf, nested, extend",
                    other
                ),
            )),
        }
    }
}

impl Parse for MergeStrategy {
    fn parse(input: ParseStream) -> Result<Self> {
        let ident: Ident = input.parse()?;
        let strategy = Self::from_ident(&ident)?;
        if !input.is_empty() {
            return Err(Error::new(
                input.span(),
                "expected a single merge strategy",
            ));
        }
        Ok(strategy)
    }
}

/// Extract the `#[merge(...)]` strategy from a field's attributes.
pub fn parse_merge_attrs(attrs: &[Attribute]) -> Result<MergeStrategy> {
    let mut found: Option<MergeStrategy> = None;
    for attr in attrs {
        if attr.path().is_ident("merge") {
            if found.is_some() {
                return Err(Error::new(attr.span(), "duplicate #[merge] attribute"));
            }
            found = Some(attr.parse_args::<MergeStrategy>()?);
        }
    }
    Ok(found.unwrap_or_default())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse_strategy(tokens: &str) -> Result<MergeStrategy> {
        syn::parse_str::<MergeStrategy>(tokens)
    }

    #[test]
    fn test_merge_nested() {
        assert_eq!(parse_strategy("nested").unwrap(), MergeStrategy::Nested);
    }

    #[test]
    fn test_merge_extend() {
        assert_eq!(parse_strategy("extend").unwrap(), MergeStrategy::Extend);
    }

    #[test]
    fn test_merge_explicit_leaf() {
        assert_eq!(parse_strategy("leaf").unwrap(), MergeStrategy::Leaf);
    }

    #[test]
    fn test_merge_unknown_strategy() {
        let result = parse_strategy("replace");
        assert!(result.is_err());
        assert!(result
            .unwrap_err()
            .to_string()
            .contains("unknown merge strategy"));
    }

    #[test]
    fn test_merge_rejects_multiple_strategies() {
        assert!(parse_strategy("nested, extend").is_err());
    }

    #[test]
    fn test_missing_attribute_defaults_to_leaf() {
        let field: syn::Field = syn::parse_quote! { pub prefix: Option<String> };
        assert_eq!(
            parse_merge_attrs(&field.attrs).unwrap(),
            MergeStrategy::Leaf
        );
    }

    #[test]
    fn test_attribute_on_field() {
        let field: syn::Field = syn::parse_quote! {
            #[merge(nested)]
            pub colors: Option<ColorPairSection>
        };
        assert_eq!(
            parse_merge_attrs(&field.attrs).unwrap(),
            MergeStrategy::Nested
        );
    }
}
