use std::collections::HashSet;

use crate::model::{DeriveSubOption, DeriveValue, DeriveVariant, IntermediateAttributes};
use crate::{ATTRIBUTE_SUB_OPT, MACRO_SUB_OPTION};

impl TryFrom<syn::DeriveInput> for DeriveSubOption {
    type Error = syn::Error;

    fn try_from(value: syn::DeriveInput) -> Result<Self, Self::Error> {
        let enum_name = &value.ident;

        match &value.data {
            syn::Data::Enum(de) => {
                let variants = de
                    .variants
                    .iter()
                    .map(DeriveVariant::try_from)
                    .collect::<Result<Vec<_>, _>>()?;
                let mut tokens = HashSet::new();

                for (variant, source) in variants.iter().zip(de.variants.iter()) {
                    if !tokens.insert(variant.token.as_str()) {
                        return Err(syn::Error::new(
                            source.ident.span(),
                            format!(
                                "Invalid - {MACRO_SUB_OPTION} token `{}` is repeated.",
                                variant.token
                            ),
                        ));
                    }
                }

                Ok(DeriveSubOption {
                    enum_name: enum_name.clone(),
                    variants,
                })
            }
            _ => Err(syn::Error::new(
                enum_name.span(),
                format!("Invalid - {MACRO_SUB_OPTION} only applies to 'enum' data structures."),
            )),
        }
    }
}

impl TryFrom<&syn::Variant> for DeriveVariant {
    type Error = syn::Error;

    fn try_from(value: &syn::Variant) -> Result<Self, Self::Error> {
        let variant_name = value.ident.clone();

        if !matches!(value.fields, syn::Fields::Unit) {
            return Err(syn::Error::new(
                variant_name.span(),
                format!("Invalid - {MACRO_SUB_OPTION} variants cannot carry fields."),
            ));
        }

        let mut attributes = IntermediateAttributes::default();

        for attribute in &value.attrs {
            if attribute.path().is_ident(ATTRIBUTE_SUB_OPT) {
                attributes = IntermediateAttributes::try_from(attribute)?;
            }
        }

        if let Some(singleton) = attributes.singletons.iter().next() {
            return Err(syn::Error::new(
                variant_name.span(),
                format!("Invalid - unknown {ATTRIBUTE_SUB_OPT} attribute `{singleton}`."),
            ));
        }

        if let Some(key) = attributes.pairs.keys().find(|key| *key != "name") {
            return Err(syn::Error::new(
                variant_name.span(),
                format!("Invalid - unknown {ATTRIBUTE_SUB_OPT} attribute `{key}`."),
            ));
        }

        let token = match attributes.pairs.get("name").and_then(|values| values.last()) {
            Some(DeriveValue { tokens }) => {
                let literal: syn::LitStr = syn::parse2(tokens.clone()).map_err(|_| {
                    syn::Error::new(
                        variant_name.span(),
                        "Invalid - `name` must be a string literal.",
                    )
                })?;
                literal.value()
            }
            None => variant_name.to_string().to_lowercase(),
        };

        Ok(DeriveVariant {
            variant_name,
            token,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proc_macro2::Span;
    use rstest::rstest;

    #[test]
    fn construct_derive_sub_option_empty() {
        // Setup
        let input: syn::DeriveInput = syn::parse_str(
            r#"
                #[derive(SubOption)]
                enum Mount { }
            "#,
        )
        .unwrap();

        // Execute
        let derive_sub_option = DeriveSubOption::try_from(input).unwrap();

        // Verify
        assert_eq!(
            derive_sub_option,
            DeriveSubOption {
                enum_name: ident("Mount"),
                variants: Vec::default(),
            }
        );
    }

    #[test]
    fn construct_derive_sub_option() {
        // Setup
        let input: syn::DeriveInput = syn::parse_str(
            r#"
                #[derive(SubOption)]
                enum Mount {
                    Ro,
                    #[subopt(name = "rw")]
                    ReadWrite,
                    #[subopt()]
                    RSize,
                }
            "#,
        )
        .unwrap();

        // Execute
        let derive_sub_option = DeriveSubOption::try_from(input).unwrap();

        // Verify
        assert_eq!(
            derive_sub_option,
            DeriveSubOption {
                enum_name: ident("Mount"),
                variants: vec![
                    DeriveVariant {
                        variant_name: ident("Ro"),
                        token: "ro".to_string(),
                    },
                    DeriveVariant {
                        variant_name: ident("ReadWrite"),
                        token: "rw".to_string(),
                    },
                    DeriveVariant {
                        variant_name: ident("RSize"),
                        token: "rsize".to_string(),
                    },
                ],
            }
        );
    }

    #[rstest]
    #[case(
        "struct Mount { }",
        "Invalid - SubOption only applies to 'enum' data structures."
    )]
    #[case(
        "enum Mount { Size(u32) }",
        "Invalid - SubOption variants cannot carry fields."
    )]
    #[case(
        "enum Mount { Size { bytes: u32 } }",
        "Invalid - SubOption variants cannot carry fields."
    )]
    #[case(
        r#"enum Mount { Ro, #[subopt(name = "ro")] ReadOnly }"#,
        "Invalid - SubOption token `ro` is repeated."
    )]
    #[case(
        r#"enum Mount { #[subopt(hidden)] Ro }"#,
        "Invalid - unknown subopt attribute `hidden`."
    )]
    #[case(
        r#"enum Mount { #[subopt(help = "x")] Ro }"#,
        "Invalid - unknown subopt attribute `help`."
    )]
    #[case(
        r#"enum Mount { #[subopt(name = ro)] Ro }"#,
        "Invalid - `name` must be a string literal."
    )]
    fn construct_derive_sub_option_invalid(#[case] source: &str, #[case] expected: &str) {
        // Setup
        let input: syn::DeriveInput = syn::parse_str(source).unwrap();

        // Execute
        let error = DeriveSubOption::try_from(input).unwrap_err();

        // Verify
        assert_eq!(error.to_string(), expected);
    }

    fn ident(name: &str) -> syn::Ident {
        syn::Ident::new(name, Span::call_site())
    }
}
