use proc_macro2::{Literal, TokenStream as TokenStream2};
use quote::quote;

use crate::model::DeriveSubOption;

impl TryFrom<DeriveSubOption> for TokenStream2 {
    type Error = syn::Error;

    fn try_from(value: DeriveSubOption) -> Result<Self, Self::Error> {
        let DeriveSubOption {
            enum_name,
            variants,
        } = value;
        let tokens = variants.iter().map(|v| &v.token);
        let indices = (0..variants.len()).map(Literal::usize_unsuffixed);
        let variant_names = variants.iter().map(|v| &v.variant_name);

        Ok(quote! {
            impl SubOption for #enum_name {
                const TOKENS: &'static [&'static str] = &[ #( #tokens ),* ];

                fn from_index(index: usize) -> Option<Self> {
                    match index {
                        #( #indices => Some(#enum_name::#variant_names), )*
                        _ => None,
                    }
                }
            }
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::DeriveVariant;
    use proc_macro2::Span;

    #[test]
    fn render_derive_sub_option_empty() {
        // Setup
        let sub_option = DeriveSubOption {
            enum_name: ident("Mount"),
            variants: Vec::default(),
        };

        // Execute
        let token_stream = TokenStream2::try_from(sub_option).unwrap();

        // Verify
        assert_eq!(
            compact(token_stream.to_string()),
            "implSubOptionforMount{constTOKENS:&'static[&'staticstr]=&[];fnfrom_index(index:usize)->Option<Self>{matchindex{_=>None,}}}",
        );
    }

    #[test]
    fn render_derive_sub_option() {
        // Setup
        let sub_option = DeriveSubOption {
            enum_name: ident("Mount"),
            variants: vec![
                DeriveVariant {
                    variant_name: ident("Ro"),
                    token: "ro".to_string(),
                },
                DeriveVariant {
                    variant_name: ident("ReadSize"),
                    token: "rsize".to_string(),
                },
            ],
        };

        // Execute
        let token_stream = TokenStream2::try_from(sub_option).unwrap();

        // Verify
        assert_eq!(
            compact(token_stream.to_string()),
            r#"implSubOptionforMount{constTOKENS:&'static[&'staticstr]=&["ro","rsize"];fnfrom_index(index:usize)->Option<Self>{matchindex{0=>Some(Mount::Ro),1=>Some(Mount::ReadSize),_=>None,}}}"#,
        );
    }

    fn ident(name: &str) -> syn::Ident {
        syn::Ident::new(name, Span::call_site())
    }

    fn compact(rust_str: String) -> String {
        rust_str.split_whitespace().collect()
    }
}
