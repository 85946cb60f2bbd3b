extern crate proc_macro;

mod generate;
mod load;
mod model;

use crate::model::DeriveSubOption;
use proc_macro::TokenStream;
use proc_macro2::TokenStream as TokenStream2;

pub(crate) const MACRO_SUB_OPTION: &str = "SubOption";
pub(crate) const ATTRIBUTE_SUB_OPT: &str = "subopt";

/// Derive the suboption table of a fieldless enum.
///
/// Each variant's token is its lowercased name, unless overridden via `#[subopt(name = "...")]`.
#[proc_macro_derive(SubOption, attributes(subopt))]
pub fn sub_option(input: TokenStream) -> TokenStream {
    let derive_input = syn::parse_macro_input!(input as syn::DeriveInput);
    DeriveSubOption::try_from(derive_input)
        .and_then(TokenStream2::try_from)
        .unwrap_or_else(syn::Error::into_compile_error)
        .into()
}
