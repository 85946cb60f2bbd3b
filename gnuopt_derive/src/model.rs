use proc_macro2::TokenStream as TokenStream2;
use std::collections::{HashMap, HashSet};

#[derive(Debug)]
pub(crate) struct DeriveValue {
    pub(crate) tokens: TokenStream2,
}

impl PartialEq for DeriveValue {
    fn eq(&self, other: &Self) -> bool {
        self.tokens.to_string() == other.tokens.to_string()
    }
}

impl Eq for DeriveValue {}

#[derive(Debug, Default, PartialEq, Eq)]
pub(crate) struct IntermediateAttributes {
    pub(crate) singletons: HashSet<String>,
    pub(crate) pairs: HashMap<String, Vec<DeriveValue>>,
}

#[derive(Debug, PartialEq, Eq)]
pub(crate) struct DeriveVariant {
    pub(crate) variant_name: syn::Ident,
    pub(crate) token: String,
}

#[derive(Debug, PartialEq, Eq)]
pub(crate) struct DeriveSubOption {
    pub(crate) enum_name: syn::Ident,
    pub(crate) variants: Vec<DeriveVariant>,
}
