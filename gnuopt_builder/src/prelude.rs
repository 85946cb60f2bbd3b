//! Traits which, typically, may be imported without concern: `use gnuopt::prelude::*`.

/// Behaviour for a fixed table of suboption names, each identifying a variant of `Self`.
// Needs to be imported in order to `#[derive(SubOption)]`.
pub trait SubOption: Sized {
    /// The suboption names; a name's index is its discriminator.
    const TOKENS: &'static [&'static str];

    /// The variant for the name at `index` of [`SubOption::TOKENS`].
    fn from_index(index: usize) -> Option<Self>;
}
