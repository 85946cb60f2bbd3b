use std::str::FromStr;

use crate::model::{HasArg, Ordering};
use crate::parser::ConfigError;

/// The option characters recognized by a [`Getopt`](crate::Getopt) scan.
///
/// Parsed from the classic `getopt(3)` grammar:
/// * A leading `+` selects [`Ordering::RequireOrder`], a leading `-` selects [`Ordering::ReturnInOrder`].
/// * A (following) leading `:` selects silent mode; the caller should not report scan errors.
/// * Each option character may be followed by `:` (value required) or `::` (value optional).
///
/// ### Example
/// ```
/// # use gnuopt_builder as gnuopt;
/// use gnuopt::{HasArg, OptString, Ordering};
///
/// let optstring: OptString = "+:ab:c::".parse().unwrap();
/// assert_eq!(optstring.ordering(), Ordering::RequireOrder);
/// assert!(optstring.silent());
/// assert_eq!(optstring.has_arg('a'), Some(HasArg::No));
/// assert_eq!(optstring.has_arg('b'), Some(HasArg::Required));
/// assert_eq!(optstring.has_arg('c'), Some(HasArg::Optional));
/// assert_eq!(optstring.has_arg('d'), None);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OptString {
    ordering: Ordering,
    silent: bool,
    flags: Vec<(char, HasArg)>,
}

impl OptString {
    /// The ordering of non-option tokens for this option string.
    pub fn ordering(&self) -> Ordering {
        self.ordering
    }

    /// Whether scan errors are expected to go unreported.
    pub fn silent(&self) -> bool {
        self.silent
    }

    /// How `flag` takes a value, or `None` if `flag` isn't a recognized option character.
    pub fn has_arg(&self, flag: char) -> Option<HasArg> {
        self.flags
            .iter()
            .find(|(f, _)| *f == flag)
            .map(|(_, has_arg)| *has_arg)
    }

    /// The option characters, in their declared order.
    pub fn flags(&self) -> impl Iterator<Item = (char, HasArg)> + '_ {
        self.flags.iter().copied()
    }
}

impl FromStr for OptString {
    type Err = ConfigError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        let mut chars = value.chars().peekable();
        let ordering = match chars.peek() {
            Some('+') => {
                chars.next();
                Ordering::RequireOrder
            }
            Some('-') => {
                chars.next();
                Ordering::ReturnInOrder
            }
            _ => Ordering::Permute,
        };
        let silent = chars.next_if_eq(&':').is_some();
        let mut flags: Vec<(char, HasArg)> = Vec::default();

        while let Some(flag) = chars.next() {
            if flag == ':' || flag == '-' || flag.is_whitespace() || flag.is_control() {
                return Err(ConfigError(format!(
                    "Invalid option character '{}' in optstring '{value}'.",
                    flag.escape_debug()
                )));
            }

            let has_arg = if chars.next_if_eq(&':').is_some() {
                if chars.next_if_eq(&':').is_some() {
                    HasArg::Optional
                } else {
                    HasArg::Required
                }
            } else {
                HasArg::No
            };

            if flags.iter().any(|(f, _)| *f == flag) {
                return Err(ConfigError(format!(
                    "Cannot duplicate the option '-{flag}' in optstring '{value}'."
                )));
            }

            flags.push((flag, has_arg));
        }

        Ok(Self {
            ordering,
            silent,
            flags,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test::assert_contains;
    use rstest::rstest;

    #[test]
    fn optstring_empty() {
        let optstring = OptString::from_str("").unwrap();
        assert_eq!(optstring.ordering(), Ordering::Permute);
        assert!(!optstring.silent());
        assert_eq!(optstring.flags().count(), 0);
    }

    #[rstest]
    #[case("ab:", vec![('a', HasArg::No), ('b', HasArg::Required)])]
    #[case("at:o:", vec![('a', HasArg::No), ('t', HasArg::Required), ('o', HasArg::Required)])]
    #[case("x::y", vec![('x', HasArg::Optional), ('y', HasArg::No)])]
    #[case("?0", vec![('?', HasArg::No), ('0', HasArg::No)])]
    fn optstring_flags(#[case] value: &str, #[case] expected: Vec<(char, HasArg)>) {
        let optstring = OptString::from_str(value).unwrap();
        assert_eq!(optstring.flags().collect::<Vec<_>>(), expected);
    }

    #[rstest]
    #[case("ab", Ordering::Permute, false)]
    #[case("+ab", Ordering::RequireOrder, false)]
    #[case("-ab", Ordering::ReturnInOrder, false)]
    #[case(":ab", Ordering::Permute, true)]
    #[case("+:ab", Ordering::RequireOrder, true)]
    #[case("-:ab", Ordering::ReturnInOrder, true)]
    fn optstring_prefix(#[case] value: &str, #[case] ordering: Ordering, #[case] silent: bool) {
        let optstring = OptString::from_str(value).unwrap();
        assert_eq!(optstring.ordering(), ordering);
        assert_eq!(optstring.silent(), silent);
        assert_eq!(optstring.has_arg('a'), Some(HasArg::No));
        assert_eq!(optstring.has_arg('b'), Some(HasArg::No));
    }

    #[rstest]
    #[case("a:::")]
    #[case("a-b")]
    #[case("a b")]
    #[case("a\tb")]
    #[case("::a")]
    #[case("aba")]
    #[case("b:b")]
    fn optstring_invalid(#[case] value: &str) {
        let error = OptString::from_str(value).unwrap_err();
        assert_contains!(error.to_string(), "Config error");
        assert_contains!(error.to_string(), value);
    }
}
