use crate::prelude::SubOption;

/// One comma separated token from a suboption string.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SubOpt<'s> {
    /// The position of `name` in the token table, or `None` if it is unknown.
    pub index: Option<usize>,
    /// The text before the first `=`.
    pub name: &'s str,
    /// The text after the first `=`, if there was one.
    pub value: Option<&'s str>,
    /// The whole token, as written.
    pub token: &'s str,
}

/// Consume the next comma separated token from `input`, and match its name against `tokens`.
///
/// Names are matched exactly: `rs` does not match `rsize`.
/// On return, `input` points past the consumed token (and its comma).
///
/// ### Example
/// ```
/// # use gnuopt_builder as gnuopt;
/// use gnuopt::getsubopt;
///
/// let tokens = ["ro", "rw", "rsize", "wsize"];
/// let mut input = "rsize=4096,ro";
///
/// let first = getsubopt(&mut input, &tokens);
/// assert_eq!(first.index, Some(2));
/// assert_eq!(first.value, Some("4096"));
/// assert_eq!(input, "ro");
///
/// let second = getsubopt(&mut input, &tokens);
/// assert_eq!(second.index, Some(0));
/// assert_eq!(second.value, None);
/// assert_eq!(input, "");
/// ```
pub fn getsubopt<'s>(input: &mut &'s str, tokens: &[&str]) -> SubOpt<'s> {
    let current: &'s str = *input;
    let (token, rest) = current.split_once(',').unwrap_or((current, ""));
    *input = rest;

    let (name, value) = match token.split_once('=') {
        Some((name, value)) => (name, Some(value)),
        None => (token, None),
    };

    SubOpt {
        index: tokens.iter().position(|t| *t == name),
        name,
        value,
        token,
    }
}

/// A suboption resolved against a [`SubOption`] table.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Suboption<'s, T> {
    /// A name from the table, with its `=` value (if any).
    Known {
        /// The matched table entry.
        option: T,
        /// The text after the first `=`, if there was one.
        value: Option<&'s str>,
    },
    /// A name missing from the table; carries the whole token.
    Unknown(&'s str),
}

impl<'s, T: SubOption> From<SubOpt<'s>> for Suboption<'s, T> {
    fn from(value: SubOpt<'s>) -> Self {
        match value.index.and_then(T::from_index) {
            Some(option) => Suboption::Known {
                option,
                value: value.value,
            },
            None => Suboption::Unknown(value.token),
        }
    }
}

/// Iterate over every token of a suboption string.
///
/// A trailing comma ends the iteration, while an empty token anywhere else is reported (as unknown, unless the table contains `""`).
#[derive(Debug, Clone)]
pub struct SubOptions<'s, 't> {
    input: &'s str,
    tokens: &'t [&'t str],
}

impl<'s, 't> SubOptions<'s, 't> {
    /// Iterate over `input`, matching names against `tokens`.
    pub fn new(input: &'s str, tokens: &'t [&'t str]) -> Self {
        Self { input, tokens }
    }

    /// The unconsumed remainder of the suboption string.
    pub fn rest(&self) -> &'s str {
        self.input
    }
}

impl<'s> SubOptions<'s, 'static> {
    /// Iterate over `input`, resolving each token against the table of `T`.
    ///
    /// ### Example
    /// ```
    /// # use gnuopt_builder as gnuopt;
    /// use gnuopt::{prelude::*, SubOptions, Suboption};
    ///
    /// #[derive(Debug, PartialEq)]
    /// enum Mode {
    ///     Ro,
    ///     Rw,
    /// }
    ///
    /// impl SubOption for Mode {
    ///     const TOKENS: &'static [&'static str] = &["ro", "rw"];
    ///
    ///     fn from_index(index: usize) -> Option<Self> {
    ///         match index {
    ///             0 => Some(Mode::Ro),
    ///             1 => Some(Mode::Rw),
    ///             _ => None,
    ///         }
    ///     }
    /// }
    ///
    /// let items: Vec<Suboption<Mode>> = SubOptions::typed("rw,bogus").collect();
    /// assert_eq!(
    ///     items,
    ///     vec![
    ///         Suboption::Known { option: Mode::Rw, value: None },
    ///         Suboption::Unknown("bogus"),
    ///     ]
    /// );
    /// ```
    pub fn typed<T: SubOption>(input: &'s str) -> impl Iterator<Item = Suboption<'s, T>> {
        SubOptions::new(input, T::TOKENS).map(Suboption::from)
    }
}

impl<'s, 't> Iterator for SubOptions<'s, 't> {
    type Item = SubOpt<'s>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.input.is_empty() {
            None
        } else {
            Some(getsubopt(&mut self.input, self.tokens))
        }
    }
}

impl<'s, 't> std::iter::FusedIterator for SubOptions<'s, 't> {}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    const MOUNT_TOKENS: [&str; 4] = ["ro", "rw", "rsize", "wsize"];

    #[derive(Debug, Clone, Copy, PartialEq, Eq)]
    enum Mount {
        ReadOnly,
        ReadWrite,
        ReadSize,
        WriteSize,
    }

    impl SubOption for Mount {
        const TOKENS: &'static [&'static str] = &MOUNT_TOKENS;

        fn from_index(index: usize) -> Option<Self> {
            match index {
                0 => Some(Mount::ReadOnly),
                1 => Some(Mount::ReadWrite),
                2 => Some(Mount::ReadSize),
                3 => Some(Mount::WriteSize),
                _ => None,
            }
        }
    }

    #[rstest]
    #[case("ro", Some(0), "ro", None, "")]
    #[case("rw,ro", Some(1), "rw", None, "ro")]
    #[case("rsize=4096,ro", Some(2), "rsize", Some("4096"), "ro")]
    #[case("wsize=", Some(3), "wsize", Some(""), "")]
    #[case("wsize=1=2", Some(3), "wsize", Some("1=2"), "")]
    #[case("rs=1", None, "rs", Some("1"), "")]
    #[case("rsizes", None, "rsizes", None, "")]
    #[case("RO", None, "RO", None, "")]
    #[case(",ro", None, "", None, "ro")]
    #[case("ro,", Some(0), "ro", None, "")]
    fn getsubopt_single(
        #[case] input: &str,
        #[case] index: Option<usize>,
        #[case] name: &str,
        #[case] value: Option<&str>,
        #[case] rest: &str,
    ) {
        // Setup
        let mut remaining = input;

        // Execute
        let subopt = getsubopt(&mut remaining, &MOUNT_TOKENS);

        // Verify
        assert_eq!(subopt.index, index);
        assert_eq!(subopt.name, name);
        assert_eq!(subopt.value, value);
        assert_eq!(remaining, rest);
    }

    #[test]
    fn getsubopt_unknown_token() {
        let mut input = "bogus=1,ro";
        let subopt = getsubopt(&mut input, &MOUNT_TOKENS);
        assert_eq!(subopt.index, None);
        assert_eq!(subopt.token, "bogus=1");
    }

    #[rstest]
    #[case("", vec![])]
    #[case("ro", vec!["ro"])]
    #[case("ro,", vec!["ro"])]
    #[case("ro,,rw", vec!["ro", "", "rw"])]
    #[case("rsize=1,wsize=2,bogus", vec!["rsize=1", "wsize=2", "bogus"])]
    fn suboptions_tokens(#[case] input: &str, #[case] expected: Vec<&str>) {
        let tokens: Vec<&str> = SubOptions::new(input, &MOUNT_TOKENS)
            .map(|subopt| subopt.token)
            .collect();
        assert_eq!(tokens, expected);
    }

    #[test]
    fn suboptions_rest() {
        let mut suboptions = SubOptions::new("ro,rw", &MOUNT_TOKENS);
        suboptions.next().unwrap();
        assert_eq!(suboptions.rest(), "rw");
        suboptions.next().unwrap();
        assert_eq!(suboptions.rest(), "");
        assert_eq!(suboptions.next(), None);
    }

    #[test]
    fn suboptions_typed() {
        let items: Vec<Suboption<Mount>> =
            SubOptions::typed("rsize=4096,ro,bogus,wsize,rw").collect();
        assert_eq!(
            items,
            vec![
                Suboption::Known {
                    option: Mount::ReadSize,
                    value: Some("4096"),
                },
                Suboption::Known {
                    option: Mount::ReadOnly,
                    value: None,
                },
                Suboption::Unknown("bogus"),
                Suboption::Known {
                    option: Mount::WriteSize,
                    value: None,
                },
                Suboption::Known {
                    option: Mount::ReadWrite,
                    value: None,
                },
            ]
        );
    }

    #[test]
    fn suboptions_typed_empty_token() {
        let items: Vec<Suboption<Mount>> = SubOptions::typed("ro,,rw").collect();
        assert_eq!(items[1], Suboption::Unknown(""));
    }
}
