use crate::model::HasArg;
use crate::parser::OptionParameter;

/// A user option for an [`Argp`](crate::Argp) parser.
///
/// Every option has a long name (`--NAME`); the short name (`-N`) is optional.
///
/// ### Example
/// ```
/// # use gnuopt_builder as gnuopt;
/// use gnuopt::ArgpOption;
///
/// let verbose = ArgpOption::new("verbose")
///     .short('v')
///     .doc("Produce verbose output");
/// let output = ArgpOption::new("output")
///     .short('o')
///     .arg("FILE")
///     .doc("Output to FILE instead of standard output");
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ArgpOption {
    name: String,
    short: Option<char>,
    arg: Option<String>,
    has_arg: HasArg,
    doc: Option<String>,
}

impl ArgpOption {
    /// Create a flag option `--name`.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            short: None,
            arg: None,
            has_arg: HasArg::No,
            doc: None,
        }
    }

    /// Set the short name `-c`.
    pub fn short(mut self, short: char) -> Self {
        self.short.replace(short);
        self
    }

    /// Require a value, documented as `arg` (ex: `--output=FILE`).
    pub fn arg(mut self, arg: impl Into<String>) -> Self {
        self.arg.replace(arg.into());
        self.has_arg = HasArg::Required;
        self
    }

    /// Accept an optional, attached value, documented as `arg` (ex: `--color[=WHEN]`).
    pub fn optional_arg(mut self, arg: impl Into<String>) -> Self {
        self.arg.replace(arg.into());
        self.has_arg = HasArg::Optional;
        self
    }

    /// Document the option in the `--help` output.
    /// If repeated, only the final documentation will apply.
    pub fn doc(mut self, doc: impl Into<String>) -> Self {
        self.doc.replace(doc.into());
        self
    }

    pub(crate) fn name(&self) -> &str {
        &self.name
    }

    pub(crate) fn short_name(&self) -> Option<char> {
        self.short
    }

    pub(crate) fn has_arg(&self) -> HasArg {
        self.has_arg
    }
}

impl From<&ArgpOption> for OptionParameter {
    fn from(value: &ArgpOption) -> Self {
        OptionParameter::new(
            value.name.clone(),
            value.short,
            value.arg.clone(),
            value.has_arg,
            value.doc.clone(),
        )
    }
}

/// An event delivered to the handler of an [`Argp`](crate::Argp) parser.
///
/// Options arrive first, in the order they appear.
/// Positional arguments follow, in the order they appear.
/// Finally, `End` marks a successful parse.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ArgpEvent<'t> {
    /// A user option, by its long name, with its value (if it took one).
    Option {
        /// The long name, even when the short name was used.
        name: &'t str,
        /// The value (ex: `FILE` from `--output=FILE`).
        value: Option<&'t str>,
    },
    /// A positional argument.
    Argument(&'t str),
    /// Every token was handled.
    End,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn option_flag() {
        let option = ArgpOption::new("verbose").short('v');
        assert_eq!(option.name(), "verbose");
        assert_eq!(option.short_name(), Some('v'));
        assert_eq!(option.has_arg(), HasArg::No);
    }

    #[test]
    fn option_arg() {
        let option = ArgpOption::new("output").arg("FILE");
        assert_eq!(option.short_name(), None);
        assert_eq!(option.has_arg(), HasArg::Required);
    }

    #[test]
    fn option_optional_arg() {
        let option = ArgpOption::new("color").arg("WHEN").optional_arg("WHEN");
        assert_eq!(option.has_arg(), HasArg::Optional);
    }

    #[test]
    fn option_parameter() {
        let option = ArgpOption::new("output")
            .short('o')
            .arg("FILE")
            .doc("--this will get discarded--")
            .doc("Output to FILE");
        assert_eq!(
            OptionParameter::from(&option),
            OptionParameter::new(
                "output",
                Some('o'),
                Some("FILE".to_string()),
                HasArg::Required,
                Some("Output to FILE".to_string()),
            )
        );
    }
}
