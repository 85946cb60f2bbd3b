use crate::argp::{ArgpEvent, ArgpOption, Matcher, OptionConfig};
use crate::constant::CONFIG_EXIT_CODE;
#[cfg(feature = "unit_test")]
use crate::parser::QuietInterface;
use crate::parser::{
    ArgpParser, ConfigError, ConsoleInterface, HelpFormat, OptionParameter, Printer, ProgramInfo,
    UserInterface,
};

/// The callback receiving every [`ArgpEvent`] of a parse.
/// An `Err(message)` is reported as a usage error (`PROGRAM: message`).
pub type ArgpHandler<'a> = Box<dyn FnMut(ArgpEvent<'_>) -> Result<(), String> + 'a>;

/// The GNU argp style parser builder.
///
/// Every parser provides `-?, --help` and `--usage`, and `-V, --version` once a version is set.
///
/// ### Example
/// ```
/// # use gnuopt_builder as gnuopt;
/// use gnuopt::Argp;
///
/// let parser = Argp::new("program")
///     // Configure with Argp::option and Argp::handler.
///     .build();
/// parser.parse_tokens(empty::slice()).unwrap();
/// ```
pub struct Argp<'a> {
    program: String,
    version: Option<String>,
    bug_address: Option<String>,
    doc: Option<String>,
    args_doc: Option<String>,
    options: Vec<ArgpOption>,
    handler: Option<ArgpHandler<'a>>,
    format: HelpFormat,
}

impl<'a> Argp<'a> {
    /// Create an argp parser for `program`.
    /// The program name prefixes error messages and the `Usage:` lines.
    ///
    /// ### Example
    /// ```
    /// # use gnuopt_builder as gnuopt;
    /// use gnuopt::Argp;
    ///
    /// let parser = Argp::new("program")
    ///     .build();
    ///
    /// assert_eq!(parser.parse_tokens(vec!["extra"].as_slice()), Err(64));
    /// ```
    pub fn new(program: impl Into<String>) -> Self {
        Self {
            program: program.into(),
            version: None,
            bug_address: None,
            doc: None,
            args_doc: None,
            options: Vec::default(),
            handler: None,
            format: HelpFormat::default(),
        }
    }

    /// Set the version line, enabling `-V, --version`.
    /// If repeated, only the final version will apply.
    ///
    /// ### Example
    /// ```
    /// # use gnuopt_builder as gnuopt;
    /// use gnuopt::Argp;
    ///
    /// let parser = Argp::new("program")
    ///     .version("program 1.0")
    ///     .build();
    ///
    /// assert_eq!(parser.parse_tokens(vec!["--version"].as_slice()), Err(0));
    /// ```
    pub fn version(mut self, version: impl Into<String>) -> Self {
        self.version.replace(version.into());
        self
    }

    /// Set the address printed as `Report bugs to ADDRESS.` at the end of `--help`.
    pub fn bug_address(mut self, bug_address: impl Into<String>) -> Self {
        self.bug_address.replace(bug_address.into());
        self
    }

    /// Document the program in the `--help` output.
    ///
    /// Text before a vertical tab (`'\v'`) is printed above the option list, text after it below.
    pub fn doc(mut self, doc: impl Into<String>) -> Self {
        self.doc.replace(doc.into());
        self
    }

    /// Document the positional arguments in the `Usage:` lines (ex: `"ARG1 ARG2"`).
    /// Separate alternative synopses by `'\n'`.
    pub fn args_doc(mut self, args_doc: impl Into<String>) -> Self {
        self.args_doc.replace(args_doc.into());
        self
    }

    /// Add a user option.
    /// The order options are added in does not affect the parser semantics.
    pub fn option(mut self, option: ArgpOption) -> Self {
        self.options.push(option);
        self
    }

    /// Receive the parse events.
    /// If repeated, only the final handler will apply.
    ///
    /// Without a handler, user options are accepted and ignored, and any positional argument is an error.
    ///
    /// ### Example
    /// ```
    /// # use gnuopt_builder as gnuopt;
    /// use gnuopt::{Argp, ArgpEvent, ArgpOption};
    ///
    /// let mut verbose = false;
    /// let mut files: Vec<String> = Vec::default();
    /// let parser = Argp::new("program")
    ///     .option(ArgpOption::new("verbose").short('v').doc("Produce verbose output"))
    ///     .args_doc("FILE...")
    ///     .handler(|event| {
    ///         match event {
    ///             ArgpEvent::Option { name: "verbose", .. } => verbose = true,
    ///             ArgpEvent::Argument(file) => files.push(file.to_string()),
    ///             _ => {}
    ///         };
    ///         Ok(())
    ///     })
    ///     .build();
    ///
    /// parser.parse_tokens(vec!["a", "-v", "b"].as_slice()).unwrap();
    ///
    /// assert!(verbose);
    /// assert_eq!(files, vec!["a", "b"]);
    /// ```
    pub fn handler(
        mut self,
        handler: impl FnMut(ArgpEvent<'_>) -> Result<(), String> + 'a,
    ) -> Self {
        self.handler.replace(Box::new(handler));
        self
    }

    /// Set the `--help` layout.
    pub fn format(mut self, format: HelpFormat) -> Self {
        self.format = format;
        self
    }

    fn build_with_interface(
        self,
        user_interface: Box<dyn UserInterface>,
    ) -> Result<ArgpParser<'a>, ConfigError> {
        let Argp {
            program,
            version,
            bug_address,
            doc,
            args_doc,
            options,
            handler,
            format,
        } = self;
        let matcher = Matcher::new(
            options
                .iter()
                .map(|o| OptionConfig::new(o.name(), o.short_name(), o.has_arg()))
                .collect(),
            version.is_some(),
        )?;
        let printer = Printer::terminal(
            ProgramInfo {
                program: program.clone(),
                version,
                bug_address,
                doc,
                args_doc,
            },
            options.iter().map(OptionParameter::from).collect(),
            format,
        );

        Ok(ArgpParser::new(
            program,
            matcher,
            printer,
            handler,
            user_interface,
        ))
    }

    /// Build the argp parser as a Result.
    /// This finalizes the configuration and checks for errors (ex: a repeated option name).
    pub fn build_parser(self) -> Result<ArgpParser<'a>, ConfigError> {
        self.build_with_interface(Box::new(ConsoleInterface::default()))
    }

    /// *Available using 'unit_test' crate feature only.*</br></br>
    /// Build the argp parser as a Result, discarding all of its output (help, usage, version, and errors).
    /// Useful for testing how a handler is wired up.
    ///
    /// ### Example
    /// ```
    /// # use gnuopt_builder as gnuopt;
    /// use gnuopt::{Argp, ArgpEvent, ArgpOption};
    ///
    /// // Function under test.
    /// pub fn setup_fn<'a>(count: &'a mut u32) -> impl FnOnce(Argp<'a>) -> Argp<'a> {
    ///     move |argp| {
    ///         argp.option(ArgpOption::new("count").short('c'))
    ///             .handler(move |event| {
    ///                 if let ArgpEvent::Option { name: "count", .. } = event {
    ///                     *count += 1;
    ///                 }
    ///                 Ok(())
    ///             })
    ///     }
    /// }
    ///
    /// let mut count: u32 = 0;
    /// let parser = setup_fn(&mut count)(Argp::new("test-dummy")).build_quiet_parser().unwrap();
    /// assert_eq!(parser.parse_tokens(vec!["-cc", "--bogus"].as_slice()), Err(64));
    /// assert_eq!(count, 2);
    /// ```
    #[cfg(feature = "unit_test")]
    pub fn build_quiet_parser(self) -> Result<ArgpParser<'a>, ConfigError> {
        self.build_with_interface(Box::new(QuietInterface::default()))
    }

    /// Build the argp parser.
    /// This finalizes the configuration and checks for errors (ex: a repeated option name).
    /// If an error is encountered, exits with error code `1` (via [`std::process::exit`]).
    pub fn build(self) -> ArgpParser<'a> {
        match self.build_parser() {
            Ok(parser) => parser,
            Err(e) => {
                eprintln!("{e}");
                std::process::exit(CONFIG_EXIT_CODE);
            }
        }
    }
}
