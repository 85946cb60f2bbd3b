use crate::argp::{ArgpEvent, ArgpHandler, Builtin, Matcher, Matches, OptionMatch};
use crate::constant::*;
use crate::parser::interface::UserInterface;
use crate::parser::printer::Printer;
use crate::parser::{ErrorContext, ParseError};
use crate::program::command_arguments;

#[cfg(feature = "tracing_debug")]
use tracing::debug;

/// The configured argp parser.
/// Built via `Argp::build` or `Argp::build_parser`.
pub struct ArgpParser<'a> {
    program: String,
    matcher: Matcher,
    printer: Printer,
    handler: Option<ArgpHandler<'a>>,
    user_interface: Box<dyn UserInterface>,
}

impl<'a> ArgpParser<'a> {
    pub(crate) fn new(
        program: impl Into<String>,
        matcher: Matcher,
        printer: Printer,
        handler: Option<ArgpHandler<'a>>,
        user_interface: Box<dyn UserInterface>,
    ) -> Self {
        Self {
            program: program.into(),
            matcher,
            printer,
            handler,
            user_interface,
        }
    }
}

fn usage_error(
    program: &str,
    error: ParseError,
    user_interface: &(impl UserInterface + ?Sized),
) -> i32 {
    user_interface.print_error(error);
    user_interface.print_error_context(ErrorContext::new(program));
    USAGE_EXIT_CODE
}

impl<'a> ArgpParser<'a> {
    /// Run the argp parser against the input tokens (excluding the program name).
    ///
    /// Parsing happens in two phases:
    /// 1. Token matching aligns the tokens to options and positional arguments.
    /// Matching stops at the first unmatched token.
    /// 2. The matched options, then the positional arguments, are delivered to the handler as [`ArgpEvent`]s.
    /// A final `ArgpEvent::End` follows when everything was handled.
    ///
    /// If the help (`-?`/`--help`), usage (`--usage`), or version (`-V`/`--version`) option is encountered,
    /// the parser prints the corresponding message and returns with `Err(0)`.
    ///
    /// If the parser encounters an error (ex: an unrecognized option, a missing value, a positional argument without a handler, or a handler error),
    /// it reports the error and returns with `Err(64)`.
    pub fn parse_tokens(self, tokens: &[&str]) -> Result<(), i32> {
        let ArgpParser {
            program,
            matcher,
            printer,
            mut handler,
            user_interface,
        } = self;
        let Matches {
            options,
            arguments,
            error,
        } = matcher.consume(tokens);

        for OptionMatch { config, value } in options {
            let outcome = match config.builtin_kind() {
                Some(Builtin::Help) => {
                    printer.print_help(&*user_interface);
                    return Err(0);
                }
                Some(Builtin::Usage) => {
                    printer.print_usage(&*user_interface);
                    return Err(0);
                }
                Some(Builtin::Version) => {
                    printer.print_version(&*user_interface);
                    return Err(0);
                }
                None => match handler.as_mut() {
                    Some(handler) => handler(ArgpEvent::Option {
                        name: config.name(),
                        value,
                    }),
                    None => Ok(()),
                },
            };

            if let Err(message) = outcome {
                return Err(usage_error(
                    &program,
                    ParseError::new(&program, message),
                    &*user_interface,
                ));
            }
        }

        if let Some(error) = error {
            #[cfg(feature = "tracing_debug")]
            {
                debug!("Matching stopped: {error:?}.");
            }

            return Err(usage_error(
                &program,
                ParseError::from_match(&program, error),
                &*user_interface,
            ));
        }

        for argument in arguments {
            let outcome = match handler.as_mut() {
                Some(handler) => handler(ArgpEvent::Argument(argument)),
                None => Err(TOO_MANY_ARGUMENTS.to_string()),
            };

            if let Err(message) = outcome {
                return Err(usage_error(
                    &program,
                    ParseError::new(&program, message),
                    &*user_interface,
                ));
            }
        }

        if let Some(handler) = handler.as_mut() {
            if let Err(message) = handler(ArgpEvent::End) {
                return Err(usage_error(
                    &program,
                    ParseError::new(&program, message),
                    &*user_interface,
                ));
            }
        }

        Ok(())
    }

    /// Run the argp parser against the Cli arguments.
    /// Arguments that are not valid Unicode are converted lossily.
    ///
    /// Behaves exactly like [`ArgpParser::parse_tokens`], except that instead of returning `Err(code)`
    /// the process exits with `code` (via `std::process::exit`).
    pub fn parse(self) {
        let command_input = command_arguments();
        match self.parse_tokens(
            command_input
                .iter()
                .map(AsRef::as_ref)
                .collect::<Vec<&str>>()
                .as_slice(),
        ) {
            Ok(()) => {}
            Err(exit_code) => {
                std::process::exit(exit_code);
            }
        };
    }
}
