use thiserror::Error;

use crate::argp::MatchError;

/// An invalid parser configuration (ex: a repeated option name).
#[derive(Debug, Error)]
#[error("Config error: {0}")]
pub struct ConfigError(pub(crate) String);

/// A usage error, reported as `PROGRAM: MESSAGE`.
#[derive(Debug, Error, PartialEq, Eq)]
#[error("{program}: {message}")]
pub(crate) struct ParseError {
    program: String,
    message: String,
}

impl ParseError {
    pub(crate) fn new(program: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            program: program.into(),
            message: message.into(),
        }
    }

    pub(crate) fn from_match(program: impl Into<String>, error: MatchError) -> Self {
        Self::new(program, error.to_string())
    }
}

/// The hint following a usage error.
#[derive(Debug, PartialEq, Eq)]
pub(crate) struct ErrorContext {
    program: String,
}

impl ErrorContext {
    pub(crate) fn new(program: impl Into<String>) -> Self {
        Self {
            program: program.into(),
        }
    }
}

impl std::fmt::Display for ErrorContext {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "Try `{p} --help' or `{p} --usage' for more information.",
            p = self.program
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_error_display() {
        let error = ParseError::new("argp-ex1", "Too many arguments");
        assert_eq!(error.to_string(), "argp-ex1: Too many arguments");
    }

    #[test]
    fn parse_error_from_match() {
        let error = ParseError::from_match("program", MatchError::UnrecognizedLong("--foo".to_string()));
        assert_eq!(error.to_string(), "program: unrecognized option '--foo'");
    }

    #[test]
    fn error_context_display() {
        assert_eq!(
            ErrorContext::new("argp-ex1").to_string(),
            "Try `argp-ex1 --help' or `argp-ex1 --usage' for more information."
        );
    }

    #[test]
    fn config_error_display() {
        assert_eq!(
            ConfigError("Cannot duplicate the option '--x'.".to_string()).to_string(),
            "Config error: Cannot duplicate the option '--x'."
        );
    }
}
