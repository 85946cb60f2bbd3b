use thiserror::Error;

use crate::constant::OPTION_TERMINATOR;
use crate::getopt::OptString;
use crate::model::{HasArg, Ordering};

#[cfg(feature = "tracing_debug")]
use tracing::debug;

/// An item produced by a [`Getopt`] scan.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Opt<'t> {
    /// A recognized option character, with its value (if it took one).
    Short(char, Option<&'t str>),
    /// A non-option token, only produced under [`Ordering::ReturnInOrder`].
    Positional(&'t str),
}

/// A scan error for a single option character.
///
/// The messages match the diagnostics of GNU `getopt`; prefix them with the program name when reporting.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum GetoptError {
    /// The option character isn't in the option string.
    #[error("invalid option -- '{0}'")]
    InvalidOption(char),
    /// The option character requires a value, but the tokens ran out.
    #[error("option requires an argument -- '{0}'")]
    MissingArgument(char),
}

impl GetoptError {
    /// The offending option character.
    pub fn flag(&self) -> char {
        match self {
            GetoptError::InvalidOption(flag) | GetoptError::MissingArgument(flag) => *flag,
        }
    }
}

/// A short option scan over a token slice (the program name excluded).
///
/// Each call to `next` yields one option character.
/// An error only spoils its own option character, so the caller may keep scanning or stop.
///
/// ### Example
/// ```
/// # use gnuopt_builder as gnuopt;
/// use gnuopt::{Getopt, Opt, OptString};
///
/// let optstring: OptString = "ab:".parse().unwrap();
/// let tokens = ["x", "-a", "-bfoo", "y"];
/// let mut getopt = Getopt::new(&optstring, &tokens);
///
/// assert_eq!(getopt.next(), Some(Ok(Opt::Short('a', None))));
/// assert_eq!(getopt.next(), Some(Ok(Opt::Short('b', Some("foo")))));
/// assert_eq!(getopt.next(), None);
/// assert_eq!(getopt.remaining(), vec!["x", "y"]);
/// ```
#[derive(Debug)]
pub struct Getopt<'o, 't, S: AsRef<str>> {
    optstring: &'o OptString,
    tokens: &'t [S],
    optind: usize,
    nextchar: Option<usize>,
    deferred: Vec<&'t str>,
    stopped: bool,
}

impl<'o, 't, S: AsRef<str>> Getopt<'o, 't, S> {
    /// Start a scan of `tokens` against `optstring`.
    pub fn new(optstring: &'o OptString, tokens: &'t [S]) -> Self {
        Self {
            optstring,
            tokens,
            optind: 0,
            nextchar: None,
            deferred: Vec::default(),
            stopped: false,
        }
    }

    /// Whether the caller should report scan errors (false for a `:` prefixed option string).
    pub fn reports_errors(&self) -> bool {
        !self.optstring.silent()
    }

    /// The index of the first remaining argument, as if the deferred non-options had been moved in front of it.
    /// Only meaningful once the scan has finished.
    pub fn optind(&self) -> usize {
        self.optind - self.deferred.len()
    }

    /// The non-option tokens in their original relative order.
    ///
    /// These are the non-options skipped during the scan (see [`Ordering::Permute`]), followed by every token after the scan stopped.
    pub fn remaining(&self) -> Vec<&'t str> {
        let start = match self.nextchar {
            // Part way through a group of flags; the rest of the group belongs to the scan.
            Some(_) => self.optind + 1,
            None => self.optind,
        };
        let mut remaining = self.deferred.clone();
        remaining.extend(
            self.tokens
                .iter()
                .skip(start)
                .map(|token| token.as_ref()),
        );
        remaining
    }

    fn finish_token(&mut self) {
        self.nextchar = None;
        self.optind += 1;
    }

    fn short(&mut self, position: usize) -> Result<Opt<'t>, GetoptError> {
        let tokens = self.tokens;
        let token: &'t str = tokens[self.optind].as_ref();
        let flag = token[position..]
            .chars()
            .next()
            .expect("internal error - nextchar must point inside the token");
        let after = position + flag.len_utf8();
        let rest = &token[after..];

        match self.optstring.has_arg(flag) {
            None => {
                self.step(after, token);
                Err(GetoptError::InvalidOption(flag))
            }
            Some(HasArg::No) => {
                self.step(after, token);
                Ok(Opt::Short(flag, None))
            }
            Some(HasArg::Optional) => {
                self.finish_token();

                if rest.is_empty() {
                    Ok(Opt::Short(flag, None))
                } else {
                    Ok(Opt::Short(flag, Some(rest)))
                }
            }
            Some(HasArg::Required) => {
                self.finish_token();

                if !rest.is_empty() {
                    return Ok(Opt::Short(flag, Some(rest)));
                }

                match tokens.get(self.optind) {
                    Some(value) => {
                        self.optind += 1;
                        Ok(Opt::Short(flag, Some(value.as_ref())))
                    }
                    None => Err(GetoptError::MissingArgument(flag)),
                }
            }
        }
    }

    fn step(&mut self, after: usize, token: &str) {
        if after < token.len() {
            self.nextchar = Some(after);
        } else {
            self.finish_token();
        }
    }
}

impl<'o, 't, S: AsRef<str>> Iterator for Getopt<'o, 't, S> {
    type Item = Result<Opt<'t>, GetoptError>;

    fn next(&mut self) -> Option<Self::Item> {
        if let Some(position) = self.nextchar {
            return Some(self.short(position));
        }

        let tokens = self.tokens;

        while !self.stopped {
            let token: &'t str = match tokens.get(self.optind) {
                Some(token) => token.as_ref(),
                None => {
                    self.stopped = true;
                    break;
                }
            };

            if token == OPTION_TERMINATOR {
                self.optind += 1;
                self.stopped = true;
                break;
            }

            if is_option(token) {
                return Some(self.short(1));
            }

            match self.optstring.ordering() {
                Ordering::Permute => {
                    #[cfg(feature = "tracing_debug")]
                    {
                        debug!("Deferring non-option '{token}'.");
                    }

                    self.deferred.push(token);
                    self.optind += 1;
                }
                Ordering::RequireOrder => {
                    self.stopped = true;
                }
                Ordering::ReturnInOrder => {
                    self.optind += 1;
                    return Some(Ok(Opt::Positional(token)));
                }
            }
        }

        None
    }
}

impl<'o, 't, S: AsRef<str>> std::iter::FusedIterator for Getopt<'o, 't, S> {}

// A lone "-" is a non-option.
fn is_option(token: &str) -> bool {
    token.len() > 1 && token.starts_with('-')
}
