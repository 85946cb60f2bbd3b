use std::collections::HashSet;
use thiserror::Error;

use crate::constant::*;
use crate::model::HasArg;
use crate::parser::ConfigError;

#[cfg(feature = "tracing_debug")]
use tracing::debug;

/// The options every argp parser provides on its own.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Builtin {
    Help,
    Usage,
    Version,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct OptionConfig {
    name: String,
    short: Option<char>,
    has_arg: HasArg,
    builtin: Option<Builtin>,
}

impl OptionConfig {
    pub(crate) fn new(name: impl Into<String>, short: Option<char>, has_arg: HasArg) -> Self {
        Self {
            name: name.into(),
            short,
            has_arg,
            builtin: None,
        }
    }

    fn builtin(name: &str, short: Option<char>, builtin: Builtin) -> Self {
        Self {
            name: name.to_string(),
            short,
            has_arg: HasArg::No,
            builtin: Some(builtin),
        }
    }

    pub(crate) fn name(&self) -> &str {
        &self.name
    }

    pub(crate) fn builtin_kind(&self) -> Option<Builtin> {
        self.builtin
    }
}

#[derive(Debug, Error, PartialEq, Eq)]
pub(crate) enum MatchError {
    #[error("unrecognized option '{0}'")]
    UnrecognizedLong(String),
    #[error("invalid option -- '{0}'")]
    InvalidShort(char),
    #[error("option '{given}' is ambiguous; possibilities:{}", quoted(.candidates))]
    Ambiguous {
        given: String,
        candidates: Vec<String>,
    },
    #[error("option '--{0}' requires an argument")]
    MissingLong(String),
    #[error("option requires an argument -- '{0}'")]
    MissingShort(char),
    #[error("option '--{0}' doesn't allow an argument")]
    UnexpectedValue(String),
}

fn quoted(candidates: &[String]) -> String {
    candidates
        .iter()
        .map(|candidate| format!(" '--{candidate}'"))
        .collect()
}

#[derive(Debug, PartialEq, Eq)]
pub(crate) struct OptionMatch<'m, 't> {
    pub(crate) config: &'m OptionConfig,
    pub(crate) value: Option<&'t str>,
}

/// The outcome of matching tokens against the option table.
/// Matching stops at the first error; everything matched before it is kept.
#[derive(Debug, Default, PartialEq, Eq)]
pub(crate) struct Matches<'m, 't> {
    pub(crate) options: Vec<OptionMatch<'m, 't>>,
    pub(crate) arguments: Vec<&'t str>,
    pub(crate) error: Option<MatchError>,
}

#[derive(Debug)]
pub(crate) struct Matcher {
    options: Vec<OptionConfig>,
}

impl Matcher {
    pub(crate) fn new(user: Vec<OptionConfig>, version: bool) -> Result<Self, ConfigError> {
        let mut options = user;
        options.push(OptionConfig::builtin(
            HELP_NAME,
            Some(HELP_SHORT),
            Builtin::Help,
        ));
        options.push(OptionConfig::builtin(USAGE_NAME, None, Builtin::Usage));

        if version {
            options.push(OptionConfig::builtin(
                VERSION_NAME,
                Some(VERSION_SHORT),
                Builtin::Version,
            ));
        }

        let mut names = HashSet::new();
        let mut shorts = HashSet::new();

        for option in &options {
            if option.name.is_empty() || option.name.starts_with('-') || option.name.contains('=')
            {
                return Err(ConfigError(format!(
                    "Invalid option name '{}'.",
                    option.name
                )));
            }

            if !names.insert(option.name.as_str()) {
                return Err(ConfigError(format!(
                    "Cannot duplicate the option '--{}'.",
                    option.name
                )));
            }

            if let Some(s) = option.short {
                if s == '-' || s.is_whitespace() || s.is_control() {
                    return Err(ConfigError(format!(
                        "Invalid short option '{}' for '--{}'.",
                        s.escape_debug(),
                        option.name
                    )));
                }

                if !shorts.insert(s) {
                    return Err(ConfigError(format!(
                        "Cannot duplicate the short option '-{s}'."
                    )));
                }
            }
        }

        Ok(Self { options })
    }

    fn find_long(&self, token: &str, given: &str) -> Result<&OptionConfig, MatchError> {
        if let Some(exact) = self.options.iter().find(|o| o.name == given) {
            return Ok(exact);
        }

        let candidates: Vec<&OptionConfig> = self
            .options
            .iter()
            .filter(|o| o.name.starts_with(given))
            .collect();

        match candidates.as_slice() {
            [] => Err(MatchError::UnrecognizedLong(token.to_string())),
            [single] => {
                #[cfg(feature = "tracing_debug")]
                {
                    debug!("Abbreviation '{given}' matched '--{}'.", single.name);
                }

                Ok(single)
            }
            _ => Err(MatchError::Ambiguous {
                given: token.to_string(),
                candidates: candidates.iter().map(|c| c.name.clone()).collect(),
            }),
        }
    }

    fn find_short(&self, flag: char) -> Option<&OptionConfig> {
        self.options.iter().find(|o| o.short == Some(flag))
    }

    pub(crate) fn consume<'m, 't>(&'m self, tokens: &[&'t str]) -> Matches<'m, 't> {
        let mut matches = Matches::default();
        let mut index = 0;

        'tokens: while index < tokens.len() {
            let token: &'t str = tokens[index];
            index += 1;

            if token == OPTION_TERMINATOR {
                matches.arguments.extend(&tokens[index..]);
                break;
            }

            if let Some(long) = token.strip_prefix(OPTION_TERMINATOR) {
                let (given, attached) = match long.split_once('=') {
                    Some((given, value)) => (given, Some(value)),
                    None => (long, None),
                };
                let config = match self.find_long(token, given) {
                    Ok(config) => config,
                    Err(error) => {
                        matches.error.replace(error);
                        break;
                    }
                };

                let value = match (config.has_arg, attached) {
                    (HasArg::No, Some(_)) => {
                        matches
                            .error
                            .replace(MatchError::UnexpectedValue(config.name.clone()));
                        break;
                    }
                    (HasArg::Required, None) => match tokens.get(index) {
                        Some(value) => {
                            index += 1;
                            Some(*value)
                        }
                        None => {
                            matches
                                .error
                                .replace(MatchError::MissingLong(config.name.clone()));
                            break;
                        }
                    },
                    (_, attached) => attached,
                };
                matches.options.push(OptionMatch { config, value });
            } else if token.len() > 1 && token.starts_with('-') {
                let group = &token[1..];
                let mut position = 0;

                while position < group.len() {
                    let flag = group[position..]
                        .chars()
                        .next()
                        .expect("internal error - position must point inside the group");
                    let after = position + flag.len_utf8();
                    let rest: &'t str = &group[after..];
                    let config = match self.find_short(flag) {
                        Some(config) => config,
                        None => {
                            matches.error.replace(MatchError::InvalidShort(flag));
                            break 'tokens;
                        }
                    };

                    match config.has_arg {
                        HasArg::No => {
                            matches.options.push(OptionMatch {
                                config,
                                value: None,
                            });
                            position = after;
                        }
                        HasArg::Optional => {
                            let value = if rest.is_empty() { None } else { Some(rest) };
                            matches.options.push(OptionMatch { config, value });
                            break;
                        }
                        HasArg::Required => {
                            let value = if !rest.is_empty() {
                                rest
                            } else if let Some(next) = tokens.get(index) {
                                index += 1;
                                next
                            } else {
                                matches.error.replace(MatchError::MissingShort(flag));
                                break 'tokens;
                            };
                            matches.options.push(OptionMatch {
                                config,
                                value: Some(value),
                            });
                            break;
                        }
                    }
                }
            } else {
                matches.arguments.push(token);
            }
        }

        matches
    }
}
