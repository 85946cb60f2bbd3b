//! Builder module for `gnuopt`.
//! See [documentation root](https://docs.rs/gnuopt/latest/gnuopt/index.html) for full details.
#![deny(missing_docs)]
mod argp;
mod constant;
mod getopt;
mod getsubopt;
mod model;
mod parser;
#[allow(missing_docs)]
pub mod prelude;
mod program;

pub use argp::{Argp, ArgpEvent, ArgpHandler, ArgpOption};
pub use getopt::{Getopt, GetoptError, Opt, OptString};
pub use getsubopt::{getsubopt, SubOpt, SubOptions, Suboption};
pub use model::*;
pub use parser::{ArgpParser, ConfigError, HelpFormat};
pub use program::{command_arguments, program_name};

#[cfg(test)]
#[macro_use]
extern crate assert_matches;
