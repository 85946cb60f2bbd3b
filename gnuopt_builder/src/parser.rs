mod base;
mod interface;
mod middleware;
mod printer;

pub use base::ConfigError;
pub(crate) use base::{ErrorContext, ParseError};
pub(crate) use interface::*;
pub use middleware::ArgpParser;
pub use printer::HelpFormat;
pub(crate) use printer::{OptionParameter, Printer, ProgramInfo};
