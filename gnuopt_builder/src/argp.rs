mod core;
mod matcher;
mod option;

pub use self::core::{Argp, ArgpHandler};
pub(crate) use matcher::*;
pub use option::{ArgpEvent, ArgpOption};
