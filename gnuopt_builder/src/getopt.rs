mod optstring;
mod scanner;

pub use optstring::OptString;
pub use scanner::{Getopt, GetoptError, Opt};
