//! `gnuopt` is GNU style command line parsing for Rust.
//!
//! It provides the three option parsing facilities of the GNU C library, each with a Rust shaped Api:
//! * [`Getopt`]: the POSIX/GNU short option scanner, driven by an option string such as `"ab:"`.
//! * [`getsubopt`]/[`SubOptions`]: the comma separated suboption tokenizer, for values such as `rsize=4096,ro`.
//! * [`Argp`]: the GNU argp parser builder, which synthesizes `--help`, `--usage` and `--version`.
//!
//! Errors are values rather than globals: the scanners yield `Result`s, and only [`Argp::build`] and [`ArgpParser::parse`] exit the process.
//!
//! # Getopt
//! The option string grammar follows `getopt(3)`.
//! A letter is a flag, `x:` requires a value and `x::` accepts an attached value.
//! A leading `+` stops at the first non-option, a leading `-` returns non-options in place,
//! and a leading `:` (after either) asks the caller not to report errors.
//!
//! By default, non-options are permuted to the end and are available via [`Getopt::remaining`]:
//! ```no_run
#![doc = include_str!("../demos/getopt_demo.rs")]
//! ```
//!
//! ```console
//! $ getopt-demo -a x -b foo y
//! Option -a
//! Option -b with value 'foo'
//! Argument: x
//! Argument: y
//!
//! $ getopt-demo -z
//! getopt-demo: invalid option -- 'z'
//! Usage: getopt-demo [-a] [-b value]
//! ```
//!
//! # Getsubopt
//! Suboption names are matched exactly against a fixed table.
//! The table is most easily declared with [`derive::SubOption`](./derive/index.html) on a fieldless enum:
//! ```no_run
#![doc = include_str!("../demos/getsubopt_demo.rs")]
//! ```
//!
//! ```console
//! $ getsubopt-demo -o rsize=4096,ro
//!
//! $ getsubopt-demo -o bogus
//! Unknown suboption `bogus'
//! ```
//!
//! # Argp
//! Configure an [`Argp`] with [`ArgpOption`]s and a handler, which receives every [`ArgpEvent`].
//! Help output follows the GNU layout:
//! ```no_run
#![doc = include_str!("../demos/argp_with_defaults.rs")]
//! ```
//!
//! ```console
//! $ argp-with-defaults --help
//! Usage: argp-with-defaults [OPTION...]
//! Argp example #2 -- a pretty minimal program using argp
//!
//!   -?, --help                 Give this help list
//!       --usage                Give a short usage message
//!   -V, --version              Print program version
//!
//! Report bugs to <bug-gnu-utils@gnu.org>.
//!
//! $ argp-with-defaults extra
//! argp-with-defaults: Too many arguments
//! Try `argp-with-defaults --help' or `argp-with-defaults --usage' for more information.
//! ```
//!
//! Usage errors exit with status `64` (`EX_USAGE`).
//!
//! # Features
//! * `unit_test`: For features that help with unit testing (ex: `Argp::build_quiet_parser`).
//! * `tracing_debug`: emit `tracing` debug events from the parsers (no subscriber is installed).
pub mod derive;
pub use gnuopt_builder::*;
