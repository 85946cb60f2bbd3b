use gnuopt::{program_name, Argp};

const VERSION: &str = "argp-ex2 1.0";
const BUG_ADDRESS: &str = "<bug-gnu-utils@gnu.org>";
const DOC: &str = "Argp example #2 -- a pretty minimal program using argp";

// No options or arguments, but GNU standard --help and --version, with documentation and a bug address.
fn main() {
    let program = program_name().unwrap_or_else(|| "argp-with-defaults".to_string());
    Argp::new(program)
        .version(VERSION)
        .bug_address(BUG_ADDRESS)
        .doc(DOC)
        .build()
        .parse();
}
