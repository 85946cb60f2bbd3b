use gnuopt::{program_name, Argp};

// The smallest possible program that uses argp.
// It gives an error and exits when there are any arguments, and prints a (rather pointless) message for --help.
fn main() {
    let program = program_name().unwrap_or_else(|| "minimal-argp".to_string());
    Argp::new(program).build().parse();
}
