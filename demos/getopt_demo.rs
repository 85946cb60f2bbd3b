use gnuopt::{command_arguments, program_name, Getopt, Opt, OptString};
use std::io::{self, Write};

const OPTSTRING: &str = "ab:";

fn run(
    program: &str,
    tokens: &[String],
    out: &mut impl Write,
    err: &mut impl Write,
) -> io::Result<i32> {
    let optstring: OptString = OPTSTRING
        .parse()
        .expect("internal error - optstring must be valid");
    let mut getopt = Getopt::new(&optstring, tokens);
    let reports_errors = getopt.reports_errors();

    for item in getopt.by_ref() {
        match item {
            Ok(Opt::Short('a', _)) => writeln!(out, "Option -a")?,
            Ok(Opt::Short('b', value)) => {
                writeln!(out, "Option -b with value '{}'", value.unwrap_or_default())?
            }
            Ok(other) => unreachable!("internal error - '{OPTSTRING}' cannot yield {other:?}"),
            Err(error) => {
                if reports_errors {
                    writeln!(err, "{program}: {error}")?;
                }

                writeln!(err, "Usage: {program} [-a] [-b value]")?;
                return Ok(1);
            }
        }
    }

    for argument in getopt.remaining() {
        writeln!(out, "Argument: {argument}")?;
    }

    Ok(0)
}

fn main() {
    let program = program_name().unwrap_or_else(|| "getopt-demo".to_string());
    let tokens = command_arguments();

    match run(&program, &tokens, &mut io::stdout(), &mut io::stderr()) {
        Ok(0) => {}
        Ok(exit_code) => std::process::exit(exit_code),
        Err(e) => {
            eprintln!("{program}: {e}");
            std::process::exit(1);
        }
    }
}
