use gnuopt::{
    command_arguments, derive::*, prelude::*, program_name, Getopt, Opt, OptString, SubOptions,
    Suboption,
};
use std::io::{self, Write};

const OPTSTRING: &str = "at:o:";

#[derive(Debug, Clone, Copy, PartialEq, Eq, SubOption)]
enum MountOption {
    Ro,
    Rw,
    Rsize,
    Wsize,
}

#[derive(Debug, Default, PartialEq, Eq)]
struct MountOptions {
    do_all: bool,
    fs_type: Option<String>,
    read_size: i32,
    write_size: i32,
    read_only: bool,
}

// C `atoi`: leading whitespace, an optional sign, then as many digits as present.
fn atoi(text: &str) -> i32 {
    let trimmed = text.trim_start_matches(|c: char| c.is_ascii_whitespace() || c == '\u{b}');
    let (negative, digits) = match trimmed.as_bytes().first() {
        Some(b'-') => (true, &trimmed[1..]),
        Some(b'+') => (false, &trimmed[1..]),
        _ => (false, trimmed),
    };
    let limit = i64::from(i32::MAX) + 1;
    let mut value: i64 = 0;

    for digit in digits.bytes().take_while(|b| b.is_ascii_digit()) {
        value = (value * 10 + i64::from(digit - b'0')).min(limit);
    }

    let value = if negative { -value } else { value };
    value.clamp(i64::from(i32::MIN), i64::from(i32::MAX)) as i32
}

// `Ok(None)` means the process must abort.
fn run(
    program: &str,
    tokens: &[String],
    out: &mut impl Write,
    err: &mut impl Write,
) -> io::Result<Option<MountOptions>> {
    let optstring: OptString = OPTSTRING
        .parse()
        .expect("internal error - optstring must be valid");
    let mut getopt = Getopt::new(&optstring, tokens);
    let reports_errors = getopt.reports_errors();
    let mut options = MountOptions::default();

    for item in getopt.by_ref() {
        match item {
            Ok(Opt::Short('a', _)) => options.do_all = true,
            Ok(Opt::Short('t', value)) => options.fs_type = value.map(str::to_string),
            Ok(Opt::Short('o', Some(subopts))) => {
                for suboption in SubOptions::typed::<MountOption>(subopts) {
                    match suboption {
                        Suboption::Known {
                            option: MountOption::Ro,
                            ..
                        } => options.read_only = true,
                        Suboption::Known {
                            option: MountOption::Rw,
                            ..
                        } => options.read_only = false,
                        Suboption::Known {
                            option: MountOption::Rsize,
                            value,
                        } => match value {
                            Some(value) => options.read_size = atoi(value),
                            None => return Ok(None),
                        },
                        Suboption::Known {
                            option: MountOption::Wsize,
                            value,
                        } => match value {
                            Some(value) => options.write_size = atoi(value),
                            None => return Ok(None),
                        },
                        Suboption::Unknown(token) => {
                            writeln!(out, "Unknown suboption `{token}'")?
                        }
                    }
                }
            }
            Ok(_) => return Ok(None),
            Err(error) => {
                if reports_errors {
                    writeln!(err, "{program}: {error}")?;
                }

                return Ok(None);
            }
        }
    }

    Ok(Some(options))
}

fn main() {
    let program = program_name().unwrap_or_else(|| "getsubopt-demo".to_string());
    let tokens = command_arguments();

    match run(&program, &tokens, &mut io::stdout(), &mut io::stderr()) {
        Ok(Some(_)) => {}
        Ok(None) => std::process::abort(),
        Err(e) => {
            eprintln!("{program}: {e}");
            std::process::exit(1);
        }
    }
}
