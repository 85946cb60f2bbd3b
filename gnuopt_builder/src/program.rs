use std::env;
use std::ffi::OsString;
use std::path::Path;

/// The program name, as the basename of `argv[0]`.
///
/// Returns `None` when the process was started without an `argv[0]`.
///
/// ### Example
/// ```
/// # use gnuopt_builder as gnuopt;
/// use gnuopt::{program_name, Argp};
///
/// let program = program_name().unwrap_or("program".to_string());
/// let parser = Argp::new(program).build();
/// ```
pub fn program_name() -> Option<String> {
    env::args_os().next().map(|argv0| basename(&argv0.to_string_lossy()))
}

/// The command line arguments after `argv[0]`.
///
/// Arguments that are not valid Unicode are converted lossily (with `U+FFFD` replacement characters).
pub fn command_arguments() -> Vec<String> {
    lossy(env::args_os().skip(1))
}

fn lossy(arguments: impl Iterator<Item = OsString>) -> Vec<String> {
    arguments
        .map(|argument| argument.to_string_lossy().into_owned())
        .collect()
}

fn basename(path: &str) -> String {
    match Path::new(path).file_name() {
        Some(name) => name.to_string_lossy().into_owned(),
        None => path.to_string(),
    }
}
