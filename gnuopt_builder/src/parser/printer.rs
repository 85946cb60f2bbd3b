use terminal_size::{terminal_size, Width};

use crate::constant::*;
use crate::model::HasArg;
use crate::parser::interface::UserInterface;
use crate::parser::{ColumnRenderer, DocColumn, RightMargin, TotalWidth};

/// The layout of `--help` output.
/// The defaults match GNU argp.
///
/// ### Example
/// ```
/// # use gnuopt_builder as gnuopt;
/// use gnuopt::{Argp, HelpFormat};
///
/// let parser = Argp::new("program")
///     .format(HelpFormat {
///         right_margin: 100,
///         ..HelpFormat::default()
///     })
///     .build();
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HelpFormat {
    /// Help text wraps before this column.
    /// When running in a terminal, the margin is narrowed to fit.
    pub right_margin: usize,
    /// The column of short options (ex: `-v`).
    pub short_column: usize,
    /// The column of long options, when no short option precedes them.
    pub long_column: usize,
    /// The column of option documentation.
    pub doc_column: usize,
}

impl Default for HelpFormat {
    fn default() -> Self {
        Self {
            right_margin: 79,
            short_column: 2,
            long_column: 6,
            doc_column: 29,
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub(crate) struct ProgramInfo {
    pub(crate) program: String,
    pub(crate) version: Option<String>,
    pub(crate) bug_address: Option<String>,
    pub(crate) doc: Option<String>,
    pub(crate) args_doc: Option<String>,
}

impl ProgramInfo {
    #[cfg(test)]
    pub(crate) fn basic(program: impl Into<String>) -> Self {
        Self {
            program: program.into(),
            ..Self::default()
        }
    }

    // The text before a vertical tab precedes the options, the text after follows them.
    fn doc_parts(&self) -> (Option<&str>, Option<&str>) {
        match &self.doc {
            None => (None, None),
            Some(doc) => match doc.split_once('\u{b}') {
                Some((before, after)) => (non_empty(before), non_empty(after)),
                None => (non_empty(doc), None),
            },
        }
    }
}

fn non_empty(value: &str) -> Option<&str> {
    if value.is_empty() {
        None
    } else {
        Some(value)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct OptionParameter {
    name: String,
    short: Option<char>,
    arg: Option<String>,
    has_arg: HasArg,
    doc: Option<String>,
}

impl OptionParameter {
    pub(crate) fn new(
        name: impl Into<String>,
        short: Option<char>,
        arg: Option<String>,
        has_arg: HasArg,
        doc: Option<String>,
    ) -> Self {
        Self {
            name: name.into(),
            short,
            arg,
            has_arg,
            doc,
        }
    }

    fn builtin(name: &str, short: Option<char>, doc: &str) -> Self {
        Self::new(name, short, None, HasArg::No, Some(doc.to_string()))
    }

    fn arg_name(&self) -> &str {
        self.arg.as_deref().unwrap_or("VALUE")
    }

    fn sort_key(&self) -> (String, String) {
        let primary = match self.short {
            Some(s) => s.to_string(),
            None => self.name.clone(),
        };
        (primary.to_lowercase(), self.name.clone())
    }

    fn header(&self, format: &HelpFormat) -> String {
        let mut header = format!("{:width$}", "", width = format.short_column);

        if let Some(s) = self.short {
            header.push_str(&format!("-{s}, "));
        }

        while header.chars().count() < format.long_column {
            header.push(' ');
        }

        header.push_str(&format!("--{}", self.name));

        match self.has_arg {
            HasArg::No => {}
            HasArg::Required => header.push_str(&format!("={}", self.arg_name())),
            HasArg::Optional => header.push_str(&format!("[={}]", self.arg_name())),
        };

        header
    }
}

pub(crate) struct Printer {
    info: ProgramInfo,
    options: Vec<OptionParameter>,
    builtins: Vec<OptionParameter>,
    format: HelpFormat,
    renderer: ColumnRenderer,
}

impl Printer {
    #[cfg(test)]
    pub(crate) fn empty() -> Self {
        Self::new(
            ProgramInfo::basic("program"),
            Vec::default(),
            HelpFormat::default(),
            None,
        )
    }

    pub(crate) fn terminal(
        info: ProgramInfo,
        options: Vec<OptionParameter>,
        format: HelpFormat,
    ) -> Self {
        let terminal_width = if let Some((Width(terminal_width), _)) = terminal_size() {
            Some(terminal_width as usize)
        } else {
            None
        };

        Self::new(info, options, format, terminal_width)
    }

    pub(crate) fn new(
        info: ProgramInfo,
        mut options: Vec<OptionParameter>,
        format: HelpFormat,
        terminal_width: Option<usize>,
    ) -> Self {
        options.sort_by_key(OptionParameter::sort_key);
        let mut builtins = vec![
            OptionParameter::builtin(HELP_NAME, Some(HELP_SHORT), HELP_MESSAGE),
            OptionParameter::builtin(USAGE_NAME, None, USAGE_MESSAGE),
        ];

        if info.version.is_some() {
            builtins.push(OptionParameter::builtin(
                VERSION_NAME,
                Some(VERSION_SHORT),
                VERSION_MESSAGE,
            ));
        }

        let doc_column = DocColumn::new(format.doc_column).unwrap_or(
            DocColumn::new(HelpFormat::default().doc_column)
                .expect("internal error - default doc column must be valid"),
        );
        let right_margin = RightMargin::new(format.right_margin).unwrap_or(
            RightMargin::new(HelpFormat::default().right_margin)
                .expect("internal error - default right margin must be valid"),
        );
        let renderer =
            ColumnRenderer::guided(doc_column, right_margin, terminal_width.map(TotalWidth));

        Self {
            info,
            options,
            builtins,
            format,
            renderer,
        }
    }

    fn all_options(&self) -> impl Iterator<Item = &OptionParameter> {
        self.options.iter().chain(self.builtins.iter())
    }

    fn args_alternatives(&self) -> Vec<Vec<String>> {
        match &self.info.args_doc {
            Some(args_doc) => args_doc
                .split('\n')
                .map(|alternative| {
                    alternative
                        .split_whitespace()
                        .map(str::to_string)
                        .collect()
                })
                .collect(),
            None => vec![Vec::default()],
        }
    }

    fn print_synopsis(
        &self,
        items: &[String],
        user_interface: &(impl UserInterface + ?Sized),
    ) {
        for (i, alternative) in self.args_alternatives().into_iter().enumerate() {
            let lead = if i == 0 {
                format!("Usage: {}", self.info.program)
            } else {
                format!("  or:  {}", self.info.program)
            };
            let mut line_items = items.to_vec();
            line_items.extend(alternative);

            for line in self.renderer.flow(&lead, &line_items) {
                user_interface.print(line);
            }
        }
    }

    pub(crate) fn print_help(&self, user_interface: &(impl UserInterface + ?Sized)) {
        let (doc_before, doc_after) = self.info.doc_parts();
        self.print_synopsis(&["[OPTION...]".to_string()], user_interface);

        if let Some(doc) = doc_before {
            for line in self.renderer.paragraph(doc) {
                user_interface.print(line);
            }
        }

        user_interface.print("".to_string());

        if !self.options.is_empty() {
            for option in &self.options {
                self.print_option(option, user_interface);
            }

            user_interface.print("".to_string());
        }

        for option in &self.builtins {
            self.print_option(option, user_interface);
        }

        if self.all_options().any(|o| o.has_arg != HasArg::No) {
            user_interface.print("".to_string());

            for line in self.renderer.paragraph(MANDATORY_NOTE) {
                user_interface.print(line);
            }
        }

        if let Some(doc) = doc_after {
            user_interface.print("".to_string());

            for line in self.renderer.paragraph(doc) {
                user_interface.print(line);
            }
        }

        if let Some(bug_address) = &self.info.bug_address {
            user_interface.print("".to_string());
            user_interface.print(format!("Report bugs to {bug_address}."));
        }
    }

    fn print_option(
        &self,
        option: &OptionParameter,
        user_interface: &(impl UserInterface + ?Sized),
    ) {
        let header = option.header(&self.format);
        let doc = option.doc.as_deref().unwrap_or("");

        for line in self.renderer.render(&header, doc) {
            user_interface.print(line);
        }
    }

    pub(crate) fn print_usage(&self, user_interface: &(impl UserInterface + ?Sized)) {
        let mut flags = String::default();
        let mut items = Vec::default();

        for option in self.all_options() {
            if let (Some(s), HasArg::No) = (option.short, option.has_arg) {
                flags.push(s);
            }
        }

        if !flags.is_empty() {
            items.push(format!("[-{flags}]"));
        }

        for option in self.all_options() {
            match (option.short, option.has_arg) {
                (Some(s), HasArg::Required) => items.push(format!("[-{s} {}]", option.arg_name())),
                (Some(s), HasArg::Optional) => items.push(format!("[-{s}[{}]]", option.arg_name())),
                _ => {}
            };
        }

        for option in self.all_options() {
            match option.has_arg {
                HasArg::No => items.push(format!("[--{}]", option.name)),
                HasArg::Required => {
                    items.push(format!("[--{}={}]", option.name, option.arg_name()))
                }
                HasArg::Optional => {
                    items.push(format!("[--{}[={}]]", option.name, option.arg_name()))
                }
            };
        }

        self.print_synopsis(&items, user_interface);
    }

    pub(crate) fn print_version(&self, user_interface: &(impl UserInterface + ?Sized)) {
        if let Some(version) = &self.info.version {
            user_interface.print(version.clone());
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parser::util::InMemoryInterface;
    use rstest::rstest;

    fn example_two() -> ProgramInfo {
        ProgramInfo {
            program: "argp-ex2".to_string(),
            version: Some("argp-ex2 1.0".to_string()),
            bug_address: Some("<bug-gnu-utils@gnu.org>".to_string()),
            doc: Some("Argp example #2 -- a pretty minimal program using argp".to_string()),
            args_doc: None,
        }
    }

    fn example_options() -> Vec<OptionParameter> {
        vec![
            OptionParameter::new(
                "verbose",
                Some('v'),
                None,
                HasArg::No,
                Some("Produce verbose output".to_string()),
            ),
            OptionParameter::new(
                "output",
                Some('o'),
                Some("FILE".to_string()),
                HasArg::Required,
                Some("Output to FILE instead of standard output".to_string()),
            ),
            OptionParameter::new(
                "color",
                None,
                Some("WHEN".to_string()),
                HasArg::Optional,
                None,
            ),
        ]
    }

    #[test]
    fn print_help_empty() {
        // Setup
        let printer = Printer::empty();
        let interface = InMemoryInterface::default();

        // Execute
        printer.print_help(&interface);

        // Verify
        let message = interface.consume_message();
        assert_eq!(
            message,
            r#"Usage: program [OPTION...]

  -?, --help                 Give this help list
      --usage                Give a short usage message"#
        );
    }

    #[test]
    fn print_help_defaults() {
        // Setup
        let printer = Printer::new(example_two(), Vec::default(), HelpFormat::default(), None);
        let interface = InMemoryInterface::default();

        // Execute
        printer.print_help(&interface);

        // Verify
        let message = interface.consume_message();
        assert_eq!(
            message,
            r#"Usage: argp-ex2 [OPTION...]
Argp example #2 -- a pretty minimal program using argp

  -?, --help                 Give this help list
      --usage                Give a short usage message
  -V, --version              Print program version

Report bugs to <bug-gnu-utils@gnu.org>."#
        );
    }

    #[test]
    fn print_help_options() {
        // Setup
        let mut info = example_two();
        info.doc = Some("Before the options.\u{b}After the options.".to_string());
        info.args_doc = Some("ARG1 ARG2".to_string());
        let printer = Printer::new(info, example_options(), HelpFormat::default(), None);
        let interface = InMemoryInterface::default();

        // Execute
        printer.print_help(&interface);

        // Verify
        let message = interface.consume_message();
        assert_eq!(
            message,
            r#"Usage: argp-ex2 [OPTION...] ARG1 ARG2
Before the options.

      --color[=WHEN]
  -o, --output=FILE          Output to FILE instead of standard output
  -v, --verbose              Produce verbose output

  -?, --help                 Give this help list
      --usage                Give a short usage message
  -V, --version              Print program version

Mandatory or optional arguments to long options are also mandatory or optional
for any corresponding short options.

After the options.

Report bugs to <bug-gnu-utils@gnu.org>."#
        );
    }

    #[test]
    fn print_help_doc_after_only() {
        // Setup
        let info = ProgramInfo {
            doc: Some("\u{b}Only after.".to_string()),
            ..ProgramInfo::basic("program")
        };
        let printer = Printer::new(info, Vec::default(), HelpFormat::default(), None);
        let interface = InMemoryInterface::default();

        // Execute
        printer.print_help(&interface);

        // Verify
        let message = interface.consume_message();
        assert_eq!(
            message,
            r#"Usage: program [OPTION...]

  -?, --help                 Give this help list
      --usage                Give a short usage message

Only after."#
        );
    }

    #[test]
    fn print_help_args_alternatives() {
        // Setup
        let info = ProgramInfo {
            args_doc: Some("ARG1\n-x ARG2".to_string()),
            ..ProgramInfo::basic("program")
        };
        let printer = Printer::new(info, Vec::default(), HelpFormat::default(), None);
        let interface = InMemoryInterface::default();

        // Execute
        printer.print_help(&interface);

        // Verify
        let message = interface.consume_message();
        assert!(message.starts_with(
            "Usage: program [OPTION...] ARG1\n  or:  program [OPTION...] -x ARG2\n\n"
        ));
    }

    #[test]
    fn print_help_wraps_doc() {
        // Setup
        let options = vec![OptionParameter::new(
            "verbose",
            Some('v'),
            None,
            HasArg::No,
            Some("Produce a great deal of extremely verbose output".to_string()),
        )];
        let format = HelpFormat {
            right_margin: 60,
            ..HelpFormat::default()
        };
        let printer = Printer::new(ProgramInfo::basic("program"), options, format, None);
        let interface = InMemoryInterface::default();

        // Execute
        printer.print_help(&interface);

        // Verify
        let message = interface.consume_message();
        assert!(message.contains(
            "  -v, --verbose              Produce a great deal of\n                             extremely verbose output"
        ));
    }

    #[test]
    fn print_usage_defaults() {
        // Setup
        let printer = Printer::new(example_two(), Vec::default(), HelpFormat::default(), None);
        let interface = InMemoryInterface::default();

        // Execute
        printer.print_usage(&interface);

        // Verify
        let message = interface.consume_message();
        assert_eq!(
            message,
            "Usage: argp-ex2 [-?V] [--help] [--usage] [--version]"
        );
    }

    #[test]
    fn print_usage_options() {
        // Setup
        let mut info = example_two();
        info.args_doc = Some("ARG1 ARG2".to_string());
        let printer = Printer::new(info, example_options(), HelpFormat::default(), None);
        let interface = InMemoryInterface::default();

        // Execute
        printer.print_usage(&interface);

        // Verify
        let message = interface.consume_message();
        assert_eq!(
            message,
            r#"Usage: argp-ex2 [-v?V] [-o FILE] [--color[=WHEN]] [--output=FILE] [--verbose]
                [--help] [--usage] [--version] ARG1 ARG2"#
        );
    }

    #[rstest]
    #[case(Some("argp-ex2 1.0"), Some("argp-ex2 1.0"))]
    #[case(None, None)]
    fn print_version(#[case] version: Option<&str>, #[case] expected: Option<&str>) {
        // Setup
        let info = ProgramInfo {
            version: version.map(str::to_string),
            ..ProgramInfo::basic("program")
        };
        let printer = Printer::new(info, Vec::default(), HelpFormat::default(), None);
        let interface = InMemoryInterface::default();

        // Execute
        printer.print_version(&interface);

        // Verify
        let (message, error, error_context) = interface.consume();
        assert_eq!(message.as_deref(), expected);
        assert_eq!(error, None);
        assert_eq!(error_context, None);
    }

    #[rstest]
    #[case(None, HasArg::No, "  -x, --ex")]
    #[case(None, HasArg::Required, "  -x, --ex=VALUE")]
    #[case(Some("N"), HasArg::Required, "  -x, --ex=N")]
    #[case(Some("N"), HasArg::Optional, "  -x, --ex[=N]")]
    fn option_header(#[case] arg: Option<&str>, #[case] has_arg: HasArg, #[case] expected: &str) {
        let option = OptionParameter::new("ex", Some('x'), arg.map(str::to_string), has_arg, None);
        assert_eq!(option.header(&HelpFormat::default()), expected);
    }

    #[test]
    fn option_header_long_only() {
        let option = OptionParameter::new("ex", None, None, HasArg::No, None);
        assert_eq!(option.header(&HelpFormat::default()), "      --ex");
    }

    #[test]
    fn printer_invalid_format() {
        // Setup
        let format = HelpFormat {
            right_margin: 0,
            short_column: 2,
            long_column: 6,
            doc_column: 0,
        };
        let printer = Printer::new(ProgramInfo::basic("program"), Vec::default(), format, None);
        let interface = InMemoryInterface::default();

        // Execute
        printer.print_help(&interface);

        // Verify
        let message = interface.consume_message();
        assert!(message.contains("  -?, --help                 Give this help list"));
    }
}
