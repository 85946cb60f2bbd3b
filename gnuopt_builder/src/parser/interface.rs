use crate::parser::{ErrorContext, ParseError};

#[cfg(feature = "tracing_debug")]
use tracing::debug;

#[derive(Debug, Clone, Copy)]
pub(crate) struct DocColumn(usize);

impl DocColumn {
    pub(crate) fn new(column: usize) -> Result<Self, ()> {
        // doc must start after at least 1 column of header
        if column >= 1 {
            Ok(DocColumn(column))
        } else {
            Err(())
        }
    }
}

#[derive(Debug, Clone, Copy)]
pub(crate) struct RightMargin(usize);

impl RightMargin {
    pub(crate) fn new(margin: usize) -> Result<Self, ()> {
        // margin must leave room to hyphenate
        if margin >= 2 {
            Ok(RightMargin(margin))
        } else {
            Err(())
        }
    }

    #[cfg(test)]
    pub(crate) fn value(&self) -> usize {
        self.0
    }
}

#[derive(Debug, Clone, Copy)]
pub(crate) struct TotalWidth(pub usize);

// Room for about three average words.
pub(crate) const MINIMUM_DOC_WIDTH: usize = 17;

/// Lays out help text in two columns: an option header and its documentation.
/// Documentation starts at the doc column and wraps before the right margin.
#[derive(Debug)]
pub(crate) struct ColumnRenderer {
    doc_column: DocColumn,
    right_margin: RightMargin,
}

impl ColumnRenderer {
    /// Produce a renderer that narrows the right margin to fit the terminal.
    /// The configured margin is kept when the terminal is unknown, or too narrow to leave a usable doc column.
    pub(crate) fn guided(
        doc_column: DocColumn,
        right_margin: RightMargin,
        total_width: Option<TotalWidth>,
    ) -> Self {
        match total_width {
            Some(TotalWidth(total)) if total > doc_column.0 + MINIMUM_DOC_WIDTH => {
                // Stay off the final terminal column.
                let margin = std::cmp::min(right_margin.0, total - 1);

                #[cfg(feature = "tracing_debug")]
                {
                    debug!("Terminal width {total} allows right margin {margin}.");
                }

                Self::new(doc_column, RightMargin(margin))
            }
            _ => {
                #[cfg(feature = "tracing_debug")]
                {
                    debug!(
                        "Terminal width unusable.  Selecting right margin: {}.",
                        right_margin.0
                    );
                }

                Self::new(doc_column, right_margin)
            }
        }
    }

    pub(crate) fn new(doc_column: DocColumn, right_margin: RightMargin) -> Self {
        Self {
            doc_column,
            right_margin,
        }
    }

    fn doc_width(&self) -> usize {
        std::cmp::max(
            self.right_margin.0.saturating_sub(self.doc_column.0),
            MINIMUM_DOC_WIDTH,
        )
    }

    /// Render an option header followed by its documentation.
    /// A header reaching into the doc column pushes the documentation onto the following lines.
    pub(crate) fn render(&self, header: &str, doc: &str) -> Vec<String> {
        let doc_column = self.doc_column.0;
        let parts = chunk(doc, self.doc_width());
        let mut out = Vec::default();
        let mut parts_iter = parts.into_iter();

        if header.chars().count() < doc_column {
            match parts_iter.next() {
                Some(part) => out.push(format!("{:doc_column$}{part}", header)),
                None => out.push(header.to_string()),
            }
        } else {
            out.push(header.to_string());
        }

        for part in parts_iter {
            out.push(format!("{:doc_column$}{part}", ""));
        }

        out
    }

    /// Render free text, flush left.
    /// Line breaks in `text` are kept; each line wraps on its own.
    pub(crate) fn paragraph(&self, text: &str) -> Vec<String> {
        let width = self.right_margin.0;
        let mut out = Vec::default();

        for line in text.lines() {
            let parts = chunk(line, width);

            if parts.is_empty() {
                out.push(String::default());
            } else {
                out.extend(parts);
            }
        }

        out
    }

    /// Render `items` after `lead` as a single flowing line.
    /// Wrapped lines hang under the first item.
    pub(crate) fn flow(&self, lead: &str, items: &[String]) -> Vec<String> {
        let width = self.right_margin.0;
        let hang = lead.chars().count() + 1;
        let mut out = Vec::default();
        let mut current = lead.to_string();
        let mut current_length = hang - 1;
        let mut fresh = true;

        for item in items {
            let item_length = item.chars().count();

            if !fresh && current_length + 1 + item_length > width {
                out.push(current);
                current = format!("{:hang$}{item}", "");
                current_length = hang + item_length;
            } else {
                current.push(' ');
                current.push_str(item);
                current_length += 1 + item_length;
            }

            fresh = false;
        }

        out.push(current);
        out
    }
}

fn chunk(paragraph: &str, width: usize) -> Vec<String> {
    let mut lines = Vec::default();
    let mut current = String::default();

    for word in paragraph.split(' ') {
        if !word.is_empty() {
            if current.is_empty() {
                hyphenate(width, &mut lines, &mut current, word);
            } else {
                if current.chars().count() + word.chars().count() + 1 <= width {
                    current.push(' ');
                    current.push_str(word);
                } else {
                    lines.push(current);
                    current = String::default();
                    hyphenate(width, &mut lines, &mut current, word);
                }
            }
        }
    }

    if !current.is_empty() {
        lines.push(current);
    }

    lines
}

fn hyphenate(width: usize, lines: &mut Vec<String>, current: &mut String, word: &str) {
    let characters: Vec<char> = word.chars().collect();
    let increment = width - 1;
    let mut left = 0;
    let mut right = increment;

    while right + 1 < characters.len() {
        lines.push(format!(
            "{}-",
            characters[left..right].iter().collect::<String>()
        ));
        left += increment;
        right += increment;
    }

    current.extend(characters[left..].iter());
}

pub(crate) trait UserInterface {
    fn print(&self, message: String);
    fn print_error(&self, error: ParseError);
    fn print_error_context(&self, error_context: ErrorContext);
}

#[derive(Default)]
pub(crate) struct ConsoleInterface {}

impl UserInterface for ConsoleInterface {
    fn print(&self, message: String) {
        println!("{message}");
    }

    fn print_error(&self, error: ParseError) {
        eprintln!("{error}");
    }

    fn print_error_context(&self, error_context: ErrorContext) {
        eprintln!("{error_context}");
    }
}

#[cfg(feature = "unit_test")]
#[derive(Default)]
pub(crate) struct QuietInterface {}

#[cfg(feature = "unit_test")]
impl UserInterface for QuietInterface {
    fn print(&self, _message: String) {}

    fn print_error(&self, _error: ParseError) {}

    fn print_error_context(&self, _error_context: ErrorContext) {}
}
