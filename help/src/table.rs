//! Fixed-width two-column table rendering.

/// One renderable row.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Row {
    /// Label column plus wrapped text column.
    Pair {
        /// Left column, never wrapped.
        label: String,
        /// Right column, word-wrapped; embedded `\n` forces a break.
        text: String,
    },
    /// Full-width line with no column split.
    Merged(String),
    /// Horizontal rule at the rendered table's width.
    Separator,
}

impl Row {
    /// Creates a label/text pair.
    pub fn pair(label: &str, text: &str) -> Self {
        Self::Pair {
            label: label.to_string(),
            text: text.to_string(),
        }
    }

    /// Creates a full-width line.
    pub fn merged(text: &str) -> Self {
        Self::Merged(text.to_string())
    }
}

/// Renders rows into aligned, word-wrapped text.
///
/// Column 2 starts after the longest label in the table; continuation lines
/// of wrapped text align under it. A word longer than the remaining budget
/// overflows rather than being split. Blank rows are skipped.
///
/// # Examples
///
/// ```
/// use optbind_help::{Row, TableRenderer};
///
/// let renderer = TableRenderer::new().with_max_width(40);
/// let out = renderer.render(&[
///     Row::pair("-h | -help", "Displays this help and exit"),
///     Row::pair("-v", "Version"),
/// ]);
///
/// assert_eq!(
///     out,
///     "   -h | -help  Displays this help and\n\
///      \x20              exit\n\
///      \x20  -v          Version\n"
/// );
/// assert!(out.lines().all(|line| line.len() <= 40));
/// ```
#[derive(Debug, Clone)]
pub struct TableRenderer {
    max_width: usize,
    indent: String,
    column_separator: String,
    draw_border: bool,
}

impl Default for TableRenderer {
    fn default() -> Self {
        Self {
            max_width: 100,
            indent: "   ".to_string(),
            column_separator: "  ".to_string(),
            draw_border: false,
        }
    }
}

impl TableRenderer {
    /// Creates a renderer with the default width of 100 and a three-space
    /// indent.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the total character budget per line.
    pub fn with_max_width(mut self, max_width: usize) -> Self {
        self.max_width = max_width;
        self
    }

    /// Sets the leading indent string.
    pub fn with_indent(mut self, indent: &str) -> Self {
        self.indent = indent.to_string();
        self
    }

    /// Sets the string between the label and text columns.
    pub fn with_column_separator(mut self, separator: &str) -> Self {
        self.column_separator = separator.to_string();
        self
    }

    /// Adds leading and trailing rules around the table.
    pub fn with_border(mut self, draw_border: bool) -> Self {
        self.draw_border = draw_border;
        self
    }

    /// The configured line budget.
    pub fn max_width(&self) -> usize {
        self.max_width
    }

    /// Renders the rows as `\n`-terminated lines.
    pub fn render(&self, rows: &[Row]) -> String {
        let label_width = rows
            .iter()
            .filter_map(|row| match row {
                Row::Pair { label, .. } => Some(label.chars().count()),
                _ => None,
            })
            .max()
            .unwrap_or(0);
        let column_start = self.indent.chars().count()
            + label_width
            + self.column_separator.chars().count();
        let text_budget = self.max_width.saturating_sub(column_start).max(1);
        let merged_budget = self
            .max_width
            .saturating_sub(self.indent.chars().count())
            .max(1);

        // A rule line is sized after the fact, once the widest rendered
        // line is known.
        let mut lines: Vec<Option<String>> = Vec::new();
        for row in rows {
            match row {
                Row::Pair { label, text } => {
                    if label.is_empty() && text.is_empty() {
                        continue;
                    }
                    let chunks = wrap(text, text_budget);
                    let mut first = format!(
                        "{}{:<width$}{}",
                        self.indent,
                        label,
                        self.column_separator,
                        width = label_width
                    );
                    if let Some(chunk) = chunks.first() {
                        first.push_str(chunk);
                    }
                    lines.push(Some(first.trim_end().to_string()));
                    for chunk in chunks.iter().skip(1) {
                        lines.push(Some(format!("{}{}", " ".repeat(column_start), chunk)));
                    }
                }
                Row::Merged(text) => {
                    if text.is_empty() {
                        continue;
                    }
                    for chunk in wrap(text, merged_budget) {
                        lines.push(Some(format!("{}{}", self.indent, chunk)));
                    }
                }
                Row::Separator => lines.push(None),
            }
        }
        if lines.is_empty() {
            return String::new();
        }
        if self.draw_border {
            lines.insert(0, None);
            lines.push(None);
        }

        let width = lines
            .iter()
            .flatten()
            .map(|line| line.chars().count())
            .max()
            .unwrap_or(0)
            .max(1);
        let rule = "-".repeat(width);
        let mut out = String::new();
        for line in lines {
            out.push_str(line.as_deref().unwrap_or(&rule));
            out.push('\n');
        }
        out
    }
}

/// Greedy word wrap; `\n` forces a break, an over-long word overflows whole.
fn wrap(text: &str, budget: usize) -> Vec<String> {
    let mut chunks = Vec::new();
    for paragraph in text.split('\n') {
        let mut line = String::new();
        let mut count = 0usize;
        for word in paragraph.split_whitespace() {
            let word_len = word.chars().count();
            if count > 0 && count + 1 + word_len > budget {
                chunks.push(std::mem::take(&mut line));
                count = 0;
            }
            if count > 0 {
                line.push(' ');
                count += 1;
            }
            line.push_str(word);
            count += word_len;
        }
        if !line.is_empty() {
            chunks.push(line);
        }
    }
    chunks
}
