//! Per-command help pages.

use optbind_core::{strings, CommandSpec, OptionKind, Resources};

use crate::{Row, TableRenderer};

/// Renders one command's help page from its spec.
///
/// Section order: description, usage, value-bearing options, flags, numbered
/// examples, notes, then any footer lines. Empty sections are omitted. All
/// titles and descriptions go through the resource resolver, so a literal
/// description simply resolves to itself.
///
/// # Examples
///
/// ```
/// use optbind_core::{CommandSpec, DefaultResources, OptionSpec, ValueType};
/// use optbind_help::CommandHelp;
///
/// let spec = CommandSpec::new("decode")
///     .with_description("Decodes an input file")
///     .with_usage("decode <options>")
///     .with_option(OptionSpec::value("-i", ValueType::FilePath).with_description("Input file"))
///     .with_option(OptionSpec::flag("-f").with_description("Overwrite output"));
///
/// let page = CommandHelp::new(&spec).render(&DefaultResources);
/// assert!(page.starts_with("Decodes an input file\n"));
/// assert!(page.contains("Usage:\n"));
/// assert!(page.contains("Options:\n"));
/// assert!(page.contains("Flags:\n"));
/// ```
#[derive(Debug, Clone)]
pub struct CommandHelp<'a> {
    spec: &'a CommandSpec,
    renderer: TableRenderer,
    footers: Vec<String>,
}

impl<'a> CommandHelp<'a> {
    /// Creates a help page over the spec with default rendering settings.
    pub fn new(spec: &'a CommandSpec) -> Self {
        Self {
            spec,
            renderer: TableRenderer::new(),
            footers: Vec::new(),
        }
    }

    /// Replaces the table renderer (width, indent, border).
    pub fn with_renderer(mut self, renderer: TableRenderer) -> Self {
        self.renderer = renderer;
        self
    }

    /// Appends a literal footer line after all sections.
    pub fn with_footer(mut self, line: &str) -> Self {
        self.footers.push(line.to_string());
        self
    }

    /// Renders the page as `\n`-terminated lines.
    pub fn render<R: Resources>(&self, resources: &R) -> String {
        let mut sections: Vec<String> = Vec::new();

        if !self.spec.description.is_empty() {
            sections.push(format!("{}\n", resources.resolve(&self.spec.description)));
        }
        if !self.spec.usage.is_empty() {
            sections.push(self.titled(
                resources,
                strings::TITLE_USAGE,
                &[Row::merged(&self.spec.usage)],
            ));
        }

        let mut option_rows = self.option_rows(resources, |kind| kind != OptionKind::Flag);
        if let Some(last_args) = &self.spec.last_args {
            if !last_args.description.is_empty() {
                option_rows.push(Row::pair(
                    "<args>",
                    &resources.resolve(&last_args.description),
                ));
            }
        }
        if !option_rows.is_empty() {
            sections.push(self.titled(resources, strings::TITLE_OPTIONS, &option_rows));
        }

        let flag_rows = self.option_rows(resources, |kind| kind == OptionKind::Flag);
        if !flag_rows.is_empty() {
            sections.push(self.titled(resources, strings::TITLE_FLAGS, &flag_rows));
        }

        if !self.spec.examples.is_empty() {
            let rows: Vec<Row> = self
                .spec
                .examples
                .iter()
                .enumerate()
                .map(|(i, example)| {
                    Row::pair(&format!("{})", i + 1), &resources.resolve(example))
                })
                .collect();
            // Example invocations read badly when wrapped tight, so they get
            // twice the line budget.
            let wide = self
                .renderer
                .clone()
                .with_max_width(self.renderer.max_width() * 2);
            sections.push(format!(
                "{}\n{}",
                resources.resolve(strings::TITLE_EXAMPLES),
                wide.render(&rows)
            ));
        }

        if !self.spec.notes.is_empty() {
            let rows: Vec<Row> = self
                .spec
                .notes
                .iter()
                .map(|note| Row::merged(&resources.resolve(note)))
                .collect();
            sections.push(self.titled(resources, strings::TITLE_NOTES, &rows));
        }

        if !self.footers.is_empty() {
            let mut block = String::new();
            for line in &self.footers {
                block.push_str(line);
                block.push('\n');
            }
            sections.push(block);
        }
        sections.join("\n")
    }

    fn titled<R: Resources>(&self, resources: &R, title: &str, rows: &[Row]) -> String {
        format!("{}\n{}", resources.resolve(title), self.renderer.render(rows))
    }

    fn option_rows<R: Resources>(
        &self,
        resources: &R,
        keep: impl Fn(OptionKind) -> bool,
    ) -> Vec<Row> {
        self.spec
            .options
            .iter()
            .filter(|option| keep(option.kind))
            .map(|option| {
                let mut text = resources.resolve(&option.description);
                if option.kind == OptionKind::Choice {
                    if !text.is_empty() {
                        text.push('\n');
                    }
                    text.push_str(&option.choices.join(", "));
                }
                Row::pair(&option.label(), &text)
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use optbind_core::{DefaultResources, LastArgsSpec, OptionSpec, ValueType};

    use super::*;

    fn spec() -> CommandSpec {
        CommandSpec::new("decode")
            .with_alias("d")
            .with_description("Decodes an input file")
            .with_usage("d <options> <flags>")
            .with_option(
                OptionSpec::value("-i", ValueType::FilePath)
                    .with_alias("--input-path")
                    .with_description("Input file path"),
            )
            .with_option(OptionSpec::choice("-l", ["aaa", "bbb", "ccc"]).with_description("Level"))
            .with_option(OptionSpec::flag("-f").with_alias("--force").with_description("Overwrite"))
            .with_option(OptionSpec::flag("-h").with_alias("-help").with_description("This help"))
            .with_example("d -i in.bin -l bbb")
            .with_note("Input is never modified.")
            .with_last_args(LastArgsSpec::new(ValueType::String).with_description("Extra files"))
    }

    #[test]
    fn test_sections_come_in_declared_order() {
        let spec = spec();
        let page = CommandHelp::new(&spec)
            .with_footer("See the manual for details.")
            .render(&DefaultResources);

        let positions: Vec<usize> = [
            "Decodes an input file",
            "Usage:",
            "Options:",
            "Flags:",
            "Examples",
            "Notes:",
            "See the manual for details.",
        ]
        .iter()
        .map(|needle| page.find(needle).unwrap())
        .collect();
        assert!(positions.windows(2).all(|w| w[0] < w[1]));
    }

    #[test]
    fn test_flags_are_split_out_of_options() {
        let spec = spec();
        let page = CommandHelp::new(&spec).render(&DefaultResources);

        let options_at = page.find("Options:").unwrap();
        let flags_at = page.find("Flags:").unwrap();
        let input_at = page.find("-i | --input-path").unwrap();
        let force_at = page.find("-f | --force").unwrap();
        assert!(options_at < input_at && input_at < flags_at);
        assert!(flags_at < force_at);
    }

    #[test]
    fn test_choice_row_lists_allowed_values_on_its_own_line() {
        let spec = spec();
        let page = CommandHelp::new(&spec).render(&DefaultResources);
        let level_line = page.lines().position(|l| l.contains("Level")).unwrap();
        let next: Vec<&str> = page.lines().collect();
        assert_eq!(next[level_line + 1].trim(), "aaa, bbb, ccc");
    }

    #[test]
    fn test_last_args_description_joins_the_options_table() {
        let spec = spec();
        let page = CommandHelp::new(&spec).render(&DefaultResources);
        assert!(page.contains("<args>"));
        assert!(page.contains("Extra files"));
    }

    #[test]
    fn test_empty_sections_are_omitted() {
        let bare = CommandSpec::new("noop").with_option(OptionSpec::flag("-q"));
        let page = CommandHelp::new(&bare).render(&DefaultResources);
        assert!(!page.contains("Usage:"));
        assert!(!page.contains("Options:"));
        assert!(!page.contains("Examples"));
        assert!(page.contains("Flags:"));
    }
}
