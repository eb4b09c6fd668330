//! Top-level program help.

use optbind_core::{strings, MainSpec, Resources};

use crate::{Row, TableRenderer};

/// Renders the main help page: headers, usage, the command table, the
/// main-level switch table, then footer lines.
///
/// # Examples
///
/// ```
/// use optbind_core::{CommandSpec, DefaultResources, MainSpec, OtherOptionSpec};
/// use optbind_help::MainHelp;
///
/// let main = MainSpec::new()
///     .with_header("sampletool - version 1.0.0")
///     .with_usage("<command> <options>")
///     .with_other(OtherOptionSpec::help(["-h", "-help"]).with_description("Prints this help"))
///     .with_command(CommandSpec::new("decode").with_alias("d").with_description("Decodes"));
///
/// let page = MainHelp::new(&main).render(&DefaultResources);
/// assert!(page.starts_with("sampletool - version 1.0.0\n"));
/// assert!(page.contains("decode | d"));
/// assert!(page.contains("-h | -help"));
/// ```
#[derive(Debug, Clone)]
pub struct MainHelp<'a> {
    spec: &'a MainSpec,
    renderer: TableRenderer,
    footers: Vec<String>,
}

impl<'a> MainHelp<'a> {
    /// Creates a page over the spec with default rendering settings.
    pub fn new(spec: &'a MainSpec) -> Self {
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

        if !self.spec.headers.is_empty() {
            let mut block = String::new();
            for header in &self.spec.headers {
                block.push_str(&resources.resolve(header));
                block.push('\n');
            }
            sections.push(block);
        }

        if !self.spec.usages.is_empty() {
            let rows: Vec<Row> = self.spec.usages.iter().map(|u| Row::merged(u)).collect();
            sections.push(self.titled(resources, strings::TITLE_USAGE, &rows));
        }

        if !self.spec.commands.is_empty() {
            let rows: Vec<Row> = self
                .spec
                .commands
                .iter()
                .map(|command| {
                    Row::pair(&command.label(), &resources.resolve(&command.description))
                })
                .collect();
            sections.push(self.titled(resources, strings::TITLE_COMMANDS, &rows));
        }

        if !self.spec.other_options.is_empty() {
            let rows: Vec<Row> = self
                .spec
                .other_options
                .iter()
                .map(|other| Row::pair(&other.label(), &resources.resolve(&other.description)))
                .collect();
            sections.push(self.titled(resources, strings::TITLE_OTHER_OPTIONS, &rows));
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
}
