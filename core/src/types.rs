//! Option and command metadata definitions.
//!
//! This module defines the declarative data model that drives parsing and
//! help rendering. Specs are built once (via the constructor/builder methods
//! below, by code generation, or by deserializing from JSON) and are never
//! mutated afterwards; the parser treats them as read-only.

use serde::{Deserialize, Serialize};

use crate::OptionValue;

/// Declared enumeration type for enum-valued options.
///
/// # Examples
///
/// ```
/// use optbind_core::EnumSpec;
///
/// let spec = EnumSpec::new("SomeEnum", ["one", "two", "three"]);
/// assert_eq!(spec.members.len(), 3);
/// assert!(spec.has_member("three"));
/// assert!(!spec.has_member("THREE"));
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EnumSpec {
    /// Type name, used in coercion error messages.
    pub name: String,
    /// Declared member names, matched case-sensitively.
    pub members: Vec<String>,
}

impl EnumSpec {
    /// Creates an enum spec from a type name and its member names.
    pub fn new<S: Into<String>>(name: &str, members: impl IntoIterator<Item = S>) -> Self {
        Self {
            name: name.to_string(),
            members: members.into_iter().map(Into::into).collect(),
        }
    }

    /// Exact, case-sensitive member lookup.
    pub fn has_member(&self, raw: &str) -> bool {
        self.members.iter().any(|m| m == raw)
    }
}

/// Value type accepted by an option.
///
/// The parser never inspects token shapes; the declared type alone decides
/// how a value token is coerced.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
pub enum ValueType {
    /// Raw string, taken verbatim (the default).
    #[default]
    String,
    /// Signed integer; decimal or `0x`-prefixed hexadecimal.
    Integer,
    /// Boolean literal (`true`/`false`); flags never consume a value token.
    Boolean,
    /// File path, wrapped without touching the filesystem.
    FilePath,
    /// Member of a declared enumeration.
    Enum(EnumSpec),
}

impl ValueType {
    /// Human-readable type name used in format errors.
    pub fn name(&self) -> &str {
        match self {
            Self::String => "string",
            Self::Integer => "integer",
            Self::Boolean => "boolean",
            Self::FilePath => "path",
            Self::Enum(spec) => &spec.name,
        }
    }
}

/// How an option binds to its field.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub enum OptionKind {
    /// Single scalar value; at most one occurrence.
    #[default]
    Value,
    /// Boolean switch; presence sets it true, takes no value token.
    Flag,
    /// Scalar restricted to a declared set of literals; at most one occurrence.
    Choice,
    /// Repeatable value; occurrences accumulate in argument order.
    List,
}

/// One declared command-line option.
///
/// Use the constructors [`value`](OptionSpec::value), [`flag`](OptionSpec::flag),
/// [`choice`](OptionSpec::choice) and [`list`](OptionSpec::list), then chain
/// builder methods.
///
/// # Examples
///
/// ```
/// use optbind_core::{OptionSpec, ValueType};
///
/// let input = OptionSpec::value("-i", ValueType::String)
///     .with_alias("--input-path")
///     .with_description("Input file path");
///
/// assert!(input.matches("-i"));
/// assert!(input.matches("--input-path"));
/// assert!(!input.matches("-I"));
/// assert_eq!(input.label(), "-i | --input-path");
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OptionSpec {
    /// Canonical switch (e.g. `-i`).
    pub name: String,
    /// Alternate switches resolving to the same option.
    pub aliases: Vec<String>,
    /// Binding kind.
    pub kind: OptionKind,
    /// Declared value type (element type for `List`).
    pub value_type: ValueType,
    /// Description: a resource key or a literal.
    pub description: String,
    /// Allowed literals, `Choice` kind only.
    pub choices: Vec<String>,
    /// Declared default, bound when the switch is absent.
    pub default: Option<OptionValue>,
}

impl OptionSpec {
    fn base(name: &str, kind: OptionKind, value_type: ValueType) -> Self {
        Self {
            name: name.to_string(),
            aliases: Vec::new(),
            kind,
            value_type,
            description: String::new(),
            choices: Vec::new(),
            default: None,
        }
    }

    /// Creates a single-occurrence value option.
    pub fn value(name: &str, value_type: ValueType) -> Self {
        Self::base(name, OptionKind::Value, value_type)
    }

    /// Creates a boolean flag (no value token).
    pub fn flag(name: &str) -> Self {
        Self::base(name, OptionKind::Flag, ValueType::Boolean)
    }

    /// Creates a choice option over string literals.
    pub fn choice<S: Into<String>>(name: &str, choices: impl IntoIterator<Item = S>) -> Self {
        let mut spec = Self::base(name, OptionKind::Choice, ValueType::String);
        spec.choices = choices.into_iter().map(Into::into).collect();
        spec
    }

    /// Creates a choice option whose literals are the members of an enum.
    pub fn choice_of(name: &str, spec: EnumSpec) -> Self {
        let choices = spec.members.clone();
        let mut option = Self::base(name, OptionKind::Choice, ValueType::Enum(spec));
        option.choices = choices;
        option
    }

    /// Creates a repeatable list option with the given element type.
    pub fn list(name: &str, value_type: ValueType) -> Self {
        Self::base(name, OptionKind::List, value_type)
    }

    /// Adds an alternate switch.
    pub fn with_alias(mut self, alias: &str) -> Self {
        self.aliases.push(alias.to_string());
        self
    }

    /// Sets the description (resource key or literal).
    pub fn with_description(mut self, description: &str) -> Self {
        self.description = description.to_string();
        self
    }

    /// Sets the declared default value.
    pub fn with_default(mut self, default: impl Into<OptionValue>) -> Self {
        self.default = Some(default.into());
        self
    }

    /// Exact, case-sensitive match against the primary name or any alias.
    pub fn matches(&self, token: &str) -> bool {
        self.name == token || self.aliases.iter().any(|a| a == token)
    }

    /// All switches: the primary name followed by the aliases.
    pub fn names(&self) -> impl Iterator<Item = &str> {
        std::iter::once(self.name.as_str()).chain(self.aliases.iter().map(String::as_str))
    }

    /// Help-column label, `name | alias | alias`.
    pub fn label(&self) -> String {
        self.names().collect::<Vec<_>>().join(" | ")
    }
}

/// Capture spec for trailing tokens that match no declared option.
///
/// At most one per command. Once an unrecognized token is reached, it and all
/// tokens after it are captured, each coerced with `value_type`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct LastArgsSpec {
    /// Element coercion; [`ValueType::String`] captures verbatim.
    pub value_type: ValueType,
    /// Description for help rendering.
    pub description: String,
}

impl LastArgsSpec {
    /// Creates a capture spec with the given element type.
    pub fn new(value_type: ValueType) -> Self {
        Self {
            value_type,
            description: String::new(),
        }
    }

    /// Sets the description.
    pub fn with_description(mut self, description: &str) -> Self {
        self.description = description.to_string();
        self
    }
}

/// Full declarative description of one command's accepted syntax.
///
/// Used both for parsing and for help rendering. Built once and treated as
/// read-only afterwards.
///
/// # Examples
///
/// ```
/// use optbind_core::{CommandSpec, OptionSpec, ValueType};
///
/// let spec = CommandSpec::new("decode")
///     .with_alias("d")
///     .with_description("Decode an input file")
///     .with_option(OptionSpec::value("-i", ValueType::FilePath).with_alias("--input-path"))
///     .with_option(OptionSpec::flag("-f").with_alias("--force"));
///
/// assert!(spec.find_option("--force").is_some());
/// assert!(spec.find_option("-x").is_none());
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct CommandSpec {
    /// Command name (the leading token in two-level dispatch).
    pub name: String,
    /// Alternate command names.
    pub aliases: Vec<String>,
    /// Description: resource key or literal.
    pub description: String,
    /// Usage line for help rendering.
    pub usage: String,
    /// Example invocations (literals or resource keys).
    pub examples: Vec<String>,
    /// Free-form notes appended to help output.
    pub notes: Vec<String>,
    /// Declared options, in help-rendering order.
    pub options: Vec<OptionSpec>,
    /// Optional trailing-token capture.
    pub last_args: Option<LastArgsSpec>,
}

impl CommandSpec {
    /// Creates an empty command spec with the given name.
    pub fn new(name: &str) -> Self {
        Self {
            name: name.to_string(),
            ..Default::default()
        }
    }

    /// Adds an alternate command name.
    pub fn with_alias(mut self, alias: &str) -> Self {
        self.aliases.push(alias.to_string());
        self
    }

    /// Sets the description.
    pub fn with_description(mut self, description: &str) -> Self {
        self.description = description.to_string();
        self
    }

    /// Sets the usage line.
    pub fn with_usage(mut self, usage: &str) -> Self {
        self.usage = usage.to_string();
        self
    }

    /// Adds an example invocation.
    pub fn with_example(mut self, example: &str) -> Self {
        self.examples.push(example.to_string());
        self
    }

    /// Adds a note line.
    pub fn with_note(mut self, note: &str) -> Self {
        self.notes.push(note.to_string());
        self
    }

    /// Adds a declared option.
    pub fn with_option(mut self, option: OptionSpec) -> Self {
        self.options.push(option);
        self
    }

    /// Declares trailing-token capture.
    pub fn with_last_args(mut self, last_args: LastArgsSpec) -> Self {
        self.last_args = Some(last_args);
        self
    }

    /// Finds the option a token resolves to (exact, case-sensitive).
    pub fn find_option(&self, token: &str) -> Option<&OptionSpec> {
        self.options.iter().find(|o| o.matches(token))
    }

    /// Exact match against the command name or any alias.
    pub fn matches(&self, token: &str) -> bool {
        self.name == token || self.aliases.iter().any(|a| a == token)
    }

    /// Help-column label, `name | alias`.
    pub fn label(&self) -> String {
        std::iter::once(self.name.as_str())
            .chain(self.aliases.iter().map(String::as_str))
            .collect::<Vec<_>>()
            .join(" | ")
    }
}

/// Outcome class of a main-level "other option" switch.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum OtherAction {
    /// Global help request.
    Help,
    /// Version request.
    Version,
    /// Caller-defined handler, identified by id.
    Custom(String),
}

/// A main-level switch handled before command resolution (help, version, ...).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OtherOptionSpec {
    /// Switches that trigger this action.
    pub names: Vec<String>,
    /// Description for help rendering.
    pub description: String,
    /// What the dispatcher reports when triggered.
    pub action: OtherAction,
}

impl OtherOptionSpec {
    fn with_action<S: Into<String>>(
        names: impl IntoIterator<Item = S>,
        action: OtherAction,
    ) -> Self {
        Self {
            names: names.into_iter().map(Into::into).collect(),
            description: String::new(),
            action,
        }
    }

    /// Creates a global help switch.
    pub fn help<S: Into<String>>(names: impl IntoIterator<Item = S>) -> Self {
        Self::with_action(names, OtherAction::Help)
    }

    /// Creates a version switch.
    pub fn version<S: Into<String>>(names: impl IntoIterator<Item = S>) -> Self {
        Self::with_action(names, OtherAction::Version)
    }

    /// Creates a custom switch reported back by handler id.
    pub fn custom<S: Into<String>>(id: &str, names: impl IntoIterator<Item = S>) -> Self {
        Self::with_action(names, OtherAction::Custom(id.to_string()))
    }

    /// Sets the description.
    pub fn with_description(mut self, description: &str) -> Self {
        self.description = description.to_string();
        self
    }

    /// Exact match against any declared switch.
    pub fn matches(&self, token: &str) -> bool {
        self.names.iter().any(|n| n == token)
    }

    /// Help-column label, switches joined with `|`.
    pub fn label(&self) -> String {
        self.names.join(" | ")
    }
}

/// Top-level program description for two-level dispatch.
///
/// # Examples
///
/// ```
/// use optbind_core::{CommandSpec, MainSpec, OtherOptionSpec};
///
/// let main = MainSpec::new()
///     .with_header("mytool - version x.y.z")
///     .with_usage("<command> <options>")
///     .with_other(OtherOptionSpec::help(["-h", "-help"]))
///     .with_other(OtherOptionSpec::version(["-v", "-version"]))
///     .with_command(CommandSpec::new("decode").with_alias("d"))
///     .with_command(CommandSpec::new("build").with_alias("b"));
///
/// assert!(main.find_command("d").is_some());
/// assert!(main.find_other("-version").is_some());
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct MainSpec {
    /// Banner lines printed at the top of main help.
    pub headers: Vec<String>,
    /// Usage lines.
    pub usages: Vec<String>,
    /// Main-level switches checked before command resolution.
    pub other_options: Vec<OtherOptionSpec>,
    /// Registered sub-commands.
    pub commands: Vec<CommandSpec>,
    /// Command selected when the argument vector is empty; when unset an
    /// empty vector yields a global help outcome.
    pub default_command: Option<String>,
}

impl MainSpec {
    /// Creates an empty main spec.
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a banner line.
    pub fn with_header(mut self, header: &str) -> Self {
        self.headers.push(header.to_string());
        self
    }

    /// Adds a usage line.
    pub fn with_usage(mut self, usage: &str) -> Self {
        self.usages.push(usage.to_string());
        self
    }

    /// Adds a main-level switch.
    pub fn with_other(mut self, other: OtherOptionSpec) -> Self {
        self.other_options.push(other);
        self
    }

    /// Registers a sub-command.
    pub fn with_command(mut self, command: CommandSpec) -> Self {
        self.commands.push(command);
        self
    }

    /// Sets the command selected for an empty argument vector.
    pub fn with_default_command(mut self, name: &str) -> Self {
        self.default_command = Some(name.to_string());
        self
    }

    /// Resolves a token to a registered command (name or alias, first wins).
    pub fn find_command(&self, token: &str) -> Option<&CommandSpec> {
        self.commands.iter().find(|c| c.matches(token))
    }

    /// Resolves a token to a main-level switch.
    pub fn find_other(&self, token: &str) -> Option<&OtherOptionSpec> {
        self.other_options.iter().find(|o| o.matches(token))
    }
}
