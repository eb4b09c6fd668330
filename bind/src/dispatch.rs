//! Two-level command dispatch.

use optbind_core::{CommandSpec, MainSpec, OtherAction, ParseError, SpecError};
use tracing::debug;

use crate::{CommandParser, ParseResult};

/// What a dispatched argument vector resolved to.
///
/// The caller matches on this to run the selected command, print help or
/// version text, or invoke a custom handler; the dispatcher itself never
/// prints or exits.
#[derive(Debug, Clone, PartialEq)]
pub enum DispatchOutcome<'a> {
    /// A help request; `None` means the global help page.
    Help(Option<&'a CommandSpec>),
    /// A version request.
    Version,
    /// A caller-defined main-level switch, identified by handler id.
    Other(&'a str),
    /// A resolved command and its bound arguments.
    Selected {
        /// The command the leading token (or the declared default) resolved to.
        command: &'a CommandSpec,
        /// Bound values for the tokens after the command name.
        result: ParseResult,
        /// Whether the command was named with nothing after it. Commands
        /// that require arguments typically answer this with their help page.
        args_empty: bool,
    },
}

/// Resolves argument vectors against a main spec.
///
/// Main-level switches win over command names; the rest of the vector is
/// handed to the resolved command's parser untouched.
///
/// # Examples
///
/// ```
/// use optbind_core::{CommandSpec, MainSpec, OptionSpec, OtherOptionSpec, ValueType};
/// use optbind_bind::{DispatchOutcome, Dispatcher};
///
/// let main = MainSpec::new()
///     .with_other(OtherOptionSpec::help(["-h", "-help"]))
///     .with_command(
///         CommandSpec::new("decode")
///             .with_alias("d")
///             .with_option(OptionSpec::value("-i", ValueType::FilePath)),
///     );
/// let dispatcher = Dispatcher::new(&main).unwrap();
///
/// assert_eq!(dispatcher.dispatch(&["-help"]).unwrap(), DispatchOutcome::Help(None));
/// match dispatcher.dispatch(&["d", "-i", "/path/test"]).unwrap() {
///     DispatchOutcome::Selected { command, result, .. } => {
///         assert_eq!(command.name, "decode");
///         assert!(result.get_path("-i").is_some());
///     }
///     other => panic!("unexpected outcome: {other:?}"),
/// }
/// ```
#[derive(Debug, Clone)]
pub struct Dispatcher<'a> {
    spec: &'a MainSpec,
    parsers: Vec<CommandParser<'a>>,
}

impl<'a> Dispatcher<'a> {
    /// Validates the main spec and builds one parser per command.
    pub fn new(spec: &'a MainSpec) -> Result<Self, SpecError> {
        optbind_core::validate_main(spec)?;
        let parsers = spec
            .commands
            .iter()
            .map(CommandParser::new)
            .collect::<Result<_, _>>()?;
        Ok(Self { spec, parsers })
    }

    /// The validated main spec.
    pub fn spec(&self) -> &'a MainSpec {
        self.spec
    }

    /// Resolves the leading token and binds the rest.
    ///
    /// An empty vector selects the declared default command when there is
    /// one, and is a global help request otherwise.
    pub fn dispatch<S: AsRef<str>>(&self, args: &[S]) -> Result<DispatchOutcome<'a>, ParseError> {
        let Some(first) = args.first() else {
            if let Some(default) = &self.spec.default_command {
                return self.select(default, &args[..0]);
            }
            return Ok(DispatchOutcome::Help(None));
        };
        let first = first.as_ref();

        if let Some(other) = self.spec.find_other(first) {
            debug!(switch = first, "main-level switch");
            return Ok(match &other.action {
                OtherAction::Help => DispatchOutcome::Help(None),
                OtherAction::Version => DispatchOutcome::Version,
                OtherAction::Custom(id) => DispatchOutcome::Other(id),
            });
        }
        self.select(first, &args[1..])
    }

    fn select<S: AsRef<str>>(
        &self,
        token: &str,
        rest: &[S],
    ) -> Result<DispatchOutcome<'a>, ParseError> {
        let Some(index) = self.spec.commands.iter().position(|c| c.matches(token)) else {
            return Err(ParseError::UnknownCommand {
                token: token.to_string(),
            });
        };
        let parser = &self.parsers[index];
        debug!(command = %parser.spec().name, args = rest.len(), "dispatching");
        Ok(DispatchOutcome::Selected {
            command: parser.spec(),
            result: parser.parse(rest)?,
            args_empty: rest.is_empty(),
        })
    }
}
