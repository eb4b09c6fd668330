//! Eager spec validation.
//!
//! Configuration mistakes (duplicate switch names, a choice option with no
//! declared values, colliding command names) are programmer errors: they are
//! caught here, before any argument vector is read, and never surface as
//! user-facing parse errors.
//!
//! # Examples
//!
//! ```
//! use optbind_core::*;
//!
//! let spec = CommandSpec::new("d")
//!     .with_option(OptionSpec::value("-i", ValueType::String).with_alias("--input-path"))
//!     .with_option(OptionSpec::flag("-f").with_alias("--force"));
//! assert!(validate_command(&spec).is_ok());
//!
//! // "-i" is claimed twice.
//! let bad = CommandSpec::new("d")
//!     .with_option(OptionSpec::value("-i", ValueType::String))
//!     .with_option(OptionSpec::flag("-i"));
//! assert_eq!(
//!     validate_command(&bad),
//!     Err(SpecError::DuplicateOptionName("-i".to_string())),
//! );
//! ```

use std::collections::HashSet;

use thiserror::Error;

use crate::coerce::coerce;
use crate::{CommandSpec, MainSpec, OptionKind, OptionSpec, OptionValue, ValueType};

/// Spec configuration errors, raised at construction time.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SpecError {
    /// An option's primary name or alias is empty.
    #[error("option name cannot be empty")]
    EmptyOptionName,
    /// Two switches (primary names or aliases, in any combination) collide
    /// within one command.
    #[error("duplicate option name: {0}")]
    DuplicateOptionName(String),
    /// A choice option declares no allowed values.
    #[error("choice option '{0}' has no declared values")]
    NoChoices(String),
    /// An enum value type declares no members.
    #[error("enum type '{0}' has no declared members")]
    EmptyEnum(String),
    /// A choice option's declared default is outside its choice set.
    #[error("default '{value}' of option '{option}' is not among its choices")]
    ChoiceDefaultNotAllowed {
        /// Offending option switch.
        option: String,
        /// Declared default value.
        value: String,
    },
    /// A declared string default cannot be coerced to the option's type.
    #[error("default '{value}' of option '{option}' does not match its declared type")]
    BadDefault {
        /// Offending option switch.
        option: String,
        /// Declared default value.
        value: String,
    },
    /// A sub-command's name or alias is empty.
    #[error("command name cannot be empty")]
    EmptyCommandName,
    /// Two sub-commands (names or aliases) collide within one main spec.
    #[error("duplicate command name: {0}")]
    DuplicateCommandName(String),
    /// An other-option switch collides with another switch or command name.
    #[error("conflicting other-option switch: {0}")]
    DuplicateOtherOption(String),
    /// The declared default command is not registered.
    #[error("default command '{0}' is not registered")]
    UnknownDefaultCommand(String),
}

/// Validates one command's option set, stopping at the first error.
pub fn validate_command(spec: &CommandSpec) -> Result<(), SpecError> {
    let mut seen: HashSet<&str> = HashSet::new();
    for option in &spec.options {
        for name in option.names() {
            if name.is_empty() {
                return Err(SpecError::EmptyOptionName);
            }
            if !seen.insert(name) {
                return Err(SpecError::DuplicateOptionName(name.to_string()));
            }
        }
        validate_option(option)?;
    }
    if let Some(last_args) = &spec.last_args {
        validate_value_type(&last_args.value_type)?;
    }
    Ok(())
}

fn validate_option(option: &OptionSpec) -> Result<(), SpecError> {
    validate_value_type(&option.value_type)?;
    if option.kind == OptionKind::Choice {
        if option.choices.is_empty() {
            return Err(SpecError::NoChoices(option.name.clone()));
        }
        if let Some(default) = &option.default {
            let literal = default.to_string();
            if !option.choices.iter().any(|c| *c == literal) {
                return Err(SpecError::ChoiceDefaultNotAllowed {
                    option: option.name.clone(),
                    value: literal,
                });
            }
        }
    }
    // Defaults declared as raw strings must parse as the declared type, so
    // seeding a parse result can never fail.
    if let Some(OptionValue::Str(raw)) = &option.default {
        if option.value_type != ValueType::String && coerce(&option.value_type, raw).is_err() {
            return Err(SpecError::BadDefault {
                option: option.name.clone(),
                value: raw.clone(),
            });
        }
    }
    Ok(())
}

fn validate_value_type(value_type: &ValueType) -> Result<(), SpecError> {
    if let ValueType::Enum(spec) = value_type {
        if spec.members.is_empty() {
            return Err(SpecError::EmptyEnum(spec.name.clone()));
        }
    }
    Ok(())
}

/// Validates a main spec: every sub-command, plus name uniqueness across
/// commands and other-option switches.
pub fn validate_main(spec: &MainSpec) -> Result<(), SpecError> {
    let mut command_names: HashSet<&str> = HashSet::new();
    for command in &spec.commands {
        if command.name.is_empty() {
            return Err(SpecError::EmptyCommandName);
        }
        for name in std::iter::once(command.name.as_str())
            .chain(command.aliases.iter().map(String::as_str))
        {
            if name.is_empty() {
                return Err(SpecError::EmptyCommandName);
            }
            if !command_names.insert(name) {
                return Err(SpecError::DuplicateCommandName(name.to_string()));
            }
        }
        validate_command(command)?;
    }

    let mut other_names: HashSet<&str> = HashSet::new();
    for other in &spec.other_options {
        for name in &other.names {
            if command_names.contains(name.as_str()) || !other_names.insert(name) {
                return Err(SpecError::DuplicateOtherOption(name.clone()));
            }
        }
    }

    if let Some(default) = &spec.default_command {
        if spec.find_command(default).is_none() {
            return Err(SpecError::UnknownDefaultCommand(default.clone()));
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use crate::{EnumSpec, LastArgsSpec, OtherOptionSpec};

    use super::*;

    #[test]
    fn test_alias_collision_across_options_is_rejected() {
        let spec = CommandSpec::new("d")
            .with_option(OptionSpec::value("-i", ValueType::String).with_alias("--input-path"))
            .with_option(OptionSpec::value("-j", ValueType::String).with_alias("--input-path"));

        assert_eq!(
            validate_command(&spec),
            Err(SpecError::DuplicateOptionName("--input-path".to_string()))
        );
    }

    #[test]
    fn test_zero_choice_option_is_rejected() {
        let spec = CommandSpec::new("d")
            .with_option(OptionSpec::choice("-l", Vec::<String>::new()));
        assert_eq!(
            validate_command(&spec),
            Err(SpecError::NoChoices("-l".to_string()))
        );
    }

    #[test]
    fn test_choice_default_must_be_a_choice() {
        let spec = CommandSpec::new("d")
            .with_option(OptionSpec::choice("-l", ["aaa", "bbb"]).with_default("ccc"));
        assert_eq!(
            validate_command(&spec),
            Err(SpecError::ChoiceDefaultNotAllowed {
                option: "-l".to_string(),
                value: "ccc".to_string(),
            })
        );
    }

    #[test]
    fn test_string_default_must_parse_as_the_declared_type() {
        let spec = CommandSpec::new("d")
            .with_option(OptionSpec::value("-max", ValueType::Integer).with_default("12xyz"));
        assert_eq!(
            validate_command(&spec),
            Err(SpecError::BadDefault {
                option: "-max".to_string(),
                value: "12xyz".to_string(),
            })
        );

        let ok = CommandSpec::new("d")
            .with_option(OptionSpec::value("-max", ValueType::Integer).with_default("0x10"));
        assert!(validate_command(&ok).is_ok());
    }

    #[test]
    fn test_empty_enum_is_rejected_even_behind_last_args() {
        let spec = CommandSpec::new("d").with_last_args(LastArgsSpec::new(ValueType::Enum(
            EnumSpec::new("Empty", Vec::<String>::new()),
        )));
        assert_eq!(
            validate_command(&spec),
            Err(SpecError::EmptyEnum("Empty".to_string()))
        );
    }

    #[test]
    fn test_main_rejects_command_alias_collision() {
        let main = MainSpec::new()
            .with_command(CommandSpec::new("decode").with_alias("d"))
            .with_command(CommandSpec::new("d"));
        assert_eq!(
            validate_main(&main),
            Err(SpecError::DuplicateCommandName("d".to_string()))
        );
    }

    #[test]
    fn test_main_rejects_other_option_colliding_with_command() {
        let main = MainSpec::new()
            .with_command(CommandSpec::new("d"))
            .with_other(OtherOptionSpec::help(["d"]));
        assert_eq!(
            validate_main(&main),
            Err(SpecError::DuplicateOtherOption("d".to_string()))
        );
    }

    #[test]
    fn test_main_rejects_unknown_default_command() {
        let main = MainSpec::new()
            .with_command(CommandSpec::new("d"))
            .with_default_command("x");
        assert_eq!(
            validate_main(&main),
            Err(SpecError::UnknownDefaultCommand("x".to_string()))
        );
    }

    #[test]
    fn test_valid_main_spec_passes() {
        let main = MainSpec::new()
            .with_other(OtherOptionSpec::help(["-h", "-help"]))
            .with_other(OtherOptionSpec::version(["-v", "-version"]))
            .with_command(
                CommandSpec::new("decode")
                    .with_alias("d")
                    .with_option(OptionSpec::value("-i", ValueType::FilePath)),
            )
            .with_default_command("decode");
        assert!(validate_main(&main).is_ok());
    }
}
