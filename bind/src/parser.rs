//! Single-command argument parsing.

use optbind_core::{
    coerce, validate_command, CommandSpec, OptionKind, ParseError, SpecError, ValueType,
};
use tracing::debug;

use crate::ParseResult;

/// Parser for one command's declared syntax.
///
/// Construction validates the spec once; [`parse`](CommandParser::parse)
/// then binds argument vectors against it without revalidating. Parsing is
/// strict left-to-right with no reordering and stops at the first error.
///
/// # Examples
///
/// ```
/// use optbind_core::{CommandSpec, OptionSpec, ParseError, ValueType};
/// use optbind_bind::CommandParser;
///
/// let spec = CommandSpec::new("d")
///     .with_option(OptionSpec::value("-max", ValueType::Integer));
/// let parser = CommandParser::new(&spec).unwrap();
///
/// assert_eq!(parser.parse(&["-max", "0x10"]).unwrap().get_int("-max"), Some(16));
/// assert_eq!(
///     parser.parse(&["-max", "12xyz"]),
///     Err(ParseError::InvalidValue {
///         expected: "integer".to_string(),
///         raw: "12xyz".to_string(),
///     }),
/// );
/// ```
#[derive(Debug, Clone)]
pub struct CommandParser<'a> {
    spec: &'a CommandSpec,
}

impl<'a> CommandParser<'a> {
    /// Validates the spec and wraps it for parsing.
    pub fn new(spec: &'a CommandSpec) -> Result<Self, SpecError> {
        validate_command(spec)?;
        Ok(Self { spec })
    }

    /// The validated spec this parser binds against.
    pub fn spec(&self) -> &'a CommandSpec {
        self.spec
    }

    /// Binds an argument vector, stopping at the first error.
    pub fn parse<S: AsRef<str>>(&self, args: &[S]) -> Result<ParseResult, ParseError> {
        let mut result = ParseResult::from_spec(self.spec);
        let mut cursor = 0usize;
        while cursor < args.len() {
            let token = args[cursor].as_ref();
            let Some(index) = self.spec.options.iter().position(|o| o.matches(token)) else {
                // An unrecognized token either starts the trailing capture
                // or is an error; it is never skipped.
                let Some(last_args) = &self.spec.last_args else {
                    return Err(ParseError::UnknownOption {
                        token: token.to_string(),
                    });
                };
                debug!(command = %self.spec.name, start = token, "capturing trailing arguments");
                for arg in &args[cursor..] {
                    result.push_last_arg(coerce(&last_args.value_type, arg.as_ref())?);
                }
                break;
            };
            let option = &self.spec.options[index];

            if option.kind == OptionKind::Flag {
                // Repeating a flag is harmless; it stays raised.
                let binding = result.binding_at(index);
                binding.value = Some(true.into());
                binding.explicit = true;
                cursor += 1;
                continue;
            }

            let Some(raw) = args.get(cursor + 1) else {
                return Err(ParseError::MissingValue {
                    name: token.to_string(),
                });
            };
            let raw = raw.as_ref();
            if option.kind == OptionKind::Choice && !option.choices.iter().any(|c| c == raw) {
                return Err(ParseError::InvalidValue {
                    expected: choice_expectation(option.value_type.clone(), &option.choices),
                    raw: raw.to_string(),
                });
            }
            let value = coerce(&option.value_type, raw)?;
            debug!(command = %self.spec.name, option = %option.name, %value, "bound");

            let binding = result.binding_at(index);
            match option.kind {
                OptionKind::List => binding.items.push(value),
                _ => {
                    if binding.explicit {
                        // The repeated switch is reported as supplied, which
                        // may be an alias of the first occurrence.
                        return Err(ParseError::DuplicateOption {
                            name: token.to_string(),
                        });
                    }
                    binding.value = Some(value);
                }
            }
            binding.explicit = true;
            cursor += 2;
        }
        Ok(result)
    }
}

/// Type name reported when a choice value is rejected: the enum type name
/// when one is declared, otherwise the literal choice set.
fn choice_expectation(value_type: ValueType, choices: &[String]) -> String {
    match value_type {
        ValueType::Enum(spec) => spec.name,
        _ => choices.join("|"),
    }
}

#[cfg(test)]
mod tests {
    use optbind_core::{EnumSpec, LastArgsSpec, OptionSpec, OptionValue};

    use super::*;

    fn decode_spec() -> CommandSpec {
        CommandSpec::new("d")
            .with_option(OptionSpec::value("-i", ValueType::FilePath).with_alias("--input-path"))
            .with_option(
                OptionSpec::value("-o", ValueType::FilePath).with_default("/initial/value"),
            )
            .with_option(OptionSpec::value("-max", ValueType::Integer))
            .with_option(OptionSpec::choice("-l", ["aaa", "bbb", "ccc"]))
            .with_option(OptionSpec::flag("-f").with_alias("--force"))
            .with_option(OptionSpec::flag("-h").with_alias("-help"))
    }

    #[test]
    fn test_binds_values_flags_and_keeps_defaults() {
        let spec = decode_spec();
        let parser = CommandParser::new(&spec).unwrap();
        let result = parser
            .parse(&["-i", "/path/test", "-max", "123456", "-f"])
            .unwrap();

        assert_eq!(result.get_path("-i").unwrap().to_str(), Some("/path/test"));
        assert_eq!(result.get_int("-max"), Some(123456));
        assert!(result.flag("-f"));
        assert!(!result.flag("-h"));
        // untouched option keeps its declared default
        assert_eq!(
            result.get_path("-o").unwrap().to_str(),
            Some("/initial/value")
        );
        assert!(!result.is_explicit("-o"));
    }

    #[test]
    fn test_every_kind_in_one_vector() {
        let spec = CommandSpec::new("d")
            .with_option(OptionSpec::value("-i", ValueType::String).with_alias("--input-path"))
            .with_option(OptionSpec::value("-o", ValueType::String).with_alias("--out-path"))
            .with_option(OptionSpec::flag("-f").with_alias("--force"))
            .with_option(OptionSpec::value("-max", ValueType::Integer))
            .with_option(
                OptionSpec::value("-g", ValueType::String)
                    .with_alias("--opt1")
                    .with_alias("--option1"),
            )
            .with_option(OptionSpec::list("-k", ValueType::String))
            .with_option(OptionSpec::choice("-l", ["aaa", "bbb", "ccc"]))
            .with_option(OptionSpec::choice_of(
                "-m",
                EnumSpec::new("SomeEnum", ["one", "two", "three"]),
            ));
        let parser = CommandParser::new(&spec).unwrap();
        let result = parser
            .parse(&[
                "-i", "/in/path", "-o", "/out/path", "--force", "-max", "1234", "--option1",
                "value1", "-k", "item1", "-k", "item2", "-k", "item3", "-l", "bbb", "-m", "three",
            ])
            .unwrap();

        assert_eq!(result.get_str("-i"), Some("/in/path"));
        assert_eq!(result.get_str("-o"), Some("/out/path"));
        assert!(result.flag("-f"));
        assert_eq!(result.get_int("-max"), Some(1234));
        assert_eq!(result.get_str("-g"), Some("value1"));
        assert_eq!(result.list("-k").len(), 3);
        assert_eq!(result.list("-k")[0], OptionValue::Str("item1".to_string()));
        assert_eq!(result.get_str("-l"), Some("bbb"));
        assert_eq!(result.get("-m"), Some(&OptionValue::Member("three".to_string())));
    }

    #[test]
    fn test_empty_args_bind_all_defaults() {
        let spec = decode_spec();
        let parser = CommandParser::new(&spec).unwrap();
        let empty: [&str; 0] = [];
        let result = parser.parse(&empty).unwrap();
        assert!(result.is_empty());
        assert_eq!(result.get_path("-o").unwrap().to_str(), Some("/initial/value"));
        assert_eq!(result.get_int("-max"), None);
    }

    #[test]
    fn test_parse_is_idempotent_across_calls() {
        let spec = decode_spec();
        let parser = CommandParser::new(&spec).unwrap();
        let args = ["-i", "/path/test", "-l", "aaa"];
        assert_eq!(parser.parse(&args).unwrap(), parser.parse(&args).unwrap());
    }

    #[test]
    fn test_alias_binds_the_same_slot() {
        let spec = decode_spec();
        let parser = CommandParser::new(&spec).unwrap();
        let result = parser.parse(&["--input-path", "/path/test", "--force"]).unwrap();
        assert_eq!(result.get_path("-i").unwrap().to_str(), Some("/path/test"));
        assert!(result.flag("-f"));
    }

    #[test]
    fn test_duplicate_via_alias_is_rejected_as_supplied() {
        let spec = decode_spec();
        let parser = CommandParser::new(&spec).unwrap();
        assert_eq!(
            parser.parse(&["-i", "/a", "--input-path", "/b"]),
            Err(ParseError::DuplicateOption {
                name: "--input-path".to_string(),
            })
        );
    }

    #[test]
    fn test_trailing_switch_without_value_is_missing_value() {
        let spec = decode_spec();
        let parser = CommandParser::new(&spec).unwrap();
        assert_eq!(
            parser.parse(&["-f", "-max"]),
            Err(ParseError::MissingValue {
                name: "-max".to_string(),
            })
        );
    }

    #[test]
    fn test_bad_integer_reports_raw_token() {
        let spec = decode_spec();
        let parser = CommandParser::new(&spec).unwrap();
        assert_eq!(
            parser.parse(&["-max", "12xyz"]),
            Err(ParseError::InvalidValue {
                expected: "integer".to_string(),
                raw: "12xyz".to_string(),
            })
        );
    }

    #[test]
    fn test_choice_rejects_non_member_with_choice_set() {
        let spec = decode_spec();
        let parser = CommandParser::new(&spec).unwrap();
        assert_eq!(
            parser.parse(&["-l", "xyz"]),
            Err(ParseError::InvalidValue {
                expected: "aaa|bbb|ccc".to_string(),
                raw: "xyz".to_string(),
            })
        );
        assert_eq!(
            parser.parse(&["-l", "bbb"]).unwrap().get_str("-l"),
            Some("bbb")
        );
    }

    #[test]
    fn test_enum_choice_binds_member_literal() {
        let spec = CommandSpec::new("d").with_option(OptionSpec::choice_of(
            "-m",
            EnumSpec::new("SomeEnum", ["one", "two", "three"]),
        ));
        let parser = CommandParser::new(&spec).unwrap();

        let result = parser.parse(&["-m", "three"]).unwrap();
        assert_eq!(result.get("-m"), Some(&OptionValue::Member("three".to_string())));

        assert_eq!(
            parser.parse(&["-m", "four"]),
            Err(ParseError::InvalidValue {
                expected: "SomeEnum".to_string(),
                raw: "four".to_string(),
            })
        );
    }

    #[test]
    fn test_list_accumulates_in_argument_order() {
        let spec = CommandSpec::new("d")
            .with_option(OptionSpec::list("-x", ValueType::String))
            .with_option(OptionSpec::flag("-f"));
        let parser = CommandParser::new(&spec).unwrap();
        let result = parser.parse(&["-x", "a", "-f", "-x", "b", "-x", "c"]).unwrap();
        assert_eq!(
            result.list("-x"),
            &[
                OptionValue::Str("a".to_string()),
                OptionValue::Str("b".to_string()),
                OptionValue::Str("c".to_string()),
            ]
        );
    }

    #[test]
    fn test_unknown_token_without_capture_is_an_error() {
        let spec = decode_spec();
        let parser = CommandParser::new(&spec).unwrap();
        assert_eq!(
            parser.parse(&["-xyz"]),
            Err(ParseError::UnknownOption {
                token: "-xyz".to_string(),
            })
        );
    }

    #[test]
    fn test_capture_absorbs_everything_after_first_unknown_token() {
        let spec = CommandSpec::new("run")
            .with_option(OptionSpec::flag("-f"))
            .with_last_args(LastArgsSpec::new(ValueType::String));
        let parser = CommandParser::new(&spec).unwrap();

        // "-f" after the capture starts is a captured token, not a flag.
        let result = parser.parse(&["one", "-f", "two"]).unwrap();
        assert!(!result.flag("-f"));
        assert_eq!(
            result.last_args(),
            &[
                OptionValue::Str("one".to_string()),
                OptionValue::Str("-f".to_string()),
                OptionValue::Str("two".to_string()),
            ]
        );
    }

    #[test]
    fn test_capture_applies_element_coercion() {
        let spec = CommandSpec::new("sum")
            .with_last_args(LastArgsSpec::new(ValueType::Integer));
        let parser = CommandParser::new(&spec).unwrap();
        let result = parser.parse(&["1", "0x10", "-3"]).unwrap();
        assert_eq!(
            result.last_args(),
            &[OptionValue::Int(1), OptionValue::Int(16), OptionValue::Int(-3)]
        );
        assert!(parser.parse(&["1", "x"]).is_err());
    }

    #[test]
    fn test_repeated_flag_stays_raised() {
        let spec = decode_spec();
        let parser = CommandParser::new(&spec).unwrap();
        let result = parser.parse(&["-f", "--force"]).unwrap();
        assert!(result.flag("-f"));
    }

    #[test]
    fn test_reencoded_args_bind_back_to_an_equal_result() {
        let spec = decode_spec();
        let parser = CommandParser::new(&spec).unwrap();
        let first = parser
            .parse(&["-i", "/path/test", "-max", "0x1abc", "-l", "ccc", "-f"])
            .unwrap();
        let second = parser.parse(&first.to_args()).unwrap();
        assert_eq!(first, second);
    }

    #[test]
    fn test_invalid_spec_is_rejected_at_construction() {
        let spec = CommandSpec::new("d")
            .with_option(OptionSpec::flag("-f"))
            .with_option(OptionSpec::flag("-f"));
        assert_eq!(
            CommandParser::new(&spec).err(),
            Some(SpecError::DuplicateOptionName("-f".to_string()))
        );
    }
}
