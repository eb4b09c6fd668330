//! Declarative command-line option binding.
//!
//! A program describes its accepted syntax once, as data: which commands
//! exist, which switches each command takes, what value type each switch
//! carries. The engine validates that description eagerly, binds an argument
//! vector against it, and renders aligned help text from the same metadata,
//! so parsing and documentation can never drift apart.
//!
//! This crate holds the metadata model, eager validation, value coercion,
//! the parse-time error taxonomy and the string-resource contract. Parsing
//! and dispatch live in `optbind-bind`; help rendering in `optbind-help`.
//!
//! # Examples
//!
//! ```
//! use optbind_core::{coerce, CommandSpec, OptionSpec, OptionValue, ValueType};
//!
//! let decode = CommandSpec::new("decode")
//!     .with_alias("d")
//!     .with_option(OptionSpec::value("-i", ValueType::FilePath).with_alias("--input-path"))
//!     .with_option(OptionSpec::value("-max", ValueType::Integer))
//!     .with_option(OptionSpec::flag("-f"));
//!
//! assert!(decode.find_option("--input-path").is_some());
//! assert_eq!(coerce(&ValueType::Integer, "0x1abc"), Ok(OptionValue::Int(0x1abc)));
//! ```

pub mod coerce;
pub mod error;
pub mod strings;
pub mod types;
pub mod validate;
pub mod values;

pub use coerce::coerce;
pub use error::ParseError;
pub use strings::{DefaultResources, Resources};
pub use types::{
    CommandSpec, EnumSpec, LastArgsSpec, MainSpec, OptionKind, OptionSpec, OtherAction,
    OtherOptionSpec, ValueType,
};
pub use validate::{validate_command, validate_main, SpecError};
pub use values::OptionValue;
