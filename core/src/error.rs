//! Parse-time error taxonomy.
//!
//! Every failure carries the offending raw token(s) so a localized message
//! can be rendered later through a [`Resources`] resolver without
//! re-parsing. The engine itself never prints; parsing stops at the first
//! error and propagates it to the caller.

use thiserror::Error;

use crate::strings::{self, Resources};

/// Errors raised while binding an argument vector.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseError {
    /// Token matches no declared switch and no last-args capture absorbs it.
    #[error("unknown option: '{token}'")]
    UnknownOption {
        /// The unrecognized token as supplied.
        token: String,
    },

    /// Leading token matches no registered sub-command (two-level mode only).
    #[error("unknown command: '{token}'")]
    UnknownCommand {
        /// The unrecognized token as supplied.
        token: String,
    },

    /// A non-list option's switch supplied more than once, via any alias.
    #[error("duplicate option: '{name}'")]
    DuplicateOption {
        /// The switch as supplied on the repeated occurrence.
        name: String,
    },

    /// A value-bearing switch is the last token, with no value after it.
    #[error("missing value for option: '{name}'")]
    MissingValue {
        /// The switch awaiting a value.
        name: String,
    },

    /// A supplied value failed coercion or choice membership.
    #[error("invalid <{expected}> string: '{raw}'")]
    InvalidValue {
        /// Target type name (or enum type name, or choice set).
        expected: String,
        /// The rejected raw string.
        raw: String,
    },
}

impl ParseError {
    /// Machine-readable resource key for this error kind.
    pub fn key(&self) -> &'static str {
        match self {
            Self::UnknownOption { .. } => strings::UNKNOWN_OPTION,
            Self::UnknownCommand { .. } => strings::UNKNOWN_COMMAND,
            Self::DuplicateOption { .. } => strings::DUPLICATE_OPTION,
            Self::MissingValue { .. } => strings::MISSING_VALUE,
            Self::InvalidValue { .. } => strings::INVALID_VALUE,
        }
    }

    /// Renders a localized message by filling the resolved template's `{}`
    /// placeholders from the structured fields.
    pub fn message<R: Resources>(&self, resources: &R) -> String {
        let template = resources.resolve(self.key());
        match self {
            Self::UnknownOption { token } | Self::UnknownCommand { token } => {
                fill(&template, &[token])
            }
            Self::DuplicateOption { name } | Self::MissingValue { name } => {
                fill(&template, &[name])
            }
            Self::InvalidValue { expected, raw } => fill(&template, &[expected, raw]),
        }
    }
}

/// Substitutes `{}` placeholders positionally; extra placeholders are left
/// as-is so a malformed resource string cannot panic.
fn fill(template: &str, args: &[&str]) -> String {
    let mut out = String::with_capacity(template.len());
    let mut rest = template;
    let mut next = 0usize;
    while let Some(at) = rest.find("{}") {
        out.push_str(&rest[..at]);
        match args.get(next) {
            Some(arg) => out.push_str(arg),
            None => out.push_str("{}"),
        }
        next += 1;
        rest = &rest[at + 2..];
    }
    out.push_str(rest);
    out
}
