//! String resource keys and the resolver contract.
//!
//! Help titles and error messages are looked up by key through a caller
//! supplied [`Resources`] implementation, so display text can be localized
//! without touching the engine. Unresolvable keys resolve to themselves.

use std::collections::HashMap;

/// `Options:` section title.
pub const TITLE_OPTIONS: &str = "title_options";
/// `Flags:` section title.
pub const TITLE_FLAGS: &str = "title_flags";
/// `Usage:` section title.
pub const TITLE_USAGE: &str = "title_usage";
/// `Examples` section title.
pub const TITLE_EXAMPLES: &str = "title_examples";
/// `Commands` section title (main help).
pub const TITLE_COMMANDS: &str = "title_commands";
/// `Other options:` section title (main help).
pub const TITLE_OTHER_OPTIONS: &str = "title_other_options";
/// `Notes:` section title.
pub const TITLE_NOTES: &str = "title_notes";

/// Unknown option message template.
pub const UNKNOWN_OPTION: &str = "unknown_option_exception";
/// Unknown command message template.
pub const UNKNOWN_COMMAND: &str = "unknown_command_exception";
/// Duplicate option message template.
pub const DUPLICATE_OPTION: &str = "duplicate_option_exception";
/// Missing value message template.
pub const MISSING_VALUE: &str = "missing_value_exception";
/// Invalid value message template; placeholders are type then raw string.
pub const INVALID_VALUE: &str = "invalid_value_exception";

/// String resource resolver.
///
/// `resolve` must be total: a key with no display text resolves to the key
/// itself, never an error.
pub trait Resources {
    /// Resolves a resource key to display text.
    fn resolve(&self, key: &str) -> String;
}

impl Resources for HashMap<String, String> {
    fn resolve(&self, key: &str) -> String {
        self.get(key).cloned().unwrap_or_else(|| key.to_string())
    }
}

/// Built-in English resources.
///
/// A single immutable table; callers needing localization supply their own
/// [`Resources`] implementation instead.
///
/// # Examples
///
/// ```
/// use optbind_core::strings::{self, Resources};
///
/// let res = strings::DefaultResources;
/// assert_eq!(res.resolve(strings::TITLE_OPTIONS), "Options:");
/// assert_eq!(res.resolve("not_a_key"), "not_a_key");
/// ```
#[derive(Debug, Clone, Copy, Default)]
pub struct DefaultResources;

impl Resources for DefaultResources {
    fn resolve(&self, key: &str) -> String {
        match key {
            TITLE_OPTIONS => "Options:",
            TITLE_FLAGS => "Flags:",
            TITLE_USAGE => "Usage:",
            TITLE_EXAMPLES => "Examples",
            TITLE_COMMANDS => "Commands",
            TITLE_OTHER_OPTIONS => "Other options:",
            TITLE_NOTES => "Notes:",
            UNKNOWN_OPTION => "Unknown option: '{}'",
            UNKNOWN_COMMAND => "Unknown command: '{}'",
            DUPLICATE_OPTION => "Duplicate option: '{}'",
            MISSING_VALUE => "Missing value for option: '{}'",
            INVALID_VALUE => "Invalid <{}> string: '{}'",
            other => other,
        }
        .to_string()
    }
}
