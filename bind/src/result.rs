//! Typed parse results.
//!
//! A [`ParseResult`] is the binding target: one slot per declared option,
//! pre-seeded with declared defaults, filled in by the parser. It is plain
//! data; nothing here touches the argument vector.

use optbind_core::{coerce, CommandSpec, OptionKind, OptionValue, ValueType};

/// One option's bound state.
#[derive(Debug, Clone)]
pub struct Binding {
    /// Canonical option name (aliases resolve here).
    pub name: String,
    /// Binding kind, copied from the spec.
    pub kind: OptionKind,
    /// Whether the switch appeared in the argument vector, as opposed to the
    /// value coming from a declared default.
    pub explicit: bool,
    /// Bound scalar value (`Value`, `Choice`, `Flag`).
    pub value: Option<OptionValue>,
    /// Accumulated values, `List` kind only, in argument order.
    pub items: Vec<OptionValue>,
}

// Two results bind equal when they carry the same values; whether a value
// was typed out or came from a default does not matter.
impl PartialEq for Binding {
    fn eq(&self, other: &Self) -> bool {
        self.name == other.name
            && self.kind == other.kind
            && self.value == other.value
            && self.items == other.items
    }
}

/// Bound values for one command invocation.
///
/// # Examples
///
/// ```
/// use optbind_core::{CommandSpec, OptionSpec, ValueType};
/// use optbind_bind::CommandParser;
///
/// let spec = CommandSpec::new("d")
///     .with_option(OptionSpec::value("-i", ValueType::FilePath).with_alias("--input-path"))
///     .with_option(OptionSpec::value("-max", ValueType::Integer))
///     .with_option(OptionSpec::flag("-f"));
///
/// let parser = CommandParser::new(&spec).unwrap();
/// let result = parser.parse(&["-i", "/path/test", "-max", "123456"]).unwrap();
///
/// assert_eq!(result.get_str("-i"), None); // bound as a path, not a string
/// assert_eq!(result.get_path("-i").unwrap().to_str(), Some("/path/test"));
/// assert_eq!(result.get_int("-max"), Some(123456));
/// assert!(!result.flag("-f"));
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct ParseResult {
    bindings: Vec<Binding>,
    last_args: Vec<OptionValue>,
}

impl ParseResult {
    /// Seeds a result from a spec: one slot per option, defaults pre-bound,
    /// flags down.
    pub fn from_spec(spec: &CommandSpec) -> Self {
        let bindings = spec
            .options
            .iter()
            .map(|option| Binding {
                name: option.name.clone(),
                kind: option.kind,
                explicit: false,
                value: {
                    let default = option
                        .default
                        .as_ref()
                        .map(|default| typed_default(default, &option.value_type));
                    match option.kind {
                        OptionKind::Flag => Some(default.unwrap_or(OptionValue::Bool(false))),
                        _ => default,
                    }
                },
                items: Vec::new(),
            })
            .collect();
        Self {
            bindings,
            last_args: Vec::new(),
        }
    }

    pub(crate) fn binding_mut(&mut self, name: &str) -> Option<&mut Binding> {
        self.bindings.iter_mut().find(|b| b.name == name)
    }

    // Slots are seeded one per spec option, so a spec option index is always
    // a valid binding index.
    pub(crate) fn binding_at(&mut self, index: usize) -> &mut Binding {
        &mut self.bindings[index]
    }

    pub(crate) fn push_last_arg(&mut self, value: OptionValue) {
        self.last_args.push(value);
    }

    fn binding(&self, name: &str) -> Option<&Binding> {
        self.bindings.iter().find(|b| b.name == name)
    }

    /// Bound scalar value of an option, by canonical name.
    pub fn get(&self, name: &str) -> Option<&OptionValue> {
        self.binding(name)?.value.as_ref()
    }

    /// Bound string value, covering string and enum-member bindings.
    pub fn get_str(&self, name: &str) -> Option<&str> {
        self.get(name)?.as_str()
    }

    /// Bound integer value.
    pub fn get_int(&self, name: &str) -> Option<i64> {
        self.get(name)?.as_int()
    }

    /// Bound path value.
    pub fn get_path(&self, name: &str) -> Option<&std::path::Path> {
        self.get(name)?.as_path()
    }

    /// Flag state; `false` for absent flags and unknown names alike.
    pub fn flag(&self, name: &str) -> bool {
        self.get(name).and_then(OptionValue::as_bool).unwrap_or(false)
    }

    /// Accumulated list values, in argument order.
    pub fn list(&self, name: &str) -> &[OptionValue] {
        self.binding(name).map(|b| b.items.as_slice()).unwrap_or(&[])
    }

    /// Whether the switch actually appeared in the argument vector.
    pub fn is_explicit(&self, name: &str) -> bool {
        self.binding(name).is_some_and(|b| b.explicit)
    }

    /// Captured trailing tokens, coerced.
    pub fn last_args(&self) -> &[OptionValue] {
        &self.last_args
    }

    /// Whether any binding or capture holds a supplied value.
    pub fn is_empty(&self) -> bool {
        self.last_args.is_empty() && !self.bindings.iter().any(|b| b.explicit)
    }

    /// Re-encodes the bound state as an argument vector the parser would
    /// bind back to an equal result.
    ///
    /// Flags appear only when raised; list options repeat their switch per
    /// item; captured trailing tokens come last.
    pub fn to_args(&self) -> Vec<String> {
        let mut args = Vec::new();
        for binding in &self.bindings {
            match binding.kind {
                OptionKind::Flag => {
                    if binding.value == Some(OptionValue::Bool(true)) {
                        args.push(binding.name.clone());
                    }
                }
                OptionKind::List => {
                    for item in &binding.items {
                        args.push(binding.name.clone());
                        args.push(item.to_string());
                    }
                }
                OptionKind::Value | OptionKind::Choice => {
                    if let Some(value) = &binding.value {
                        args.push(binding.name.clone());
                        args.push(value.to_string());
                    }
                }
            }
        }
        for value in &self.last_args {
            args.push(value.to_string());
        }
        args
    }
}

/// Defaults declared as raw strings take the option's type here; spec
/// validation guarantees the coercion succeeds.
fn typed_default(default: &OptionValue, value_type: &ValueType) -> OptionValue {
    match default {
        OptionValue::Str(raw) if *value_type != ValueType::String => {
            coerce(value_type, raw).unwrap_or_else(|_| default.clone())
        }
        _ => default.clone(),
    }
}
