//! Shared argument holder and validation for cluster actions
//!
//! Every subcommand invocation builds one [`ActionArgs`] from the parsed
//! command line and runs [`ActionArgs::validate`] exactly once before any
//! action logic. Bounds live in [`ActionSpec`]; clap itself never enforces
//! positional arity.

use std::fmt;

use tracing::error;

use crate::cli::error::ArgsError;

/// Identity and positional-argument bounds for one subcommand.
///
/// The first positional argument is the cluster name in all actions that
/// take one, so most actions declare `exact(name, 1)`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ActionSpec {
    name: &'static str,
    min_params: usize,
    max_params: Option<usize>,
}

impl ActionSpec {
    /// Action taking exactly `count` positional arguments.
    pub const fn exact(name: &'static str, count: usize) -> Self {
        Self {
            name,
            min_params: count,
            max_params: Some(count),
        }
    }

    /// Action taking between `min` and `max` positional arguments.
    pub const fn bounded(name: &'static str, min: usize, max: usize) -> Self {
        Self {
            name,
            min_params: min,
            max_params: Some(max),
        }
    }

    /// Action declaring no upper bound on positional arguments.
    ///
    /// `validate()` collapses a missing upper bound to the minimum, so the
    /// effective maximum of such an action is `min`. Long-standing behavior,
    /// kept as-is.
    pub const fn unbounded(name: &'static str, min: usize) -> Self {
        Self {
            name,
            min_params: min,
            max_params: None,
        }
    }

    /// Action name as used in error messages.
    pub fn name(&self) -> &'static str {
        self.name
    }

    /// Minimum number of positional arguments required.
    pub fn min_params(&self) -> usize {
        self.min_params
    }

    /// Declared maximum, `None` when the action declared itself unbounded.
    pub fn max_params(&self) -> Option<usize> {
        self.max_params
    }
}

/// Sink for validation diagnostics.
///
/// `validate()` writes through this instead of a global logger, so tests
/// can capture the emitted lines.
pub trait DiagnosticSink {
    /// Emit one diagnostic line.
    fn emit(&mut self, line: &str);
}

/// Production sink: forwards each line to the tracing error stream.
#[derive(Debug, Default)]
pub struct TracingSink;

impl DiagnosticSink for TracingSink {
    fn emit(&mut self, line: &str) {
        error!("{line}");
    }
}

/// Test capture sink.
impl DiagnosticSink for Vec<String> {
    fn emit(&mut self, line: &str) {
        self.push(line.to_string());
    }
}

/// Parsed input for one subcommand invocation.
///
/// Populated by the CLI layer, validated once, then handed to the action.
/// `definitions` and `sysprops` are stored as raw strings; splitting them
/// into key/value pairs is the consumer's job.
#[derive(Debug, Clone)]
pub struct ActionArgs {
    /// The invoked subcommand's identity and bounds
    pub action: ActionSpec,
    /// Positional arguments in command-line order; first is the cluster name
    pub parameters: Vec<String>,
    /// Raw `name=value` configuration overrides from `-D`, persisted by the
    /// cluster manager at create/reconfigure time
    pub definitions: Vec<String>,
    /// Raw `name value` system properties from `-S`, applied after process
    /// start and not persisted
    pub sysprops: Vec<String>,
    /// Debug mode flag
    pub debug: bool,
}

impl ActionArgs {
    /// New holder for `action` with the given positional arguments and no
    /// overrides.
    pub fn new(action: ActionSpec, parameters: Vec<String>) -> Self {
        Self {
            action,
            parameters,
            definitions: Vec::new(),
            sysprops: Vec::new(),
            debug: false,
        }
    }

    /// The cluster name: first positional argument, `None` when there is
    /// none. Safe to call before [`validate`](Self::validate).
    pub fn cluster_name(&self) -> Option<&str> {
        self.parameters.first().map(String::as_str)
    }

    /// Check the positional-argument count against the action's bounds.
    ///
    /// On the too-many path, every positional argument is emitted to `sink`
    /// as one 1-indexed line before the error is returned. The success path
    /// has no side effects.
    pub fn validate(&self, sink: &mut dyn DiagnosticSink) -> Result<(), ArgsError> {
        let min = self.action.min_params();
        let actual = self.parameters.len();
        if actual < min {
            return Err(ArgsError::InsufficientArguments {
                action: self.action.name().to_string(),
                expected: min,
                actual,
            });
        }

        // An action without a declared upper bound gets an effective
        // maximum of `min`.
        let max = self.action.max_params().unwrap_or(min);
        if actual > max {
            let mut quoted = Vec::with_capacity(actual);
            for (index, parameter) in self.parameters.iter().enumerate() {
                sink.emit(&format!("[{}] \"{}\"", index + 1, parameter));
                quoted.push(format!("\"{parameter}\""));
            }
            return Err(ArgsError::TooManyArguments {
                action: self.action.name().to_string(),
                limit: max,
                actual,
                arguments: quoted.join(" "),
            });
        }

        Ok(())
    }
}

impl fmt::Display for ActionArgs {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "ActionArgs[{} parameter(s)]: {}",
            self.parameters.len(),
            self.action.name()
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn given_exact_spec_when_read_back_then_max_equals_min() {
        let spec = ActionSpec::exact("status", 1);
        assert_eq!(spec.min_params(), 1);
        assert_eq!(spec.max_params(), Some(1));
    }

    #[test]
    fn given_unbounded_spec_when_read_back_then_max_is_none() {
        let spec = ActionSpec::unbounded("flex", 1);
        assert_eq!(spec.min_params(), 1);
        assert_eq!(spec.max_params(), None);
    }

    #[test]
    fn given_args_when_displayed_then_contains_action_name() {
        let args = ActionArgs::new(ActionSpec::exact("create", 1), vec!["c1".into()]);
        let rendered = args.to_string();
        assert!(rendered.contains("create"), "display: {}", rendered);
        assert!(rendered.contains('1'), "display: {}", rendered);
    }

    #[test]
    fn given_success_path_when_validating_then_sink_stays_empty() {
        let args = ActionArgs::new(ActionSpec::exact("start", 1), vec!["c1".into()]);
        let mut captured: Vec<String> = Vec::new();

        args.validate(&mut captured).expect("within bounds");

        assert!(captured.is_empty(), "no diagnostics on success");
    }
}
