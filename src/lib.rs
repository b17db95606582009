//! Cluster lifecycle CLI: shared action-argument handling and validation
//!
//! Each subcommand invocation is captured in one [`cli::ActionArgs`],
//! validated against the subcommand's declared bounds, and only then
//! handed on. See [`cli::params`] for the contract.

pub mod cli;
pub mod exitcode;

pub use cli::{ActionArgs, ActionSpec, ArgsError, DiagnosticSink};
