//! CLI argument definitions using clap
//!
//! Positional arguments bind as free-form `Vec<String>` on every action:
//! arity is checked by `ActionArgs::validate`, not by clap, so the error
//! messages stay uniform across the action family.

use clap::{Parser, Subcommand};

/// Cluster lifecycle CLI: shared action-argument handling and validation
#[derive(Parser, Debug)]
#[command(name = "clusterctl")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Configuration override `name=value`, persisted when the cluster is
    /// created or reconfigured
    #[arg(short = 'D', value_name = "NAME=VALUE", global = true, hide = true)]
    pub define: Vec<String>,

    /// System property `"name value"`, applied after process start, not
    /// persisted
    #[arg(
        short = 'S',
        long = "sysprop",
        value_name = "NAME VALUE",
        global = true,
        hide = true
    )]
    pub sysprop: Vec<String>,

    /// Debug mode
    #[arg(long, global = true, hide = true)]
    pub debug: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Create a cluster
    Create {
        /// Cluster name
        params: Vec<String>,
    },

    /// Destroy a stopped cluster
    Destroy {
        /// Cluster name
        params: Vec<String>,
    },

    /// Start a cluster
    Start {
        /// Cluster name
        params: Vec<String>,
    },

    /// Stop a running cluster
    Stop {
        /// Cluster name
        params: Vec<String>,
    },

    /// Show cluster status
    Status {
        /// Cluster name
        params: Vec<String>,
    },

    /// Probe whether a cluster is defined
    Exists {
        /// Cluster name
        params: Vec<String>,
    },

    /// List clusters
    List {
        /// Optional cluster name filter
        params: Vec<String>,
    },

    /// Resize cluster components
    Flex {
        /// Cluster name
        params: Vec<String>,
    },

    /// Generate shell completions
    Completion {
        /// Shell type
        #[arg(value_enum)]
        shell: clap_complete::Shell,
    },
}
