//! Command dispatch: map subcommands to their bounds, validate, report

use std::io;

use clap::CommandFactory;
use clap_complete::generate;
use tracing::debug;

use crate::cli::args::{Cli, Commands};
use crate::cli::error::CliResult;
use crate::cli::output;
use crate::cli::params::{ActionArgs, ActionSpec, TracingSink};

// Positional-argument bounds per action. The cluster name is the single
// required argument everywhere except `list`, which also runs bare.
const CREATE: ActionSpec = ActionSpec::exact("create", 1);
const DESTROY: ActionSpec = ActionSpec::exact("destroy", 1);
const START: ActionSpec = ActionSpec::exact("start", 1);
const STOP: ActionSpec = ActionSpec::exact("stop", 1);
const STATUS: ActionSpec = ActionSpec::exact("status", 1);
const EXISTS: ActionSpec = ActionSpec::exact("exists", 1);
const LIST: ActionSpec = ActionSpec::bounded("list", 0, 1);
const FLEX: ActionSpec = ActionSpec::unbounded("flex", 1);

pub fn execute_command(cli: &Cli) -> CliResult<()> {
    let (spec, params) = match &cli.command {
        Commands::Completion { shell } => {
            let mut cmd = Cli::command();
            let name = cmd.get_name().to_string();
            generate(*shell, &mut cmd, name, &mut io::stdout());
            return Ok(());
        }
        Commands::Create { params } => (CREATE, params),
        Commands::Destroy { params } => (DESTROY, params),
        Commands::Start { params } => (START, params),
        Commands::Stop { params } => (STOP, params),
        Commands::Status { params } => (STATUS, params),
        Commands::Exists { params } => (EXISTS, params),
        Commands::List { params } => (LIST, params),
        Commands::Flex { params } => (FLEX, params),
    };

    let args = ActionArgs {
        action: spec,
        parameters: params.clone(),
        definitions: cli.define.clone(),
        sysprops: cli.sysprop.clone(),
        debug: cli.debug,
    };
    debug!("parsed invocation: {}", args);

    args.validate(&mut TracingSink)?;
    report_accepted(&args);
    Ok(())
}

/// Print the validated invocation; action execution belongs to the
/// cluster manager client.
fn report_accepted(args: &ActionArgs) {
    output::action("action", args.action.name());
    if let Some(name) = args.cluster_name() {
        output::detail(&format!("cluster: {name}"));
    }
    if !args.definitions.is_empty() {
        output::detail(&format!("definitions: {}", args.definitions.len()));
    }
    if !args.sysprops.is_empty() {
        output::detail(&format!("system properties: {}", args.sysprops.len()));
    }
}
