use crate::output_utils;
use crate::Cli;
use crate::CommandResult;
use crate::OverrideJob;
use crate::RunnableCommand;
use libgraphql_override::SchemaInput;
use std::path::PathBuf;

#[derive(Debug, clap::Args)]
pub(crate) struct ApplyCmd {
    #[arg(
        help="Base schema: a path to a GraphQL SDL file, or SDL text.",
        long,
        short='s',
    )]
    pub(crate) schema: String,

    #[arg(
        help="Overrides document: a path to a GraphQL SDL file, or SDL text.",
        long,
        short='r',
    )]
    pub(crate) overrides: String,

    #[arg(
        help="Path the merged schema is written to. Missing parent \
             directories are created.",
        long,
        short='o',
    )]
    pub(crate) output: PathBuf,
}
impl ApplyCmd {
    pub(crate) fn job(self) -> OverrideJob {
        OverrideJob {
            output: self.output,
            overrides: SchemaInput::infer(self.overrides),
            schema: SchemaInput::infer(self.schema),
        }
    }
}

#[inherent::inherent]
impl RunnableCommand for ApplyCmd {
    pub async fn run(self, _cli: Cli) -> CommandResult {
        match self.job().run() {
            Ok(output) => CommandResult::stdout(format_args!(
                "{} new schema saved to: {}",
                output_utils::GREEN_CHECK,
                output.display(),
            )),

            Err(err) => CommandResult::stderr(format_args!(
                "{} {err:#}",
                output_utils::RED_X,
            )),
        }
    }
}
