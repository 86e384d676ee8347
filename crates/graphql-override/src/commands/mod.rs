mod apply;
mod config;

use crate::Cli;
use crate::CommandResult;
use apply::ApplyCmd;
use config::ConfigCmd;

#[derive(Debug, clap::Parser)]
#[command(name = "graphql-override")]
pub(crate) enum CommandEnum {
    /// Apply one overrides document to one schema.
    Apply(Box<ApplyCmd>),

    /// Run every override job listed in a `.graphqlconfig` file.
    Config(Box<ConfigCmd>),
}
impl CommandEnum {
    pub(crate) async fn run(self, cli: Cli) -> CommandResult {
        match self {
            Self::Apply(cmd) => cmd.run(cli).await,
            Self::Config(cmd) => cmd.run(cli).await,
        }
    }
}
