mod build;
mod dump;

use crate::Cli;
use crate::CommandResult;
use build::BuildCmd;
#[cfg(test)]
pub(crate) use build::build_target;
use dump::DumpCmd;

#[derive(Debug, clap::Parser)]
#[command(name = "graphql-transform")]
pub(crate) enum CommandEnum {
    /// Render every build target described in a config file.
    Build(Box<BuildCmd>),

    /// Print the data a template would receive for a set of GraphQL files.
    Dump(Box<DumpCmd>),
}
impl CommandEnum {
    pub(crate) async fn run(self, cli: Cli) -> CommandResult {
        match self {
            Self::Build(cmd) => cmd.run(cli).await,
            Self::Dump(cmd) => cmd.run(cli).await,
        }
    }
}
