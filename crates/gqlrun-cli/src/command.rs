use crate::Cli;
use crate::CommandResult;

/// A `gqlrun` subcommand. Global flags (`--quiet`, `--verbose`) are read
/// from `cli`.
pub(crate) trait RunnableCommand: std::fmt::Debug {
    async fn run(self, cli: &Cli) -> CommandResult;
}
