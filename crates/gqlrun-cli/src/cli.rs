use crate::CommandResult;
use crate::commands;
use crate::commands::check::CheckCmd;

/// Checks GraphQL request documents before they are executed against a
/// `gqlrun` schema. With no subcommand, `gqlrun` checks the working
/// directory.
#[derive(clap::Parser, Debug)]
#[command(name = "gqlrun", version)]
pub(crate) struct Cli {
    #[command(subcommand)]
    pub(crate) cmd: Option<commands::CommandEnum>,

    #[arg(
        global=true,
        help="Only report problems; print nothing when every document parses.",
        long,
        short='q',
    )]
    pub(crate) quiet: bool,

    #[arg(
        conflicts_with="quiet",
        global=true,
        help="Enable verbose output.",
        long,
        short='v',
    )]
    pub(crate) verbose: bool,
}

impl Cli {
    pub(crate) async fn run(mut self) -> CommandResult {
        match self.cmd.take() {
            Some(cmd) => cmd.run(&self).await,
            None => {
                log::debug!("No subcommand given; checking the working directory.");
                CheckCmd::for_working_directory().run(&self).await
            },
        }
    }
}
