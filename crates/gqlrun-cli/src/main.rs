mod cli;
mod command;
mod command_result;
mod commands;
mod output_utils;

use clap::Parser;
pub(crate) use cli::Cli;
pub(crate) use command::RunnableCommand;
pub(crate) use command_result::CommandResult;

const DEFAULT_LOG_LEVEL: tracing::Level = tracing::Level::INFO;

#[tokio::main(flavor = "multi_thread", worker_threads = 4)]
async fn main() -> std::process::ExitCode {
    let cli = Cli::parse();
    let warnings = setup_logger(&cli);
    for warning in warnings {
        log::warn!("{warning}");
    }
    cli.run().await.emit()
}

/// `--verbose` and `--quiet` win over the `LOG_LEVEL` environment variable.
/// Returns warnings to log once the subscriber is installed.
fn setup_logger(cli: &Cli) -> Vec<String> {
    let mut warnings = vec![];
    let log_level = if cli.verbose {
        tracing::Level::DEBUG
    } else if cli.quiet {
        tracing::Level::ERROR
    } else {
        match std::env::var("LOG_LEVEL").map(|s| s.trim().to_ascii_lowercase()).as_deref() {
            Ok("trace") => tracing::Level::TRACE,
            Ok("debug" | "verbose") => tracing::Level::DEBUG,
            Ok("info") => tracing::Level::INFO,
            Ok("warn") => tracing::Level::WARN,
            Ok("error") => tracing::Level::ERROR,
            Ok(other) => {
                warnings.push(format!(
                    "Invalid `LOG_LEVEL` environment variable value: `{other}`",
                ));
                DEFAULT_LOG_LEVEL
            },
            Err(_) => DEFAULT_LOG_LEVEL,
        }
    };

    tracing_subscriber::fmt()
        .with_max_level(log_level)
        .with_writer(std::io::stderr)
        .init();
    log::trace!("Logging level set to `{log_level}`.");
    warnings
}
