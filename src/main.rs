mod commands;
mod domain;
mod logging;
mod services;
#[cfg(test)]
mod test_support;

use std::process::ExitCode;

use crate::commands::base_commands::{CliArgs, Commands};
use crate::commands::forecast_cmd::forecast_command;
use crate::commands::history_cmd::history_command;
use crate::commands::live_cmd::live_command;
use crate::commands::plot_cmd::plot_command;
use crate::commands::targets_cmd::targets_command;
use crate::logging::init_logging;
use clap::{CommandFactory, Parser};
use clap_complete::generate;

#[tokio::main]
async fn main() -> ExitCode {
    let args = CliArgs::parse();
    init_logging(args.verbose);

    match args.command {
        cmd @ Commands::History { .. } => history_command(cmd),
        cmd @ Commands::Live { .. } => live_command(cmd).await,
        cmd @ Commands::Forecast { .. } => forecast_command(cmd).await,
        cmd @ Commands::Targets { .. } => targets_command(cmd),
        cmd @ Commands::Plot { .. } => plot_command(cmd),
        Commands::Completions { shell } => {
            let mut command = CliArgs::command();
            let name = command.get_name().to_string();
            generate(shell, &mut command, name, &mut std::io::stdout());
            ExitCode::SUCCESS
        }
    }
}
