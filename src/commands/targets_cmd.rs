use std::process::ExitCode;

use crate::commands::base_commands::{Commands, close_session, open_tab};
use crate::commands::report_format::format_targets;
use crate::domain::session::Tab;
use crate::services::plant_config_yaml::load_plant_config;
use crate::services::target_config::{TargetAssignment, apply_target_changes, parse_assignment};

pub fn targets_command(cmd: Commands) -> ExitCode {
    if let Commands::Targets {
        role,
        set,
        reset,
        config,
    } = cmd
    {
        let mut session = match open_tab(role, Tab::Configuration) {
            Ok(session) => session,
            Err(e) => {
                eprintln!("Failed to open configuration: {e:?}");
                return ExitCode::FAILURE;
            }
        };
        let config = match load_plant_config(config.as_deref()) {
            Ok(config) => config,
            Err(e) => {
                eprintln!("Failed to load plant config: {e:?}");
                return ExitCode::FAILURE;
            }
        };

        let assignments = match set
            .iter()
            .map(|input| parse_assignment(input))
            .collect::<Result<Vec<TargetAssignment>, _>>()
        {
            Ok(assignments) => assignments,
            Err(e) => {
                eprintln!("Failed to parse target edit: {e:?}");
                return ExitCode::FAILURE;
            }
        };

        let mut board = config.target_board();
        if let Err(e) = apply_target_changes(&session, &mut board, &reset, &assignments) {
            eprintln!("Failed to update targets: {e:?}");
            return ExitCode::FAILURE;
        }

        println!("{}", format_targets(&board));
        if !assignments.is_empty() || !reset.is_empty() {
            println!("{}", board.save());
        }
        close_session(&mut session);
    }
    ExitCode::SUCCESS
}
