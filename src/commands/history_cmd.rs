use std::process::ExitCode;

use crate::commands::base_commands::{Commands, close_session, open_tab};
use crate::commands::report_format::format_series_report;
use crate::domain::session::Tab;
use crate::services::dashboard::load_series_with_seed;
use crate::services::export::write_export;

pub fn history_command(cmd: Commands) -> ExitCode {
    if let Commands::History {
        process,
        output,
        format,
        simulation,
    } = cmd
    {
        let mut session = match open_tab(simulation.role, Tab::Dashboard) {
            Ok(session) => session,
            Err(e) => {
                eprintln!("Failed to open dashboard: {e:?}");
                return ExitCode::FAILURE;
            }
        };
        let config = match simulation.load_config() {
            Ok(config) => config,
            Err(e) => {
                eprintln!("Failed to load plant config: {e:?}");
                return ExitCode::FAILURE;
            }
        };

        session.select_process(process);
        let selection = session.selected_process();
        let series = load_series_with_seed(&config, selection, simulation.seed);
        let title = format!("{} / {selection}", config.name);
        println!("{}", format_series_report(&title, config.year, &series));

        if let Some(output) = output {
            if let Err(e) = write_export(&output, &series, format) {
                eprintln!("Failed to export KPI history: {e:?}");
                return ExitCode::FAILURE;
            }
            println!("KPI history written to {output}");
        }
        close_session(&mut session);
    }
    ExitCode::SUCCESS
}
