use std::process::ExitCode;

use crate::commands::base_commands::{Commands, close_session, open_tab};
use crate::domain::session::Tab;
use crate::services::dashboard::load_series_with_seed;
use crate::services::oee_plot::write_oee_chart_png;

const OVERVIEW_TARGET_OEE: f64 = 85.0;

pub fn plot_command(cmd: Commands) -> ExitCode {
    if let Commands::Plot {
        process,
        output,
        target,
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
        let target = target.unwrap_or_else(|| match selection.area() {
            Some(area) => config.target_board().get(area).target_oee,
            None => OVERVIEW_TARGET_OEE,
        });
        let series = load_series_with_seed(&config, selection, simulation.seed);
        let title = format!("Monthly OEE - {selection} {}", config.year);

        match write_oee_chart_png(&output, &title, &series, Some(target)) {
            Ok(()) => println!("OEE chart written to {output}"),
            Err(e) => {
                eprintln!("Failed to plot OEE: {e:?}");
                return ExitCode::FAILURE;
            }
        }
        close_session(&mut session);
    }
    ExitCode::SUCCESS
}
