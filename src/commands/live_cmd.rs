use std::process::ExitCode;
use std::time::Duration;

use crate::commands::base_commands::{Commands, close_session, open_tab};
use crate::commands::report_format::format_live_status;
use crate::domain::process::ProcessSelection;
use crate::domain::session::Tab;
use crate::services::dashboard::DashboardController;

pub async fn live_command(cmd: Commands) -> ExitCode {
    if let Commands::Live {
        process,
        ticks,
        interval_ms,
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
        if interval_ms == 0 {
            eprintln!("Failed to start live feed: interval must be at least 1 ms");
            return ExitCode::FAILURE;
        }

        session.select_process(ProcessSelection::Area(process));
        let mut dashboard =
            DashboardController::new(config, Duration::from_millis(interval_ms), simulation.seed);
        dashboard.select(session.selected_process());
        let summary = dashboard.summary();
        let months = dashboard.series().len();
        println!(
            "{}: average OEE {:.1}% over {months} months | total {} kg",
            dashboard.selection(),
            summary.average_oee,
            summary.total_throughput_kg
        );

        if let Some(feed) = dashboard.live_feed() {
            println!("Live feed for {} every {interval_ms} ms", feed.area());
            for _ in 0..ticks {
                match feed.next().await {
                    Some(status) => println!("{}", format_live_status(&status)),
                    None => break,
                }
            }
        }
        dashboard.leave();
        close_session(&mut session);
    }
    ExitCode::SUCCESS
}
