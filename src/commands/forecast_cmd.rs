use std::process::ExitCode;
use std::time::Duration;

use tokio::time::Instant;
use tracing::debug;

use crate::commands::base_commands::{Commands, close_session, open_tab};
use crate::commands::report_format::format_forecast_report;
use crate::domain::session::Tab;
use crate::services::export::write_export;
use crate::services::forecast::ForecastTrigger;

pub async fn forecast_command(cmd: Commands) -> ExitCode {
    if let Commands::Forecast {
        output,
        format,
        delay_ms,
        simulation,
    } = cmd
    {
        let mut session = match open_tab(simulation.role, Tab::Reports) {
            Ok(session) => session,
            Err(e) => {
                eprintln!("Failed to open reports: {e:?}");
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

        let mut trigger = ForecastTrigger::new(config.year + 1, Duration::from_millis(delay_ms));
        let pending = match trigger.activate() {
            Ok(pending) => pending,
            Err(e) => {
                eprintln!("Failed to run forecast: {e:?}");
                return ExitCode::FAILURE;
            }
        };
        debug!(enabled = trigger.is_enabled(), "forecast control");
        let remaining = pending.ready_at().saturating_duration_since(Instant::now());
        println!("Processing historical data ({} ms)...", remaining.as_millis());

        let mut sampler = simulation.sampler();
        let report = trigger.complete(pending.resolve(&mut sampler).await);
        println!("{}", format_forecast_report(report));

        if let Some(output) = output {
            let Some(report) = trigger.report() else {
                eprintln!("Failed to export forecast: no report available");
                return ExitCode::FAILURE;
            };
            if let Err(e) = write_export(&output, report, format) {
                eprintln!("Failed to export forecast: {e:?}");
                return ExitCode::FAILURE;
            }
            println!("Forecast written to {output}");
        }
        close_session(&mut session);
    }
    ExitCode::SUCCESS
}
