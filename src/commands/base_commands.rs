use clap::{Args, Parser, Subcommand};
use clap_complete::Shell;
use rand::rngs::StdRng;
use tracing::info;

use crate::domain::plant::PlantConfig;
use crate::domain::process::{ProcessArea, ProcessSelection};
use crate::domain::session::{AppSession, Role, SessionError, Tab};
use crate::services::export::ExportFormat;
use crate::services::forecast::FORECAST_DELAY;
use crate::services::live_ticker::LIVE_TICK_PERIOD;
use crate::services::plant_config_yaml::{PlantConfigError, load_plant_config};
use crate::services::sampler::RngSampler;

#[derive(Parser)]
#[command(author, version, about = "Simulated OEE and resource KPIs for a laundry plant")]
pub struct CliArgs {
    /// Increase log verbosity (-v info, -vv debug). RUST_LOG overrides.
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    pub verbose: u8,
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Args, Clone, Debug)]
pub struct SimulationArgs {
    /// administrator, maintenance or operator
    #[arg(short, long, default_value = "operator")]
    pub role: Role,
    /// Plant configuration YAML (built-in plant when omitted)
    #[arg(short, long)]
    pub config: Option<String>,
    /// Seed for reproducible draws
    #[arg(long)]
    pub seed: Option<u64>,
}

impl SimulationArgs {
    pub fn load_config(&self) -> Result<PlantConfig, PlantConfigError> {
        load_plant_config(self.config.as_deref())
    }

    pub fn sampler(&self) -> RngSampler<StdRng> {
        RngSampler::from_seed_option(self.seed)
    }
}

/// Signs `role` in and opens `tab`, as the front end does before showing a page.
pub fn open_tab(role: Role, tab: Tab) -> Result<AppSession, SessionError> {
    let mut session = AppSession::new();
    session.login(role);
    session.navigate(tab)?;
    info!(
        %role,
        tab = %session.active_tab(),
        visible = ?session.visible_tabs(),
        "session opened"
    );
    Ok(session)
}

pub fn close_session(session: &mut AppSession) {
    if let Some(role) = session.role() {
        info!(%role, "session closed");
    }
    session.logout();
}

#[derive(Subcommand)]
pub enum Commands {
    /// Print the 12-month KPI series of one area or the plant overview
    History {
        /// general, selection, washing, drying or calandras
        #[arg(short, long, default_value = "general")]
        process: ProcessSelection,
        /// Optional export file
        #[arg(short, long)]
        output: Option<String>,
        /// Export format
        #[arg(short, long, value_enum, default_value_t = ExportFormat::Yaml)]
        format: ExportFormat,
        #[command(flatten)]
        simulation: SimulationArgs,
    },
    /// Stream live machine status for one area
    Live {
        /// selection, washing, drying or calandras
        #[arg(short, long)]
        process: ProcessArea,
        /// Number of ticks before stopping
        #[arg(short, long, default_value_t = 5)]
        ticks: usize,
        /// Milliseconds between ticks
        #[arg(long, default_value_t = LIVE_TICK_PERIOD.as_millis() as u64)]
        interval_ms: u64,
        #[command(flatten)]
        simulation: SimulationArgs,
    },
    /// Run the predictive report for the year after the simulated one
    Forecast {
        /// Optional export file
        #[arg(short, long)]
        output: Option<String>,
        /// Export format
        #[arg(short, long, value_enum, default_value_t = ExportFormat::Yaml)]
        format: ExportFormat,
        /// Milliseconds the forecast takes to "process"
        #[arg(long, default_value_t = FORECAST_DELAY.as_millis() as u64)]
        delay_ms: u64,
        #[command(flatten)]
        simulation: SimulationArgs,
    },
    /// Show or edit KPI targets in memory (nothing is persisted)
    Targets {
        /// administrator, maintenance or operator
        #[arg(short, long)]
        role: Role,
        /// Edit as <area>.<field>=<value>, e.g. washing.target-oee=85.7
        #[arg(short, long)]
        set: Vec<String>,
        /// Restore an area's defaults before applying edits
        #[arg(long)]
        reset: Vec<ProcessArea>,
        /// Plant configuration YAML (built-in plant when omitted)
        #[arg(short, long)]
        config: Option<String>,
    },
    /// Render the monthly OEE of one area or the overview into a PNG chart
    Plot {
        /// general, selection, washing, drying or calandras
        #[arg(short, long, default_value = "general")]
        process: ProcessSelection,
        /// Output PNG file
        #[arg(short, long)]
        output: String,
        /// Target line; defaults to the area's configured target OEE
        #[arg(short, long)]
        target: Option<f64>,
        #[command(flatten)]
        simulation: SimulationArgs,
    },
    /// Generate shell completion scripts
    Completions {
        /// Shell to generate completions for
        #[arg(value_enum)]
        shell: Shell,
    },
}
