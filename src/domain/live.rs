use chrono::{DateTime, Local};
use serde::Serialize;

use crate::domain::process::ProcessArea;

pub const MAINTENANCE_ALERT: &str = "Maintenance required";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum MachineState {
    Running,
    Stopped,
}

/// One instantaneous sample. Unrelated to any earlier sample.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct LiveStatus {
    pub area: ProcessArea,
    pub sampled_at: DateTime<Local>,
    pub state: MachineState,
    /// kW
    pub instant_power: f64,
    /// m3/h
    pub instant_gas: f64,
    /// litres/min
    pub instant_water: f64,
    /// kg/h
    pub current_throughput: u64,
    pub alerts: Vec<String>,
}

impl LiveStatus {
    pub fn stopped(area: ProcessArea, alerts: Vec<String>) -> Self {
        Self {
            area,
            sampled_at: Local::now(),
            state: MachineState::Stopped,
            instant_power: 0.0,
            instant_gas: 0.0,
            instant_water: 0.0,
            current_throughput: 0,
            alerts,
        }
    }

    pub fn is_running(&self) -> bool {
        self.state == MachineState::Running
    }
}
