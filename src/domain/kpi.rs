use serde::{Deserialize, Serialize};

pub const MONTHS: [&str; 12] = [
    "Jan", "Feb", "Mar", "Apr", "May", "Jun", "Jul", "Aug", "Sep", "Oct", "Nov", "Dec",
];

/// Monthly totals derived from the hourly machine rates.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct ResourceConsumption {
    /// kWh
    pub electricity: u64,
    /// m3
    pub gas: u64,
    /// litres
    pub water: u64,
    /// m3
    pub steam: u64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct KpiRecord {
    pub month: String,
    pub year: i32,

    pub availability: f64,
    pub performance: f64,
    pub quality: f64,
    pub oee: f64,

    /// May exceed 100.
    pub labor_efficiency: f64,
    pub ole: f64,
    pub learning_percentage: f64,

    pub throughput_kg: u64,
    /// minutes per batch
    pub cycle_time: f64,
    pub capacity_utilization: f64,
    pub downtime_minutes: u64,

    pub resources: ResourceConsumption,
}

pub fn round_to(value: f64, decimals: i32) -> f64 {
    let factor = 10f64.powi(decimals);
    (value * factor).round() / factor
}

pub fn round1(value: f64) -> f64 {
    round_to(value, 1)
}

/// Availability x Performance x Quality on a 0-100 scale.
pub fn oee(availability: f64, performance: f64, quality: f64) -> f64 {
    round1(availability * performance * quality / 10_000.0)
}

/// Same shape as [`oee`] with labor efficiency in place of performance.
pub fn ole(availability: f64, labor_efficiency: f64, quality: f64) -> f64 {
    round1(availability * labor_efficiency * quality / 10_000.0)
}
