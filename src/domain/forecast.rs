use serde::Serialize;

use crate::domain::process::ProcessArea;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Prediction {
    pub month: String,
    pub optimistic: f64,
    pub realistic: f64,
    pub pessimistic: f64,
    /// Probable hours of stoppage in the month.
    pub downtime_risk_hours: u32,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum RiskLevel {
    Low,
    Medium,
    High,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RiskInsight {
    pub area: ProcessArea,
    pub risk_level: RiskLevel,
    pub probability: u8,
    pub description: String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ForecastReport {
    pub year: i32,
    pub predictions: Vec<Prediction>,
    pub insights: Vec<RiskInsight>,
}
