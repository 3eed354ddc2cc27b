use std::time::Duration;

use thiserror::Error;
use tokio::time::Instant;
use tracing::info;

use crate::domain::forecast::{ForecastReport, Prediction, RiskInsight, RiskLevel};
use crate::domain::kpi::MONTHS;
use crate::domain::process::ProcessArea;
use crate::services::kpi_generator::seasonal_multiplier;
use crate::services::sampler::KpiSampler;

pub const FORECAST_DELAY: Duration = Duration::from_millis(2500);

#[derive(Error, Debug, PartialEq, Eq)]
pub enum ForecastError {
    #[error("a forecast is already being processed")]
    AlreadyRunning,
}

/// Randomized projection for `year`. Not derived from any historical series.
pub fn generate_forecast_with_sampler<S: KpiSampler + ?Sized>(
    year: i32,
    sampler: &mut S,
) -> ForecastReport {
    let predictions = MONTHS
        .iter()
        .enumerate()
        .map(|(index, month)| {
            let season = seasonal_multiplier(index);
            let base_oee = 82.0 + sampler.uniform_exclusive(0.0, 5.0);
            let peak_hours = if season > 1.0 { 15 } else { 5 };
            Prediction {
                month: month.to_string(),
                optimistic: (base_oee * 1.08 * season).min(100.0),
                realistic: (base_oee * season).min(100.0),
                pessimistic: (base_oee * 0.90 * season).max(50.0),
                downtime_risk_hours: sampler.uniform_exclusive(0.0, 40.0).floor() as u32 + peak_hours,
            }
        })
        .collect();

    ForecastReport {
        year,
        predictions,
        insights: risk_insights(year),
    }
}

fn risk_insights(year: i32) -> Vec<RiskInsight> {
    vec![
        RiskInsight {
            area: ProcessArea::Washing,
            risk_level: RiskLevel::High,
            probability: 85,
            description: format!(
                "Projected wear on the tunnel hydraulic pumps for Q3 {year} due to higher summer load."
            ),
        },
        RiskInsight {
            area: ProcessArea::Calandras,
            risk_level: RiskLevel::Medium,
            probability: 60,
            description: format!(
                "Possible roller saturation in May {year}. Early preventive maintenance recommended."
            ),
        },
        RiskInsight {
            area: ProcessArea::Selection,
            risk_level: RiskLevel::Low,
            probability: 15,
            description: "Stable flow. Staff efficiency is projected to improve by 5%.".to_string(),
        },
    ]
}

/// A forecast run that has been accepted and completes at `ready_at`.
#[derive(Debug)]
pub struct PendingForecast {
    year: i32,
    ready_at: Instant,
}

impl PendingForecast {
    pub fn ready_at(&self) -> Instant {
        self.ready_at
    }

    /// Waits out the remaining delay, then draws the report.
    pub async fn resolve<S: KpiSampler + ?Sized>(self, sampler: &mut S) -> ForecastReport {
        tokio::time::sleep_until(self.ready_at).await;
        generate_forecast_with_sampler(self.year, sampler)
    }
}

/// The forecast button. Disabled while a run is in flight; a run cannot be cancelled.
#[derive(Debug)]
pub struct ForecastTrigger {
    year: i32,
    delay: Duration,
    processing: bool,
    report: Option<ForecastReport>,
}

impl ForecastTrigger {
    pub fn new(year: i32, delay: Duration) -> Self {
        Self {
            year,
            delay,
            processing: false,
            report: None,
        }
    }

    pub fn is_enabled(&self) -> bool {
        !self.processing
    }

    pub fn report(&self) -> Option<&ForecastReport> {
        self.report.as_ref()
    }

    /// Starts a run. Earlier results are discarded.
    pub fn activate(&mut self) -> Result<PendingForecast, ForecastError> {
        if self.processing {
            return Err(ForecastError::AlreadyRunning);
        }
        self.processing = true;
        self.report = None;
        info!(year = self.year, delay_ms = self.delay.as_millis() as u64, "forecast started");
        Ok(PendingForecast {
            year: self.year,
            ready_at: Instant::now() + self.delay,
        })
    }

    pub fn complete(&mut self, report: ForecastReport) -> &ForecastReport {
        info!(predictions = report.predictions.len(), "forecast ready");
        self.processing = false;
        self.report.insert(report)
    }
}
