use std::collections::BTreeMap;
use std::time::Duration;

use rand::SeedableRng;
use rand::rngs::StdRng;
use serde::Serialize;
use tracing::info;

use crate::domain::kpi::{KpiRecord, round1};
use crate::domain::plant::PlantConfig;
use crate::domain::process::{ProcessArea, ProcessSelection, ProcessSpecification};
use crate::services::kpi_generator::{generate_historical_data, generate_historical_data_with_sampler};
use crate::services::live_ticker::{LiveFeed, start_live_feed, start_unseeded_live_feed};
use crate::services::overview::compose_overview;
use crate::services::sampler::{KpiSampler, RngSampler};

/// Headline cards shown above the charts.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DashboardSummary {
    pub average_oee: f64,
    pub total_throughput_kg: u64,
    pub last_labor_efficiency: f64,
    pub last_cycle_time: f64,
}

impl DashboardSummary {
    pub fn from_series(series: &[KpiRecord]) -> Self {
        let average_oee = if series.is_empty() {
            0.0
        } else {
            round1(series.iter().map(|r| r.oee).sum::<f64>() / series.len() as f64)
        };
        let last = series.last();
        Self {
            average_oee,
            total_throughput_kg: series.iter().map(|r| r.throughput_kg).sum(),
            last_labor_efficiency: last.map(|r| r.labor_efficiency).unwrap_or(0.0),
            last_cycle_time: last.map(|r| r.cycle_time).unwrap_or(0.0),
        }
    }
}

/// The 12-month series for a selection: one area, or the plant-wide overview.
pub fn load_series<S: KpiSampler + ?Sized>(
    config: &PlantConfig,
    selection: ProcessSelection,
    sampler: &mut S,
) -> Vec<KpiRecord> {
    collect_series(config, selection, |spec, year| {
        generate_historical_data_with_sampler(spec, year, &mut *sampler)
    })
}

/// Seeded runs are reproducible; without a seed every area draws from the
/// thread-local rng.
pub fn load_series_with_seed(
    config: &PlantConfig,
    selection: ProcessSelection,
    seed: Option<u64>,
) -> Vec<KpiRecord> {
    match seed {
        Some(seed) => load_series(config, selection, &mut RngSampler::new(StdRng::seed_from_u64(seed))),
        None => collect_series(config, selection, generate_historical_data),
    }
}

fn collect_series<F>(config: &PlantConfig, selection: ProcessSelection, mut generate: F) -> Vec<KpiRecord>
where
    F: FnMut(&ProcessSpecification, i32) -> Vec<KpiRecord>,
{
    match selection {
        ProcessSelection::Area(area) => generate(&config.spec(area), config.year),
        ProcessSelection::General => {
            let series: BTreeMap<ProcessArea, Vec<KpiRecord>> = ProcessArea::ALL
                .into_iter()
                .map(|area| (area, generate(&config.spec(area), config.year)))
                .collect();
            compose_overview(&series)
        }
    }
}

/// Owns what the dashboard shows for the current selection, including the
/// live feed of a single area.
pub struct DashboardController {
    config: PlantConfig,
    tick_period: Duration,
    seed: Option<u64>,
    generation: u64,
    selection: ProcessSelection,
    series: Vec<KpiRecord>,
    live: Option<LiveFeed>,
}

impl DashboardController {
    pub fn new(config: PlantConfig, tick_period: Duration, seed: Option<u64>) -> Self {
        Self {
            config,
            tick_period,
            seed,
            generation: 0,
            selection: ProcessSelection::General,
            series: Vec::new(),
            live: None,
        }
    }

    pub fn selection(&self) -> ProcessSelection {
        self.selection
    }

    pub fn series(&self) -> &[KpiRecord] {
        &self.series
    }

    pub fn summary(&self) -> DashboardSummary {
        DashboardSummary::from_series(&self.series)
    }

    pub fn live_feed(&mut self) -> Option<&mut LiveFeed> {
        self.live.as_mut()
    }

    /// Switches the selection. The previous live feed is cancelled before
    /// anything new is generated. Must run inside a tokio runtime.
    pub fn select(&mut self, selection: ProcessSelection) {
        if let Some(mut feed) = self.live.take() {
            feed.cancel();
        }
        self.generation += 1;
        self.selection = selection;

        self.series = load_series_with_seed(&self.config, selection, self.seed_for(0));
        info!(selection = %selection, months = self.series.len(), "dashboard selection changed");

        if let ProcessSelection::Area(area) = selection {
            let spec = self.config.spec(area);
            let feed = match self.seed_for(1) {
                Some(seed) => start_live_feed(
                    area,
                    spec,
                    self.tick_period,
                    RngSampler::new(StdRng::seed_from_u64(seed)),
                ),
                None => start_unseeded_live_feed(area, spec, self.tick_period),
            };
            self.live = Some(feed);
        }
    }

    /// Stops the live feed, e.g. when navigating away from the dashboard.
    pub fn leave(&mut self) {
        if let Some(mut feed) = self.live.take() {
            feed.cancel();
        }
    }

    /// Independent streams for the series and the live feed of one selection.
    fn seed_for(&self, stream: u64) -> Option<u64> {
        self.seed
            .map(|seed| seed.wrapping_add(self.generation.wrapping_mul(2) + stream))
    }
}
