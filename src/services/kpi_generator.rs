use tracing::debug;

use crate::domain::kpi::{self, KpiRecord, MONTHS, ResourceConsumption, round1};
use crate::domain::process::ProcessSpecification;
use crate::services::sampler::{KpiSampler, RngSampler};

/// Assumed working hours per month.
pub const MONTHLY_WORKING_HOURS: f64 = 160.0;

/// Summer peak: June, July and August run hotter.
pub fn seasonal_multiplier(month_index: usize) -> f64 {
    if (5..=7).contains(&month_index) { 1.1 } else { 1.0 }
}

pub fn generate_historical_data(spec: &ProcessSpecification, year: i32) -> Vec<KpiRecord> {
    let mut sampler = RngSampler::new(rand::thread_rng());
    generate_historical_data_with_sampler(spec, year, &mut sampler)
}

/// Builds one [`KpiRecord`] per calendar month, January first.
pub fn generate_historical_data_with_sampler<S: KpiSampler + ?Sized>(
    spec: &ProcessSpecification,
    year: i32,
    sampler: &mut S,
) -> Vec<KpiRecord> {
    let records: Vec<KpiRecord> = MONTHS
        .iter()
        .enumerate()
        .map(|(index, month)| generate_month(spec, year, index, month, sampler))
        .collect();
    debug!(year, months = records.len(), "generated historical kpi series");
    records
}

fn generate_month<S: KpiSampler + ?Sized>(
    spec: &ProcessSpecification,
    year: i32,
    month_index: usize,
    month: &str,
    sampler: &mut S,
) -> KpiRecord {
    let season = seasonal_multiplier(month_index);

    let availability = round1(sampler.uniform(85.0, 98.0).min(100.0));
    let performance_draw = (sampler.uniform(80.0, 95.0) * season).min(100.0);
    let performance = round1(performance_draw);
    let quality = round1(sampler.uniform(92.0, 99.5).min(100.0));
    let oee = kpi::oee(availability, performance, quality);

    // Volumes follow the unrounded draw.
    let utilization = performance_draw / 100.0;
    let throughput_kg = floor_u64(spec.max_throughput * utilization * MONTHLY_WORKING_HOURS);
    let resources = ResourceConsumption {
        electricity: monthly_total(spec.power, utilization),
        gas: monthly_total(spec.gas, utilization),
        water: monthly_total(spec.water_rate(), utilization),
        steam: monthly_total(spec.steam, utilization),
    };

    // Not clamped, may exceed 100.
    let labor_efficiency = round1(sampler.uniform(80.0, 105.0));
    let ole = kpi::ole(availability, labor_efficiency, quality);

    let learning_percentage = (sampler.uniform(90.0, 100.0) + month_index as f64 * 0.5).min(100.0);
    let cycle_time = sampler.uniform(25.0, 35.0);
    let downtime_minutes = floor_u64(sampler.uniform_exclusive(0.0, 500.0));

    KpiRecord {
        month: month.to_string(),
        year,
        availability,
        performance,
        quality,
        oee,
        labor_efficiency,
        ole,
        learning_percentage,
        throughput_kg,
        cycle_time,
        capacity_utilization: round1(utilization * 100.0),
        downtime_minutes,
        resources,
    }
}

fn monthly_total(hourly_rate: f64, utilization: f64) -> u64 {
    floor_u64(hourly_rate * MONTHLY_WORKING_HOURS * utilization)
}

fn floor_u64(value: f64) -> u64 {
    value.floor().max(0.0) as u64
}
