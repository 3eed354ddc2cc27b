use crate::domain::kpi::{KpiRecord, ResourceConsumption};
use crate::services::sampler::KpiSampler;

/// Replays a fixed cycle of fractions in `[0, 1]`.
///
/// `uniform(min, max)` yields `min + f * (max - min)` and `chance(p)` yields
/// `f < p`, where `f` is the next fraction in the cycle.
pub struct FixedSampler {
    fractions: Vec<f64>,
    position: usize,
}

impl FixedSampler {
    pub fn new(fractions: &[f64]) -> Self {
        Self {
            fractions: fractions.to_vec(),
            position: 0,
        }
    }

    pub fn constant(fraction: f64) -> Self {
        Self::new(&[fraction])
    }

    fn next_fraction(&mut self) -> f64 {
        if self.fractions.is_empty() {
            return 0.0;
        }
        let fraction = self.fractions[self.position % self.fractions.len()];
        self.position += 1;
        fraction
    }
}

impl KpiSampler for FixedSampler {
    fn uniform(&mut self, min: f64, max: f64) -> f64 {
        min + self.next_fraction() * (max - min)
    }

    fn uniform_exclusive(&mut self, min: f64, max: f64) -> f64 {
        min + self.next_fraction() * (max - min)
    }

    fn chance(&mut self, probability: f64) -> bool {
        self.next_fraction() < probability
    }
}

pub fn record_with(month: &str, oee: f64, throughput_kg: u64, electricity: u64) -> KpiRecord {
    KpiRecord {
        month: month.to_string(),
        year: 2025,
        availability: 90.0,
        performance: 90.0,
        quality: 95.0,
        oee,
        labor_efficiency: 92.0,
        ole: 76.9,
        learning_percentage: 95.0,
        throughput_kg,
        cycle_time: 30.0,
        capacity_utilization: 90.0,
        downtime_minutes: 120,
        resources: ResourceConsumption {
            electricity,
            gas: 10,
            water: 20,
            steam: 30,
        },
    }
}
