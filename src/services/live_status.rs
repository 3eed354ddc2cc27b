use chrono::Local;

use crate::domain::kpi::round_to;
use crate::domain::live::{LiveStatus, MAINTENANCE_ALERT, MachineState};
use crate::domain::process::{ProcessArea, ProcessSpecification};
use crate::services::sampler::{KpiSampler, RngSampler};

const RUNNING_PROBABILITY: f64 = 0.9;
const STOPPED_ALERT_PROBABILITY: f64 = 0.2;

pub fn get_live_process_status(area: ProcessArea, spec: &ProcessSpecification) -> LiveStatus {
    let mut sampler = RngSampler::new(rand::thread_rng());
    get_live_process_status_with_sampler(area, spec, &mut sampler)
}

pub fn get_live_process_status_with_sampler<S: KpiSampler + ?Sized>(
    area: ProcessArea,
    spec: &ProcessSpecification,
    sampler: &mut S,
) -> LiveStatus {
    if !sampler.chance(RUNNING_PROBABILITY) {
        let alerts = if sampler.chance(STOPPED_ALERT_PROBABILITY) {
            vec![MAINTENANCE_ALERT.to_string()]
        } else {
            Vec::new()
        };
        return LiveStatus::stopped(area, alerts);
    }

    let instant_power = round_to(spec.power * sampler.uniform(0.8, 1.1), 2);
    let instant_gas = round_to(spec.gas * sampler.uniform(0.8, 1.1), 2);
    // hourly rate spread over a minute
    let instant_water = round_to(spec.water_rate() / 60.0 * sampler.uniform(0.9, 1.1), 1);
    let current_throughput = (spec.max_throughput * sampler.uniform(0.85, 1.0))
        .floor()
        .max(0.0) as u64;

    LiveStatus {
        area,
        sampled_at: Local::now(),
        state: MachineState::Running,
        instant_power,
        instant_gas,
        instant_water,
        current_throughput,
        alerts: Vec::new(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::FixedSampler;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    fn washing() -> ProcessSpecification {
        ProcessSpecification::default_for(ProcessArea::Washing)
    }

    #[test]
    fn stopped_machine_reports_zeros_and_maintenance_alert() {
        // 0.95 fails the running draw, 0.1 passes the alert draw
        let mut sampler = FixedSampler::new(&[0.95, 0.1]);
        let status = get_live_process_status_with_sampler(ProcessArea::Washing, &washing(), &mut sampler);

        assert_eq!(status.state, MachineState::Stopped);
        assert_eq!(status.instant_power, 0.0);
        assert_eq!(status.instant_gas, 0.0);
        assert_eq!(status.instant_water, 0.0);
        assert_eq!(status.current_throughput, 0);
        assert_eq!(status.alerts, vec![MAINTENANCE_ALERT.to_string()]);
    }

    #[test]
    fn stopped_machine_without_alert() {
        let mut sampler = FixedSampler::new(&[0.95, 0.5]);
        let status = get_live_process_status_with_sampler(ProcessArea::Drying, &washing(), &mut sampler);

        assert!(!status.is_running());
        assert!(status.alerts.is_empty());
        assert_eq!(status.area, ProcessArea::Drying);
    }

    #[test]
    fn running_machine_scales_machine_rates() {
        // running, then lowest multiplier for every rate
        let mut sampler = FixedSampler::new(&[0.0]);
        let status = get_live_process_status_with_sampler(ProcessArea::Washing, &washing(), &mut sampler);

        assert_eq!(status.state, MachineState::Running);
        assert_eq!(status.instant_power, 30.4);
        assert_eq!(status.instant_gas, 8.0);
        assert_eq!(status.instant_water, 4.5);
        assert_eq!(status.current_throughput, 102);
        assert!(status.alerts.is_empty());
    }

    #[test]
    fn running_values_are_never_negative() {
        let mut sampler = RngSampler::new(StdRng::seed_from_u64(8));
        for area in ProcessArea::ALL {
            let spec = ProcessSpecification::default_for(area);
            for _ in 0..200 {
                let status = get_live_process_status_with_sampler(area, &spec, &mut sampler);
                assert!(status.instant_power >= 0.0);
                assert!(status.instant_gas >= 0.0);
                assert!(status.instant_water >= 0.0);
                if status.is_running() {
                    assert!(status.current_throughput as f64 >= spec.max_throughput * 0.85 - 1.0);
                    assert!(status.current_throughput as f64 <= spec.max_throughput);
                } else {
                    assert_eq!(status.current_throughput, 0);
                    assert_eq!(status.instant_power, 0.0);
                }
            }
        }
    }
}
