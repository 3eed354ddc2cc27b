use std::collections::BTreeMap;

use crate::domain::kpi::{KpiRecord, round1};
use crate::domain::process::ProcessArea;

/// Folds per-area series into the plant-wide series.
///
/// - OEE is the mean across areas, rounded to one decimal.
/// - Throughput and electricity are summed across areas.
/// - Every other field comes from the washing series (or the first series
///   when washing is absent).
/// - The result is as long as the shortest input series.
pub fn compose_overview(series: &BTreeMap<ProcessArea, Vec<KpiRecord>>) -> Vec<KpiRecord> {
    let base = match series
        .get(&ProcessArea::Washing)
        .or_else(|| series.values().next())
    {
        Some(base) => base,
        None => return Vec::new(),
    };
    let months = series.values().map(Vec::len).min().unwrap_or(0);
    let area_count = series.len() as f64;

    (0..months)
        .map(|index| {
            let mut record = base[index].clone();
            let mut total_oee = 0.0;
            let mut total_kg = 0;
            let mut total_electricity = 0;
            for records in series.values() {
                let month = &records[index];
                total_oee += month.oee;
                total_kg += month.throughput_kg;
                total_electricity += month.resources.electricity;
            }
            record.oee = round1(total_oee / area_count);
            record.throughput_kg = total_kg;
            record.resources.electricity = total_electricity;
            record
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::record_with;

    fn series_of(oee: f64, kg: u64, kwh: u64) -> Vec<KpiRecord> {
        vec![record_with("Jan", oee, kg, kwh), record_with("Feb", oee + 1.0, kg * 2, kwh * 2)]
    }

    #[test]
    fn averages_oee_and_sums_throughput_and_electricity() {
        let mut series = BTreeMap::new();
        series.insert(ProcessArea::Selection, series_of(80.0, 100, 10));
        series.insert(ProcessArea::Washing, series_of(85.0, 200, 20));
        series.insert(ProcessArea::Drying, series_of(90.0, 300, 30));
        series.insert(ProcessArea::Calandras, series_of(95.0, 400, 40));

        let overview = compose_overview(&series);

        assert_eq!(overview.len(), 2);
        assert_eq!(overview[0].month, "Jan");
        assert_eq!(overview[0].oee, 87.5);
        assert_eq!(overview[0].throughput_kg, 1000);
        assert_eq!(overview[0].resources.electricity, 100);
        assert_eq!(overview[1].oee, 88.5);
        assert_eq!(overview[1].throughput_kg, 2000);
        assert_eq!(overview[1].resources.electricity, 200);
    }

    #[test]
    fn other_fields_come_from_washing() {
        let mut washing = series_of(85.0, 200, 20);
        washing[0].resources.gas = 777;
        washing[0].cycle_time = 31.5;

        let mut series = BTreeMap::new();
        series.insert(ProcessArea::Selection, series_of(80.0, 100, 10));
        series.insert(ProcessArea::Washing, washing);

        let overview = compose_overview(&series);
        assert_eq!(overview[0].resources.gas, 777);
        assert_eq!(overview[0].cycle_time, 31.5);
        assert_eq!(overview[0].oee, 82.5);
    }

    #[test]
    fn empty_input_gives_empty_overview() {
        assert!(compose_overview(&BTreeMap::new()).is_empty());
    }
}
