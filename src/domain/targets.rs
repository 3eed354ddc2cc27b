use std::collections::BTreeMap;
use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::domain::process::ProcessArea;

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ProcessTargets {
    pub target_oee: f64,
    pub target_labor_efficiency: f64,
    /// kg/h
    pub expected_throughput: f64,
}

impl ProcessTargets {
    pub fn default_for(area: ProcessArea) -> Self {
        let (target_oee, target_labor_efficiency, expected_throughput) = match area {
            ProcessArea::Selection => (90.0, 95.0, 110.0),
            ProcessArea::Washing => (85.0, 90.0, 115.0),
            // mostly automated
            ProcessArea::Drying => (88.0, 100.0, 190.0),
            ProcessArea::Calandras => (82.0, 85.0, 180.0),
        };
        Self {
            target_oee,
            target_labor_efficiency,
            expected_throughput,
        }
    }

    pub fn get(&self, field: TargetField) -> f64 {
        match field {
            TargetField::TargetOee => self.target_oee,
            TargetField::TargetLaborEfficiency => self.target_labor_efficiency,
            TargetField::ExpectedThroughput => self.expected_throughput,
        }
    }

    fn set(&mut self, field: TargetField, value: f64) {
        match field {
            TargetField::TargetOee => self.target_oee = value,
            TargetField::TargetLaborEfficiency => self.target_labor_efficiency = value,
            TargetField::ExpectedThroughput => self.expected_throughput = value,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TargetField {
    TargetOee,
    TargetLaborEfficiency,
    ExpectedThroughput,
}

impl TargetField {
    pub const ALL: [TargetField; 3] = [
        TargetField::TargetOee,
        TargetField::TargetLaborEfficiency,
        TargetField::ExpectedThroughput,
    ];

    pub fn key(&self) -> &'static str {
        match self {
            TargetField::TargetOee => "target-oee",
            TargetField::TargetLaborEfficiency => "target-labor-efficiency",
            TargetField::ExpectedThroughput => "expected-throughput",
        }
    }

    /// Slider range offered to the user. Not enforced on stored values.
    pub fn range(&self) -> Option<(f64, f64)> {
        match self {
            TargetField::TargetOee => Some((50.0, 100.0)),
            TargetField::TargetLaborEfficiency => Some((50.0, 120.0)),
            TargetField::ExpectedThroughput => None,
        }
    }
}

impl fmt::Display for TargetField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

impl FromStr for TargetField {
    type Err = String;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        let normalized = value.trim().to_ascii_lowercase().replace('_', "-");
        TargetField::ALL
            .into_iter()
            .find(|field| field.key() == normalized)
            .ok_or_else(|| value.to_string())
    }
}

/// Coerces free-form numeric input. Anything that is not a finite number is 0.
pub fn parse_target_input(input: &str) -> f64 {
    match input.trim().parse::<f64>() {
        Ok(value) if value.is_finite() => value,
        _ => 0.0,
    }
}

/// In-memory target configuration for every area. Never persisted.
#[derive(Debug, Clone, PartialEq)]
pub struct TargetBoard {
    defaults: BTreeMap<ProcessArea, ProcessTargets>,
    current: BTreeMap<ProcessArea, ProcessTargets>,
}

impl TargetBoard {
    pub fn new(defaults: BTreeMap<ProcessArea, ProcessTargets>) -> Self {
        Self {
            current: defaults.clone(),
            defaults,
        }
    }

    pub fn get(&self, area: ProcessArea) -> ProcessTargets {
        self.current
            .get(&area)
            .copied()
            .unwrap_or_else(|| ProcessTargets::default_for(area))
    }

    pub fn set_from_input(&mut self, area: ProcessArea, field: TargetField, input: &str) -> f64 {
        let value = parse_target_input(input);
        let mut targets = self.get(area);
        targets.set(field, value);
        self.current.insert(area, targets);
        value
    }

    pub fn reset(&mut self, area: ProcessArea) {
        let defaults = self
            .defaults
            .get(&area)
            .copied()
            .unwrap_or_else(|| ProcessTargets::default_for(area));
        self.current.insert(area, defaults);
    }

    /// Accepts the current values. Nothing is written anywhere.
    pub fn save(&self) -> &'static str {
        "Configuration saved (in memory only, reverts to defaults on restart)"
    }

    pub fn iter(&self) -> impl Iterator<Item = (ProcessArea, ProcessTargets)> + '_ {
        ProcessArea::ALL.into_iter().map(|area| (area, self.get(area)))
    }
}

impl Default for TargetBoard {
    fn default() -> Self {
        Self::new(
            ProcessArea::ALL
                .into_iter()
                .map(|area| (area, ProcessTargets::default_for(area)))
                .collect(),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_target_input_keeps_decimals() {
        assert_eq!(parse_target_input("85.7"), 85.7);
        assert_eq!(parse_target_input(" 120 "), 120.0);
    }

    #[test]
    fn parse_target_input_defaults_to_zero() {
        assert_eq!(parse_target_input(""), 0.0);
        assert_eq!(parse_target_input("abc"), 0.0);
        assert_eq!(parse_target_input("NaN"), 0.0);
        assert_eq!(parse_target_input("inf"), 0.0);
    }

    #[test]
    fn set_from_input_only_touches_one_field() {
        let mut board = TargetBoard::default();
        board.set_from_input(ProcessArea::Washing, TargetField::TargetOee, "85.7");

        let washing = board.get(ProcessArea::Washing);
        assert_eq!(washing.target_oee, 85.7);
        assert_eq!(washing.target_labor_efficiency, 90.0);
        assert_eq!(washing.expected_throughput, 115.0);
        assert_eq!(
            board.get(ProcessArea::Drying),
            ProcessTargets::default_for(ProcessArea::Drying)
        );
    }

    #[test]
    fn out_of_range_values_are_stored_as_given() {
        let mut board = TargetBoard::default();
        board.set_from_input(ProcessArea::Selection, TargetField::TargetOee, "");
        assert_eq!(board.get(ProcessArea::Selection).target_oee, 0.0);
        assert_eq!(TargetField::TargetOee.range(), Some((50.0, 100.0)));
    }

    #[test]
    fn reset_restores_area_defaults() {
        let mut board = TargetBoard::default();
        board.set_from_input(ProcessArea::Calandras, TargetField::ExpectedThroughput, "999");
        board.set_from_input(ProcessArea::Drying, TargetField::ExpectedThroughput, "1");
        board.reset(ProcessArea::Calandras);

        assert_eq!(board.get(ProcessArea::Calandras).expected_throughput, 180.0);
        assert_eq!(board.get(ProcessArea::Drying).expected_throughput, 1.0);
    }

    #[test]
    fn target_field_parses_dashes_and_underscores() {
        assert_eq!(
            "target_labor_efficiency".parse::<TargetField>().unwrap(),
            TargetField::TargetLaborEfficiency
        );
        assert_eq!(
            "expected-throughput".parse::<TargetField>().unwrap(),
            TargetField::ExpectedThroughput
        );
        assert!("speed".parse::<TargetField>().is_err());
    }
}
