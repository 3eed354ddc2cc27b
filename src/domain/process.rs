use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// The four production stages of the plant, in line order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ProcessArea {
    Selection,
    Washing,
    Drying,
    Calandras,
}

impl ProcessArea {
    pub const ALL: [ProcessArea; 4] = [
        ProcessArea::Selection,
        ProcessArea::Washing,
        ProcessArea::Drying,
        ProcessArea::Calandras,
    ];

    pub fn key(&self) -> &'static str {
        match self {
            ProcessArea::Selection => "selection",
            ProcessArea::Washing => "washing",
            ProcessArea::Drying => "drying",
            ProcessArea::Calandras => "calandras",
        }
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            ProcessArea::Selection => "Selection",
            ProcessArea::Washing => "Washing Tunnel",
            ProcessArea::Drying => "Drying",
            ProcessArea::Calandras => "Calandras (Finishing)",
        }
    }
}

impl fmt::Display for ProcessArea {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.display_name())
    }
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("unknown process area '{0}' (expected selection, washing, drying or calandras)")]
pub struct UnknownProcessArea(pub String);

impl FromStr for ProcessArea {
    type Err = UnknownProcessArea;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        let normalized = value.trim().to_ascii_lowercase();
        ProcessArea::ALL
            .into_iter()
            .find(|area| area.key() == normalized)
            .ok_or_else(|| UnknownProcessArea(value.to_string()))
    }
}

/// What the dashboard is looking at: the plant-wide aggregate or one area.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ProcessSelection {
    #[default]
    General,
    Area(ProcessArea),
}

impl ProcessSelection {
    pub fn area(&self) -> Option<ProcessArea> {
        match self {
            ProcessSelection::General => None,
            ProcessSelection::Area(area) => Some(*area),
        }
    }
}

impl fmt::Display for ProcessSelection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ProcessSelection::General => f.write_str("Plant Overview"),
            ProcessSelection::Area(area) => area.fmt(f),
        }
    }
}

impl FromStr for ProcessSelection {
    type Err = UnknownProcessArea;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        if value.trim().eq_ignore_ascii_case("general") {
            return Ok(ProcessSelection::General);
        }
        value.parse().map(ProcessSelection::Area)
    }
}

/// Static machine data for one area. Rates are per hour.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProcessSpecification {
    pub units: u32,
    pub staff: u32,
    /// kg/h
    pub max_throughput: f64,
    /// kW
    pub power: f64,
    /// m3/h
    pub gas: f64,
    /// m3/h
    pub steam: f64,
    /// litres/h, absent for dry processes
    pub water: Option<f64>,
}

impl ProcessSpecification {
    pub fn default_for(area: ProcessArea) -> Self {
        match area {
            ProcessArea::Selection => Self {
                units: 1,
                staff: 4,
                max_throughput: 120.0,
                power: 0.76,
                gas: 0.0,
                steam: 0.0,
                water: Some(0.0),
            },
            ProcessArea::Washing => Self {
                units: 1,
                staff: 2,
                max_throughput: 120.0,
                power: 38.0,
                gas: 10.0,
                steam: 50.0,
                water: Some(300.0),
            },
            // 4 dryers at 50 kg/h, 5.7 kW and 50 m3/h each
            ProcessArea::Drying => Self {
                units: 4,
                staff: 0,
                max_throughput: 200.0,
                power: 22.8,
                gas: 200.0,
                steam: 0.0,
                water: Some(0.0),
            },
            // 4 calandras at 50 kg/h, 22.8 kW and 80 m3/h each
            ProcessArea::Calandras => Self {
                units: 4,
                staff: 4,
                max_throughput: 200.0,
                power: 91.2,
                gas: 320.0,
                steam: 0.0,
                water: Some(0.0),
            },
        }
    }

    pub fn water_rate(&self) -> f64 {
        self.water.unwrap_or(0.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn process_area_parses_keys_case_insensitively() {
        assert_eq!("washing".parse::<ProcessArea>().unwrap(), ProcessArea::Washing);
        assert_eq!(" Calandras ".parse::<ProcessArea>().unwrap(), ProcessArea::Calandras);
        assert!("boiler".parse::<ProcessArea>().is_err());
    }

    #[test]
    fn unknown_area_error_names_the_input_and_the_choices() {
        let err = "boiler".parse::<ProcessArea>().unwrap_err();
        assert_eq!(err, UnknownProcessArea("boiler".to_string()));
        assert_eq!(
            err.to_string(),
            "unknown process area 'boiler' (expected selection, washing, drying or calandras)"
        );
        let boxed: Box<dyn std::error::Error> = Box::new(err);
        assert!(boxed.source().is_none());
    }

    #[test]
    fn process_selection_accepts_general_and_areas() {
        assert_eq!(
            "GENERAL".parse::<ProcessSelection>().unwrap(),
            ProcessSelection::General
        );
        assert_eq!(
            "drying".parse::<ProcessSelection>().unwrap(),
            ProcessSelection::Area(ProcessArea::Drying)
        );
        assert_eq!(ProcessSelection::General.area(), None);
    }

    #[test]
    fn missing_water_rate_counts_as_zero() {
        let mut spec = ProcessSpecification::default_for(ProcessArea::Washing);
        assert_eq!(spec.water_rate(), 300.0);
        spec.water = None;
        assert_eq!(spec.water_rate(), 0.0);
    }
}
