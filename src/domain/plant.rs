use std::collections::BTreeMap;

use crate::domain::process::{ProcessArea, ProcessSpecification};
use crate::domain::targets::{ProcessTargets, TargetBoard};

pub const DEFAULT_YEAR: i32 = 2025;

/// Startup configuration of the simulated plant. Immutable once loaded.
#[derive(Debug, Clone, PartialEq)]
pub struct PlantConfig {
    pub name: String,
    /// Year the historical series are generated for. Forecasts cover the next one.
    pub year: i32,
    pub specs: BTreeMap<ProcessArea, ProcessSpecification>,
    pub targets: BTreeMap<ProcessArea, ProcessTargets>,
}

impl PlantConfig {
    pub fn spec(&self, area: ProcessArea) -> ProcessSpecification {
        self.specs
            .get(&area)
            .cloned()
            .unwrap_or_else(|| ProcessSpecification::default_for(area))
    }

    pub fn target_board(&self) -> TargetBoard {
        TargetBoard::new(
            ProcessArea::ALL
                .into_iter()
                .map(|area| {
                    let targets = self
                        .targets
                        .get(&area)
                        .copied()
                        .unwrap_or_else(|| ProcessTargets::default_for(area));
                    (area, targets)
                })
                .collect(),
        )
    }
}

impl Default for PlantConfig {
    fn default() -> Self {
        Self {
            name: "Najera Plant".to_string(),
            year: DEFAULT_YEAR,
            specs: ProcessArea::ALL
                .into_iter()
                .map(|area| (area, ProcessSpecification::default_for(area)))
                .collect(),
            targets: ProcessArea::ALL
                .into_iter()
                .map(|area| (area, ProcessTargets::default_for(area)))
                .collect(),
        }
    }
}
