use std::collections::BTreeMap;
use std::io;
use std::path::{Path, PathBuf};

use serde::Deserialize;
use thiserror::Error;
use tracing::{debug, info};

use crate::domain::plant::PlantConfig;
use crate::domain::process::{ProcessArea, ProcessSpecification};
use crate::domain::targets::ProcessTargets;

#[derive(Error, Debug)]
pub enum PlantConfigError {
    #[error("failed to read plant config {path}: {source}")]
    Read { path: PathBuf, source: io::Error },
    #[error("failed to parse plant config: {0}")]
    Parse(#[from] serde_yaml::Error),
    #[error("unknown process area in plant config: {0}")]
    UnknownArea(String),
    #[error("invalid {field} for {area}: {value} (must be a finite, non-negative number)")]
    InvalidRate {
        area: ProcessArea,
        field: &'static str,
        value: f64,
    },
}

#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
struct PlantRecord {
    name: Option<String>,
    year: Option<i32>,
    processes: Option<BTreeMap<String, ProcessRecord>>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
struct ProcessRecord {
    spec: Option<SpecRecord>,
    targets: Option<TargetsRecord>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
struct SpecRecord {
    units: Option<u32>,
    staff: Option<u32>,
    max_throughput: Option<f64>,
    power: Option<f64>,
    gas: Option<f64>,
    steam: Option<f64>,
    water: Option<f64>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
struct TargetsRecord {
    target_oee: Option<f64>,
    target_labor_efficiency: Option<f64>,
    expected_throughput: Option<f64>,
}

/// Reads the plant YAML at `path`, or returns the built-in plant when `path` is `None`.
pub fn load_plant_config(path: Option<&str>) -> Result<PlantConfig, PlantConfigError> {
    match path {
        Some(path) => load_plant_config_from_yaml_file(path),
        None => {
            debug!("no plant config given, using built-in defaults");
            Ok(PlantConfig::default())
        }
    }
}

pub fn load_plant_config_from_yaml_file<P: AsRef<Path>>(
    path: P,
) -> Result<PlantConfig, PlantConfigError> {
    let path = path.as_ref();
    let contents = std::fs::read_to_string(path).map_err(|source| PlantConfigError::Read {
        path: path.to_path_buf(),
        source,
    })?;
    let config = deserialize_plant_config_from_yaml_str(&contents)?;
    info!(path = %path.display(), year = config.year, "loaded plant config");
    Ok(config)
}

/// Fields left out of the YAML keep their built-in values.
pub fn deserialize_plant_config_from_yaml_str(input: &str) -> Result<PlantConfig, PlantConfigError> {
    let record: Option<PlantRecord> = serde_yaml::from_str(input)?;
    let record = record.unwrap_or_default();
    let mut config = PlantConfig::default();

    if let Some(name) = record.name {
        config.name = name;
    }
    if let Some(year) = record.year {
        config.year = year;
    }

    for (key, process) in record.processes.unwrap_or_default() {
        let area: ProcessArea = key
            .parse()
            .map_err(|_| PlantConfigError::UnknownArea(key.clone()))?;
        if let Some(spec) = process.spec {
            let merged = merge_spec(area, config.spec(area), spec)?;
            config.specs.insert(area, merged);
        }
        if let Some(targets) = process.targets {
            let mut merged = config
                .targets
                .get(&area)
                .copied()
                .unwrap_or_else(|| ProcessTargets::default_for(area));
            merged.target_oee = targets.target_oee.unwrap_or(merged.target_oee);
            merged.target_labor_efficiency = targets
                .target_labor_efficiency
                .unwrap_or(merged.target_labor_efficiency);
            merged.expected_throughput = targets
                .expected_throughput
                .unwrap_or(merged.expected_throughput);
            config.targets.insert(area, merged);
        }
    }

    Ok(config)
}

fn merge_spec(
    area: ProcessArea,
    mut spec: ProcessSpecification,
    record: SpecRecord,
) -> Result<ProcessSpecification, PlantConfigError> {
    spec.units = record.units.unwrap_or(spec.units);
    spec.staff = record.staff.unwrap_or(spec.staff);
    spec.max_throughput = checked_rate(area, "max_throughput", record.max_throughput)?
        .unwrap_or(spec.max_throughput);
    spec.power = checked_rate(area, "power", record.power)?.unwrap_or(spec.power);
    spec.gas = checked_rate(area, "gas", record.gas)?.unwrap_or(spec.gas);
    spec.steam = checked_rate(area, "steam", record.steam)?.unwrap_or(spec.steam);
    if let Some(water) = checked_rate(area, "water", record.water)? {
        spec.water = Some(water);
    }
    Ok(spec)
}

fn checked_rate(
    area: ProcessArea,
    field: &'static str,
    value: Option<f64>,
) -> Result<Option<f64>, PlantConfigError> {
    match value {
        Some(value) if !value.is_finite() || value < 0.0 => {
            Err(PlantConfigError::InvalidRate { area, field, value })
        }
        other => Ok(other),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use assert_fs::prelude::*;

    #[test]
    fn empty_document_gives_builtin_plant() {
        let config = deserialize_plant_config_from_yaml_str("").unwrap();
        assert_eq!(config, PlantConfig::default());
    }

    #[test]
    fn partial_overrides_keep_remaining_defaults() {
        let yaml = r#"
year: 2024
processes:
  washing:
    spec:
      power: 40.5
    targets:
      target_oee: 87
"#;
        let config = deserialize_plant_config_from_yaml_str(yaml).unwrap();

        assert_eq!(config.year, 2024);
        let washing = config.spec(ProcessArea::Washing);
        assert_eq!(washing.power, 40.5);
        assert_eq!(washing.gas, 10.0);
        assert_eq!(washing.water, Some(300.0));

        let targets = config.targets[&ProcessArea::Washing];
        assert_eq!(targets.target_oee, 87.0);
        assert_eq!(targets.target_labor_efficiency, 90.0);
        assert_eq!(config.spec(ProcessArea::Drying), ProcessSpecification::default_for(ProcessArea::Drying));
    }

    #[test]
    fn rejects_unknown_area() {
        let err = deserialize_plant_config_from_yaml_str("processes:\n  boiler: {}\n").unwrap_err();
        assert!(matches!(err, PlantConfigError::UnknownArea(key) if key == "boiler"));
    }

    #[test]
    fn rejects_negative_rates() {
        let yaml = "processes:\n  drying:\n    spec:\n      gas: -1\n";
        let err = deserialize_plant_config_from_yaml_str(yaml).unwrap_err();
        assert!(matches!(
            err,
            PlantConfigError::InvalidRate { area: ProcessArea::Drying, field: "gas", .. }
        ));
    }

    #[test]
    fn rejects_unknown_fields() {
        let err = deserialize_plant_config_from_yaml_str("speed: 3\n").unwrap_err();
        assert!(matches!(err, PlantConfigError::Parse(_)));
    }

    #[test]
    fn loads_from_file_and_reports_missing_file() {
        let temp = assert_fs::TempDir::new().unwrap();
        let file = temp.child("plant.yaml");
        file.write_str("name: Test Plant\n").unwrap();

        let config = load_plant_config(Some(file.path().to_str().unwrap())).unwrap();
        assert_eq!(config.name, "Test Plant");

        let missing = temp.path().join("missing.yaml");
        let err = load_plant_config(Some(missing.to_str().unwrap())).unwrap_err();
        assert!(matches!(err, PlantConfigError::Read { .. }));
    }
}
