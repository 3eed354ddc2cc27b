use std::io;
use std::path::Path;

use clap::ValueEnum;
use serde::Serialize;
use thiserror::Error;
use tracing::info;

#[derive(Error, Debug)]
pub enum ExportError {
    #[error("failed to write export file: {0}")]
    Write(#[from] io::Error),
    #[error("failed to serialize yaml: {0}")]
    Yaml(#[from] serde_yaml::Error),
    #[error("failed to serialize json: {0}")]
    Json(#[from] serde_json::Error),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum ExportFormat {
    #[default]
    Yaml,
    Json,
}

pub fn export_to_string<T: Serialize + ?Sized>(
    value: &T,
    format: ExportFormat,
) -> Result<String, ExportError> {
    match format {
        ExportFormat::Yaml => Ok(serde_yaml::to_string(value)?),
        ExportFormat::Json => Ok(serde_json::to_string_pretty(value)?),
    }
}

pub fn write_export<T: Serialize + ?Sized, P: AsRef<Path>>(
    path: P,
    value: &T,
    format: ExportFormat,
) -> Result<(), ExportError> {
    let contents = export_to_string(value, format)?;
    std::fs::write(path.as_ref(), contents)?;
    info!(path = %path.as_ref().display(), ?format, "export written");
    Ok(())
}
