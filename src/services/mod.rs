pub mod dashboard;
pub mod export;
pub mod forecast;
pub mod kpi_generator;
pub mod live_status;
pub mod live_ticker;
pub mod oee_plot;
pub mod overview;
pub mod plant_config_yaml;
pub mod sampler;
pub mod target_config;
