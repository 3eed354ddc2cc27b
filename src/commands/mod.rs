pub mod base_commands;
pub mod forecast_cmd;
pub mod history_cmd;
pub mod live_cmd;
pub mod plot_cmd;
pub mod report_format;
pub mod targets_cmd;
