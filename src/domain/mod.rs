pub mod forecast;
pub mod kpi;
pub mod live;
pub mod plant;
pub mod process;
pub mod session;
pub mod targets;
