use crate::domain::forecast::{ForecastReport, RiskLevel};
use crate::domain::kpi::KpiRecord;
use crate::domain::live::LiveStatus;
use crate::domain::targets::{TargetBoard, TargetField};
use crate::services::dashboard::DashboardSummary;

pub fn format_series_report(title: &str, year: i32, series: &[KpiRecord]) -> String {
    let summary = DashboardSummary::from_series(series);

    let mut lines = Vec::new();
    lines.push(format!("{title} - simulated KPIs {year}"));
    lines.push(format!("Average OEE (YTD): {:.1}%", summary.average_oee));
    lines.push(format!("Total throughput: {} kg", summary.total_throughput_kg));
    lines.push(format!(
        "Labor efficiency (last month): {:.1}%",
        summary.last_labor_efficiency
    ));
    lines.push(format!(
        "Cycle time (last month): {:.1} min",
        summary.last_cycle_time
    ));
    lines.push(String::new());
    lines.push("Month | Avail | Perf | Qual | OEE | Labor | OLE | Kg | Util | Downtime | kWh".to_string());
    lines.push("------|-------|------|------|-----|-------|-----|----|------|----------|----".to_string());
    for record in series {
        lines.push(format_series_row(record));
    }

    lines.join("\n")
}

fn format_series_row(record: &KpiRecord) -> String {
    format!(
        "{} | {:.1} | {:.1} | {:.1} | {:.1} | {:.1} | {:.1} | {} | {:.1} | {} | {}",
        record.month,
        record.availability,
        record.performance,
        record.quality,
        record.oee,
        record.labor_efficiency,
        record.ole,
        record.throughput_kg,
        record.capacity_utilization,
        record.downtime_minutes,
        record.resources.electricity
    )
}

pub fn format_live_status(status: &LiveStatus) -> String {
    let state = if status.is_running() { "RUNNING" } else { "STOPPED" };
    let mut line = format!(
        "[{}] {} {state} | power {:.2} kW | gas {:.2} m3/h | water {:.1} L/min | rate {} kg/h",
        status.sampled_at.format("%H:%M:%S"),
        status.area,
        status.instant_power,
        status.instant_gas,
        status.instant_water,
        status.current_throughput
    );
    if !status.alerts.is_empty() {
        line.push_str(&format!(" | alerts: {}", status.alerts.join(", ")));
    }
    line
}

pub fn format_forecast_report(report: &ForecastReport) -> String {
    let mut lines = Vec::new();
    lines.push(format!("Predictive OEE projection {}", report.year));
    lines.push("Month | Optimistic | Realistic | Pessimistic | Downtime risk (h)".to_string());
    lines.push("------|------------|-----------|-------------|------------------".to_string());
    for prediction in &report.predictions {
        lines.push(format!(
            "{} | {:.1} | {:.1} | {:.1} | {}",
            prediction.month,
            prediction.optimistic,
            prediction.realistic,
            prediction.pessimistic,
            prediction.downtime_risk_hours
        ));
    }
    lines.push(String::new());
    lines.push("Predictive alerts:".to_string());
    for insight in &report.insights {
        let level = match insight.risk_level {
            RiskLevel::Low => "Low",
            RiskLevel::Medium => "Medium",
            RiskLevel::High => "High",
        };
        lines.push(format!(
            "- {}: {level} risk ({}%) {}",
            insight.area, insight.probability, insight.description
        ));
    }

    lines.join("\n")
}

pub fn format_targets(board: &TargetBoard) -> String {
    let mut lines = Vec::new();
    lines.push("Area | Target OEE (%) | Target labor efficiency (%) | Expected throughput (kg/h)".to_string());
    lines.push("-----|----------------|-----------------------------|---------------------------".to_string());
    for (area, targets) in board.iter() {
        let values: Vec<String> = TargetField::ALL
            .iter()
            .map(|field| targets.get(*field).to_string())
            .collect();
        lines.push(format!("{area} | {}", values.join(" | ")));
    }

    let ranges: Vec<String> = TargetField::ALL
        .iter()
        .map(|field| match field.range() {
            Some((min, max)) => format!("{field} {min}-{max}"),
            None => format!("{field} unbounded"),
        })
        .collect();
    lines.push(String::new());
    lines.push(format!("Suggested ranges (not enforced): {}", ranges.join(", ")));
    lines.join("\n")
}
