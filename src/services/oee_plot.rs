use plotters::prelude::*;
use thiserror::Error;

use crate::domain::kpi::KpiRecord;

#[derive(Error, Debug)]
pub enum OeePlotError {
    #[error("series is empty")]
    EmptySeries,
    #[error("failed to render oee chart: {0}")]
    Plot(String),
}

/// Monthly OEE bars with an optional target line.
pub fn write_oee_chart_png(
    output_path: &str,
    title: &str,
    series: &[KpiRecord],
    target_oee: Option<f64>,
) -> Result<(), OeePlotError> {
    if series.is_empty() {
        return Err(OeePlotError::EmptySeries);
    }

    let max_x = series.len() as i32;
    let root = BitMapBackend::new(output_path, (900, 600)).into_drawing_area();
    root.fill(&WHITE)
        .map_err(|e| OeePlotError::Plot(e.to_string()))?;

    let mut chart = ChartBuilder::on(&root)
        .margin(20)
        .caption(title, ("sans-serif", 30))
        .x_label_area_size(55)
        .y_label_area_size(65)
        .build_cartesian_2d(0..max_x, 0.0..110.0)
        .map_err(|e| OeePlotError::Plot(e.to_string()))?;

    chart
        .configure_mesh()
        .disable_mesh()
        .x_desc("Month")
        .y_desc("OEE (%)")
        .label_style(("sans-serif", 18))
        .axis_desc_style(("sans-serif", 22))
        .x_labels(series.len())
        .x_label_formatter(&|index| {
            if *index < 0 {
                return String::new();
            }
            series
                .get(*index as usize)
                .map(|record| record.month.clone())
                .unwrap_or_default()
        })
        .draw()
        .map_err(|e| OeePlotError::Plot(e.to_string()))?;

    let bar_color = RGBColor(59, 130, 246);
    let bar_style = ShapeStyle::from(&bar_color).filled().stroke_width(1);
    chart
        .draw_series(series.iter().enumerate().map(|(idx, record)| {
            Rectangle::new([(idx as i32, 0.0), (idx as i32 + 1, record.oee)], bar_style)
        }))
        .map_err(|e| OeePlotError::Plot(e.to_string()))?;

    if let Some(target) = target_oee {
        let target_color = RGBColor(100, 116, 139);
        chart
            .draw_series(LineSeries::new(
                vec![(0, target), (max_x, target)],
                ShapeStyle::from(&target_color).stroke_width(2),
            ))
            .map_err(|e| OeePlotError::Plot(e.to_string()))?;
    }

    root.present()
        .map_err(|e| OeePlotError::Plot(e.to_string()))?;
    Ok(())
}
