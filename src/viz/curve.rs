//! Line plot of one metric over the iterations

use std::path::Path;

use plotters::prelude::*;

use super::plot_err;
use crate::error::Result;

/// Draw `points` (iteration, value) as a line into an SVG file
pub fn render_curve(path: &Path, title: &str, points: &[(usize, f64)]) -> Result<()> {
    let x_max = points.iter().map(|&(i, _)| i).max().unwrap_or(0).max(1) as f64;
    let finite = points.iter().map(|&(_, v)| v).filter(|v| v.is_finite());
    let (mut y_min, mut y_max) = finite.fold((f64::INFINITY, f64::NEG_INFINITY), |(lo, hi), v| (lo.min(v), hi.max(v)));
    if !y_min.is_finite() {
        (y_min, y_max) = (0.0, 1.0);
    }
    let pad = ((y_max - y_min) * 0.05).max(1e-6);

    let root = SVGBackend::new(path, (640, 480)).into_drawing_area();
    root.fill(&WHITE).map_err(plot_err)?;
    let mut chart = ChartBuilder::on(&root)
        .caption(title, ("sans-serif", 18))
        .margin(10)
        .x_label_area_size(30)
        .y_label_area_size(60)
        .build_cartesian_2d(0f64..x_max, (y_min - pad)..(y_max + pad))
        .map_err(plot_err)?;

    chart.configure_mesh().x_desc("iteration").y_desc(title).draw().map_err(plot_err)?;
    chart
        .draw_series(LineSeries::new(
            points.iter().filter(|(_, v)| v.is_finite()).map(|&(i, v)| (i as f64, v)),
            &BLUE,
        ))
        .map_err(plot_err)?;

    root.present().map_err(plot_err)?;
    Ok(())
}
