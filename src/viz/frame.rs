//! Critic contour plot with real and generated samples

use std::path::{Path, PathBuf};

use ndarray::Array2;
use plotters::prelude::*;

use super::contour::{contour_levels, marching_squares};
use super::grid::Grid;
use super::plot_err;
use crate::error::Result;
use crate::train::{AdversarialModel, FrameSink};

/// Axes show `[-PLOT_LIMIT, PLOT_LIMIT]²`
pub const PLOT_LIMIT: f32 = 2.0;
/// Canvas edge: 7 inches at 100 dpi
pub const FRAME_PIXELS: u32 = 700;
/// Isolines drawn per frame
pub const CONTOUR_LEVELS: usize = 8;

const REAL_COLOR: RGBColor = RGBColor(255, 165, 0);
const FAKE_COLOR: RGBColor = RGBColor(0, 128, 0);
const MARKER_SIZE: u32 = 3;

fn in_view(&(x, y): &(f32, f32)) -> bool {
    x.abs() <= PLOT_LIMIT && y.abs() <= PLOT_LIMIT
}

/// `frame_<iteration>.svg`
pub fn frame_file_name(iteration: usize) -> String {
    format!("frame_{iteration}.svg")
}

/// Level color from dark blue (lowest) to yellow (highest)
fn level_color(k: usize, count: usize) -> RGBColor {
    let t = if count > 1 { k as f64 / (count - 1) as f64 } else { 0.5 };
    let mix = |a: f64, b: f64| (a + (b - a) * t).round() as u8;
    RGBColor(mix(68.0, 253.0), mix(1.0, 231.0), mix(84.0, 37.0))
}

/// Renders frames into the log directory and counts them
pub struct Visualizer {
    log_dir: PathBuf,
    grid: Grid,
    frames: usize,
}

impl Visualizer {
    /// Visualizer over the standard 128x128 grid
    pub fn new(log_dir: impl Into<PathBuf>) -> Self {
        Self::with_grid(log_dir, Grid::standard())
    }

    pub fn with_grid(log_dir: impl Into<PathBuf>, grid: Grid) -> Self {
        Self { log_dir: log_dir.into(), grid, frames: 0 }
    }

    /// Frames written so far
    pub fn frames(&self) -> usize {
        self.frames
    }

    pub fn log_dir(&self) -> &Path {
        &self.log_dir
    }

    /// Draw one frame from a critic surface and two point sets
    pub fn draw(&mut self, iteration: usize, surface: &Array2<f32>, real: &Array2<f32>, fake: &Array2<f32>) -> Result<PathBuf> {
        let path = self.log_dir.join(frame_file_name(iteration));
        let axis = self.grid.axis();

        let (lo, hi) = surface
            .iter()
            .filter(|v| v.is_finite())
            .fold((f32::INFINITY, f32::NEG_INFINITY), |(lo, hi), &v| (lo.min(v), hi.max(v)));
        let levels = contour_levels(lo, hi, CONTOUR_LEVELS);

        {
            let root = SVGBackend::new(&path, (FRAME_PIXELS, FRAME_PIXELS)).into_drawing_area();
            root.fill(&WHITE).map_err(plot_err)?;
            let mut chart = ChartBuilder::on(&root)
                .margin(10)
                .x_label_area_size(30)
                .y_label_area_size(30)
                .build_cartesian_2d(-PLOT_LIMIT..PLOT_LIMIT, -PLOT_LIMIT..PLOT_LIMIT)
                .map_err(plot_err)?;
            chart.configure_mesh().disable_mesh().draw().map_err(plot_err)?;

            for (k, &level) in levels.iter().enumerate() {
                let color = level_color(k, levels.len());
                let segments = marching_squares(surface, axis, axis, level)
                    .into_iter()
                    .filter(|segment| segment.iter().all(in_view));
                chart
                    .draw_series(segments.map(|[a, b]| PathElement::new(vec![a, b], color)))
                    .map_err(plot_err)?;
            }

            let markers = |points: &Array2<f32>, color: RGBColor| {
                points
                    .rows()
                    .into_iter()
                    .map(|p| (p[0], p[1]))
                    .filter(in_view)
                    .map(move |p| Cross::new(p, MARKER_SIZE, color))
                    .collect::<Vec<_>>()
            };
            chart.draw_series(markers(real, REAL_COLOR)).map_err(plot_err)?;
            chart.draw_series(markers(fake, FAKE_COLOR)).map_err(plot_err)?;

            root.present().map_err(plot_err)?;
        }

        self.frames += 1;
        Ok(path)
    }
}

impl FrameSink for Visualizer {
    /// Critic over the grid, `real`, and as many generated points as `real` has rows
    ///
    /// A fixed generator perturbs `real` itself, so its points scatter around
    /// the last real batch rather than around the grid.
    fn render<M: AdversarialModel>(&mut self, iteration: usize, real: &Array2<f32>, model: &mut M) -> Result<()> {
        let scores = model.critic_scores(self.grid.points());
        let surface = self.grid.reshape(&scores.to_vec());
        let fake = model.sample(real);
        self.draw(iteration, &surface, real, &fake)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_frame_names_and_counter() {
        assert_eq!(frame_file_name(99), "frame_99.svg");

        let dir = tempfile::tempdir().unwrap();
        let mut viz = Visualizer::with_grid(dir.path(), Grid::new(16, -3.0, 3.0));
        let axis = viz.grid.axis().to_vec();
        let surface = Array2::from_shape_fn((16, 16), |(i, j)| axis[i] * axis[i] + axis[j]);
        let real = Array2::from_elem((8, 2), 0.5);
        let fake = Array2::from_elem((8, 2), -0.5);

        let path = viz.draw(10, &surface, &real, &fake).unwrap();
        assert_eq!(path, dir.path().join("frame_10.svg"));
        assert!(path.exists());
        viz.draw(50, &surface, &real, &fake).unwrap();
        assert_eq!(viz.frames(), 2);
    }

    #[test]
    fn test_flat_surface_has_no_contours() {
        let dir = tempfile::tempdir().unwrap();
        let mut viz = Visualizer::with_grid(dir.path(), Grid::new(8, -3.0, 3.0));
        let surface = Array2::from_elem((8, 8), 1.0);
        let points = Array2::zeros((4, 2));
        viz.draw(0, &surface, &points, &points).unwrap();
        assert_eq!(viz.frames(), 1);
    }

    #[test]
    fn test_level_colors_span_palette() {
        assert_eq!(level_color(0, 8), RGBColor(68, 1, 84));
        assert_eq!(level_color(7, 8), RGBColor(253, 231, 37));
    }
}
