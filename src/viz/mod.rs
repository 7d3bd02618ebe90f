//! SVG rendering of the critic surface and of metric curves

mod contour;
mod curve;
mod frame;
mod grid;

pub use contour::{contour_levels, marching_squares, Segment};
pub use curve::render_curve;
pub use frame::{frame_file_name, Visualizer, CONTOUR_LEVELS, FRAME_PIXELS, PLOT_LIMIT};
pub use grid::{Grid, GRID_LIMIT, GRID_SIZE};

use crate::error::Error;

/// Plotters errors carry a backend-specific type; keep only the message
pub(crate) fn plot_err<E: std::fmt::Display>(e: E) -> Error {
    Error::Plot(e.to_string())
}
