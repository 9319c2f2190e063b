//! Route plots with `plotters`.
//!
//! Paths ending in `.png` are rendered with the bitmap backend, anything
//! else as SVG.

mod config;
mod drawing;

pub use config::{ArrowStyle, PlotConfig, GOOGLE_COLORS};
pub use drawing::{draw_locations, draw_solution};

use std::path::Path;

use plotters::prelude::*;
use tracing::info;

use crate::error::RoutingError;
use crate::models::{Location, Solution};

/// Type alias for the result of a drawing function.
pub type DrawResult<T> = Result<T, Box<dyn std::error::Error>>;

fn is_png(path: &Path) -> bool {
    path.extension()
        .and_then(|e| e.to_str())
        .is_some_and(|e| e.eq_ignore_ascii_case("png"))
}

/// Plots the locations on their coordinate grid, the depot in black.
pub fn plot_locations(
    locations: &[Location],
    depot: usize,
    path: impl AsRef<Path>,
    config: &PlotConfig,
) -> Result<(), RoutingError> {
    let path = path.as_ref();
    let size = config.locations_size;
    let result = if is_png(path) {
        draw_locations(
            &BitMapBackend::new(path, size).into_drawing_area(),
            locations,
            depot,
            config,
        )
    } else {
        draw_locations(
            &SVGBackend::new(path, size).into_drawing_area(),
            locations,
            depot,
            config,
        )
    };
    result.map_err(|e| RoutingError::Plot(e.to_string()))?;
    info!(path = %path.display(), "locations plot written");
    Ok(())
}

/// Plots the routes of a solution over the locations.
pub fn plot_solution(
    locations: &[Location],
    solution: &Solution,
    path: impl AsRef<Path>,
    config: &PlotConfig,
) -> Result<(), RoutingError> {
    let path = path.as_ref();
    let size = config.solution_size;
    let result = if is_png(path) {
        draw_solution(
            &BitMapBackend::new(path, size).into_drawing_area(),
            locations,
            solution,
            config,
        )
    } else {
        draw_solution(
            &SVGBackend::new(path, size).into_drawing_area(),
            locations,
            solution,
            config,
        )
    };
    result.map_err(|e| RoutingError::Plot(e.to_string()))?;
    info!(path = %path.display(), "solution plot written");
    Ok(())
}
