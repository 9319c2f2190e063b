use std::ops::Range;

use plotters::coord::types::RangedCoordf64;
use plotters::coord::Shift;
use plotters::prelude::*;
use plotters::style::text_anchor::{HPos, Pos, VPos};

use super::{ArrowStyle, DrawResult, PlotConfig};
use crate::error::RoutingError;
use crate::models::{Location, Solution};

/// A location marker: position, outline colour and label.
type Marker = ((f64, f64), RGBColor, usize);

/// Draws every location on a grid. The depot is black, the others blue.
pub fn draw_locations<DB: DrawingBackend>(
    area: &DrawingArea<DB, Shift>,
    locations: &[Location],
    depot: usize,
    config: &PlotConfig,
) -> DrawResult<()>
where
    DB::ErrorType: 'static,
{
    area.fill(&WHITE)?;
    let (x_range, y_range) = bounds(locations, config.marker_size);
    let mut chart = ChartBuilder::on(area)
        .margin(config.margin)
        .build_cartesian_2d(x_range.clone(), y_range.clone())?;

    chart.draw_series(grid_lines(locations, &x_range, &y_range, config))?;

    let markers: Vec<Marker> = locations
        .iter()
        .enumerate()
        .map(|(i, l)| (l.coords(), if i == depot { BLACK } else { BLUE }, i))
        .collect();
    draw_markers(&mut chart, &markers, config)?;

    area.present()?;
    Ok(())
}

/// Draws the routes of a solution as arrows, one colour per vehicle.
///
/// Each arc ends with a marker of its end node: vehicle-coloured, or black
/// for the return to the depot.
pub fn draw_solution<DB: DrawingBackend>(
    area: &DrawingArea<DB, Shift>,
    locations: &[Location],
    solution: &Solution,
    config: &PlotConfig,
) -> DrawResult<()>
where
    DB::ErrorType: 'static,
{
    let point = |node: usize| -> DrawResult<(f64, f64)> {
        locations.get(node).map(Location::coords).ok_or_else(|| {
            RoutingError::NodeOutOfRange {
                node,
                num_nodes: locations.len(),
            }
            .into()
        })
    };

    let mut arrows = Vec::new();
    let mut markers: Vec<Marker> = Vec::new();
    for route in solution.routes() {
        let color = config.vehicle_color(route.vehicle_id());
        let arcs = route.arcs();
        for (k, &(from, to)) in arcs.iter().enumerate() {
            let (start, end) = (point(from)?, point(to)?);
            if let Some(polygon) = arrow_polygon(start, end, config.marker_size, &config.arrow) {
                arrows.push((polygon, color));
            }
            let node_color = if k + 1 == arcs.len() { BLACK } else { color };
            markers.push((end, node_color, to));
        }
    }

    area.fill(&WHITE)?;
    let (x_range, y_range) = bounds(locations, config.marker_size);
    let mut chart = ChartBuilder::on(area)
        .margin(config.margin)
        .build_cartesian_2d(x_range.clone(), y_range.clone())?;

    chart.draw_series(grid_lines(locations, &x_range, &y_range, config))?;
    chart.draw_series(
        arrows
            .into_iter()
            .map(|(polygon, color)| Polygon::new(polygon, color.filled())),
    )?;
    draw_markers(&mut chart, &markers, config)?;

    area.present()?;
    Ok(())
}

fn draw_markers<DB: DrawingBackend>(
    chart: &mut ChartContext<'_, DB, Cartesian2d<RangedCoordf64, RangedCoordf64>>,
    markers: &[Marker],
    config: &PlotConfig,
) -> DrawResult<()>
where
    DB::ErrorType: 'static,
{
    let radius = config.marker_radius;
    chart.draw_series(
        markers
            .iter()
            .map(|&(p, _, _)| Circle::new(p, radius, WHITE.filled())),
    )?;
    chart.draw_series(
        markers
            .iter()
            .map(|&(p, color, _)| Circle::new(p, radius, color.stroke_width(2))),
    )?;
    chart.draw_series(markers.iter().map(|&(p, color, label)| {
        let style = ("sans-serif", config.font_size)
            .into_font()
            .color(&color)
            .pos(Pos::new(HPos::Center, VPos::Center));
        Text::new(label.to_string(), p, style)
    }))?;
    Ok(())
}

/// Data range covering every location, padded by `pad` on each side.
fn bounds(locations: &[Location], pad: f64) -> (Range<f64>, Range<f64>) {
    if locations.is_empty() {
        return (0.0..1.0, 0.0..1.0);
    }
    let (mut x_min, mut x_max) = (f64::INFINITY, f64::NEG_INFINITY);
    let (mut y_min, mut y_max) = (f64::INFINITY, f64::NEG_INFINITY);
    for l in locations {
        x_min = x_min.min(l.x());
        x_max = x_max.max(l.x());
        y_min = y_min.min(l.y());
        y_max = y_max.max(l.y());
    }
    let pad = pad.max(1.0);
    ((x_min - pad)..(x_max + pad), (y_min - pad)..(y_max + pad))
}

/// Distinct values, sorted.
fn distinct(values: impl Iterator<Item = f64>) -> Vec<f64> {
    let mut values: Vec<f64> = values.collect();
    values.sort_by(f64::total_cmp);
    values.dedup();
    values
}

/// Vertical and horizontal lines through every location coordinate.
fn grid_lines(
    locations: &[Location],
    x_range: &Range<f64>,
    y_range: &Range<f64>,
    config: &PlotConfig,
) -> Vec<PathElement<(f64, f64)>> {
    let style = config.grid_color.stroke_width(1);
    let vertical = distinct(locations.iter().map(Location::x))
        .into_iter()
        .map(|x| PathElement::new(vec![(x, y_range.start), (x, y_range.end)], style));
    let horizontal = distinct(locations.iter().map(Location::y))
        .into_iter()
        .map(|y| PathElement::new(vec![(x_range.start, y), (x_range.end, y)], style));
    vertical.chain(horizontal).collect()
}

/// Outline of an arrow from `start` to `end`, both ends shortened by
/// `marker_size / 2`.
///
/// Returns `None` when the arc is no longer than `marker_size`.
pub(crate) fn arrow_polygon(
    start: (f64, f64),
    end: (f64, f64),
    marker_size: f64,
    style: &ArrowStyle,
) -> Option<Vec<(f64, f64)>> {
    let (dx, dy) = (end.0 - start.0, end.1 - start.1);
    let length = dx.hypot(dy);
    if length <= marker_size {
        return None;
    }
    let (ux, uy) = (dx / length, dy / length);
    // left normal
    let (nx, ny) = (-uy, ux);

    let half = marker_size / 2.0;
    let tail = (start.0 + half * ux, start.1 + half * uy);
    let tip = (end.0 - half * ux, end.1 - half * uy);
    let head_length = style.head_length.min(length - marker_size);
    let neck = (tip.0 - head_length * ux, tip.1 - head_length * uy);

    let at = |p: (f64, f64), offset: f64| (p.0 + offset * nx, p.1 + offset * ny);
    let shaft = style.width / 2.0;
    let head = style.head_width / 2.0;
    Some(vec![
        at(tail, shaft),
        at(neck, shaft),
        at(neck, head),
        tip,
        at(neck, -head),
        at(neck, -shaft),
        at(tail, -shaft),
    ])
}
