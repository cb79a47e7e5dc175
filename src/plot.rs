use crate::{MstError, SpanningTree};
use num_traits::Float;
use plotters::coord::Shift;
use plotters::prelude::*;
use std::fmt::Display;
use std::ops::Range;
use std::path::Path;
use tracing::debug;

const PANEL_SIZE: (u32, u32) = (600, 500);
const EDGE_COLOUR: RGBColor = RGBColor(33, 145, 140);

/// Draws both trees side by side into an SVG file, first tree on the left. Both panels share
/// the same axes so that equivalent trees look identical. Only two dimensional points can be
/// plotted.
pub fn plot_trees<T: Float>(
    first: &SpanningTree<T>,
    second: &SpanningTree<T>,
    path: &Path,
) -> Result<(), MstError> {
    let first_points = planar_points(first)?;
    let second_points = planar_points(second)?;
    let (x_range, y_range) = bounds(first_points.iter().chain(second_points.iter()));

    let root = SVGBackend::new(path, (PANEL_SIZE.0 * 2, PANEL_SIZE.1)).into_drawing_area();
    root.fill(&WHITE).map_err(plot_error)?;
    let panels = root.split_evenly((1, 2));
    draw_panel(&panels[0], first, &first_points, x_range.clone(), y_range.clone())?;
    draw_panel(&panels[1], second, &second_points, x_range, y_range)?;
    root.present().map_err(plot_error)?;
    debug!(path = %path.display(), "plotted both trees");
    Ok(())
}

fn draw_panel<T: Float>(
    area: &DrawingArea<SVGBackend<'_>, Shift>,
    tree: &SpanningTree<T>,
    points: &[(f64, f64)],
    x_range: Range<f64>,
    y_range: Range<f64>,
) -> Result<(), MstError> {
    let mut chart = ChartBuilder::on(area)
        .margin(20)
        .build_cartesian_2d(x_range, y_range)
        .map_err(plot_error)?;
    chart
        .draw_series(tree.edges().iter().map(|edge| {
            PathElement::new(
                vec![points[edge.left_node_id], points[edge.right_node_id]],
                EDGE_COLOUR.stroke_width(2),
            )
        }))
        .map_err(plot_error)?;
    chart
        .draw_series(points.iter().map(|&point| Circle::new(point, 4, BLACK.filled())))
        .map_err(plot_error)?;
    Ok(())
}

fn planar_points<T: Float>(tree: &SpanningTree<T>) -> Result<Vec<(f64, f64)>, MstError> {
    tree.points()
        .iter()
        .map(|point| match point.as_slice() {
            [x, y] => Ok((x.to_f64().unwrap_or(f64::NAN), y.to_f64().unwrap_or(f64::NAN))),
            other => Err(MstError::WrongDimension(format!(
                "only two dimensional points can be plotted, found {} dimensions",
                other.len()
            ))),
        })
        .collect()
}

fn bounds<'a>(points: impl Iterator<Item = &'a (f64, f64)>) -> (Range<f64>, Range<f64>) {
    let (mut x_min, mut x_max) = (f64::INFINITY, f64::NEG_INFINITY);
    let (mut y_min, mut y_max) = (f64::INFINITY, f64::NEG_INFINITY);
    for &(x, y) in points {
        x_min = x_min.min(x);
        x_max = x_max.max(x);
        y_min = y_min.min(y);
        y_max = y_max.max(y);
    }
    (padded(x_min, x_max), padded(y_min, y_max))
}

fn padded(min: f64, max: f64) -> Range<f64> {
    if min > max {
        return 0.0..1.0;
    }
    let span = max - min;
    let pad = if span > 0.0 { span * 0.05 } else { 1.0 };
    (min - pad)..(max + pad)
}

fn plot_error<E: Display>(err: E) -> MstError {
    MstError::Plot(err.to_string())
}
