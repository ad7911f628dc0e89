// File: crates/chart-core/src/path.rs
// Summary: Series -> polyline vertices through an X and a Y scale.

use crate::geometry::Vertex;
use crate::scale::Scale;
use crate::series::Series;

/// Map every (index, value) pair through the scales, preserving order.
///
/// Straight segments only; one vertex per point. An empty series yields an
/// empty path, since a scale has already been built by the time this runs.
pub fn render_path<X: Scale, Y: Scale>(series: &Series, x_scale: &X, y_scale: &Y) -> Vec<Vertex> {
    series
        .data_xy
        .iter()
        .map(|&(i, v)| Vertex::new(x_scale.apply(i), y_scale.apply(v)))
        .collect()
}
