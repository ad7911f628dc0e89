// File: crates/chart-core/src/pipeline.rs
// Summary: Per-metric extract -> scale -> path pipeline and the whole-activity driver.

use tracing::{debug, warn};

use crate::error::Result;
use crate::geometry::Vertex;
use crate::metric::MetricSpec;
use crate::path::render_path;
use crate::record::Record;
use crate::route::{filter_route, RouteBounds, RoutePoint};
use crate::scale::{build_scale, LinearScale};
use crate::series::extract;
use crate::types::ChartFrame;

/// Decoder collaborator: turns the raw bytes of one file into records.
pub trait RecordSource {
    type Error;
    fn decode(&self, bytes: &[u8]) -> std::result::Result<Vec<Record>, Self::Error>;
}

/// Output of one metric run, ready for a drawing collaborator.
#[derive(Clone, Debug, PartialEq)]
pub struct MetricPlot {
    pub spec: MetricSpec,
    pub frame: ChartFrame,
    pub x_scale: LinearScale,
    pub y_scale: LinearScale,
    pub vertices: Vec<Vertex>,
    /// Points that took the spec's default because the record had no reading.
    pub filled: usize,
}

impl MetricPlot {
    pub fn all_missing(&self) -> bool {
        !self.vertices.is_empty() && self.filled == self.vertices.len()
    }
}

/// Run one metric through the pipeline.
pub fn render_metric(records: &[Record], spec: &MetricSpec, frame: &ChartFrame) -> Result<MetricPlot> {
    let series = extract(records, spec.field, spec.default);
    let rect = frame.plot_rect();

    let x_scale = build_scale(series.index_domain()?, rect.x_range(), Some(&spec.x_override))?;
    let y_scale = build_scale(series.value_domain()?, rect.y_range(), Some(&spec.y_override))?;
    let vertices = render_path(&series, &x_scale, &y_scale);

    debug!(
        metric = %spec.field,
        points = vertices.len(),
        filled = series.filled(),
        y_min = y_scale.domain.min,
        y_max = y_scale.domain.max,
        "metric rendered"
    );
    Ok(MetricPlot { spec: spec.clone(), frame: *frame, x_scale, y_scale, vertices, filled: series.filled() })
}

/// Every metric of one loaded file plus its route. Each metric result is independent.
#[derive(Clone, Debug)]
pub struct ActivityCharts {
    pub record_count: usize,
    pub metrics: Vec<(MetricSpec, Result<MetricPlot>)>,
    pub route: Vec<RoutePoint>,
}

impl ActivityCharts {
    pub fn plots(&self) -> impl Iterator<Item = &MetricPlot> {
        self.metrics.iter().filter_map(|(_, r)| r.as_ref().ok())
    }

    pub fn failures(&self) -> impl Iterator<Item = (&MetricSpec, &crate::ChartError)> {
        self.metrics.iter().filter_map(|(s, r)| r.as_ref().err().map(|e| (s, e)))
    }

    pub fn route_bounds(&self) -> Option<RouteBounds> {
        RouteBounds::from_points(&self.route)
    }
}

/// Render all `specs` and the route; one metric failing never stops the rest.
pub fn render_activity(records: &[Record], specs: &[MetricSpec], frame: &ChartFrame) -> ActivityCharts {
    let metrics = specs
        .iter()
        .map(|spec| {
            let out = render_metric(records, spec, frame);
            if let Err(e) = &out {
                warn!(metric = %spec.field, error = %e, "metric skipped");
            }
            (spec.clone(), out)
        })
        .collect();
    let route = filter_route(records);
    debug!(records = records.len(), route_points = route.len(), "activity rendered");
    ActivityCharts { record_count: records.len(), metrics, route }
}

/// Decode `bytes` and render. A decode error is returned untouched and nothing is rendered.
pub fn load_activity<S: RecordSource>(
    source: &S,
    bytes: &[u8],
    specs: &[MetricSpec],
    frame: &ChartFrame,
) -> std::result::Result<ActivityCharts, S::Error> {
    let records = source.decode(bytes)?;
    Ok(render_activity(&records, specs, frame))
}
