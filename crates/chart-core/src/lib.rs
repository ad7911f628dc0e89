// File: crates/chart-core/src/lib.rs
// Summary: Core library entry point; activity records and the series -> scale -> path pipeline.

pub mod error;
pub mod record;
pub mod series;
pub mod scale;
pub mod path;
pub mod route;
pub mod geometry;
pub mod types;
pub mod metric;
pub mod pipeline;
pub mod session;
pub mod downsample;

pub use error::{AxisKind, ChartError};
pub use record::{Field, Record};
pub use series::{extract, extract_named, Series};
pub use scale::{build_scale, AxisDomain, DomainOverride, LinearScale, Scale};
pub use path::render_path;
pub use route::{filter_route, RouteBounds, RoutePoint};
pub use geometry::{PlotRect, Vertex};
pub use types::{ChartFrame, Insets};
pub use metric::{default_metrics, MetricSpec, Rgb};
pub use pipeline::{load_activity, render_activity, render_metric, ActivityCharts, MetricPlot, RecordSource};
pub use session::{ChartSession, RunTicket};
pub use downsample::lttb;
