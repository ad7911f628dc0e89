// File: crates/demo/src/commands.rs
// Summary: `render` and `inspect` subcommands.

use std::fmt;
use std::path::{Path, PathBuf};

use anyhow::{anyhow, Context, Result};
use chrono::{DateTime, Utc};
use tracing::{info, warn};

use fitchart_core::record::{field_coverage, time_span};
use fitchart_core::{filter_route, load_activity, Field, RecordSource, RouteBounds, RoutePoint};
use fitchart_render_skia::SkiaRenderer;

use crate::cli::{InspectArgs, RenderArgs};
use crate::config::{FileConfig, Settings};
use crate::decode::{Decoder, InputFormat};

#[derive(Debug, Default)]
pub struct RenderReport {
    pub written: Vec<PathBuf>,
    /// Metrics with no chart, with the reason.
    pub skipped: Vec<(Field, String)>,
}

fn decoder_for(input: &Path, format: Option<InputFormat>) -> Result<Decoder> {
    let format = format
        .or_else(|| InputFormat::from_path(input))
        .ok_or_else(|| anyhow!("cannot tell the format of {}; pass --format fit|csv", input.display()))?;
    Ok(format.decoder())
}

fn read_input(input: &Path) -> Result<Vec<u8>> {
    std::fs::read(input).with_context(|| format!("reading {}", input.display()))
}

pub fn render(args: &RenderArgs) -> Result<RenderReport> {
    let file_cfg = match &args.config {
        Some(path) => FileConfig::load(path)?,
        None => FileConfig::default(),
    };
    let settings = Settings::resolve(&file_cfg, &args.overrides())?;
    let decoder = decoder_for(&args.input, args.format)?;
    let bytes = read_input(&args.input)?;

    let charts = load_activity(&decoder, &bytes, &settings.metrics, &settings.frame)
        .with_context(|| format!("decoding {}", args.input.display()))?;
    info!(records = charts.record_count, metrics = settings.metrics.len(), "activity loaded");

    std::fs::create_dir_all(&args.out).with_context(|| format!("creating {}", args.out.display()))?;
    let renderer = SkiaRenderer::new(settings.render);
    let mut report = RenderReport::default();

    for plot in charts.plots() {
        let path = args.out.join(format!("{}.png", plot.spec.field));
        renderer
            .render_to_png(plot, &path)
            .with_context(|| format!("writing {}", path.display()))?;
        report.written.push(path);
    }
    for (spec, err) in charts.failures() {
        report.skipped.push((spec.field, err.to_string()));
    }

    if settings.stacked {
        let plots: Vec<_> = charts.plots().collect();
        if plots.is_empty() {
            warn!("no panels to stack");
        } else {
            let path = args.out.join("activity.png");
            let bytes = renderer.render_stack_png_bytes(&plots)?;
            std::fs::write(&path, bytes).with_context(|| format!("writing {}", path.display()))?;
            report.written.push(path);
        }
    }

    if !charts.route.is_empty() {
        let path = args.out.join("route.csv");
        write_route(&path, &charts.route)?;
        report.written.push(path);
    }
    Ok(report)
}

fn write_route(path: &Path, route: &[RoutePoint]) -> Result<()> {
    let mut w = csv::Writer::from_path(path).with_context(|| format!("creating {}", path.display()))?;
    w.write_record(["lat", "lon"])?;
    for p in route {
        w.write_record([p.lat.to_string(), p.lon.to_string()])?;
    }
    w.flush()?;
    Ok(())
}

// ---- inspect ----------------------------------------------------------------

#[derive(Debug)]
pub struct InspectReport {
    pub record_count: usize,
    pub span: Option<(DateTime<Utc>, DateTime<Utc>)>,
    pub coverage: Vec<(Field, usize)>,
    pub route_points: usize,
    pub bounds: Option<RouteBounds>,
}

pub fn inspect(args: &InspectArgs) -> Result<InspectReport> {
    let decoder = decoder_for(&args.input, args.format)?;
    let bytes = read_input(&args.input)?;
    let records = decoder
        .decode(&bytes)
        .with_context(|| format!("decoding {}", args.input.display()))?;
    let route = filter_route(&records);
    Ok(InspectReport {
        record_count: records.len(),
        span: time_span(&records),
        coverage: field_coverage(&records),
        route_points: route.len(),
        bounds: RouteBounds::from_points(&route),
    })
}

impl fmt::Display for InspectReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "records: {}", self.record_count)?;
        match self.span {
            Some((start, end)) => {
                let secs = (end - start).num_seconds().max(0);
                writeln!(f, "start:   {}", start.to_rfc3339())?;
                writeln!(f, "end:     {}", end.to_rfc3339())?;
                writeln!(f, "elapsed: {}:{:02}:{:02}", secs / 3600, (secs / 60) % 60, secs % 60)?;
            }
            None => writeln!(f, "time:    no timestamps")?,
        }
        writeln!(f, "fields:")?;
        for (field, n) in &self.coverage {
            let pct = if self.record_count == 0 { 0.0 } else { *n as f64 * 100.0 / self.record_count as f64 };
            writeln!(f, "  {:<14} {:>7} ({pct:.1}%)", field.as_str(), n)?;
        }
        match &self.bounds {
            Some(b) => {
                let c = b.center();
                writeln!(f, "route:   {} points", self.route_points)?;
                writeln!(f, "  lat {:.5} .. {:.5}", b.min_lat, b.max_lat)?;
                writeln!(f, "  lon {:.5} .. {:.5}", b.min_lon, b.max_lon)?;
                writeln!(f, "  center {:.5}, {:.5}", c.lat, c.lon)?;
            }
            None => writeln!(f, "route:   none")?,
        }
        Ok(())
    }
}
