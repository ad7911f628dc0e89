// File: crates/demo/src/config.rs
// Summary: Optional TOML configuration plus command-line overrides -> effective render settings.

use std::path::Path;

use anyhow::{anyhow, Context, Result};
use serde::Deserialize;

use fitchart_core::metric::{self, default_metrics};
use fitchart_core::types::{HEIGHT, WIDTH};
use fitchart_core::{ChartFrame, DomainOverride, Field, Insets, MetricSpec, Rgb};
use fitchart_render_skia::{theme, RenderOptions};

#[derive(Debug, Default, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct FileConfig {
    pub output: OutputConfig,
    pub metric: Vec<MetricOverride>,
}

#[derive(Debug, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct OutputConfig {
    pub width: u32,
    pub height: u32,
    pub theme: String,
    pub max_points: Option<usize>,
    pub stacked: bool,
    pub labels: bool,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            width: WIDTH,
            height: HEIGHT,
            theme: "dark".to_string(),
            max_points: None,
            stacked: false,
            labels: true,
        }
    }
}

/// One `[[metric]]` table. Only the keys present change the built-in spec.
#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct MetricOverride {
    pub field: Field,
    pub enabled: Option<bool>,
    pub label: Option<String>,
    pub unit: Option<String>,
    pub default: Option<f64>,
    pub color: Option<Rgb>,
    pub y_min: Option<f64>,
    pub y_max: Option<f64>,
}

impl FileConfig {
    pub fn load(path: &Path) -> Result<Self> {
        let text = std::fs::read_to_string(path).with_context(|| format!("reading config {}", path.display()))?;
        Self::parse(&text).with_context(|| format!("parsing config {}", path.display()))
    }

    pub fn parse(text: &str) -> Result<Self> {
        Ok(toml::from_str(text)?)
    }

    /// Built-in metric table with this file's overrides applied, in table order.
    /// Overrides for fields outside the table append a new chart.
    pub fn metric_specs(&self) -> Vec<MetricSpec> {
        let mut specs = default_metrics();
        for ov in &self.metric {
            let idx = match specs.iter().position(|s| s.field == ov.field) {
                Some(i) => i,
                None => {
                    specs.push(fallback_spec(ov.field));
                    specs.len() - 1
                }
            };
            let spec = &mut specs[idx];
            if let Some(label) = &ov.label { spec.label = label.clone(); }
            if let Some(unit) = &ov.unit { spec.unit = unit.clone(); }
            if let Some(d) = ov.default { spec.default = d; }
            if let Some(c) = ov.color { spec.color = c; }
            if ov.y_min.is_some() || ov.y_max.is_some() {
                spec.y_override = DomainOverride {
                    min: ov.y_min.or(spec.y_override.min),
                    max: ov.y_max.or(spec.y_override.max),
                };
            }
        }
        let disabled: Vec<Field> = self.metric.iter().filter(|o| o.enabled == Some(false)).map(|o| o.field).collect();
        specs.retain(|s| !disabled.contains(&s.field));
        specs
    }
}

/// Grey chart labelled with the raw field name, for fields without a built-in spec.
fn fallback_spec(field: Field) -> MetricSpec {
    MetricSpec::new(field, field.as_str(), "", Rgb::new(0x7f, 0x7f, 0x7f))
}

/// Command-line values that take precedence over the file.
#[derive(Debug, Default, Clone)]
pub struct Overrides {
    pub theme: Option<String>,
    pub width: Option<u32>,
    pub height: Option<u32>,
    pub max_points: Option<usize>,
    pub stacked: bool,
    pub no_labels: bool,
    /// Restrict output to these field names, in this order.
    pub metrics: Vec<String>,
}

#[derive(Debug, Clone)]
pub struct Settings {
    pub frame: ChartFrame,
    pub render: RenderOptions,
    pub metrics: Vec<MetricSpec>,
    pub stacked: bool,
}

impl Settings {
    pub fn resolve(file: &FileConfig, cli: &Overrides) -> Result<Self> {
        let out = &file.output;
        let theme_name = cli.theme.as_deref().unwrap_or(&out.theme);
        let theme = theme::find(theme_name).ok_or_else(|| {
            let known: Vec<&str> = theme::presets().iter().map(|t| t.name).collect();
            anyhow!("unknown theme '{theme_name}' (known: {})", known.join(", "))
        })?;

        let width = cli.width.unwrap_or(out.width);
        let height = cli.height.unwrap_or(out.height);
        let insets = Insets::default();
        if width <= insets.hsum() || height <= insets.vsum() {
            return Err(anyhow!("panel size {width}x{height} leaves no room for the plot"));
        }

        let mut metrics = file.metric_specs();
        if !cli.metrics.is_empty() {
            let wanted = cli
                .metrics
                .iter()
                .map(|name| name.trim().parse::<Field>())
                .collect::<Result<Vec<_>, _>>()?;
            // A field disabled in the file falls back to its built-in spec.
            metrics = wanted
                .iter()
                .map(|&f| {
                    metrics
                        .iter()
                        .find(|s| s.field == f)
                        .cloned()
                        .or_else(|| metric::find(f))
                        .unwrap_or_else(|| fallback_spec(f))
                })
                .collect();
        }

        let max_points = cli.max_points.or(out.max_points);
        if let Some(n) = max_points.filter(|&n| n < 2) {
            return Err(anyhow!("max_points must be at least 2 to keep both line ends, got {n}"));
        }

        let render = RenderOptions {
            theme,
            draw_labels: out.labels && !cli.no_labels,
            max_points,
            ..RenderOptions::default()
        };

        Ok(Self {
            frame: ChartFrame::new(width, height, insets),
            render,
            metrics,
            stacked: cli.stacked || out.stacked,
        })
    }
}
