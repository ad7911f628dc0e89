// File: crates/chart-render-skia/src/chart.rs
// Summary: Draws metric plots (polyline + static label) on Skia CPU raster surfaces.

use std::borrow::Cow;

use anyhow::{anyhow, Result};
use skia_safe as skia;
use tracing::debug;

use fitchart_core::{lttb, MetricPlot, Rgb, Vertex};

use crate::grid::{format_tick, linspace};
use crate::text::TextShaper;
use crate::theme::Theme;

#[derive(Clone, Copy, Debug)]
pub struct RenderOptions {
    pub theme: Theme,
    pub draw_labels: bool,
    pub stroke_width: f32,
    /// Thin the polyline to at most this many vertices before drawing.
    pub max_points: Option<usize>,
}

impl Default for RenderOptions {
    fn default() -> Self {
        Self {
            theme: Theme::dark(),
            draw_labels: true,
            stroke_width: 1.5,
            max_points: None,
        }
    }
}

pub struct SkiaRenderer {
    opts: RenderOptions,
    text: TextShaper,
}

impl SkiaRenderer {
    pub fn new(opts: RenderOptions) -> Self {
        Self { opts, text: TextShaper::new() }
    }

    /// Render one metric panel and encode it as PNG.
    pub fn render_to_png_bytes(&self, plot: &MetricPlot) -> Result<Vec<u8>> {
        let mut surface = raster(plot.frame.width, plot.frame.height)?;
        self.draw_panel(surface.canvas(), plot);
        encode_png(&mut surface)
    }

    pub fn render_to_png(&self, plot: &MetricPlot, output_png_path: impl AsRef<std::path::Path>) -> Result<()> {
        let bytes = self.render_to_png_bytes(plot)?;
        if let Some(parent) = output_png_path.as_ref().parent() {
            std::fs::create_dir_all(parent)?;
        }
        std::fs::write(output_png_path, bytes)?;
        Ok(())
    }

    /// Unpremultiplied RGBA8 pixels: (pixels, width, height, row stride in bytes).
    pub fn render_to_rgba8(&self, plot: &MetricPlot) -> Result<(Vec<u8>, u32, u32, usize)> {
        let (w, h) = (plot.frame.width, plot.frame.height);
        let mut surface = raster(w, h)?;
        self.draw_panel(surface.canvas(), plot);

        let info = skia::ImageInfo::new(
            (w as i32, h as i32),
            skia::ColorType::RGBA8888,
            skia::AlphaType::Unpremul,
            None,
        );
        let stride = w as usize * 4;
        let mut px = vec![0u8; stride * h as usize];
        if !surface.read_pixels(&info, &mut px, stride, (0, 0)) {
            return Err(anyhow!("reading back surface pixels failed"));
        }
        Ok((px, w, h, stride))
    }

    /// All panels stacked top to bottom in one PNG.
    pub fn render_stack_png_bytes(&self, plots: &[&MetricPlot]) -> Result<Vec<u8>> {
        if plots.is_empty() {
            return Err(anyhow!("no metric panels to render"));
        }
        let width = plots.iter().map(|p| p.frame.width).max().unwrap_or(0);
        let height = plots.iter().map(|p| p.frame.height).sum();
        let mut surface = raster(width, height)?;
        let canvas = surface.canvas();
        canvas.clear(self.opts.theme.background);

        let mut y = 0.0f32;
        for plot in plots {
            canvas.save();
            canvas.translate((0.0, y));
            self.draw_panel(canvas, plot);
            canvas.restore();
            y += plot.frame.height as f32;
        }
        encode_png(&mut surface)
    }

    fn draw_panel(&self, canvas: &skia::Canvas, plot: &MetricPlot) {
        let theme = &self.opts.theme;
        let rect = plot.frame.plot_rect();
        let (l, t, r, b) = (rect.left as f32, rect.top as f32, rect.right as f32, rect.bottom as f32);

        let mut bg = skia::Paint::default();
        bg.set_color(theme.background);
        canvas.draw_rect(skia::Rect::from_wh(plot.frame.width as f32, plot.frame.height as f32), &bg);

        draw_grid(canvas, theme, l, t, r, b);
        draw_axes(canvas, theme, l, t, r, b);

        let vertices: Cow<'_, [Vertex]> = match self.opts.max_points {
            Some(n) if plot.vertices.len() > n => Cow::Owned(lttb(&plot.vertices, n)),
            _ => Cow::Borrowed(plot.vertices.as_slice()),
        };
        debug!(metric = %plot.spec.field, drawn = vertices.len(), total = plot.vertices.len(), "drawing panel");

        canvas.save();
        canvas.clip_rect(skia::Rect::from_ltrb(l, t, r, b), skia::ClipOp::Intersect, true);
        draw_polyline(canvas, &vertices, plot.spec.color, self.opts.stroke_width);
        canvas.restore();

        if self.opts.draw_labels {
            self.draw_labels(canvas, plot, l, t, r, b);
        }
    }

    fn draw_labels(&self, canvas: &skia::Canvas, plot: &MetricPlot, l: f32, t: f32, r: f32, b: f32) {
        let theme = &self.opts.theme;
        self.text.draw_left(canvas, &plot.spec.caption(), l, t - 8.0, 13.0, theme.axis_label);

        let domain = plot.y_scale.domain;
        if domain.is_degenerate() {
            self.text.draw_right(canvas, &format_tick(domain.min, 0.0), l - 6.0, b, 11.0, theme.tick);
        } else {
            for py in linspace(t as f64, b as f64, 5) {
                if let Some(v) = plot.y_scale.from_px(py) {
                    self.text.draw_right(canvas, &format_tick(v, domain.span()), l - 6.0, py as f32, 11.0, theme.tick);
                }
            }
        }

        let count = format!("{} samples", plot.vertices.len());
        let w = self.text.measure_width(&count, 11.0, true);
        self.text.draw_left(canvas, &count, r - w, b + 18.0, 11.0, theme.tick);

        if plot.all_missing() {
            self.text.draw_left(canvas, "no data", l + 8.0, (t + b) * 0.5, 13.0, theme.no_data);
        }
    }
}

// ---- helpers ----------------------------------------------------------------

fn raster(width: u32, height: u32) -> Result<skia::Surface> {
    skia::surfaces::raster_n32_premul((width as i32, height as i32))
        .ok_or_else(|| anyhow!("failed to create {width}x{height} raster surface"))
}

fn encode_png(surface: &mut skia::Surface) -> Result<Vec<u8>> {
    let image = surface.image_snapshot();
    #[allow(deprecated)]
    let data = image
        .encode_to_data(skia::EncodedImageFormat::PNG)
        .ok_or_else(|| anyhow!("encode PNG failed"))?;
    Ok(data.as_bytes().to_vec())
}

fn to_color(c: Rgb) -> skia::Color {
    skia::Color::from_rgb(c.r, c.g, c.b)
}

fn draw_grid(canvas: &skia::Canvas, theme: &Theme, l: f32, t: f32, r: f32, b: f32) {
    let mut paint = skia::Paint::default();
    paint.set_color(theme.grid);
    paint.set_anti_alias(true);
    paint.set_stroke_width(1.0);

    for x in linspace(l as f64, r as f64, 10) {
        canvas.draw_line((x as f32, t), (x as f32, b), &paint);
    }
    for y in linspace(t as f64, b as f64, 5) {
        canvas.draw_line((l, y as f32), (r, y as f32), &paint);
    }
}

fn draw_axes(canvas: &skia::Canvas, theme: &Theme, l: f32, t: f32, r: f32, b: f32) {
    let mut axis_paint = skia::Paint::default();
    axis_paint.set_color(theme.axis_line);
    axis_paint.set_anti_alias(true);
    axis_paint.set_stroke_width(1.5);

    canvas.draw_line((l, b), (r, b), &axis_paint);
    canvas.draw_line((l, t), (l, b), &axis_paint);
}

fn draw_polyline(canvas: &skia::Canvas, vertices: &[Vertex], color: Rgb, width: f32) {
    let mut stroke = skia::Paint::default();
    stroke.set_anti_alias(true);
    stroke.set_color(to_color(color));

    match vertices {
        [] => {}
        [only] => {
            stroke.set_style(skia::paint::Style::Fill);
            canvas.draw_circle((only.px as f32, only.py as f32), width.max(1.0), &stroke);
        }
        [first, rest @ ..] => {
            let mut path = skia::PathBuilder::new();
            path.move_to((first.px as f32, first.py as f32));
            for v in rest {
                path.line_to((v.px as f32, v.py as f32));
            }
            stroke.set_style(skia::paint::Style::Stroke);
            stroke.set_stroke_width(width);
            canvas.draw_path(&path.detach(), &stroke);
        }
    }
}
