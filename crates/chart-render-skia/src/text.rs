// File: crates/chart-render-skia/src/text.rs
// Summary: Paragraph-based label drawing for panel captions and tick values.

use skia_safe as skia;
use skia::textlayout::{FontCollection, Paragraph, ParagraphBuilder, ParagraphStyle, TextAlign, TextStyle};

pub struct TextShaper {
    fonts: FontCollection,
}

impl Default for TextShaper {
    fn default() -> Self {
        Self::new()
    }
}

impl TextShaper {
    pub fn new() -> Self {
        let mut fc = FontCollection::new();
        fc.set_default_font_manager(skia::FontMgr::default(), None);
        Self { fonts: fc }
    }

    fn style(size: f32, color: skia::Color, numeric: bool) -> TextStyle {
        let mut ts = TextStyle::new();
        ts.set_font_size(size.max(1.0));
        ts.set_color(color);
        if numeric {
            // tabular digits keep tick columns aligned
            ts.set_font_families(&["Roboto Mono", "Consolas", "Menlo", "DejaVu Sans Mono", "monospace"]);
        } else {
            ts.set_font_families(&["Segoe UI", "Arial", "Helvetica", "Roboto", "DejaVu Sans", "sans-serif"]);
        }
        ts
    }

    fn layout(&self, text: &str, size: f32, color: skia::Color, numeric: bool) -> Paragraph {
        let mut pstyle = ParagraphStyle::new();
        pstyle.set_text_align(TextAlign::Left);
        let mut builder = ParagraphBuilder::new(&pstyle, &self.fonts);
        builder.push_style(&Self::style(size, color, numeric));
        builder.add_text(text);
        let mut paragraph = builder.build();
        paragraph.layout(10_000.0);
        paragraph
    }

    pub fn measure_width(&self, text: &str, size: f32, numeric: bool) -> f32 {
        self.layout(text, size, skia::Color::TRANSPARENT, numeric).longest_line()
    }

    /// Draw with `(x, baseline_y)` at the left end of the baseline.
    pub fn draw_left(&self, canvas: &skia::Canvas, text: &str, x: f32, baseline_y: f32, size: f32, color: skia::Color) {
        let mut p = self.layout(text, size, color, false);
        // paragraphs paint from their top-left corner
        p.paint(canvas, (x, baseline_y - size * 0.8));
    }

    /// Draw numeric text ending at `right_x`, vertically centred on `mid_y`.
    pub fn draw_right(&self, canvas: &skia::Canvas, text: &str, right_x: f32, mid_y: f32, size: f32, color: skia::Color) {
        let mut p = self.layout(text, size, color, true);
        let w = p.longest_line();
        p.paint(canvas, (right_x - w, mid_y - size * 0.6));
    }
}
