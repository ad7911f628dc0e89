// File: crates/chart-core/src/types.rs
// Summary: Shared types and constants (panel sizes, paddings, frame).

use crate::geometry::PlotRect;

/// Default metric panel width in pixels.
pub const WIDTH: u32 = 960;
/// Default metric panel height in pixels.
pub const HEIGHT: u32 = 240;

/// Space kept around the plot area for the caption and tick labels, in pixels.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Insets {
    pub left: u32,
    pub right: u32,
    pub top: u32,
    pub bottom: u32,
}

impl Insets {
    pub const fn new(left: u32, right: u32, top: u32, bottom: u32) -> Self {
        Self { left, right, top, bottom }
    }

    /// Pixels lost to the margins across the width.
    pub const fn hsum(&self) -> u32 {
        self.left + self.right
    }

    /// Pixels lost to the margins down the height.
    pub const fn vsum(&self) -> u32 {
        self.top + self.bottom
    }
}

impl Default for Insets {
    fn default() -> Self {
        Self::new(64, 16, 28, 28)
    }
}

/// Output surface for one metric: overall size and the margins around the plot.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ChartFrame {
    pub width: u32,
    pub height: u32,
    pub insets: Insets,
}

impl ChartFrame {
    pub const fn new(width: u32, height: u32, insets: Insets) -> Self {
        Self { width, height, insets }
    }

    /// A frame with no margins; the plot fills the whole surface.
    pub const fn bare(width: u32, height: u32) -> Self {
        Self { width, height, insets: Insets::new(0, 0, 0, 0) }
    }

    /// Plot area inside the insets. Collapses to zero size rather than inverting
    /// when the insets exceed the surface.
    pub fn plot_rect(&self) -> PlotRect {
        let w = self.width.saturating_sub(self.insets.hsum()) as f64;
        let h = self.height.saturating_sub(self.insets.vsum()) as f64;
        PlotRect::from_ltwh(self.insets.left as f64, self.insets.top as f64, w, h)
    }
}

impl Default for ChartFrame {
    fn default() -> Self {
        Self::new(WIDTH, HEIGHT, Insets::default())
    }
}
