// File: crates/chart-core/src/geometry.rs
// Summary: Lightweight geometry helpers for pixel math.

/// A polyline vertex in output (pixel) space.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Vertex {
    pub px: f64,
    pub py: f64,
}

impl Vertex {
    pub const fn new(px: f64, py: f64) -> Self {
        Self { px, py }
    }
}

/// Plot area in pixels. `top < bottom`, screen-style Y growing downwards.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PlotRect {
    pub left: f64,
    pub top: f64,
    pub right: f64,
    pub bottom: f64,
}

impl PlotRect {
    pub fn from_ltwh(left: f64, top: f64, width: f64, height: f64) -> Self {
        Self { left, top, right: left + width, bottom: top + height }
    }

    /// Horizontal pixel range, left to right.
    pub fn x_range(&self) -> (f64, f64) { (self.left, self.right) }

    /// Vertical pixel range from bottom to top, so larger values sit higher.
    pub fn y_range(&self) -> (f64, f64) { (self.bottom, self.top) }
}

#[inline]
pub fn clamp<T: PartialOrd>(v: T, lo: T, hi: T) -> T {
    if v < lo { lo } else if v > hi { hi } else { v }
}
