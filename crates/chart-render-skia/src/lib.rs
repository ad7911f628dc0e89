// File: crates/chart-render-skia/src/lib.rs
// Summary: Skia drawing collaborator for the FitChart pipeline: turns metric plots into images.

pub mod chart;
pub mod grid;
pub mod text;
pub mod theme;

pub use chart::{RenderOptions, SkiaRenderer};
pub use text::TextShaper;
pub use theme::Theme;
