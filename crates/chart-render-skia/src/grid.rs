// File: crates/chart-render-skia/src/grid.rs
// Summary: Grid line placement and tick label formatting.

pub fn linspace(start: f64, end: f64, steps: usize) -> Vec<f64> {
    if steps < 2 { return vec![start, end]; }
    let step = (end - start) / (steps as f64 - 1.0);
    (0..steps).map(|i| start + step * i as f64).collect()
}

/// Tick text with precision picked from the visible span.
pub fn format_tick(v: f64, span: f64) -> String {
    let span = span.abs();
    if span >= 100.0 || (span == 0.0 && v.fract() == 0.0) {
        format!("{v:.0}")
    } else if span >= 10.0 {
        format!("{v:.1}")
    } else {
        format!("{v:.2}")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn linspace_includes_both_ends() {
        assert_eq!(linspace(0.0, 100.0, 5), vec![0.0, 25.0, 50.0, 75.0, 100.0]);
        assert_eq!(linspace(3.0, 9.0, 1), vec![3.0, 9.0]);
    }

    #[test]
    fn tick_precision_follows_span() {
        assert_eq!(format_tick(152.0, 400.0), "152");
        assert_eq!(format_tick(21.24, 30.0), "21.2");
        assert_eq!(format_tick(1.234, 2.0), "1.23");
        assert_eq!(format_tick(5.0, 0.0), "5");
    }
}
