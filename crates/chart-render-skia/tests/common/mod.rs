// File: crates/chart-render-skia/tests/common/mod.rs
// Purpose: Shared fixture: a short ride rendered through the core pipeline.

#![allow(dead_code)]

use fitchart_core::{default_metrics, render_metric, ChartFrame, Field, MetricPlot, Record};

pub fn ride(n: usize) -> Vec<Record> {
    (0..n)
        .map(|i| {
            let t = i as f64;
            Record::new()
                .with(Field::Speed, 25.0 + (t * 0.3).sin() * 5.0)
                .with(Field::HeartRate, 130.0 + t * 0.5)
        })
        .collect()
}

pub fn plot(field: Field, frame: ChartFrame, n: usize) -> MetricPlot {
    let spec = default_metrics().into_iter().find(|m| m.field == field).expect("built-in metric");
    render_metric(&ride(n), &spec, &frame).expect("metric renders")
}
