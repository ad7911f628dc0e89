// File: crates/chart-core/src/downsample.rs
// Summary: Largest-Triangle-Three-Buckets thinning for long polylines.

use crate::geometry::Vertex;

/// Largest-Triangle-Three-Buckets downsampling.
/// Returns up to `threshold` vertices, always keeping the first and last.
pub fn lttb(points: &[Vertex], threshold: usize) -> Vec<Vertex> {
    let n = points.len();
    if threshold == 0 || n == 0 { return Vec::new(); }
    if threshold >= n || n <= 2 { return points.to_vec(); }
    if threshold == 1 { return vec![points[0]]; }
    if threshold == 2 { return vec![points[0], points[n - 1]]; }

    let bucket_size = (n - 2) as f64 / (threshold - 2) as f64;
    let mut sampled = Vec::with_capacity(threshold);
    sampled.push(points[0]);

    // index of the vertex picked from the previous bucket
    let mut a = 0usize;

    for i in 0..(threshold - 2) {
        let start = (1.0 + (i as f64) * bucket_size).floor() as usize;
        let end = ((1.0 + ((i + 1) as f64) * bucket_size).floor() as usize).min(n - 1);

        // Average of the next bucket
        let next_end = ((1.0 + ((i + 2) as f64) * bucket_size).floor() as usize).min(n - 1);
        let rs = end.max(1);
        let re = next_end.max(rs + 1).min(n);
        let (mut avg_x, mut avg_y) = (0.0f64, 0.0f64);
        for p in &points[rs..re] {
            avg_x += p.px;
            avg_y += p.py;
        }
        let cnt = (re - rs) as f64;
        avg_x /= cnt;
        avg_y /= cnt;

        let pa = points[a];
        let mut max_area = -1.0f64;
        let mut max_idx = start;
        for k in start..end.max(start + 1) {
            let pk = points[k];
            let area = ((pa.px - avg_x) * (pk.py - pa.py) - (pa.px - pk.px) * (avg_y - pa.py)).abs();
            if area > max_area {
                max_area = area;
                max_idx = k;
            }
        }
        sampled.push(points[max_idx]);
        a = max_idx;
    }

    sampled.push(points[n - 1]);
    sampled
}
