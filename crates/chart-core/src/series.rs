// File: crates/chart-core/src/series.rs
// Summary: Series model and extraction of one metric from a record sequence.
// Notes:
// - A series always has one point per input record; missing readings take the
//   caller's default so indices stay aligned across metrics of the same file.
// - `filled` counts the substituted slots so callers can tell "no data" from zero.

use crate::error::{AxisKind, ChartError, Result};
use crate::record::{Field, Record};
use crate::scale::AxisDomain;

#[derive(Clone, Debug, Default, PartialEq)]
pub struct Series {
    /// (index, value) pairs in capture order.
    pub data_xy: Vec<(f64, f64)>,
    filled: usize,
}

impl Series {
    pub fn new() -> Self {
        Self::default()
    }

    /// Wrap raw points; nothing is counted as filled.
    pub fn with_data(data: Vec<(f64, f64)>) -> Self {
        Self { data_xy: data, filled: 0 }
    }

    pub fn len(&self) -> usize {
        self.data_xy.len()
    }

    pub fn is_empty(&self) -> bool {
        self.data_xy.is_empty()
    }

    /// Number of points whose value came from the default, not the record.
    pub fn filled(&self) -> usize {
        self.filled
    }

    /// True when the series is non-empty and every value is a substituted default.
    pub fn all_missing(&self) -> bool {
        !self.is_empty() && self.filled == self.len()
    }

    pub fn index_domain(&self) -> Result<AxisDomain> {
        AxisDomain::from_values(self.data_xy.iter().map(|p| p.0))
            .ok_or(ChartError::EmptyDomain { axis: AxisKind::Index })
    }

    pub fn value_domain(&self) -> Result<AxisDomain> {
        AxisDomain::from_values(self.data_xy.iter().map(|p| p.1))
            .ok_or(ChartError::EmptyDomain { axis: AxisKind::Value })
    }
}

/// Pull `field` out of every record; absent readings become `default`.
pub fn extract(records: &[Record], field: Field, default: f64) -> Series {
    let mut filled = 0usize;
    let data_xy = records
        .iter()
        .enumerate()
        .map(|(i, r)| {
            let v = r.get(field).unwrap_or_else(|| {
                filled += 1;
                default
            });
            (i as f64, v)
        })
        .collect();
    Series { data_xy, filled }
}

/// Same as [`extract`] but resolves the field by name; unknown names are rejected.
pub fn extract_named(records: &[Record], field: &str, default: f64) -> Result<Series> {
    let field = field.parse::<Field>()?;
    Ok(extract(records, field, default))
}
