// File: crates/chart-core/src/error.rs
// Summary: Error taxonomy for the series -> scale -> path pipeline.

use thiserror::Error;

/// Which dimension of a series a domain was requested for.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum AxisKind {
    Index,
    Value,
}

impl std::fmt::Display for AxisKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            AxisKind::Index => f.write_str("index"),
            AxisKind::Value => f.write_str("value"),
        }
    }
}

#[derive(Debug, Error, Clone, PartialEq)]
pub enum ChartError {
    #[error("unknown metric field '{0}'")]
    InvalidField(String),

    #[error("cannot infer {axis} domain from an empty series")]
    EmptyDomain { axis: AxisKind },

    #[error("invalid domain [{min}, {max}]: bounds must be finite with min <= max")]
    InvalidDomain { min: f64, max: f64 },
}

pub type Result<T> = std::result::Result<T, ChartError>;
