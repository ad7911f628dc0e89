// File: crates/chart-core/src/record.rs
// Summary: Activity record model: one sampled instant with optional per-field readings.
// Notes:
// - Readings are optional because not every device emits every metric.
// - Non-finite numbers are stored as missing so downstream math never sees NaN.

use std::fmt;
use std::str::FromStr;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::error::ChartError;

/// Numeric fields a record may carry.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Field {
    Speed,
    Power,
    HeartRate,
    Cadence,
    Altitude,
    Temperature,
    Distance,
    PositionLat,
    PositionLong,
}

impl Field {
    pub const COUNT: usize = 9;

    pub const ALL: [Field; Field::COUNT] = [
        Field::Speed,
        Field::Power,
        Field::HeartRate,
        Field::Cadence,
        Field::Altitude,
        Field::Temperature,
        Field::Distance,
        Field::PositionLat,
        Field::PositionLong,
    ];

    pub const fn as_str(&self) -> &'static str {
        match self {
            Field::Speed => "speed",
            Field::Power => "power",
            Field::HeartRate => "heart_rate",
            Field::Cadence => "cadence",
            Field::Altitude => "altitude",
            Field::Temperature => "temperature",
            Field::Distance => "distance",
            Field::PositionLat => "position_lat",
            Field::PositionLong => "position_long",
        }
    }

    const fn slot(&self) -> usize {
        *self as usize
    }
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Field {
    type Err = ChartError;

    /// Exact, case-sensitive field names; anything else is `InvalidField`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Field::ALL
            .iter()
            .copied()
            .find(|f| f.as_str() == s)
            .ok_or_else(|| ChartError::InvalidField(s.to_string()))
    }
}

#[derive(Clone, Debug, Default, PartialEq)]
pub struct Record {
    pub timestamp: Option<DateTime<Utc>>,
    values: [Option<f64>; Field::COUNT],
}

impl Record {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder-style setter; non-finite values are treated as absent.
    pub fn with(mut self, field: Field, value: f64) -> Self {
        self.set(field, Some(value));
        self
    }

    pub fn set(&mut self, field: Field, value: Option<f64>) {
        self.values[field.slot()] = value.filter(|v| v.is_finite());
    }

    #[inline]
    pub fn get(&self, field: Field) -> Option<f64> {
        self.values[field.slot()]
    }

    pub fn has(&self, field: Field) -> bool {
        self.get(field).is_some()
    }
}

/// Per-field presence counts over a record sequence.
pub fn field_coverage(records: &[Record]) -> Vec<(Field, usize)> {
    Field::ALL
        .iter()
        .map(|&f| (f, records.iter().filter(|r| r.has(f)).count()))
        .collect()
}

/// First and last timestamps seen, in capture order.
pub fn time_span(records: &[Record]) -> Option<(DateTime<Utc>, DateTime<Utc>)> {
    let first = records.iter().find_map(|r| r.timestamp)?;
    let last = records.iter().rev().find_map(|r| r.timestamp)?;
    Some((first, last))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn nan_is_stored_as_missing() {
        let r = Record::new().with(Field::Speed, f64::NAN).with(Field::Power, 200.0);
        assert_eq!(r.get(Field::Speed), None);
        assert_eq!(r.get(Field::Power), Some(200.0));
    }

    #[test]
    fn field_names_round_trip() {
        for f in Field::ALL {
            assert_eq!(f.as_str().parse::<Field>().unwrap(), f);
        }
        assert!(matches!("pace".parse::<Field>(), Err(ChartError::InvalidField(name)) if name == "pace"));
    }
}
