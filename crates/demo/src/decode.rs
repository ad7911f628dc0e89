// File: crates/demo/src/decode.rs
// Summary: Decoder collaborators: FIT via `fitparser`, CSV exports via `csv`.
// Notes:
// - Units follow the viewer's conventions: speed km/h, distance km, temperature
//   celsius, altitude metres, positions in degrees.

use std::path::Path;

use chrono::{DateTime, TimeZone, Utc};
use clap::ValueEnum;
use fitparser::profile::MesgNum;
use fitparser::Value as FitValue;
use thiserror::Error;
use tracing::debug;

use fitchart_core::{Field, Record, RecordSource};

const SEMICIRCLES_TO_DEG: f64 = 180.0 / 2_147_483_648.0;

#[derive(Debug, Error)]
pub enum DecodeError {
    #[error("FIT decode failed: {0}")]
    Fit(String),

    #[error("CSV decode failed: {0}")]
    Csv(#[from] csv::Error),

    #[error("CSV header has no recognised metric column")]
    NoKnownColumns,

    #[error("row {row}: unreadable timestamp '{value}'")]
    Timestamp { row: usize, value: String },
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum InputFormat {
    Fit,
    Csv,
}

impl InputFormat {
    /// Guess from the file extension.
    pub fn from_path(path: &Path) -> Option<Self> {
        let ext = path.extension()?.to_string_lossy().to_ascii_lowercase();
        match ext.as_str() {
            "fit" => Some(InputFormat::Fit),
            "csv" => Some(InputFormat::Csv),
            _ => None,
        }
    }

    pub fn decoder(self) -> Decoder {
        match self {
            InputFormat::Fit => Decoder::Fit(FitDecoder),
            InputFormat::Csv => Decoder::Csv(CsvDecoder),
        }
    }
}

/// Dispatch over the supported formats.
#[derive(Clone, Copy, Debug)]
pub enum Decoder {
    Fit(FitDecoder),
    Csv(CsvDecoder),
}

impl RecordSource for Decoder {
    type Error = DecodeError;

    fn decode(&self, bytes: &[u8]) -> Result<Vec<Record>, DecodeError> {
        match self {
            Decoder::Fit(d) => d.decode(bytes),
            Decoder::Csv(d) => d.decode(bytes),
        }
    }
}

// ---- FIT --------------------------------------------------------------------

#[derive(Clone, Copy, Debug, Default)]
pub struct FitDecoder;

impl RecordSource for FitDecoder {
    type Error = DecodeError;

    fn decode(&self, bytes: &[u8]) -> Result<Vec<Record>, DecodeError> {
        let messages = fitparser::from_bytes(bytes).map_err(|e| DecodeError::Fit(e.to_string()))?;
        let total = messages.len();
        let records: Vec<Record> = messages
            .iter()
            .filter(|m| m.kind() == MesgNum::Record)
            .map(|m| {
                let mut rec = Record::new();
                // enhanced_* fields win over their 16-bit counterparts
                let mut enhanced: Vec<Field> = Vec::new();
                for field in m.fields() {
                    if field.name() == "timestamp" {
                        if let FitValue::Timestamp(ts) = field.value() {
                            rec.timestamp = Some(ts.with_timezone(&Utc));
                        }
                        continue;
                    }
                    if let Some((f, v, is_enhanced)) = fit_field(field.name(), field.value()) {
                        if is_enhanced || !enhanced.contains(&f) {
                            rec.set(f, Some(v));
                            if is_enhanced {
                                enhanced.push(f);
                            }
                        }
                    }
                }
                rec
            })
            .collect();
        debug!(messages = total, records = records.len(), "FIT decoded");
        Ok(records)
    }
}

/// Map one FIT record field to a chart field in display units.
/// Returns `(field, value, from_enhanced_field)`.
pub fn fit_field(name: &str, value: &FitValue) -> Option<(Field, f64, bool)> {
    let v = fit_value_to_f64(value)?;
    let mapped = match name {
        "speed" => (Field::Speed, v * 3.6, false),
        "enhanced_speed" => (Field::Speed, v * 3.6, true),
        "altitude" => (Field::Altitude, v, false),
        "enhanced_altitude" => (Field::Altitude, v, true),
        "power" => (Field::Power, v, false),
        "heart_rate" => (Field::HeartRate, v, false),
        "cadence" => (Field::Cadence, v, false),
        "temperature" => (Field::Temperature, v, false),
        "distance" => (Field::Distance, v / 1000.0, false),
        "position_lat" => (Field::PositionLat, v * SEMICIRCLES_TO_DEG, false),
        "position_long" => (Field::PositionLong, v * SEMICIRCLES_TO_DEG, false),
        _ => return None,
    };
    Some(mapped)
}

fn fit_value_to_f64(value: &FitValue) -> Option<f64> {
    match value {
        FitValue::Float32(v) => Some(*v as f64),
        FitValue::Float64(v) => Some(*v),
        FitValue::SInt8(v) => Some(*v as f64),
        FitValue::UInt8(v) => Some(*v as f64),
        FitValue::UInt8z(v) => Some(*v as f64),
        FitValue::Byte(v) => Some(*v as f64),
        FitValue::SInt16(v) => Some(*v as f64),
        FitValue::UInt16(v) => Some(*v as f64),
        FitValue::UInt16z(v) => Some(*v as f64),
        FitValue::SInt32(v) => Some(*v as f64),
        FitValue::UInt32(v) => Some(*v as f64),
        FitValue::UInt32z(v) => Some(*v as f64),
        FitValue::SInt64(v) => Some(*v as f64),
        FitValue::UInt64(v) => Some(*v as f64),
        FitValue::UInt64z(v) => Some(*v as f64),
        FitValue::Array(values) => values.iter().find_map(fit_value_to_f64),
        _ => None,
    }
}

// ---- CSV --------------------------------------------------------------------

#[derive(Clone, Copy, Debug, Default)]
pub struct CsvDecoder;

enum Column {
    Metric(Field),
    Timestamp,
}

fn column_for(header: &str) -> Option<Column> {
    let h = header.trim().to_ascii_lowercase();
    let field = match h.as_str() {
        "timestamp" | "time" => return Some(Column::Timestamp),
        "speed" | "speed_kmh" => Field::Speed,
        "power" | "watts" => Field::Power,
        "heart_rate" | "heartrate" | "hr" => Field::HeartRate,
        "cadence" | "cad" => Field::Cadence,
        "altitude" | "alt" | "elevation" => Field::Altitude,
        "temperature" | "temp" => Field::Temperature,
        "distance" => Field::Distance,
        "position_lat" | "lat" | "latitude" => Field::PositionLat,
        "position_long" | "lon" | "lng" | "longitude" => Field::PositionLong,
        _ => return None,
    };
    Some(Column::Metric(field))
}

fn parse_timestamp(s: &str) -> Option<DateTime<Utc>> {
    if let Ok(dt) = DateTime::parse_from_rfc3339(s) {
        return Some(dt.with_timezone(&Utc));
    }
    let secs = s.parse::<i64>().ok()?;
    Utc.timestamp_opt(secs, 0).single()
}

impl RecordSource for CsvDecoder {
    type Error = DecodeError;

    /// Empty or non-numeric metric cells are missing readings, not errors.
    fn decode(&self, bytes: &[u8]) -> Result<Vec<Record>, DecodeError> {
        let mut rdr = csv::ReaderBuilder::new()
            .has_headers(true)
            .flexible(true)
            .trim(csv::Trim::All)
            .from_reader(bytes);

        let columns: Vec<Option<Column>> = rdr.headers()?.iter().map(column_for).collect();
        if !columns.iter().any(|c| matches!(c, Some(Column::Metric(_)))) {
            return Err(DecodeError::NoKnownColumns);
        }

        let mut out = Vec::new();
        for (row, rec) in rdr.records().enumerate() {
            let rec = rec?;
            let mut record = Record::new();
            for (cell, column) in rec.iter().zip(&columns) {
                if cell.is_empty() {
                    continue;
                }
                match column {
                    Some(Column::Metric(f)) => record.set(*f, cell.parse::<f64>().ok()),
                    Some(Column::Timestamp) => {
                        let ts = parse_timestamp(cell)
                            .ok_or_else(|| DecodeError::Timestamp { row: row + 1, value: cell.to_string() })?;
                        record.timestamp = Some(ts);
                    }
                    None => {}
                }
            }
            out.push(record);
        }
        debug!(records = out.len(), "CSV decoded");
        Ok(out)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fit_units_are_converted() {
        let (f, v, enhanced) = fit_field("enhanced_speed", &FitValue::Float64(10.0)).unwrap();
        assert_eq!((f, enhanced), (Field::Speed, true));
        assert!((v - 36.0).abs() < 1e-9);

        let (f, v, _) = fit_field("position_lat", &FitValue::SInt32(1 << 30)).unwrap();
        assert_eq!(f, Field::PositionLat);
        assert!((v - 90.0).abs() < 1e-9);

        let (f, v, _) = fit_field("distance", &FitValue::Float64(1500.0)).unwrap();
        assert_eq!((f, v), (Field::Distance, 1.5));

        let (f, v, _) = fit_field("heart_rate", &FitValue::UInt8(151)).unwrap();
        assert_eq!((f, v), (Field::HeartRate, 151.0));
    }

    #[test]
    fn unrelated_or_non_numeric_fields_are_ignored() {
        assert!(fit_field("left_right_balance", &FitValue::UInt8(50)).is_none());
        assert!(fit_field("speed", &FitValue::String("fast".into())).is_none());
        let arr = FitValue::Array(vec![FitValue::String("x".into()), FitValue::UInt16(88)]);
        assert_eq!(fit_field("cadence", &arr).map(|m| m.1), Some(88.0));
    }

    #[test]
    fn garbage_is_a_fit_error() {
        let err = FitDecoder.decode(b"not a valid FIT file header").unwrap_err();
        assert!(matches!(err, DecodeError::Fit(_)));
        assert!(FitDecoder.decode(&[]).is_err());
    }

    #[test]
    fn format_from_extension() {
        assert_eq!(InputFormat::from_path(Path::new("ride.FIT")), Some(InputFormat::Fit));
        assert_eq!(InputFormat::from_path(Path::new("a/b/ride.csv")), Some(InputFormat::Csv));
        assert_eq!(InputFormat::from_path(Path::new("ride.gpx")), None);
        assert_eq!(InputFormat::from_path(Path::new("ride")), None);
    }
}
