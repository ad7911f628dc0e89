// File: crates/chart-core/src/metric.rs
// Summary: Per-metric chart configuration and the built-in metric table.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::record::Field;
use crate::scale::DomainOverride;

/// Opaque RGB stroke colour; parsed from and printed as `#rrggbb`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb {
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    pub fn from_hex(s: &str) -> Option<Self> {
        let hex = s.strip_prefix('#').unwrap_or(s);
        if hex.len() != 6 || !hex.is_ascii() {
            return None;
        }
        let byte = |i: usize| u8::from_str_radix(&hex[i..i + 2], 16).ok();
        Some(Self { r: byte(0)?, g: byte(2)?, b: byte(4)? })
    }
}

impl fmt::Display for Rgb {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
    }
}

impl TryFrom<String> for Rgb {
    type Error = String;

    fn try_from(s: String) -> Result<Self, Self::Error> {
        Rgb::from_hex(&s).ok_or_else(|| format!("invalid colour '{s}', expected #rrggbb"))
    }
}

impl From<Rgb> for String {
    fn from(c: Rgb) -> Self {
        c.to_string()
    }
}

/// Everything that distinguishes one metric chart from another.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct MetricSpec {
    pub field: Field,
    pub label: String,
    #[serde(default)]
    pub unit: String,
    /// Value substituted for records without a reading.
    #[serde(default)]
    pub default: f64,
    pub color: Rgb,
    #[serde(default)]
    pub x_override: DomainOverride,
    #[serde(default)]
    pub y_override: DomainOverride,
}

impl MetricSpec {
    pub fn new(field: Field, label: impl Into<String>, unit: impl Into<String>, color: Rgb) -> Self {
        Self {
            field,
            label: label.into(),
            unit: unit.into(),
            default: 0.0,
            color,
            x_override: DomainOverride::NONE,
            y_override: DomainOverride::NONE,
        }
    }

    pub fn with_y_override(mut self, ov: DomainOverride) -> Self {
        self.y_override = ov;
        self
    }

    /// Static caption drawn next to the line, e.g. `Speed (km/h)`.
    pub fn caption(&self) -> String {
        if self.unit.is_empty() {
            self.label.clone()
        } else {
            format!("{} ({})", self.label, self.unit)
        }
    }
}

/// The six activity charts, in display order. Temperature pins its lower bound to zero.
pub fn default_metrics() -> Vec<MetricSpec> {
    vec![
        MetricSpec::new(Field::Speed, "Speed", "km/h", Rgb::new(0x1f, 0x77, 0xb4)),
        MetricSpec::new(Field::Power, "Power", "W", Rgb::new(0xff, 0x7f, 0x0e)),
        MetricSpec::new(Field::HeartRate, "Heart rate", "bpm", Rgb::new(0xd6, 0x27, 0x28)),
        MetricSpec::new(Field::Cadence, "Cadence", "rpm", Rgb::new(0x94, 0x67, 0xbd)),
        MetricSpec::new(Field::Altitude, "Altitude", "m", Rgb::new(0x2c, 0xa0, 0x2c)),
        MetricSpec::new(Field::Temperature, "Temperature", "°C", Rgb::new(0x8c, 0x56, 0x4b))
            .with_y_override(DomainOverride::min(0.0)),
    ]
}

/// Look up the built-in spec for `field`.
pub fn find(field: Field) -> Option<MetricSpec> {
    default_metrics().into_iter().find(|m| m.field == field)
}
