// File: crates/chart-core/src/scale.rs
// Summary: Axis domains and linear domain -> pixel scales.

use serde::{Deserialize, Serialize};

use crate::error::{ChartError, Result};
use crate::geometry::clamp;

/// General scale transform for one axis.
pub trait Scale {
    fn apply(&self, v: f64) -> f64;
}

/// Closed interval over one dimension of a series. Contract: finite, `min <= max`.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct AxisDomain {
    pub min: f64,
    pub max: f64,
}

impl AxisDomain {
    pub fn new(min: f64, max: f64) -> Result<Self> {
        if !min.is_finite() || !max.is_finite() || min > max {
            return Err(ChartError::InvalidDomain { min, max });
        }
        Ok(Self { min, max })
    }

    /// Min/max over `values`; `None` for an empty iterator.
    pub fn from_values(values: impl IntoIterator<Item = f64>) -> Option<Self> {
        let mut min = f64::INFINITY;
        let mut max = f64::NEG_INFINITY;
        let mut any = false;
        for v in values {
            min = min.min(v);
            max = max.max(v);
            any = true;
        }
        if any { Some(Self { min, max }) } else { None }
    }

    pub fn span(&self) -> f64 {
        self.max - self.min
    }

    pub fn is_degenerate(&self) -> bool {
        self.max == self.min
    }

    /// Replace either bound independently, then re-check the invariant.
    /// A lone fixed bound that crosses the computed one pulls it along,
    /// so `min(0)` over all-negative data yields `[0, 0]`.
    pub fn with_override(self, ov: &DomainOverride) -> Result<Self> {
        let (min, max) = match (ov.min, ov.max) {
            (Some(lo), None) => (lo, self.max.max(lo)),
            (None, Some(hi)) => (self.min.min(hi), hi),
            (lo, hi) => (lo.unwrap_or(self.min), hi.unwrap_or(self.max)),
        };
        Self::new(min, max)
    }
}

/// Fixed axis bounds; `None` keeps the computed bound.
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct DomainOverride {
    #[serde(default)]
    pub min: Option<f64>,
    #[serde(default)]
    pub max: Option<f64>,
}

impl DomainOverride {
    pub const NONE: DomainOverride = DomainOverride { min: None, max: None };

    pub const fn min(min: f64) -> Self {
        Self { min: Some(min), max: None }
    }

    pub const fn max(max: f64) -> Self {
        Self { min: None, max: Some(max) }
    }

    pub const fn both(min: f64, max: f64) -> Self {
        Self { min: Some(min), max: Some(max) }
    }
}

/// Linear mapping from a domain onto the pixel range `(r0, r1)`.
///
/// Values outside the domain extrapolate unless clamping is switched on.
/// A degenerate domain maps every input to `r0`.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct LinearScale {
    pub domain: AxisDomain,
    pub range: (f64, f64),
    pub clamp: bool,
}

impl LinearScale {
    pub fn new(domain: AxisDomain, range: (f64, f64)) -> Self {
        Self { domain, range, clamp: false }
    }

    pub fn with_clamp(mut self, clamp: bool) -> Self {
        self.clamp = clamp;
        self
    }

    #[inline]
    pub fn to_px(&self, v: f64) -> f64 {
        let (r0, r1) = self.range;
        if self.domain.is_degenerate() {
            return r0;
        }
        let v = if self.clamp { clamp(v, self.domain.min, self.domain.max) } else { v };
        let t = (v - self.domain.min) / self.domain.span();
        // Endpoints are returned verbatim so scale(min) == r0 and scale(max) == r1 exactly.
        if t == 0.0 {
            r0
        } else if t == 1.0 {
            r1
        } else {
            r0 + t * (r1 - r0)
        }
    }

    /// Pixel back to domain value; `None` when the domain or range is degenerate.
    pub fn from_px(&self, px: f64) -> Option<f64> {
        let (r0, r1) = self.range;
        if self.domain.is_degenerate() || r1 == r0 {
            return None;
        }
        Some(self.domain.min + (px - r0) / (r1 - r0) * self.domain.span())
    }
}

impl Scale for LinearScale {
    fn apply(&self, v: f64) -> f64 {
        self.to_px(v)
    }
}

/// Build a scale from a computed domain plus optional fixed bounds.
pub fn build_scale(domain: AxisDomain, range: (f64, f64), ov: Option<&DomainOverride>) -> Result<LinearScale> {
    let domain = match ov {
        Some(ov) => domain.with_override(ov)?,
        None => AxisDomain::new(domain.min, domain.max)?,
    };
    Ok(LinearScale::new(domain, range))
}
