// File: crates/chart-core/src/route.rs
// Summary: Route extraction for the map view: ordered (lat, lon) pairs and their bounds.

use crate::record::{Field, Record};

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct RoutePoint {
    pub lat: f64,
    pub lon: f64,
}

/// Records carrying both latitude and longitude, in capture order.
pub fn filter_route(records: &[Record]) -> Vec<RoutePoint> {
    records
        .iter()
        .filter_map(|r| match (r.get(Field::PositionLat), r.get(Field::PositionLong)) {
            (Some(lat), Some(lon)) => Some(RoutePoint { lat, lon }),
            _ => None,
        })
        .collect()
}

/// Bounding box of a route, used to seed the initial map view.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct RouteBounds {
    pub min_lat: f64,
    pub max_lat: f64,
    pub min_lon: f64,
    pub max_lon: f64,
}

impl RouteBounds {
    pub fn from_points(points: &[RoutePoint]) -> Option<Self> {
        let first = points.first()?;
        let init = Self { min_lat: first.lat, max_lat: first.lat, min_lon: first.lon, max_lon: first.lon };
        Some(points.iter().skip(1).fold(init, |b, p| Self {
            min_lat: b.min_lat.min(p.lat),
            max_lat: b.max_lat.max(p.lat),
            min_lon: b.min_lon.min(p.lon),
            max_lon: b.max_lon.max(p.lon),
        }))
    }

    pub fn center(&self) -> RoutePoint {
        RoutePoint {
            lat: (self.min_lat + self.max_lat) * 0.5,
            lon: (self.min_lon + self.max_lon) * 0.5,
        }
    }
}
